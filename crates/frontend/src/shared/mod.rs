pub mod api_utils;
pub mod components;
pub mod config;
pub mod notice;
pub mod telegram;
pub mod theme;
