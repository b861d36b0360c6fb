pub mod notice_banner;
pub mod ui;

pub use notice_banner::NoticeBanner;
