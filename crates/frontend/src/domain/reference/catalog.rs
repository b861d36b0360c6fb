//! Static descriptors of the four reference sets.
//!
//! One loader template, four instances: endpoint, optional parent filter and
//! the fixed texts the selector shows in each state.

/// Описание справочника для загрузчика и выпадающего списка
#[derive(Debug, PartialEq, Eq)]
pub struct ReferenceSpec {
    /// Ключ для логов
    pub key: &'static str,
    /// Путь относительно базового пути API
    pub path: &'static str,
    /// Параметр фильтра по родителю (`?city_id=`), для зависимых списков
    pub parent_param: Option<&'static str>,
    /// Первая опция готового списка
    pub prompt: &'static str,
    pub loading: &'static str,
    /// Список пуст для выбранного родителя
    pub empty: &'static str,
    pub error: &'static str,
    /// Родитель не выбран
    pub locked: &'static str,
    /// Префикс уведомления об ошибке загрузки
    pub error_notice: &'static str,
}

pub static CITIES: ReferenceSpec = ReferenceSpec {
    key: "cities",
    path: "/cities",
    parent_param: None,
    prompt: "Выберите город",
    loading: "Загрузка...",
    empty: "Нет доступных городов",
    error: "Ошибка загрузки городов",
    locked: "Выберите город",
    error_notice: "Ошибка загрузки городов",
};

pub static OBJECTS: ReferenceSpec = ReferenceSpec {
    key: "objects",
    path: "/objects",
    parent_param: Some("city_id"),
    prompt: "Выберите объект",
    loading: "Загрузка...",
    empty: "Нет объектов для выбранного города",
    error: "Ошибка загрузки объектов",
    locked: "Сначала выберите город",
    error_notice: "Ошибка загрузки объектов",
};

pub static VIOLATION_CATEGORIES: ReferenceSpec = ReferenceSpec {
    key: "violation-categories",
    path: "/violation-categories",
    parent_param: None,
    prompt: "Выберите категорию",
    loading: "Загрузка...",
    empty: "Нет доступных категорий",
    error: "Ошибка загрузки категорий",
    locked: "Выберите категорию",
    error_notice: "Ошибка загрузки категорий",
};

pub static VIOLATIONS: ReferenceSpec = ReferenceSpec {
    key: "violations",
    path: "/violations",
    parent_param: Some("category_id"),
    prompt: "Выберите нарушение",
    loading: "Загрузка...",
    empty: "Нет нарушений для выбранной категории",
    error: "Ошибка загрузки нарушений",
    locked: "Сначала выберите категорию",
    error_notice: "Ошибка загрузки нарушений",
};
