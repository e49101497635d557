//! a001 Business: регистрация предприятия и массовый импорт из Excel

pub mod api;
pub mod ui;

#[cfg(test)]
mod testing;

/// Маршрут списка предприятий, куда уходим после успешного сохранения или импорта
pub const BUSINESS_LIST_ROUTE: &str = "/businesses";

/// Маршрут формы новой записи
pub const BUSINESS_NEW_ROUTE: &str = "/businesses/new";
