pub mod api_utils;
pub mod components;
pub mod config;
pub mod excel_importer;
pub mod icons;
pub mod navigation;
