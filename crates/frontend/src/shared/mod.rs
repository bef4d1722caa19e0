pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod icons;
pub mod list;
pub mod list_utils;
pub mod locale;
pub mod module_settings;
pub mod page_frame;
pub mod pagination;
