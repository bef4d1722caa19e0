pub mod shared {
    pub mod field_config;
    pub mod filtering;
    pub mod form_settings;
    pub mod list_response;
    pub mod list_state;
    pub mod locale;
    pub mod module_settings;
    pub mod pagination;
    pub mod sorting;
}

pub mod system {
    pub mod auth;
    pub mod users;
}
