pub mod field_config_form;
pub mod pagination_controls;
