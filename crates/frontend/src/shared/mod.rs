pub mod api;
pub mod api_utils;
pub mod cancel;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod icons;
pub mod list_utils;
pub mod modal_frame;
pub mod modal_stack;
pub mod number_format;
pub mod resource_list;
pub mod toast;
