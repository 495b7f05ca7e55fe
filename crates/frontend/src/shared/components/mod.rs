pub mod confirm_dialog;
pub mod date_range_picker;
pub mod id_select;
pub mod page_header;
pub mod pagination_controls;
