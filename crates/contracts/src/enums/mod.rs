pub mod menu_status;
pub mod table_status;
