pub mod list;
pub mod operation_details;
