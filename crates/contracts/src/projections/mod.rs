pub mod p900_stock;
pub mod p901_purchase;
pub mod p902_operation_details;
