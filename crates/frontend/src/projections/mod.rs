pub mod p900_stock;
pub mod p901_purchase;
