pub mod u501_add_stock;
