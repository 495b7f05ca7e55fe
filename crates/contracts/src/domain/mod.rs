pub mod a001_category;
pub mod a002_floor;
pub mod a003_table;
pub mod a004_unit;
pub mod a005_ingredient_group;
pub mod a006_ingredient;
pub mod a007_menu;
pub mod a008_customer;
pub mod a009_menu_ingredient;
pub mod common;
