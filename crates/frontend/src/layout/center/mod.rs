pub mod center;
pub mod home;
pub mod registry;

pub use center::Center;
