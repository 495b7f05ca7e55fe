//! Typed access to the backend REST API

pub mod client;
pub mod crud;
pub mod error;

pub use client::ApiClient;
pub use error::ApiError;
