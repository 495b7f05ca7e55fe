//! Wire contracts shared between the back-office frontend and the REST backend.
//!
//! Layout mirrors the frontend:
//! - `domain`      : one module per CRUD resource (aNNN)
//! - `projections` : read-only views (pNNN)
//! - `usecases`    : command requests (uNNN)
//! - `enums`       : status codes and their display labels

pub mod domain;
pub mod enums;
pub mod projections;
pub mod shared;
pub mod usecases;
