//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod championship;
pub mod pagination;
pub mod user;
pub mod user_championship;

pub use championship::*;
pub use pagination::*;
pub use user::*;
pub use user_championship::*;
