//! Utility functions

pub mod crypto;
pub mod token;
pub mod validation;

pub use crypto::{hash_password, verify_password};
pub use token::{Claims, IssuedToken, TokenIssuer};
pub use validation::{is_blank, require_filled};
