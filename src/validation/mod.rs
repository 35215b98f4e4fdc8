//! Catalog validation.

mod validate;

pub use validate::*;
