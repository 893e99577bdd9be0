//! Built-in rules
//!
//! - **Text**: [`Required`], [`MinLength`], [`MaxLength`]
//! - **Any value**: [`Check`]

mod check;
mod length;
mod required;

pub use check::{Check, check};
pub use length::{MaxLength, MinLength, max_length, min_length};
pub use required::{Required, required};
