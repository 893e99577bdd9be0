//! # fieldguard-validator
//!
//! Rule-chain validation for interactive input fields.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fieldguard_validator::prelude::*;
//!
//! // `password` implements `HostField<Value = str>`.
//! let validator = ValidatorBuilder::new(password)
//!     .required()
//!     .min_length_with(8, "Use at least # characters")
//!     .build();
//!
//! // Runs automatically after every edit; run it explicitly on submit too.
//! if validator.validate() {
//!     submit();
//! }
//! ```
//!
//! ## Pieces
//!
//! - [`HostField`] / [`DecoratedContainer`]: what a UI toolkit implements.
//! - [`ValidatorBuilder`]: collects rules in order and wires live validation.
//! - [`Validator`]: runs the chain, shows the first failure or clears.
//! - [`validators`]: built-in rules ([`Required`](validators::Required),
//!   [`MinLength`](validators::MinLength), [`MaxLength`](validators::MaxLength),
//!   [`Check`](validators::Check)).
//! - [`messages`]: default message catalogue and template substitution.
//!
//! ## Threading
//!
//! Validators are `Rc`-based and stay on the UI thread that owns the field.

pub mod builder;
pub mod display;
pub mod foundation;
pub mod host;
pub mod messages;
pub mod prelude;
pub mod validator;
pub mod validators;

pub use builder::ValidatorBuilder;
pub use display::DisplayKind;
pub use host::{ChangeListener, DecoratedContainer, HostField};
pub use validator::Validator;
