//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use fieldguard_validator::prelude::*;
//!
//! let validator = ValidatorBuilder::new(field).required().max_length(40).build();
//! ```

pub use crate::builder::ValidatorBuilder;
pub use crate::display::DisplayKind;
pub use crate::foundation::{BoxedRule, Validate, ValidationError, ValidationResult};
pub use crate::host::{ChangeListener, DecoratedContainer, HostField};
pub use crate::messages::{MessageKey, MessageSource, Messages, MessagesError};
pub use crate::validator::Validator;
pub use crate::validators::{
    Check, MaxLength, MinLength, Required, check, max_length, min_length, required,
};
