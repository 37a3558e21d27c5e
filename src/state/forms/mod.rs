//! Form state module
//!
//! - `field`: field value objects and validation rules
//! - `form_state`: the concrete lead forms

mod field;
mod form_state;

pub use field::*;
pub use form_state::*;
