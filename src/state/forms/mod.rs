//! Form state: fields, values, and the signup form itself

mod field;
mod form_state;

pub use field::*;
pub use form_state::*;
