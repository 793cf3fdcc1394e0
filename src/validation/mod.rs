//! Pure validation core: field values in, outcome out.
//!
//! Nothing in this module touches the terminal. Visual state is *reported*
//! through [`FieldStatus`] and applied by the UI controller, so every rule
//! here is testable without a rendering environment.

mod age;
mod error;
mod field;
mod form;

pub use age::*;
pub use error::*;
pub use field::*;
pub use form::*;
