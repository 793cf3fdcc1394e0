//! Reusable UI components

mod button;
mod dialog;

pub use button::*;
pub use dialog::*;
