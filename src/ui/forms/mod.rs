//! Form rendering

mod field_renderer;
mod signup;

pub use signup::draw_signup;
