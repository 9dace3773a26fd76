//! Output document generation.

pub mod dot;

pub use dot::render_dot;
