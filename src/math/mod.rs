//! Mathematical helpers for filter design.
pub mod special_funs;

pub use special_funs::besseli0;
pub use special_funs::sinc;
