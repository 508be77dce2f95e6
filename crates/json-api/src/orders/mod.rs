//! Orders HTTP surface.

pub(crate) mod errors;
mod handlers;

pub(crate) use handlers::*;
