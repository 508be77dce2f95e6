//! Cart Items HTTP surface.

mod handlers;

pub(crate) use handlers::*;
