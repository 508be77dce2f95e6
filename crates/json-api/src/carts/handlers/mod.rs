//! Cart Handlers

pub(crate) mod clear;
pub(crate) mod create;
pub(crate) mod find;
pub(crate) mod get;
