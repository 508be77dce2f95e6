//! Authentication

pub mod errors;
pub mod models;
pub mod password;
mod repository;
pub mod service;
pub mod token;

pub use errors::AuthServiceError;
pub use service::*;
pub use token::TokenSigner;
