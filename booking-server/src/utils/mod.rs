//! Utility module - shared helpers and types
//!
//! - [`AppError`] - application error type with HTTP mapping
//! - [`logger`] - tracing setup
//! - [`validation`] - input length/presence checks for handlers

pub mod error;
pub mod logger;
pub mod validation;

pub use error::{AppError, AppResponse, AppResult};
