//! Core error types shared by every stage of a run.

pub mod error;

pub use error::{ErrorContext, ResolveError, UnveilError, user_friendly_error};
