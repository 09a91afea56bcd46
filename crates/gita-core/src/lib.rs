pub mod catalog;
pub mod conversation;
pub mod error;
pub mod secret;
pub mod view;

// Re-export common error type
pub use error::{GitaError, Result};
