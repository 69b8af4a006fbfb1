pub mod config;
pub mod error;
pub mod logging;

pub mod format;
pub mod url_model;

pub use error::GurlError;
pub use format::{render, Directive};
pub use url_model::{Credentials, DecomposedUrl};
