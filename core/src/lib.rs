pub mod classify;
pub mod error;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "server")]
pub mod server;

pub use classify::{classify, Classification, MimeCategory};
pub use error::AppError;
