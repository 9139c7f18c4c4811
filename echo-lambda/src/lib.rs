//! An AWS Lambda function that echoes the invocation payload back
//! in an HTTP-style response with a fixed success message.

pub mod config;
pub mod handler;
pub mod logging;

pub use config::Config;
pub use handler::{build_response, handler, Response};
pub use logging::init_tracing;
