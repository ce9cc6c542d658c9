pub mod error;
pub mod models;
pub mod request;

pub use error::{LaunchFailure, Result};
pub use models::*;
pub use request::RequestSource;
