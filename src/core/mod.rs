pub mod classifier;
pub mod engine;
pub mod portal;

pub use crate::domain::model::{Credentials, LoginOutcome};
pub use crate::domain::ports::{ConfigProvider, Portal};
pub use crate::utils::error::Result;
