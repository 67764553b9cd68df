pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::CliConfig;
pub use core::{classifier::classify, engine::LoginEngine, portal::SsoPortal};
pub use domain::model::{Credentials, LoginOutcome};
pub use utils::error::{LoginError, Result};
