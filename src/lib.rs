#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, toml_config::TomlConfig, Settings};
pub use core::registry::PetRegistry;
pub use domain::model::PetRecord;
pub use domain::ports::Storage;
pub use utils::error::{PetError, Result};
