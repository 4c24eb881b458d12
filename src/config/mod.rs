//! Configuration loading and parsing for pathmap.
//!
//! This module handles:
//! - TOML config file parsing and validation
//! - Config discovery from the working directory upward
//! - Compiling configured rules

pub mod discovery;
pub mod init;
pub mod parser;
pub mod types;

pub use discovery::{CONFIG_FILE_NAME, discover_config, load_config, user_config_path};
pub use init::generate_init_template;
pub use parser::{parse_config_file, parse_config_str};
pub use types::{Config, DEFAULT_REDIRECT_STATUS, LoadedConfig, RuleSpec, compile_rules};
