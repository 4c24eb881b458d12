use crate::config::parser::parse_config_file;
use crate::config::types::{Config, LoadedConfig};
use crate::error::{PathmapError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File name searched for in the working directory and its ancestors.
pub const CONFIG_FILE_NAME: &str = ".pathmap.toml";

/// Environment variable that, if truthy, skips `~/.pathmap.toml`.
pub const NO_USER_CONFIG_ENV: &str = "PATHMAP_NO_USER_CONFIG";

/// Find and load the config that applies to `start_dir`.
///
/// The nearest `.pathmap.toml` in `start_dir` or one of its ancestors wins.
/// Without one, `~/.pathmap.toml` is used unless `PATHMAP_NO_USER_CONFIG`
/// is set. Returns `None` when no file exists.
pub fn discover_config(start_dir: &Path) -> Result<Option<LoadedConfig>> {
	for dir in start_dir.ancestors() {
		let candidate = dir.join(CONFIG_FILE_NAME);
		if candidate.is_file() {
			return load(candidate).map(Some);
		}
	}

	if is_env_truthy(NO_USER_CONFIG_ENV) {
		debug!("user config lookup disabled by {NO_USER_CONFIG_ENV}");
		return Ok(None);
	}

	let user_path = user_config_path()?;
	if user_path.is_file() {
		return load(user_path).map(Some);
	}

	debug!(start = %start_dir.display(), "no config file found");
	Ok(None)
}

/// Load an explicit config file, or discover one from `start_dir`.
///
/// Falls back to the default config when nothing is found.
pub fn load_config(explicit: Option<&Path>, start_dir: &Path) -> Result<LoadedConfig> {
	let loaded = match explicit {
		Some(path) => Some(load(path.to_path_buf())?),
		None => discover_config(start_dir)?,
	};

	Ok(loaded.unwrap_or_else(|| LoadedConfig {
		config: Config::default(),
		path: PathBuf::new(),
	}))
}

/// Get the path to the user's config file.
pub fn user_config_path() -> Result<PathBuf> {
	let home_dir = dirs::home_dir().ok_or(PathmapError::HomeDirectoryNotFound)?;
	Ok(home_dir.join(CONFIG_FILE_NAME))
}

fn load(path: PathBuf) -> Result<LoadedConfig> {
	let config = parse_config_file(&path)?;
	info!(path = %path.display(), "loaded config");
	Ok(LoadedConfig { config, path })
}

/// Check if an environment variable is set to a truthy value.
fn is_env_truthy(var_name: &str) -> bool {
	match std::env::var(var_name) {
		Ok(value) => {
			let lower = value.to_lowercase();
			!value.is_empty() && lower != "0" && lower != "false" && lower != "no"
		}
		Err(_) => false,
	}
}
