use std::path::PathBuf;

/// Library-level structured errors for pathmap.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum PathmapError {
	#[error("No rule matches path: {path}")]
	NoMatchingRule { path: String },

	#[error("Rule '{rule}' was applied to a path it does not match: {path}")]
	RuleMismatch { rule: String, path: String },

	#[error("Invalid regex pattern in rule: {pattern}")]
	InvalidRegex {
		pattern: String,
		#[source]
		source: regex::Error,
	},

	#[error("Invalid destination template '{template}': {reason}")]
	InvalidTemplate { template: String, reason: String },

	#[error("Destination template '{template}' uses undefined capture group: {placeholder}")]
	UnknownPlaceholder {
		template: String,
		placeholder: String,
	},

	#[error("Rule promotes a language prefix but pattern has no 'lang' group: {pattern}")]
	MissingLangGroup { pattern: String },

	#[error("Mutually exclusive options: {option1} and {option2}")]
	MutuallyExclusive { option1: String, option2: String },

	#[error("Rule '{rule}' needs either a pattern or an exact path")]
	MissingMatcher { rule: String },

	#[error("Unsupported redirect status: {status} (expected 301, 302, 303, 307 or 308)")]
	InvalidRedirectStatus { status: u16 },

	#[error("Config file not found: {path}")]
	ConfigNotFound { path: PathBuf },

	#[error("Failed to read config file: {path}")]
	ConfigReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse config file: {path}")]
	ConfigParseError {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Failed to resolve home directory")]
	HomeDirectoryNotFound,

	#[error("Cannot extract a path from: {input}")]
	InvalidUrl {
		input: String,
		#[source]
		source: url::ParseError,
	},
}

/// Result type alias using PathmapError.
pub type Result<T> = std::result::Result<T, PathmapError>;
