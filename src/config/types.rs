use crate::error::{PathmapError, Result};
use crate::rules::{ExactRule, RegexRule, Rule};
use serde::Deserialize;
use std::path::PathBuf;

/// Redirect status used when the config does not set one.
pub const DEFAULT_REDIRECT_STATUS: u16 = 308;

const REDIRECT_STATUSES: [u16; 5] = [301, 302, 303, 307, 308];

/// Top-level configuration from a `.pathmap.toml` file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
	/// Keep the built-in rule tables after the configured rules.
	#[serde(default = "default_true")]
	pub builtin_rules: bool,

	/// HTTP status sent with redirects.
	#[serde(default = "default_redirect_status")]
	pub redirect_status: u16,

	/// Extra redirect rules, tried before the built-in ones.
	#[serde(default)]
	pub redirects: Vec<RuleSpec>,

	/// Extra internal rewrite rules, tried before the built-in ones.
	#[serde(default)]
	pub rewrites: Vec<RuleSpec>,
}

impl Default for Config {
	fn default() -> Self {
		Config {
			builtin_rules: true,
			redirect_status: DEFAULT_REDIRECT_STATUS,
			redirects: Vec::new(),
			rewrites: Vec::new(),
		}
	}
}

fn default_true() -> bool {
	true
}

fn default_redirect_status() -> u16 {
	DEFAULT_REDIRECT_STATUS
}

/// A rule as written in the config file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RuleSpec {
	/// Display name; defaults to the pattern or exact path.
	pub name: Option<String>,

	/// Regex the whole path must match (mutually exclusive with exact).
	pub pattern: Option<String>,

	/// Literal path to match (mutually exclusive with pattern).
	pub exact: Option<String>,

	/// Destination path; `{name}` placeholders take named capture groups.
	pub destination: String,

	/// Turn a non-empty `lang` capture into a `lang` query parameter.
	#[serde(default)]
	pub lang_param: bool,
}

/// A loaded configuration with its source path for display.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
	/// The parsed configuration.
	pub config: Config,

	/// The path this config was loaded from.
	pub path: PathBuf,
}

impl RuleSpec {
	/// Name shown in listings and logs.
	pub fn display_name(&self) -> &str {
		self.name
			.as_deref()
			.or(self.pattern.as_deref())
			.or(self.exact.as_deref())
			.unwrap_or("<unnamed>")
	}

	/// Check that exactly one matcher is set and options fit it.
	pub fn validate(&self) -> Result<()> {
		match (&self.pattern, &self.exact) {
			(Some(_), Some(_)) => Err(PathmapError::MutuallyExclusive {
				option1: "pattern".to_string(),
				option2: "exact".to_string(),
			}),
			(None, None) => Err(PathmapError::MissingMatcher {
				rule: self.display_name().to_string(),
			}),
			(None, Some(_)) if self.lang_param => Err(PathmapError::MutuallyExclusive {
				option1: "exact".to_string(),
				option2: "lang_param".to_string(),
			}),
			_ => Ok(()),
		}
	}

	/// Compile into a rule.
	pub fn compile(&self) -> Result<Rule> {
		self.validate()?;
		let name = self.display_name();

		match (&self.pattern, &self.exact) {
			(Some(pattern), _) => {
				Ok(RegexRule::new(name, pattern, &self.destination, self.lang_param)?.into())
			}
			(None, Some(exact)) => {
				Ok(ExactRule::new(name, exact.as_str(), self.destination.as_str()).into())
			}
			(None, None) => Err(PathmapError::MissingMatcher {
				rule: name.to_string(),
			}),
		}
	}
}

impl Config {
	/// Validate the redirect status and every rule.
	pub fn validate(&self) -> Result<()> {
		if !REDIRECT_STATUSES.contains(&self.redirect_status) {
			return Err(PathmapError::InvalidRedirectStatus {
				status: self.redirect_status,
			});
		}
		for rule in self.redirects.iter().chain(&self.rewrites) {
			rule.validate()?;
		}
		Ok(())
	}
}

/// Compile a list of rule specs, keeping their order.
pub fn compile_rules(specs: &[RuleSpec]) -> Result<Vec<Rule>> {
	specs.iter().map(RuleSpec::compile).collect()
}
