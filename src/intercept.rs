//! Per-request classification into redirect, rewrite, or pass-through.

use crate::config::{Config, DEFAULT_REDIRECT_STATUS, compile_rules};
use crate::error::{PathmapError, Result};
use crate::rules::{Destination, Rule, RuleEngine, markdown_rewrite_rules, redirect_rules};
use std::fmt;
use tracing::warn;
use url::Url;

const BASE_URL: &str = "http://localhost/";

/// What the request handler should do with a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
	/// Send the client elsewhere with a 3xx response.
	Redirect { location: String, status: u16 },

	/// Serve the request from another handler, keeping the URL.
	Rewrite(Destination),

	/// No rule applies.
	Pass,
}

impl fmt::Display for Outcome {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Outcome::Redirect { location, status } => write!(f, "redirect {status} {location}"),
			Outcome::Rewrite(destination) => write!(f, "rewrite {destination}"),
			Outcome::Pass => write!(f, "pass"),
		}
	}
}

/// Holds the redirect and rewrite engines for the life of the server.
///
/// Build it once and share it (e.g. behind an `Arc`); it is immutable.
#[derive(Debug, Clone)]
pub struct RequestInterceptor {
	redirects: RuleEngine,
	rewrites: RuleEngine,
	redirect_status: u16,
}

impl RequestInterceptor {
	pub fn new(redirects: RuleEngine, rewrites: RuleEngine) -> Self {
		RequestInterceptor {
			redirects,
			rewrites,
			redirect_status: DEFAULT_REDIRECT_STATUS,
		}
	}

	pub fn with_redirect_status(mut self, status: u16) -> Self {
		self.redirect_status = status;
		self
	}

	/// Interceptor using only the built-in rule tables.
	pub fn builtin() -> Result<Self> {
		Ok(Self::new(
			RuleEngine::new(redirect_rules()?),
			RuleEngine::new(markdown_rewrite_rules()?),
		))
	}

	/// Interceptor from configured rules, placed before the built-ins
	/// unless `builtin-rules` is off.
	pub fn from_config(config: &Config) -> Result<Self> {
		config.validate()?;

		let mut redirects = compile_rules(&config.redirects)?;
		let mut rewrites = compile_rules(&config.rewrites)?;
		if config.builtin_rules {
			redirects.extend(redirect_rules()?);
			rewrites.extend(markdown_rewrite_rules()?);
		}

		Ok(Self::new(RuleEngine::new(redirects), RuleEngine::new(rewrites))
			.with_redirect_status(config.redirect_status))
	}

	/// Classify a request path. Redirects are checked before rewrites.
	///
	/// A redirect whose destination would leave the site (`//host` or
	/// `/\host`) is dropped and the path falls through to the rewrites.
	pub fn intercept(&self, path: &str) -> Result<Outcome> {
		if let Some(destination) = self.redirects.try_rewrite(path)? {
			if is_same_site(&destination.pathname) {
				return Ok(Outcome::Redirect {
					location: destination.to_uri(),
					status: self.redirect_status,
				});
			}
			warn!(path, location = %destination.pathname, "refusing off-site redirect");
		}

		if let Some(destination) = self.rewrites.try_rewrite(path)? {
			return Ok(Outcome::Rewrite(destination));
		}

		Ok(Outcome::Pass)
	}

	pub fn redirects(&self) -> &RuleEngine {
		&self.redirects
	}

	pub fn rewrites(&self) -> &RuleEngine {
		&self.rewrites
	}

	pub fn redirect_status(&self) -> u16 {
		self.redirect_status
	}

	/// All rules in evaluation order.
	pub fn rules(&self) -> impl Iterator<Item = &Rule> {
		self.redirects.rules().iter().chain(self.rewrites.rules())
	}
}

/// Whether a location is a path on this site. Absolute and
/// protocol-relative URLs are resolved by browsers against another host.
fn is_same_site(location: &str) -> bool {
	let mut chars = location.chars();
	chars.next() == Some('/') && !matches!(chars.next(), Some('/' | '\\'))
}

/// Reduce a path or absolute URL to its path component.
///
/// Query string and fragment are dropped. Non-ASCII characters come back
/// percent-encoded, as a server would receive them.
pub fn request_path(input: &str) -> Result<String> {
	let url = Url::parse(BASE_URL)
		.and_then(|base| base.join(input))
		.map_err(|source| PathmapError::InvalidUrl {
			input: input.to_string(),
			source,
		})?;
	Ok(url.path().to_string())
}
