//! Rule types for path redirects and rewrites.
//!
//! This module handles:
//! - Regex-backed and exact-path rules behind one `Rule` type
//! - Destination templates filled from named capture groups
//! - The `Destination` record a matching rule produces
//! - The first-match `RuleEngine` and the built-in rule tables

pub mod builtin;
pub mod engine;
pub mod exact;
pub mod regex_rule;
pub mod template;

pub use builtin::{markdown_rewrite_rules, redirect_rules};
pub use engine::RuleEngine;
pub use exact::ExactRule;
pub use regex_rule::{LANG_GROUP, RegexRule};
pub use template::Template;

use crate::error::Result;
use std::collections::BTreeMap;
use std::fmt;
use url::form_urlencoded;

/// Query parameter carrying a promoted language prefix.
pub const LANG_PARAM: &str = "lang";

/// Where a matched path should go.
///
/// `search_params` is `None` when no query parameter applies, which callers
/// read as "use the default language".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
	/// Absolute path to rewrite or redirect to.
	pub pathname: String,

	/// Extra query parameters, if any.
	pub search_params: Option<BTreeMap<String, String>>,
}

impl Destination {
	/// A destination with no query parameters.
	pub fn new(pathname: impl Into<String>) -> Self {
		Destination {
			pathname: pathname.into(),
			search_params: None,
		}
	}

	/// Add a query parameter.
	pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.search_params
			.get_or_insert_with(BTreeMap::new)
			.insert(key.into(), value.into());
		self
	}

	/// Render the pathname plus an encoded query string.
	pub fn to_uri(&self) -> String {
		match &self.search_params {
			Some(params) if !params.is_empty() => {
				let query = form_urlencoded::Serializer::new(String::new())
					.extend_pairs(params.iter())
					.finish();
				format!("{}?{}", self.pathname, query)
			}
			_ => self.pathname.clone(),
		}
	}
}

impl fmt::Display for Destination {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_uri())
	}
}

/// A single match-and-transform rule.
#[derive(Debug, Clone)]
pub enum Rule {
	Regex(RegexRule),
	Exact(ExactRule),
}

impl Rule {
	pub fn name(&self) -> &str {
		match self {
			Rule::Regex(rule) => rule.name(),
			Rule::Exact(rule) => rule.name(),
		}
	}

	/// Check whether this rule applies to the path.
	pub fn matches(&self, path: &str) -> bool {
		match self {
			Rule::Regex(rule) => rule.matches(path),
			Rule::Exact(rule) => rule.matches(path),
		}
	}

	/// Compute the destination for a matching path.
	///
	/// Fails with `RuleMismatch` when `matches` would return false.
	pub fn transform(&self, path: &str) -> Result<Destination> {
		match self {
			Rule::Regex(rule) => rule.transform(path),
			Rule::Exact(rule) => rule.transform(path),
		}
	}
}

impl From<RegexRule> for Rule {
	fn from(rule: RegexRule) -> Self {
		Rule::Regex(rule)
	}
}

impl From<ExactRule> for Rule {
	fn from(rule: ExactRule) -> Self {
		Rule::Exact(rule)
	}
}

impl fmt::Display for Rule {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Rule::Regex(rule) => fmt::Display::fmt(rule, f),
			Rule::Exact(rule) => fmt::Display::fmt(rule, f),
		}
	}
}
