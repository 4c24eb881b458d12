use crate::error::{PathmapError, Result};
use crate::rules::{Destination, Rule};
use tracing::{debug, trace};

/// An ordered, immutable list of rules. The first matching rule wins.
#[derive(Debug, Clone, Default)]
pub struct RuleEngine {
	rules: Vec<Rule>,
}

impl RuleEngine {
	pub fn new(rules: Vec<Rule>) -> Self {
		RuleEngine { rules }
	}

	/// Find the first rule matching the path.
	pub fn find(&self, path: &str) -> Option<&Rule> {
		let found = self.rules.iter().find(|rule| rule.matches(path));
		match found {
			Some(rule) => debug!(rule = rule.name(), path, "rule matched"),
			None => trace!(path, "no rule matched"),
		}
		found
	}

	/// Check whether any rule matches the path.
	pub fn should_rewrite(&self, path: &str) -> bool {
		self.rules.iter().any(|rule| rule.matches(path))
	}

	/// Transform the path with the first matching rule.
	///
	/// Fails with `NoMatchingRule` if nothing matches, so callers should
	/// check `should_rewrite` first (or use `try_rewrite`).
	pub fn rewrite_path(&self, path: &str) -> Result<Destination> {
		self.try_rewrite(path)?
			.ok_or_else(|| PathmapError::NoMatchingRule {
				path: path.to_string(),
			})
	}

	/// Like `rewrite_path`, but a miss is `Ok(None)`.
	///
	/// Only a rule that matches and then fails to transform is an error.
	pub fn try_rewrite(&self, path: &str) -> Result<Option<Destination>> {
		self.find(path).map(|rule| rule.transform(path)).transpose()
	}

	pub fn rules(&self) -> &[Rule] {
		&self.rules
	}

	pub fn len(&self) -> usize {
		self.rules.len()
	}

	pub fn is_empty(&self) -> bool {
		self.rules.is_empty()
	}
}
