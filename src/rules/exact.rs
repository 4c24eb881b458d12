use crate::error::{PathmapError, Result};
use crate::rules::Destination;
use std::fmt;

/// A rule matching one literal path.
#[derive(Debug, Clone)]
pub struct ExactRule {
	name: String,
	path: String,
	destination: String,
}

impl ExactRule {
	pub fn new(
		name: impl Into<String>,
		path: impl Into<String>,
		destination: impl Into<String>,
	) -> Self {
		ExactRule {
			name: name.into(),
			path: path.into(),
			destination: destination.into(),
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn matches(&self, path: &str) -> bool {
		self.path == path
	}

	pub fn transform(&self, path: &str) -> Result<Destination> {
		if !self.matches(path) {
			return Err(PathmapError::RuleMismatch {
				rule: self.name.clone(),
				path: path.to_string(),
			});
		}
		Ok(Destination::new(self.destination.clone()))
	}
}

impl fmt::Display for ExactRule {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}: = {} -> {}", self.name, self.path, self.destination)
	}
}
