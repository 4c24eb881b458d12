use crate::error::{PathmapError, Result};
use crate::rules::template::Template;
use crate::rules::{Destination, LANG_PARAM};
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;

/// Named capture group holding the optional language prefix (e.g. `/ja`).
pub const LANG_GROUP: &str = "lang";

/// A rule backed by a regular expression with named capture groups.
#[derive(Debug, Clone)]
pub struct RegexRule {
	name: String,
	pattern: String,
	regex: Regex,
	template: Template,
	lang_param: bool,
}

impl RegexRule {
	/// Compile a regex rule.
	///
	/// The pattern is anchored on both ends, so it always has to match the
	/// whole path. Every `{name}` placeholder in `destination` must name a
	/// capture group in `pattern`. With `lang_param` set, the pattern must
	/// define a `lang` group, whose non-empty capture is turned into a
	/// `lang` query parameter instead of being part of the destination.
	pub fn new(
		name: impl Into<String>,
		pattern: &str,
		destination: &str,
		lang_param: bool,
	) -> Result<Self> {
		let regex = Regex::new(&format!("^(?:{pattern})$")).map_err(|source| {
			PathmapError::InvalidRegex {
				pattern: pattern.to_string(),
				source,
			}
		})?;
		let template = Template::parse(destination)?;

		let has_group = |group: &str| regex.capture_names().flatten().any(|n| n == group);

		if let Some(missing) = template.placeholders().find(|&p| !has_group(p)) {
			return Err(PathmapError::UnknownPlaceholder {
				template: destination.to_string(),
				placeholder: missing.to_string(),
			});
		}

		if lang_param && !has_group(LANG_GROUP) {
			return Err(PathmapError::MissingLangGroup {
				pattern: pattern.to_string(),
			});
		}

		Ok(RegexRule {
			name: name.into(),
			pattern: pattern.to_string(),
			regex,
			template,
			lang_param,
		})
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	/// Check whether the pattern matches the full path.
	pub fn matches(&self, path: &str) -> bool {
		self.regex.is_match(path)
	}

	/// Compute the destination for a path this rule matches.
	pub fn transform(&self, path: &str) -> Result<Destination> {
		let captures = self
			.regex
			.captures(path)
			.ok_or_else(|| PathmapError::RuleMismatch {
				rule: self.name.clone(),
				path: path.to_string(),
			})?;

		let pathname = self.template.render(&captures);

		// An empty capture counts as no prefix at all.
		let search_params = if self.lang_param {
			captures
				.name(LANG_GROUP)
				.map(|m| m.as_str().trim_start_matches('/'))
				.filter(|lang| !lang.is_empty())
				.map(|lang| BTreeMap::from([(LANG_PARAM.to_string(), lang.to_string())]))
		} else {
			None
		};

		Ok(Destination {
			pathname,
			search_params,
		})
	}
}

impl fmt::Display for RegexRule {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}: {} -> {}", self.name, self.pattern, self.template.as_str())?;
		if self.lang_param {
			write!(f, " [lang]")?;
		}
		Ok(())
	}
}
