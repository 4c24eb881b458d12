use crate::error::{PathmapError, Result};
use regex::Captures;

/// One piece of a parsed destination template.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
	Literal(String),
	Capture(String),
}

/// Destination path template such as `/api/markdown/blog/{slug}`.
///
/// Each `{name}` placeholder is filled from the named capture group `name`.
#[derive(Debug, Clone)]
pub struct Template {
	source: String,
	segments: Vec<Segment>,
}

impl Template {
	/// Parse a template string into literal and placeholder segments.
	pub fn parse(template: &str) -> Result<Self> {
		let invalid = |reason: &str| PathmapError::InvalidTemplate {
			template: template.to_string(),
			reason: reason.to_string(),
		};

		let mut segments = Vec::new();
		let mut literal = String::new();
		let mut chars = template.chars();

		while let Some(c) = chars.next() {
			match c {
				'{' => {
					let mut name = String::new();
					let mut closed = false;
					for c in chars.by_ref() {
						if c == '}' {
							closed = true;
							break;
						}
						name.push(c);
					}

					if !closed {
						return Err(invalid("unterminated placeholder"));
					}
					if name.is_empty() {
						return Err(invalid("empty placeholder"));
					}
					if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
						return Err(invalid("placeholder names may only contain [A-Za-z0-9_]"));
					}

					if !literal.is_empty() {
						segments.push(Segment::Literal(std::mem::take(&mut literal)));
					}
					segments.push(Segment::Capture(name));
				}
				'}' => return Err(invalid("unmatched '}'")),
				_ => literal.push(c),
			}
		}

		if !literal.is_empty() {
			segments.push(Segment::Literal(literal));
		}

		Ok(Template {
			source: template.to_string(),
			segments,
		})
	}

	/// Names of all placeholders, in template order.
	pub fn placeholders(&self) -> impl Iterator<Item = &str> {
		self.segments.iter().filter_map(|segment| match segment {
			Segment::Capture(name) => Some(name.as_str()),
			Segment::Literal(_) => None,
		})
	}

	/// Substitute captures into the template.
	///
	/// Groups that did not participate in the match render as the empty
	/// string. Captured text is inserted verbatim, without re-encoding.
	pub fn render(&self, captures: &Captures<'_>) -> String {
		let mut out = String::with_capacity(self.source.len());
		for segment in &self.segments {
			match segment {
				Segment::Literal(text) => out.push_str(text),
				Segment::Capture(name) => {
					if let Some(m) = captures.name(name) {
						out.push_str(m.as_str());
					}
				}
			}
		}
		out
	}

	/// The original template text.
	pub fn as_str(&self) -> &str {
		&self.source
	}
}
