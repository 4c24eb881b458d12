//! Built-in rule tables.
//!
//! Both tables are fixed and ordered. Rules in one table never overlap, so
//! order only matters for rules added in front of them from configuration.

use crate::error::Result;
use crate::rules::{ExactRule, RegexRule, Rule};

/// Internal rewrites from `.md` content paths to the markdown export handler.
///
/// Blog and news promote an optional `/ja` prefix to `lang=ja`. Dev notes
/// drop the prefix without a parameter; their handler serves a single
/// edition per slug.
pub fn markdown_rewrite_rules() -> Result<Vec<Rule>> {
	Ok(vec![
		RegexRule::new(
			"blog-markdown",
			r"(?P<lang>/ja)?/blog/(?P<slug>[^/]+)\.md",
			"/api/markdown/blog/{slug}",
			true,
		)?
		.into(),
		RegexRule::new(
			"dev-notes-markdown",
			r"(?P<lang>/ja)?/writing/dev-notes/(?P<slug>[^/]+)\.md",
			"/api/markdown/dev-notes/{slug}",
			false,
		)?
		.into(),
		RegexRule::new(
			"news-markdown",
			r"(?P<lang>/ja)?/news/(?P<slug>[^/]+)\.md",
			"/api/markdown/news/{slug}",
			true,
		)?
		.into(),
	])
}

/// Canonical-URL redirects for legacy locale prefixes.
///
/// `/jp` is an old alias of `/ja`. English is the default locale and lives
/// at the unprefixed path, so an explicit `/en` prefix is dropped.
///
/// `rest` never starts with `/` or `\`, so a destination can not turn into a
/// protocol-relative `//host` location.
pub fn redirect_rules() -> Result<Vec<Rule>> {
	Ok(vec![
		ExactRule::new("legacy-jp-root", "/jp", "/ja").into(),
		RegexRule::new("legacy-jp", LEGACY_JP, "/ja/{rest}", false)?.into(),
		ExactRule::new("default-locale-root", "/en", "/").into(),
		RegexRule::new("default-locale", DEFAULT_LOCALE, "/{rest}", false)?.into(),
	])
}

const LEGACY_JP: &str = r"/jp/(?P<rest>(?:[^/\\].*)?)";
const DEFAULT_LOCALE: &str = r"/en/(?P<rest>(?:[^/\\].*)?)";
