/// Generate the contents of a starter `.pathmap.toml`.
pub fn generate_init_template() -> String {
	r#"# pathmap configuration
#
# Configured rules are tried before the built-in tables, first match wins.
# Patterns must match the whole request path. Destination placeholders such
# as {slug} are filled from named capture groups (?P<slug>...).

# Keep the built-in locale redirects and markdown rewrites.
builtin-rules = true

# Status code for redirects: 301, 302, 303, 307 or 308.
redirect-status = 308

# [[redirects]]
# name = "old-posts"
# pattern = "/posts/(?P<slug>[^/]+)"
# destination = "/blog/{slug}"

# [[rewrites]]
# name = "talks-markdown"
# pattern = "(?P<lang>/ja)?/talks/(?P<slug>[^/]+)\\.md"
# destination = "/api/markdown/talks/{slug}"
# lang_param = true

# [[rewrites]]
# exact = "/feed"
# destination = "/api/rss"
"#
	.to_string()
}
