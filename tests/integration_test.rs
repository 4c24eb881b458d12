#![allow(deprecated)] // assert_cmd::Command::cargo_bin is deprecated but replacement requires nightly

use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn pathmap_cmd(dir: &Path) -> assert_cmd::Command {
	let mut cmd = assert_cmd::Command::cargo_bin("pathmap").unwrap();
	cmd.current_dir(dir)
		.env("PATHMAP_NO_USER_CONFIG", "1")
		.env_remove("PATHMAP_LOG");
	cmd
}

// ============================================================================
// CLI flag tests
// ============================================================================

#[test]
fn test_help_flag() {
	let temp_dir = tempfile::tempdir().unwrap();
	pathmap_cmd(temp_dir.path())
		.arg("--help")
		.assert()
		.success()
		.stdout(predicate::str::contains("Resolve request paths"));
}

#[test]
fn test_version_flag() {
	let temp_dir = tempfile::tempdir().unwrap();
	pathmap_cmd(temp_dir.path())
		.arg("--version")
		.assert()
		.success()
		.stdout(predicate::str::contains("pathmap"));
}

#[test]
fn test_no_args_shows_help() {
	let temp_dir = tempfile::tempdir().unwrap();
	pathmap_cmd(temp_dir.path())
		.assert()
		.failure()
		.stderr(predicate::str::contains("Usage"));
}

// ============================================================================
// resolve tests
// ============================================================================

#[test]
fn test_resolve_builtin_rules() {
	let temp_dir = tempfile::tempdir().unwrap();
	pathmap_cmd(temp_dir.path())
		.args([
			"resolve",
			"/ja/blog/my-post.md",
			"/writing/dev-notes/my-note.md",
			"/jp/about",
			"/about.md",
		])
		.assert()
		.success()
		.stdout(predicate::str::contains(
			"/ja/blog/my-post.md\trewrite /api/markdown/blog/my-post?lang=ja",
		))
		.stdout(predicate::str::contains(
			"/writing/dev-notes/my-note.md\trewrite /api/markdown/dev-notes/my-note\n",
		))
		.stdout(predicate::str::contains("/jp/about\tredirect 308 /ja/about"))
		.stdout(predicate::str::contains("/about.md\tpass"));
}

#[test]
fn test_resolve_does_not_redirect_off_site() {
	let temp_dir = tempfile::tempdir().unwrap();
	pathmap_cmd(temp_dir.path())
		.args(["resolve", "/en//evil.com"])
		.assert()
		.success()
		.stdout(predicate::str::contains("/en//evil.com\tpass"));
}

#[test]
fn test_resolve_url_input() {
	let temp_dir = tempfile::tempdir().unwrap();
	pathmap_cmd(temp_dir.path())
		.args(["resolve", "https://example.com/news/n.md?utm=x"])
		.assert()
		.success()
		.stdout(predicate::str::contains(
			"/news/n.md\trewrite /api/markdown/news/n",
		));
}

#[test]
fn test_resolve_requires_input() {
	let temp_dir = tempfile::tempdir().unwrap();
	pathmap_cmd(temp_dir.path())
		.arg("resolve")
		.assert()
		.failure();
}

#[test]
fn test_resolve_with_config_rules() {
	let temp_dir = tempfile::tempdir().unwrap();
	fs::write(
		temp_dir.path().join(".pathmap.toml"),
		r#"
redirect-status = 301

[[redirects]]
name = "old-posts"
pattern = "/posts/(?P<slug>[^/]+)"
destination = "/blog/{slug}"
"#,
	)
	.unwrap();

	pathmap_cmd(temp_dir.path())
		.args(["resolve", "/posts/hello", "/jp"])
		.assert()
		.success()
		.stdout(predicate::str::contains("/posts/hello\tredirect 301 /blog/hello"))
		.stdout(predicate::str::contains("/jp\tredirect 301 /ja"));
}

#[test]
fn test_resolve_config_found_in_parent_directory() {
	let temp_dir = tempfile::tempdir().unwrap();
	let nested = temp_dir.path().join("content/posts");
	fs::create_dir_all(&nested).unwrap();
	fs::write(temp_dir.path().join(".pathmap.toml"), "builtin-rules = false").unwrap();

	pathmap_cmd(&nested)
		.args(["resolve", "/jp"])
		.assert()
		.success()
		.stdout(predicate::str::contains("/jp\tpass"));
}

#[test]
fn test_explicit_config_flag() {
	let temp_dir = tempfile::tempdir().unwrap();
	let config_path = temp_dir.path().join("custom.toml");
	fs::write(
		&config_path,
		r#"
[[rewrites]]
exact = "/feed"
destination = "/api/rss"
"#,
	)
	.unwrap();

	pathmap_cmd(temp_dir.path())
		.args(["resolve", "/feed", "--config"])
		.arg(&config_path)
		.assert()
		.success()
		.stdout(predicate::str::contains("/feed\trewrite /api/rss"));
}

#[test]
fn test_verbose_logs_rule_match() {
	let temp_dir = tempfile::tempdir().unwrap();
	pathmap_cmd(temp_dir.path())
		.args(["-v", "resolve", "/blog/a.md"])
		.assert()
		.success()
		.stderr(predicate::str::contains("blog-markdown"));
}

// ============================================================================
// rules tests
// ============================================================================

#[test]
fn test_rules_lists_builtin_tables() {
	let temp_dir = tempfile::tempdir().unwrap();
	pathmap_cmd(temp_dir.path())
		.arg("rules")
		.assert()
		.success()
		.stdout(predicate::str::contains("Redirect rules (status 308):"))
		.stdout(predicate::str::contains("1. legacy-jp-root: = /jp -> /ja"))
		.stdout(predicate::str::contains(
			"2. dev-notes-markdown: (?P<lang>/ja)?/writing/dev-notes/(?P<slug>[^/]+)\\.md -> /api/markdown/dev-notes/{slug}\n",
		))
		.stdout(predicate::str::contains("/api/markdown/news/{slug} [lang]"));
}

#[test]
fn test_rules_empty_tables() {
	let temp_dir = tempfile::tempdir().unwrap();
	fs::write(temp_dir.path().join(".pathmap.toml"), "builtin-rules = false").unwrap();

	pathmap_cmd(temp_dir.path())
		.arg("rules")
		.assert()
		.success()
		.stdout(predicate::str::contains("(none)"));
}

// ============================================================================
// config subcommand tests
// ============================================================================

#[test]
fn test_config_validate_no_config() {
	let temp_dir = tempfile::tempdir().unwrap();
	pathmap_cmd(temp_dir.path())
		.args(["config", "validate"])
		.assert()
		.success()
		.stdout(predicate::str::contains("Configuration is valid: defaults"));
}

#[test]
fn test_config_validate_valid_config() {
	let temp_dir = tempfile::tempdir().unwrap();
	fs::write(
		temp_dir.path().join(".pathmap.toml"),
		r#"
[[rewrites]]
pattern = "(?P<lang>/ja)?/talks/(?P<slug>[^/]+)\\.md"
destination = "/api/markdown/talks/{slug}"
lang_param = true
"#,
	)
	.unwrap();

	pathmap_cmd(temp_dir.path())
		.args(["config", "validate"])
		.assert()
		.success()
		.stdout(predicate::str::contains("4 redirect rules, 4 rewrite rules"));
}

#[test]
fn test_config_validate_invalid_toml() {
	let temp_dir = tempfile::tempdir().unwrap();
	fs::write(temp_dir.path().join(".pathmap.toml"), "invalid toml [[[").unwrap();

	pathmap_cmd(temp_dir.path())
		.args(["config", "validate"])
		.assert()
		.failure()
		.stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_config_validate_bad_placeholder() {
	let temp_dir = tempfile::tempdir().unwrap();
	fs::write(
		temp_dir.path().join(".pathmap.toml"),
		r#"
[[redirects]]
pattern = "/posts/(?P<slug>[^/]+)"
destination = "/blog/{id}"
"#,
	)
	.unwrap();

	pathmap_cmd(temp_dir.path())
		.args(["config", "validate"])
		.assert()
		.failure()
		.stderr(predicate::str::contains("undefined capture group: id"));
}

#[test]
fn test_config_show_displays_config() {
	let temp_dir = tempfile::tempdir().unwrap();
	fs::write(
		temp_dir.path().join(".pathmap.toml"),
		r#"
[[redirects]]
name = "old-posts"
pattern = "/posts/(?P<slug>[^/]+)"
destination = "/blog/{slug}"
"#,
	)
	.unwrap();

	pathmap_cmd(temp_dir.path())
		.args(["config", "show"])
		.assert()
		.success()
		.stdout(predicate::str::contains("# Source:"))
		.stdout(predicate::str::contains("[redirects] 1 rules"))
		.stdout(predicate::str::contains("- old-posts"))
		.stdout(predicate::str::contains("destination: /blog/{slug}"));
}

// ============================================================================
// init tests
// ============================================================================

#[test]
fn test_init_creates_config() {
	let temp_dir = tempfile::tempdir().unwrap();
	let config_path = temp_dir.path().join(".pathmap.toml");

	pathmap_cmd(temp_dir.path())
		.arg("init")
		.assert()
		.success()
		.stdout(predicate::str::contains("Created .pathmap.toml"));

	let content = fs::read_to_string(&config_path).unwrap();
	assert!(content.contains("builtin-rules = true"));
	assert!(content.contains("[[rewrites]]"));

	pathmap_cmd(temp_dir.path())
		.args(["config", "validate"])
		.assert()
		.success();
}

#[test]
fn test_init_fails_if_exists() {
	let temp_dir = tempfile::tempdir().unwrap();
	fs::write(temp_dir.path().join(".pathmap.toml"), "# existing").unwrap();

	pathmap_cmd(temp_dir.path())
		.arg("init")
		.assert()
		.failure()
		.stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_init_force_overwrites() {
	let temp_dir = tempfile::tempdir().unwrap();
	let config_path = temp_dir.path().join(".pathmap.toml");
	fs::write(&config_path, "# existing").unwrap();

	pathmap_cmd(temp_dir.path())
		.args(["init", "--force"])
		.assert()
		.success();

	let content = fs::read_to_string(&config_path).unwrap();
	assert!(content.contains("redirect-status = 308"));
}
