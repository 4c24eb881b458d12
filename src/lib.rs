//! Pathmap - declarative redirect and markdown rewrite rules for request paths.
//!
//! This library provides:
//! - Regex and exact-path rules producing a `Destination`
//! - A first-match `RuleEngine` over an immutable rule list
//! - Built-in locale redirects and `.md` export rewrites
//! - A `RequestInterceptor` that classifies each request path
//! - TOML configuration for extra rules
//!
//! # Example
//!
//! ```
//! use pathmap_cli::rules::{RuleEngine, markdown_rewrite_rules};
//!
//! let engine = RuleEngine::new(markdown_rewrite_rules().unwrap());
//!
//! assert!(engine.should_rewrite("/ja/blog/my-post.md"));
//! let destination = engine.rewrite_path("/ja/blog/my-post.md").unwrap();
//! assert_eq!(destination.to_uri(), "/api/markdown/blog/my-post?lang=ja");
//! ```

pub mod config;
pub mod error;
pub mod intercept;
pub mod rules;

pub use error::{PathmapError, Result};
pub use intercept::{Outcome, RequestInterceptor};
