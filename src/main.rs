use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use pathmap_cli::config::{CONFIG_FILE_NAME, LoadedConfig, generate_init_template, load_config};
use pathmap_cli::intercept::{RequestInterceptor, request_path};
use pathmap_cli::rules::RuleEngine;

/// Environment variable holding a `tracing` filter directive.
const LOG_ENV: &str = "PATHMAP_LOG";

#[derive(Parser)]
#[command(name = "pathmap")]
#[command(
	author,
	version,
	about = "Resolve request paths against redirect and markdown rewrite rules"
)]
#[command(arg_required_else_help = true)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	/// Use this config file instead of searching for .pathmap.toml
	#[arg(long, global = true, value_name = "FILE")]
	config: Option<PathBuf>,

	/// Log rule evaluation to stderr (-v debug, -vv trace)
	#[arg(short, long, global = true, action = clap::ArgAction::Count)]
	verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
	/// Classify request paths or URLs as redirect, rewrite, or pass
	Resolve {
		/// Paths or absolute URLs to resolve
		#[arg(required = true)]
		inputs: Vec<String>,
	},
	/// List the effective rules in evaluation order
	Rules,
	/// Configuration management commands
	Config {
		#[command(subcommand)]
		action: ConfigAction,
	},
	/// Create a template .pathmap.toml in the current directory
	Init {
		/// Overwrite an existing .pathmap.toml
		#[arg(long)]
		force: bool,
	},
}

#[derive(Subcommand)]
enum ConfigAction {
	/// Display the config in effect and where it came from
	Show,
	/// Check the config for errors without resolving anything
	Validate,
}

fn main() -> ExitCode {
	let cli = Cli::parse();
	init_logging(cli.verbose);

	match run(cli) {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn init_logging(verbose: u8) {
	let default_level = match verbose {
		0 => "warn",
		1 => "debug",
		_ => "trace",
	};
	let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_ansi(std::io::stderr().is_terminal())
		.with_target(false)
		.init();
}

fn run(cli: Cli) -> Result<ExitCode> {
	let config_path = cli.config.as_deref();

	match cli.command {
		Commands::Resolve { inputs } => handle_resolve(config_path, &inputs),
		Commands::Rules => handle_rules(config_path),
		Commands::Config { action } => match action {
			ConfigAction::Show => handle_config_show(config_path),
			ConfigAction::Validate => handle_config_validate(config_path),
		},
		Commands::Init { force } => handle_init(force),
	}
}

fn load(config_path: Option<&Path>) -> Result<LoadedConfig> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;
	load_config(config_path, &cwd).context("Failed to load configuration")
}

fn build_interceptor(config_path: Option<&Path>) -> Result<RequestInterceptor> {
	let loaded = load(config_path)?;
	RequestInterceptor::from_config(&loaded.config).context("Failed to compile rules")
}

fn handle_resolve(config_path: Option<&Path>, inputs: &[String]) -> Result<ExitCode> {
	let interceptor = build_interceptor(config_path)?;

	for input in inputs {
		let path = request_path(input)?;
		let outcome = interceptor
			.intercept(&path)
			.with_context(|| format!("Failed to resolve {path}"))?;
		println!("{path}\t{outcome}");
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_rules(config_path: Option<&Path>) -> Result<ExitCode> {
	let interceptor = build_interceptor(config_path)?;

	println!("Redirect rules (status {}):", interceptor.redirect_status());
	print_rules(interceptor.redirects());
	println!();
	println!("Rewrite rules:");
	print_rules(interceptor.rewrites());

	Ok(ExitCode::SUCCESS)
}

fn print_rules(engine: &RuleEngine) {
	if engine.is_empty() {
		println!("  (none)");
	}
	for (i, rule) in engine.rules().iter().enumerate() {
		println!("  {}. {}", i + 1, rule);
	}
}

fn handle_config_show(config_path: Option<&Path>) -> Result<ExitCode> {
	let loaded = load(config_path)?;
	let config = &loaded.config;

	if loaded.path.as_os_str().is_empty() {
		println!("# Source: none (defaults)");
	} else {
		println!("# Source: {}", loaded.path.display());
	}
	println!("# builtin-rules: {}", config.builtin_rules);
	println!("# redirect-status: {}", config.redirect_status);
	println!();

	for (title, specs) in [("redirects", &config.redirects), ("rewrites", &config.rewrites)] {
		println!("[{}] {} rules", title, specs.len());
		for spec in specs {
			println!("  - {}", spec.display_name());
			if let Some(ref pattern) = spec.pattern {
				println!("    pattern: {}", pattern);
			}
			if let Some(ref exact) = spec.exact {
				println!("    exact: {}", exact);
			}
			println!("    destination: {}", spec.destination);
			if spec.lang_param {
				println!("    lang_param: true");
			}
		}
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_config_validate(config_path: Option<&Path>) -> Result<ExitCode> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;

	let result = load_config(config_path, &cwd).and_then(|loaded| {
		let interceptor = RequestInterceptor::from_config(&loaded.config)?;
		Ok((loaded, interceptor))
	});

	match result {
		Ok((loaded, interceptor)) => {
			let source = if loaded.path.as_os_str().is_empty() {
				"defaults".to_string()
			} else {
				loaded.path.display().to_string()
			};
			println!(
				"Configuration is valid: {} ({} redirect rules, {} rewrite rules)",
				source,
				interceptor.redirects().len(),
				interceptor.rewrites().len()
			);
			Ok(ExitCode::SUCCESS)
		}
		Err(e) => {
			eprintln!("Configuration error: {}", e);
			Ok(ExitCode::FAILURE)
		}
	}
}

fn handle_init(force: bool) -> Result<ExitCode> {
	let config_path = PathBuf::from(CONFIG_FILE_NAME);

	if config_path.exists() && !force {
		anyhow::bail!("{CONFIG_FILE_NAME} already exists. Use --force to overwrite.");
	}

	std::fs::write(&config_path, generate_init_template())
		.with_context(|| format!("Failed to write {}", config_path.display()))?;

	println!("Created {CONFIG_FILE_NAME}");
	Ok(ExitCode::SUCCESS)
}
