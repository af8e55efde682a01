use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use merge_yaml_cli::config::{discover_configs, load_settings, merge_settings, user_config_path};
use merge_yaml_cli::document::parse_file_list;
use merge_yaml_cli::merge::{KeyPath, merge_files};
use merge_yaml_cli::output::{OutputFormat, failure_annotation, render, write_output};

#[derive(Parser)]
#[command(name = "merge-yaml")]
#[command(
	author,
	version,
	about = "CLI tool for deep-merging YAML config files and extracting values by key path"
)]
struct Cli {
	#[command(subcommand)]
	command: Option<Commands>,

	/// YAML files to merge; later files take precedence
	#[arg(value_name = "FILE")]
	files: Vec<PathBuf>,

	/// Newline-separated list of YAML files, merged before FILE arguments
	#[arg(long, value_name = "LIST", env = "INPUT_CONFIG-FILES")]
	config_files: Option<String>,

	/// JSON array of keys selecting a value from the merged document
	#[arg(long, value_name = "JSON", env = "INPUT_KEY-PATH")]
	key_path: Option<String>,

	/// Output format (overrides .merge-yaml.toml)
	#[arg(long, value_enum)]
	format: Option<OutputFormat>,

	/// Pretty-print JSON output
	#[arg(long)]
	pretty: bool,

	/// Name of the output written to the GitHub output file
	#[arg(long, value_name = "NAME")]
	output_name: Option<String>,

	/// Append the result to this GitHub Actions output file instead of stdout
	#[arg(long, value_name = "PATH", env = "GITHUB_OUTPUT")]
	github_output: Option<PathBuf>,

	/// Enable verbose logging (sets log level to DEBUG)
	#[arg(short, long, global = true)]
	verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
	/// Settings management commands
	Config {
		#[command(subcommand)]
		action: ConfigAction,
	},
}

#[derive(Subcommand)]
enum ConfigAction {
	/// Display discovered .merge-yaml.toml files and the effective settings
	Show,
}

fn main() -> ExitCode {
	let cli = Cli::parse();
	init_tracing(cli.verbose);

	// Under GitHub Actions failures are reported as workflow annotations.
	let annotate_failures = cli.github_output.is_some();

	match run(cli) {
		Ok(code) => code,
		Err(e) => {
			if annotate_failures {
				println!("{}", failure_annotation(&format!("{e:#}")));
			} else {
				eprintln!("error: {e:?}");
			}
			ExitCode::FAILURE
		}
	}
}

fn init_tracing(verbose: bool) {
	// RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
	let filter = if verbose {
		EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
	} else {
		EnvFilter::from_default_env().add_directive(Level::WARN.into())
	};
	let _ = tracing_subscriber::registry()
		.with(fmt::layer().with_writer(std::io::stderr))
		.with(filter)
		.try_init();
}

fn run(mut cli: Cli) -> Result<ExitCode> {
	match cli.command.take() {
		Some(Commands::Config { action }) => match action {
			ConfigAction::Show => handle_config_show(),
		},
		None => handle_merge(cli),
	}
}

fn handle_merge(cli: Cli) -> Result<ExitCode> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;
	let settings = load_settings(&cwd).context("Failed to load settings")?;

	let format = cli.format.unwrap_or(settings.output_format);
	let pretty = cli.pretty || settings.pretty;
	let output_name = cli.output_name.unwrap_or(settings.output_name);

	let mut paths = cli
		.config_files
		.as_deref()
		.map(parse_file_list)
		.unwrap_or_default();
	paths.extend(cli.files);
	info!(files = ?paths, "input files");

	let key_path = match cli.key_path.as_deref() {
		Some(input) => KeyPath::parse_json(input).context("Failed to parse --key-path")?,
		None => None,
	};

	let value = merge_files(&paths, key_path.as_ref()).context("Failed to merge YAML files")?;
	let rendered = render(&value, format, pretty).context("Failed to serialize output")?;

	match cli.github_output {
		Some(output_path) => {
			write_output(&output_path, &output_name, &rendered).with_context(|| {
				format!("Failed to set output {output_name}")
			})?;
		}
		None => println!("{rendered}"),
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_config_show() -> Result<ExitCode> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;
	let configs = discover_configs(&cwd).context("Failed to discover config files")?;

	if configs.is_empty() {
		println!("No configuration files found.");
	} else {
		println!("Configuration files (in cascade order):\n");

		for loaded in &configs {
			println!("# Source: {}", loaded.path.display());
			println!("# root: {}", loaded.config.root);
			if let Some(format) = loaded.config.output_format {
				println!("# output-format: {}", format.as_str());
			}
			if let Some(pretty) = loaded.config.pretty {
				println!("# pretty: {}", pretty);
			}
			if let Some(ref name) = loaded.config.output_name {
				println!("# output-name: {}", name);
			}
			if let Some(ref env_var) = loaded.config.user_config_lookup_disable_env_var {
				println!("# user-config-lookup-disable-env-var: {}", env_var);
			}
			println!();
		}
	}

	let settings = merge_settings(&configs);
	println!("Effective settings:");
	println!("  output-format: {}", settings.output_format.as_str());
	println!("  pretty: {}", settings.pretty);
	println!("  output-name: {}", settings.output_name);

	// Show user config path
	if let Ok(user_path) = user_config_path() {
		println!("\nUser config path: {}", user_path.display());
		if user_path.exists() {
			println!("  (exists)");
		} else {
			println!("  (not found)");
		}
	}

	Ok(ExitCode::SUCCESS)
}
