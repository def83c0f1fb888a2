// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! `beacon`: send test events to Beacon collection endpoints.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context};
use beacon::{AppState, Beacon, BeaconConfig, CurrentUser, Severity, UserProfile};
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod version;

/// Beacon - client logging and error-reporting smoke tester.
#[derive(Parser, Debug)]
#[command(
	name = "beacon",
	about = "Send test events to Beacon collection endpoints",
	version
)]
struct Args {
	/// Config file (defaults to ./beacon.toml when present)
	#[arg(long, global = true, env = "BEACON_CONFIG")]
	config: Option<PathBuf>,

	/// Page URL reported as `url` in every payload
	#[arg(long, global = true, default_value = "beacon-cli://localhost")]
	location: String,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Log a message through the leveled logger
	Log {
		/// trace, debug, info, warn or error
		#[arg(long, default_value = "info")]
		severity: String,
		#[arg(long)]
		message: String,
		/// Extra detail; parsed as JSON, sent as a string otherwise
		#[arg(long)]
		detail: Option<String>,
	},
	/// Send a user error report
	Report {
		/// What the user says went wrong
		#[arg(long)]
		message: String,
		/// The system error; parsed as JSON, sent as a string otherwise
		#[arg(long)]
		error: String,
		/// Signed-in user profile as a JSON object
		#[arg(long)]
		user: Option<String>,
	},
	/// Print the resolved configuration
	Config,
	/// Panic on a worker thread with the panic hook installed
	Crash {
		#[arg(long, default_value = "beacon crash test")]
		message: String,
	},
	/// Show version and build information
	Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	let args = Args::parse();

	if let Command::Version = args.command {
		println!("{}", version::format_version_info());
		return Ok(());
	}

	let config = match &args.config {
		Some(path) => beacon_config::load_config_with_file(path)
			.with_context(|| format!("loading {}", path.display()))?,
		None => beacon_config::load_config().context("loading configuration")?,
	};

	tracing_subscriber::registry()
		.with(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| config.log_level.clone().into()),
		)
		.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
		.init();

	if let Command::Config = args.command {
		print_config(&config);
		return Ok(());
	}

	let flush_timeout = flush_timeout(&config);
	let state = Arc::new(AppState::new(args.location));
	let beacon = Beacon::builder()
		.config(config)
		.app_state(Arc::clone(&state))
		.build()
		.context("building Beacon client")?;

	let result = run(args.command, &beacon, &state);

	if tokio::time::timeout(flush_timeout, beacon.shutdown())
		.await
		.is_err()
	{
		tracing::warn!(
			timeout_secs = flush_timeout.as_secs(),
			"gave up waiting for in-flight deliveries"
		);
	}

	result
}

fn run(command: Command, beacon: &Beacon, state: &AppState) -> anyhow::Result<()> {
	match command {
		Command::Log {
			severity,
			message,
			detail,
		} => {
			let severity: Severity = severity.parse()?;
			if !beacon.logger().threshold().is_enabled(severity) {
				eprintln!(
					"note: {severity} is below the configured threshold ({}), nothing will be emitted",
					beacon.logger().threshold().threshold()
				);
			}
			beacon
				.logger()
				.log_at(severity, message, detail.as_deref().map(json_or_string));
		}
		Command::Report {
			message,
			error,
			user,
		} => {
			if let Some(raw) = user {
				let profile: UserProfile =
					serde_json::from_str(&raw).context("--user must be a JSON object")?;
				state.set_user(CurrentUser::new(profile));
			}
			if beacon.config().remote_error_target().is_none() {
				eprintln!("note: remote error reporting is not enabled, nothing will be sent");
			}
			beacon
				.user_reports()
				.send(message, &json_or_string(&error));
		}
		Command::Crash { message } => {
			beacon.install_panic_hook();
			let worker = std::thread::Builder::new()
				.name("beacon-crash".to_string())
				.spawn(move || panic!("{message}"))
				.context("spawning crash thread")?;
			if worker.join().is_ok() {
				bail!("crash thread did not panic");
			}
			let _ = std::panic::take_hook();
		}
		Command::Config | Command::Version => {}
	}

	Ok(())
}

fn print_config(config: &BeaconConfig) {
	let endpoint = |url: Option<String>| url.unwrap_or_else(|| "(not set)".to_string());

	println!("loggingType:               {}", config.logging_mode);
	println!("loggingThreshold:          {}", config.logging_threshold);
	println!(
		"remoteLoggingEndpoint:     {}",
		endpoint(config.remote_logging_endpoint.as_ref().map(ToString::to_string))
	);
	println!(
		"remoteErrorReportEndpoint: {}",
		endpoint(config.remote_error_report_endpoint.as_ref().map(ToString::to_string))
	);
	println!(
		"requestTimeoutSecs:        {}",
		config.request_timeout.as_secs()
	);
	println!("logLevel:                  {}", config.log_level);
}

/// How long to wait for in-flight deliveries before exiting.
fn flush_timeout(config: &BeaconConfig) -> Duration {
	config.request_timeout.saturating_add(Duration::from_secs(1))
}

fn json_or_string(raw: &str) -> Value {
	serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}
