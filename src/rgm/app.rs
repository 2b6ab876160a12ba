// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgenmac
// File: app.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

//! CLI definition, action dispatch and exit-code mapping.

use clap::{crate_name, Arg, ArgAction};
use clap_complete::{generate, Generator, Shell};

use crate::rgm::hmac::{self, MacError};
use crate::rgm::input::{MessageArg, SecretKey};
use crate::rgm::output::{self, OutputOptions};

const HELP_TEMPLATE: &str = "{before-help}{name} {version}
Written by {author-with-newline}{about-with-newline}
Actions:
  rgm gen <SECRET_KEY> <MESSAGE|@file:PATH>               Print the Base64 MAC
  rgm ver <SECRET_KEY> <MESSAGE|@file:PATH> <BASE64_MAC>  Check a candidate MAC
{usage-heading} {usage}

{all-args}{after-help}
";

const USAGE: &str = "Usage:
  rgm gen <SECRET_KEY> <MESSAGE|@file:PATH>
  rgm ver <SECRET_KEY> <MESSAGE|@file:PATH> <BASE64_MAC>

The message argument may reference a file with @file:PATH, whose
full contents are read and decoded as UTF-8.
Example: rgm gen mySecret @file:./payload.txt";

#[derive(Debug)]
pub enum CliError {
	MissingArguments,
	MissingMac,
	UnknownAction(String),
	Mac(MacError),
}

impl From<MacError> for CliError {
	fn from(err: MacError) -> Self {
		CliError::Mac(err)
	}
}

pub fn exit_code(err: &CliError) -> i32 {
	match err {
		CliError::MissingArguments => 1,
		CliError::MissingMac => 2,
		CliError::UnknownAction(_) => 3,
		CliError::Mac(_) => 4,
	}
}

pub fn build_cli() -> clap::Command {
	clap::Command::new(crate_name!())
		.color(clap::ColorChoice::Never)
		.help_template(HELP_TEMPLATE)
		.bin_name("rgm")
		.version(clap::crate_version!())
		.author(clap::crate_authors!())
		.about("Generate and verify HMAC-SHA256 message authentication codes")
		.override_usage(
			"rgm <ACTION> <SECRET_KEY> <MESSAGE|@file:PATH> [BASE64_MAC]",
		)
		.arg(
			Arg::new("action")
				.value_name("ACTION")
				.help("Action to perform: `gen` or `ver` (case-insensitive)"),
		)
		.arg(
			Arg::new("key")
				.value_name("SECRET_KEY")
				.help("Shared secret key (UTF-8, any length)"),
		)
		.arg(
			Arg::new("message")
				.value_name("MESSAGE")
				.help("Message literal, or @file:PATH to read it from a file"),
		)
		.arg(
			Arg::new("mac")
				.value_name("BASE64_MAC")
				.help("Candidate Base64 MAC (required for `ver`)"),
		)
		.arg(
			Arg::new("output")
				.short('o')
				.long("output")
				.value_parser(clap::value_parser!(OutputOptions))
				.default_value("base64")
				.help("Digest encoding for `gen` output (hex, base64, hex-base64)"),
		)
		.arg(
			Arg::new("mac-only")
				.long("mac-only")
				.action(ArgAction::SetTrue)
				.help("Emit only the encoded digest without labels"),
		)
		.arg(
			Arg::new("json")
				.long("json")
				.action(ArgAction::SetTrue)
				.help("Emit a JSON object instead of plain text"),
		)
		.arg(
			Arg::new("completions")
				.long("completions")
				.value_name("SHELL")
				.value_parser(clap::value_parser!(Shell))
				.help("Generate shell completions and exit"),
		)
}

pub fn run() {
	let matches = build_cli().get_matches();

	if let Some(shell) =
		matches.get_one::<Shell>("completions").copied()
	{
		let mut capp = build_cli();
		print_completions(shell, &mut capp);
		return;
	}

	if let Err(err) = dispatch(&matches) {
		report_failure(&err);
		std::process::exit(exit_code(&err));
	}
}

fn dispatch(matches: &clap::ArgMatches) -> Result<(), CliError> {
	let action = matches
		.get_one::<String>("action")
		.ok_or(CliError::MissingArguments)?;
	let key_arg = matches
		.get_one::<String>("key")
		.ok_or(CliError::MissingArguments)?;
	let message_arg = matches
		.get_one::<String>("message")
		.ok_or(CliError::MissingArguments)?;
	let option = matches
		.get_one::<OutputOptions>("output")
		.copied()
		.unwrap_or(OutputOptions::Base64);
	let mac_only = matches.get_flag("mac-only");
	let json = matches.get_flag("json");

	// Message resolution happens before action dispatch, so a broken
	// @file: reference is a runtime error even for unknown actions.
	let source = MessageArg::classify(message_arg);
	let message = source.resolve()?;

	match action.trim().to_ascii_lowercase().as_str() {
		"gen" => {
			let key = SecretKey::from_arg(key_arg);
			let digest = hmac::compute_hmac(
				key.as_bytes(),
				message.as_bytes(),
			)?;
			output::emit_generated(
				&digest, &source, option, mac_only, json,
			);
			Ok(())
		}
		"ver" => {
			let candidate = matches
				.get_one::<String>("mac")
				.ok_or(CliError::MissingMac)?;
			let valid = hmac::verify_hmac_base64(
				key_arg, &message, candidate,
			)?;
			output::emit_verdict(valid, json);
			Ok(())
		}
		other => Err(CliError::UnknownAction(other.to_string())),
	}
}

fn report_failure(err: &CliError) {
	match err {
		CliError::MissingArguments => {
			eprintln!(
				"expected an action, a secret key, and a message argument."
			);
			eprintln!("{}", USAGE);
		}
		CliError::MissingMac => {
			eprintln!(
				"verify mode requires a Base64 MAC as 4th argument."
			);
			eprintln!("{}", USAGE);
		}
		CliError::UnknownAction(token) => {
			eprintln!("Unknown action: {}", token);
			eprintln!("{}", USAGE);
		}
		CliError::Mac(err) => {
			eprintln!(
				"Error ({}): {}",
				err.kind().label(),
				err.message()
			);
		}
	}
}

fn print_completions<G: Generator>(gen: G, cmd: &mut clap::Command) {
	generate(
		gen,
		cmd,
		cmd.get_name().to_string(),
		&mut std::io::stdout(),
	);
}
