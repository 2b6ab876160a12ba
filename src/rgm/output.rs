// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgenmac
// Module: output
// Purpose: Digest and verdict rendering across CLI formats.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use clap::ValueEnum;
use colored::Colorize;
use serde_json::json;

use super::input::MessageArg;

/// Algorithm identifier carried in structured output.
pub const ALGORITHM_ID: &str = "hmac-sha256";

/// Digest encodings selectable via the CLI `-o/--output` flag.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum OutputOptions {
	Hex,
	Base64,
	HexBase64,
}

fn digest_tokens(
	digest: &[u8],
	option: OutputOptions,
) -> Vec<(&'static str, String)> {
	match option {
		OutputOptions::Hex => {
			vec![("Hex", hex::encode(digest))]
		}
		OutputOptions::Base64 => {
			vec![("Base64", STANDARD.encode(digest))]
		}
		OutputOptions::HexBase64 => vec![
			("Base64", STANDARD.encode(digest)),
			("Hex", hex::encode(digest)),
		],
	}
}

/// Prints the generated MAC in the selected encoding(s).
pub fn emit_generated(
	digest: &[u8],
	source: &MessageArg,
	option: OutputOptions,
	mac_only: bool,
	json_output: bool,
) {
	if json_output {
		let payload = json!({
			"action": "gen",
			"algorithm": ALGORITHM_ID,
			"mac_base64": STANDARD.encode(digest),
			"mac_hex": hex::encode(digest),
			"message_source": source.description(),
		});
		println!("{}", payload);
		return;
	}

	for (label, token) in digest_tokens(digest, option) {
		if mac_only {
			println!("{}", token);
		} else {
			println!("HMAC ({}): {}", label, token);
		}
	}
}

/// Prints the verification verdict.
pub fn emit_verdict(valid: bool, json_output: bool) {
	if json_output {
		let payload = json!({
			"action": "ver",
			"algorithm": ALGORITHM_ID,
			"valid": valid,
		});
		println!("{}", payload);
		return;
	}

	let verdict = if valid {
		"VALID".green().bold()
	} else {
		"INVALID".red().bold()
	};
	println!("Verification result: {}", verdict);
}
