// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgenmac

use std::process::Command;
use tempfile::NamedTempFile;

const GOLDEN_MAC: &str = "2xefXxEolfMLog/xCfm4wRSgOydMlgZ+ZTGHgSlhhao=";

#[test]
fn no_arguments_exits_one_with_usage() {
	let binary = assert_cmd::cargo::cargo_bin!("rgm");
	let output = Command::new(binary)
		.output()
		.expect("run without args");
	assert_eq!(output.status.code(), Some(1));
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("Usage:"), "stderr: {}", stderr);
}

#[test]
fn two_arguments_exit_one_with_usage() {
	let binary = assert_cmd::cargo::cargo_bin!("rgm");
	let output = Command::new(binary)
		.args(["gen", "mySecret"])
		.output()
		.expect("run with two args");
	assert_eq!(output.status.code(), Some(1));
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("Usage:"), "stderr: {}", stderr);
}

#[test]
fn verify_without_mac_exits_two() {
	let binary = assert_cmd::cargo::cargo_bin!("rgm");
	let output = Command::new(binary)
		.args(["ver", "mySecret", "Hello World"])
		.output()
		.expect("run ver without mac");
	assert_eq!(output.status.code(), Some(2));
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(
		stderr.contains("4th argument"),
		"stderr: {}",
		stderr
	);
}

#[test]
fn unknown_action_exits_three() {
	let binary = assert_cmd::cargo::cargo_bin!("rgm");
	let output = Command::new(binary)
		.args(["sign", "mySecret", "Hello World"])
		.output()
		.expect("run unknown action");
	assert_eq!(output.status.code(), Some(3));
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(
		stderr.contains("Unknown action: sign"),
		"stderr: {}",
		stderr
	);
}

#[test]
fn unreadable_file_reference_exits_four() {
	let binary = assert_cmd::cargo::cargo_bin!("rgm");
	let output = Command::new(binary)
		.args(["gen", "mySecret", "@file:/no/such/payload.txt"])
		.output()
		.expect("run gen with missing file");
	assert_eq!(output.status.code(), Some(4));
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(
		stderr.contains("failed to read message file"),
		"stderr: {}",
		stderr
	);
}

#[test]
fn non_utf8_file_reference_exits_four() {
	let message = NamedTempFile::new().expect("temp file");
	std::fs::write(message.path(), [0xffu8, 0xfe, 0xfd])
		.expect("write bytes");

	let file_arg =
		format!("@file:{}", message.path().to_str().unwrap());
	let binary = assert_cmd::cargo::cargo_bin!("rgm");
	let output = Command::new(binary)
		.args(["gen", "mySecret", &file_arg])
		.output()
		.expect("run gen with non-utf8 file");
	assert_eq!(output.status.code(), Some(4));
}

#[test]
fn malformed_mac_exits_four() {
	let binary = assert_cmd::cargo::cargo_bin!("rgm");
	let output = Command::new(binary)
		.args(["ver", "mySecret", "Hello World", "*bogus*"])
		.output()
		.expect("run ver with bad mac");
	assert_eq!(output.status.code(), Some(4));
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(
		stderr.contains("not valid Base64"),
		"stderr: {}",
		stderr
	);
}

#[test]
fn corrupted_padding_exits_four() {
	let truncated = &GOLDEN_MAC[..43];
	let binary = assert_cmd::cargo::cargo_bin!("rgm");
	let output = Command::new(binary)
		.args(["ver", "mySecret", "Hello World", truncated])
		.output()
		.expect("run ver with truncated mac");
	assert_eq!(output.status.code(), Some(4));
}
