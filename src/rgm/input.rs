// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgenmac
// File: input.rs
// Author: Volker Schwaberow <volker@schwaberow.de>

//! Secret key wrapping and message argument resolution.

use std::fs;
use std::path::PathBuf;

use zeroize::Zeroizing;

use super::hmac::{MacError, MacErrorKind};

/// Prefix marking a message argument as a file reference.
pub const FILE_PREFIX: &str = "@file:";

/// Owner of the secret key bytes; wiped on drop.
pub struct SecretKey(Zeroizing<Vec<u8>>);

impl SecretKey {
	pub fn from_arg(arg: &str) -> Self {
		Self(Zeroizing::new(arg.as_bytes().to_vec()))
	}

	pub fn as_bytes(&self) -> &[u8] {
		&self.0
	}
}

/// Message argument as given on the command line, before resolution.
#[derive(Debug)]
pub enum MessageArg {
	Inline(String),
	File(PathBuf),
}

impl MessageArg {
	pub fn classify(arg: &str) -> Self {
		match arg.strip_prefix(FILE_PREFIX) {
			Some(path) => MessageArg::File(PathBuf::from(path)),
			None => MessageArg::Inline(arg.to_string()),
		}
	}

	pub fn description(&self) -> &'static str {
		match self {
			MessageArg::Inline(_) => "inline",
			MessageArg::File(_) => "file",
		}
	}

	/// Produces the message text: the literal argument, or the full
	/// contents of the referenced file decoded as UTF-8.
	pub fn resolve(&self) -> Result<String, MacError> {
		match self {
			MessageArg::Inline(text) => Ok(text.clone()),
			MessageArg::File(path) => fs::read_to_string(path)
				.map_err(|err| {
					MacError::new(
						MacErrorKind::Io,
						format!(
							"failed to read message file `{}`: {}",
							path.display(),
							err
						),
					)
				}),
		}
	}
}
