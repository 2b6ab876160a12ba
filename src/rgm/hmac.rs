// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgenmac
// File: hmac.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

//! HMAC-SHA256 computation and Base64 verification primitives.

use std::borrow::Cow;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use super::compare::constant_time_equals;
use super::input::SecretKey;

type HmacSha256 = Hmac<Sha256>;

/// Size in bytes of an HMAC-SHA256 digest.
pub const DIGEST_SIZE: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacErrorKind {
	Io,
	Decode,
	Crypto,
}

impl MacErrorKind {
	pub fn label(&self) -> &'static str {
		match self {
			MacErrorKind::Io => "io",
			MacErrorKind::Decode => "decode",
			MacErrorKind::Crypto => "crypto",
		}
	}
}

#[derive(Debug)]
pub struct MacError {
	kind: MacErrorKind,
	message: Cow<'static, str>,
}

impl MacError {
	pub fn new(
		kind: MacErrorKind,
		message: impl Into<Cow<'static, str>>,
	) -> Self {
		Self {
			kind,
			message: message.into(),
		}
	}

	pub fn kind(&self) -> MacErrorKind {
		self.kind
	}

	pub fn message(&self) -> &str {
		self.message.as_ref()
	}
}

impl std::fmt::Display for MacError {
	fn fmt(
		&self,
		f: &mut std::fmt::Formatter<'_>,
	) -> std::fmt::Result {
		write!(f, "{}", self.message)
	}
}

impl std::error::Error for MacError {}

/// Computes the raw HMAC-SHA256 digest of `message` under `key`.
/// Any key length is accepted, including empty.
pub fn compute_hmac(
	key: &[u8],
	message: &[u8],
) -> Result<Vec<u8>, MacError> {
	let mut mac = HmacSha256::new_from_slice(key).map_err(|_| {
		MacError::new(
			MacErrorKind::Crypto,
			"failed to initialize HMAC-SHA256 with the provided key",
		)
	})?;
	mac.update(message);
	Ok(mac.finalize().into_bytes().to_vec())
}

/// Computes the HMAC-SHA256 of UTF-8 `key` and `message` and returns
/// the digest encoded with the standard padded Base64 alphabet.
pub fn compute_hmac_base64(
	key: &str,
	message: &str,
) -> Result<String, MacError> {
	let key = SecretKey::from_arg(key);
	let digest = compute_hmac(key.as_bytes(), message.as_bytes())?;
	Ok(STANDARD.encode(digest))
}

/// Decodes a candidate Base64 MAC. Strict: bad symbols, bad padding
/// and non-canonical trailing bits are all rejected.
pub fn decode_mac_base64(
	candidate: &str,
) -> Result<Vec<u8>, MacError> {
	STANDARD.decode(candidate).map_err(|err| {
		MacError::new(
			MacErrorKind::Decode,
			format!("candidate MAC is not valid Base64: {}", err),
		)
	})
}

/// Recomputes the MAC for `key` and `message` and compares it against
/// the decoded `candidate` in constant time. `Ok(true)` only on exact
/// byte-for-byte equality of equal-length digests.
pub fn verify_hmac_base64(
	key: &str,
	message: &str,
	candidate: &str,
) -> Result<bool, MacError> {
	let decoded = decode_mac_base64(candidate)?;
	let key = SecretKey::from_arg(key);
	let expected =
		compute_hmac(key.as_bytes(), message.as_bytes())?;
	Ok(constant_time_equals(&decoded, &expected))
}
