// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgenmac
// File: main.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

use rustgenmac::rgm::app;

fn main() {
	app::run();
}
