// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use clap::Parser;
use reelrs::Cli;

fn main() {
    let cli = Cli::parse();
    reelrs::setup_logging();
    if let Err(e) = reelrs::run(cli.command) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
