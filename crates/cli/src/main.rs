// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `cink` binary entry point.

use clap::Parser;

use cink::app;
use cink::cli::Cli;
use cink::output_diagnostic::print_error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Err(e) = app::run(cli).await {
        print_error(e);
        std::process::exit(1);
    }
    Ok(())
}
