// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Printfleet: demonstration fleet runner.
//
// Entry point. Initialises logging, loads the fleet configuration, and runs
// the demonstration scenario against a three-printer fleet.

mod demo;
mod presenter;

use std::process::ExitCode;

use printfleet_core::FleetConfig;
use printfleet_core::human_errors::humanize_error;

/// Environment variable naming an optional JSON configuration file.
const CONFIG_ENV: &str = "PRINTFLEET_CONFIG";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Printfleet starting");

    let config = match std::env::var_os(CONFIG_ENV) {
        Some(path) => match FleetConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                let human = humanize_error(&e);
                tracing::error!(error = %e, "could not load fleet configuration");
                eprintln!("{} {}", human.message, human.suggestion);
                return ExitCode::FAILURE;
            }
        },
        None => FleetConfig::default(),
    };

    match demo::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "demonstration aborted");
            ExitCode::FAILURE
        }
    }
}
