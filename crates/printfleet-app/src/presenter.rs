// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Console rendering of fleet results. Nothing below the binary prints; all
// narration lives here.

use printfleet_core::error::{FleetError, Result, Unavailable};
use printfleet_core::human_errors::{Severity, humanize_error};
use printfleet_core::types::PrinterStatus;

/// Print a section heading.
pub fn heading(title: &str) {
    println!();
    println!("== {title} ==");
}

/// Print the outcome of one operation and pass the value through.
pub fn outcome<T>(label: &str, result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => {
            println!("  ok    {label}");
            Some(value)
        }
        Err(e) => {
            let human = humanize_error(&e);
            let tag = match human.severity {
                Severity::ActionRequired => "fix",
                Severity::BuyRequired => "buy",
                Severity::Permanent => "no",
            };
            println!("  {tag:<5} {label}: {}", human.message);
            if let Some(note) = capability_note(&e) {
                println!("        ({note})");
            }
            println!("        {}", human.suggestion);
            None
        }
    }
}

/// Tell a missing capability apart from hardware that is switched off.
fn capability_note(err: &FleetError) -> Option<&'static str> {
    match err.unavailable_reason()? {
        Unavailable::Unsupported => Some("not available on this model"),
        Unavailable::HardwareDisabled => Some("unit present but switched off"),
    }
}

/// One line per printer with its levels and capabilities.
pub fn fleet_table(statuses: &[PrinterStatus], default: Option<&str>) {
    for status in statuses {
        let marker = if default == Some(status.printer_id.as_str()) { "*" } else { " " };
        let inks = status
            .ink_levels
            .iter()
            .map(|(ink, level)| format!("{ink}={level}"))
            .collect::<Vec<_>>()
            .join(" ");
        println!(
            " {marker} {:<4} {:<16} {:<13} {:<7} paper={:<3} {inks}",
            status.printer_id,
            status.model,
            status.kind.to_string(),
            if status.online { "online" } else { "offline" },
            status.paper_level,
        );
        println!("        capabilities: {}", status.capabilities.join(", "));
    }
}
