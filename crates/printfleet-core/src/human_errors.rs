// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable rendering of fleet errors.
//
// The core only returns structured errors; anything that talks to a person
// (the demo runner, a log line, a UI) goes through `humanize_error`.

use crate::error::FleetError;
use crate::types::Capability;

/// Severity of an error from the operator's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fixable at the printer (turn it on, add paper, re-enable hardware).
    ActionRequired,
    /// A consumable has to be replaced.
    BuyRequired,
    /// The request itself is wrong for this printer; retrying won't help.
    Permanent,
}

/// A plain-language error with an actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// One-line summary.
    pub message: String,
    /// What the operator should try.
    pub suggestion: String,
    /// Whether the same request can succeed once the suggestion is followed.
    pub retriable: bool,
    pub severity: Severity,
}

/// Convert a `FleetError` into a `HumanError`.
pub fn humanize_error(err: &FleetError) -> HumanError {
    match err {
        FleetError::DeviceOffline { printer_id } => HumanError {
            message: format!("Printer {printer_id} is offline."),
            suggestion: "Turn the printer on and bring it back online, then try again.".into(),
            retriable: true,
            severity: Severity::ActionRequired,
        },

        FleetError::InsufficientPaper { printer_id, required, available } => HumanError {
            message: format!("Printer {printer_id} doesn't have enough paper."),
            suggestion: format!(
                "This job needs {required}% of a tray but only {available}% is left. Load more paper."
            ),
            retriable: true,
            severity: Severity::ActionRequired,
        },

        FleetError::InsufficientInk { printer_id, ink, .. } => HumanError {
            message: format!("Printer {printer_id} is low on {ink} ink."),
            suggestion: format!("Replace the {ink} cartridge, or print fewer copies."),
            retriable: true,
            severity: Severity::BuyRequired,
        },

        FleetError::CapabilityUnsupported { printer_id, capability } => HumanError {
            message: format!("Printer {printer_id} can't {}.", verb(*capability)),
            suggestion: "Pick a printer that supports this, or leave the printer unset to use the default.".into(),
            retriable: false,
            severity: Severity::Permanent,
        },

        FleetError::HardwareUnavailable { printer_id, capability } => HumanError {
            message: format!("The {capability} unit on printer {printer_id} is switched off."),
            suggestion: "Re-enable it on the printer's control panel, then try again.".into(),
            retriable: true,
            severity: Severity::ActionRequired,
        },

        FleetError::InvalidPhoneNumber(number) => HumanError {
            message: format!("\"{number}\" doesn't look like a phone number."),
            suggestion: "Use digits only; spaces, dashes and a leading + are fine.".into(),
            retriable: false,
            severity: Severity::Permanent,
        },

        FleetError::InvalidArgument { field, reason } => HumanError {
            message: format!("The {field} setting isn't valid."),
            suggestion: format!("Fix the request and send it again ({reason})."),
            retriable: false,
            severity: Severity::Permanent,
        },

        FleetError::PrinterNotFound(printer_id) => HumanError {
            message: format!("There's no printer called {printer_id}."),
            suggestion: "Check the printer list for the right name.".into(),
            retriable: false,
            severity: Severity::Permanent,
        },

        FleetError::NoPrinterAvailable => HumanError {
            message: "No printer is available.".into(),
            suggestion: "Add a printer to the fleet first.".into(),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        FleetError::DuplicatePrinter(printer_id) => HumanError {
            message: format!("A printer called {printer_id} already exists."),
            suggestion: "Give the new printer a different name.".into(),
            retriable: false,
            severity: Severity::Permanent,
        },

        FleetError::UnknownConsumable { printer_id, consumable } => HumanError {
            message: format!("Printer {printer_id} has no {consumable}."),
            suggestion: "Only refill supplies this printer actually uses.".into(),
            retriable: false,
            severity: Severity::Permanent,
        },

        FleetError::Config(detail) => HumanError {
            message: "The fleet configuration isn't valid.".into(),
            suggestion: format!("Fix the configuration file ({detail})."),
            retriable: false,
            severity: Severity::Permanent,
        },

        FleetError::Io(io_err) => HumanError {
            message: "The configuration file couldn't be read.".into(),
            suggestion: format!("Check the path and permissions ({io_err})."),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        FleetError::Serialization(serde_err) => HumanError {
            message: "The configuration file couldn't be parsed.".into(),
            suggestion: format!("Check the file for typos or out-of-range values ({serde_err})."),
            retriable: false,
            severity: Severity::Permanent,
        },
    }
}

fn verb(capability: Capability) -> &'static str {
    match capability {
        Capability::Print => "print",
        Capability::PrintColor => "print in colour",
        Capability::Scan => "scan",
        Capability::Fax => "send faxes",
    }
}
