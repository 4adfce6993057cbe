// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Printfleet.

use thiserror::Error;

use crate::types::{Capability, Consumable, Ink};

/// Coarse failure taxonomy shared by devices and the manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    DeviceOffline,
    ResourceInsufficient,
    CapabilityUnavailable,
    InvalidInput,
    NotFound,
    Duplicate,
    Configuration,
}

/// Why a capability cannot be used on a given printer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unavailable {
    /// The printer variant does not have the capability at all.
    Unsupported,
    /// The hardware exists but is switched off.
    HardwareDisabled,
}

/// Top-level error type for all Printfleet operations.
#[derive(Debug, Error)]
pub enum FleetError {
    // -- Device state --
    #[error("printer {printer_id} is offline")]
    DeviceOffline { printer_id: String },

    #[error("printer {printer_id} has insufficient paper: need {required}, have {available}")]
    InsufficientPaper {
        printer_id: String,
        required: u32,
        available: u8,
    },

    #[error("printer {printer_id} has insufficient {ink} ink: need {required}, have {available}")]
    InsufficientInk {
        printer_id: String,
        ink: Ink,
        required: u32,
        available: u8,
    },

    #[error("printer {printer_id} does not support {capability}")]
    CapabilityUnsupported {
        printer_id: String,
        capability: Capability,
    },

    #[error("{capability} hardware on printer {printer_id} is not available")]
    HardwareUnavailable {
        printer_id: String,
        capability: Capability,
    },

    // -- Input --
    #[error("invalid phone number: {0}")]
    InvalidPhoneNumber(String),

    #[error("invalid {field}: {reason}")]
    InvalidArgument { field: &'static str, reason: String },

    // -- Registry --
    #[error("printer {0} not found")]
    PrinterNotFound(String),

    #[error("no printer available")]
    NoPrinterAvailable,

    #[error("printer {0} is already registered")]
    DuplicatePrinter(String),

    #[error("printer {printer_id} does not track {consumable}")]
    UnknownConsumable {
        printer_id: String,
        consumable: Consumable,
    },

    // -- Configuration --
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl FleetError {
    /// Map this error onto the failure taxonomy.
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::DeviceOffline { .. } => FailureKind::DeviceOffline,
            Self::InsufficientPaper { .. } | Self::InsufficientInk { .. } => {
                FailureKind::ResourceInsufficient
            }
            Self::CapabilityUnsupported { .. } | Self::HardwareUnavailable { .. } => {
                FailureKind::CapabilityUnavailable
            }
            Self::InvalidPhoneNumber(_) | Self::InvalidArgument { .. } => FailureKind::InvalidInput,
            Self::PrinterNotFound(_) | Self::NoPrinterAvailable | Self::UnknownConsumable { .. } => {
                FailureKind::NotFound
            }
            Self::DuplicatePrinter(_) => FailureKind::Duplicate,
            Self::Config(_) | Self::Io(_) | Self::Serialization(_) => FailureKind::Configuration,
        }
    }

    /// For capability failures, whether the variant lacks it or the hardware is off.
    pub fn unavailable_reason(&self) -> Option<Unavailable> {
        match self {
            Self::CapabilityUnsupported { .. } => Some(Unavailable::Unsupported),
            Self::HardwareUnavailable { .. } => Some(Unavailable::HardwareDisabled),
            _ => None,
        }
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, FleetError>;
