// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Printfleet simulator.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Capabilities
// ---------------------------------------------------------------------------

/// A named operation a printer may or may not support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Capability {
    Print,
    PrintColor,
    Scan,
    Fax,
}

impl Capability {
    /// All capabilities in canonical (status listing) order.
    pub const ALL: [Capability; 4] = [
        Capability::Print,
        Capability::PrintColor,
        Capability::Scan,
        Capability::Fax,
    ];

    /// Keyword used in status snapshots.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Print => "print",
            Self::PrintColor => "print-color",
            Self::Scan => "scan",
            Self::Fax => "fax",
        }
    }

    /// Resolve a capability query name (`print`, `color`, `scan`, `fax`).
    ///
    /// The status keyword `print-color` is accepted as well.
    pub fn from_query_name(name: &str) -> Option<Self> {
        match name {
            "print" => Some(Self::Print),
            "color" | "print-color" => Some(Self::PrintColor),
            "scan" => Some(Self::Scan),
            "fax" => Some(Self::Fax),
            _ => None,
        }
    }

    fn bit(self) -> u8 {
        match self {
            Self::Print => 0b0001,
            Self::PrintColor => 0b0010,
            Self::Scan => 0b0100,
            Self::Fax => 0b1000,
        }
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A fixed set of capabilities, stored as a bitmask.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CapabilitySet(u8);

impl CapabilitySet {
    pub const EMPTY: CapabilitySet = CapabilitySet(0);

    pub fn from_slice(caps: &[Capability]) -> Self {
        caps.iter().fold(Self::EMPTY, |set, cap| set.with(*cap))
    }

    /// Return a copy of this set that also contains `cap`.
    pub fn with(self, cap: Capability) -> Self {
        Self(self.0 | cap.bit())
    }

    pub fn contains(&self, cap: Capability) -> bool {
        self.0 & cap.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterate the members in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = Capability> + '_ {
        Capability::ALL.into_iter().filter(|c| self.contains(*c))
    }

    /// Status keywords of the members, in canonical order.
    pub fn keywords(&self) -> Vec<String> {
        self.iter().map(|c| c.keyword().to_string()).collect()
    }
}

// ---------------------------------------------------------------------------
// Printer variants
// ---------------------------------------------------------------------------

/// The closed set of simulated printer variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PrinterKind {
    /// Monochrome only.
    Basic,
    /// Monochrome and CMYK colour printing.
    Color,
    /// Colour printing plus scanner and fax hardware.
    Multifunction,
}

impl PrinterKind {
    /// Capabilities every printer of this kind exposes.
    pub fn capabilities(&self) -> CapabilitySet {
        match self {
            Self::Basic => CapabilitySet::from_slice(&[Capability::Print]),
            Self::Color => CapabilitySet::from_slice(&[Capability::Print, Capability::PrintColor]),
            Self::Multifunction => CapabilitySet::from_slice(&Capability::ALL),
        }
    }

    /// Ink cartridges a printer of this kind carries.
    pub fn inks(&self) -> &'static [Ink] {
        match self {
            Self::Basic => &[Ink::Black],
            Self::Color | Self::Multifunction => &Ink::ALL,
        }
    }
}

impl std::fmt::Display for PrinterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Basic => "basic",
            Self::Color => "color",
            Self::Multifunction => "multifunction",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// Inks, colours and consumables
// ---------------------------------------------------------------------------

/// A physical ink cartridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ink {
    Black,
    Cyan,
    Magenta,
    Yellow,
}

impl Ink {
    pub const ALL: [Ink; 4] = [Ink::Black, Ink::Cyan, Ink::Magenta, Ink::Yellow];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Cyan => "cyan",
            Self::Magenta => "magenta",
            Self::Yellow => "yellow",
        }
    }
}

impl std::fmt::Display for Ink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A colour a caller may request for a colour print job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrintColor {
    Black,
    White,
    Red,
    Green,
    Blue,
    Cyan,
    Magenta,
    Yellow,
}

/// How a requested colour is produced from the cartridges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InkMix {
    /// Straight from one cartridge.
    Primary(Ink),
    /// Mixed from two cartridges.
    Secondary(Ink, Ink),
    /// No ink at all (the paper colour).
    None,
}

impl PrintColor {
    pub fn mix(&self) -> InkMix {
        match self {
            Self::Black => InkMix::Primary(Ink::Black),
            Self::Cyan => InkMix::Primary(Ink::Cyan),
            Self::Magenta => InkMix::Primary(Ink::Magenta),
            Self::Yellow => InkMix::Primary(Ink::Yellow),
            Self::Red => InkMix::Secondary(Ink::Magenta, Ink::Yellow),
            Self::Green => InkMix::Secondary(Ink::Cyan, Ink::Yellow),
            Self::Blue => InkMix::Secondary(Ink::Cyan, Ink::Magenta),
            Self::White => InkMix::None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::White => "white",
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Cyan => "cyan",
            Self::Magenta => "magenta",
            Self::Yellow => "yellow",
        }
    }
}

impl std::fmt::Display for PrintColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A depletable resource tracked as a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Consumable {
    Paper,
    Ink(Ink),
}

impl std::fmt::Display for Consumable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Paper => f.write_str("paper"),
            Self::Ink(ink) => write!(f, "{ink}-ink"),
        }
    }
}

/// Upper bound for every consumable level.
pub const MAX_LEVEL: u8 = 100;

// ---------------------------------------------------------------------------
// Scanning
// ---------------------------------------------------------------------------

/// Scanner colour mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Color,
    Grayscale,
}

impl ColorMode {
    /// Keyword embedded in scanned filenames.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Grayscale => "grayscale",
        }
    }
}

// ---------------------------------------------------------------------------
// Operation history
// ---------------------------------------------------------------------------

/// Unique identifier for a history record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId(pub Uuid);

impl RecordId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which operation a history record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionKind {
    Print,
    PrintColor,
    Scan,
    Fax,
}

/// Operation-specific quantities of a history record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum RecordDetails {
    Print {
        copies: u32,
        colors: Vec<PrintColor>,
    },
    Scan {
        resolution: u32,
        color_mode: ColorMode,
    },
    Fax {
        phone_number: String,
    },
}

/// One entry of a printer's append-only operation history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub id: RecordId,
    pub timestamp: DateTime<Utc>,
    pub action: ActionKind,
    /// Document name, or the produced filename for scans.
    pub target: String,
    pub details: RecordDetails,
}

impl HistoryRecord {
    pub fn new(action: ActionKind, target: impl Into<String>, details: RecordDetails) -> Self {
        Self {
            id: RecordId::new(),
            timestamp: Utc::now(),
            action,
            target: target.into(),
            details,
        }
    }
}

// ---------------------------------------------------------------------------
// Status snapshot
// ---------------------------------------------------------------------------

/// Read-only snapshot of a printer, as returned by `status()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrinterStatus {
    pub printer_id: String,
    pub model: String,
    pub kind: PrinterKind,
    pub online: bool,
    pub paper_level: u8,
    pub ink_levels: BTreeMap<Ink, u8>,
    pub scanner_available: bool,
    pub fax_available: bool,
    /// Capability keywords in canonical order.
    pub capabilities: Vec<String>,
}
