// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Fleet configuration: consumption costs, starting levels, scan naming.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::error::{FleetError, Result};
use crate::types::MAX_LEVEL;

/// Units of each consumable one copy costs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsumptionCosts {
    /// Paper per copy, for every print-family operation.
    pub paper_per_copy: u32,
    /// Black ink per copy on a monochrome-only printer.
    pub mono_black_per_copy: u32,
    /// Ink per copy for each requested primary colour.
    pub primary_ink_per_copy: u32,
    /// Ink per copy of each constituent cartridge for a mixed colour.
    pub secondary_ink_per_copy: u32,
}

impl Default for ConsumptionCosts {
    fn default() -> Self {
        Self {
            paper_per_copy: 2,
            mono_black_per_copy: 5,
            primary_ink_per_copy: 3,
            secondary_ink_per_copy: 2,
        }
    }
}

/// How scanned files are named.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanSettings {
    pub file_prefix: String,
    pub file_extension: String,
    /// Resolution used when the caller does not pick one (DPI).
    pub default_resolution: u32,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            file_prefix: "scan".into(),
            file_extension: "pdf".into(),
            default_resolution: 300,
        }
    }
}

/// Settings shared by every printer in a fleet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FleetConfig {
    pub costs: ConsumptionCosts,
    /// Starting percentage for every consumable of a new printer.
    pub initial_level: u8,
    pub scan: ScanSettings,
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            costs: ConsumptionCosts::default(),
            initial_level: MAX_LEVEL,
            scan: ScanSettings::default(),
        }
    }
}

impl FleetConfig {
    /// Load and validate a JSON configuration file.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let data = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&data)?;
        info!("fleet configuration loaded");
        Ok(config)
    }

    /// Parse and validate a JSON document. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.initial_level > MAX_LEVEL {
            return Err(FleetError::Config(format!(
                "initial_level {} exceeds {MAX_LEVEL}",
                self.initial_level
            )));
        }
        if self.scan.file_prefix.trim().is_empty() {
            return Err(FleetError::Config("scan.file_prefix is empty".into()));
        }
        if self.scan.file_extension.trim().is_empty() {
            return Err(FleetError::Config("scan.file_extension is empty".into()));
        }
        if self.scan.default_resolution == 0 {
            return Err(FleetError::Config("scan.default_resolution must be positive".into()));
        }
        debug!("fleet configuration valid");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_documented_costs() {
        let config = FleetConfig::default();
        assert_eq!(config.costs.paper_per_copy, 2);
        assert_eq!(config.costs.mono_black_per_copy, 5);
        assert_eq!(config.costs.primary_ink_per_copy, 3);
        assert_eq!(config.costs.secondary_ink_per_copy, 2);
        assert_eq!(config.initial_level, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = FleetConfig::from_json(r#"{ "costs": { "paper_per_copy": 4 } }"#)
            .expect("parse");
        assert_eq!(config.costs.paper_per_copy, 4);
        assert_eq!(config.costs.mono_black_per_copy, 5);
        assert_eq!(config.scan.file_prefix, "scan");
    }

    #[test]
    fn level_above_hundred_rejected() {
        let err = FleetConfig::from_json(r#"{ "initial_level": 150 }"#).unwrap_err();
        assert!(matches!(err, FleetError::Config(_)));
    }

    #[test]
    fn malformed_json_is_serialization_error() {
        let err = FleetConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, FleetError::Serialization(_)));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{ "initial_level": 50, "scan": {{ "file_extension": "png" }} }}"#)
            .expect("write");

        let config = FleetConfig::load(file.path()).expect("load");
        assert_eq!(config.initial_level, 50);
        assert_eq!(config.scan.file_extension, "png");
        assert_eq!(config.scan.default_resolution, 300);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = FleetConfig::load(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, FleetError::Io(_)));
    }
}
