// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Synthetic filenames for scanned documents.
//
// Format: `<prefix>_<YYYYmmdd_HHMMSS_ffffff>-<seq>_<dpi>dpi_<mode>.<ext>`.
// The timestamp keeps names sortable; the process-wide sequence keeps two
// scans within the same microsecond apart.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};

use printfleet_core::config::ScanSettings;
use printfleet_core::types::ColorMode;

static SCAN_SEQUENCE: AtomicU64 = AtomicU64::new(1);

/// Build a fresh filename for a scan taken now.
pub fn scan_filename(settings: &ScanSettings, resolution: u32, mode: ColorMode) -> String {
    let seq = SCAN_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format_filename(settings, Utc::now(), seq, resolution, mode)
}

fn format_filename(
    settings: &ScanSettings,
    at: DateTime<Utc>,
    seq: u64,
    resolution: u32,
    mode: ColorMode,
) -> String {
    format!(
        "{}_{}-{seq:04}_{resolution}dpi_{}.{}",
        settings.file_prefix,
        at.format("%Y%m%d_%H%M%S_%6f"),
        mode.keyword(),
        settings.file_extension,
    )
}
