// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Simulated printer device.
//
// One struct covers all three variants. The variant fixes the capability set
// at construction; every operation checks membership in that set before
// looking at state, so a Basic printer asked to scan fails the same way no
// matter how full its trays are.

use tracing::{debug, info, warn};

use printfleet_core::config::FleetConfig;
use printfleet_core::error::{FleetError, Result};
use printfleet_core::types::{
    ActionKind, Capability, CapabilitySet, ColorMode, Consumable, HistoryRecord, PrintColor,
    PrinterKind, PrinterStatus, RecordDetails,
};

use crate::consumables::{Consumables, InkPlan};
use crate::fax::is_valid_phone_number;
use crate::scan::scan_filename;

/// A single simulated printer.
#[derive(Debug, Clone)]
pub struct Printer {
    id: String,
    model: String,
    kind: PrinterKind,
    capabilities: CapabilitySet,
    online: bool,
    consumables: Consumables,
    scanner_available: bool,
    fax_available: bool,
    history: Vec<HistoryRecord>,
    config: FleetConfig,
}

impl Printer {
    /// Create a printer with the default fleet configuration.
    pub fn new(id: impl Into<String>, model: impl Into<String>, kind: PrinterKind) -> Self {
        Self::with_config(id, model, kind, &FleetConfig::default())
    }

    pub fn basic(id: impl Into<String>, model: impl Into<String>) -> Self {
        Self::new(id, model, PrinterKind::Basic)
    }

    pub fn color(id: impl Into<String>, model: impl Into<String>) -> Self {
        Self::new(id, model, PrinterKind::Color)
    }

    pub fn multifunction(id: impl Into<String>, model: impl Into<String>) -> Self {
        Self::new(id, model, PrinterKind::Multifunction)
    }

    /// Create a printer whose costs, starting levels and scan naming come
    /// from `config`.
    pub fn with_config(
        id: impl Into<String>,
        model: impl Into<String>,
        kind: PrinterKind,
        config: &FleetConfig,
    ) -> Self {
        let capabilities = kind.capabilities();
        Self {
            id: id.into(),
            model: model.into(),
            kind,
            capabilities,
            online: true,
            consumables: Consumables::new(kind.inks(), config.initial_level),
            scanner_available: capabilities.contains(Capability::Scan),
            fax_available: capabilities.contains(Capability::Fax),
            history: Vec::new(),
            config: config.clone(),
        }
    }

    // -- Accessors -----------------------------------------------------------

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn kind(&self) -> PrinterKind {
        self.kind
    }

    pub fn capabilities(&self) -> CapabilitySet {
        self.capabilities
    }

    pub fn supports(&self, capability: Capability) -> bool {
        self.capabilities.contains(capability)
    }

    pub fn is_online(&self) -> bool {
        self.online
    }

    /// Current level of a consumable, or `None` if this printer doesn't use it.
    pub fn level(&self, consumable: Consumable) -> Option<u8> {
        self.consumables.level(consumable)
    }

    /// Operation history, oldest first.
    pub fn history(&self) -> &[HistoryRecord] {
        &self.history
    }

    /// Snapshot of identity, levels and capabilities.
    pub fn status(&self) -> PrinterStatus {
        PrinterStatus {
            printer_id: self.id.clone(),
            model: self.model.clone(),
            kind: self.kind,
            online: self.online,
            paper_level: self.consumables.paper(),
            ink_levels: self.consumables.ink_levels().clone(),
            scanner_available: self.scanner_available,
            fax_available: self.fax_available,
            capabilities: self.capabilities.keywords(),
        }
    }

    // -- Maintenance ---------------------------------------------------------

    pub fn set_online(&mut self, online: bool) {
        if self.online != online {
            info!(printer = %self.id, online, "printer online state changed");
        }
        self.online = online;
    }

    /// Toggle the scanner unit. Has no effect on printers without one.
    pub fn set_scanner_available(&mut self, available: bool) {
        if self.supports(Capability::Scan) && self.scanner_available != available {
            self.scanner_available = available;
            info!(printer = %self.id, available, "scanner availability changed");
        }
    }

    /// Toggle the fax unit. Has no effect on printers without one.
    pub fn set_fax_available(&mut self, available: bool) {
        if self.supports(Capability::Fax) && self.fax_available != available {
            self.fax_available = available;
            info!(printer = %self.id, available, "fax availability changed");
        }
    }

    /// Top a consumable back up to 100%.
    pub fn refill(&mut self, consumable: Consumable) -> Result<()> {
        if !self.consumables.refill(consumable) {
            return Err(FleetError::UnknownConsumable {
                printer_id: self.id.clone(),
                consumable,
            });
        }
        info!(printer = %self.id, %consumable, "consumable refilled");
        Ok(())
    }

    // -- Operations ----------------------------------------------------------

    /// Print `copies` monochrome copies of `document`.
    ///
    /// Basic printers spend black ink at the monochrome rate; colour-capable
    /// printers treat this as a colour job with only black requested.
    pub fn print(&mut self, document: &str, copies: u32) -> Result<()> {
        self.require(Capability::Print)?;
        check_copies(copies)?;

        let plan = if self.supports(Capability::PrintColor) {
            InkPlan::for_colors(&[PrintColor::Black], copies, &self.config.costs)
        } else {
            InkPlan::monochrome(copies, &self.config.costs)
        };
        self.run_print(ActionKind::Print, document, &[PrintColor::Black], copies, &plan)
    }

    /// Print `copies` colour copies of `document` using `colors`.
    ///
    /// The whole batch is checked against every cartridge before anything
    /// is deducted.
    pub fn print_color(&mut self, document: &str, colors: &[PrintColor], copies: u32) -> Result<()> {
        self.require(Capability::PrintColor)?;
        check_copies(copies)?;

        let plan = InkPlan::for_colors(colors, copies, &self.config.costs);
        self.run_print(ActionKind::PrintColor, document, colors, copies, &plan)
    }

    /// Scan a page and return the name of the produced file.
    pub fn scan(&mut self, resolution: u32, mode: ColorMode) -> Result<String> {
        self.require(Capability::Scan)?;
        if resolution == 0 {
            return Err(FleetError::InvalidArgument {
                field: "resolution",
                reason: "must be at least 1 DPI".into(),
            });
        }
        self.require_online()?;
        if !self.scanner_available {
            warn!(printer = %self.id, "scan rejected: scanner unavailable");
            return Err(FleetError::HardwareUnavailable {
                printer_id: self.id.clone(),
                capability: Capability::Scan,
            });
        }

        let filename = scan_filename(&self.config.scan, resolution, mode);
        self.history.push(HistoryRecord::new(
            ActionKind::Scan,
            filename.clone(),
            RecordDetails::Scan { resolution, color_mode: mode },
        ));

        info!(printer = %self.id, %filename, resolution, "scan completed");
        Ok(filename)
    }

    /// Scan at the configured default resolution.
    pub fn scan_default(&mut self, mode: ColorMode) -> Result<String> {
        let resolution = self.config.scan.default_resolution;
        self.scan(resolution, mode)
    }

    /// Fax `document` to `phone_number`.
    pub fn send_fax(&mut self, document: &str, phone_number: &str) -> Result<()> {
        self.require(Capability::Fax)?;
        self.require_online()?;
        if !self.fax_available {
            warn!(printer = %self.id, "fax rejected: fax unavailable");
            return Err(FleetError::HardwareUnavailable {
                printer_id: self.id.clone(),
                capability: Capability::Fax,
            });
        }
        if !is_valid_phone_number(phone_number) {
            warn!(printer = %self.id, phone_number, "fax rejected: invalid phone number");
            return Err(FleetError::InvalidPhoneNumber(phone_number.to_string()));
        }

        self.history.push(HistoryRecord::new(
            ActionKind::Fax,
            document,
            RecordDetails::Fax { phone_number: phone_number.to_string() },
        ));

        info!(printer = %self.id, document, phone_number, "fax sent");
        Ok(())
    }

    // -- Internals -----------------------------------------------------------

    fn require(&self, capability: Capability) -> Result<()> {
        if self.supports(capability) {
            return Ok(());
        }
        debug!(printer = %self.id, %capability, "capability not supported");
        Err(FleetError::CapabilityUnsupported {
            printer_id: self.id.clone(),
            capability,
        })
    }

    fn require_online(&self) -> Result<()> {
        if self.online {
            return Ok(());
        }
        warn!(printer = %self.id, "operation rejected: printer offline");
        Err(FleetError::DeviceOffline { printer_id: self.id.clone() })
    }

    /// Shared tail of every print-family operation: check, deduct, record.
    fn run_print(
        &mut self,
        action: ActionKind,
        document: &str,
        colors: &[PrintColor],
        copies: u32,
        plan: &InkPlan,
    ) -> Result<()> {
        self.require_online()?;

        let paper = self.config.costs.paper_per_copy.saturating_mul(copies);
        if let Err(e) = self.consumables.ensure(&self.id, paper, plan) {
            warn!(printer = %self.id, document, error = %e, "print rejected");
            return Err(e);
        }
        self.consumables.consume(paper, plan);

        self.history.push(HistoryRecord::new(
            action,
            document,
            RecordDetails::Print { copies, colors: colors.to_vec() },
        ));

        info!(
            printer = %self.id,
            document,
            copies,
            paper_left = self.consumables.paper(),
            "print completed"
        );
        Ok(())
    }
}

fn check_copies(copies: u32) -> Result<()> {
    if copies == 0 {
        return Err(FleetError::InvalidArgument {
            field: "copies",
            reason: "must be at least 1".into(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use printfleet_core::FailureKind;
    use printfleet_core::types::Ink;

    fn levels(printer: &Printer) -> PrinterStatus {
        printer.status()
    }

    #[test]
    fn basic_print_deducts_paper_and_black() {
        let mut printer = Printer::basic("P1", "LaserJet");
        printer.print("report.pdf", 2).expect("print");

        assert_eq!(printer.level(Consumable::Paper), Some(96));
        assert_eq!(printer.level(Consumable::Ink(Ink::Black)), Some(90));
        assert_eq!(printer.history().len(), 1);
        assert_eq!(printer.history()[0].action, ActionKind::Print);
        assert_eq!(printer.history()[0].target, "report.pdf");
    }

    #[test]
    fn repeated_prints_never_go_negative() {
        let mut printer = Printer::basic("P1", "LaserJet");
        // 5 black per copy: 20 single-copy jobs drain the cartridge exactly.
        for _ in 0..20 {
            printer.print("page.txt", 1).expect("print");
        }
        assert_eq!(printer.level(Consumable::Ink(Ink::Black)), Some(0));
        assert_eq!(printer.level(Consumable::Paper), Some(60));

        let before = levels(&printer);
        let err = printer.print("page.txt", 1).unwrap_err();
        assert_eq!(err.kind(), FailureKind::ResourceInsufficient);
        assert_eq!(levels(&printer), before);
        assert_eq!(printer.history().len(), 20);
    }

    #[test]
    fn paper_shortage_leaves_ink_untouched() {
        let mut printer = Printer::basic("P1", "LaserJet");
        let err = printer.print("book.pdf", 51).unwrap_err();
        assert!(matches!(err, FleetError::InsufficientPaper { required: 102, .. }));
        assert_eq!(printer.level(Consumable::Ink(Ink::Black)), Some(100));
        assert_eq!(printer.level(Consumable::Paper), Some(100));
    }

    #[test]
    fn colour_printer_monochrome_uses_primary_rate() {
        let mut printer = Printer::color("P2", "PIXMA");
        printer.print("memo.txt", 2).expect("print");
        assert_eq!(printer.level(Consumable::Ink(Ink::Black)), Some(94));
        assert_eq!(printer.level(Consumable::Ink(Ink::Cyan)), Some(100));
        assert_eq!(printer.level(Consumable::Paper), Some(96));
    }

    #[test]
    fn colour_print_mixes_secondaries() {
        let mut printer = Printer::color("P2", "PIXMA");
        printer
            .print_color("slides.pptx", &[PrintColor::Red, PrintColor::Blue, PrintColor::Black], 1)
            .expect("print");

        assert_eq!(printer.level(Consumable::Ink(Ink::Black)), Some(97));
        assert_eq!(printer.level(Consumable::Ink(Ink::Cyan)), Some(98));
        assert_eq!(printer.level(Consumable::Ink(Ink::Magenta)), Some(96));
        assert_eq!(printer.level(Consumable::Ink(Ink::Yellow)), Some(98));
        assert_eq!(printer.history()[0].action, ActionKind::PrintColor);
    }

    #[test]
    fn colour_print_is_all_or_nothing() {
        let mut printer = Printer::color("P2", "PIXMA");
        // Drain yellow to 1.
        printer.print_color("sun.png", &[PrintColor::Yellow], 33).expect("drain");
        printer.refill(Consumable::Paper).expect("refill paper");
        assert_eq!(printer.level(Consumable::Ink(Ink::Yellow)), Some(1));

        let before = levels(&printer);
        let err = printer
            .print_color("leaf.png", &[PrintColor::Cyan, PrintColor::Green], 1)
            .unwrap_err();
        assert!(matches!(err, FleetError::InsufficientInk { ink: Ink::Yellow, .. }));
        assert_eq!(levels(&printer), before);
    }

    #[test]
    fn multifunction_enforces_ink_like_colour_printer() {
        let mut printer = Printer::multifunction("P3", "WorkForce");
        // 34 copies: 68 paper is fine, 102 magenta is not.
        let err = printer
            .print_color("poster.png", &[PrintColor::Magenta], 34)
            .unwrap_err();
        assert!(matches!(err, FleetError::InsufficientInk { ink: Ink::Magenta, .. }));
        assert_eq!(printer.level(Consumable::Ink(Ink::Magenta)), Some(100));

        printer
            .print_color("poster.png", &[PrintColor::Magenta], 2)
            .expect("print");
        assert_eq!(printer.level(Consumable::Ink(Ink::Magenta)), Some(94));
    }

    #[test]
    fn basic_cannot_colour_print_even_when_full() {
        let mut printer = Printer::basic("P1", "LaserJet");
        let err = printer
            .print_color("photo.jpg", &[PrintColor::Red], 1)
            .unwrap_err();
        assert_eq!(err.kind(), FailureKind::CapabilityUnavailable);
        assert!(printer.history().is_empty());
    }

    #[test]
    fn offline_blocks_everything() {
        let mut printer = Printer::multifunction("P3", "WorkForce");
        printer.set_online(false);

        assert_eq!(printer.print("a", 1).unwrap_err().kind(), FailureKind::DeviceOffline);
        assert_eq!(
            printer.scan(300, ColorMode::Color).unwrap_err().kind(),
            FailureKind::DeviceOffline
        );
        assert_eq!(
            printer.send_fax("a", "5550100").unwrap_err().kind(),
            FailureKind::DeviceOffline
        );
        assert!(printer.history().is_empty());

        printer.set_online(true);
        assert!(printer.print("a", 1).is_ok());
    }

    #[test]
    fn basic_rejects_colour_and_scan_before_validating_input() {
        let mut printer = Printer::basic("P1", "LaserJet");

        let err = printer.print_color("photo.jpg", &[PrintColor::Red], 0).unwrap_err();
        assert_eq!(err.kind(), FailureKind::CapabilityUnavailable);

        let err = printer.scan(0, ColorMode::Color).unwrap_err();
        assert_eq!(err.kind(), FailureKind::CapabilityUnavailable);

        let err = printer.send_fax("a", "abc").unwrap_err();
        assert_eq!(err.kind(), FailureKind::CapabilityUnavailable);
    }

    #[test]
    fn zero_resolution_rejected_on_scanner() {
        let mut printer = Printer::multifunction("P3", "WorkForce");
        let err = printer.scan(0, ColorMode::Color).unwrap_err();
        assert_eq!(err.kind(), FailureKind::InvalidInput);
        assert!(printer.history().is_empty());
    }

    #[test]
    fn zero_copies_rejected() {
        let mut printer = Printer::basic("P1", "LaserJet");
        let err = printer.print("a", 0).unwrap_err();
        assert_eq!(err.kind(), FailureKind::InvalidInput);
        assert_eq!(printer.level(Consumable::Paper), Some(100));
    }

    #[test]
    fn scan_produces_distinct_filenames() {
        let mut printer = Printer::multifunction("P3", "WorkForce");
        let first = printer.scan(600, ColorMode::Color).expect("scan");
        let second = printer.scan(600, ColorMode::Color).expect("scan");

        assert!(first.contains("600dpi"));
        assert!(first.contains("color"));
        assert_ne!(first, second);
        assert_eq!(printer.history().len(), 2);
        assert_eq!(
            printer.history()[0].details,
            RecordDetails::Scan { resolution: 600, color_mode: ColorMode::Color }
        );
    }

    #[test]
    fn scan_default_uses_configured_resolution() {
        let mut printer = Printer::multifunction("P3", "WorkForce");
        let name = printer.scan_default(ColorMode::Grayscale).expect("scan");
        assert!(name.contains("_300dpi_grayscale"));
    }

    #[test]
    fn disabled_scanner_is_capability_unavailable() {
        let mut printer = Printer::multifunction("P3", "WorkForce");
        printer.set_scanner_available(false);
        let err = printer.scan(300, ColorMode::Color).unwrap_err();
        assert!(matches!(err, FleetError::HardwareUnavailable { capability: Capability::Scan, .. }));
        assert_eq!(err.kind(), FailureKind::CapabilityUnavailable);
    }

    #[test]
    fn fax_validates_number() {
        let mut printer = Printer::multifunction("P3", "WorkForce");
        printer.send_fax("contract.pdf", "+1-555-123-4567").expect("fax");

        let err = printer.send_fax("contract.pdf", "abc-123").unwrap_err();
        assert_eq!(err.kind(), FailureKind::InvalidInput);
        assert_eq!(printer.history().len(), 1);
    }

    #[test]
    fn disabled_fax_rejected_before_number_check() {
        let mut printer = Printer::multifunction("P3", "WorkForce");
        printer.set_fax_available(false);
        let err = printer.send_fax("contract.pdf", "abc").unwrap_err();
        assert!(matches!(err, FleetError::HardwareUnavailable { capability: Capability::Fax, .. }));
    }

    #[test]
    fn hardware_toggles_ignored_without_capability() {
        let mut printer = Printer::color("P2", "PIXMA");
        printer.set_scanner_available(true);
        printer.set_fax_available(true);
        let status = printer.status();
        assert!(!status.scanner_available);
        assert!(!status.fax_available);
    }

    #[test]
    fn hardware_toggles_report_state() {
        let mut printer = Printer::multifunction("P3", "WorkForce");
        printer.set_fax_available(false);
        printer.set_fax_available(false);
        assert!(!printer.status().fax_available);
        printer.set_fax_available(true);
        assert!(printer.status().fax_available);
    }

    #[test]
    fn refill_untracked_cartridge_fails() {
        let mut printer = Printer::basic("P1", "LaserJet");
        let err = printer.refill(Consumable::Ink(Ink::Cyan)).unwrap_err();
        assert_eq!(err.kind(), FailureKind::NotFound);
    }

    #[test]
    fn status_reflects_variant() {
        let status = Printer::basic("P1", "LaserJet").status();
        assert_eq!(status.capabilities, vec!["print"]);
        assert_eq!(status.ink_levels.len(), 1);

        let status = Printer::multifunction("P3", "WorkForce").status();
        assert_eq!(status.capabilities, vec!["print", "print-color", "scan", "fax"]);
        assert_eq!(status.ink_levels.len(), 4);
        assert!(status.scanner_available && status.fax_available);
    }

    #[test]
    fn config_sets_initial_levels() {
        let config = FleetConfig { initial_level: 10, ..FleetConfig::default() };
        let mut printer = Printer::with_config("P1", "LaserJet", PrinterKind::Basic, &config);
        assert_eq!(printer.level(Consumable::Paper), Some(10));
        printer.print("a", 2).expect("print");
        assert_eq!(printer.level(Consumable::Ink(Ink::Black)), Some(0));
        assert!(printer.print("a", 1).is_err());
    }
}
