// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Demonstration scenario: a basic, a colour and a multifunction printer
// behind one manager, each asked to do things it can and can't do.

use printfleet_core::FleetConfig;
use printfleet_core::error::Result;
use printfleet_core::types::{ColorMode, Consumable, Ink, PrintColor, PrinterKind};
use printfleet_device::Printer;
use printfleet_manager::PrinterManager;

use crate::presenter::{fleet_table, heading, outcome};

/// Build the demonstration fleet.
fn build_fleet(config: &FleetConfig) -> Result<PrinterManager> {
    let mut manager = PrinterManager::new();
    manager.register(Printer::with_config("HP-001", "HP LaserJet Pro", PrinterKind::Basic, config))?;
    manager.register(Printer::with_config("CANON-002", "Canon PIXMA", PrinterKind::Color, config))?;
    manager.register(Printer::with_config(
        "EPSON-003",
        "Epson WorkForce",
        PrinterKind::Multifunction,
        config,
    ))?;
    Ok(manager)
}

/// Run the scenario. Only fleet set-up failures abort it; every operation
/// outcome is rendered and the run continues.
pub fn run(config: &FleetConfig) -> Result<()> {
    let mut fleet = build_fleet(config)?;

    heading("Registered printers");
    fleet_table(&fleet.list(), fleet.default_printer());

    heading("Printing");
    outcome("print 2 copies on the default printer", fleet.print("report.pdf", 2, None));
    outcome(
        "colour print on CANON-002",
        fleet.print_color(
            "slides.pptx",
            &[PrintColor::Red, PrintColor::Blue, PrintColor::Black],
            1,
            Some("CANON-002"),
        ),
    );
    outcome(
        "colour print on HP-001",
        fleet.print_color("photo.jpg", &[PrintColor::Red], 1, Some("HP-001")),
    );
    outcome("print 60 copies on HP-001", fleet.print("novel.txt", 60, Some("HP-001")));

    heading("Scanning and fax");
    if let Some(file) = outcome(
        "scan at 600 DPI on EPSON-003",
        fleet.scan(Some(600), ColorMode::Color, Some("EPSON-003")),
    ) {
        println!("        saved as {file}");
    }
    outcome("scan on HP-001", fleet.scan(None, ColorMode::Color, Some("HP-001")));
    outcome(
        "fax to +1-555-123-4567",
        fleet.send_fax("contract.pdf", "+1-555-123-4567", Some("EPSON-003")),
    );
    outcome("fax to abc-123", fleet.send_fax("contract.pdf", "abc-123", Some("EPSON-003")));

    heading("Maintenance");
    if let Some(printer) = fleet.get_mut("CANON-002") {
        printer.set_online(false);
    }
    outcome("print on offline CANON-002", fleet.print("memo.txt", 1, Some("CANON-002")));
    if let Some(printer) = fleet.get_mut("CANON-002") {
        printer.set_online(true);
        outcome("refill CANON-002 cyan", printer.refill(Consumable::Ink(Ink::Cyan)));
    }
    if let Some(printer) = fleet.get_mut("EPSON-003") {
        printer.set_scanner_available(false);
    }
    outcome(
        "scan with EPSON-003 scanner off",
        fleet.scan(None, ColorMode::Color, Some("EPSON-003")),
    );
    if let Some(printer) = fleet.get_mut("EPSON-003") {
        printer.set_scanner_available(true);
    }
    outcome("remove HP-001", fleet.unregister("HP-001").map(|_| ()));
    outcome("register a second CANON-002", fleet.register(Printer::color("CANON-002", "Clone")));

    heading("Capability queries");
    for name in ["print", "color", "scan", "fax"] {
        println!("  {name:<6} {:?}", fleet.query_by_capability(name));
    }

    heading("Final state");
    fleet_table(&fleet.list(), fleet.default_printer());
    Ok(())
}
