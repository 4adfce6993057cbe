// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Printer registry with capability-checked dispatch.
//
// The registry owns every printer, in registration order. The default
// printer is held as an id, never as a second handle, and is reassigned
// whenever the printer it names is removed.

use tracing::{debug, info, instrument, warn};

use printfleet_core::error::{FleetError, Result};
use printfleet_core::types::{Capability, ColorMode, PrintColor, PrinterStatus};
use printfleet_device::Printer;

/// Registry of simulated printers plus the current default.
#[derive(Debug, Default)]
pub struct PrinterManager {
    /// Registered printers, oldest first.
    printers: Vec<Printer>,
    /// Id of the printer used when a call names none.
    default_printer: Option<String>,
}

impl PrinterManager {
    pub fn new() -> Self {
        Self::default()
    }

    // -- Registration --------------------------------------------------------

    /// Add a printer. The first printer registered becomes the default.
    #[instrument(skip(self, printer), fields(printer_id = %printer.id()))]
    pub fn register(&mut self, printer: Printer) -> Result<()> {
        if self.contains(printer.id()) {
            warn!("printer already registered");
            return Err(FleetError::DuplicatePrinter(printer.id().to_string()));
        }

        if self.default_printer.is_none() {
            self.default_printer = Some(printer.id().to_string());
            debug!("printer set as default");
        }

        info!(kind = %printer.kind(), model = printer.model(), "printer registered");
        self.printers.push(printer);
        Ok(())
    }

    /// Remove a printer and hand it back to the caller.
    ///
    /// If it was the default, the earliest-registered remaining printer takes
    /// over (or the default is cleared when none remain).
    #[instrument(skip(self))]
    pub fn unregister(&mut self, printer_id: &str) -> Result<Printer> {
        let index = self
            .position(printer_id)
            .ok_or_else(|| FleetError::PrinterNotFound(printer_id.to_string()))?;
        let removed = self.printers.remove(index);

        if self.default_printer.as_deref() == Some(printer_id) {
            self.default_printer = self.printers.first().map(|p| p.id().to_string());
            info!(new_default = ?self.default_printer, "default printer reassigned");
        }

        info!("printer unregistered");
        Ok(removed)
    }

    #[instrument(skip(self))]
    pub fn set_default(&mut self, printer_id: &str) -> Result<()> {
        if !self.contains(printer_id) {
            warn!("cannot set default: printer not found");
            return Err(FleetError::PrinterNotFound(printer_id.to_string()));
        }
        self.default_printer = Some(printer_id.to_string());
        info!("default printer set");
        Ok(())
    }

    // -- Lookup --------------------------------------------------------------

    pub fn default_printer(&self) -> Option<&str> {
        self.default_printer.as_deref()
    }

    pub fn contains(&self, printer_id: &str) -> bool {
        self.position(printer_id).is_some()
    }

    pub fn get(&self, printer_id: &str) -> Option<&Printer> {
        self.printers.iter().find(|p| p.id() == printer_id)
    }

    /// Mutable access for maintenance (online toggles, refills).
    pub fn get_mut(&mut self, printer_id: &str) -> Option<&mut Printer> {
        self.printers.iter_mut().find(|p| p.id() == printer_id)
    }

    pub fn len(&self) -> usize {
        self.printers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.printers.is_empty()
    }

    /// Status snapshot of every printer, in registration order.
    pub fn list(&self) -> Vec<PrinterStatus> {
        self.printers.iter().map(Printer::status).collect()
    }

    /// Ids of printers supporting the named capability, in registration order.
    ///
    /// Recognised names are `print`, `color`, `scan` and `fax`; anything else
    /// matches no printer.
    pub fn query_by_capability(&self, name: &str) -> Vec<String> {
        let Some(capability) = Capability::from_query_name(name) else {
            debug!(name, "unknown capability name");
            return Vec::new();
        };
        self.printers
            .iter()
            .filter(|p| p.supports(capability))
            .map(|p| p.id().to_string())
            .collect()
    }

    // -- Dispatch ------------------------------------------------------------

    #[instrument(skip(self))]
    pub fn print(&mut self, document: &str, copies: u32, printer_id: Option<&str>) -> Result<()> {
        self.dispatch(printer_id, Capability::Print)?
            .print(document, copies)
    }

    #[instrument(skip(self, colors))]
    pub fn print_color(
        &mut self,
        document: &str,
        colors: &[PrintColor],
        copies: u32,
        printer_id: Option<&str>,
    ) -> Result<()> {
        self.dispatch(printer_id, Capability::PrintColor)?
            .print_color(document, colors, copies)
    }

    /// Scan on the target printer; `resolution` of `None` uses the printer's
    /// configured default.
    #[instrument(skip(self))]
    pub fn scan(
        &mut self,
        resolution: Option<u32>,
        mode: ColorMode,
        printer_id: Option<&str>,
    ) -> Result<String> {
        let printer = self.dispatch(printer_id, Capability::Scan)?;
        match resolution {
            Some(dpi) => printer.scan(dpi, mode),
            None => printer.scan_default(mode),
        }
    }

    #[instrument(skip(self))]
    pub fn send_fax(
        &mut self,
        document: &str,
        phone_number: &str,
        printer_id: Option<&str>,
    ) -> Result<()> {
        self.dispatch(printer_id, Capability::Fax)?
            .send_fax(document, phone_number)
    }

    /// Resolve the target printer and check it supports `capability`.
    ///
    /// Neither failure touches any printer.
    fn dispatch(&mut self, printer_id: Option<&str>, capability: Capability) -> Result<&mut Printer> {
        let target = match printer_id.or(self.default_printer.as_deref()) {
            Some(id) => id.to_string(),
            None => {
                warn!(%capability, "no printer available");
                return Err(FleetError::NoPrinterAvailable);
            }
        };

        let Some(printer) = self.printers.iter_mut().find(|p| p.id() == target) else {
            warn!(printer_id = %target, %capability, "dispatch target not found");
            return Err(FleetError::PrinterNotFound(target));
        };

        if !printer.supports(capability) {
            warn!(printer_id = %target, %capability, "dispatch rejected: capability unsupported");
            return Err(FleetError::CapabilityUnsupported {
                printer_id: target,
                capability,
            });
        }

        debug!(printer_id = %target, %capability, "dispatching");
        Ok(printer)
    }

    fn position(&self, printer_id: &str) -> Option<usize> {
        self.printers.iter().position(|p| p.id() == printer_id)
    }
}
