// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Printfleet Manager: registry of simulated printers and capability-checked
// dispatch.  Callers name a printer (or fall back to the default); the
// manager only hands the call to printers that support the operation.

pub mod registry;

pub use registry::PrinterManager;
