// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Printfleet Device: simulated printers.  A `Printer` is one of three
// variants (basic, colour, multifunction); the variant decides which
// capabilities it exposes and which cartridges it carries.

pub mod consumables;
pub mod fax;
pub mod printer;
pub mod scan;

pub use consumables::{Consumables, InkPlan};
pub use printer::Printer;
