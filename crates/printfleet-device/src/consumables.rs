// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Consumable accounting: paper and ink levels, and the ink plan for a job.
//
// Every print-family operation first builds an `InkPlan`, then calls
// `Consumables::ensure` and only afterwards `Consumables::consume`. `consume`
// is never reached for a plan that failed `ensure`, so a rejected job leaves
// all levels untouched.

use std::collections::BTreeMap;

use printfleet_core::config::ConsumptionCosts;
use printfleet_core::error::{FleetError, Result};
use printfleet_core::types::{Consumable, Ink, InkMix, MAX_LEVEL, PrintColor};

/// Units of each ink a job needs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InkPlan {
    needed: BTreeMap<Ink, u32>,
}

impl InkPlan {
    /// Plan for a monochrome job on a black-only printer.
    pub fn monochrome(copies: u32, costs: &ConsumptionCosts) -> Self {
        let mut plan = Self::default();
        plan.add(Ink::Black, costs.mono_black_per_copy.saturating_mul(copies));
        plan
    }

    /// Plan for a colour job. Repeated colours accumulate.
    pub fn for_colors(colors: &[PrintColor], copies: u32, costs: &ConsumptionCosts) -> Self {
        let primary = costs.primary_ink_per_copy.saturating_mul(copies);
        let secondary = costs.secondary_ink_per_copy.saturating_mul(copies);

        let mut plan = Self::default();
        for color in colors {
            match color.mix() {
                InkMix::Primary(ink) => plan.add(ink, primary),
                InkMix::Secondary(a, b) => {
                    plan.add(a, secondary);
                    plan.add(b, secondary);
                }
                InkMix::None => {}
            }
        }
        plan
    }

    fn add(&mut self, ink: Ink, units: u32) {
        if units == 0 {
            return;
        }
        let entry = self.needed.entry(ink).or_insert(0);
        *entry = entry.saturating_add(units);
    }

    /// Units required of `ink` (0 if the plan doesn't use it).
    pub fn required(&self, ink: Ink) -> u32 {
        self.needed.get(&ink).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Ink, u32)> + '_ {
        self.needed.iter().map(|(ink, units)| (*ink, *units))
    }

    pub fn is_empty(&self) -> bool {
        self.needed.is_empty()
    }
}

/// Paper and ink levels of one printer, each bounded to `0..=MAX_LEVEL`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Consumables {
    paper: u8,
    ink: BTreeMap<Ink, u8>,
}

impl Consumables {
    /// Fill paper and every listed cartridge to `level` (clamped to `MAX_LEVEL`).
    pub fn new(inks: &[Ink], level: u8) -> Self {
        let level = level.min(MAX_LEVEL);
        Self {
            paper: level,
            ink: inks.iter().map(|ink| (*ink, level)).collect(),
        }
    }

    pub fn paper(&self) -> u8 {
        self.paper
    }

    /// Level of a cartridge, or `None` if this printer doesn't carry it.
    pub fn ink(&self, ink: Ink) -> Option<u8> {
        self.ink.get(&ink).copied()
    }

    pub fn ink_levels(&self) -> &BTreeMap<Ink, u8> {
        &self.ink
    }

    pub fn level(&self, consumable: Consumable) -> Option<u8> {
        match consumable {
            Consumable::Paper => Some(self.paper),
            Consumable::Ink(ink) => self.ink(ink),
        }
    }

    /// Check that `paper` units and the whole ink plan are available.
    pub fn ensure(&self, printer_id: &str, paper: u32, plan: &InkPlan) -> Result<()> {
        if u32::from(self.paper) < paper {
            return Err(FleetError::InsufficientPaper {
                printer_id: printer_id.to_string(),
                required: paper,
                available: self.paper,
            });
        }

        for (ink, required) in plan.iter() {
            let available = self.ink(ink).unwrap_or(0);
            if u32::from(available) < required {
                return Err(FleetError::InsufficientInk {
                    printer_id: printer_id.to_string(),
                    ink,
                    required,
                    available,
                });
            }
        }
        Ok(())
    }

    /// Deduct a job that already passed `ensure`.
    pub(crate) fn consume(&mut self, paper: u32, plan: &InkPlan) {
        self.paper = deduct(self.paper, paper);
        for (ink, units) in plan.iter() {
            if let Some(level) = self.ink.get_mut(&ink) {
                *level = deduct(*level, units);
            }
        }
    }

    /// Restore a tracked consumable to `MAX_LEVEL`. Returns false if untracked.
    pub(crate) fn refill(&mut self, consumable: Consumable) -> bool {
        match consumable {
            Consumable::Paper => {
                self.paper = MAX_LEVEL;
                true
            }
            Consumable::Ink(ink) => match self.ink.get_mut(&ink) {
                Some(level) => {
                    *level = MAX_LEVEL;
                    true
                }
                None => false,
            },
        }
    }
}

fn deduct(level: u8, units: u32) -> u8 {
    // `ensure` guarantees units <= level; saturate anyway so a level can't wrap.
    u8::try_from(u32::from(level).saturating_sub(units)).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn costs() -> ConsumptionCosts {
        ConsumptionCosts::default()
    }

    #[test]
    fn primary_colours_cost_three_per_copy() {
        let plan = InkPlan::for_colors(&[PrintColor::Cyan, PrintColor::Black], 2, &costs());
        assert_eq!(plan.required(Ink::Cyan), 6);
        assert_eq!(plan.required(Ink::Black), 6);
        assert_eq!(plan.required(Ink::Yellow), 0);
    }

    #[test]
    fn secondary_colours_split_across_cartridges() {
        let plan = InkPlan::for_colors(&[PrintColor::Red, PrintColor::Blue], 1, &costs());
        // red = magenta + yellow, blue = cyan + magenta
        assert_eq!(plan.required(Ink::Magenta), 4);
        assert_eq!(plan.required(Ink::Yellow), 2);
        assert_eq!(plan.required(Ink::Cyan), 2);
        assert_eq!(plan.required(Ink::Black), 0);
    }

    #[test]
    fn white_needs_no_ink() {
        let plan = InkPlan::for_colors(&[PrintColor::White], 10, &costs());
        assert!(plan.is_empty());
    }

    #[test]
    fn huge_copy_counts_saturate_instead_of_wrapping() {
        let plan = InkPlan::monochrome(u32::MAX, &costs());
        assert_eq!(plan.required(Ink::Black), u32::MAX);
    }

    #[test]
    fn ensure_reports_first_short_cartridge() {
        let mut levels = Consumables::new(&Ink::ALL, 100);
        levels.consume(0, &InkPlan::for_colors(&[PrintColor::Magenta], 32, &costs()));
        assert_eq!(levels.ink(Ink::Magenta), Some(4));

        let plan = InkPlan::for_colors(&[PrintColor::Red], 3, &costs());
        let err = levels.ensure("P2", 6, &plan).unwrap_err();
        assert!(matches!(
            err,
            FleetError::InsufficientInk { ink: Ink::Magenta, required: 6, available: 4, .. }
        ));
    }

    #[test]
    fn ensure_checks_paper_before_ink() {
        let levels = Consumables::new(&[Ink::Black], 3);
        let err = levels
            .ensure("P1", 4, &InkPlan::monochrome(2, &costs()))
            .unwrap_err();
        assert!(matches!(err, FleetError::InsufficientPaper { required: 4, available: 3, .. }));
    }

    #[test]
    fn missing_cartridge_counts_as_empty() {
        let levels = Consumables::new(&[Ink::Black], 100);
        let plan = InkPlan::for_colors(&[PrintColor::Yellow], 1, &costs());
        assert!(levels.ensure("P1", 2, &plan).is_err());
    }

    #[test]
    fn refill_only_tracked_consumables() {
        let mut levels = Consumables::new(&[Ink::Black], 10);
        assert!(levels.refill(Consumable::Paper));
        assert!(levels.refill(Consumable::Ink(Ink::Black)));
        assert!(!levels.refill(Consumable::Ink(Ink::Cyan)));
        assert_eq!(levels.paper(), 100);
        assert_eq!(levels.ink(Ink::Black), Some(100));
    }

    #[test]
    fn initial_level_is_clamped() {
        let levels = Consumables::new(&[Ink::Black], 250);
        assert_eq!(levels.paper(), MAX_LEVEL);
    }
}
