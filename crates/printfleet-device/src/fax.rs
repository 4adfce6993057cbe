// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Syntactic phone number check for outgoing faxes.

/// Whether `number` is digits only once `+`, `-` and spaces are stripped.
///
/// An empty remainder is rejected.
pub fn is_valid_phone_number(number: &str) -> bool {
    let mut digits = number.chars().filter(|c| !matches!(c, '+' | '-' | ' ')).peekable();
    digits.peek().is_some() && digits.all(|c| c.is_ascii_digit())
}
