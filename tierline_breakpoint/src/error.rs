// Copyright 2026 the Tierline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Breakpoint configuration errors.

use core::fmt;

/// An invalid breakpoint configuration.
///
/// Construction-time failures (`EmptySet`) surface from
/// [`BreakpointSetBuilder::build`](crate::BreakpointSetBuilder::build);
/// selection-time failures (`NoActiveTier`) surface from
/// [`BreakpointSet::active_tier`](crate::BreakpointSet::active_tier) when a
/// caller-supplied set has no tier at or below the queried width.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The breakpoint set contains no tiers.
    EmptySet,
    /// No tier threshold is less than or equal to the queried width.
    NoActiveTier {
        /// The width that was queried.
        width: f64,
        /// The smallest threshold in the set.
        minimum: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySet => write!(f, "breakpoint set is empty"),
            Self::NoActiveTier { width, minimum } => write!(
                f,
                "no tier is active at width {width} (minimum threshold is {minimum})"
            ),
        }
    }
}

impl core::error::Error for ConfigError {}
