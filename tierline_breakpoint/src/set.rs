// Copyright 2026 the Tierline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Breakpoint sets and tier selection.
//!
//! This module provides [`Tier`], a named width bracket, and
//! [`BreakpointSet`], an immutable collection of tiers ordered by ascending
//! activation threshold.

use alloc::rc::Rc;
use alloc::string::String;
use core::fmt;

use smallvec::SmallVec;

use crate::error::ConfigError;

/// Inline capacity for tier storage. Typical sets have three to six tiers.
const INLINE_TIERS: usize = 6;

/// A named width bracket with an activation threshold.
///
/// A tier becomes active at widths greater than or equal to its threshold;
/// the tier actually selected for a width is the one with the greatest
/// threshold not exceeding it (see [`BreakpointSet::active_tier`]).
#[derive(Clone, Debug, PartialEq)]
pub struct Tier {
    name: String,
    threshold: f64,
}

impl Tier {
    /// Returns the tier name.
    #[must_use]
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the minimum width at which this tier becomes active.
    #[must_use]
    #[inline]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

/// Internal storage for a breakpoint set.
#[derive(Debug, PartialEq)]
struct BreakpointSetData {
    /// Sorted ascending by `(threshold, name)`. Names are unique.
    tiers: SmallVec<[Tier; INLINE_TIERS]>,
}

/// An immutable set of named tiers, ordered by ascending threshold.
///
/// Sets are cheap to clone (`Rc`-shared) and immutable after creation. Use
/// [`BreakpointSetBuilder`] to construct one, or [`BreakpointSet::default`]
/// for the built-in `mobile` / `tablet` / `desktop` set.
///
/// Tier order is total: ties on threshold are broken by name, so every
/// width maps to exactly one active tier and resolution is deterministic.
///
/// # Example
///
/// ```rust
/// use tierline_breakpoint::BreakpointSet;
///
/// let set = BreakpointSet::builder()
///     .tier("mobile", 0.0)
///     .tier("desktop", 768.0)
///     .build()?;
///
/// assert_eq!(set.active_tier(1024.0)?.name(), "desktop");
/// assert_eq!(set.active_tier(500.0)?.name(), "mobile");
/// # Ok::<(), tierline_breakpoint::ConfigError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct BreakpointSet {
    inner: Rc<BreakpointSetData>,
}

impl BreakpointSet {
    /// Creates a new builder.
    #[must_use]
    pub fn builder() -> BreakpointSetBuilder {
        BreakpointSetBuilder::new()
    }

    /// Builds a set from `(name, threshold)` pairs.
    ///
    /// A convenience over [`BreakpointSetBuilder`]; later duplicates of a
    /// name replace earlier ones.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptySet`] if the iterator is empty.
    pub fn from_entries<N>(
        entries: impl IntoIterator<Item = (N, f64)>,
    ) -> Result<Self, ConfigError>
    where
        N: Into<String>,
    {
        let mut builder = BreakpointSetBuilder::new();
        for (name, threshold) in entries {
            builder = builder.tier(name, threshold);
        }
        builder.build()
    }

    /// Returns the number of tiers.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.tiers.len()
    }

    /// Returns `true` if the set has no tiers.
    ///
    /// Always `false` for sets produced by the builder, which rejects empty
    /// input.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.tiers.is_empty()
    }

    /// Returns the tiers in ascending threshold order.
    #[must_use]
    #[inline]
    pub fn tiers(&self) -> &[Tier] {
        &self.inner.tiers
    }

    /// Returns the threshold for a tier name, if present.
    #[must_use]
    pub fn threshold(&self, name: &str) -> Option<f64> {
        self.inner
            .tiers
            .iter()
            .find(|tier| tier.name == name)
            .map(Tier::threshold)
    }

    /// Returns `true` if the set contains a tier with the given name.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.threshold(name).is_some()
    }

    /// Returns the index of the active tier for a width.
    ///
    /// The active tier is the last tier in ascending order whose threshold
    /// is less than or equal to `width`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoActiveTier`] if `width` is below the set's
    /// minimum threshold. This is unreachable for sets whose minimum is `0`,
    /// but caller-supplied override sets can violate that.
    pub fn active_index(&self, width: f64) -> Result<usize, ConfigError> {
        let tiers = &self.inner.tiers;
        let end = tiers.partition_point(|tier| tier.threshold <= width);
        if end == 0 {
            return Err(ConfigError::NoActiveTier {
                width,
                minimum: tiers.first().map_or(f64::NAN, Tier::threshold),
            });
        }
        Ok(end - 1)
    }

    /// Returns the active tier for a width.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoActiveTier`] if `width` is below the set's
    /// minimum threshold.
    pub fn active_tier(&self, width: f64) -> Result<&Tier, ConfigError> {
        self.active_index(width).map(|idx| &self.inner.tiers[idx])
    }
}

impl Default for BreakpointSet {
    /// The built-in default set: `mobile = 0`, `tablet = 480`,
    /// `desktop = 1024`.
    fn default() -> Self {
        let mut tiers = SmallVec::new();
        tiers.push(Tier {
            name: String::from("mobile"),
            threshold: 0.0,
        });
        tiers.push(Tier {
            name: String::from("tablet"),
            threshold: 480.0,
        });
        tiers.push(Tier {
            name: String::from("desktop"),
            threshold: 1024.0,
        });
        Self {
            inner: Rc::new(BreakpointSetData { tiers }),
        }
    }
}

/// Builder for constructing [`BreakpointSet`] instances.
///
/// # Example
///
/// ```rust
/// use tierline_breakpoint::BreakpointSetBuilder;
///
/// let set = BreakpointSetBuilder::new()
///     .tier("mobile", 0.0)
///     .tier("tablet", 480.0)
///     .tier("desktop", 1024.0)
///     .build()?;
///
/// assert_eq!(set.len(), 3);
/// assert_eq!(set.threshold("tablet"), Some(480.0));
/// # Ok::<(), tierline_breakpoint::ConfigError>(())
/// ```
#[derive(Default)]
pub struct BreakpointSetBuilder {
    tiers: SmallVec<[Tier; INLINE_TIERS]>,
}

impl fmt::Debug for BreakpointSetBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BreakpointSetBuilder")
            .field("tiers", &self.tiers)
            .finish()
    }
}

impl BreakpointSetBuilder {
    /// Creates a new empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a tier with the given name and activation threshold.
    ///
    /// If a tier with the same name was already added, its threshold is
    /// replaced.
    #[must_use]
    pub fn tier(mut self, name: impl Into<String>, threshold: f64) -> Self {
        let name = name.into();
        if let Some(existing) = self.tiers.iter_mut().find(|tier| tier.name == name) {
            existing.threshold = threshold;
        } else {
            self.tiers.push(Tier { name, threshold });
        }
        self
    }

    /// Builds the set, sorting tiers by ascending `(threshold, name)`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptySet`] if no tiers were added.
    pub fn build(mut self) -> Result<BreakpointSet, ConfigError> {
        if self.tiers.is_empty() {
            return Err(ConfigError::EmptySet);
        }
        self.tiers.sort_by(|a, b| {
            a.threshold
                .total_cmp(&b.threshold)
                .then_with(|| a.name.cmp(&b.name))
        });
        Ok(BreakpointSet {
            inner: Rc::new(BreakpointSetData { tiers: self.tiers }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn custom() -> BreakpointSet {
        BreakpointSet::builder()
            .tier("desktopXL", 1200.0)
            .tier("desktop", 768.0)
            .tier("mobile", 0.0)
            .build()
            .unwrap()
    }

    #[test]
    fn empty_set_is_rejected() {
        assert_eq!(
            BreakpointSetBuilder::new().build().unwrap_err(),
            ConfigError::EmptySet
        );
    }

    #[test]
    fn tiers_are_sorted_ascending() {
        let set = custom();
        let names: Vec<_> = set.tiers().iter().map(Tier::name).collect();
        assert_eq!(names, ["mobile", "desktop", "desktopXL"]);
    }

    #[test]
    fn duplicate_name_replaces_threshold() {
        let set = BreakpointSet::builder()
            .tier("mobile", 0.0)
            .tier("desktop", 768.0)
            .tier("desktop", 900.0)
            .build()
            .unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.threshold("desktop"), Some(900.0));
    }

    #[test]
    fn active_tier_picks_greatest_threshold_not_exceeding_width() {
        let set = custom();
        assert_eq!(set.active_tier(1200.0).unwrap().name(), "desktopXL");
        assert_eq!(set.active_tier(1199.0).unwrap().name(), "desktop");
        assert_eq!(set.active_tier(768.0).unwrap().name(), "desktop");
        assert_eq!(set.active_tier(700.0).unwrap().name(), "mobile");
        assert_eq!(set.active_tier(0.0).unwrap().name(), "mobile");
    }

    #[test]
    fn width_below_minimum_fails() {
        let set = BreakpointSet::builder()
            .tier("tablet", 480.0)
            .tier("desktop", 1024.0)
            .build()
            .unwrap();
        assert_eq!(
            set.active_tier(300.0).unwrap_err(),
            ConfigError::NoActiveTier {
                width: 300.0,
                minimum: 480.0,
            }
        );
    }

    #[test]
    fn threshold_ties_order_by_name() {
        let set = BreakpointSet::builder()
            .tier("b", 100.0)
            .tier("a", 100.0)
            .tier("base", 0.0)
            .build()
            .unwrap();
        let names: Vec<_> = set.tiers().iter().map(Tier::name).collect();
        assert_eq!(names, ["base", "a", "b"]);
        // Selection picks the last qualifying tier.
        assert_eq!(set.active_tier(150.0).unwrap().name(), "b");
    }

    #[test]
    fn default_set_tiers() {
        let set = BreakpointSet::default();
        assert_eq!(set.threshold("mobile"), Some(0.0));
        assert_eq!(set.threshold("tablet"), Some(480.0));
        assert_eq!(set.threshold("desktop"), Some(1024.0));
        assert_eq!(set.active_tier(1000.0).unwrap().name(), "tablet");
        assert_eq!(set.active_tier(1024.0).unwrap().name(), "desktop");
    }

    #[test]
    fn from_entries_round_trips() {
        let set = BreakpointSet::from_entries([("desktop", 768.0), ("mobile", 0.0)]).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains("desktop"));
        assert!(!set.contains("tablet"));
    }

    #[test]
    fn clone_is_cheap() {
        let set = custom();
        let set2 = set.clone();
        assert!(Rc::ptr_eq(&set.inner, &set2.inner));
    }

    #[test]
    fn content_equality_ignores_sharing() {
        let a = BreakpointSet::from_entries([("mobile", 0.0), ("desktop", 768.0)]).unwrap();
        let b = BreakpointSet::from_entries([("desktop", 768.0), ("mobile", 0.0)]).unwrap();
        assert_eq!(a, b);
        assert!(!Rc::ptr_eq(&a.inner, &b.inner));
    }
}
