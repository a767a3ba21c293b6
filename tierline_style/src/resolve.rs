// Copyright 2026 the Tierline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Breakpoint-cascade resolution.
//!
//! This module provides [`resolve`], the pure function that collapses a
//! [`StyleDefinition`] into a flat [`ResolvedStyle`] for one width, one
//! breakpoint set, and one [`ResolveMode`]. Resolution reads nothing but
//! its arguments: identical inputs always produce equal results.

use alloc::rc::Rc;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;
use tierline_breakpoint::{BreakpointSet, ConfigError};

use crate::definition::StyleDefinition;
use crate::value::StyleValue;

/// How tier overrides participate in resolution.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ResolveMode {
    /// Cascading overrides apply at their tier and every tier above it;
    /// exact overrides apply only at their tier.
    #[default]
    Cascade,
    /// Every override, cascading or exact, applies only when its tier is
    /// exactly the active tier.
    ExactOnly,
}

/// The inputs to one resolution pass.
///
/// Bundles the width, the breakpoint set, and the mode so resolution
/// functions take one context instead of loose parameters, and so the same
/// snapshot can be carried into dynamic-style bindings unchanged.
///
/// # Example
///
/// ```rust
/// use tierline_breakpoint::BreakpointSet;
/// use tierline_style::{PropertySet, ResolveCx, ResolveMode, StyleDefinition, resolve};
///
/// let breakpoints = BreakpointSet::default();
/// let def = StyleDefinition::builder()
///     .set("color", "red")
///     .cascading("desktop", PropertySet::builder().set("color", "blue").build())
///     .build();
///
/// let cx = ResolveCx::new(1280.0, &breakpoints, ResolveMode::Cascade);
/// let resolved = resolve(&def, &cx)?;
/// assert_eq!(resolved.get::<&str>("color"), Some(&"blue"));
/// # Ok::<(), tierline_breakpoint::ConfigError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ResolveCx<'a> {
    width: f64,
    breakpoints: &'a BreakpointSet,
    mode: ResolveMode,
}

impl<'a> ResolveCx<'a> {
    /// Creates a new resolution context.
    #[must_use]
    pub fn new(width: f64, breakpoints: &'a BreakpointSet, mode: ResolveMode) -> Self {
        Self {
            width,
            breakpoints,
            mode,
        }
    }

    /// Returns the width being resolved against.
    #[must_use]
    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the breakpoint set in effect.
    #[must_use]
    #[inline]
    pub fn breakpoints(&self) -> &BreakpointSet {
        self.breakpoints
    }

    /// Returns the resolution mode.
    #[must_use]
    #[inline]
    pub fn mode(&self) -> ResolveMode {
        self.mode
    }
}

/// Internal storage for a resolved style.
#[derive(Debug, Default, PartialEq)]
struct ResolvedStyleData {
    /// Sorted by name.
    entries: Vec<(String, StyleValue)>,
}

/// A flat property-to-value mapping produced by [`resolve`].
///
/// Tier keys never appear here; every applicable override has been merged
/// in. Resolved styles are immutable, cheap to clone, and compare by
/// content, which is what lets observers skip redundant notifications.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResolvedStyle {
    inner: Rc<ResolvedStyleData>,
}

impl ResolvedStyle {
    /// Returns the number of properties.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.entries.len()
    }

    /// Returns `true` if no properties resolved.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.entries.is_empty()
    }

    /// Gets the value for a property, downcast to `T`.
    ///
    /// Returns `None` if the property is absent or has a different type.
    #[must_use]
    pub fn get<T: 'static>(&self, name: &str) -> Option<&T> {
        self.value(name).and_then(StyleValue::downcast_ref)
    }

    /// Gets the erased value for a property, if present.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&StyleValue> {
        self.inner
            .entries
            .binary_search_by(|(key, _)| key.as_str().cmp(name))
            .ok()
            .map(|idx| &self.inner.entries[idx].1)
    }

    /// Returns `true` if a property resolved to some value.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.value(name).is_some()
    }

    /// Returns an iterator over `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> + '_ {
        self.inner
            .entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }
}

impl fmt::Display for ResolvedStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ResolvedStyle({} properties)", self.len())
    }
}

/// Resolves a definition into a flat value set for one context.
///
/// 1. The active tier is the one with the greatest threshold not exceeding
///    the context width.
/// 2. The accumulator starts from the definition's base properties.
/// 3. In [`ResolveMode::Cascade`], the cascading override of every tier up
///    to and including the active one merges in ascending threshold order,
///    later tiers overwriting earlier on key collision. In
///    [`ResolveMode::ExactOnly`], only the active tier's cascading override
///    merges.
/// 4. In both modes, the exact override for the active tier merges last and
///    wins over everything.
///
/// Overrides naming tiers absent from `cx.breakpoints()` are inert.
///
/// # Errors
///
/// Returns [`ConfigError::NoActiveTier`] if the context width is below the
/// breakpoint set's minimum threshold.
pub fn resolve(
    definition: &StyleDefinition,
    cx: &ResolveCx<'_>,
) -> Result<ResolvedStyle, ConfigError> {
    let breakpoints = cx.breakpoints();
    let active = breakpoints.active_index(cx.width())?;
    let tiers = breakpoints.tiers();
    let active_name = tiers[active].name();

    // Borrow from the definition while merging; clone once at the end.
    let mut merged: HashMap<&str, &StyleValue> = HashMap::new();
    for (name, value) in definition.base().iter() {
        merged.insert(name, value);
    }

    match cx.mode() {
        ResolveMode::Cascade => {
            for tier in &tiers[..=active] {
                if let Some(props) = definition.cascading(tier.name()) {
                    for (name, value) in props.iter() {
                        merged.insert(name, value);
                    }
                }
            }
        }
        ResolveMode::ExactOnly => {
            if let Some(props) = definition.cascading(active_name) {
                for (name, value) in props.iter() {
                    merged.insert(name, value);
                }
            }
        }
    }

    if let Some(props) = definition.exact(active_name) {
        for (name, value) in props.iter() {
            merged.insert(name, value);
        }
    }

    let mut entries: Vec<(String, StyleValue)> = merged
        .into_iter()
        .map(|(name, value)| (name.to_string(), value.clone()))
        .collect();
    entries.sort_by(|(a, _), (b, _)| a.cmp(b));

    Ok(ResolvedStyle {
        inner: Rc::new(ResolvedStyleData { entries }),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::PropertySet;
    use alloc::vec::Vec;

    fn props(entries: &[(&str, i32)]) -> PropertySet {
        let mut builder = PropertySet::builder();
        for (name, value) in entries {
            builder = builder.set(*name, *value);
        }
        builder.build()
    }

    /// A base color, cascading desktop and mobile overrides, and an exact
    /// tablet override.
    fn sample() -> StyleDefinition {
        StyleDefinition::builder()
            .set("color", "red")
            .cascading(
                "desktop",
                PropertySet::builder().set("color", "blue").build(),
            )
            .cascading(
                "mobile",
                PropertySet::builder()
                    .set("color", "yellow")
                    .set("width", 10_i32)
                    .build(),
            )
            .exact("tablet", PropertySet::builder().set("height", 50_i32).build())
            .build()
    }

    fn cx(width: f64, breakpoints: &BreakpointSet, mode: ResolveMode) -> ResolveCx<'_> {
        ResolveCx::new(width, breakpoints, mode)
    }

    #[test]
    fn cascade_at_desktop() {
        let breakpoints = BreakpointSet::default();
        let resolved =
            resolve(&sample(), &cx(1024.0, &breakpoints, ResolveMode::Cascade)).unwrap();

        // Desktop cascades over mobile; the exact tablet override is inert.
        assert_eq!(resolved.get::<&str>("color"), Some(&"blue"));
        assert_eq!(resolved.get::<i32>("width"), Some(&10));
        assert_eq!(resolved.value("height"), None);
    }

    #[test]
    fn cascade_at_tablet_applies_exact_override() {
        let breakpoints = BreakpointSet::default();
        let resolved =
            resolve(&sample(), &cx(1000.0, &breakpoints, ResolveMode::Cascade)).unwrap();

        // Desktop is not eligible at width 1000; mobile cascades up and the
        // exact tablet override lands on top.
        assert_eq!(resolved.get::<&str>("color"), Some(&"yellow"));
        assert_eq!(resolved.get::<i32>("width"), Some(&10));
        assert_eq!(resolved.get::<i32>("height"), Some(&50));
    }

    #[test]
    fn tier_keys_never_appear_in_output() {
        let breakpoints = BreakpointSet::default();
        let resolved =
            resolve(&sample(), &cx(1024.0, &breakpoints, ResolveMode::Cascade)).unwrap();

        for tier in ["mobile", "tablet", "desktop", "_tablet"] {
            assert!(!resolved.contains(tier));
        }
    }

    #[test]
    fn exact_only_mode_treats_plain_overrides_as_exact() {
        let breakpoints = BreakpointSet::default();
        let def = StyleDefinition::builder()
            .set("color", "red")
            .cascading("tablet", PropertySet::builder().set("color", "blue").build())
            .cascading("mobile", PropertySet::builder().set("color", "green").build())
            .build();

        let at_desktop =
            resolve(&def, &cx(1024.0, &breakpoints, ResolveMode::ExactOnly)).unwrap();
        assert_eq!(at_desktop.get::<&str>("color"), Some(&"red"));

        let at_tablet = resolve(&def, &cx(768.0, &breakpoints, ResolveMode::ExactOnly)).unwrap();
        assert_eq!(at_tablet.get::<&str>("color"), Some(&"blue"));

        let at_mobile = resolve(&def, &cx(300.0, &breakpoints, ResolveMode::ExactOnly)).unwrap();
        assert_eq!(at_mobile.get::<&str>("color"), Some(&"green"));
    }

    #[test]
    fn exact_only_matches_exact_marked_behavior() {
        let breakpoints = BreakpointSet::default();
        let payload = props(&[("size", 7)]);

        let plain = StyleDefinition::builder()
            .set("size", 1_i32)
            .cascading("tablet", payload.clone())
            .build();
        let marked = StyleDefinition::builder()
            .set("size", 1_i32)
            .exact("tablet", payload)
            .build();

        for width in [300.0, 480.0, 800.0, 1024.0, 1600.0] {
            let a = resolve(&plain, &cx(width, &breakpoints, ResolveMode::ExactOnly)).unwrap();
            let b = resolve(&marked, &cx(width, &breakpoints, ResolveMode::ExactOnly)).unwrap();
            assert_eq!(a, b, "plain and exact-marked diverged at width {width}");
        }
    }

    #[test]
    fn custom_breakpoints_cascade() {
        let breakpoints = BreakpointSet::from_entries([
            ("desktopXL", 1200.0),
            ("desktop", 768.0),
            ("mobile", 0.0),
        ])
        .unwrap();
        let def = StyleDefinition::builder()
            .cascading("desktopXL", PropertySet::builder().set("color", "red").build())
            .cascading("desktop", PropertySet::builder().set("color", "blue").build())
            .cascading("mobile", PropertySet::builder().set("color", "yellow").build())
            .build();

        let at_xl = resolve(&def, &cx(1200.0, &breakpoints, ResolveMode::Cascade)).unwrap();
        assert_eq!(at_xl.get::<&str>("color"), Some(&"red"));

        let at_desktop = resolve(&def, &cx(768.0, &breakpoints, ResolveMode::Cascade)).unwrap();
        assert_eq!(at_desktop.get::<&str>("color"), Some(&"blue"));

        let at_mobile = resolve(&def, &cx(700.0, &breakpoints, ResolveMode::Cascade)).unwrap();
        assert_eq!(at_mobile.get::<&str>("color"), Some(&"yellow"));
    }

    #[test]
    fn determinism() {
        let breakpoints = BreakpointSet::default();
        let def = sample();
        for width in [0.0, 300.0, 480.0, 1000.0, 1024.0, 1920.0] {
            for mode in [ResolveMode::Cascade, ResolveMode::ExactOnly] {
                let a = resolve(&def, &cx(width, &breakpoints, mode)).unwrap();
                let b = resolve(&def, &cx(width, &breakpoints, mode)).unwrap();
                assert_eq!(a, b, "non-deterministic at width {width} in {mode:?}");
            }
        }
    }

    #[test]
    fn cascade_monotonicity_across_four_tiers() {
        let breakpoints = BreakpointSet::from_entries([
            ("xs", 0.0),
            ("sm", 400.0),
            ("md", 800.0),
            ("lg", 1200.0),
        ])
        .unwrap();
        // A low-tier cascading override stays active at every higher tier
        // unless something overwrites it.
        let def = StyleDefinition::builder()
            .cascading("xs", props(&[("margin", 4), ("padding", 2)]))
            .cascading("md", props(&[("margin", 16)]))
            .build();

        let at_sm = resolve(&def, &cx(500.0, &breakpoints, ResolveMode::Cascade)).unwrap();
        assert_eq!(at_sm.get::<i32>("margin"), Some(&4));
        assert_eq!(at_sm.get::<i32>("padding"), Some(&2));

        let at_lg = resolve(&def, &cx(1400.0, &breakpoints, ResolveMode::Cascade)).unwrap();
        // Overwritten by md, still cascading at lg.
        assert_eq!(at_lg.get::<i32>("margin"), Some(&16));
        // Never overwritten: survives from xs all the way up.
        assert_eq!(at_lg.get::<i32>("padding"), Some(&2));
    }

    #[test]
    fn exact_isolation() {
        let breakpoints = BreakpointSet::default();
        let def = StyleDefinition::builder()
            .set("height", 1_i32)
            .exact("tablet", props(&[("height", 50)]))
            .build();

        for width in [0.0, 300.0, 1024.0, 1920.0] {
            let resolved = resolve(&def, &cx(width, &breakpoints, ResolveMode::Cascade)).unwrap();
            assert_eq!(
                resolved.get::<i32>("height"),
                Some(&1),
                "exact tablet override leaked to width {width}"
            );
        }

        let at_tablet = resolve(&def, &cx(600.0, &breakpoints, ResolveMode::Cascade)).unwrap();
        assert_eq!(at_tablet.get::<i32>("height"), Some(&50));
    }

    #[test]
    fn exact_wins_over_cascading_regardless_of_threshold() {
        let breakpoints = BreakpointSet::default();
        let def = StyleDefinition::builder()
            .cascading("mobile", props(&[("gap", 1)]))
            .cascading("desktop", props(&[("gap", 2)]))
            .exact("desktop", props(&[("gap", 3)]))
            .build();

        let resolved = resolve(&def, &cx(1280.0, &breakpoints, ResolveMode::Cascade)).unwrap();
        assert_eq!(resolved.get::<i32>("gap"), Some(&3));
    }

    #[test]
    fn base_fallback_is_idempotent() {
        let breakpoints = BreakpointSet::default();
        let def = StyleDefinition::builder()
            .set("opacity", 1_i32)
            .cascading("desktop", props(&[("width", 100)]))
            .build();

        for width in [0.0, 600.0, 1024.0] {
            let resolved = resolve(&def, &cx(width, &breakpoints, ResolveMode::Cascade)).unwrap();
            assert_eq!(resolved.get::<i32>("opacity"), Some(&1));
        }
    }

    #[test]
    fn unknown_tier_override_is_inert() {
        let breakpoints = BreakpointSet::from_entries([("mobile", 0.0)]).unwrap();
        let def = StyleDefinition::builder()
            .set("color", "red")
            .cascading("ultrawide", props(&[("color", 9)]))
            .exact("ultrawide", props(&[("color", 9)]))
            .build();

        let resolved = resolve(&def, &cx(2000.0, &breakpoints, ResolveMode::Cascade)).unwrap();
        assert_eq!(resolved.get::<&str>("color"), Some(&"red"));
    }

    #[test]
    fn width_below_custom_minimum_is_config_error() {
        let breakpoints = BreakpointSet::from_entries([("tablet", 480.0)]).unwrap();
        let err = resolve(&sample(), &cx(100.0, &breakpoints, ResolveMode::Cascade)).unwrap_err();
        assert_eq!(
            err,
            ConfigError::NoActiveTier {
                width: 100.0,
                minimum: 480.0,
            }
        );
    }

    #[test]
    fn output_is_sorted_by_name() {
        let breakpoints = BreakpointSet::default();
        let def = StyleDefinition::builder()
            .set("zeta", 1_i32)
            .set("alpha", 2_i32)
            .cascading("mobile", props(&[("mid", 3)]))
            .build();

        let resolved = resolve(&def, &cx(600.0, &breakpoints, ResolveMode::Cascade)).unwrap();
        let names: Vec<_> = resolved.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["alpha", "mid", "zeta"]);
    }
}
