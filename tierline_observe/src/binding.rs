// Copyright 2026 the Tierline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Live re-resolution of a style sheet against a width source.
//!
//! A [`ResponsiveBinding`] resolves a [`StyleSheet`] immediately, then
//! recomputes on every width notification. Consumers are only signalled
//! when the resolved content actually changed; equal results are skipped.

use alloc::rc::Rc;
use core::cell::RefCell;
use core::fmt;

use tierline_breakpoint::{BreakpointRegistry, BreakpointSet, ConfigError};
use tierline_style::{ResolveCx, ResolveMode, ResolvedSheet, StyleSheet, resolve_sheet};

use crate::source::{Subscription, WidthSource};

/// Where a binding gets its breakpoint set for each resolution pass.
#[derive(Clone, Debug)]
pub enum BreakpointProvider {
    /// Read the registry's current default at every pass, so replacements
    /// through the registry take effect on the next recomputation.
    Registry(BreakpointRegistry),
    /// Use this exact set for every pass. Never merged with any default.
    Fixed(BreakpointSet),
}

impl BreakpointProvider {
    /// Returns the set to resolve against right now.
    #[must_use]
    pub fn current(&self) -> BreakpointSet {
        match self {
            Self::Registry(registry) => registry.current(),
            Self::Fixed(set) => set.clone(),
        }
    }
}

impl From<BreakpointRegistry> for BreakpointProvider {
    fn from(registry: BreakpointRegistry) -> Self {
        Self::Registry(registry)
    }
}

impl From<BreakpointSet> for BreakpointProvider {
    fn from(set: BreakpointSet) -> Self {
        Self::Fixed(set)
    }
}

struct BindingState {
    source: Rc<dyn WidthSource>,
    sheet: StyleSheet,
    mode: ResolveMode,
    breakpoints: BreakpointProvider,
    snapshot: ResolvedSheet,
    last_error: Option<ConfigError>,
    on_update: Option<Rc<dyn Fn(&ResolvedSheet)>>,
}

/// A style sheet kept resolved against a live width.
///
/// Created with [`observe`](Self::observe), which resolves once against the
/// source's current width and subscribes to its notifications. Each
/// notification triggers exactly one synchronous resolution pass; the
/// consumer callback registered with [`on_update`](Self::on_update) fires
/// only when the new [`ResolvedSheet`] differs from the previous one.
///
/// Dropping the binding releases its subscription, so the source never
/// drives (or retains) a discarded binding.
///
/// # Example
///
/// ```rust
/// use std::rc::Rc;
/// use tierline_breakpoint::BreakpointRegistry;
/// use tierline_observe::{BreakpointProvider, ManualWidthSource, ResponsiveBinding};
/// use tierline_style::{PropertySet, ResolveMode, StyleDefinition, StyleSheet};
///
/// let source = ManualWidthSource::new(1024.0);
/// let sheet = StyleSheet::builder()
///     .entry(
///         "card",
///         StyleDefinition::builder()
///             .set("color", "red")
///             .cascading("desktop", PropertySet::builder().set("color", "blue").build())
///             .build(),
///     )
///     .build();
///
/// let binding = ResponsiveBinding::observe(
///     Rc::new(source.clone()),
///     sheet,
///     BreakpointProvider::Registry(BreakpointRegistry::new()),
///     ResolveMode::Cascade,
/// )?;
///
/// assert_eq!(
///     binding.snapshot().style("card").unwrap().get::<&str>("color"),
///     Some(&"blue"),
/// );
///
/// source.set_width(320.0);
/// assert_eq!(
///     binding.snapshot().style("card").unwrap().get::<&str>("color"),
///     Some(&"red"),
/// );
/// # Ok::<(), tierline_breakpoint::ConfigError>(())
/// ```
pub struct ResponsiveBinding {
    state: Rc<RefCell<BindingState>>,
    _subscription: Subscription,
}

impl ResponsiveBinding {
    /// Resolves `sheet` against the source's current width and subscribes
    /// for recomputation on every subsequent notification.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the initial resolution fails. The
    /// provider's set is never empty by construction, so in practice this
    /// means a [`BreakpointProvider::Fixed`] set whose minimum threshold
    /// exceeds the current width.
    pub fn observe(
        source: Rc<dyn WidthSource>,
        sheet: StyleSheet,
        breakpoints: impl Into<BreakpointProvider>,
        mode: ResolveMode,
    ) -> Result<Self, ConfigError> {
        let breakpoints = breakpoints.into();
        let width = source.current_width();
        let set = breakpoints.current();
        let snapshot = resolve_sheet(&sheet, &ResolveCx::new(width, &set, mode))?;

        let state = Rc::new(RefCell::new(BindingState {
            source: source.clone(),
            sheet,
            mode,
            breakpoints,
            snapshot,
            last_error: None,
            on_update: None,
        }));

        let weak = Rc::downgrade(&state);
        let subscription = source.subscribe(Rc::new(move || {
            if let Some(state) = weak.upgrade() {
                recompute(&state);
            }
        }));

        Ok(Self {
            state,
            _subscription: subscription,
        })
    }

    /// Returns the latest resolved sheet.
    #[must_use]
    pub fn snapshot(&self) -> ResolvedSheet {
        self.state.borrow().snapshot.clone()
    }

    /// Registers the consumer callback fired when the resolved content
    /// changes. Replaces any previously registered callback.
    ///
    /// The callback runs outside the binding's internal borrow, so it may
    /// call back into the binding (e.g. [`snapshot`](Self::snapshot)).
    pub fn on_update(&self, callback: impl Fn(&ResolvedSheet) + 'static) {
        self.state.borrow_mut().on_update = Some(Rc::new(callback));
    }

    /// Returns the error from the most recent recomputation, if it failed.
    ///
    /// A failed recomputation (a fixed override set with no tier at the new
    /// width) keeps the previous snapshot and does not notify; the next
    /// successful pass clears this.
    #[must_use]
    pub fn last_error(&self) -> Option<ConfigError> {
        self.state.borrow().last_error.clone()
    }
}

impl fmt::Debug for ResponsiveBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("ResponsiveBinding")
            .field("entries", &state.snapshot.len())
            .field("mode", &state.mode)
            .field("last_error", &state.last_error)
            .finish_non_exhaustive()
    }
}

/// One synchronous resolution pass in response to a notification.
fn recompute(state: &Rc<RefCell<BindingState>>) {
    let (width, set, sheet, mode, previous) = {
        let state = state.borrow();
        (
            state.source.current_width(),
            state.breakpoints.current(),
            state.sheet.clone(),
            state.mode,
            state.snapshot.clone(),
        )
    };

    match resolve_sheet(&sheet, &ResolveCx::new(width, &set, mode)) {
        Ok(next) => {
            if next == previous {
                state.borrow_mut().last_error = None;
                return;
            }
            let callback = {
                let mut state = state.borrow_mut();
                state.snapshot = next.clone();
                state.last_error = None;
                state.on_update.clone()
            };
            if let Some(callback) = callback {
                callback(&next);
            }
        }
        Err(err) => {
            state.borrow_mut().last_error = Some(err);
        }
    }
}
