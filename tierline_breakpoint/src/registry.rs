// Copyright 2026 the Tierline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The replaceable default breakpoint set.
//!
//! This module provides [`BreakpointRegistry`], a shared handle to the
//! breakpoint set resolutions fall back to when no explicit set is supplied.
//! It is an explicitly passed value, not a hidden process global: embedders
//! typically create one at startup and hand clones of the handle to whatever
//! performs resolution.

use alloc::rc::Rc;
use core::cell::RefCell;
use core::fmt;

use crate::set::BreakpointSet;

/// A shared, replaceable handle to the default [`BreakpointSet`].
///
/// Cloning the registry shares state: a [`replace`](Self::replace) through
/// one handle is visible to all clones. Because sets themselves are
/// immutable snapshots, replacement is atomic: a reader holding a set from
/// [`current`](Self::current) keeps resolving against that snapshot and
/// never observes a partially updated mapping.
///
/// Replacement is wholesale; the new set is never merged with the old one.
///
/// # Example
///
/// ```rust
/// use tierline_breakpoint::{BreakpointRegistry, BreakpointSet};
///
/// let registry = BreakpointRegistry::new();
/// assert_eq!(registry.current().threshold("tablet"), Some(480.0));
///
/// let custom = BreakpointSet::from_entries([("desktop", 768.0), ("mobile", 0.0)])?;
/// registry.replace(custom.clone());
///
/// // The previous defaults are gone entirely.
/// assert_eq!(registry.current(), custom);
/// assert_eq!(registry.current().threshold("tablet"), None);
/// # Ok::<(), tierline_breakpoint::ConfigError>(())
/// ```
#[derive(Clone)]
pub struct BreakpointRegistry {
    inner: Rc<RefCell<BreakpointSet>>,
}

impl BreakpointRegistry {
    /// Creates a registry holding [`BreakpointSet::default`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_set(BreakpointSet::default())
    }

    /// Creates a registry holding the given set.
    #[must_use]
    pub fn with_set(set: BreakpointSet) -> Self {
        Self {
            inner: Rc::new(RefCell::new(set)),
        }
    }

    /// Replaces the default set entirely.
    pub fn replace(&self, set: BreakpointSet) {
        *self.inner.borrow_mut() = set;
    }

    /// Returns a snapshot of the current default set.
    #[must_use]
    pub fn current(&self) -> BreakpointSet {
        self.inner.borrow().clone()
    }
}

impl Default for BreakpointRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for BreakpointRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BreakpointRegistry")
            .field("current", &self.inner.borrow())
            .finish()
    }
}
