// Copyright 2026 the Tierline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tierline Breakpoint: named width tiers and tier selection.
//!
//! A [`Tier`] is a named width bracket with an activation threshold. A
//! [`BreakpointSet`] holds a collection of tiers sorted by ascending
//! threshold and answers the one question the rest of the system is built
//! on: which tier is active at a given width? The active tier is the one
//! with the greatest threshold not exceeding the width, so the tier whose
//! threshold is the set's minimum acts as the always-active fallback.
//!
//! ```rust
//! use tierline_breakpoint::BreakpointSet;
//!
//! let set = BreakpointSet::builder()
//!     .tier("mobile", 0.0)
//!     .tier("tablet", 480.0)
//!     .tier("desktop", 1024.0)
//!     .build()?;
//!
//! assert_eq!(set.active_tier(320.0)?.name(), "mobile");
//! assert_eq!(set.active_tier(800.0)?.name(), "tablet");
//! assert_eq!(set.active_tier(1920.0)?.name(), "desktop");
//! # Ok::<(), tierline_breakpoint::ConfigError>(())
//! ```
//!
//! [`BreakpointRegistry`] holds the default set resolutions fall back to
//! when no explicit set is supplied. It is a shared handle passed through
//! the call chain rather than a process global, so tests can create their
//! own without side effects:
//!
//! ```rust
//! use tierline_breakpoint::{BreakpointRegistry, BreakpointSet};
//!
//! let registry = BreakpointRegistry::new();
//! registry.replace(BreakpointSet::from_entries([
//!     ("mobile", 0.0),
//!     ("desktop", 768.0),
//! ])?);
//!
//! assert_eq!(registry.current().active_tier(800.0)?.name(), "desktop");
//! # Ok::<(), tierline_breakpoint::ConfigError>(())
//! ```
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

mod error;
mod registry;
mod set;

pub use error::ConfigError;
pub use registry::BreakpointRegistry;
pub use set::{BreakpointSet, BreakpointSetBuilder, Tier};
