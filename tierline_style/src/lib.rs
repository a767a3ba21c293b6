// Copyright 2026 the Tierline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tierline Style: breakpoint-cascade style resolution over opaque values.
//!
//! This crate collapses a tiered style definition into one flat value set
//! for a given width and breakpoint set. Values are opaque ([`StyleValue`]
//! erases any `Clone + PartialEq` type); the only semantics are key/value
//! merging in a deterministic order:
//!
//! **base → cascading overrides (ascending threshold) → exact override**
//!
//! ## Core Concepts
//!
//! ### Definitions
//!
//! A [`StyleDefinition`] holds base properties plus per-tier overrides,
//! classified once at build time as *cascading* (active at the tier and
//! every tier above) or *exact* (active only when the tier is precisely the
//! active one). The `"_tier"` key shorthand for exact overrides is
//! normalized by [`StyleDefinitionBuilder::tier`].
//!
//! ```rust
//! use tierline_breakpoint::BreakpointSet;
//! use tierline_style::{PropertySet, ResolveCx, ResolveMode, StyleDefinition, resolve};
//!
//! let def = StyleDefinition::builder()
//!     .set("color", "red")
//!     .cascading("desktop", PropertySet::builder().set("color", "blue").build())
//!     .cascading(
//!         "mobile",
//!         PropertySet::builder().set("color", "yellow").set("width", 10_i32).build(),
//!     )
//!     .exact("tablet", PropertySet::builder().set("height", 50_i32).build())
//!     .build();
//!
//! let breakpoints = BreakpointSet::default();
//!
//! let desktop = resolve(&def, &ResolveCx::new(1024.0, &breakpoints, ResolveMode::Cascade))?;
//! assert_eq!(desktop.get::<&str>("color"), Some(&"blue"));
//! assert_eq!(desktop.get::<i32>("width"), Some(&10));
//!
//! let tablet = resolve(&def, &ResolveCx::new(1000.0, &breakpoints, ResolveMode::Cascade))?;
//! assert_eq!(tablet.get::<&str>("color"), Some(&"yellow"));
//! assert_eq!(tablet.get::<i32>("height"), Some(&50));
//! # Ok::<(), tierline_breakpoint::ConfigError>(())
//! ```
//!
//! ### Sheets
//!
//! A [`StyleSheet`] names a collection of entries, each static or dynamic
//! ([`DynamicStyle`], a function from caller props to a definition).
//! [`resolve_sheet`] collapses the whole sheet against one [`ResolveCx`];
//! dynamic entries come back as [`BoundDynamicStyle`] callables pinned to
//! that pass's snapshot.
//!
//! ### Determinism
//!
//! [`resolve`] is a pure function of `(definition, width, breakpoints,
//! mode)`; equal inputs give results that compare equal by content. That
//! equality is the change-skipping primitive used by observers.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

mod definition;
mod dynamic;
mod error;
mod resolve;
mod sheet;
mod value;

pub use definition::{PropertySet, PropertySetBuilder, StyleDefinition, StyleDefinitionBuilder};
pub use dynamic::{BoundDynamicStyle, DynamicStyle};
pub use error::{EvaluationError, ResolveError};
pub use resolve::{ResolveCx, ResolveMode, ResolvedStyle, resolve};
pub use sheet::{ResolvedEntry, ResolvedSheet, SheetEntry, StyleSheet, StyleSheetBuilder, resolve_sheet};
pub use value::StyleValue;
