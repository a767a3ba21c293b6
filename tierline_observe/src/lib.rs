// Copyright 2026 the Tierline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tierline Observe: width observation and live style re-resolution.
//!
//! [`tierline_style`] resolves a sheet against one width; this crate keeps
//! that resolution current as the width changes. The seam to the embedder is
//! [`WidthSource`], a synchronously readable measurement with payload-free
//! change notifications; [`ManualWidthSource`] is the in-memory reference
//! implementation.
//!
//! A [`ResponsiveBinding`] subscribes to a source and re-resolves its sheet
//! on every notification, taking breakpoints from a [`BreakpointProvider`]
//! (the process default through a
//! [`BreakpointRegistry`](tierline_breakpoint::BreakpointRegistry), or a
//! fixed per-binding set). Consumers registered with
//! [`ResponsiveBinding::on_update`] hear about a pass only when the resolved
//! content actually changed.
//!
//! ```rust
//! use std::rc::Rc;
//! use tierline_breakpoint::BreakpointRegistry;
//! use tierline_observe::{ManualWidthSource, ResponsiveBinding};
//! use tierline_style::{PropertySet, ResolveMode, StyleDefinition, StyleSheet};
//!
//! let source = ManualWidthSource::new(320.0);
//! let sheet = StyleSheet::builder()
//!     .entry(
//!         "nav",
//!         StyleDefinition::builder()
//!             .set("columns", 1_i32)
//!             .cascading("tablet", PropertySet::builder().set("columns", 2_i32).build())
//!             .build(),
//!     )
//!     .build();
//!
//! let binding = ResponsiveBinding::observe(
//!     Rc::new(source.clone()),
//!     sheet,
//!     BreakpointRegistry::new(),
//!     ResolveMode::Cascade,
//! )?;
//! assert_eq!(binding.snapshot().style("nav").unwrap().get::<i32>("columns"), Some(&1));
//!
//! source.set_width(800.0);
//! assert_eq!(binding.snapshot().style("nav").unwrap().get::<i32>("columns"), Some(&2));
//! # Ok::<(), tierline_breakpoint::ConfigError>(())
//! ```
//!
//! Everything here is single-threaded by design: notifications run on the
//! thread that drives the source, and resolution is synchronous.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

mod binding;
mod source;

pub use binding::{BreakpointProvider, ResponsiveBinding};
pub use source::{ManualWidthSource, Subscription, WidthSource};
