// Copyright 2026 the Tierline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style sheets: named collections of static and dynamic entries.
//!
//! A [`StyleSheet`] classifies each entry as static (a plain
//! [`StyleDefinition`]) or dynamic (a [`DynamicStyle`]) and nothing more;
//! no resolution happens until [`resolve_sheet`] collapses the whole sheet
//! against one [`ResolveCx`].

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;

use tierline_breakpoint::ConfigError;

use crate::definition::StyleDefinition;
use crate::dynamic::{BoundDynamicStyle, DynamicStyle};
use crate::resolve::{ResolveCx, ResolvedStyle, resolve};

/// One entry in a [`StyleSheet`].
#[derive(Clone, Debug)]
pub enum SheetEntry {
    /// A plain definition, resolved eagerly per pass.
    Static(StyleDefinition),
    /// A parameterized definition, evaluated lazily at each use.
    Dynamic(DynamicStyle),
}

/// Internal storage for a sheet.
#[derive(Debug, Default)]
struct StyleSheetData {
    /// Sorted by name for binary search lookup.
    entries: Vec<(String, SheetEntry)>,
}

/// An immutable collection of named style entries.
///
/// Sheets are created once per definition set and never change; use
/// [`StyleSheetBuilder`] to construct one. The builder performs shape
/// classification only; resolution semantics live entirely in
/// [`resolve_sheet`].
///
/// # Example
///
/// ```rust
/// use tierline_style::{PropertySet, StyleDefinition, StyleSheet};
///
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
/// assert_eq!(sheet.len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct StyleSheet {
    inner: Rc<StyleSheetData>,
}

impl StyleSheet {
    /// Creates a new builder.
    #[must_use]
    pub fn builder() -> StyleSheetBuilder {
        StyleSheetBuilder::new()
    }

    /// Returns the number of entries.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.entries.len()
    }

    /// Returns `true` if the sheet has no entries.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.entries.is_empty()
    }

    /// Returns the entry with the given name, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SheetEntry> {
        self.inner
            .entries
            .binary_search_by(|(key, _)| key.as_str().cmp(name))
            .ok()
            .map(|idx| &self.inner.entries[idx].1)
    }

    /// Returns an iterator over `(name, entry)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SheetEntry)> + '_ {
        self.inner
            .entries
            .iter()
            .map(|(name, entry)| (name.as_str(), entry))
    }
}

/// Builder for constructing [`StyleSheet`] instances.
#[derive(Debug, Default)]
pub struct StyleSheetBuilder {
    entries: Vec<(String, SheetEntry)>,
}

impl StyleSheetBuilder {
    /// Creates a new empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a static entry.
    ///
    /// If the name was already used, the entry is replaced.
    #[must_use]
    pub fn entry(self, name: impl Into<String>, definition: StyleDefinition) -> Self {
        self.insert(name.into(), SheetEntry::Static(definition))
    }

    /// Adds a dynamic entry.
    ///
    /// If the name was already used, the entry is replaced.
    #[must_use]
    pub fn dynamic(self, name: impl Into<String>, style: DynamicStyle) -> Self {
        self.insert(name.into(), SheetEntry::Dynamic(style))
    }

    fn insert(mut self, name: String, entry: SheetEntry) -> Self {
        match self
            .entries
            .binary_search_by(|(key, _)| key.as_str().cmp(&name))
        {
            Ok(idx) => {
                self.entries[idx].1 = entry;
            }
            Err(idx) => {
                self.entries.insert(idx, (name, entry));
            }
        }
        self
    }

    /// Builds the sheet.
    #[must_use]
    pub fn build(self) -> StyleSheet {
        StyleSheet {
            inner: Rc::new(StyleSheetData {
                entries: self.entries,
            }),
        }
    }
}

/// One entry in a [`ResolvedSheet`].
#[derive(Clone, Debug, PartialEq)]
pub enum ResolvedEntry {
    /// A fully flattened value set.
    Static(ResolvedStyle),
    /// A callable bound to this pass's resolution snapshot.
    Dynamic(BoundDynamicStyle),
}

impl ResolvedEntry {
    /// Returns the flattened values of a static entry.
    #[must_use]
    pub fn as_static(&self) -> Option<&ResolvedStyle> {
        match self {
            Self::Static(resolved) => Some(resolved),
            Self::Dynamic(_) => None,
        }
    }

    /// Returns the bound callable of a dynamic entry.
    #[must_use]
    pub fn as_dynamic(&self) -> Option<&BoundDynamicStyle> {
        match self {
            Self::Static(_) => None,
            Self::Dynamic(bound) => Some(bound),
        }
    }
}

/// Internal storage for a resolved sheet.
#[derive(Debug, Default, PartialEq)]
struct ResolvedSheetData {
    entries: Vec<(String, ResolvedEntry)>,
}

/// The result of resolving a whole sheet against one context.
///
/// Static entries are flat [`ResolvedStyle`]s; dynamic entries are
/// [`BoundDynamicStyle`]s carrying this pass's snapshot. Resolved sheets
/// compare by content (function identity plus snapshot for dynamic
/// entries), which is what observers use to skip redundant notifications.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResolvedSheet {
    inner: Rc<ResolvedSheetData>,
}

impl ResolvedSheet {
    /// Returns the number of entries.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.entries.len()
    }

    /// Returns `true` if the sheet resolved to no entries.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.entries.is_empty()
    }

    /// Returns the resolved entry with the given name, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ResolvedEntry> {
        self.inner
            .entries
            .binary_search_by(|(key, _)| key.as_str().cmp(name))
            .ok()
            .map(|idx| &self.inner.entries[idx].1)
    }

    /// Returns the flattened values of a static entry, if present.
    #[must_use]
    pub fn style(&self, name: &str) -> Option<&ResolvedStyle> {
        self.get(name).and_then(ResolvedEntry::as_static)
    }

    /// Returns the bound callable of a dynamic entry, if present.
    #[must_use]
    pub fn dynamic(&self, name: &str) -> Option<&BoundDynamicStyle> {
        self.get(name).and_then(ResolvedEntry::as_dynamic)
    }

    /// Returns an iterator over `(name, entry)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResolvedEntry)> + '_ {
        self.inner
            .entries
            .iter()
            .map(|(name, entry)| (name.as_str(), entry))
    }
}

/// Resolves every entry of a sheet against one context.
///
/// Static entries resolve eagerly; dynamic entries are bound to the
/// context's snapshot and evaluate lazily at call time. A fresh
/// [`ResolvedSheet`] is produced per pass, so dynamic callables never
/// outlive the width they were bound to.
///
/// # Errors
///
/// Returns [`ConfigError::NoActiveTier`] if the context width is below the
/// breakpoint set's minimum threshold.
pub fn resolve_sheet(
    sheet: &StyleSheet,
    cx: &ResolveCx<'_>,
) -> Result<ResolvedSheet, ConfigError> {
    let mut entries = Vec::with_capacity(sheet.len());
    for (name, entry) in sheet.iter() {
        let resolved = match entry {
            SheetEntry::Static(definition) => ResolvedEntry::Static(resolve(definition, cx)?),
            SheetEntry::Dynamic(style) => ResolvedEntry::Dynamic(BoundDynamicStyle::bind(style, cx)),
        };
        entries.push((String::from(name), resolved));
    }
    Ok(ResolvedSheet {
        inner: Rc::new(ResolvedSheetData { entries }),
    })
}
