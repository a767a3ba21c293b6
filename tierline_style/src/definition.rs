// Copyright 2026 the Tierline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Normalized style definitions.
//!
//! A [`StyleDefinition`] is the parse-time normalized form of a tiered
//! style: base properties plus per-tier overrides, tagged as cascading or
//! exact when the definition is built. Resolution never inspects key
//! strings; classification happens exactly once, here.

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;

use crate::value::StyleValue;

/// A shared, immutable mapping from property name to [`StyleValue`].
///
/// Property sets are the building block of definitions: the base values and
/// every tier override are each one `PropertySet`. They are immutable after
/// creation and cheap to clone (`Rc`-shared). Use [`PropertySetBuilder`] to
/// construct one.
///
/// # Example
///
/// ```rust
/// use tierline_style::PropertySet;
///
/// let props = PropertySet::builder()
///     .set("color", "red")
///     .set("width", 10_i32)
///     .build();
///
/// assert_eq!(props.get::<&str>("color"), Some(&"red"));
/// assert_eq!(props.get::<i32>("width"), Some(&10));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PropertySet {
    inner: Rc<PropertySetData>,
}

/// Internal storage for property values.
#[derive(Debug, Default, PartialEq)]
struct PropertySetData {
    /// Sorted by name for binary search lookup.
    entries: Vec<(String, StyleValue)>,
}

impl PropertySet {
    /// Creates a new builder.
    #[must_use]
    pub fn builder() -> PropertySetBuilder {
        PropertySetBuilder::new()
    }

    /// Returns `true` if this set has no properties.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.entries.is_empty()
    }

    /// Returns the number of properties.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.entries.len()
    }

    /// Gets the value for a property, downcast to `T`.
    ///
    /// Returns `None` if the property is absent or has a different type.
    #[must_use]
    pub fn get<T: 'static>(&self, name: &str) -> Option<&T> {
        self.value(name).and_then(StyleValue::downcast_ref)
    }

    /// Gets the erased value for a property, if set.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&StyleValue> {
        self.inner
            .entries
            .binary_search_by(|(key, _)| key.as_str().cmp(name))
            .ok()
            .map(|idx| &self.inner.entries[idx].1)
    }

    /// Returns an iterator over `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> + '_ {
        self.inner
            .entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }
}

impl Default for PropertySet {
    fn default() -> Self {
        PropertySetBuilder::new().build()
    }
}

/// Builder for constructing [`PropertySet`] instances.
#[derive(Debug, Default)]
pub struct PropertySetBuilder {
    entries: Vec<(String, StyleValue)>,
}

impl PropertySetBuilder {
    /// Creates a new empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a property value.
    ///
    /// If the property was already set, the value is replaced.
    #[must_use]
    pub fn set<T: Clone + PartialEq + 'static>(
        mut self,
        name: impl Into<String>,
        value: T,
    ) -> Self {
        let name = name.into();
        let erased = StyleValue::new(value);
        match self
            .entries
            .binary_search_by(|(key, _)| key.as_str().cmp(&name))
        {
            Ok(idx) => {
                self.entries[idx].1 = erased;
            }
            Err(idx) => {
                self.entries.insert(idx, (name, erased));
            }
        }
        self
    }

    /// Builds the property set.
    #[must_use]
    pub fn build(self) -> PropertySet {
        PropertySet {
            inner: Rc::new(PropertySetData {
                entries: self.entries,
            }),
        }
    }
}

/// Internal storage for a definition.
#[derive(Debug, Default, PartialEq)]
struct StyleDefinitionData {
    base: PropertySet,
    /// Tier overrides in insertion order; names unique per kind.
    cascading: Vec<(String, PropertySet)>,
    exact: Vec<(String, PropertySet)>,
}

/// A normalized tiered style definition.
///
/// A definition holds base properties plus per-tier overrides, each tagged
/// cascading or exact at build time. An override
/// whose tier name does not exist in the breakpoint set used at resolution
/// time is inert; it never matches and is never an error, since tier sets
/// can be swapped independently of definitions.
///
/// Definitions are immutable after creation and cheap to clone. Use
/// [`StyleDefinitionBuilder`] to construct one.
///
/// # Example
///
/// ```rust
/// use tierline_style::{PropertySet, StyleDefinition};
///
/// let def = StyleDefinition::builder()
///     .set("color", "red")
///     .cascading("desktop", PropertySet::builder().set("color", "blue").build())
///     .exact("tablet", PropertySet::builder().set("height", 50_i32).build())
///     .build();
///
/// assert_eq!(def.base().get::<&str>("color"), Some(&"red"));
/// assert!(def.cascading("desktop").is_some());
/// assert!(def.exact("tablet").is_some());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleDefinition {
    inner: Rc<StyleDefinitionData>,
}

impl StyleDefinition {
    /// Creates a new builder.
    #[must_use]
    pub fn builder() -> StyleDefinitionBuilder {
        StyleDefinitionBuilder::new()
    }

    /// Returns the base properties.
    #[must_use]
    pub fn base(&self) -> &PropertySet {
        &self.inner.base
    }

    /// Returns the cascading override for a tier, if present.
    #[must_use]
    pub fn cascading(&self, tier: &str) -> Option<&PropertySet> {
        lookup(&self.inner.cascading, tier)
    }

    /// Returns the exact override for a tier, if present.
    #[must_use]
    pub fn exact(&self, tier: &str) -> Option<&PropertySet> {
        lookup(&self.inner.exact, tier)
    }

    /// Returns `true` if the definition has no properties or overrides.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.base.is_empty()
            && self.inner.cascading.is_empty()
            && self.inner.exact.is_empty()
    }
}

fn lookup<'a>(overrides: &'a [(String, PropertySet)], tier: &str) -> Option<&'a PropertySet> {
    overrides
        .iter()
        .find(|(name, _)| name == tier)
        .map(|(_, props)| props)
}

fn upsert(overrides: &mut Vec<(String, PropertySet)>, tier: String, props: PropertySet) {
    if let Some(existing) = overrides.iter_mut().find(|(name, _)| *name == tier) {
        existing.1 = props;
    } else {
        overrides.push((tier, props));
    }
}

/// Builder for constructing [`StyleDefinition`] instances.
#[derive(Debug, Default)]
pub struct StyleDefinitionBuilder {
    base: PropertySetBuilder,
    cascading: Vec<(String, PropertySet)>,
    exact: Vec<(String, PropertySet)>,
}

impl StyleDefinitionBuilder {
    /// Creates a new empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a base property value.
    ///
    /// If the property was already set, the value is replaced.
    #[must_use]
    pub fn set<T: Clone + PartialEq + 'static>(
        mut self,
        name: impl Into<String>,
        value: T,
    ) -> Self {
        self.base = self.base.set(name, value);
        self
    }

    /// Adds a cascading override for a tier.
    ///
    /// If the tier already has a cascading override, it is replaced.
    #[must_use]
    pub fn cascading(mut self, tier: impl Into<String>, props: PropertySet) -> Self {
        upsert(&mut self.cascading, tier.into(), props);
        self
    }

    /// Adds an exact override for a tier.
    ///
    /// If the tier already has an exact override, it is replaced.
    #[must_use]
    pub fn exact(mut self, tier: impl Into<String>, props: PropertySet) -> Self {
        upsert(&mut self.exact, tier.into(), props);
        self
    }

    /// Adds a tier override using the key shorthand.
    ///
    /// A leading underscore marks the override exact (`"_tablet"`); any
    /// other key is cascading (`"tablet"`). This is the one place the key
    /// convention is interpreted; the built definition carries the
    /// classification explicitly.
    #[must_use]
    pub fn tier(self, key: &str, props: PropertySet) -> Self {
        match key.strip_prefix('_') {
            Some(tier) => self.exact(tier, props),
            None => self.cascading(key, props),
        }
    }

    /// Builds the definition.
    #[must_use]
    pub fn build(self) -> StyleDefinition {
        StyleDefinition {
            inner: Rc::new(StyleDefinitionData {
                base: self.base.build(),
                cascading: self.cascading,
                exact: self.exact,
            }),
        }
    }
}
