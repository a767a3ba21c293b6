// Copyright 2026 the Tierline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Type-erased style values.
//!
//! This module provides [`StyleValue`] for storing property values of any
//! type in a heterogeneous collection. Values are opaque to resolution:
//! they are only ever copied, replaced, and compared.

use alloc::boxed::Box;
use core::any::{Any, TypeId, type_name};
use core::fmt;

/// A type-erased style value.
///
/// This wraps a value of any `'static + Clone + PartialEq` type, storing it
/// on the heap with its type information for later downcasting. Unlike a
/// plain `Box<dyn Any>`, a `StyleValue` supports equality comparison, which
/// is what lets resolved results be compared for change skipping.
///
/// # Example
///
/// ```rust
/// use tierline_style::StyleValue;
///
/// let value = StyleValue::new(42_i32);
/// assert!(value.is::<i32>());
/// assert_eq!(value.downcast_ref::<i32>(), Some(&42));
///
/// assert_eq!(value, StyleValue::new(42_i32));
/// assert_ne!(value, StyleValue::new(43_i32));
/// assert_ne!(value, StyleValue::new(42.0_f64));
/// ```
pub struct StyleValue {
    inner: Box<dyn ErasedValue>,
    type_id: TypeId,
    type_name: &'static str,
}

impl StyleValue {
    /// Creates a new erased value from a concrete value.
    #[must_use]
    pub fn new<T: Clone + PartialEq + 'static>(value: T) -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
            inner: Box::new(value),
        }
    }

    /// Returns the [`TypeId`] of the contained value.
    #[must_use]
    #[inline]
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Returns the type name of the contained value.
    ///
    /// Intended for diagnostics only; the exact string is not stable.
    #[must_use]
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns `true` if the contained value is of type `T`.
    #[must_use]
    #[inline]
    pub fn is<T: 'static>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    /// Attempts to downcast to a reference of type `T`.
    ///
    /// Returns `None` if the contained value is not of type `T`.
    #[must_use]
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        if self.is::<T>() {
            self.inner.as_any().downcast_ref()
        } else {
            None
        }
    }
}

impl Clone for StyleValue {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone_boxed(),
            type_id: self.type_id,
            type_name: self.type_name,
        }
    }
}

impl PartialEq for StyleValue {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id && self.inner.eq_erased(other.inner.as_any())
    }
}

impl fmt::Debug for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleValue")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

/// Trait object for type-erased values that can be cloned and compared.
trait ErasedValue: Any {
    fn as_any(&self) -> &dyn Any;
    fn clone_boxed(&self) -> Box<dyn ErasedValue>;
    fn eq_erased(&self, other: &dyn Any) -> bool;
}

impl<T: Clone + PartialEq + 'static> ErasedValue for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn clone_boxed(&self) -> Box<dyn ErasedValue> {
        Box::new(self.clone())
    }

    fn eq_erased(&self, other: &dyn Any) -> bool {
        other.downcast_ref::<T>() == Some(self)
    }
}
