// Copyright 2026 the Tierline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dynamic (parameterized) styles.
//!
//! A [`DynamicStyle`] is a function from an opaque input (the caller's
//! props) to a [`StyleDefinition`]. It carries no resolution state of its
//! own: each resolution pass binds it to that pass's context, producing a
//! [`BoundDynamicStyle`] whose calls resolve against exactly that snapshot.
//! The snapshot is rebuilt on every pass, so a stale binding is never
//! reused after the width changes.

use alloc::rc::Rc;
use core::any::Any;
use core::fmt;

use tierline_breakpoint::BreakpointSet;

use crate::definition::StyleDefinition;
use crate::error::{EvaluationError, ResolveError};
use crate::resolve::{ResolveCx, ResolveMode, ResolvedStyle, resolve};

type DynamicFn = dyn Fn(&dyn Any) -> Result<StyleDefinition, EvaluationError>;

/// A shared function from opaque input to a [`StyleDefinition`].
///
/// Inputs are passed as `&dyn Any`, keeping props as opaque to the system
/// as values are. Use [`DynamicStyle::from_fn`] to work with a concrete
/// input type; the adapter reports a type mismatch as an
/// [`EvaluationError`] instead of panicking.
///
/// # Example
///
/// ```rust
/// use tierline_style::{DynamicStyle, PropertySet, StyleDefinition};
///
/// struct Props {
///     size: i32,
/// }
///
/// let dynamic = DynamicStyle::from_fn(|props: &Props| {
///     StyleDefinition::builder()
///         .set("size", props.size)
///         .cascading("desktop", PropertySet::builder().set("size", 15_i32).build())
///         .build()
/// });
/// ```
#[derive(Clone)]
pub struct DynamicStyle {
    f: Rc<DynamicFn>,
}

impl DynamicStyle {
    /// Creates a dynamic style from a fallible erased-input function.
    #[must_use]
    pub fn new(
        f: impl Fn(&dyn Any) -> Result<StyleDefinition, EvaluationError> + 'static,
    ) -> Self {
        Self { f: Rc::new(f) }
    }

    /// Creates a dynamic style from a function over a concrete input type.
    ///
    /// Calling the style with an input that is not a `P` fails with an
    /// input-type [`EvaluationError`].
    #[must_use]
    pub fn from_fn<P: 'static>(f: impl Fn(&P) -> StyleDefinition + 'static) -> Self {
        Self::new(move |input: &dyn Any| {
            input
                .downcast_ref::<P>()
                .map(&f)
                .ok_or_else(EvaluationError::input_type::<P>)
        })
    }

    /// Invokes the underlying function.
    pub(crate) fn invoke(&self, input: &dyn Any) -> Result<StyleDefinition, EvaluationError> {
        (self.f)(input)
    }

    /// Returns `true` if two handles share the same underlying function.
    #[must_use]
    pub fn same_fn(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.f, &other.f)
    }
}

impl fmt::Debug for DynamicStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicStyle").finish_non_exhaustive()
    }
}

/// A [`DynamicStyle`] bound to one resolution snapshot.
///
/// Produced by sheet resolution; every call evaluates the function with the
/// given input and resolves the returned definition against the bound
/// width, breakpoint set, and mode.
#[derive(Clone, Debug)]
pub struct BoundDynamicStyle {
    style: DynamicStyle,
    width: f64,
    breakpoints: BreakpointSet,
    mode: ResolveMode,
}

impl BoundDynamicStyle {
    /// Binds a dynamic style to a resolution context snapshot.
    #[must_use]
    pub fn bind(style: &DynamicStyle, cx: &ResolveCx<'_>) -> Self {
        Self {
            style: style.clone(),
            width: cx.width(),
            breakpoints: cx.breakpoints().clone(),
            mode: cx.mode(),
        }
    }

    /// Returns the width this binding resolves against.
    #[must_use]
    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the bound resolution mode.
    #[must_use]
    #[inline]
    pub fn mode(&self) -> ResolveMode {
        self.mode
    }

    /// Evaluates the function with `input` and resolves the result.
    ///
    /// # Errors
    ///
    /// [`ResolveError::Evaluation`] if the function fails;
    /// [`ResolveError::Config`] if the bound width has no active tier in
    /// the bound set (possible when the definition is resolved against a
    /// caller-supplied override set).
    pub fn call(&self, input: &dyn Any) -> Result<ResolvedStyle, ResolveError> {
        let definition = self.style.invoke(input)?;
        let cx = ResolveCx::new(self.width, &self.breakpoints, self.mode);
        Ok(resolve(&definition, &cx)?)
    }
}

impl PartialEq for BoundDynamicStyle {
    /// Bindings are equal when they share the same function and the same
    /// snapshot. Function identity stands in for function equality; a
    /// rebound snapshot with a different width always compares unequal, so
    /// observers re-notify rather than reuse a stale closure.
    fn eq(&self, other: &Self) -> bool {
        self.style.same_fn(&other.style)
            && self.width == other.width
            && self.mode == other.mode
            && self.breakpoints == other.breakpoints
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::PropertySet;

    struct Props {
        size: i32,
    }

    fn sizing() -> DynamicStyle {
        DynamicStyle::from_fn(|props: &Props| {
            StyleDefinition::builder()
                .set("size", props.size)
                .cascading("desktop", PropertySet::builder().set("size", 15_i32).build())
                .build()
        })
    }

    #[test]
    fn bound_call_resolves_against_snapshot() {
        let breakpoints = BreakpointSet::default();
        let style = sizing();

        let at_desktop = BoundDynamicStyle::bind(
            &style,
            &ResolveCx::new(1024.0, &breakpoints, ResolveMode::Cascade),
        );
        let resolved = at_desktop.call(&Props { size: 12 }).unwrap();
        assert_eq!(resolved.get::<i32>("size"), Some(&15));

        let at_tablet = BoundDynamicStyle::bind(
            &style,
            &ResolveCx::new(1000.0, &breakpoints, ResolveMode::Cascade),
        );
        let resolved = at_tablet.call(&Props { size: 12 }).unwrap();
        assert_eq!(resolved.get::<i32>("size"), Some(&12));
    }

    #[test]
    fn input_type_mismatch_is_an_evaluation_error() {
        let breakpoints = BreakpointSet::default();
        let bound = BoundDynamicStyle::bind(
            &sizing(),
            &ResolveCx::new(800.0, &breakpoints, ResolveMode::Cascade),
        );

        let err = bound.call(&"not props").unwrap_err();
        assert!(matches!(err, ResolveError::Evaluation(_)));
    }

    #[test]
    fn function_failures_propagate_unmodified() {
        let breakpoints = BreakpointSet::default();
        let failing = DynamicStyle::new(|_| Err(EvaluationError::new("author error")));
        let bound = BoundDynamicStyle::bind(
            &failing,
            &ResolveCx::new(800.0, &breakpoints, ResolveMode::Cascade),
        );

        let err = bound.call(&()).unwrap_err();
        assert_eq!(
            err,
            ResolveError::Evaluation(EvaluationError::new("author error"))
        );
    }

    #[test]
    fn rebinding_changes_equality() {
        let breakpoints = BreakpointSet::default();
        let style = sizing();

        let a = BoundDynamicStyle::bind(
            &style,
            &ResolveCx::new(1024.0, &breakpoints, ResolveMode::Cascade),
        );
        let b = BoundDynamicStyle::bind(
            &style,
            &ResolveCx::new(1024.0, &breakpoints, ResolveMode::Cascade),
        );
        let c = BoundDynamicStyle::bind(
            &style,
            &ResolveCx::new(1000.0, &breakpoints, ResolveMode::Cascade),
        );

        assert_eq!(a, b);
        assert_ne!(a, c);

        // Same body, different function instance: not equal.
        let other = sizing();
        let d = BoundDynamicStyle::bind(
            &other,
            &ResolveCx::new(1024.0, &breakpoints, ResolveMode::Cascade),
        );
        assert_ne!(a, d);
    }
}
