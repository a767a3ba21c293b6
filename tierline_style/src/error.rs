// Copyright 2026 the Tierline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolution and evaluation errors.

use alloc::string::String;
use core::fmt;

use tierline_breakpoint::ConfigError;

/// A dynamic style function failed.
///
/// Produced by the function itself (authors surface their own failures this
/// way) or by the [`DynamicStyle::from_fn`](crate::DynamicStyle::from_fn)
/// adapter when the supplied input is not of the expected type.
#[derive(Clone, Debug, PartialEq)]
pub struct EvaluationError {
    message: String,
}

impl EvaluationError {
    /// Creates an evaluation error with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Creates the error reported when a dynamic style receives an input
    /// that is not of type `P`.
    #[must_use]
    pub fn input_type<P: 'static>() -> Self {
        let mut message = String::from("dynamic style input is not of type ");
        message.push_str(core::any::type_name::<P>());
        Self { message }
    }

    /// Returns the error message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dynamic style evaluation failed: {}", self.message)
    }
}

impl core::error::Error for EvaluationError {}

/// Any failure produced while resolving styles.
#[derive(Clone, Debug, PartialEq)]
pub enum ResolveError {
    /// The breakpoint configuration rejected the resolution inputs.
    Config(ConfigError),
    /// A dynamic style function failed.
    Evaluation(EvaluationError),
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "breakpoint configuration error: {err}"),
            Self::Evaluation(err) => err.fmt(f),
        }
    }
}

impl core::error::Error for ResolveError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Evaluation(err) => Some(err),
        }
    }
}

impl From<ConfigError> for ResolveError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<EvaluationError> for ResolveError {
    fn from(err: EvaluationError) -> Self {
        Self::Evaluation(err)
    }
}
