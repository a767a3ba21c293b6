// Copyright 2026 the Tierline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The width-measurement capability.
//!
//! [`WidthSource`] is the seam between this workspace and whatever actually
//! measures the viewport: an embedder implements it over its windowing or
//! dimensions service. Notifications carry no payload; consumers re-read
//! [`WidthSource::current_width`] when notified.

use alloc::boxed::Box;
use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

/// A live, observable width measurement.
pub trait WidthSource {
    /// Returns the current measurement synchronously.
    fn current_width(&self) -> f64;

    /// Registers a listener fired after each measurement change.
    ///
    /// The returned [`Subscription`] removes the listener when dropped.
    fn subscribe(&self, listener: Rc<dyn Fn()>) -> Subscription;
}

/// An RAII handle to a registered listener.
///
/// Dropping the subscription (or calling [`unsubscribe`](Self::unsubscribe)
/// explicitly) removes the listener deterministically; holding it is what
/// keeps the registration alive. Subscriptions are the only cancellation
/// primitive; in-flight synchronous resolution is never interrupted.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Creates a subscription that runs `cancel` when released.
    #[must_use]
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Removes the listener now instead of at drop time.
    pub fn unsubscribe(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

/// Internal state of a [`ManualWidthSource`].
struct ManualSourceState {
    width: f64,
    next_id: u64,
    listeners: Vec<(u64, Rc<dyn Fn()>)>,
}

/// A width source driven by explicit calls.
///
/// The in-memory reference implementation of [`WidthSource`]: embedders
/// without a windowing service, and tests, set the width by hand. Cloning
/// shares state, so one handle can drive sources held elsewhere.
///
/// # Example
///
/// ```rust
/// use std::rc::Rc;
/// use tierline_observe::{ManualWidthSource, WidthSource};
///
/// let source = ManualWidthSource::new(1024.0);
/// assert_eq!(source.current_width(), 1024.0);
///
/// let subscription = source.subscribe(Rc::new(|| { /* recompute */ }));
/// source.set_width(768.0);
/// assert_eq!(source.current_width(), 768.0);
///
/// drop(subscription); // listener removed
/// ```
#[derive(Clone)]
pub struct ManualWidthSource {
    inner: Rc<RefCell<ManualSourceState>>,
}

impl ManualWidthSource {
    /// Creates a source reporting the given width.
    #[must_use]
    pub fn new(width: f64) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ManualSourceState {
                width,
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }

    /// Updates the measurement and fires all listeners.
    pub fn set_width(&self, width: f64) {
        self.inner.borrow_mut().width = width;
        self.notify();
    }

    /// Fires all listeners without changing the measurement.
    ///
    /// Useful for exercising redundant notifications. The listener list is
    /// snapshotted first, so listeners may unsubscribe (or subscribe)
    /// during notification.
    pub fn notify(&self) {
        let listeners: Vec<Rc<dyn Fn()>> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in listeners {
            listener();
        }
    }

    /// Returns the number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl WidthSource for ManualWidthSource {
    fn current_width(&self) -> f64 {
        self.inner.borrow().width
    }

    fn subscribe(&self, listener: Rc<dyn Fn()>) -> Subscription {
        let id = {
            let mut state = self.inner.borrow_mut();
            let id = state.next_id;
            state.next_id += 1;
            state.listeners.push((id, listener));
            id
        };
        let weak: Weak<RefCell<ManualSourceState>> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner
                    .borrow_mut()
                    .listeners
                    .retain(|(listener_id, _)| *listener_id != id);
            }
        })
    }
}

impl fmt::Debug for ManualWidthSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.borrow();
        f.debug_struct("ManualWidthSource")
            .field("width", &state.width)
            .field("listeners", &state.listeners.len())
            .finish()
    }
}
