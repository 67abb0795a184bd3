// Copyright 2026 the Plotpane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plotpane Curves: the shared registry of graphed functions.
//!
//! A curve is an opaque evaluator: given a world-space `x`, it yields a
//! world-space `y` or reports that the function is undefined there. This
//! crate does not parse expressions; an external expression-evaluation
//! collaborator produces the evaluators and registers them here.
//!
//! The registry is a shared mutable resource read by the render task and
//! mutated from input-side call sites. Every structural access goes through
//! a read/write lock, and the renderer holds the read guard for a whole
//! sampling pass so it always observes a consistent snapshot of the set.
//!
//! The [`CurveFn`] trait and [`Curve`] alias are available without `std`;
//! the lock-guarded [`CurveSet`] registry is behind the (default) `std`
//! feature.
//!
//! ## Minimal example
//!
//! ```rust
//! use plotpane_curves::CurveSet;
//!
//! let curves = CurveSet::new();
//! curves.add(|x: f64| Some(x * x));
//! curves.add(|x: f64| if x == 0.0 { None } else { Some(1.0 / x) });
//!
//! let guard = curves.read();
//! assert_eq!(guard.len(), 2);
//! assert_eq!(guard[0].eval(2.0), Some(4.0));
//! assert_eq!(guard[1].eval(0.0), None);
//! ```

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

use alloc::sync::Arc;

/// An opaque function evaluator over one real variable.
///
/// `None` is the defined failure sentinel for points outside the function's
/// domain; it is never an error, just an undefined sample. Implementations
/// must be cheap enough to call a few hundred times per frame.
pub trait CurveFn: Send + Sync {
    /// Evaluates the function at `x`.
    fn eval(&self, x: f64) -> Option<f64>;
}

impl<F> CurveFn for F
where
    F: Fn(f64) -> Option<f64> + Send + Sync,
{
    fn eval(&self, x: f64) -> Option<f64> {
        self(x)
    }
}

/// A registered curve: shared ownership of an evaluator.
pub type Curve = Arc<dyn CurveFn>;

#[cfg(feature = "std")]
mod set {
    use super::{Curve, CurveFn};
    use alloc::sync::Arc;
    use alloc::vec::Vec;
    use core::fmt;
    use std::sync::{RwLock, RwLockReadGuard};

    /// Cheaply clonable handle to the shared, lock-guarded list of curves.
    ///
    /// Clones refer to the same underlying list, so an input-submission
    /// handler and the render loop can hold their own handles. Readers and
    /// writers exclude each other; concurrent iteration-during-mutation is
    /// impossible by construction rather than by luck.
    #[derive(Clone, Default)]
    pub struct CurveSet {
        inner: Arc<RwLock<Vec<Curve>>>,
    }

    impl CurveSet {
        /// Creates an empty set.
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Appends a curve and returns its index.
        ///
        /// The index determines the curve's draw color (palette index modulo
        /// the palette size) and stays stable until an earlier curve is
        /// removed.
        pub fn add<C: CurveFn + 'static>(&self, curve: C) -> usize {
            let mut list = self.inner.write().expect("curve list lock poisoned");
            list.push(Arc::new(curve));
            list.len() - 1
        }

        /// Removes the curve at `index`, shifting later curves down.
        ///
        /// Returns the removed curve, or `None` if the index is out of range.
        pub fn remove(&self, index: usize) -> Option<Curve> {
            let mut list = self.inner.write().expect("curve list lock poisoned");
            if index < list.len() {
                Some(list.remove(index))
            } else {
                None
            }
        }

        /// Removes all curves.
        pub fn clear(&self) {
            self.inner.write().expect("curve list lock poisoned").clear();
        }

        /// Returns the number of registered curves.
        #[must_use]
        pub fn len(&self) -> usize {
            self.inner.read().expect("curve list lock poisoned").len()
        }

        /// Returns `true` if no curves are registered.
        #[must_use]
        pub fn is_empty(&self) -> bool {
            self.len() == 0
        }

        /// Acquires the shared read guard.
        ///
        /// The renderer holds this for the duration of one full sampling
        /// pass; writers block until the pass completes.
        #[must_use]
        pub fn read(&self) -> RwLockReadGuard<'_, Vec<Curve>> {
            self.inner.read().expect("curve list lock poisoned")
        }
    }

    impl fmt::Debug for CurveSet {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.debug_struct("CurveSet").field("len", &self.len()).finish()
        }
    }
}

#[cfg(feature = "std")]
pub use set::CurveSet;
