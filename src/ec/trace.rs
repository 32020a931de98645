//! Observability hook for the double-and-add walk
//!
//! The multiplier reports each step through a callback instead of
//! printing from inside the arithmetic loop. [`NullObserver`] discards
//! the steps; [`TraceObserver`] forwards them to the `tracing` crate at
//! TRACE level for pedagogical inspection of a multiplication.

use crate::ec::point::Point;

/// One step of a scalar multiplication
#[derive(Debug)]
pub enum MulStep<'a> {
    /// The accumulator was doubled while consuming bit `bit`
    Doubled {
        /// Index of the scalar bit being consumed (LSB = 0)
        bit: u64,
        /// Accumulator after the doubling
        acc: &'a Point,
    },
    /// The base point was added because bit `bit` was set
    Added {
        /// Index of the scalar bit being consumed (LSB = 0)
        bit: u64,
        /// Accumulator after the addition
        acc: &'a Point,
    },
}

/// Callback invoked by the multiplier after each step
pub trait MulObserver {
    /// Called after every doubling and every conditional addition.
    fn on_step(&mut self, step: MulStep<'_>);
}

/// Observer that discards all steps
pub struct NullObserver;

impl MulObserver for NullObserver {
    fn on_step(&mut self, _step: MulStep<'_>) {}
}

/// Observer that emits each step as a `tracing` TRACE event
pub struct TraceObserver;

impl MulObserver for TraceObserver {
    fn on_step(&mut self, step: MulStep<'_>) {
        match step {
            MulStep::Doubled { bit, acc } => {
                tracing::trace!(target: "curvekey", bit, acc = %acc, "doubled accumulator");
            }
            MulStep::Added { bit, acc } => {
                tracing::trace!(target: "curvekey", bit, acc = %acc, "added base point");
            }
        }
    }
}
