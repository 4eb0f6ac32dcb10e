use crate::error::KinetResult;

/// An immutable function object producing a real output for a real input.
///
/// Implementations are deterministic and pure: the same input always yields
/// the same output for a given instance, and evaluation reads only constants
/// fixed at construction, so a curve may be sampled concurrently from any
/// thread. Curves intended to drive progress-based animation map [0,1] to
/// [0,1]; gain curves (input speed to sensitivity) take real speed values.
pub trait Curve {
    fn evaluate(&self, at: f64) -> KinetResult<f64>;
}

impl<C: Curve + ?Sized> Curve for &C {
    fn evaluate(&self, at: f64) -> KinetResult<f64> {
        (**self).evaluate(at)
    }
}

impl<C: Curve + ?Sized> Curve for Box<C> {
    fn evaluate(&self, at: f64) -> KinetResult<f64> {
        (**self).evaluate(at)
    }
}
