use crate::error::{KinetError, KinetResult};

/// A closed range of reals. Degenerate intervals (start == end) are legal
/// values; they are only rejected as the source of a `scale`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Interval {
    pub start: f64,
    pub end: f64,
}

impl Interval {
    /// The unit interval [0,1] that animation drivers deal in.
    pub const UNIT: Interval = Interval {
        start: 0.0,
        end: 1.0,
    };

    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn length(self) -> f64 {
        self.end - self.start
    }

    pub fn is_finite(self) -> bool {
        self.start.is_finite() && self.end.is_finite()
    }
}

/// Affine remap: the fractional position of `value` within `from` is
/// preserved within `to`. Extrapolates linearly outside `from`, never clamps.
pub fn scale(value: f64, from: Interval, to: Interval) -> KinetResult<f64> {
    if !value.is_finite() || !from.is_finite() || !to.is_finite() {
        return Err(KinetError::validation("scale operands must be finite"));
    }
    if from.start == from.end {
        return Err(KinetError::validation(
            "scale source interval must not be degenerate",
        ));
    }

    let unit = (value - from.start) / from.length();
    Ok(to.start + unit * to.length())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_preserves_fractional_position() {
        let v = scale(5.0, Interval::new(0.0, 10.0), Interval::new(100.0, 200.0)).unwrap();
        assert_eq!(v, 150.0);
    }

    #[test]
    fn scale_extrapolates_outside_source() {
        let v = scale(-1.0, Interval::UNIT, Interval::new(0.0, 10.0)).unwrap();
        assert_eq!(v, -10.0);
        let v = scale(2.0, Interval::UNIT, Interval::new(0.0, 10.0)).unwrap();
        assert_eq!(v, 20.0);
    }

    #[test]
    fn scale_roundtrip_recovers_value() {
        let from = Interval::new(-3.0, 7.5);
        let to = Interval::new(0.0, 1.0);
        let original = 2.25;
        let mapped = scale(original, from, to).unwrap();
        let back = scale(mapped, to, from).unwrap();
        assert!((back - original).abs() < 1e-12);
    }

    #[test]
    fn scale_rejects_degenerate_source() {
        let err = scale(1.0, Interval::new(4.0, 4.0), Interval::UNIT).unwrap_err();
        assert!(err.to_string().contains("degenerate"));
    }

    #[test]
    fn scale_rejects_non_finite_operands() {
        assert!(scale(f64::NAN, Interval::UNIT, Interval::UNIT).is_err());
        assert!(scale(0.5, Interval::new(0.0, f64::INFINITY), Interval::UNIT).is_err());
    }
}
