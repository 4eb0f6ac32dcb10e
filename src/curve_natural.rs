use crate::{
    curve::Curve,
    error::{KinetError, KinetResult},
};

/// The two anchor points and shape scalar a host persists for an
/// acceleration curve. The curve passes exactly through
/// `(low_speed, low_sens)` and `(high_speed, high_sens)`; `curvature`
/// controls the exponential blend between them and must lie strictly
/// inside (0,1).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NaturalCurveParams {
    pub low_speed: f64,
    pub low_sens: f64,
    pub high_speed: f64,
    pub high_sens: f64,
    pub curvature: f64,
}

/// Exponential-blend sensitivity curve mapping input speed to pointer gain.
///
/// Closed form: `s(x) = -d·(e^(-c·(x-a)) - 1) + b` with `a, b` the low
/// anchor, `c` the curvature-derived decay rate and `d` the amplitude solved
/// so the curve also passes through the high anchor. Inputs below the low
/// anchor are clipped to it, so sensitivity is flat inside the deadzone.
#[derive(Clone, Copy, Debug)]
pub struct NaturalAccelerationCurve {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

fn decay_rate(curvature: f64) -> f64 {
    1.0 / (1.0 - curvature) - 1.0
}

fn amplitude(a: f64, b: f64, c: f64, v1: f64, s1: f64, s0: f64) -> f64 {
    let e = (c * (a - v1)).exp();
    (b * e - s1) / (e - 1.0) - s0
}

impl NaturalAccelerationCurve {
    #[tracing::instrument(level = "debug")]
    pub fn new(params: NaturalCurveParams) -> KinetResult<Self> {
        let NaturalCurveParams {
            low_speed: v0,
            low_sens: s0,
            high_speed: v1,
            high_sens: s1,
            curvature,
        } = params;

        if ![v0, s0, v1, s1, curvature].iter().all(|p| p.is_finite()) {
            return Err(KinetError::validation(
                "natural curve parameters must be finite",
            ));
        }
        if !(0.0 < curvature && curvature < 1.0) {
            return Err(KinetError::validation(
                "natural curve curvature must lie strictly inside (0,1)",
            ));
        }
        if v1 <= v0 {
            return Err(KinetError::validation(
                "natural curve high_speed must be greater than low_speed",
            ));
        }

        let a = v0;
        let b = s0;
        let c = decay_rate(curvature);
        let d = amplitude(a, b, c, v1, s1, s0);
        tracing::debug!(a, b, c, d, "fitted natural acceleration curve");

        Ok(Self { a, b, c, d })
    }

    fn evaluate_core(&self, x: f64) -> f64 {
        -self.d * ((-self.c * (x - self.a)).exp() - 1.0) + self.b
    }
}

impl Curve for NaturalAccelerationCurve {
    fn evaluate(&self, at: f64) -> KinetResult<f64> {
        if !at.is_finite() {
            return Err(KinetError::evaluation("curve input must be finite"));
        }
        // Flat sensitivity below the low-speed anchor.
        let clipped = at.max(self.a);
        Ok(self.evaluate_core(clipped))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_params() -> NaturalCurveParams {
        NaturalCurveParams {
            low_speed: 1.0,
            low_sens: 1.0,
            high_speed: 10.0,
            high_sens: 5.0,
            curvature: 0.5,
        }
    }

    #[test]
    fn passes_through_both_anchors() {
        let curve = NaturalAccelerationCurve::new(reference_params()).unwrap();
        assert!((curve.evaluate(1.0).unwrap() - 1.0).abs() < 1e-9);
        assert!((curve.evaluate(10.0).unwrap() - 5.0).abs() < 1e-9);
    }

    #[test]
    fn clips_below_low_speed_anchor() {
        let curve = NaturalAccelerationCurve::new(reference_params()).unwrap();
        let at_anchor = curve.evaluate(1.0).unwrap();
        assert_eq!(curve.evaluate(0.5).unwrap(), at_anchor);
        assert_eq!(curve.evaluate(-100.0).unwrap(), at_anchor);
    }

    #[test]
    fn monotonic_between_anchors() {
        let curve = NaturalAccelerationCurve::new(reference_params()).unwrap();
        let mut prev = curve.evaluate(1.0).unwrap();
        for i in 1..=90 {
            let x = 1.0 + (i as f64) * 0.1;
            let y = curve.evaluate(x).unwrap();
            assert!(y >= prev, "not monotonic at x={x}");
            prev = y;
        }
    }

    #[test]
    fn anchors_hold_across_curvatures() {
        for curvature in [0.05, 0.3, 0.7, 0.95] {
            let curve = NaturalAccelerationCurve::new(NaturalCurveParams {
                curvature,
                ..reference_params()
            })
            .unwrap();
            assert!((curve.evaluate(1.0).unwrap() - 1.0).abs() < 1e-9);
            assert!((curve.evaluate(10.0).unwrap() - 5.0).abs() < 1e-9);
        }
    }

    #[test]
    fn rejects_curvature_outside_open_interval() {
        for curvature in [0.0, 1.0, -0.5, 1.5] {
            let err = NaturalAccelerationCurve::new(NaturalCurveParams {
                curvature,
                ..reference_params()
            })
            .unwrap_err();
            assert!(err.to_string().contains("curvature"));
        }
    }

    #[test]
    fn rejects_anchors_out_of_order() {
        let err = NaturalAccelerationCurve::new(NaturalCurveParams {
            low_speed: 10.0,
            high_speed: 1.0,
            ..reference_params()
        })
        .unwrap_err();
        assert!(err.to_string().contains("high_speed"));
    }

    #[test]
    fn rejects_non_finite_parameters() {
        assert!(
            NaturalAccelerationCurve::new(NaturalCurveParams {
                high_sens: f64::NAN,
                ..reference_params()
            })
            .is_err()
        );
    }

    #[test]
    fn non_finite_input_is_an_evaluation_error() {
        let curve = NaturalAccelerationCurve::new(reference_params()).unwrap();
        for at in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = curve.evaluate(at).unwrap_err();
            assert!(matches!(err, KinetError::Evaluation(_)), "at={at}");
        }
    }
}
