use crate::{
    curve::Curve,
    error::{KinetError, KinetResult},
    interval::{Interval, scale},
};

/// Physical parameters of a drag deceleration, as a host would persist them.
///
/// Velocity never reaches exactly 0 under power-law drag, so `stop_speed` is
/// the threshold at which motion counts as stopped; it must satisfy
/// `0 < stop_speed < initial_speed`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DragParams {
    pub coefficient: f64,
    pub exponent: f64,
    pub initial_speed: f64,
    pub stop_speed: f64,
}

/// Solved power-law drag model `v'(t) = -a·v(t)^b`.
///
/// Closed forms:
/// `v(t) = ((b-1)·a·(t-c))^(1/(1-b))`
/// `d(t) = (a·(b-1)·(t-c))^(1/(1-b)+1) / (a·(b-2)) + k`
///
/// `c` shifts the velocity curve along the t axis so `v(0) = initial_speed`;
/// `k` shifts the distance curve so `d(0) = 0`. Solving the closed forms once
/// at construction also yields how long and how far the motion runs before it
/// stops, which a frame-by-frame driver could never tell up front.
#[derive(Clone, Copy, Debug)]
pub struct Drag {
    a: f64,
    b: f64,
    c: f64,
    k: f64,
    time_to_stop: f64,
    distance_to_stop: f64,
}

/// `c` such that `v(t)` passes through the point `(t, v)`.
fn time_shift(a: f64, b: f64, t: f64, v: f64) -> f64 {
    t - v.powf(1.0 - b) / ((b - 1.0) * a)
}

/// The `t` at which `v(t)` decays to `v`.
fn time_at_speed(a: f64, b: f64, c: f64, v: f64) -> f64 {
    v.powf(1.0 - b) / (a * (b - 1.0)) + c
}

fn speed_at(a: f64, b: f64, c: f64, t: f64) -> f64 {
    ((b - 1.0) * a * (t - c)).powf(1.0 / (1.0 - b))
}

fn distance_at(a: f64, b: f64, c: f64, k: f64, t: f64) -> f64 {
    (a * (b - 1.0) * (t - c)).powf(1.0 / (1.0 - b) + 1.0) / (a * (b - 2.0)) + k
}

/// `k` such that `d(t)` passes through the point `(t, d)`.
fn distance_shift(a: f64, b: f64, c: f64, t: f64, d: f64) -> f64 {
    -distance_at(a, b, c, 0.0, t) + d
}

impl Drag {
    #[tracing::instrument(level = "debug")]
    pub fn new(params: DragParams) -> KinetResult<Self> {
        let DragParams {
            coefficient: a,
            exponent: b,
            initial_speed: v0,
            stop_speed: vs,
        } = params;

        if ![a, b, v0, vs].iter().all(|p| p.is_finite()) {
            return Err(KinetError::validation("drag parameters must be finite"));
        }
        if a <= 0.0 {
            return Err(KinetError::validation(
                "drag coefficient must be greater than 0",
            ));
        }
        // b = 1 and b = 2 are singularities of the closed forms.
        if b == 1.0 || b == 2.0 {
            return Err(KinetError::validation(
                "drag exponent must not be 1 or 2 (closed forms are undefined there)",
            ));
        }
        if v0 <= 0.0 {
            return Err(KinetError::validation(
                "drag initial_speed must be greater than 0",
            ));
        }
        if !(0.0 < vs && vs < v0) {
            return Err(KinetError::validation(
                "drag stop_speed must lie strictly between 0 and initial_speed",
            ));
        }

        let c = time_shift(a, b, 0.0, v0);
        let k = distance_shift(a, b, c, 0.0, 0.0);
        let time_to_stop = time_at_speed(a, b, c, vs);
        let distance_to_stop = distance_at(a, b, c, k, time_to_stop);

        if !(time_to_stop.is_finite() && time_to_stop > 0.0)
            || !(distance_to_stop.is_finite() && distance_to_stop > 0.0)
        {
            return Err(KinetError::validation(
                "drag parameters do not produce a finite positive stop time and distance",
            ));
        }
        tracing::debug!(c, k, time_to_stop, distance_to_stop, "solved drag curve");

        Ok(Self {
            a,
            b,
            c,
            k,
            time_to_stop,
            distance_to_stop,
        })
    }

    /// Seconds until velocity decays to `stop_speed`.
    pub fn time_to_stop(&self) -> f64 {
        self.time_to_stop
    }

    /// Distance accumulated by `time_to_stop`.
    pub fn distance_to_stop(&self) -> f64 {
        self.distance_to_stop
    }

    /// The solved `v(t)`, in real units.
    pub fn speed_at(&self, t: f64) -> f64 {
        speed_at(self.a, self.b, self.c, t)
    }

    /// The solved `d(t)`, in real units, with `d(0) = 0`.
    pub fn distance_at(&self, t: f64) -> f64 {
        distance_at(self.a, self.b, self.c, self.k, t)
    }
}

impl Curve for Drag {
    /// Animation drivers expect curves passing through (0,0) and (1,1), so
    /// progress is rescaled to real time, run through `d(t)`, and the
    /// resulting distance rescaled back to the unit interval.
    fn evaluate(&self, at: f64) -> KinetResult<f64> {
        if !at.is_finite() {
            return Err(KinetError::evaluation("curve input must be finite"));
        }
        let t = scale(at, Interval::UNIT, Interval::new(0.0, self.time_to_stop))?;
        let d = self.distance_at(t);
        scale(d, Interval::new(0.0, self.distance_to_stop), Interval::UNIT)
    }
}
