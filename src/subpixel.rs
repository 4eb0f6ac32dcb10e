/// Accumulates fractional per-frame deltas and emits integer ones.
///
/// An animation driver sampling a drag curve produces fractional pixel
/// deltas each frame, but event dispatch needs integers. The pixelator keeps
/// the rounding residue, so the sum of emitted integers never drifts more
/// than one pixel from the true sum. Caller-owned; one per gesture stream.
#[derive(Clone, Copy, Debug, Default)]
pub struct SubPixelator {
    residue: f64,
}

impl SubPixelator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn int_delta(&mut self, delta: f64) -> i64 {
        self.residue += delta;
        let whole = self.residue.trunc();
        self.residue -= whole;
        whole as i64
    }

    /// Clears the residue. Call at the start of a new gesture.
    pub fn reset(&mut self) {
        self.residue = 0.0;
    }
}
