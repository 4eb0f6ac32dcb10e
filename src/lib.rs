#![forbid(unsafe_code)]

pub mod curve;
pub mod curve_drag;
pub mod curve_natural;
pub mod error;
pub mod interval;
pub mod subpixel;

pub use curve::Curve;
pub use curve_drag::{Drag, DragParams};
pub use curve_natural::{NaturalAccelerationCurve, NaturalCurveParams};
pub use error::{KinetError, KinetResult};
pub use interval::{Interval, scale};
pub use subpixel::SubPixelator;
