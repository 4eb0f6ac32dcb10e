use kinet::{Curve, Drag, DragParams, NaturalAccelerationCurve, NaturalCurveParams};

#[derive(serde::Deserialize)]
struct Profile {
    pointer: NaturalCurveParams,
    scroll: DragParams,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let s = include_str!("../tests/data/flick_profile.json");
    let profile: Profile = serde_json::from_str(s)?;

    let gain = NaturalAccelerationCurve::new(profile.pointer)?;
    for speed in [0.5, 1.0, 2.0, 5.0, 10.0] {
        println!("speed {speed}: gain {:.4}", gain.evaluate(speed)?);
    }

    let drag = Drag::new(profile.scroll)?;
    println!(
        "flick stops after {:.3}s over {:.1}px",
        drag.time_to_stop(),
        drag.distance_to_stop()
    );
    for frame in [0u32, 15, 30, 45, 60] {
        let progress = drag.evaluate(f64::from(frame) / 60.0)?;
        println!("frame {frame}: progress {progress:.4}");
    }

    Ok(())
}
