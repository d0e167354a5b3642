use anyhow::{Context, Result};
use simplevector::core::prelude::*;
use simplevector::util::{self, err};

fn main() -> Result<()> {
    err::log_err_and_ignore(util::setup_log());

    let mut v = Vector2::new(10.0, 10.0);
    info!("{v}: length {:.3}, {:.1} degrees", v.length(), v.degrees());
    v.set_degrees(90.0);
    info!("rotated to 90 degrees: {v}");
    v.set_length(3.0);
    info!("scaled to length 3: {v}");

    let a = Vector3::new(1.0, 0.0, 0.0);
    let b = Vector3::new(0.0, 1.0, 0.0);
    info!("{a} x {b} = {}", a.cross_product(b));

    let mut bx = Box2D::new(Vector2::new(100.0, 100.0), Vector2::new(50.0, 20.0))?
        .with_origin(Vector2::new(25.0, 10.0));
    bx.rotation = std::f64::consts::FRAC_PI_4;
    info!(
        "box corners: [{}]",
        bx.points().iter().map(ToString::to_string).join(", ")
    );

    let rect = Rect::new(Vector2::new(10.0, 20.0), Vector2::new(30.0, 40.0));
    let circle = Circle::new(3.0, Vector2::new(2.0, 5.2));
    info!("rect area {}, perimeter {}", rect.area(), rect.perimeter());
    info!(
        "circle area {:.3}, contains origin: {}",
        circle.area(),
        circle.contains(Vector2::zero())
    );

    let diagonal = Line::new(Vector2::zero(), Vector2::new(10.0, 10.0));
    let crossing = Line::new(Vector2::new(0.0, 10.0), Vector2::new(10.0, 0.0));
    let vertical = Line::new(Vector2::new(3.0, 0.0), Vector2::new(3.0, 10.0));
    if let Some(p) = err::log_and_ok(diagonal.intersection(&crossing).map_err(Into::into)) {
        info!("lines meet at {p}");
    }
    if err::log_and_ok(diagonal.intersection(&vertical).map_err(Into::into)).is_none() {
        warn!("no intersection with a vertical line");
    }

    let mut color = Color::from_hsb(7.0 / 12.0, 0.4, 0.9, 1.0);
    info!("{color} {} \"{}\"", color.hex(), color.description());
    color.set_saturation(1.0);
    info!("{color} {} \"{}\"", color.hex(), color.description());

    let mut sink = Vec::new();
    let mut written = v.write(&mut sink)?;
    written += a.write(&mut sink)?;
    written += rect.write(&mut sink)?;
    written += circle.write(&mut sink)?;
    written += color.write(&mut sink)?;
    info!("packed {written} bytes");

    let (rest, tail) = sink.split_at(sink.len() - Color::PACKED_LEN);
    let decoded = Color::from_bytes(tail).context("decoding trailing colour")?;
    info!("decoded {decoded} after {} bytes of shapes", rest.len());
    Ok(())
}
