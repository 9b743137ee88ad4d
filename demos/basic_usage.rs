// demos/basic_usage.rs
//! Builds a small triangle, derives its normal and prints it as an STL facet.

use tracing::{info, warn};
use vecmath3d::prelude::*;

/// Uniform scaling about the origin.
struct Scale(f64);

impl Transform for Scale {
    fn apply(&self, v: &mut MutableVector3) -> Vector3 {
        v.times(self.0)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let a = factory::zero();
    let b = factory::x(2.0);
    let c = factory::xy(0.0, 2.0);

    let normal = b.minus(&a).crossed(&c.minus(&a)).normalized();
    info!(%normal, "triangle normal");
    info!(angle = b.angle(&c), "angle between edges (degrees)");

    let scaled: Vec<Vector3> = [a, b, c].iter().map(|v| v.transformed(&Scale(0.5))).collect();

    let mut out = String::from("facet normal ");
    normal.append_stl_string(&mut out).push('\n');
    out.push_str("  outer loop\n");
    for v in &scaled {
        out.push_str("    vertex ");
        v.append_stl_string(&mut out).push('\n');
    }
    out.push_str("  endloop\nendfacet");
    println!("{}", out);

    if let Err(e) = normal.get(3) {
        warn!(error = %e, "indexed access outside 0..=2");
    }
}
