//! Print the readout a diagram would show for a few probe points.
//!
//! Usage:
//!   cargo run -p ternary --example readout -- [parallel|altitude]

use ternary::prelude::*;

fn main() {
    let mode = std::env::args()
        .nth(1)
        .map(|s| s.parse::<ProjectionMode>())
        .unwrap_or(Ok(ProjectionMode::ParallelToEdge));
    let mode = match mode {
        Ok(m) => m,
        Err(e) => {
            eprintln!("{e}; usage: readout [parallel|altitude]");
            return;
        }
    };
    let tri = match DiagramCfg::default().triangle() {
        Ok(t) => t,
        Err(e) => {
            eprintln!("layout: {e}");
            return;
        }
    };
    println!("{}", mode.status());
    let probes = [
        tri.centroid(),
        tri.centroid() + Vec2::new(0.0, -120.0),
        tri.centroid() + Vec2::new(-90.0, 60.0),
        Vec2::new(0.0, 0.0),
    ];
    for p in probes {
        match tri.solve_composition(p, mode) {
            Ok(sol) => println!(
                "({:7.2}, {:7.2})  {}",
                p.x,
                p.y,
                Readout::new(&sol.composition, 2)
            ),
            Err(e) => println!("({:7.2}, {:7.2})  {e}", p.x, p.y),
        }
    }
}
