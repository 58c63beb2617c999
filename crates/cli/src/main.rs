use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use polars::prelude::*;
use serde::Serialize;
use serde_json::json;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

use ternary::api::{guide_lattice, interior_points, lattice_points, Readout};
use ternary::{DiagramCfg, Point, ProjectionMode, Solution, Triangle};

mod provenance;

use provenance::{write_sidecar, Sidecar};

#[derive(Parser)]
#[command(name = "ternary")]
#[command(about = "Ternary diagram geometry: evaluate points, export grids and guide lines")]
struct Cmd {
    /// Side length of the equilateral triangle (pixels)
    #[arg(long, global = true, default_value_t = 500.0)]
    side: f64,
    /// Width of the square canvas the top apex is centered on
    #[arg(long, global = true, default_value_t = 650.0)]
    canvas: f64,

    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Mode {
    Parallel,
    Altitude,
}

impl From<Mode> for ProjectionMode {
    fn from(m: Mode) -> Self {
        match m {
            Mode::Parallel => ProjectionMode::ParallelToEdge,
            Mode::Altitude => ProjectionMode::PerpendicularFromVertex,
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Composition of one screen point, printed as JSON
    Solve {
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
        #[arg(long, value_enum, default_value_t = Mode::Parallel)]
        mode: Mode,
    },
    /// Evaluate both methods over many interior points; writes CSV or Parquet
    Grid {
        #[arg(long)]
        out: String,
        /// Lattice spacing in pixels (ignored with --random)
        #[arg(long, default_value_t = 10.0)]
        step: f64,
        /// Draw this many uniform random points instead of a lattice
        #[arg(long)]
        random: Option<usize>,
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
    /// Write the inner guide lines as JSON
    Guides {
        #[arg(long, default_value_t = 10)]
        divisions: usize,
        #[arg(long)]
        out: String,
    },
    /// Per-mode min/max of a+b+c over a grid CSV
    Summarize {
        #[arg(long)]
        input: String,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let layout = DiagramCfg {
        side_length: cmd.side,
        ..DiagramCfg::for_canvas(cmd.canvas)
    };
    match cmd.action {
        Action::Solve { x, y, mode } => solve(&layout, Point::new(x, y), mode.into()),
        Action::Grid {
            out,
            step,
            random,
            seed,
        } => grid(&layout, Path::new(&out), step, random, seed).map(|_| ()),
        Action::Guides { divisions, out } => guides(&layout, divisions, Path::new(&out)),
        Action::Summarize { input } => summarize(&input),
        Action::Report => report(&layout),
    }
}

fn triangle(layout: &DiagramCfg) -> Result<Triangle> {
    layout
        .triangle()
        .with_context(|| format!("building triangle from {layout:?}"))
}

fn solution_json(sol: &Solution) -> serde_json::Value {
    json!({
        "mode": sol.mode.as_str(),
        "point": [sol.point.x, sol.point.y],
        "composition": {
            "a": sol.composition.a,
            "b": sol.composition.b,
            "c": sol.composition.c
        },
        "readout": Readout::new(&sol.composition, 2).to_string(),
        "guides": sol.guides.map(|g| [g.x, g.y])
    })
}

fn solve(layout: &DiagramCfg, p: Point, mode: ProjectionMode) -> Result<()> {
    let tri = triangle(layout)?;
    tracing::info!(x = p.x, y = p.y, mode = %mode, "solve");
    match tri.solve_composition(p, mode) {
        Ok(sol) => {
            println!("{}", serde_json::to_string_pretty(&solution_json(&sol))?);
            Ok(())
        }
        Err(e) => {
            tracing::error!(x = p.x, y = p.y, mode = %mode, error = %e, "solve failed");
            bail!(e)
        }
    }
}

/// Returns the number of rows written.
fn grid(
    layout: &DiagramCfg,
    out: &Path,
    step: f64,
    random: Option<usize>,
    seed: u64,
) -> Result<usize> {
    let tri = triangle(layout)?;
    let points = match random {
        Some(n) => interior_points(&tri, n, seed)?,
        None => lattice_points(&tri, step)?,
    };
    tracing::info!(points = points.len(), random = ?random, step, seed, "grid");

    let rows = points.len() * ProjectionMode::ALL.len();
    let (mut xs, mut ys, mut modes) = (
        Vec::with_capacity(rows),
        Vec::with_capacity(rows),
        Vec::with_capacity(rows),
    );
    let (mut a, mut b, mut c) = (
        Vec::with_capacity(rows),
        Vec::with_capacity(rows),
        Vec::with_capacity(rows),
    );
    for p in &points {
        for mode in ProjectionMode::ALL {
            let sol = tri.solve_composition(*p, mode).map_err(|e| {
                tracing::error!(x = p.x, y = p.y, mode = %mode, error = %e, "geometry failure");
                e
            })?;
            xs.push(p.x);
            ys.push(p.y);
            modes.push(mode.as_str());
            a.push(sol.composition.a);
            b.push(sol.composition.b);
            c.push(sol.composition.c);
        }
    }
    let mut df = df!(
        "x" => xs,
        "y" => ys,
        "mode" => modes,
        "a" => a,
        "b" => b,
        "c" => c
    )?;

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file =
        std::fs::File::create(out).with_context(|| format!("creating {}", out.display()))?;
    match out.extension().and_then(|e| e.to_str()) {
        Some("parquet") => {
            ParquetWriter::new(file).finish(&mut df)?;
        }
        _ => CsvWriter::new(file).include_header(true).finish(&mut df)?,
    }
    tracing::info!(rows = df.height(), out = %out.display(), "grid written");

    let sidecar = Sidecar::new(
        "grid",
        json!({ "step": step, "random": random, "seed": seed, "rows": df.height() }),
    )
    .with_triangle(&tri);
    write_sidecar(out, &sidecar)?;
    Ok(df.height())
}

#[derive(Serialize)]
struct GuideRow {
    family: &'static str,
    level: f64,
    from: [f64; 2],
    to: [f64; 2],
}

fn guides(layout: &DiagramCfg, divisions: usize, out: &Path) -> Result<()> {
    let tri = triangle(layout)?;
    let rows: Vec<GuideRow> = guide_lattice(&tri, divisions)?
        .into_iter()
        .map(|s| GuideRow {
            family: s.family.label(),
            level: s.level,
            from: [s.from.x, s.from.y],
            to: [s.to.x, s.to.y],
        })
        .collect();
    tracing::info!(divisions, segments = rows.len(), out = %out.display(), "guides");

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(&rows)?)
        .with_context(|| format!("writing {}", out.display()))?;
    let sidecar = Sidecar::new("guides", json!({ "divisions": divisions })).with_triangle(&tri);
    write_sidecar(out, &sidecar)?;
    Ok(())
}

/// Largest tolerated |a+b+c-1| before a mode is reported as drifting.
const SUM_TOLERANCE: f64 = 1e-6;

fn summarize(input: &str) -> Result<()> {
    let sum = || col("a") + col("b") + col("c");
    let df = LazyCsvReader::new(input)
        .with_infer_schema_length(Some(100))
        .finish()?
        .group_by([col("mode")])
        .agg([
            sum().min().alias("sum_min"),
            sum().max().alias("sum_max"),
            col("x").count().alias("rows"),
        ])
        .sort(["mode"], Default::default())
        .collect()?;

    let modes = df.column("mode")?.str()?;
    let mins = df.column("sum_min")?.f64()?;
    let maxs = df.column("sum_max")?.f64()?;
    for i in 0..df.height() {
        let (Some(mode), Some(lo), Some(hi)) = (modes.get(i), mins.get(i), maxs.get(i)) else {
            continue;
        };
        if (lo - 1.0).abs() > SUM_TOLERANCE || (hi - 1.0).abs() > SUM_TOLERANCE {
            tracing::warn!(mode, sum_min = lo, sum_max = hi, "fractions drift from 1");
        } else {
            tracing::info!(mode, sum_min = lo, sum_max = hi, "fractions sum to 1");
        }
    }
    println!("{df}");
    Ok(())
}

fn report(layout: &DiagramCfg) -> Result<()> {
    let tri = triangle(layout)?;
    let doc = Sidecar::new(
        "report",
        json!({ "side": layout.side_length, "offset": layout.offset }),
    )
    .with_triangle(&tri)
    .to_json(&[]);
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
