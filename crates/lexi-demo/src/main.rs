//! Lexi Demo - Synthetic Trace Replay
//!
//! Usage: `lexi-demo <letter> [out_dir] [size]`
//!
//! Traces every stroke of a built-in letter by following its sample points,
//! then writes `frame-NN.png` after each committed stroke and `final.png`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use lexi_geom::Point;
use lexi_render::{TraceScene, TraceStyle, rasterize, save_png};
use lexi_trace::{ReleaseOutcome, TraceObserver, Tracer, TracerConfig, letters};
use tracing_subscriber::EnvFilter;

const DEFAULT_SIZE: f32 = 512.0;

/// Command line arguments
#[derive(Debug, PartialEq)]
struct Args {
    letter: char,
    out_dir: PathBuf,
    size: f32,
}

impl Args {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self> {
        let letter = args.next().context("usage: lexi-demo <letter> [out_dir] [size]")?;
        let mut chars = letter.chars();
        let (Some(letter), None) = (chars.next(), chars.next()) else {
            bail!("expected a single letter, got {letter:?}");
        };
        let out_dir = args.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));
        let size = match args.next() {
            Some(s) => s.parse::<f32>().with_context(|| format!("invalid size {s:?}"))?,
            None => DEFAULT_SIZE,
        };
        if !size.is_finite() || size < 1.0 {
            bail!("size must be at least 1, got {size}");
        }
        Ok(Self { letter, out_dir, size })
    }
}

/// Logs host notifications
struct LogObserver;

impl TraceObserver for LogObserver {
    fn on_path_change(&mut self, paths: &[String]) {
        tracing::info!("{} stroke(s) committed", paths.len());
    }

    fn on_stroke_complete(&mut self, path: &str) {
        tracing::info!("Stroke complete: {}", path);
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse(std::env::args().skip(1))?;
    let Some(guide) = letters::guide_for(args.letter) else {
        let known: String = letters::available().into_iter().collect();
        bail!("no built-in guide for {:?} (available: {})", args.letter, known);
    };
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;

    let mut tracer = Tracer::new(guide, TracerConfig::default())
        .with_observer(LogObserver)
        .with_size(args.size, args.size);
    if !tracer.guides().has_traceable() {
        bail!("guide for {:?} has no traceable stroke", args.letter);
    }
    tracing::info!("Tracing {:?}: {} stroke(s) at {}px", args.letter, tracer.guides().len(), args.size);

    let style = TraceStyle::default();
    let mut frame = 0usize;
    while !tracer.is_complete() {
        let index = tracer.session().active_stroke();
        let points: Vec<Point> = match tracer.guides().get(index) {
            Some(g) => g.sampled().points().iter().map(|&p| tracer.viewport().to_pixels(p)).collect(),
            None => bail!("active stroke {index} has no guide"),
        };
        match replay_stroke(&mut tracer, &points) {
            ReleaseOutcome::Committed { .. } => {
                frame += 1;
                write_frame(&tracer, &style, &args.out_dir.join(format!("frame-{frame:02}.png")))?;
            }
            other => bail!("stroke {index} did not commit: {other:?}"),
        }
    }

    write_frame(&tracer, &style, &args.out_dir.join("final.png"))?;
    tracing::info!("Wrote {} frame(s) to {}", frame + 1, args.out_dir.display());
    Ok(())
}

/// Press at the first point, drag through the rest, release
fn replay_stroke<O: TraceObserver>(tracer: &mut Tracer<O>, points: &[Point]) -> ReleaseOutcome {
    let Some(&start) = points.first() else {
        return tracer.pointer_up();
    };
    let armed = tracer.pointer_down(start);
    tracing::debug!("Down at ({:.1}, {:.1}): {:?}", start.x, start.y, armed);
    for &p in points {
        let outcome = tracer.pointer_move(p);
        tracing::trace!("Move to ({:.1}, {:.1}): {:?}", p.x, p.y, outcome);
    }
    tracer.pointer_up()
}

fn write_frame<O: TraceObserver>(tracer: &Tracer<O>, style: &TraceStyle, path: &Path) -> Result<()> {
    let scene = TraceScene::build(tracer, style);
    let pixmap = rasterize(&scene, tracer.viewport())?;
    save_png(&pixmap, path).with_context(|| format!("writing {}", path.display()))?;
    tracing::info!("Saved {}", path.display());
    Ok(())
}
