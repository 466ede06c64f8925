mod config;
mod expect;
mod trace;

use std::{
    io::{self, Write},
    path::PathBuf,
    process,
};

use anyhow::{bail, Result};
use clap::Parser;
use touch_gestures::{GestureConfig, GestureEngine, GestureEvent, GestureEventKind};

use trace::ReplayFrame;

#[derive(Debug, Parser)]
#[command(name = "gesture_replay")]
#[command(about = "Replay a recorded contact-frame trace through the gesture engine")]
struct Cli {
    /// CSV trace with `frame,ms,count,phase0,x0,y0,phase1,x1,y1` rows.
    trace: PathBuf,
    /// File listing the expected event kinds, one per line.
    #[arg(long)]
    expect: Option<PathBuf>,
    /// TOML file with a `[gestures]` table overriding the thresholds.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp_millis()
        .init();

    if let Err(err) = run(&cli) {
        eprintln!("error: {err:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = config::load_config(cli.config.as_deref())?;
    let frames = trace::read_trace(&cli.trace)?;
    log::info!("replaying {} frames from {}", frames.len(), cli.trace.display());

    let events = replay(config, &frames);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_events(&mut out, &events)?;
    out.flush()?;

    if let Some(expect_path) = &cli.expect {
        let expected = expect::read_expected_kinds(expect_path)?;
        let actual: Vec<&str> = events.iter().map(|event| event.kind.label()).collect();
        if actual != expected {
            eprintln!("expected kinds: {}", expected.join(","));
            eprintln!("actual kinds:   {}", actual.join(","));
            bail!("event sequence mismatch");
        }
    }

    Ok(())
}

fn replay(config: GestureConfig, frames: &[ReplayFrame]) -> Vec<GestureEvent> {
    let mut engine = GestureEngine::with_config(config);
    let mut events = Vec::new();
    for replay in frames {
        events.extend(engine.tick(replay.ms, replay.frame));
    }
    if engine.is_touching() {
        log::warn!("trace ended with a contact still down");
    }
    events
}

fn write_events(out: &mut impl Write, events: &[GestureEvent]) -> io::Result<()> {
    writeln!(out, "event,ms,kind,x,y,angle,distance")?;
    for event in events {
        let point = event.kind.point();
        let (angle, distance) = match &event.kind {
            GestureEventKind::Swipe(swipe) => (swipe.angle.to_string(), swipe.distance.to_string()),
            GestureEventKind::Pinch(pinch) => {
                (pinch.angle.to_string(), pinch.current_distance.to_string())
            }
            _ => (String::new(), String::new()),
        };
        writeln!(
            out,
            "event,{},{},{},{},{},{}",
            event.t_ms,
            event.kind.label(),
            point.x(),
            point.y(),
            angle,
            distance
        )?;
    }
    Ok(())
}
