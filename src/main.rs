//! Terminal rocket runner (default binary).
//!
//! Usage: `tui-launch [--config <path>]`
//!
//! Logs go to `log_file` from the config or `LAUNCH_LOG_FILE`; without either
//! nothing is logged, so the screen stays clean.

use std::env;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{bail, Context, Result};
use crossterm::event::{self, Event};

use tui_launch::core::{FrameStore, Launch, LaunchConfig};
use tui_launch::input::{should_quit, InputCollector};
use tui_launch::term::{FrameBuffer, TerminalRenderer};

const LOG_FILE_ENV: &str = "LAUNCH_LOG_FILE";

fn main() -> Result<()> {
    let config = match config_path()? {
        Some(path) => LaunchConfig::load(&path)?,
        None => LaunchConfig::default(),
    };
    init_logging(&config)?;

    let frames = match &config.frames_dir {
        Some(dir) => FrameStore::load_dir(dir)?,
        None => FrameStore::builtin(),
    };
    let seed = config.seed.unwrap_or_else(wall_clock_seed);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, &frames, seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        log::error!("{:#}", err);
    }
    result
}

fn run(
    term: &mut TerminalRenderer,
    config: &LaunchConfig,
    frames: &FrameStore,
    seed: u32,
) -> Result<()> {
    let bounds = TerminalRenderer::bounds()?;
    let mut fb = FrameBuffer::new(bounds.columns as u16, bounds.rows as u16);
    let mut launch = Launch::new(config, frames, bounds, seed)?;
    let mut keys = InputCollector::new();

    let tick_duration = config.tick_duration();
    let mut next_tick = Instant::now();

    loop {
        // Input until the tick deadline.
        loop {
            let timeout = next_tick
                .checked_duration_since(Instant::now())
                .unwrap_or(Duration::ZERO);
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    keys.push(key);
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }
        next_tick = next_deadline(next_tick, Instant::now(), tick_duration);

        launch.tick(&mut fb, keys.take())?;
        term.draw(&mut fb)?;
    }
}

/// Deadline of the tick after `deadline`. A late frame restarts the cadence
/// from `now` instead of queueing catch-up ticks.
fn next_deadline(deadline: Instant, now: Instant, interval: Duration) -> Instant {
    deadline.max(now) + interval
}

fn config_path() -> Result<Option<PathBuf>> {
    let mut args = env::args().skip(1);
    let mut path = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                let value = args.next().context("--config needs a path")?;
                path = Some(PathBuf::from(value));
            }
            other => bail!("unknown argument `{}`", other),
        }
    }
    Ok(path)
}

fn init_logging(config: &LaunchConfig) -> Result<()> {
    let path = config
        .log_file
        .clone()
        .or_else(|| env::var_os(LOG_FILE_ENV).map(PathBuf::from));
    let Some(path) = path else {
        return Ok(());
    };
    let file = open_log(&path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn open_log(path: &Path) -> Result<File> {
    File::create(path).with_context(|| format!("failed to open log file {}", path.display()))
}

fn wall_clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
