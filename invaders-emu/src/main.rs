//! Headless Space Invaders runner.
//!
//! Loads the program ROMs, runs the board for a number of frames and logs
//! progress. Useful for soak-testing the CPU core against the real game.

use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use invaders_emu::{DipSwitches, InvadersSystem, RomSet, SystemConfig};
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

/// Run the Space Invaders ROM on the lib8080 core.
#[derive(Parser, Debug)]
#[command(version, about)]
struct RunnerConfig {
    /// Directory holding invaders.h, invaders.g, invaders.f and invaders.e
    #[arg(required_unless_present = "combined")]
    rom_dir: Option<PathBuf>,

    /// Single 8 KiB image to load instead of the four chip files
    #[arg(long, value_name = "FILE", conflicts_with = "rom_dir")]
    combined: Option<PathBuf>,

    /// Number of frames to run
    #[arg(long, default_value_t = 600)]
    frames: u64,

    /// Pace frames to 60 Hz wall-clock time
    #[arg(long)]
    realtime: bool,

    /// Ships per game (DIP switches)
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(3..=6))]
    lives: u8,

    /// Award the extra ship at 1000 points instead of 1500
    #[arg(long)]
    bonus_at_1000: bool,
}

impl RunnerConfig {
    fn load_roms(&self) -> Result<RomSet> {
        match (&self.combined, &self.rom_dir) {
            (Some(path), _) => RomSet::from_combined_file(path)
                .with_context(|| format!("loading combined ROM {}", path.display())),
            (None, Some(dir)) => RomSet::from_dir(dir)
                .with_context(|| format!("loading ROMs from {}", dir.display())),
            (None, None) => anyhow::bail!("no ROM directory or combined image given"),
        }
    }

    fn system_config(&self) -> SystemConfig {
        SystemConfig {
            dip_switches: DipSwitches {
                lives: self.lives,
                bonus_at_1000: self.bonus_at_1000,
                ..DipSwitches::default()
            },
            ..SystemConfig::default()
        }
    }
}

fn run(config: &RunnerConfig) -> Result<()> {
    let roms = config.load_roms()?;
    let mut system = InvadersSystem::new(config.system_config());
    system.load_roms(&roms).context("placing ROMs in memory")?;

    let frame_time = Duration::from_secs(1) / 60;
    let started = Instant::now();
    let mut next_frame = Instant::now();

    for _ in 0..config.frames {
        system.step_frame()?;

        let sounds = system.take_sound_events();
        if !sounds.is_empty() {
            debug!(frame = system.frame_count(), ?sounds, "sound");
        }

        if system.frame_count() % 60 == 0 {
            info!(
                frame = system.frame_count(),
                cycles = system.cpu().cycles(),
                pc = format_args!("${:04X}", system.cpu().pc()),
                "progress"
            );
        }

        if config.realtime {
            next_frame += frame_time;
            match next_frame.checked_duration_since(Instant::now()) {
                Some(wait) => thread::sleep(wait),
                None => warn!(frame = system.frame_count(), "running behind real time"),
            }
        }
    }

    let elapsed = started.elapsed();
    info!(
        frames = system.frame_count(),
        cycles = system.cpu().cycles(),
        elapsed_ms = elapsed.as_millis() as u64,
        watchdog_writes = system.ports().watchdog_writes(),
        "finished"
    );

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = RunnerConfig::parse();

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
