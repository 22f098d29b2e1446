//! Command-line arguments for the `tui-packman` binary.
//!
//! Flags override the `PACMAN_*` environment variables read by
//! [`GameConfig::from_env`].

use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};

use crate::core::GameConfig;

pub const USAGE: &str = "\
usage: tui-packman [--seed N] [--ghosts N] [--tick-ms N] [--log PATH]

  --seed N      RNG seed for ghost movement (env PACMAN_SEED)
  --ghosts N    number of ghosts, 0-8 (env PACMAN_GHOSTS)
  --tick-ms N   milliseconds per tick (env PACMAN_TICK_MS)
  --log PATH    append logs to PATH (env PACMAN_LOG_PATH, level PACMAN_LOG)
";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub seed: Option<u32>,
    pub ghosts: Option<usize>,
    pub tick_ms: Option<u32>,
    pub log_path: Option<PathBuf>,
    pub help: bool,
}

impl CliArgs {
    /// Layer the flags that were given over `config`.
    pub fn apply(&self, mut config: GameConfig) -> GameConfig {
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(ghosts) = self.ghosts {
            config.ghost_count = ghosts;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.tick_ms = tick_ms;
        }
        config
    }

    /// Final launch configuration.
    ///
    /// Without `--seed` or `PACMAN_SEED` the seed comes from `clock`, so each
    /// launch plays a different ghost walk.
    pub fn launch_config(
        &self,
        from_env: GameConfig,
        env_seed: Option<u32>,
        clock: impl FnOnce() -> u32,
    ) -> GameConfig {
        let mut config = self.apply(from_env);
        if self.seed.is_none() && env_seed.is_none() {
            config.seed = clock();
            log::info!("seeded from clock: {}", config.seed);
        }
        config
    }
}

/// Seed derived from the wall clock.
pub fn clock_seed() -> u32 {
    seed_from_time(
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default(),
    )
}

/// Fold a timestamp into 32 bits, keeping the fast-changing nanoseconds.
pub fn seed_from_time(since_epoch: Duration) -> u32 {
    let nanos = since_epoch.as_nanos() as u64;
    (nanos as u32) ^ ((nanos >> 32) as u32)
}

/// Parse arguments (without the program name).
pub fn parse_args(args: &[String]) -> Result<CliArgs> {
    let mut out = CliArgs::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let mut value = |flag: &str| {
            iter.next()
                .ok_or_else(|| anyhow!("missing value for {}", flag))
        };
        match arg.as_str() {
            "--seed" => {
                let v = value("--seed")?;
                out.seed = Some(
                    v.parse()
                        .map_err(|_| anyhow!("invalid --seed value: {}", v))?,
                );
            }
            "--ghosts" => {
                let v = value("--ghosts")?;
                out.ghosts = Some(
                    v.parse()
                        .map_err(|_| anyhow!("invalid --ghosts value: {}", v))?,
                );
            }
            "--tick-ms" => {
                let v = value("--tick-ms")?;
                out.tick_ms = Some(
                    v.parse()
                        .map_err(|_| anyhow!("invalid --tick-ms value: {}", v))?,
                );
            }
            "--log" => {
                out.log_path = Some(PathBuf::from(value("--log")?));
            }
            "-h" | "--help" => out.help = true,
            other => return Err(anyhow!("unknown argument: {}", other)),
        }
    }
    Ok(out)
}
