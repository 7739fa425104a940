//! A small demonstration driver. It seeds a tree with pseudo-random keys drawn from `0..range`
//! and then rebuilds the tree's contents the slow way: by asking [`OrderedSet::find`] about every
//! single value in the range instead of walking the tree.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::probe::{self, ProbeConfig};
//!
//! let config = ProbeConfig {
//!     count: 5,
//!     range: 20,
//!     ..ProbeConfig::default()
//! };
//! let report = probe::run(&config).unwrap();
//!
//! assert_eq!(report.outcomes.len(), 5);
//! assert!(report.contents.windows(2).all(|w| w[0] < w[1]));
//! ```

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::{arena, owned, OrderedSet};

/// Probing is linear in the range so keep it to something that finishes.
pub const MAX_RANGE: u32 = 1 << 24;

/// Every draw is reported back, so the number of draws is bounded too.
pub const MAX_COUNT: usize = 1 << 24;

/// Which tree the driver runs against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Backend {
    /// Boxed nodes, recursive operations
    #[default]
    Owned,
    /// Nodes in a single arena, looping operations
    Arena,
}

/// Everything a probe run needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProbeConfig {
    /// How many keys to draw and insert. Duplicates count towards this.
    pub count: usize,
    /// Keys are drawn from, and probed over, `0..range`.
    pub range: u32,
    /// Seed for the key generator. The same seed always draws the same keys.
    pub seed: u64,
    /// Tree implementation to exercise.
    pub backend: Backend,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            count: 10,
            range: 50,
            seed: 42,
            backend: Backend::Owned,
        }
    }
}

impl ProbeConfig {
    /// Checks the config describes a run that can actually happen.
    pub fn validate(&self) -> ProbeResult<()> {
        match self.range {
            0 => return Err(ProbeError::EmptyRange),
            range if range > MAX_RANGE => {
                return Err(ProbeError::RangeTooLarge {
                    range,
                    max: MAX_RANGE,
                })
            }
            _ => {}
        }
        if self.count > MAX_COUNT {
            return Err(ProbeError::CountTooLarge {
                count: self.count,
                max: MAX_COUNT,
            });
        }
        Ok(())
    }

    /// The most keys a run can leave in the tree: every draw, or every value in the range,
    /// whichever is smaller.
    fn max_keys(&self) -> usize {
        self.count.min(self.range as usize)
    }
}

/// Reasons a probe run is refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProbeError {
    /// There are no keys to draw from.
    #[error("key range must not be empty")]
    EmptyRange,

    /// Probing would take too long.
    #[error("key range {range} is larger than the maximum of {max}")]
    RangeTooLarge {
        /// The requested range.
        range: u32,
        /// The largest range allowed.
        max: u32,
    },

    /// Too many draws to report on.
    #[error("key count {count} is larger than the maximum of {max}")]
    CountTooLarge {
        /// The requested number of draws.
        count: usize,
        /// The largest number of draws allowed.
        max: usize,
    },
}

/// Result type for probe runs.
pub type ProbeResult<T> = Result<T, ProbeError>;

/// What a probe run saw.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProbeReport {
    /// Every key drawn, in order, with whether the tree accepted it.
    pub outcomes: Vec<(u32, bool)>,
    /// Every value in the range the tree claimed to contain, ascending.
    pub contents: Vec<u32>,
    /// Height of the tree once seeding finished.
    pub height: usize,
}

/// Seeds a tree according to `config` and probes every value in its range.
pub fn run(config: &ProbeConfig) -> ProbeResult<ProbeReport> {
    config.validate()?;
    tracing::info!(?config, "starting probe run");

    let report = match config.backend {
        Backend::Owned => run_with(config, owned::Tree::new()),
        Backend::Arena => run_with(config, arena::Tree::with_capacity(config.max_keys())),
    };

    tracing::info!(
        inserted = report.contents.len(),
        height = report.height,
        "probe run finished"
    );
    Ok(report)
}

fn run_with<T: OrderedSet<u32>>(config: &ProbeConfig, mut tree: T) -> ProbeReport {
    let mut rng = StdRng::seed_from_u64(config.seed);

    let outcomes: Vec<_> = (0..config.count)
        .map(|_| {
            let key = rng.gen_range(0..config.range);
            let accepted = tree.insert(key);
            tracing::debug!(key, accepted, "inserted");
            (key, accepted)
        })
        .collect();

    // `find` is the only question the tree answers, so ask it about everything.
    let contents = (0..config.range).filter(|key| tree.find(key)).collect();

    ProbeReport {
        outcomes,
        contents,
        height: tree.height(),
    }
}

impl fmt::Display for ProbeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "adding {} numbers", self.outcomes.len())?;
        writeln!(f)?;
        for (key, accepted) in &self.outcomes {
            let outcome = if *accepted { "OK" } else { "already in" };
            writeln!(f, "Inserting {}... {}", key, outcome)?;
        }

        writeln!(f)?;
        writeln!(f, "ok, now printing contents (the slow way)")?;
        writeln!(f)?;
        let contents: Vec<_> = self.contents.iter().map(u32::to_string).collect();
        writeln!(f, "{}", contents.join(" "))?;

        writeln!(f)?;
        write!(f, "all done")
    }
}
