use std::collections::BTreeSet;

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{ Rng, SeedableRng };

use crate::configs::GeneratorConfig;
use crate::error::AppError;
use crate::utils::NumberSet;

/// Draws ticket numbers by rejection sampling: uniform picks from
/// `1..=max_number` go into a set until it holds `numbers_per_ticket` values.
///
/// The loop is capped at `max_draws` picks. Past the cap the missing values
/// are taken from a shuffle of the numbers not drawn yet, which keeps every
/// subset equally likely.
#[derive(Debug)]
pub struct NumberSampler<R = SmallRng> {
    config: GeneratorConfig,
    rng: R,
}

impl NumberSampler<SmallRng> {
    /// Default draw shape, seeded from the platform.
    pub fn with_defaults() -> Self {
        Self {
            config: GeneratorConfig::default(),
            rng: SmallRng::seed_from_u64(platform_seed()),
        }
    }
}

impl<R: Rng> NumberSampler<R> {
    pub fn new(config: GeneratorConfig, rng: R) -> Result<Self, AppError> {
        Ok(Self {
            config: config.validate()?,
            rng,
        })
    }

    pub fn config(&self) -> GeneratorConfig {
        self.config
    }

    pub fn generate(&mut self) -> NumberSet {
        let wanted = self.config.numbers_per_ticket;
        let max = self.config.max_number;
        let mut seen = BTreeSet::new();
        let mut draws = 0;

        while seen.len() < wanted && draws < self.config.max_draws {
            seen.insert(self.rng.random_range(1..=max));
            draws += 1;
        }

        if seen.len() < wanted {
            log::warn!(
                "Sampler hit {} draws with {}/{} numbers, filling from unused values",
                draws,
                seen.len(),
                wanted
            );
            let mut unused: Vec<u8> = (1..=max).filter(|n| !seen.contains(n)).collect();
            unused.shuffle(&mut self.rng);
            let missing = wanted - seen.len();
            seen.extend(unused.into_iter().take(missing));
        }

        NumberSet::from_sorted(seen.into_iter().collect())
    }
}

#[cfg(target_arch = "wasm32")]
fn platform_seed() -> u64 {
    let noise = (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
    let now = js_sys::Date::now() as u64;
    (noise << 32) ^ now
}

#[cfg(not(target_arch = "wasm32"))]
fn platform_seed() -> u64 {
    rand::random()
}
