//! Simulated price feed - a SampleSource for demos and tests
//!
//! Random-walks each asset's price per poll cycle. Seedable for
//! reproducible runs, with a configurable drop probability to simulate
//! per-asset fetch failures.

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;
use std::sync::Arc;
use vigil_core::{AssetId, PollSample, Price};
use vigil_ports::{Clock, SampleSource, SourceError};

/// Configuration for the simulated feed
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Starting prices per asset; unknown assets start at `default_price`
    pub initial_prices: HashMap<AssetId, Price>,
    /// Fallback starting price for assets not in `initial_prices`
    pub default_price: Price,
    /// Random walk amplitude per tick (e.g. 0.001 = up to 0.1% move)
    pub volatility: f64,
    /// Probability that an asset's fetch "fails" on a given tick
    pub drop_probability: f64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        let mut initial_prices = HashMap::new();
        initial_prices.insert("bitcoin".to_string(), dec!(50000));
        initial_prices.insert("ethereum".to_string(), dec!(3000));

        Self {
            initial_prices,
            default_price: dec!(100),
            volatility: 0.002,
            drop_probability: 0.0,
        }
    }
}

/// Generates per-asset price samples by random walk
pub struct SimulatedPriceFeed {
    prices: HashMap<AssetId, Price>,
    config: FeedConfig,
    clock: Arc<dyn Clock>,
    rng: StdRng,
}

impl SimulatedPriceFeed {
    pub fn new(config: FeedConfig, clock: Arc<dyn Clock>) -> Self {
        let prices = config.initial_prices.clone();
        Self {
            prices,
            config,
            clock,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create with a specific seed for reproducible runs
    pub fn with_seed(config: FeedConfig, clock: Arc<dyn Clock>, seed: u64) -> Self {
        let prices = config.initial_prices.clone();
        Self {
            prices,
            config,
            clock,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Current simulated price for an asset
    pub fn price(&self, asset_id: &str) -> Option<Price> {
        self.prices.get(asset_id).copied()
    }

    fn step(&mut self, asset_id: &str) -> Price {
        let current = self
            .prices
            .get(asset_id)
            .copied()
            .unwrap_or(self.config.default_price);

        // Random walk: price * (1 + volatility * uniform(-1, 1))
        let change: f64 = self.rng.gen_range(-1.0..1.0);
        let multiplier = 1.0 + self.config.volatility * change;
        let current_f64 = current.to_string().parse::<f64>().unwrap_or(0.0);
        let next = Decimal::from_f64_retain(current_f64 * multiplier).unwrap_or(current);

        self.prices.insert(asset_id.to_string(), next);
        next
    }
}

#[async_trait]
impl SampleSource for SimulatedPriceFeed {
    async fn poll(&mut self, assets: &[AssetId]) -> Result<Vec<PollSample>, SourceError> {
        let now = self.clock.now();
        let samples = assets
            .iter()
            .map(|asset_id| {
                if self.rng.gen_bool(self.config.drop_probability) {
                    PollSample::missing(asset_id.clone(), now)
                } else {
                    PollSample::observed(asset_id.clone(), self.step(asset_id), now)
                }
            })
            .collect();

        Ok(samples)
    }

    fn name(&self) -> &str {
        "SimulatedPriceFeed"
    }
}
