use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::error::SalesGenError;

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Simulation {
    pub base_orders: f64,
    pub trend_per_month: f64,
    pub season_amp: f64,
}

impl Default for Simulation {
    fn default() -> Self {
        Self {
            base_orders: 120.,
            trend_per_month: 0.01,
            season_amp: 0.2,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Noise {
    pub frac_missing: f64,
    pub frac_outliers: f64,
}

impl Default for Noise {
    fn default() -> Self {
        Self {
            frac_missing: 0.002,
            frac_outliers: 0.001,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub simulation: Simulation,
    pub noise: Noise,
}

impl Config {
    pub fn try_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(SalesGenError::FileNotFound(path.display().to_string()));
        }

        Self::try_from_source(config::File::from(path.to_path_buf()))
    }

    pub fn try_from_toml(data: &str) -> Result<Self> {
        Self::try_from_source(config::File::from_str(data, config::FileFormat::Toml))
    }

    fn try_from_source<T>(source: T) -> Result<Self>
    where T: config::Source + Send + Sync + 'static {
        let cfg: Config = config::Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()?;
        cfg.validate()?;

        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        let sim = &self.simulation;
        for (name, v) in [
            ("simulation.base_orders", sim.base_orders),
            ("simulation.trend_per_month", sim.trend_per_month),
            ("simulation.season_amp", sim.season_amp),
        ] {
            if !v.is_finite() {
                return Err(SalesGenError::InvalidConfig(format!(
                    "{name} must be a finite number, got {v}"
                )));
            }
        }
        if sim.base_orders < 0. {
            return Err(SalesGenError::InvalidConfig(format!(
                "simulation.base_orders must not be negative, got {}",
                sim.base_orders
            )));
        }

        for (name, v) in [
            ("noise.frac_missing", self.noise.frac_missing),
            ("noise.frac_outliers", self.noise.frac_outliers),
        ] {
            if !(0. ..=1.).contains(&v) {
                return Err(SalesGenError::InvalidConfig(format!(
                    "{name} must be within [0, 1], got {v}"
                )));
            }
        }

        Ok(())
    }
}
