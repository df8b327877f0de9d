use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::pricing::types::PricingInputs;

/// Spot-sensitivity grid settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SweepConfig {
    /// Number of spot values, endpoints included
    #[serde(default = "default_points")]
    pub points: usize,
    /// Lowest spot as a multiple of the base spot
    #[serde(default = "default_lower_factor")]
    pub lower_factor: f64,
    /// Highest spot as a multiple of the base spot
    #[serde(default = "default_upper_factor")]
    pub upper_factor: f64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            points: default_points(),
            lower_factor: default_lower_factor(),
            upper_factor: default_upper_factor(),
        }
    }
}

impl SweepConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.lower_factor.is_finite() || !self.upper_factor.is_finite() {
            bail!(
                "sweep factors must be finite (lower={}, upper={})",
                self.lower_factor,
                self.upper_factor
            );
        }
        if self.lower_factor <= 0.0 {
            bail!("sweep lower_factor must be > 0, got {}", self.lower_factor);
        }
        if self.lower_factor > self.upper_factor {
            bail!(
                "sweep lower_factor ({}) exceeds upper_factor ({})",
                self.lower_factor,
                self.upper_factor
            );
        }
        Ok(())
    }
}

/// Top-level configuration: the base option and the sweep around it.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct PricingConfig {
    #[serde(default)]
    pub market: PricingInputs,

    #[serde(default)]
    pub sweep: SweepConfig,
}

impl PricingConfig {
    /// 10 points over ±50% of spot
    pub fn standard() -> Self {
        Self::default()
    }

    /// Dense grid for smooth charts
    pub fn fine() -> Self {
        Self {
            sweep: SweepConfig {
                points: 101,
                ..SweepConfig::default()
            },
            ..Self::default()
        }
    }

    /// Deep out-of-the-money to deep in-the-money
    pub fn wide() -> Self {
        Self {
            sweep: SweepConfig {
                points: 41,
                lower_factor: 0.1,
                upper_factor: 2.0,
            },
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.market.validate().context("invalid [market] section")?;
        self.sweep.validate().context("invalid [sweep] section")?;
        Ok(())
    }

    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s).context("failed to parse pricing config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = Self::from_toml_str(&text)
            .with_context(|| format!("in config {}", path.display()))?;
        tracing::info!(
            path = %path.display(),
            option_type = %config.market.option_type,
            points = config.sweep.points,
            "loaded pricing config"
        );
        Ok(config)
    }
}

fn default_points() -> usize {
    10
}

fn default_lower_factor() -> f64 {
    0.5
}

fn default_upper_factor() -> f64 {
    1.5
}
