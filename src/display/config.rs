use crate::algebra::HypercomplexNumber;
use crate::notation::precision_of;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct DisplayConfig {
    // How the number of printed decimals is chosen
    #[serde(default = "default_precision")]
    pub precision: PrecisionPolicy,

    // Decimals used by the `fixed` policy
    #[serde(default = "default_decimals")]
    pub decimals: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
            decimals: default_decimals(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PrecisionPolicy {
    // Match the most precise operand
    Auto,
    // Always `decimals` places
    Fixed,
    // Shortest round-trip representation
    Full,
}

fn default_precision() -> PrecisionPolicy {
    PrecisionPolicy::Auto
}

fn default_decimals() -> usize {
    2
}

impl DisplayConfig {
    pub fn fixed(decimals: usize) -> Self {
        Self {
            precision: PrecisionPolicy::Fixed,
            decimals,
        }
    }

    pub fn full() -> Self {
        Self {
            precision: PrecisionPolicy::Full,
            ..Self::default()
        }
    }

    /// Decimals to print a result computed from `operands`.
    /// `None` means full precision.
    pub fn decimals_for(&self, operands: &[&HypercomplexNumber]) -> Option<usize> {
        match self.precision {
            PrecisionPolicy::Auto => Some(
                operands
                    .iter()
                    .map(|number| precision_of(number))
                    .max()
                    .unwrap_or(0),
            ),
            PrecisionPolicy::Fixed => Some(self.decimals),
            PrecisionPolicy::Full => None,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    pub fn empty() -> Self {
        Self {
            display: DisplayConfig::default(),
        }
    }
}
