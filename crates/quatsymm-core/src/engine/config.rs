use serde::Deserialize;
use thiserror::Error;

/// Edge length of the spatial index cells and the widest distance a nearest-neighbor
/// lookup has to see, in Angstroms.
pub const DEFAULT_INDEX_THRESHOLD: f64 = 8.0;

/// GTS shell radii in Angstroms, widest first.
pub const GTS_SHELL_CUTOFFS: [f64; 4] = [8.0, 4.0, 2.0, 1.0];

/// Squares of [`GTS_SHELL_CUTOFFS`], compared against squared distances.
pub const GTS_SHELL_CUTOFFS_SQ: [f64; 4] = [64.0, 16.0, 4.0, 1.0];

/// Residues skipped at each terminus when measuring chain direction.
pub const DEFAULT_TERMINAL_OFFSET: usize = 10;

/// Smallest cosine between original and transformed chain directions that is still
/// considered a forward match.
pub const DEFAULT_MIN_TERMINAL_ALIGNMENT: f64 = 0.5;

/// Largest amount by which the Cβ RMSD may exceed the Cα RMSD before the match is
/// flagged as reversed, in Angstroms.
pub const DEFAULT_MAX_CB_RMSD_EXCESS: f64 = 1.0;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("TOML parsing error: {source}")]
    Toml {
        #[from]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScorerConfig {
    pub index_threshold: f64,
    pub terminal_offset: usize,
    pub min_terminal_alignment: f64,
    pub max_cb_rmsd_excess: f64,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            index_threshold: DEFAULT_INDEX_THRESHOLD,
            terminal_offset: DEFAULT_TERMINAL_OFFSET,
            min_terminal_alignment: DEFAULT_MIN_TERMINAL_ALIGNMENT,
            max_cb_rmsd_excess: DEFAULT_MAX_CB_RMSD_EXCESS,
        }
    }
}

impl ScorerConfig {
    /// Parses a TOML table such as
    ///
    /// ```toml
    /// index_threshold = 10.0
    /// min_terminal_alignment = 0.8
    /// ```
    ///
    /// Keys that are not given keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let widest_shell = GTS_SHELL_CUTOFFS[0];
        if !self.index_threshold.is_finite() || self.index_threshold < widest_shell {
            return Err(ConfigError::InvalidParameter {
                name: "index_threshold",
                reason: format!(
                    "must be finite and at least {widest_shell} Å, got {}",
                    self.index_threshold
                ),
            });
        }
        if !(-1.0..=1.0).contains(&self.min_terminal_alignment) {
            return Err(ConfigError::InvalidParameter {
                name: "min_terminal_alignment",
                reason: format!(
                    "must lie in [-1, 1], got {}",
                    self.min_terminal_alignment
                ),
            });
        }
        if !self.max_cb_rmsd_excess.is_finite() || self.max_cb_rmsd_excess < 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "max_cb_rmsd_excess",
                reason: format!(
                    "must be finite and non-negative, got {}",
                    self.max_cb_rmsd_excess
                ),
            });
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct ScorerConfigBuilder {
    index_threshold: Option<f64>,
    terminal_offset: Option<usize>,
    min_terminal_alignment: Option<f64>,
    max_cb_rmsd_excess: Option<f64>,
}

impl ScorerConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index_threshold(mut self, angstroms: f64) -> Self {
        self.index_threshold = Some(angstroms);
        self
    }
    pub fn terminal_offset(mut self, residues: usize) -> Self {
        self.terminal_offset = Some(residues);
        self
    }
    pub fn min_terminal_alignment(mut self, cosine: f64) -> Self {
        self.min_terminal_alignment = Some(cosine);
        self
    }
    pub fn max_cb_rmsd_excess(mut self, angstroms: f64) -> Self {
        self.max_cb_rmsd_excess = Some(angstroms);
        self
    }

    pub fn build(self) -> Result<ScorerConfig, ConfigError> {
        let config = ScorerConfig {
            index_threshold: self.index_threshold.unwrap_or(DEFAULT_INDEX_THRESHOLD),
            terminal_offset: self.terminal_offset.unwrap_or(DEFAULT_TERMINAL_OFFSET),
            min_terminal_alignment: self
                .min_terminal_alignment
                .unwrap_or(DEFAULT_MIN_TERMINAL_ALIGNMENT),
            max_cb_rmsd_excess: self
                .max_cb_rmsd_excess
                .unwrap_or(DEFAULT_MAX_CB_RMSD_EXCESS),
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_cutoff_tables_agree() {
        for (cutoff, cutoff_sq) in GTS_SHELL_CUTOFFS.iter().zip(GTS_SHELL_CUTOFFS_SQ.iter()) {
            assert_eq!(cutoff * cutoff, *cutoff_sq);
        }
        assert!(GTS_SHELL_CUTOFFS.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn builder_without_overrides_matches_default() {
        let config = ScorerConfigBuilder::new().build().unwrap();
        assert_eq!(config, ScorerConfig::default());
        assert_eq!(config.index_threshold, 8.0);
        assert_eq!(config.terminal_offset, 10);
    }

    #[test]
    fn builder_applies_overrides() {
        let config = ScorerConfigBuilder::new()
            .index_threshold(12.0)
            .terminal_offset(4)
            .min_terminal_alignment(0.8)
            .max_cb_rmsd_excess(0.5)
            .build()
            .unwrap();
        assert_eq!(config.index_threshold, 12.0);
        assert_eq!(config.terminal_offset, 4);
        assert_eq!(config.min_terminal_alignment, 0.8);
        assert_eq!(config.max_cb_rmsd_excess, 0.5);
    }

    #[test]
    fn builder_rejects_threshold_narrower_than_widest_shell() {
        let result = ScorerConfigBuilder::new().index_threshold(6.0).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                name: "index_threshold",
                ..
            })
        ));
    }

    #[test]
    fn builder_rejects_out_of_range_alignment_and_negative_excess() {
        assert!(matches!(
            ScorerConfigBuilder::new().min_terminal_alignment(1.5).build(),
            Err(ConfigError::InvalidParameter {
                name: "min_terminal_alignment",
                ..
            })
        ));
        assert!(matches!(
            ScorerConfigBuilder::new().max_cb_rmsd_excess(-0.1).build(),
            Err(ConfigError::InvalidParameter {
                name: "max_cb_rmsd_excess",
                ..
            })
        ));
    }

    #[test]
    fn from_toml_str_fills_missing_keys_with_defaults() {
        let config = ScorerConfig::from_toml_str("min_terminal_alignment = 0.8\n").unwrap();
        assert_eq!(config.min_terminal_alignment, 0.8);
        assert_eq!(config.index_threshold, DEFAULT_INDEX_THRESHOLD);
        assert_eq!(config.max_cb_rmsd_excess, DEFAULT_MAX_CB_RMSD_EXCESS);
    }

    #[test]
    fn from_toml_str_of_empty_document_is_default() {
        assert_eq!(
            ScorerConfig::from_toml_str("").unwrap(),
            ScorerConfig::default()
        );
    }

    #[test]
    fn from_toml_str_rejects_unknown_keys_and_bad_values() {
        assert!(matches!(
            ScorerConfig::from_toml_str("bucket_size = 8.0"),
            Err(ConfigError::Toml { .. })
        ));
        assert!(matches!(
            ScorerConfig::from_toml_str("index_threshold = 2.0"),
            Err(ConfigError::InvalidParameter { .. })
        ));
    }
}
