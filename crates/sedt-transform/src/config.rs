//! Transform parameters, validation, and error types.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

// ── Algorithm ──────────────────────────────────────────────────────

/// Which 1D pass implementation to run.
///
/// Both produce bit-identical output; they differ only in how rows are
/// touched in memory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Scan rows in place through the grid's strides.
    #[default]
    Direct,
    /// Copy each row into contiguous scratch, scan there, copy back.
    CacheOptimized,
}

impl Algorithm {
    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::CacheOptimized => "cache-optimized",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "direct" | "saito" => Ok(Self::Direct),
            "cached" | "cache-optimized" | "cache_optimized" | "saito-cached" => {
                Ok(Self::CacheOptimized)
            }
            _ => Err(ConfigError::UnknownAlgorithm {
                name: s.to_string(),
            }),
        }
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while building or validating an [`EdtConfig`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// `maximum_distance` is NaN, infinite, or negative.
    InvalidMaximumDistance {
        /// The invalid value.
        value: f64,
    },
    /// An algorithm name that matches no variant.
    UnknownAlgorithm {
        /// The unrecognized name.
        name: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMaximumDistance { value } => {
                write!(f, "maximum_distance must be finite and >= 0, got {value}")
            }
            Self::UnknownAlgorithm { name } => write!(f, "unknown algorithm '{name}'"),
        }
    }
}

impl Error for ConfigError {}

// ── EdtConfig ──────────────────────────────────────────────────────

/// Parameters of a distance transform run.
///
/// `maximum_distance` is a bound in *squared* units. It is written as
/// the seed value for every non-zero mask cell and fills the sentinel
/// tail of the squared-offset table, so every output value is
/// `min(true_distance², maximum_distance)`. Pick it larger than the
/// squared diagonal of the grid to avoid saturation.
#[derive(Clone, Debug, PartialEq)]
pub struct EdtConfig {
    /// Squared-distance cap and "infinity" seed. Default: `i32::MAX`.
    pub maximum_distance: f64,
    /// Threshold the input as a mask (`true`) or copy it verbatim as an
    /// existing squared-distance field (`false`). Default: `true`.
    pub initialize: bool,
    /// Scale each axis by its squared voxel spacing. Default: `true`.
    pub consider_anisotropy: bool,
    /// 1D pass implementation. Default: [`Algorithm::Direct`].
    pub algorithm: Algorithm,
}

impl Default for EdtConfig {
    fn default() -> Self {
        Self {
            maximum_distance: f64::from(i32::MAX),
            initialize: true,
            consider_anisotropy: true,
            algorithm: Algorithm::Direct,
        }
    }
}

impl EdtConfig {
    /// Check structural invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidMaximumDistance`] unless
    /// `maximum_distance` is finite and non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.maximum_distance.is_finite() || self.maximum_distance < 0.0 {
            return Err(ConfigError::InvalidMaximumDistance {
                value: self.maximum_distance,
            });
        }
        Ok(())
    }
}

impl fmt::Display for EdtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let on_off = |b: bool| if b { "On" } else { "Off" };
        writeln!(f, "Initialize: {}", on_off(self.initialize))?;
        let anisotropy = on_off(self.consider_anisotropy);
        writeln!(f, "Consider Anisotropy: {anisotropy}")?;
        writeln!(f, "Maximum Distance: {}", self.maximum_distance)?;
        write!(f, "Algorithm: {}", self.algorithm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = EdtConfig::default();
        assert_eq!(cfg.maximum_distance, 2147483647.0);
        assert!(cfg.initialize);
        assert!(cfg.consider_anisotropy);
        assert_eq!(cfg.algorithm, Algorithm::Direct);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_bad_maximum_distance() {
        for value in [-1.0, f64::NAN, f64::INFINITY] {
            let cfg = EdtConfig {
                maximum_distance: value,
                ..EdtConfig::default()
            };
            assert!(matches!(
                cfg.validate(),
                Err(ConfigError::InvalidMaximumDistance { .. })
            ));
        }
        let zero = EdtConfig {
            maximum_distance: 0.0,
            ..EdtConfig::default()
        };
        assert!(zero.validate().is_ok());
    }

    #[test]
    fn algorithm_names() {
        assert_eq!("saito".parse::<Algorithm>().unwrap(), Algorithm::Direct);
        assert_eq!("Direct".parse::<Algorithm>().unwrap(), Algorithm::Direct);
        assert_eq!(
            "saito-cached".parse::<Algorithm>().unwrap(),
            Algorithm::CacheOptimized
        );
        assert_eq!(
            Algorithm::CacheOptimized
                .to_string()
                .parse::<Algorithm>()
                .unwrap(),
            Algorithm::CacheOptimized
        );
        assert_eq!(
            "danielsson".parse::<Algorithm>(),
            Err(ConfigError::UnknownAlgorithm {
                name: "danielsson".into()
            })
        );
    }

    #[test]
    fn display_lists_every_parameter() {
        let text = EdtConfig {
            initialize: false,
            ..EdtConfig::default()
        }
        .to_string();
        assert!(text.contains("Initialize: Off"));
        assert!(text.contains("Consider Anisotropy: On"));
        assert!(text.contains("Maximum Distance: 2147483647"));
        assert!(text.contains("Algorithm: direct"));
    }
}
