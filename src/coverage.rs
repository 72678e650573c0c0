//! Read-depth coverage embedded in assembler contig names.
//!
//! SPAdes style ids look like `NODE_1_length_5000_cov_12.34`. The format is
//! not standardised, so extraction sits behind [`CoverageExtractor`] and the
//! filters never look at the id themselves.

use crate::error::{Result, SarafError};

pub trait CoverageExtractor {
    fn extract(&self, id: &str) -> Result<f64>;
}

/// the last underscore delimited token of the id
#[derive(Debug, Clone, Copy, Default)]
pub struct LastTokenCoverage;

impl CoverageExtractor for LastTokenCoverage {
    fn extract(&self, id: &str) -> Result<f64> {
        let token = id.rsplit('_').next().unwrap_or(id);
        parse_coverage(id, token)
    }
}

/// the token right after the first `marker` segment,
/// e.g. marker "cov" on `NODE_3_length_80_cov_7.5_pilon` gives 7.5
#[derive(Debug, Clone)]
pub struct MarkerCoverage {
    marker: String,
}

impl MarkerCoverage {
    pub fn new(marker: &str) -> Self {
        Self {
            marker: marker.to_string(),
        }
    }
}

impl Default for MarkerCoverage {
    fn default() -> Self {
        Self::new("cov")
    }
}

impl CoverageExtractor for MarkerCoverage {
    fn extract(&self, id: &str) -> Result<f64> {
        let mut tokens = id.split('_');
        if !tokens.any(|token| token == self.marker) {
            return Err(SarafError::CoverageFormat {
                id: id.to_string(),
                token: String::new(),
            });
        }
        parse_coverage(id, tokens.next().unwrap_or(""))
    }
}

/// only finite numbers count as coverage, "NaN" or "inf" tokens are errors
fn parse_coverage(id: &str, token: &str) -> Result<f64> {
    match token.parse::<f64>() {
        Ok(coverage) if coverage.is_finite() => Ok(coverage),
        _ => Err(SarafError::CoverageFormat {
            id: id.to_string(),
            token: token.to_string(),
        }),
    }
}
