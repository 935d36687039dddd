use std::ops::RangeInclusive;

use num_traits::ToPrimitive;

use crate::error::{Error, Result};
use crate::initialization::DEFAULT_SEED;

pub const DEFAULT_MAX_ITER: usize = 300;

/// Accepted iteration caps for a full clustering run.
pub const MAX_ITER_RANGE: RangeInclusive<usize> = 2..=999;

/// Validated scalar parameters of one clustering run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Params {
    pub k: usize,
    pub max_iter: usize,
    pub epsilon: f64,
    pub seed: u64,
}

impl Params {
    pub fn new(k: usize, epsilon: f64) -> Self {
        Self {
            k,
            max_iter: DEFAULT_MAX_ITER,
            epsilon,
            seed: DEFAULT_SEED,
        }
    }

    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check every parameter against a dataset of `n_points` before any work starts.
    pub fn validate(&self, n_points: usize) -> Result<()> {
        self.validate_scalars()?;
        if self.k >= n_points {
            return Err(Error::InvalidClusterCount {
                requested: self.k,
                n_items: n_points,
            });
        }
        Ok(())
    }

    /// The checks that do not depend on the dataset: `k > 1`, the iteration
    /// cap range and a finite non-negative epsilon.
    pub fn validate_scalars(&self) -> Result<()> {
        if self.k <= 1 {
            return Err(Error::InvalidParameter {
                name: "k",
                message: "must be greater than 1",
            });
        }
        if !MAX_ITER_RANGE.contains(&self.max_iter) {
            return Err(Error::InvalidParameter {
                name: "max_iter",
                message: "must be between 2 and 999",
            });
        }
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(Error::InvalidParameter {
                name: "epsilon",
                message: "must be a finite, non-negative number",
            });
        }
        Ok(())
    }
}

/// Read an integral count from text. `"3"`, `"03"` and `"3.0"` all give 3;
/// fractional, negative or non-numeric text is rejected.
pub fn parse_count(field: &'static str, text: &str) -> Result<usize> {
    let parse_error = || Error::Parse {
        field,
        value: text.to_string(),
    };
    let value: f64 = text.trim().parse().map_err(|_| parse_error())?;
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(parse_error());
    }
    value.to_usize().ok_or_else(parse_error)
}

pub fn parse_epsilon(text: &str) -> Result<f64> {
    let value: f64 = text.trim().parse().map_err(|_| Error::Parse {
        field: "epsilon",
        value: text.to_string(),
    })?;
    if !value.is_finite() || value < 0.0 {
        return Err(Error::InvalidParameter {
            name: "epsilon",
            message: "must be a finite, non-negative number",
        });
    }
    Ok(value)
}
