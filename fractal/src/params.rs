use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::constant::{Const, Origin, ParamError};

/// One full generation is a pure function of these three values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractalParams {
    pub order: i64,
    pub katz: f64,
    pub origin: Origin,
}

impl Default for FractalParams {
    fn default() -> Self {
        Self {
            order: Const::DEFAULT_ORDER,
            katz: Const::DEFAULT_KATZ,
            origin: Origin::Corner,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FractalParamsPatch {
    pub order: Option<i64>,
    pub katz: Option<f64>,
    pub origin: Option<String>,
}

impl FractalParams {
    pub fn validate(&self) -> Result<(), ParamError> {
        if self.order < 1 {
            return Err(ParamError::InvalidOrder(self.order));
        }
        if !self.katz.is_finite() || self.katz < 0.0 {
            return Err(ParamError::InvalidKatz(self.katz));
        }
        Ok(())
    }

    pub fn apply_patch(mut self, patch: FractalParamsPatch) -> Result<Self, ParamError> {
        if let Some(v) = patch.order {
            self.order = v;
        }
        if let Some(v) = patch.katz {
            self.katz = v;
        }
        if let Some(v) = patch.origin {
            self.origin = Origin::parse(&v)?;
        }
        Ok(self)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ParamError> {
        let patch: FractalParamsPatch = serde_yaml::from_str(yaml)?;
        Self::default().apply_patch(patch)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ParamError> {
        let raw = fs::read_to_string(path)?;
        Self::from_yaml_str(&raw)
    }
}

/// Parameters for the dual-fractal comparison mode: two independent
/// generations A and B. The two runs share no state, so a caller may compute
/// them in parallel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ComparisonParams {
    pub a: FractalParams,
    pub b: FractalParams,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComparisonParamsPatch {
    pub a: Option<FractalParamsPatch>,
    pub b: Option<FractalParamsPatch>,
}

impl ComparisonParams {
    pub fn apply_patch(mut self, patch: ComparisonParamsPatch) -> Result<Self, ParamError> {
        if let Some(p) = patch.a {
            self.a = self.a.apply_patch(p)?;
        }
        if let Some(p) = patch.b {
            self.b = self.b.apply_patch(p)?;
        }
        Ok(self)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ParamError> {
        let patch: ComparisonParamsPatch = serde_yaml::from_str(yaml)?;
        Self::default().apply_patch(patch)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ParamError> {
        let raw = fs::read_to_string(path)?;
        Self::from_yaml_str(&raw)
    }
}
