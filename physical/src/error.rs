/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::dimension::DimensionVector;

pub type Result<T> = std::result::Result<T, QuantityError>;

#[derive(Serialize, Deserialize, Error, PartialEq, Clone, Debug)]
pub enum QuantityError {
    #[error("Incompatible dimensions: {0} <-> {1}")]
    Dimension(DimensionVector, DimensionVector),
    #[error("Incompatible unit factors: {0} <-> {1}")]
    IncompatibleFactor(f64, f64),
    #[error("Unsupported exponent: ({0}) ^ {1}")]
    UnsupportedExponent(DimensionVector, f64),
    #[error("Dimension exponent out of range: ({0}) * ({1})")]
    ExponentOverflow(DimensionVector, DimensionVector),
    #[error("Unknown environment: {0}")]
    UnknownEnvironment(String),
    #[error("Unknown unit: {0}")]
    UnknownUnit(String),
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("Quantity parse error: {0}")]
    Parse(String),
    #[error("Invalid definition for environment {0}: {1}")]
    Definition(String, String),
    #[error("I/O error: {0}")]
    Io(String),
}
