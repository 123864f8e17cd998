/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::cmp::Ordering;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dimension::{DimensionVector, DIMENSIONLESS};
use crate::environment::Environment;
use crate::error::{QuantityError, Result};
use crate::parser::parse_quantity;
use crate::prefix::SiPrefix;
use crate::render::{render_canonical, HumanDisplay, Template};

/// Relative tolerance for value and factor comparisons.
pub const EPSILON: f64 = 1e-9;

/// Absolute tolerance for value comparisons, so that rounding noise
/// left by cancellation compares equal to zero.
pub const ZERO_EPSILON: f64 = 1e-12;

/// A value in SI base units, tagged with its dimension vector and
/// the factor of the (linear) unit system it is displayed in.
///
/// Quantities are immutable: every operation returns a new value.
/// Operations that can violate dimensional or factor constraints
/// return a `Result`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Quantity {
    value: f64,
    dimension: DimensionVector,
    factor: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    precision: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    prefixed: Option<SiPrefix>,
}

impl Quantity {
    pub const fn new(value: f64, dimension: DimensionVector, factor: f64) -> Self {
        Quantity {
            value,
            dimension,
            factor,
            precision: None,
            prefixed: None,
        }
    }

    /// A pure SI quantity.
    pub const fn si_value(value: f64, dimension: DimensionVector) -> Self {
        Self::new(value, dimension, 1.0)
    }

    pub const fn from_value(value: f64) -> Self {
        Self::new(value, DIMENSIONLESS, 1.0)
    }

    pub fn parse(input: &str) -> Result<Self> {
        parse_quantity(input)
    }

    /// Value in SI base units.
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn dimension(&self) -> DimensionVector {
        self.dimension
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    pub fn precision(&self) -> Option<usize> {
        self.precision
    }

    pub fn prefix(&self) -> Option<SiPrefix> {
        self.prefixed
    }

    pub fn is_dimensionless(&self) -> bool {
        self.dimension.is_dimensionless()
    }

    /// The bare number, if this quantity is dimensionless.
    pub fn as_scalar(&self) -> Option<f64> {
        self.is_dimensionless().then_some(self.value)
    }

    /// Same quantity, displayed in SI units.
    pub fn si(self) -> Self {
        Quantity {
            factor: 1.0,
            ..self
        }
    }

    pub(crate) fn with_factor(self, factor: f64) -> Self {
        Quantity {
            factor,
            prefixed: None,
            ..self
        }
    }

    /// Override the number of decimals used for display.
    pub fn with_precision(self, precision: i64) -> Result<Self> {
        let precision = usize::try_from(precision).map_err(|_| {
            QuantityError::Configuration(format!(
                "precision must not be negative (got {})",
                precision
            ))
        })?;
        Ok(Quantity {
            precision: Some(precision),
            ..self
        })
    }

    /// Pin the display prefix instead of choosing one automatically.
    /// Only SI (unity factor) quantities can be prefixed.
    pub fn prefixed(self, prefix: SiPrefix) -> Result<Self> {
        match self.factor == 1.0 {
            true => Ok(Quantity {
                prefixed: Some(prefix),
                ..self
            }),
            false => Err(QuantityError::Configuration(format!(
                "cannot prefix a quantity with unit factor {}",
                self.factor
            ))),
        }
    }

    pub(crate) fn with_prefix_opt(self, prefixed: Option<SiPrefix>) -> Self {
        Quantity { prefixed, ..self }
    }

    /// Split into the value expressed in display units and one
    /// display unit, such that `value * unit == self`.
    pub fn split(&self) -> (f64, Quantity) {
        (
            self.value / self.factor,
            Quantity {
                value: self.factor,
                prefixed: None,
                ..*self
            },
        )
    }

    pub fn abs(self) -> Self {
        Quantity {
            value: self.value.abs(),
            ..self
        }
    }

    pub fn powi(self, n: i32) -> Result<Self> {
        Ok(Quantity {
            value: self.value.powi(n),
            dimension: self.dimension.powi(n)?,
            factor: self.factor.powi(n),
            precision: self.precision,
            prefixed: None,
        })
    }

    pub fn powf(self, n: f64) -> Result<Self> {
        Ok(Quantity {
            value: self.value.powf(n),
            dimension: self.dimension.powf(n)?,
            factor: self.factor.powf(n),
            precision: self.precision,
            prefixed: None,
        })
    }

    pub fn sqrt(self) -> Result<Self> {
        self.root(2.0)
    }

    pub fn root(self, n: f64) -> Result<Self> {
        self.powf(1.0 / n)
    }

    pub fn recip(self) -> Self {
        Quantity {
            value: 1.0 / self.value,
            dimension: self.dimension.recip(),
            factor: 1.0 / self.factor,
            precision: self.precision,
            prefixed: None,
        }
    }

    /* Note: we cannot implement the trait, because it does not allow
    for error conditions. */
    pub fn partial_cmp(&self, rhs: &Self) -> Result<Option<Ordering>> {
        (self.dimension - rhs.dimension)?;
        Ok(match values_eq(self.value, rhs.value) {
            true => Some(Ordering::Equal),
            false => self.value.partial_cmp(&rhs.value),
        })
    }

    pub fn lt(&self, rhs: &Self) -> Result<bool> {
        Ok(self.partial_cmp(rhs)? == Some(Ordering::Less))
    }

    pub fn le(&self, rhs: &Self) -> Result<bool> {
        Ok(matches!(
            self.partial_cmp(rhs)?,
            Some(Ordering::Less | Ordering::Equal)
        ))
    }

    pub fn gt(&self, rhs: &Self) -> Result<bool> {
        Ok(self.partial_cmp(rhs)? == Some(Ordering::Greater))
    }

    pub fn ge(&self, rhs: &Self) -> Result<bool> {
        Ok(matches!(
            self.partial_cmp(rhs)?,
            Some(Ordering::Greater | Ordering::Equal)
        ))
    }

    /// Human-readable rendering in the given environment.
    pub fn display<'a>(&'a self, env: &'a Environment) -> HumanDisplay<'a> {
        HumanDisplay::new(self, env, Template::Plain)
    }

    pub fn display_as<'a>(
        &'a self,
        env: &'a Environment,
        template: Template,
    ) -> HumanDisplay<'a> {
        HumanDisplay::new(self, env, template)
    }

    /// Representation that parses back into an equal quantity.
    pub fn canonical(&self) -> String {
        render_canonical(self)
    }
}

pub(crate) fn approx_eq(a: f64, b: f64) -> bool {
    a == b || (a - b).abs() <= EPSILON * a.abs().max(b.abs())
}

fn values_eq(a: f64, b: f64) -> bool {
    approx_eq(a, b) || (a - b).abs() <= ZERO_EPSILON
}

/* Products and quotients keep the combined factor; display resolves
it to a defined unit or falls back to SI. Only a factor that is no
longer a finite positive scale is rejected. */
fn combined_factor(a: f64, b: f64, factor: f64) -> Result<f64> {
    match factor.is_finite() && factor > 0.0 {
        true => Ok(factor),
        false => Err(QuantityError::IncompatibleFactor(a, b)),
    }
}

/* Addition requires equal factors, unless one side is SI. */
fn additive_factor(a: f64, b: f64) -> Result<f64> {
    if a == 1.0 {
        Ok(b)
    } else if b == 1.0 || approx_eq(a, b) {
        Ok(a)
    } else {
        Err(QuantityError::IncompatibleFactor(a, b))
    }
}

impl PartialEq for Quantity {
    fn eq(&self, other: &Self) -> bool {
        self.dimension == other.dimension && values_eq(self.value, other.value)
    }
}

impl FromStr for Quantity {
    type Err = QuantityError;
    fn from_str(s: &str) -> Result<Self> {
        parse_quantity(s)
    }
}

impl Add<Quantity> for Quantity {
    type Output = Result<Quantity>;
    fn add(self, rhs: Quantity) -> Result<Quantity> {
        Ok(Quantity {
            value: self.value + rhs.value,
            dimension: (self.dimension + rhs.dimension)?,
            factor: additive_factor(self.factor, rhs.factor)?,
            ..self
        })
    }
}

impl Sub<Quantity> for Quantity {
    type Output = Result<Quantity>;
    fn sub(self, rhs: Quantity) -> Result<Quantity> {
        Ok(Quantity {
            value: self.value - rhs.value,
            dimension: (self.dimension - rhs.dimension)?,
            factor: additive_factor(self.factor, rhs.factor)?,
            ..self
        })
    }
}

impl Mul<Quantity> for Quantity {
    type Output = Result<Quantity>;
    fn mul(self, rhs: Quantity) -> Result<Quantity> {
        Ok(Quantity {
            value: self.value * rhs.value,
            dimension: (self.dimension * rhs.dimension)?,
            factor: combined_factor(
                self.factor,
                rhs.factor,
                self.factor * rhs.factor,
            )?,
            precision: self.precision,
            prefixed: None,
        })
    }
}

impl Div<Quantity> for Quantity {
    type Output = Result<Quantity>;
    fn div(self, rhs: Quantity) -> Result<Quantity> {
        Ok(Quantity {
            value: self.value / rhs.value,
            dimension: (self.dimension / rhs.dimension)?,
            factor: combined_factor(
                self.factor,
                rhs.factor,
                self.factor / rhs.factor,
            )?,
            precision: self.precision,
            prefixed: None,
        })
    }
}

impl Mul<f64> for Quantity {
    type Output = Quantity;
    fn mul(self, rhs: f64) -> Quantity {
        Quantity {
            value: self.value * rhs,
            ..self
        }
    }
}

impl Mul<Quantity> for f64 {
    type Output = Quantity;
    fn mul(self, rhs: Quantity) -> Quantity {
        rhs * self
    }
}

impl Div<f64> for Quantity {
    type Output = Quantity;
    fn div(self, rhs: f64) -> Quantity {
        Quantity {
            value: self.value / rhs,
            ..self
        }
    }
}

impl Div<Quantity> for f64 {
    type Output = Quantity;
    fn div(self, rhs: Quantity) -> Quantity {
        rhs.recip() * self
    }
}

impl Neg for Quantity {
    type Output = Quantity;
    fn neg(self) -> Quantity {
        Quantity {
            value: -self.value,
            ..self
        }
    }
}
