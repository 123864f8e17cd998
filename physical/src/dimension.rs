/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};
use std::ops::{Add, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize, Serializer};

use super::error::{QuantityError, Result};
use super::render::{compound_symbol, Template};

/// The seven SI base dimensions, in display order.
#[derive(
    Serialize,
    Deserialize,
    PartialEq,
    PartialOrd,
    Eq,
    Ord,
    Hash,
    Clone,
    Copy,
    Debug,
)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum BaseDimension {
    Mass,
    Length,
    Time,
    Current,
    Temperature,
    LuminousIntensity,
    AmountOfSubstance,
}

static BASE_DIMENSIONS: [BaseDimension; 7] = [
    BaseDimension::Mass,
    BaseDimension::Length,
    BaseDimension::Time,
    BaseDimension::Current,
    BaseDimension::Temperature,
    BaseDimension::LuminousIntensity,
    BaseDimension::AmountOfSubstance,
];

impl BaseDimension {
    pub const LIST: &'static [Self] = &BASE_DIMENSIONS;

    pub const fn index(&self) -> usize {
        match self {
            BaseDimension::Mass => 0,
            BaseDimension::Length => 1,
            BaseDimension::Time => 2,
            BaseDimension::Current => 3,
            BaseDimension::Temperature => 4,
            BaseDimension::LuminousIntensity => 5,
            BaseDimension::AmountOfSubstance => 6,
        }
    }

    /// Symbol of the SI base unit for this dimension.
    pub const fn symbol(&self) -> &'static str {
        match self {
            BaseDimension::Mass => "kg",
            BaseDimension::Length => "m",
            BaseDimension::Time => "s",
            BaseDimension::Current => "A",
            BaseDimension::Temperature => "K",
            BaseDimension::LuminousIntensity => "cd",
            BaseDimension::AmountOfSubstance => "mol",
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            BaseDimension::Mass => "mass",
            BaseDimension::Length => "length",
            BaseDimension::Time => "time",
            BaseDimension::Current => "current",
            BaseDimension::Temperature => "temperature",
            BaseDimension::LuminousIntensity => "luminous intensity",
            BaseDimension::AmountOfSubstance => "amount of substance",
        }
    }
}

impl Display for BaseDimension {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A rational dimension exponent, stored as a whole number of
/// twelfths. This holds integers, halves, thirds, quarters and
/// sixths exactly. The twelfths count stays within `±i32::MAX`, so
/// negation never overflows.
#[derive(
    Deserialize, PartialEq, PartialOrd, Eq, Ord, Hash, Clone, Copy, Debug,
)]
#[serde(try_from = "f64")]
pub struct Exponent(i32);

impl Exponent {
    pub const DENOMINATOR: i32 = 12;
    pub const ZERO: Self = Exponent(0);
    pub const ONE: Self = Exponent(Self::DENOMINATOR);

    pub const fn int(n: i16) -> Self {
        Exponent(n as i32 * Self::DENOMINATOR)
    }

    /// Construct from a fraction. Returns `None` when `numer / denom`
    /// is not a whole number of twelfths.
    pub fn ratio(numer: i32, denom: i32) -> Option<Self> {
        if denom == 0 {
            return None;
        }
        let twelfths = numer as i64 * Self::DENOMINATOR as i64;
        match twelfths % denom as i64 {
            0 => Self::checked(twelfths / denom as i64),
            _ => None,
        }
    }

    pub fn from_f64(value: f64) -> Option<Self> {
        twelfths(value * Self::DENOMINATOR as f64).map(Exponent)
    }

    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / Self::DENOMINATOR as f64
    }

    /// The exponent as a whole number of twelfths.
    pub const fn twelfths(&self) -> i32 {
        self.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_integer(&self) -> bool {
        self.0 % Self::DENOMINATOR == 0
    }

    /// Reduced numerator and denominator.
    pub fn fraction(&self) -> (i32, i32) {
        let d = gcd(self.0.abs(), Self::DENOMINATOR).max(1);
        (self.0 / d, Self::DENOMINATOR / d)
    }

    pub fn powi(self, n: i32) -> Option<Self> {
        Self::checked(self.0 as i64 * n as i64)
    }

    pub fn powf(self, n: f64) -> Option<Self> {
        twelfths(self.0 as f64 * n).map(Exponent)
    }

    /// `self * p`, when representable.
    pub fn scale(self, p: Exponent) -> Option<Self> {
        let prod = self.0 as i64 * p.0 as i64;
        match prod % Self::DENOMINATOR as i64 {
            0 => Self::checked(prod / Self::DENOMINATOR as i64),
            _ => None,
        }
    }

    pub fn checked_add(self, rhs: Exponent) -> Option<Self> {
        Self::checked(self.0 as i64 + rhs.0 as i64)
    }

    pub fn checked_sub(self, rhs: Exponent) -> Option<Self> {
        Self::checked(self.0 as i64 - rhs.0 as i64)
    }

    /// `self / rhs`, when representable.
    pub fn ratio_to(self, rhs: Exponent) -> Option<Self> {
        Self::ratio(self.0, rhs.0)
    }

    fn checked(twelfths: i64) -> Option<Self> {
        match twelfths.abs() <= i32::MAX as i64 {
            true => Some(Exponent(twelfths as i32)),
            false => None,
        }
    }
}

fn twelfths(t: f64) -> Option<i32> {
    let r = t.round();
    match t.is_finite()
        && (t - r).abs() <= 1e-9 * r.abs().max(1.0)
        && r.abs() <= i32::MAX as f64
    {
        true => Some(r as i32),
        false => None,
    }
}

fn gcd(a: i32, b: i32) -> i32 {
    match b {
        0 => a,
        _ => gcd(b, a % b),
    }
}

impl TryFrom<f64> for Exponent {
    type Error = String;
    fn try_from(value: f64) -> std::result::Result<Self, Self::Error> {
        Self::from_f64(value).ok_or_else(|| {
            format!("exponent {value} is not a multiple of 1/12")
        })
    }
}

impl Serialize for Exponent {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        match self.is_integer() {
            true => serializer.serialize_i32(self.0 / Self::DENOMINATOR),
            false => serializer.serialize_f64(self.as_f64()),
        }
    }
}

#[cfg(feature = "schemars")]
impl schemars::JsonSchema for Exponent {
    fn schema_name() -> String {
        String::from("Exponent")
    }

    fn json_schema(
        gen: &mut schemars::gen::SchemaGenerator,
    ) -> schemars::schema::Schema {
        <f64 as schemars::JsonSchema>::json_schema(gen)
    }
}

impl Display for Exponent {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self.fraction() {
            (n, 1) => write!(f, "{}", n),
            (n, d) => write!(f, "{}/{}", n, d),
        }
    }
}

impl Neg for Exponent {
    type Output = Exponent;
    fn neg(self) -> Exponent {
        Exponent(-self.0)
    }
}

/// Exponents over the SI base dimensions. This is a quantity's
/// "type": addition and comparison are possible only between
/// quantities of the same dimension vector.
#[derive(
    Serialize,
    Deserialize,
    PartialEq,
    PartialOrd,
    Eq,
    Ord,
    Hash,
    Clone,
    Copy,
    Debug,
)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct DimensionVector([Exponent; 7]);

pub const DIMENSIONLESS: DimensionVector =
    DimensionVector::new([0, 0, 0, 0, 0, 0, 0]);
pub const MASS: DimensionVector = DimensionVector::new([1, 0, 0, 0, 0, 0, 0]);
pub const LENGTH: DimensionVector = DimensionVector::new([0, 1, 0, 0, 0, 0, 0]);
pub const TIME: DimensionVector = DimensionVector::new([0, 0, 1, 0, 0, 0, 0]);
pub const CURRENT: DimensionVector =
    DimensionVector::new([0, 0, 0, 1, 0, 0, 0]);
pub const TEMPERATURE: DimensionVector =
    DimensionVector::new([0, 0, 0, 0, 1, 0, 0]);
pub const LUMINOUS_INTENSITY: DimensionVector =
    DimensionVector::new([0, 0, 0, 0, 0, 1, 0]);
pub const AMOUNT_OF_SUBSTANCE: DimensionVector =
    DimensionVector::new([0, 0, 0, 0, 0, 0, 1]);

impl DimensionVector {
    /// Integer exponents in the order mass, length, time, current,
    /// temperature, luminous intensity, amount of substance.
    pub const fn new(exps: [i16; 7]) -> Self {
        let mut r = [Exponent::ZERO; 7];
        let mut i = 0;
        while i < 7 {
            r[i] = Exponent::int(exps[i]);
            i += 1;
        }
        DimensionVector(r)
    }

    pub const fn from_exponents(exps: [Exponent; 7]) -> Self {
        DimensionVector(exps)
    }

    pub fn base(dim: BaseDimension) -> Self {
        let mut r = [Exponent::ZERO; 7];
        r[dim.index()] = Exponent::ONE;
        DimensionVector(r)
    }

    pub fn exponents(&self) -> &[Exponent; 7] {
        &self.0
    }

    pub fn get(&self, dim: BaseDimension) -> Exponent {
        self.0[dim.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (BaseDimension, Exponent)> + '_ {
        BaseDimension::LIST.iter().map(|d| (*d, self.0[d.index()]))
    }

    pub fn is_dimensionless(&self) -> bool {
        self.0.iter().all(Exponent::is_zero)
    }

    /// The only non-zero component, if there is exactly one.
    pub fn basis(&self) -> Option<(BaseDimension, Exponent)> {
        let mut nonzero = self.iter().filter(|(_, e)| !e.is_zero());
        match (nonzero.next(), nonzero.next()) {
            (Some(basis), None) => Some(basis),
            _ => None,
        }
    }

    pub fn powi(self, n: i32) -> Result<Self> {
        let mut r = [Exponent::ZERO; 7];
        for (i, e) in self.0.iter().enumerate() {
            r[i] = e
                .powi(n)
                .ok_or(QuantityError::UnsupportedExponent(self, n as f64))?;
        }
        Ok(DimensionVector(r))
    }

    pub fn powf(self, n: f64) -> Result<Self> {
        let mut r = [Exponent::ZERO; 7];
        for (i, e) in self.0.iter().enumerate() {
            r[i] = e
                .powf(n)
                .ok_or(QuantityError::UnsupportedExponent(self, n))?;
        }
        Ok(DimensionVector(r))
    }

    pub fn recip(self) -> Self {
        DimensionVector(self.0.map(|e| -e))
    }

    /// The exponent `p` for which `self == other ^ p`, if any.
    pub fn ratio_to(&self, other: &DimensionVector) -> Option<Exponent> {
        let (dim, e) = other.iter().find(|(_, e)| !e.is_zero())?;
        let p = self.get(dim).ratio_to(e)?;
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(s, o)| o.scale(p) == Some(*s))
            .then_some(p)
    }
}

impl Display for DimensionVector {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self.is_dimensionless() {
            true => write!(f, "dimensionless"),
            false => write!(f, "{}", compound_symbol(self, Template::Plain)),
        }
    }
}

/* Operations on dimension vectors, used for type-checking. */

impl Mul<DimensionVector> for DimensionVector {
    type Output = Result<DimensionVector>;
    fn mul(self, rhs: DimensionVector) -> Result<DimensionVector> {
        let mut r = [Exponent::ZERO; 7];
        for (i, (l, e)) in self.0.iter().zip(rhs.0).enumerate() {
            r[i] = l
                .checked_add(e)
                .ok_or(QuantityError::ExponentOverflow(self, rhs))?;
        }
        Ok(DimensionVector(r))
    }
}

impl Div<DimensionVector> for DimensionVector {
    type Output = Result<DimensionVector>;
    fn div(self, rhs: DimensionVector) -> Result<DimensionVector> {
        let mut r = [Exponent::ZERO; 7];
        for (i, (l, e)) in self.0.iter().zip(rhs.0).enumerate() {
            r[i] = l
                .checked_sub(e)
                .ok_or(QuantityError::ExponentOverflow(self, rhs))?;
        }
        Ok(DimensionVector(r))
    }
}

impl Add<DimensionVector> for DimensionVector {
    type Output = Result<DimensionVector>;
    fn add(self, rhs: DimensionVector) -> Result<DimensionVector> {
        match self == rhs {
            true => Ok(self),
            false => Err(QuantityError::Dimension(self, rhs)),
        }
    }
}

impl Sub<DimensionVector> for DimensionVector {
    type Output = Result<DimensionVector>;
    fn sub(self, rhs: DimensionVector) -> Result<DimensionVector> {
        match self == rhs {
            true => Ok(self),
            false => Err(QuantityError::Dimension(self, rhs)),
        }
    }
}
