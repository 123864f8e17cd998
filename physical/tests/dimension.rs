/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use physical::dimension::{DIMENSIONLESS, LENGTH, MASS, TIME};
use physical::quantity::Quantity;
use physical::{BaseDimension, DimensionVector, Exponent, QuantityError};

fn force() -> DimensionVector {
    DimensionVector::new([1, 1, -2, 0, 0, 0, 0])
}

#[test]
fn algebra() {
    assert_eq!(MASS * LENGTH, LENGTH * MASS);
    assert_eq!(force() / force(), Ok(DIMENSIONLESS));
    assert_eq!(force() * force().recip(), Ok(DIMENSIONLESS));
    assert_eq!(LENGTH.powi(2), LENGTH * LENGTH);
    assert_eq!(
        (MASS * LENGTH).unwrap() / TIME.powi(2).unwrap(),
        Ok(force())
    );
    assert_eq!(DIMENSIONLESS.powi(5), Ok(DIMENSIONLESS));
}

#[test]
fn exponent_overflow_is_an_error() {
    assert_eq!(
        LENGTH.powi(200_000_000),
        Err(QuantityError::UnsupportedExponent(LENGTH, 200_000_000.0))
    );
    let huge = LENGTH.powi(100_000_000).unwrap();
    assert_eq!(
        huge * huge,
        Err(QuantityError::ExponentOverflow(huge, huge))
    );
    assert!((huge.recip() / huge).is_err());
    assert!(LENGTH.powi(i32::MIN).is_err());
    assert!(matches!(
        physical::base_units::M.powi(200_000_000),
        Err(QuantityError::UnsupportedExponent(_, _))
    ));
    let q: Quantity = Quantity::si_value(1.0, huge);
    assert!((q * q).is_err());
}

#[test]
fn addition_requires_equality() {
    assert_eq!(force() + force(), Ok(force()));
    assert_eq!(
        LENGTH + TIME,
        Err(QuantityError::Dimension(LENGTH, TIME))
    );
    assert!((LENGTH - MASS).is_err());
}

#[test]
fn fractional_exponents() {
    let half = Exponent::ratio(1, 2).unwrap();
    assert_eq!(LENGTH.powf(0.5).unwrap().get(BaseDimension::Length), half);
    assert_eq!(LENGTH.powi(2).unwrap().powf(0.5).unwrap(), LENGTH);
    assert_eq!(half.to_string(), "1/2");
    assert_eq!(Exponent::ratio(-4, 6).unwrap().to_string(), "-2/3");
    assert_eq!(Exponent::int(3).to_string(), "3");
    assert_eq!(Exponent::ratio(1, 5), None);
    assert_eq!(Exponent::ratio(1, 0), None);
    assert!(LENGTH.powf(0.3).is_err());
    assert!(LENGTH.powf(f64::NAN).is_err());
}

#[test]
fn ratio_between_vectors() {
    let n2 = force().powi(2).unwrap();
    assert_eq!(n2.ratio_to(&force()), Some(Exponent::int(2)));
    assert_eq!(force().recip().ratio_to(&force()), Some(Exponent::int(-1)));
    assert_eq!(force().ratio_to(&LENGTH), None);
    assert_eq!(LENGTH.ratio_to(&DIMENSIONLESS), None);
}

#[test]
fn basis() {
    assert_eq!(
        LENGTH.powi(-2).unwrap().basis(),
        Some((BaseDimension::Length, Exponent::int(-2)))
    );
    assert_eq!(force().basis(), None);
    assert_eq!(DIMENSIONLESS.basis(), None);
}

#[test]
fn display() {
    assert_eq!(force().to_string(), "kg·m·s⁻²");
    assert_eq!(LENGTH.powf(0.5).unwrap().to_string(), "m¹ᐟ²");
    assert_eq!(DIMENSIONLESS.to_string(), "dimensionless");
}

#[test]
fn serde() {
    assert_eq!(
        serde_json::to_string(&force()).unwrap(),
        "[1,1,-2,0,0,0,0]"
    );
    assert_eq!(
        serde_json::from_str::<DimensionVector>("[0,0.5,0,0,0,0,0]").unwrap(),
        LENGTH.powf(0.5).unwrap()
    );
    assert!(
        serde_json::from_str::<DimensionVector>("[0,0.3,0,0,0,0,0]").is_err()
    );
    assert!(serde_json::from_str::<DimensionVector>("[0,1,0]").is_err());
}
