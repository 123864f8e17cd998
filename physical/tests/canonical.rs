/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use physical::base_units::{KG, M, S};
use physical::dimension::LENGTH;
use physical::parser::parse_exponent;
use physical::{
    render_canonical, Environment, Exponent, Quantity, QuantityError, SiPrefix,
};

fn newton() -> Quantity {
    ((KG * M).unwrap() / (S * S).unwrap()).unwrap()
}

#[test]
fn canonical_form() {
    assert_eq!(
        (5000.0 * newton()).canonical(),
        "Quantity(value=5000.0, dimension=[1, 1, -2, 0, 0, 0, 0], factor=1.0, precision=None)"
    );
    assert_eq!(
        M.sqrt().unwrap().canonical(),
        "Quantity(value=1.0, dimension=[0, 1/2, 0, 0, 0, 0, 0], factor=1.0, precision=None)"
    );
    let q = (2.0 * newton())
        .prefixed(SiPrefix::Kilo)
        .unwrap()
        .with_precision(2)
        .unwrap();
    assert_eq!(
        render_canonical(&q),
        "Quantity(value=2.0, dimension=[1, 1, -2, 0, 0, 0, 0], factor=1.0, precision=2, prefixed=\"k\")"
    );
}

#[test]
fn round_trip() {
    let quantities = [
        5000.0 * newton(),
        M.sqrt().unwrap(),
        Quantity::new(0.9144, LENGTH, 0.3048),
        Quantity::si_value(-1.25e-7, LENGTH.recip()),
        (2.0 * newton())
            .prefixed(SiPrefix::Micro)
            .unwrap()
            .with_precision(4)
            .unwrap(),
    ];
    for q in quantities {
        let parsed: Quantity = q.canonical().parse().unwrap();
        assert_eq!(parsed, q);
        assert_eq!(parsed.factor(), q.factor());
        assert_eq!(parsed.precision(), q.precision());
        assert_eq!(parsed.prefix(), q.prefix());
    }
}

#[test]
fn parse_non_finite() {
    let nan = Quantity::parse(
        "Quantity(value=NaN, dimension=[0, 1, 0, 0, 0, 0, 0], factor=1.0)",
    )
    .unwrap();
    assert!(nan.value().is_nan());
    let inf = Quantity::parse(
        "Quantity(value=-inf, dimension=[0, 1, 0, 0, 0, 0, 0], factor=1.0)",
    )
    .unwrap();
    assert_eq!(inf.value(), f64::NEG_INFINITY);
}

#[test]
fn parse_optional_fields() {
    let q = Quantity::parse(
        "Quantity(value=50000.0, dimension=[1, 1, -2, 0, 0, 0, 0], factor=1.0, precision=2, prefixed=\"M\")",
    )
    .unwrap();
    let mut env = Environment::new();
    env.load("default").unwrap();
    assert_eq!(q.display(&env).to_string(), "0.05 MN");

    let q = Quantity::parse(
        "Quantity(value=1.0, dimension=[0, 1, 0, 0, 0, 0, 0], factor=1.0, precision=None, prefixed=None)",
    )
    .unwrap();
    assert_eq!(q.precision(), None);
    assert_eq!(q.prefix(), None);
}

#[test]
fn parse_errors() {
    for input in [
        "Quantity(value=1.0, dimension=[0, 1, 0, 0, 0, 0, 0], factor=1.0) x",
        "Quantity(value=1.0, dimension=[0, 1, 0], factor=1.0)",
        "Quantity(value=1.0, dimension=[0, 1/5, 0, 0, 0, 0, 0], factor=1.0)",
        "Quantity(value=1.0, factor=1.0)",
        "5 kN",
    ] {
        assert!(
            matches!(Quantity::parse(input), Err(QuantityError::Parse(_))),
            "accepted {:?}",
            input
        );
    }
}

#[test]
fn negative_precision_is_a_configuration_error() {
    assert!(matches!(
        Quantity::parse(
            "Quantity(value=1.0, dimension=[0, 1, 0, 0, 0, 0, 0], factor=1.0, precision=-1)"
        ),
        Err(QuantityError::Configuration(_))
    ));
}

#[test]
fn exponents() {
    assert_eq!(parse_exponent("-2"), Ok(Exponent::int(-2)));
    assert_eq!(parse_exponent("3/4").ok(), Exponent::ratio(3, 4));
    assert!(parse_exponent("1/7").is_err());
}
