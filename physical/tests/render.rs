/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use physical::base_units::{A, KG, M, S};
use physical::dimension::{DIMENSIONLESS, LENGTH};
use physical::{Environment, Quantity, SiPrefix, Template};

fn default_env() -> Environment {
    let mut env = Environment::new();
    env.load("default").unwrap();
    env
}

fn newton() -> Quantity {
    ((KG * M).unwrap() / (S * S).unwrap()).unwrap()
}

#[test]
fn autoscale_base_units() {
    let env = default_env();
    assert_eq!((1000.0 * M).display(&env).to_string(), "1.000 km");
    assert_eq!((999.0 * M).display(&env).to_string(), "999.000 m");
    /* rounding up to the next prefix */
    assert_eq!((999.9999 * M).display(&env).to_string(), "1.000 km");
    assert_eq!((999.9994 * M).display(&env).to_string(), "999.999 m");
    assert_eq!((0.9999999 * M).display(&env).to_string(), "1.000 m");
    assert_eq!((0.001 * M).display(&env).to_string(), "1.000 mm");
    assert_eq!((0.0 * M).display(&env).to_string(), "0.000 m");
    assert_eq!((1000.0 * M.recip()).display(&env).to_string(), "1.000 mm⁻¹");
}

#[test]
fn autoscale_mass_on_gram() {
    let env = default_env();
    assert_eq!(KG.display(&env).to_string(), "1.000 kg");
    assert_eq!((1500.0 * KG).display(&env).to_string(), "1.500 Mg");
    assert_eq!((0.002 * KG).display(&env).to_string(), "2.000 g");
}

#[test]
fn autoscale_derived_units() {
    let env = default_env();
    assert_eq!((5000.0 * newton()).display(&env).to_string(), "5.000 kN");
    assert_eq!((2e9 * S.recip()).display(&env).to_string(), "2.000 GHz");
    let volt = ((5000.0 * newton() * M).unwrap() / (S * A).unwrap()).unwrap();
    assert_eq!(volt.display(&env).to_string(), "5.000 kV");
    assert_eq!((volt / A).unwrap().display(&env).to_string(), "5.000 kΩ");
}

#[test]
fn power_of_defined_unit() {
    let env = default_env();
    let n2 = (5000.0 * newton() * (5000.0 * newton())).unwrap();
    assert_eq!(n2.display(&env).to_string(), "25.000 kN²");
    assert_eq!(
        n2.display_as(&env, Template::Html).to_string(),
        "25.000 kN<sup>2</sup>"
    );
    assert_eq!(
        n2.display_as(&env, Template::Latex).to_string(),
        "25.000\\ \\mathrm{kN}^{2}"
    );
}

#[test]
fn compound_fallback() {
    let env = default_env();
    let speed = (3.0 * M / S).unwrap();
    assert_eq!(speed.display(&env).to_string(), "3.000 m·s⁻¹");
    assert_eq!(
        speed.display_as(&env, Template::Html).to_string(),
        "3.000 m&middot;s<sup>-1</sup>"
    );
    assert_eq!(
        (5000.0 * newton()).display(&Environment::new()).to_string(),
        "5000.000 kg·m·s⁻²"
    );
}

#[test]
fn dimensionless() {
    let env = default_env();
    let ratio = Quantity::from_value(0.5);
    assert_eq!(ratio.dimension(), DIMENSIONLESS);
    assert_eq!(ratio.display(&env).to_string(), "0.500");
    assert_eq!(ratio.as_scalar(), Some(0.5));
}

#[test]
fn non_finite_values() {
    let env = default_env();
    assert_eq!(
        Quantity::si_value(f64::NAN, LENGTH).display(&env).to_string(),
        "NaN m"
    );
    assert_eq!(
        (f64::INFINITY * newton()).display(&env).to_string(),
        "inf N"
    );
    assert_eq!(
        (f64::NEG_INFINITY * newton()).display(&env).to_string(),
        "-inf N"
    );
    assert_eq!(
        (f64::INFINITY * KG).display(&env).to_string(),
        "inf kg"
    );
}

#[test]
fn precision() {
    let mut env = default_env();
    let force = 5000.0 * newton();
    assert_eq!(
        force.with_precision(0).unwrap().display(&env).to_string(),
        "5 kN"
    );
    env.set_precision(1).unwrap();
    assert_eq!(force.display(&env).to_string(), "5.0 kN");
    assert!(force.with_precision(-1).is_err());
}

#[test]
fn pinned_prefix() {
    let env = default_env();
    let force = (50000.0 * newton()).prefixed(SiPrefix::Mega).unwrap();
    assert_eq!(force.display(&env).to_string(), "0.050 MN");
    assert_eq!(force.prefix(), Some(SiPrefix::Mega));
}
