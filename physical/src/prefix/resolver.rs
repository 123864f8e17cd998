/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use crate::dimension::Exponent;

use super::{PrefixPolicy, SiPrefix};

/// A display value after prefix selection.
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct Scaled {
    pub mantissa: f64,
    pub prefix: SiPrefix,
}

/// Decimal order of magnitude, `floor(log10(|value|))`. Exact on
/// powers of ten, so that `1000.0` yields 3. Zero and non-finite
/// values yield 0.
pub fn magnitude(value: f64) -> i64 {
    let value = value.abs();
    if value == 0.0 || !value.is_finite() {
        return 0;
    }
    let m = value.log10().floor() as i64;
    if pow10(m + 1) <= value {
        m + 1
    } else if pow10(m) > value {
        m - 1
    } else {
        m
    }
}

/// Select the prefix for a unit raised to `power`, given the
/// magnitude of the value expressed in that (unprefixed) unit.
///
/// The chosen prefix is the one with the largest total shift
/// `prefix * power` not exceeding the magnitude, so that the
/// mantissa is at least one. A value exactly on a boundary belongs
/// to the larger prefix. Values beyond the end of the ladder clamp
/// to its last step.
pub fn select(magnitude: i64, power: Exponent, policy: PrefixPolicy) -> SiPrefix {
    let p = power.twelfths() as i64;
    if p == 0 {
        return SiPrefix::Unit;
    }
    let limit = magnitude * Exponent::DENOMINATOR as i64;
    let candidates = policy.prefixes();
    candidates
        .iter()
        .filter(|c| c.power() * p <= limit)
        .max_by_key(|c| c.power() * p)
        .or_else(|| candidates.iter().min_by_key(|c| c.power() * p))
        .copied()
        .unwrap_or(SiPrefix::Unit)
}

/// Express `value` in `prefix`-ed units raised to `power`.
pub fn apply(value: f64, power: Exponent, prefix: SiPrefix) -> Scaled {
    let shift = prefix.power() * power.twelfths() as i64;
    let denom = Exponent::DENOMINATOR as i64;
    let mantissa = match (shift % denom == 0, shift < 0) {
        (true, false) => value / pow10(shift / denom),
        (true, true) => value * pow10(-shift / denom),
        (false, _) => value / 10f64.powf(shift as f64 / denom as f64),
    };
    Scaled { mantissa, prefix }
}

/// Pick the best-fitting prefix for `value` and rescale it.
pub fn auto_prefix(value: f64, power: Exponent, policy: PrefixPolicy) -> Scaled {
    match value.is_finite() && value != 0.0 {
        true => apply(value, power, select(magnitude(value), power, policy)),
        false => Scaled {
            mantissa: value,
            prefix: SiPrefix::Unit,
        },
    }
}

/// Like [`auto_prefix`], but selects again when rounding the mantissa
/// to `precision` decimals carries it onto the next step, so that
/// `999.9999 m` at three decimals becomes `1.000 km`.
pub fn auto_prefix_rounded(
    value: f64,
    power: Exponent,
    policy: PrefixPolicy,
    precision: usize,
) -> Scaled {
    let scaled = auto_prefix(value, power, policy);
    let rounded = round_to(scaled.mantissa, precision);
    if rounded == scaled.mantissa || !rounded.is_finite() {
        return scaled;
    }
    let carried =
        auto_prefix(unapply(rounded, power, scaled.prefix), power, policy);
    match carried.prefix == scaled.prefix {
        true => scaled,
        false => carried,
    }
}

/* Inverse of `apply`. */
fn unapply(mantissa: f64, power: Exponent, prefix: SiPrefix) -> f64 {
    let shift = prefix.power() * power.twelfths() as i64;
    let denom = Exponent::DENOMINATOR as i64;
    match (shift % denom == 0, shift < 0) {
        (true, false) => mantissa * pow10(shift / denom),
        (true, true) => mantissa / pow10(-shift / denom),
        (false, _) => mantissa * 10f64.powf(shift as f64 / denom as f64),
    }
}

/* Round the way the value will be printed. */
fn round_to(value: f64, precision: usize) -> f64 {
    format!("{:.*}", precision, value)
        .parse()
        .unwrap_or(value)
}

fn pow10(n: i64) -> f64 {
    10f64.powi(n.clamp(i32::MIN as i64, i32::MAX as i64) as i32)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn magnitude_on_boundaries() {
        assert_eq!(magnitude(1000.0), 3);
        assert_eq!(magnitude(999.999), 2);
        assert_eq!(magnitude(0.001), -3);
        assert_eq!(magnitude(-15.0), 1);
        assert_eq!(magnitude(0.0), 0);
        assert_eq!(magnitude(f64::NAN), 0);
    }

    #[test]
    fn select_engineering() {
        let one = Exponent::ONE;
        assert_eq!(select(3, one, PrefixPolicy::Engineering), SiPrefix::Kilo);
        assert_eq!(select(5, one, PrefixPolicy::Engineering), SiPrefix::Kilo);
        assert_eq!(select(2, one, PrefixPolicy::Engineering), SiPrefix::Unit);
        assert_eq!(select(-1, one, PrefixPolicy::Engineering), SiPrefix::Milli);
        assert_eq!(select(40, one, PrefixPolicy::Engineering), SiPrefix::Yotta);
        assert_eq!(select(-40, one, PrefixPolicy::Engineering), SiPrefix::Yocto);
        assert_eq!(select(2, one, PrefixPolicy::All), SiPrefix::Hecto);
        assert_eq!(select(9, one, PrefixPolicy::None), SiPrefix::Unit);
    }

    #[test]
    fn select_with_power() {
        /* 25e6 N² = 25 kN² */
        let sq = Exponent::int(2);
        assert_eq!(select(7, sq, PrefixPolicy::Engineering), SiPrefix::Kilo);
        assert_eq!(apply(25e6, sq, SiPrefix::Kilo).mantissa, 25.0);
        /* 1000 m⁻¹ = 1 mm⁻¹ */
        let inv = Exponent::int(-1);
        assert_eq!(select(3, inv, PrefixPolicy::Engineering), SiPrefix::Milli);
        assert_eq!(apply(1000.0, inv, SiPrefix::Milli).mantissa, 1.0);
    }

    #[test]
    fn rounding_carries_to_next_prefix() {
        let one = Exponent::ONE;
        let eng = PrefixPolicy::Engineering;
        let s = auto_prefix_rounded(999.9999, one, eng, 3);
        assert_eq!(s.prefix, SiPrefix::Kilo);
        assert_eq!(s.mantissa, 1.0);
        let s = auto_prefix_rounded(0.9999999, one, eng, 3);
        assert_eq!(s.prefix, SiPrefix::Unit);
        assert_eq!(s.mantissa, 1.0);
        /* more decimals keep the smaller prefix */
        let s = auto_prefix_rounded(999.9999, one, eng, 6);
        assert_eq!(s.prefix, SiPrefix::Unit);
        /* unprefixed units keep the long mantissa */
        let s = auto_prefix_rounded(999.9999, one, PrefixPolicy::None, 3);
        assert_eq!(s.prefix, SiPrefix::Unit);
    }

    #[test]
    fn auto_prefix_non_finite() {
        let s = auto_prefix(f64::INFINITY, Exponent::ONE, PrefixPolicy::All);
        assert_eq!(s.prefix, SiPrefix::Unit);
        assert!(s.mantissa.is_infinite());
    }
}
