/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use nom::{
    branch::alt,
    bytes::complete::{is_not, tag, tag_no_case},
    character::complete::{char, i32 as int32, i64 as int64, one_of, space0},
    combinator::{map, map_opt, map_res, opt, recognize, value},
    multi::separated_list1,
    number::complete::recognize_float,
    sequence::{delimited, pair, preceded, terminated, tuple},
    IResult,
};

use crate::dimension::{DimensionVector, Exponent};
use crate::prefix::SiPrefix;
use crate::Quantity;

use super::error::{QuantityError, Result};

/// Parse the canonical form of a quantity, as produced by
/// [`Quantity::canonical`]. A negative precision is a configuration
/// error, as for [`Quantity::with_precision`].
pub fn parse_quantity(input: &str) -> Result<Quantity> {
    match terminated(quantity, space0)(input.trim_start()) {
        Ok(("", q)) => q,
        Ok((r, _)) => {
            Err(QuantityError::Parse(format!("Leftover input: {}", r)))
        }
        Err(err) => Err(QuantityError::Parse(format!("{}", err))),
    }
}

/// Parse a dimension exponent: an integer or a fraction `n/d`.
pub fn parse_exponent(input: &str) -> Result<Exponent> {
    match exponent(input.trim()) {
        Ok(("", e)) => Ok(e),
        Ok((r, _)) => {
            Err(QuantityError::Parse(format!("Leftover input: {}", r)))
        }
        Err(err) => Err(QuantityError::Parse(format!("{}", err))),
    }
}

/// Parser for the canonical quantity form. Field values that parse
/// but are out of range yield the inner error.
pub fn quantity(input: &str) -> IResult<&str, Result<Quantity>> {
    map(
        delimited(
            pair(tag("Quantity"), sep('(')),
            tuple((
                field("value", float),
                preceded(sep(','), field("dimension", dimension)),
                preceded(sep(','), field("factor", float)),
                opt(preceded(sep(','), field("precision", optional(int64)))),
                opt(preceded(sep(','), field("prefixed", optional(prefix)))),
            )),
            sep(')'),
        ),
        |(value, dimension, factor, precision, prefixed)| {
            let q = Quantity::new(value, dimension, factor)
                .with_prefix_opt(prefixed.flatten());
            match precision.flatten() {
                Some(precision) => q.with_precision(precision),
                None => Ok(q),
            }
        },
    )(input)
}

/// Parser for a bracketed list of seven exponents.
pub fn dimension(input: &str) -> IResult<&str, DimensionVector> {
    map_opt(
        delimited(sep('['), separated_list1(sep(','), exponent), sep(']')),
        |exps: Vec<Exponent>| {
            <[Exponent; 7]>::try_from(exps)
                .ok()
                .map(DimensionVector::from_exponents)
        },
    )(input)
}

pub fn exponent(input: &str) -> IResult<&str, Exponent> {
    map_opt(
        pair(int32, opt(preceded(char('/'), int32))),
        |(n, d)| Exponent::ratio(n, d.unwrap_or(1)),
    )(input)
}

/// Floating-point number, including `NaN`, `inf` and `-inf`.
pub fn float(input: &str) -> IResult<&str, f64> {
    map_res(
        alt((
            recognize(pair(
                opt(one_of("+-")),
                alt((
                    tag_no_case("infinity"),
                    tag_no_case("inf"),
                    tag_no_case("nan"),
                )),
            )),
            recognize_float,
        )),
        |s: &str| s.parse::<f64>(),
    )(input)
}

fn prefix(input: &str) -> IResult<&str, SiPrefix> {
    map_opt(
        delimited(char('"'), opt(is_not("\"")), char('"')),
        |s: Option<&str>| SiPrefix::from_symbol(s.unwrap_or("")),
    )(input)
}

fn optional<'a, O, F>(
    parser: F,
) -> impl FnMut(&'a str) -> IResult<&'a str, Option<O>>
where
    O: Clone,
    F: FnMut(&'a str) -> IResult<&'a str, O>,
{
    alt((value(None, tag("None")), map(parser, Some)))
}

fn field<'a, O, F>(
    name: &'static str,
    parser: F,
) -> impl FnMut(&'a str) -> IResult<&'a str, O>
where
    F: FnMut(&'a str) -> IResult<&'a str, O>,
{
    preceded(tuple((tag(name), space0, char('='), space0)), parser)
}

fn sep<'a>(c: char) -> impl FnMut(&'a str) -> IResult<&'a str, char> {
    delimited(space0, char(c), space0)
}
