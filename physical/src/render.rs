/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Textual forms of a quantity: the human-readable display form,
//! resolved through an [`Environment`], and the canonical form that
//! parses back into an equal quantity.

use std::fmt::{self, Display, Formatter, Write};

use serde::{Deserialize, Serialize};

use crate::dimension::{BaseDimension, DimensionVector, Exponent};
use crate::environment::{DisplayUnit, Environment};
use crate::prefix::resolver::apply;
use crate::prefix::{auto_prefix_rounded, PrefixPolicy, Scaled, SiPrefix};
use crate::Quantity;

/// Markup used for exponents and separators.
#[derive(
    Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy, Default, Debug,
)]
#[serde(rename_all = "snake_case")]
pub enum Template {
    /// Unicode superscripts and middle dots.
    #[default]
    Plain,
    Html,
    Latex,
}

impl Template {
    fn space(&self) -> &'static str {
        match self {
            Template::Plain | Template::Html => " ",
            Template::Latex => "\\ ",
        }
    }

    fn separator(&self) -> &'static str {
        match self {
            Template::Plain => "·",
            Template::Html => "&middot;",
            Template::Latex => " \\cdot ",
        }
    }
}

/// Display adapter returned by [`Quantity::display`].
pub struct HumanDisplay<'a> {
    quantity: &'a Quantity,
    env: &'a Environment,
    template: Template,
}

impl<'a> HumanDisplay<'a> {
    pub(crate) fn new(
        quantity: &'a Quantity,
        env: &'a Environment,
        template: Template,
    ) -> Self {
        HumanDisplay {
            quantity,
            env,
            template,
        }
    }
}

impl Display for HumanDisplay<'_> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(&render(self.quantity, self.env, self.template))
    }
}

pub fn render_human(quantity: &Quantity, env: &Environment) -> String {
    render(quantity, env, Template::Plain)
}

/// Value with the best-fitting prefix and unit symbol, eg. `5.000 kN`.
pub fn render(quantity: &Quantity, env: &Environment, template: Template) -> String {
    let precision = quantity.precision().unwrap_or(env.precision());
    let (mantissa, units) =
        match env.display_unit(&quantity.dimension(), quantity.factor()) {
            DisplayUnit::Defined {
                unit,
                power,
                factor,
            } => {
                let scaled = prefixed(
                    quantity.value() / factor,
                    power,
                    unit.prefix_policy,
                    quantity.prefix(),
                    precision,
                );
                (
                    scaled.mantissa,
                    unit_text(scaled.prefix, &unit.symbol, power, template),
                )
            }
            DisplayUnit::Basis { dimension, power } => {
                basis(quantity, dimension, power, precision, template)
            }
            DisplayUnit::Compound => (
                quantity.value(),
                compound_symbol(&quantity.dimension(), template),
            ),
        };
    let value = format_value(mantissa, precision);
    match units.is_empty() {
        true => value,
        false => format!("{}{}{}", value, template.space(), units),
    }
}

fn prefixed(
    value: f64,
    power: Exponent,
    policy: PrefixPolicy,
    pinned: Option<SiPrefix>,
    precision: usize,
) -> Scaled {
    match pinned {
        Some(prefix) if policy.is_prefixable() && value.is_finite() => {
            apply(value, power, prefix)
        }
        _ => auto_prefix_rounded(value, power, policy, precision),
    }
}

/* Mass is prefixed on the gram: 1500 kg displays as 1.500 Mg. */
fn basis(
    quantity: &Quantity,
    dimension: BaseDimension,
    power: Exponent,
    precision: usize,
    template: Template,
) -> (f64, String) {
    let value = quantity.value();
    match dimension {
        BaseDimension::Mass if !value.is_finite() || value == 0.0 => {
            (value, unit_text(SiPrefix::Unit, "kg", power, template))
        }
        BaseDimension::Mass => {
            let grams = apply(value, power, SiPrefix::Milli).mantissa;
            let scaled = prefixed(
                grams,
                power,
                PrefixPolicy::Engineering,
                quantity.prefix(),
                precision,
            );
            (
                scaled.mantissa,
                unit_text(scaled.prefix, "g", power, template),
            )
        }
        _ => {
            let scaled = prefixed(
                value,
                power,
                PrefixPolicy::Engineering,
                quantity.prefix(),
                precision,
            );
            (
                scaled.mantissa,
                unit_text(scaled.prefix, dimension.symbol(), power, template),
            )
        }
    }
}

fn unit_text(
    prefix: SiPrefix,
    symbol: &str,
    power: Exponent,
    template: Template,
) -> String {
    match template {
        Template::Plain | Template::Html => {
            format!("{}{}{}", prefix, symbol, exponent(power, template))
        }
        Template::Latex => format!(
            "\\mathrm{{{}{}}}{}",
            match prefix {
                SiPrefix::Micro => "\\mu ",
                p => p.prefix(),
            },
            symbol,
            exponent(power, template)
        ),
    }
}

fn exponent(power: Exponent, template: Template) -> String {
    if power == Exponent::ONE {
        return String::new();
    }
    match template {
        Template::Plain => superscript(power),
        Template::Html => format!("<sup>{}</sup>", power),
        Template::Latex => format!("^{{{}}}", power),
    }
}

/// Product of base-unit symbols in fixed order, eg. `kg·m·s⁻²`.
pub fn compound_symbol(dimension: &DimensionVector, template: Template) -> String {
    dimension
        .iter()
        .filter(|(_, e)| !e.is_zero())
        .map(|(d, e)| unit_text(SiPrefix::Unit, d.symbol(), e, template))
        .collect::<Vec<String>>()
        .join(template.separator())
}

static SS: [char; 10] = [
    '\u{2070}', '\u{00b9}', '\u{00b2}', '\u{00b3}', '\u{2074}', '\u{2075}',
    '\u{2076}', '\u{2077}', '\u{2078}', '\u{2079}',
];

/// Unicode superscript for an exponent; fractions as `¹ᐟ²`.
pub fn superscript(power: Exponent) -> String {
    power
        .to_string()
        .chars()
        .map(|c| match c {
            '-' => '\u{207b}',
            '/' => '\u{141f}',
            c => c.to_digit(10).map(|n| SS[n as usize]).unwrap_or(c),
        })
        .collect()
}

/// Fixed-point value; non-finite values render as `NaN`, `inf`
/// and `-inf`.
pub fn format_value(value: f64, precision: usize) -> String {
    if value.is_nan() {
        String::from("NaN")
    } else if value.is_infinite() {
        String::from(match value > 0.0 {
            true => "inf",
            false => "-inf",
        })
    } else {
        format!("{:.*}", precision, value)
    }
}

/// `Quantity(value=.., dimension=[..], factor=.., precision=..)`, plus
/// the pinned prefix when set.
pub fn render_canonical(quantity: &Quantity) -> String {
    let mut s = format!(
        "Quantity(value={:?}, dimension=[{}], factor={:?}",
        quantity.value(),
        quantity
            .dimension()
            .exponents()
            .iter()
            .map(Exponent::to_string)
            .collect::<Vec<_>>()
            .join(", "),
        quantity.factor()
    );
    match quantity.precision() {
        Some(precision) => {
            let _ = write!(s, ", precision={}", precision);
        }
        None => s.push_str(", precision=None"),
    }
    if let Some(prefix) = quantity.prefix() {
        let _ = write!(s, ", prefixed=\"{}\"", prefix.prefix());
    }
    s.push(')');
    s
}
