/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

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
pub enum SiPrefix {
    Yocto,
    Zepto,
    Atto,
    Femto,
    Pico,
    Nano,
    Micro,
    Milli,
    Centi,
    Deci,
    Unit,
    Deca,
    Hecto,
    Kilo,
    Mega,
    Giga,
    Tera,
    Peta,
    Exa,
    Zetta,
    Yotta,
}

static SI_PREFIXES: [SiPrefix; 21] = [
    SiPrefix::Yocto,
    SiPrefix::Zepto,
    SiPrefix::Atto,
    SiPrefix::Femto,
    SiPrefix::Pico,
    SiPrefix::Nano,
    SiPrefix::Micro,
    SiPrefix::Milli,
    SiPrefix::Centi,
    SiPrefix::Deci,
    SiPrefix::Unit,
    SiPrefix::Deca,
    SiPrefix::Hecto,
    SiPrefix::Kilo,
    SiPrefix::Mega,
    SiPrefix::Giga,
    SiPrefix::Tera,
    SiPrefix::Peta,
    SiPrefix::Exa,
    SiPrefix::Zetta,
    SiPrefix::Yotta,
];

/* Powers of 1000 only. */
static ENGINEERING_PREFIXES: [SiPrefix; 17] = [
    SiPrefix::Yocto,
    SiPrefix::Zepto,
    SiPrefix::Atto,
    SiPrefix::Femto,
    SiPrefix::Pico,
    SiPrefix::Nano,
    SiPrefix::Micro,
    SiPrefix::Milli,
    SiPrefix::Unit,
    SiPrefix::Kilo,
    SiPrefix::Mega,
    SiPrefix::Giga,
    SiPrefix::Tera,
    SiPrefix::Peta,
    SiPrefix::Exa,
    SiPrefix::Zetta,
    SiPrefix::Yotta,
];

impl SiPrefix {
    pub const SCALE: &'static [Self] = &SI_PREFIXES;
    pub const ENGINEERING: &'static [Self] = &ENGINEERING_PREFIXES;

    pub const fn power(&self) -> i64 {
        match self {
            SiPrefix::Yocto => -24,
            SiPrefix::Zepto => -21,
            SiPrefix::Atto => -18,
            SiPrefix::Femto => -15,
            SiPrefix::Pico => -12,
            SiPrefix::Nano => -9,
            SiPrefix::Micro => -6,
            SiPrefix::Milli => -3,
            SiPrefix::Centi => -2,
            SiPrefix::Deci => -1,
            SiPrefix::Unit => 0,
            SiPrefix::Deca => 1,
            SiPrefix::Hecto => 2,
            SiPrefix::Kilo => 3,
            SiPrefix::Mega => 6,
            SiPrefix::Giga => 9,
            SiPrefix::Tera => 12,
            SiPrefix::Peta => 15,
            SiPrefix::Exa => 18,
            SiPrefix::Zetta => 21,
            SiPrefix::Yotta => 24,
        }
    }

    pub const fn prefix(&self) -> &'static str {
        match self {
            SiPrefix::Yocto => "y",
            SiPrefix::Zepto => "z",
            SiPrefix::Atto => "a",
            SiPrefix::Femto => "f",
            SiPrefix::Pico => "p",
            SiPrefix::Nano => "n",
            SiPrefix::Micro => "µ",
            SiPrefix::Milli => "m",
            SiPrefix::Centi => "c",
            SiPrefix::Deci => "d",
            SiPrefix::Unit => "",
            SiPrefix::Deca => "da",
            SiPrefix::Hecto => "h",
            SiPrefix::Kilo => "k",
            SiPrefix::Mega => "M",
            SiPrefix::Giga => "G",
            SiPrefix::Tera => "T",
            SiPrefix::Peta => "P",
            SiPrefix::Exa => "E",
            SiPrefix::Zetta => "Z",
            SiPrefix::Yotta => "Y",
        }
    }

    /// Look up a prefix by its symbol. Accepts `u` for micro.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "u" | "μ" => Some(SiPrefix::Micro),
            _ => Self::SCALE.iter().find(|p| p.prefix() == symbol).copied(),
        }
    }
}

impl Display for SiPrefix {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.prefix())
    }
}
