/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

use super::SiPrefix;

/// Which prefixes a display unit accepts.
#[derive(
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Clone,
    Copy,
    Default,
    Debug,
)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum PrefixPolicy {
    /// Never prefixed (customary units, currencies, ...).
    None,
    /// Powers of 1000: ..., milli, (none), kilo, mega, ...
    #[default]
    Engineering,
    /// Every SI prefix, including centi, deci, deca and hecto.
    All,
}

impl PrefixPolicy {
    pub fn prefixes(&self) -> &'static [SiPrefix] {
        match self {
            PrefixPolicy::None => &[SiPrefix::Unit],
            PrefixPolicy::Engineering => SiPrefix::ENGINEERING,
            PrefixPolicy::All => SiPrefix::SCALE,
        }
    }

    pub fn is_prefixable(&self) -> bool {
        *self != PrefixPolicy::None
    }
}

impl Display for PrefixPolicy {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            PrefixPolicy::None => write!(f, "none"),
            PrefixPolicy::Engineering => write!(f, "engineering"),
            PrefixPolicy::All => write!(f, "all"),
        }
    }
}
