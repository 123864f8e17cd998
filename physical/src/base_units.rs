/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! The seven SI base units. All other quantities are built from
//! these through arithmetic.

use crate::dimension::{
    AMOUNT_OF_SUBSTANCE, CURRENT, LENGTH, LUMINOUS_INTENSITY, MASS,
    TEMPERATURE, TIME,
};
use crate::Quantity;

pub const KG: Quantity = Quantity::si_value(1.0, MASS);
pub const M: Quantity = Quantity::si_value(1.0, LENGTH);
pub const S: Quantity = Quantity::si_value(1.0, TIME);
pub const A: Quantity = Quantity::si_value(1.0, CURRENT);
pub const K: Quantity = Quantity::si_value(1.0, TEMPERATURE);
pub const CD: Quantity = Quantity::si_value(1.0, LUMINOUS_INTENSITY);
pub const MOL: Quantity = Quantity::si_value(1.0, AMOUNT_OF_SUBSTANCE);

pub(crate) static BASE_UNITS: [(&str, Quantity); 7] = [
    ("kg", KG),
    ("m", M),
    ("s", S),
    ("A", A),
    ("K", K),
    ("cd", CD),
    ("mol", MOL),
];
