/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::base_units::BASE_UNITS;
use crate::environment::Environment;
use crate::Quantity;

/// Named unit quantities available after loading an environment:
/// the SI base units plus every active display unit.
#[derive(Serialize, Deserialize, PartialEq, Clone, Default, Debug)]
#[serde(transparent)]
pub struct Registry(BTreeMap<String, Quantity>);

impl Registry {
    pub(crate) fn from_environment(env: &Environment) -> Self {
        Registry(
            BASE_UNITS
                .iter()
                .map(|(name, q)| (name.to_string(), *q))
                .chain(env.units().map(|u| (u.name.clone(), u.quantity())))
                .collect(),
        )
    }

    pub fn get(&self, name: &str) -> Option<Quantity> {
        self.0.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Quantity)> {
        self.0.iter().map(|(n, q)| (n.as_str(), q))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
