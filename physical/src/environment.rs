/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Environments: mergeable tables of preferred display units.
//!
//! An [`Environment`] is the context every rendering call reads from.
//! It is mutated only through the `load*` methods, which merge a
//! table into the active mapping (last loaded wins on collision).
//! It holds no interior mutability; sharing one environment between
//! threads while loading requires external synchronization.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::dimension::{BaseDimension, DimensionVector, Exponent};
use crate::error::{QuantityError, Result};
use crate::prefix::PrefixPolicy;
use crate::quantity::approx_eq;
use crate::registry::Registry;
use crate::Quantity;

pub const DEFAULT_PRECISION: usize = 3;

static BUILTIN_TABLES: [(&str, &str); 3] = [
    ("default", include_str!("../data/default.json")),
    ("structural", include_str!("../data/structural.json")),
    ("us_customary", include_str!("../data/us_customary.json")),
];

/// One entry of an environment definition file.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct UnitSpec {
    pub symbol: String,
    pub dimension: DimensionVector,
    /// SI base units per display unit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub factor: Option<f64>,
    /// Defaults to `engineering` for SI units and `none` otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<PrefixPolicy>,
}

/// A resolved display unit.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct UnitDefinition {
    pub name: String,
    pub symbol: String,
    pub dimension: DimensionVector,
    pub factor: f64,
    pub prefix_policy: PrefixPolicy,
}

impl UnitDefinition {
    /// One of this unit, as a quantity.
    pub fn quantity(&self) -> Quantity {
        Quantity::new(self.factor, self.dimension, self.factor)
    }
}

/// Parsed, not yet merged, environment definition data.
#[derive(Clone, Debug)]
pub struct EnvironmentTable {
    name: String,
    units: Vec<UnitDefinition>,
}

impl EnvironmentTable {
    pub fn builtin(name: &str) -> Result<Self> {
        let (_, data) = BUILTIN_TABLES
            .iter()
            .find(|(n, _)| *n == name)
            .ok_or_else(|| QuantityError::UnknownEnvironment(name.to_string()))?;
        Self::from_json(name, data)
    }

    pub fn builtin_names() -> impl Iterator<Item = &'static str> {
        BUILTIN_TABLES.iter().map(|(n, _)| *n)
    }

    pub fn from_json(name: &str, data: &str) -> Result<Self> {
        let specs: BTreeMap<String, UnitSpec> = serde_json::from_str(data)
            .map_err(|e| {
                QuantityError::Definition(name.to_string(), e.to_string())
            })?;
        Self::from_specs(name, specs)
    }

    /// Read a table from a JSON file, named after the file stem.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let data = fs::read_to_string(path).map_err(|e| {
            QuantityError::Io(format!("{}: {}", path.display(), e))
        })?;
        Self::from_json(&name, &data)
    }

    pub fn from_specs(
        name: &str,
        specs: BTreeMap<String, UnitSpec>,
    ) -> Result<Self> {
        let units = specs
            .into_iter()
            .map(|(unit, spec)| {
                let factor = spec.factor.unwrap_or(1.0);
                if !(factor.is_finite() && factor > 0.0) {
                    return Err(QuantityError::Definition(
                        name.to_string(),
                        format!("unit {unit}: invalid factor {factor}"),
                    ));
                }
                if spec.dimension.is_dimensionless() && factor != 1.0 {
                    return Err(QuantityError::Definition(
                        name.to_string(),
                        format!("unit {unit}: dimensionless unit with factor"),
                    ));
                }
                Ok(UnitDefinition {
                    prefix_policy: spec.prefix.unwrap_or(
                        match factor == 1.0 {
                            true => PrefixPolicy::Engineering,
                            false => PrefixPolicy::None,
                        },
                    ),
                    name: unit,
                    symbol: spec.symbol,
                    dimension: spec.dimension,
                    factor,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(EnvironmentTable {
            name: name.to_string(),
            units,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn units(&self) -> &[UnitDefinition] {
        &self.units
    }
}

/// How a dimension vector is displayed.
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum DisplayUnit<'a> {
    /// A unit from the environment, raised to `power`. Values are
    /// divided by `factor` before display.
    Defined {
        unit: &'a UnitDefinition,
        power: Exponent,
        factor: f64,
    },
    /// A single SI base unit raised to `power`.
    Basis {
        dimension: BaseDimension,
        power: Exponent,
    },
    /// Product of SI base units; never prefixed.
    Compound,
}

/// The active display-unit mapping plus display settings.
#[derive(Clone, Debug)]
pub struct Environment {
    units: BTreeMap<DimensionVector, Vec<UnitDefinition>>,
    loaded: Vec<String>,
    precision: usize,
}

impl Default for Environment {
    fn default() -> Self {
        Environment {
            units: BTreeMap::new(),
            loaded: Vec::new(),
            precision: DEFAULT_PRECISION,
        }
    }
}

impl Environment {
    /// An empty environment: everything displays in SI base units.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a built-in environment by name.
    pub fn load(&mut self, name: &str) -> Result<Registry> {
        let table = EnvironmentTable::builtin(name)?;
        Ok(self.load_table(&table))
    }

    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<Registry> {
        let table = EnvironmentTable::from_file(path)?;
        Ok(self.load_table(&table))
    }

    /// Merge a table into the active mapping. Definitions with the
    /// same dimension and factor as an existing one replace it;
    /// everything else is kept.
    pub fn load_table(&mut self, table: &EnvironmentTable) -> Registry {
        if self.loaded.contains(&table.name) {
            log::warn!("environment {} is loaded more than once", table.name);
        }
        log::debug!(
            "loading environment {} ({} units)",
            table.name,
            table.units.len()
        );
        for def in &table.units {
            let entry = self.units.entry(def.dimension).or_default();
            match entry.iter_mut().find(|d| approx_eq(d.factor, def.factor)) {
                Some(existing) => {
                    log::trace!(
                        "{}: {} replaces {} for {}",
                        table.name,
                        def.name,
                        existing.name,
                        def.dimension
                    );
                    *existing = def.clone();
                }
                None => entry.push(def.clone()),
            }
        }
        self.loaded.push(table.name.clone());
        self.registry()
    }

    /// Names of the loaded environments, in load order.
    pub fn loaded(&self) -> &[String] {
        &self.loaded
    }

    pub fn units(&self) -> impl Iterator<Item = &UnitDefinition> {
        self.units.values().flatten()
    }

    /// Base units plus every active unit, by name.
    pub fn registry(&self) -> Registry {
        Registry::from_environment(self)
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    pub fn set_precision(&mut self, precision: i64) -> Result<()> {
        self.precision = usize::try_from(precision).map_err(|_| {
            QuantityError::Configuration(format!(
                "precision must not be negative (got {})",
                precision
            ))
        })?;
        Ok(())
    }

    /// Exact lookup on dimension and factor.
    pub fn resolve(
        &self,
        dimension: &DimensionVector,
        factor: f64,
    ) -> Option<&UnitDefinition> {
        self.units
            .get(dimension)?
            .iter()
            .find(|d| approx_eq(d.factor, factor))
    }

    pub fn find(&self, name: &str) -> Option<&UnitDefinition> {
        self.units().find(|d| d.name == name || d.symbol == name)
    }

    /// Decide how to display a quantity with this dimension and
    /// factor. Factor-tagged quantities without a matching unit are
    /// displayed in SI.
    pub fn display_unit(
        &self,
        dimension: &DimensionVector,
        factor: f64,
    ) -> DisplayUnit<'_> {
        if factor != 1.0 {
            if let Some(unit) = self
                .defined(dimension, factor)
                .or_else(|| self.power_of(dimension, factor, |_| true))
            {
                return unit;
            }
        }
        self.defined(dimension, 1.0)
            .or_else(|| {
                dimension.basis().map(|(dimension, power)| {
                    DisplayUnit::Basis { dimension, power }
                })
            })
            .or_else(|| {
                self.power_of(dimension, 1.0, |p| {
                    p > Exponent::ZERO && p != Exponent::ONE
                })
            })
            .unwrap_or(DisplayUnit::Compound)
    }

    fn defined(
        &self,
        dimension: &DimensionVector,
        factor: f64,
    ) -> Option<DisplayUnit<'_>> {
        self.resolve(dimension, factor)
            .map(|unit| DisplayUnit::Defined {
                unit,
                power: Exponent::ONE,
                factor,
            })
    }

    /* Power p of a single defined unit, eg. N² or ft⁻¹. */
    fn power_of<F>(
        &self,
        dimension: &DimensionVector,
        factor: f64,
        accept: F,
    ) -> Option<DisplayUnit<'_>>
    where
        F: Fn(Exponent) -> bool,
    {
        self.units()
            .filter(|unit| !unit.dimension.is_dimensionless())
            .filter_map(|unit| {
                let power = dimension.ratio_to(&unit.dimension)?;
                (!power.is_zero()
                    && accept(power)
                    && approx_eq(unit.factor.powf(power.as_f64()), factor))
                .then_some((unit, power))
            })
            .min_by_key(|(_, power)| *power)
            .map(|(unit, power)| DisplayUnit::Defined {
                unit,
                power,
                factor,
            })
    }

    /// Display `quantity` in the named unit (or a power of it).
    pub fn convert(&self, quantity: &Quantity, name: &str) -> Result<Quantity> {
        let unit = self
            .find(name)
            .ok_or_else(|| QuantityError::UnknownUnit(name.to_string()))?;
        let power = match quantity.dimension().ratio_to(&unit.dimension) {
            Some(power) if !power.is_zero() => power,
            _ => {
                return Err(QuantityError::Dimension(
                    quantity.dimension(),
                    unit.dimension,
                ))
            }
        };
        Ok(quantity.with_factor(unit.factor.powf(power.as_f64())))
    }
}
