/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Physical quantities checked against their SI dimension vector,
//! displayed in the preferred unit of an [`Environment`].
//!
//! ```
//! use physical::{Environment, base_units::{KG, M, S}};
//!
//! let mut env = Environment::new();
//! env.load("default").unwrap();
//! let force = ((5000.0 * KG * M).unwrap() / (S * S).unwrap()).unwrap();
//! assert_eq!(force.display(&env).to_string(), "5.000 kN");
//! ```

pub mod base_units;
pub mod dimension;
pub mod environment;
pub mod error;
pub mod parser;
pub mod prefix;
pub mod quantity;
pub mod registry;
pub mod render;

pub use dimension::{BaseDimension, DimensionVector, Exponent};
pub use environment::{
    DisplayUnit, Environment, EnvironmentTable, UnitDefinition, UnitSpec,
};
pub use error::{QuantityError, Result};
pub use prefix::{PrefixPolicy, SiPrefix};
pub use quantity::Quantity;
pub use registry::Registry;
pub use render::{render, render_canonical, render_human, Template};
