/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

pub mod policy;
pub mod resolver;
pub mod si_prefix;

pub use policy::PrefixPolicy;
pub use resolver::{auto_prefix, auto_prefix_rounded, magnitude, Scaled};
pub use si_prefix::SiPrefix;
