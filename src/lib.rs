//! Cost estimation calculators for AI infrastructure projects.
//!
//! Three independent calculators share a common shape: a configuration
//! record with defaults, static pricing tables keyed by enums, a pure
//! calculation function producing an itemized breakdown, and a text
//! report formatter. No calculator touches I/O or retains state between
//! invocations.

pub mod export;
pub mod factory;
pub mod input;
pub mod logging;
pub mod manpower;
pub mod report;
pub mod robot;
