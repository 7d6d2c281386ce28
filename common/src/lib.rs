//! # Screener Common
//!
//! Models and boundaries shared by every crate in the workspace.
//!
//! * **[`company`]**: the input record read from the data source.
//! * **[`analysis`]**: the external analysis verdict and the provider port.
//! * **[`classification`]**: per-company results and the batch summary.
//! * **[`source`]** / **[`sink`]**: ports for reading records and persisting results.
//! * **[`config`]**: immutable runtime configuration loaded once at startup.

pub mod analysis;
pub mod classification;
pub mod company;
pub mod config;
pub mod sink;
pub mod source;
