//! # Screener Core
//!
//! The decision engine and the adapters it ships with.
//!
//! * **[`growth`]** and **[`heuristics`]**: pure, deterministic eligibility checks.
//! * **[`analysis`]**: the external analysis port with fail-closed containment,
//!   plus the OpenAI-compatible provider.
//! * **[`engine`]**: per-company classification under the combined policy.
//! * **[`batch`]**: ordered, optionally concurrent, processing of a whole collection.
//! * **[`tabular`]**: CSV implementations of the source and sink ports.

pub mod analysis;
pub mod batch;
pub mod engine;
pub mod growth;
pub mod heuristics;
pub mod tabular;
