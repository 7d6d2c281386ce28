//! Cross-crate scenarios: CSV in, batch classification, CSV out.

pub mod util;

#[cfg(test)]
mod screening;
