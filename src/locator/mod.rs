//! End-to-end locator.
//!
//! - [`params`] – configuration for the grid, extraction and refinement.
//! - `pipeline` – the [`Locator`] itself.

pub mod params;
mod pipeline;

pub use params::LocatorParams;
pub use pipeline::Locator;
