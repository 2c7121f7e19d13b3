//! Parameter types configuring the locator stages.
//!
//! Defaults target a city-sized area: a 100 m lattice, margins derived from
//! the calibrated sources, 50% and 90% credible regions and four levels of
//! local refinement (final step ≈ 0.4 m).

use crate::fusion::{ExtractOptions, GridOptions, RefineOptions};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LocatorParams {
    /// Grid layout for the Construct phase.
    pub grid: GridOptions,
    /// Tie policy and credible levels for the Extract phase.
    pub extract: ExtractOptions,
    /// Local refinement around the grid mode; `levels = 0` disables it.
    pub refine: RefineOptions,
}
