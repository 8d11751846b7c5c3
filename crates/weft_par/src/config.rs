//! Engine tuning parameters.

use serde::{Deserialize, Serialize};

/// Tunable constants of the annealing loop.
///
/// None of these are hard-coded in the engine; the defaults below are
/// starting points that fit the small CPLD-class fabrics this core targets,
/// and callers fitting larger netlists are expected to measure and override
/// (the struct deserializes from any serde config source).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ParConfig {
    /// Hard cap on optimization iterations.
    pub max_iterations: u32,
    /// Annealing temperature at the first iteration.
    pub temperature_initial: f64,
    /// Floor the temperature never cools below.
    pub temperature_final: f64,
    /// Geometric cooling factor applied each iteration, in (0, 1].
    pub cooling_ratio: f64,
    /// Early-stop window: give up after this many iterations without a new
    /// best cost.
    pub max_stalled_iterations: u32,
    /// Cost charged for each netlist edge with no matching device edge.
    pub unroutable_penalty: u64,
    /// Seed for the engine's random number generator. Identical inputs and
    /// an identical seed reproduce the annealing trajectory exactly.
    pub seed: u64,
    /// Optional wall-clock budget in milliseconds, checked between
    /// iterations.
    pub time_budget_ms: Option<u64>,
}

impl Default for ParConfig {
    fn default() -> Self {
        Self {
            max_iterations: 5000,
            temperature_initial: 100.0,
            temperature_final: 0.01,
            cooling_ratio: 0.99,
            max_stalled_iterations: 500,
            unroutable_penalty: 1000,
            seed: 0,
            time_budget_ms: None,
        }
    }
}
