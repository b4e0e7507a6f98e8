//! src/lib.rs
//!
//! Hoofdbestand van de bibliotheek: een variable-population memetic search
//! voor het Critical Node Problem (CNP) en de afstandsgebonden variant
//! (DCNP). Definieert de publieke modules, de gedeelde typen en constanten,
//! en de `solve`-toegangsfunctie.

pub mod bcls;
pub mod cbns;
pub mod chns;
pub mod cnp;
pub mod crossover;
pub mod data;
pub mod dcnp;
pub mod dlas;
pub mod error;
pub mod graph;
pub mod memetic;
pub mod params;
pub mod population;
pub mod rng;
pub mod search;
pub mod stats;
pub mod stop;

// Her-exporteer de belangrijkste types voor gebruikers van de crate.
pub use data::ProblemData;
pub use error::{Error, Result};
pub use graph::{Graph, ProblemKind};
pub use memetic::{MemeticSearch, SolveResult};
pub use params::{MemeticSearchParams, ReduceParams, VariablePopulationParams};
pub use population::Population;
pub use rng::RandomSource;
pub use search::{Search, SearchParams, SearchResult};
pub use stats::Statistics;
pub use stop::{
    CombinedCriterion, MaxIterations, MaxRuntime, NoImprovement, StoppingCriterion,
};

use rustc_hash::FxHashSet;

/// Knoop-id in [0, n).
pub type Node = usize;
/// Een oplossing: de verzameling te verwijderen knopen.
pub type Solution = FxHashSet<Node>;

/// Probleemtypen.
pub const PROBLEM_TYPE_CNP: &str = "CNP";
pub const PROBLEM_TYPE_DCNP: &str = "DCNP";

/// Lokale zoekstrategieën.
pub const STRATEGY_CBNS: &str = "CBNS";
pub const STRATEGY_CHNS: &str = "CHNS";
pub const STRATEGY_DLAS: &str = "DLAS";
pub const STRATEGY_BCLS: &str = "BCLS";

/// Crossoveroperatoren.
pub const CROSSOVER_DBX: &str = "DBX";
pub const CROSSOVER_IRR: &str = "IRR";
pub const CROSSOVER_RSC: &str = "RSC";

/// Sentinel voor "geen hop-limiet" bij DCNP: groter dan elke realistische
/// graafdiameter.
pub const DEFAULT_HOP_DISTANCE: usize = 1 << 30;

/// Lost een instantie in één aanroep op: valideert de configuratie, bouwt
/// de master-graaf en draait de memetische zoektocht tot het stopcriterium
/// aanslaat.
#[allow(clippy::too_many_arguments)]
pub fn solve(
    problem_data: &ProblemData,
    problem_type: &str,
    budget: usize,
    stopping_criterion: &mut dyn StoppingCriterion,
    seed: u64,
    memetic_params: MemeticSearchParams,
    pop_params: VariablePopulationParams,
    hop_distance: Option<usize>,
    display: bool,
) -> Result<SolveResult> {
    let mut search = MemeticSearch::new(
        problem_data,
        problem_type,
        budget,
        seed,
        memetic_params,
        pop_params,
        hop_distance.unwrap_or(DEFAULT_HOP_DISTANCE),
    )?;
    search.run(stopping_criterion, true, display)
}
