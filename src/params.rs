//! src/params.rs
//!
//! Parameterstructuren voor de memetische zoektocht plus de validatie van
//! hun onderlinge verenigbaarheid: probleemtype, zoekstrategie,
//! crossoverkeuze en de reductieparameters van RSC.

use crate::error::{Error, Result};
use crate::{
    CROSSOVER_DBX, CROSSOVER_IRR, CROSSOVER_RSC, PROBLEM_TYPE_CNP, PROBLEM_TYPE_DCNP,
    STRATEGY_BCLS, STRATEGY_CBNS, STRATEGY_CHNS, STRATEGY_DLAS,
};

/// Parameters van de RSC-crossover: de interne zoekstrategie en het
/// behoudaandeel β van gedeelde ouderknopen.
#[derive(Clone, Debug)]
pub struct ReduceParams {
    pub search: String,
    pub beta: f64,
}

impl Default for ReduceParams {
    fn default() -> Self {
        Self {
            search: STRATEGY_CHNS.to_string(),
            beta: 0.9,
        }
    }
}

/// Configuratie van het memetische algoritme.
#[derive(Clone, Debug)]
pub struct MemeticSearchParams {
    /// Lokale zoekstrategie: CBNS, CHNS of DLAS (CNP), of BCLS (DCNP).
    pub search: String,
    /// Expliciete crossover (DBX of IRR) wanneer probleemreductie uit staat.
    pub crossover: Option<String>,
    /// Met probleemreductie aan wordt altijd RSC gebruikt.
    pub is_problem_reduction: bool,
    /// Adaptieve populatieomvang aan of uit.
    pub is_pop_variable: bool,
    /// Initieel aantal individuen.
    pub initial_pop_size: usize,
    /// Parameters voor de RSC-crossover.
    pub reduce_params: ReduceParams,
}

impl Default for MemeticSearchParams {
    fn default() -> Self {
        Self {
            search: STRATEGY_CHNS.to_string(),
            crossover: None,
            is_problem_reduction: true,
            is_pop_variable: true,
            initial_pop_size: 5,
            reduce_params: ReduceParams::default(),
        }
    }
}

/// Configuratie van het adaptieve-populatiemechanisme.
#[derive(Clone, Debug)]
pub struct VariablePopulationParams {
    /// Maximale populatieomvang.
    pub max_pop_size: usize,
    /// Aantal nieuwe individuen per uitbreiding.
    pub increase_pop_size: usize,
    /// Aantal stilstaande generaties vóór uitbreiding of herbouw.
    pub max_idle_gens: usize,
}

impl Default for VariablePopulationParams {
    fn default() -> Self {
        Self {
            max_pop_size: 20,
            increase_pop_size: 3,
            max_idle_gens: 20,
        }
    }
}

/// Normaliseert en controleert het probleemtype.
pub fn validate_problem_type(problem_type: &str) -> Result<String> {
    let normalized = problem_type.to_uppercase();
    if normalized == PROBLEM_TYPE_CNP || normalized == PROBLEM_TYPE_DCNP {
        return Ok(normalized);
    }
    Err(Error::InvalidArgument(format!(
        "unsupported problem type: {problem_type}; valid options are {PROBLEM_TYPE_CNP} and {PROBLEM_TYPE_DCNP}"
    )))
}

/// Normaliseert de zoekstrategie en controleert de verenigbaarheid met het
/// probleemtype: DCNP ondersteunt alleen BCLS, CNP juist niet.
pub fn validate_search_strategy(search: &str, problem_type: &str) -> Result<String> {
    let normalized = search.to_uppercase();
    if ![
        STRATEGY_CBNS,
        STRATEGY_CHNS,
        STRATEGY_DLAS,
        STRATEGY_BCLS,
    ]
    .contains(&normalized.as_str())
    {
        return Err(Error::InvalidArgument(format!(
            "unsupported search strategy: {search}; valid options are \
             {STRATEGY_CBNS}, {STRATEGY_CHNS}, {STRATEGY_DLAS} and {STRATEGY_BCLS}"
        )));
    }

    if problem_type == PROBLEM_TYPE_DCNP && normalized != STRATEGY_BCLS {
        return Err(Error::InvalidArgument(
            "DCNP currently only supports the BCLS search strategy".into(),
        ));
    }
    if problem_type == PROBLEM_TYPE_CNP && normalized == STRATEGY_BCLS {
        return Err(Error::InvalidArgument(
            "CNP does not support the BCLS search strategy".into(),
        ));
    }

    Ok(normalized)
}

/// Bepaalt en controleert de crossoverstrategie. Probleemreductie dwingt
/// RSC af; anders moet expliciet DBX of IRR gekozen zijn. IRR vereist
/// DCNP, een vaste populatie van exact drie en geen adaptieve omvang.
pub fn validate_crossover_strategy(
    params: &MemeticSearchParams,
    problem_type: &str,
) -> Result<String> {
    let crossover = if params.is_problem_reduction {
        CROSSOVER_RSC.to_string()
    } else {
        let choice = params.crossover.as_deref().ok_or_else(|| {
            Error::InvalidArgument(
                "when is_problem_reduction is false, crossover must be set to DBX or IRR".into(),
            )
        })?;
        let normalized = choice.to_uppercase();

        if normalized == CROSSOVER_RSC {
            return Err(Error::InvalidArgument(
                "RSC is reserved for problem reduction mode; choose DBX or IRR".into(),
            ));
        }
        if normalized != CROSSOVER_DBX && normalized != CROSSOVER_IRR {
            return Err(Error::InvalidArgument(format!(
                "unsupported crossover strategy: {choice}; valid options are \
                 {CROSSOVER_DBX} and {CROSSOVER_IRR}"
            )));
        }
        normalized
    };

    if crossover == CROSSOVER_IRR {
        if problem_type != PROBLEM_TYPE_DCNP {
            return Err(Error::InvalidArgument(
                "IRR crossover is only supported for DCNP problems".into(),
            ));
        }
        if params.initial_pop_size != 3 {
            return Err(Error::InvalidArgument(format!(
                "IRR crossover requires exactly 3 individuals in the population, \
                 but initial_pop_size is {}",
                params.initial_pop_size
            )));
        }
        if params.is_pop_variable {
            return Err(Error::InvalidArgument(
                "IRR crossover does not support a variable population size".into(),
            ));
        }
    }

    Ok(crossover)
}

/// Normaliseert en controleert de RSC-reductieparameters.
pub fn validate_reduce_params(
    reduce_params: &ReduceParams,
    problem_type: &str,
) -> Result<ReduceParams> {
    let search = reduce_params.search.to_uppercase();
    if ![
        STRATEGY_CBNS,
        STRATEGY_CHNS,
        STRATEGY_DLAS,
        STRATEGY_BCLS,
    ]
    .contains(&search.as_str())
    {
        return Err(Error::InvalidArgument(format!(
            "unsupported search strategy for reduce_params: {}",
            reduce_params.search
        )));
    }

    if !(0.0..=1.0).contains(&reduce_params.beta) {
        return Err(Error::InvalidArgument(
            "reduce_params beta must be in [0, 1]".into(),
        ));
    }

    if problem_type == PROBLEM_TYPE_DCNP && search != STRATEGY_BCLS {
        return Err(Error::InvalidArgument(
            "for DCNP the RSC inner search must be BCLS".into(),
        ));
    }
    if problem_type == PROBLEM_TYPE_CNP && search == STRATEGY_BCLS {
        return Err(Error::InvalidArgument(
            "BCLS as RSC inner search is only supported for DCNP".into(),
        ));
    }

    Ok(ReduceParams {
        search,
        beta: reduce_params.beta,
    })
}
