//! src/search.rs
//!
//! Uitvoerlaag voor de lokale zoekstrategieën. Een `Search` bindt een graaf
//! aan een strategienaam plus parameters en voert de gekozen strategie uit;
//! onbekende namen en een ontbrekende strategie zijn fouten van de
//! aanroeper. Het resultaat is de beste gevonden oplossing met objectief.

use crate::bcls::BclsStrategy;
use crate::cbns::CbnsStrategy;
use crate::chns::ChnsStrategy;
use crate::dlas::DlasStrategy;
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::Solution;
use crate::{STRATEGY_BCLS, STRATEGY_CBNS, STRATEGY_CHNS, STRATEGY_DLAS};

/// Uitkomst van één lokale zoektocht.
#[derive(Clone, Debug)]
pub struct SearchResult {
    /// De beste gevonden verzameling te verwijderen knopen.
    pub solution: Solution,
    /// Het objectief van die oplossing.
    pub obj_value: u64,
}

/// Optionele parameteroverschrijvingen voor de strategieën. Ontbrekende
/// waarden vallen terug op de strategie-eigen defaults.
#[derive(Clone, Debug, Default)]
pub struct SearchParams {
    pub max_idle_steps: Option<usize>,
    pub theta: Option<f64>,
    pub history_length: Option<usize>,
    pub selection_prob: Option<f64>,
    pub seed: u64,
}

#[derive(Clone, Copy, Debug)]
enum StrategyKind {
    Cbns,
    Chns,
    Dlas,
    Bcls,
}

/// Bindt graaf, parameters en strategie en voert de zoektocht uit.
pub struct Search<'g> {
    graph: &'g mut Graph,
    params: SearchParams,
    strategy: Option<StrategyKind>,
}

impl<'g> Search<'g> {
    /// Creëert een zoeker met defaultparameters en de gegeven seed.
    pub fn new(graph: &'g mut Graph, seed: u64) -> Self {
        Self {
            graph,
            params: SearchParams {
                seed,
                ..SearchParams::default()
            },
            strategy: None,
        }
    }

    /// Creëert een zoeker met expliciete parameters.
    pub fn with_params(graph: &'g mut Graph, params: SearchParams) -> Self {
        Self {
            graph,
            params,
            strategy: None,
        }
    }

    /// Kiest de strategie op naam.
    pub fn set_strategy(&mut self, name: &str) -> Result<()> {
        self.strategy = Some(match name {
            STRATEGY_CBNS => StrategyKind::Cbns,
            STRATEGY_CHNS => StrategyKind::Chns,
            STRATEGY_DLAS => StrategyKind::Dlas,
            STRATEGY_BCLS => StrategyKind::Bcls,
            other => {
                return Err(Error::InvalidArgument(format!(
                    "unknown search strategy: {other}"
                )))
            }
        });
        Ok(())
    }

    /// Voert de gekozen strategie uit op de gebonden graaf.
    pub fn run(&mut self) -> Result<SearchResult> {
        match self.strategy {
            None => Err(Error::ContractViolation(
                "search strategy is not set".into(),
            )),
            Some(StrategyKind::Cbns) => CbnsStrategy::new(&self.params).execute(self.graph),
            Some(StrategyKind::Chns) => ChnsStrategy::new(&self.params).execute(self.graph),
            Some(StrategyKind::Dlas) => DlasStrategy::new(&self.params).execute(self.graph),
            Some(StrategyKind::Bcls) => BclsStrategy::new(&self.params).execute(self.graph),
        }
    }
}
