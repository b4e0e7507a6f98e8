//! src/graph.rs
//!
//! Uniforme façade over de twee graafengines. Een `Graph` is een getagde
//! som van de CNP- en DCNP-engine met diepe kloon; gedeelde operaties
//! worden doorgegeven, probleemspecifieke primitieven falen op de andere
//! variant of vallen terug op een equivalent, precies volgens het patroon
//! waarop de crossovers en strategieën bouwen.

use crate::cnp::CnpEngine;
use crate::dcnp::DcnpEngine;
use crate::error::{Error, Result};
use crate::{Node, Solution};

/// De twee ondersteunde probleemvarianten.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProblemKind {
    Cnp,
    Dcnp,
}

/// Getagde omhulling van een concrete engine.
#[derive(Clone, Debug)]
pub enum Graph {
    Cnp(CnpEngine),
    Dcnp(DcnpEngine),
}

impl Graph {
    #[inline]
    pub fn kind(&self) -> ProblemKind {
        match self {
            Graph::Cnp(_) => ProblemKind::Cnp,
            Graph::Dcnp(_) => ProblemKind::Dcnp,
        }
    }

    #[inline]
    pub fn is_dcnp(&self) -> bool {
        matches!(self, Graph::Dcnp(_))
    }

    #[inline]
    pub fn as_cnp(&self) -> Option<&CnpEngine> {
        match self {
            Graph::Cnp(engine) => Some(engine),
            Graph::Dcnp(_) => None,
        }
    }

    #[inline]
    pub fn as_dcnp(&self) -> Option<&DcnpEngine> {
        match self {
            Graph::Cnp(_) => None,
            Graph::Dcnp(engine) => Some(engine),
        }
    }

    /*────────── Gedeelde operaties ──────────*/

    pub fn set_removed_all(&mut self, solution: &Solution) -> Result<()> {
        match self {
            Graph::Cnp(engine) => engine.set_removed_all(solution),
            Graph::Dcnp(engine) => engine.set_removed_all(solution),
        }
    }

    pub fn get_reduced_by(&mut self, remove_set: &Solution) {
        match self {
            Graph::Cnp(engine) => engine.get_reduced_by(remove_set),
            Graph::Dcnp(engine) => engine.get_reduced_by(remove_set),
        }
    }

    pub fn remove(&mut self, node: Node) -> Result<()> {
        match self {
            Graph::Cnp(engine) => engine.remove(node),
            Graph::Dcnp(engine) => engine.remove(node),
        }
    }

    pub fn add(&mut self, node: Node) -> Result<()> {
        match self {
            Graph::Cnp(engine) => engine.add(node),
            Graph::Dcnp(engine) => engine.add(node),
        }
    }

    pub fn set_age(&mut self, node: Node, age: u64) {
        match self {
            Graph::Cnp(engine) => engine.set_age(node, age),
            Graph::Dcnp(engine) => engine.set_age(node, age),
        }
    }

    pub fn objective(&self) -> u64 {
        match self {
            Graph::Cnp(engine) => engine.objective(),
            Graph::Dcnp(engine) => engine.objective(),
        }
    }

    /// Kloont de graaf en vult het masker van de kloon met een uniform
    /// getrokken toegelaten oplossing.
    pub fn random_feasible(&mut self) -> Graph {
        match self {
            Graph::Cnp(engine) => Graph::Cnp(engine.random_feasible()),
            Graph::Dcnp(engine) => Graph::Dcnp(engine.random_feasible()),
        }
    }

    pub fn is_removed(&self, node: Node) -> bool {
        match self {
            Graph::Cnp(engine) => engine.is_removed(node),
            Graph::Dcnp(engine) => engine.is_removed(node),
        }
    }

    pub fn removed_nodes(&self) -> &Solution {
        match self {
            Graph::Cnp(engine) => engine.removed_nodes(),
            Graph::Dcnp(engine) => engine.removed_nodes(),
        }
    }

    pub fn num_nodes(&self) -> usize {
        match self {
            Graph::Cnp(engine) => engine.num_nodes(),
            Graph::Dcnp(engine) => engine.num_nodes(),
        }
    }

    pub fn budget(&self) -> usize {
        match self {
            Graph::Cnp(engine) => engine.budget(),
            Graph::Dcnp(engine) => engine.budget(),
        }
    }

    pub fn random_remove_candidate(&mut self) -> Result<Node> {
        match self {
            Graph::Cnp(engine) => engine.random_remove_candidate(),
            Graph::Dcnp(engine) => engine.random_remove_candidate(),
        }
    }

    /*────────── CNP-primitieven ──────────*/

    pub fn select_component(&mut self) -> Result<usize> {
        match self {
            Graph::Cnp(engine) => engine.select_component(),
            Graph::Dcnp(_) => Err(cnp_only("component selection")),
        }
    }

    pub fn random_node_from(&mut self, component_index: usize) -> Result<Node> {
        match self {
            Graph::Cnp(engine) => engine.random_node_from(component_index),
            Graph::Dcnp(_) => Err(cnp_only("component node selection")),
        }
    }

    pub fn age_node_from(&mut self, component_index: usize) -> Result<Node> {
        match self {
            Graph::Cnp(engine) => engine.age_node_from(component_index),
            Graph::Dcnp(_) => Err(cnp_only("age-based node selection")),
        }
    }

    pub fn impact_node_from(&mut self, component_index: usize) -> Result<Node> {
        match self {
            Graph::Cnp(engine) => engine.impact_node_from(component_index),
            Graph::Dcnp(_) => Err(cnp_only("impact-based node selection")),
        }
    }

    pub fn connection_gain(&self, node: Node) -> Result<u64> {
        match self {
            Graph::Cnp(engine) => Ok(engine.connection_gain(node)),
            Graph::Dcnp(_) => Err(cnp_only("connection gain")),
        }
    }

    /// Hebzuchtige terugplaatskandidaat. Op DCNP valt dit terug op de
    /// best-toevoegenheuristiek, die een lege uitkomst kan hebben.
    pub fn greedy_add_candidate(&mut self) -> Result<Option<Node>> {
        match self {
            Graph::Cnp(engine) => engine.greedy_add_candidate().map(Some),
            Graph::Dcnp(engine) => engine.find_best_to_add(),
        }
    }

    /*────────── DCNP-primitieven ──────────*/

    /// Herbouwt de K-hop-rijen; betekenisloos en daarom een no-op op CNP.
    pub fn build_tree(&mut self) {
        if let Graph::Dcnp(engine) = self {
            engine.build_tree();
        }
    }

    pub fn khop_size(&self) -> u64 {
        match self {
            Graph::Cnp(_) => 0,
            Graph::Dcnp(engine) => engine.khop_size(),
        }
    }

    /// Betweenness-centraliteit; op CNP een lege view.
    pub fn betweenness(&mut self) -> &[f64] {
        match self {
            Graph::Cnp(_) => &[],
            Graph::Dcnp(engine) => engine.betweenness(),
        }
    }

    /// Beste verwijderkandidaat; op CNP valt dit terug op een willekeurige
    /// verwijderkandidaat.
    pub fn find_best_to_remove(&mut self) -> Result<Option<Node>> {
        match self {
            Graph::Cnp(engine) => engine.random_remove_candidate().map(Some),
            Graph::Dcnp(engine) => engine.find_best_to_remove(),
        }
    }

    /// Beste terugplaatskandidaat; op CNP valt dit terug op de hebzuchtige
    /// terugplaatsheuristiek.
    pub fn find_best_to_add(&mut self) -> Result<Option<Node>> {
        match self {
            Graph::Cnp(engine) => engine.greedy_add_candidate().map(Some),
            Graph::Dcnp(engine) => engine.find_best_to_add(),
        }
    }
}

fn cnp_only(operation: &str) -> Error {
    Error::InvalidArgument(format!("{operation} is only available for CNP graphs"))
}
