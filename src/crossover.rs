//! src/crossover.rs
//!
//! De drie recombinatieoperatoren van het memetische algoritme. Elke
//! operator levert een nieuwe, zelfstandige graaf op waarvan het
//! verwijdermasker het gekozen kind is.
//!
//! - DBX: dubbele backbone uit twee ouders, met kans θ overgenomen, en
//!   reparatie naar exact `k` knopen.
//! - IRR: overerving op frequentie uit drie ouders, aangevuld met
//!   best-verwijderzetten.
//! - RSC: reduceer de zoekruimte met de gemeenschappelijke kern, los het
//!   gereduceerde probleem lokaal op en combineer.

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::rng::RandomSource;
use crate::search::Search;
use crate::{Node, Solution};
use crate::{STRATEGY_BCLS, STRATEGY_CHNS};

/// Overnamekans van niet-gedeelde ouderknopen in DBX.
const DBX_THETA: f64 = 0.85;

/// IRR: aandeel van het budget dat uit de frequentiepools wordt gevuld.
const IRR_TARGET_RATIO: f64 = 0.9;
/// IRR: kans om uit de frequentie-2-pool te trekken.
const IRR_P2: f64 = 0.5;
/// IRR: kans om anders uit de frequentie-1-pool te trekken.
const IRR_P1: f64 = 0.9;

/// Double-backbone-based crossover over twee ouders.
pub fn double_backbone_based_crossover(
    original_graph: &Graph,
    parent1: &Solution,
    parent2: &Solution,
    seed: u64,
) -> Result<Graph> {
    let mut rng = RandomSource::new(seed);

    let mut nodes_to_remove = Solution::default();

    for &node in parent1 {
        if parent2.contains(&node) {
            nodes_to_remove.insert(node);
        } else if rng.probability() < DBX_THETA {
            nodes_to_remove.insert(node);
        }
    }
    for &node in parent2 {
        if nodes_to_remove.contains(&node) {
            continue;
        }
        if rng.probability() < DBX_THETA {
            nodes_to_remove.insert(node);
        }
    }

    let mut offspring = original_graph.clone();
    offspring.set_removed_all(&nodes_to_remove)?;

    let current_count = nodes_to_remove.len();
    let target_count = parent1.len();

    if current_count < target_count {
        for _ in 0..target_count - current_count {
            let component = offspring.select_component()?;
            let node_to_remove = offspring.random_node_from(component)?;
            offspring.remove(node_to_remove)?;
        }
    } else if current_count > target_count {
        for _ in 0..current_count - target_count {
            let node_to_add = offspring.greedy_add_candidate()?.ok_or_else(|| {
                Error::ContractViolation(
                    "no node available to add back during crossover repair".into(),
                )
            })?;
            offspring.add(node_to_add)?;
        }
    }

    Ok(offspring)
}

/// Inherit-repair-recombination over drie ouders.
pub fn inherit_repair_recombination(
    original_graph: &Graph,
    parent1: &Solution,
    parent2: &Solution,
    parent3: &Solution,
    seed: u64,
) -> Result<Graph> {
    let mut rng = RandomSource::new(seed);

    let num_to_remove = parent1.len();
    let mut offspring = original_graph.clone();

    let parents = [parent1, parent2, parent3];
    let max_node_id = parents
        .iter()
        .flat_map(|parent| parent.iter().copied())
        .max()
        .unwrap_or(0);

    let mut node_frequency = vec![0u8; max_node_id + 1];
    let mut nodes_to_remove = Solution::default();

    for parent in parents {
        for &node in parent {
            node_frequency[node] += 1;
            if node_frequency[node] == 3 {
                nodes_to_remove.insert(node);
            }
        }
    }

    let mut freq2: Vec<Node> = Vec::new();
    let mut freq1: Vec<Node> = Vec::new();
    let mut freq0: Vec<Node> = Vec::new();
    for node in 0..=max_node_id {
        if nodes_to_remove.contains(&node) {
            continue;
        }
        match node_frequency[node] {
            2 => freq2.push(node),
            1 => freq1.push(node),
            0 => freq0.push(node),
            _ => {}
        }
    }

    let inherit_target = (IRR_TARGET_RATIO * num_to_remove as f64) as usize;
    while nodes_to_remove.len() < inherit_target {
        if freq2.is_empty() && freq1.is_empty() && freq0.is_empty() {
            break;
        }

        let draw = rng.probability();
        let node_to_remove = if draw < IRR_P2 && !freq2.is_empty() {
            let position = rng.index(freq2.len());
            Some(freq2.remove(position))
        } else if draw < IRR_P2 + (1.0 - IRR_P2) * IRR_P1 && !freq1.is_empty() {
            let position = rng.index(freq1.len());
            Some(freq1.remove(position))
        } else if !freq0.is_empty() {
            let position = rng.index(freq0.len());
            Some(freq0.remove(position))
        } else {
            None
        };

        if let Some(node) = node_to_remove {
            nodes_to_remove.insert(node);
        }
    }

    offspring.set_removed_all(&nodes_to_remove)?;

    while nodes_to_remove.len() < num_to_remove {
        let node_to_remove = offspring.find_best_to_remove()?.ok_or_else(|| {
            Error::ContractViolation(
                "no improving node available during recombination repair".into(),
            )
        })?;
        offspring.remove(node_to_remove)?;
        nodes_to_remove.insert(node_to_remove);
    }

    Ok(offspring)
}

/// Reduce-solve-combine over twee ouders. De gemeenschappelijke kern wordt
/// met kans β definitief uit een werkkloon geëxciseerd; op de kloon wordt
/// een willekeurige toegelaten oplossing lokaal verbeterd, en kern plus
/// verbetering vormen samen het kind op een verse kloon van het origineel.
pub fn reduce_solve_combine(
    original_graph: &Graph,
    parent1: &Solution,
    parent2: &Solution,
    search_strategy: &str,
    beta: f64,
    seed: u64,
) -> Result<Graph> {
    if !(0.0..=1.0).contains(&beta) {
        return Err(Error::InvalidArgument(
            "beta for RSC crossover must be in [0, 1]".into(),
        ));
    }

    let mut rng = RandomSource::new(seed);

    let mut backbone = Solution::default();
    for &node in parent1 {
        if parent2.contains(&node) && rng.probability() < beta {
            backbone.insert(node);
        }
    }

    let mut working_graph = original_graph.clone();
    working_graph.get_reduced_by(&backbone);

    // De werkkloon is na de excisie niet herbruikbaar; alleen de verse
    // toegelaten kloon gaat de lokale zoektocht in.
    let mut reduced_graph = working_graph.random_feasible();

    let strategy_name = if search_strategy.is_empty() {
        if original_graph.is_dcnp() {
            STRATEGY_BCLS
        } else {
            STRATEGY_CHNS
        }
    } else {
        search_strategy
    };

    let mut local_search = Search::new(&mut reduced_graph, seed);
    local_search.set_strategy(strategy_name)?;
    let result = local_search.run()?;

    let mut final_nodes = backbone;
    final_nodes.extend(result.solution.iter().copied());

    let mut improved_graph = original_graph.clone();
    improved_graph.set_removed_all(&final_nodes)?;

    Ok(improved_graph)
}
