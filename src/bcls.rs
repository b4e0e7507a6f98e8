//! src/bcls.rs
//!
//! Betweenness Centrality-based Late-acceptance Search, alleen voor DCNP.
//! De knopen worden aflopend op betweenness in een kandidatenrij gezet;
//! elke zet haalt de voorste kandidaat eruit, verwijdert die met kans
//! `selection_prob` en plaatst de beste terugplaatskandidaat terug, of
//! schuift de kandidaat terug tot net na de vijfde positie.

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::rng::RandomSource;
use crate::search::{SearchParams, SearchResult};
use crate::Node;
use std::cmp::Ordering;
use std::collections::VecDeque;

pub struct BclsStrategy {
    max_idle_steps: usize,
    selection_prob: f64,
    rng: RandomSource,
}

impl BclsStrategy {
    pub fn new(params: &SearchParams) -> Self {
        Self {
            max_idle_steps: params.max_idle_steps.unwrap_or(150),
            selection_prob: params.selection_prob.unwrap_or(0.8),
            rng: RandomSource::new(params.seed),
        }
    }

    pub fn execute(&mut self, graph: &mut Graph) -> Result<SearchResult> {
        if !graph.is_dcnp() {
            return Err(Error::InvalidArgument(
                "BCLS requires a DCNP graph".into(),
            ));
        }

        let mut best_solution = graph.removed_nodes().clone();
        let mut current_obj = graph.objective();
        let mut best_obj = current_obj;
        let mut num_idle_steps = 0usize;

        let mut sorted_nodes: Vec<Node> = (0..graph.num_nodes()).collect();
        let centrality = graph.betweenness().to_vec();
        sorted_nodes.sort_by(|&a, &b| {
            centrality[b]
                .partial_cmp(&centrality[a])
                .unwrap_or(Ordering::Equal)
        });

        let mut candidates: VecDeque<Node> = sorted_nodes.into();

        while num_idle_steps < self.max_idle_steps {
            self.perform_move(graph, &mut current_obj, &mut candidates)?;

            if current_obj < best_obj {
                best_solution = graph.removed_nodes().clone();
                best_obj = current_obj;
                num_idle_steps = 0;
            } else {
                num_idle_steps += 1;
            }
        }

        Ok(SearchResult {
            solution: best_solution,
            obj_value: best_obj,
        })
    }

    fn perform_move(
        &mut self,
        graph: &mut Graph,
        current_obj: &mut u64,
        candidates: &mut VecDeque<Node>,
    ) -> Result<()> {
        if candidates.is_empty() {
            log::debug!("candidate nodes list is empty, can not perform move");
            return Ok(());
        }

        while !candidates.is_empty() {
            let draw = self.rng.probability();

            let removed_node = match candidates.pop_front() {
                Some(node) => node,
                None => break,
            };

            if graph.is_removed(removed_node) {
                continue;
            }

            if draw < self.selection_prob {
                graph.remove(removed_node)?;

                match graph.find_best_to_add()? {
                    Some(node_to_add) => {
                        graph.add(node_to_add)?;
                        candidates.push_back(node_to_add);
                    }
                    None => {
                        reinsert(candidates, removed_node);
                        continue;
                    }
                }

                *current_obj = graph.objective();
                return Ok(());
            }

            // Niet gekozen: terug de rij in, net na de vijfde positie
            // (of achteraan bij een korte rij).
            reinsert(candidates, removed_node);
        }

        Ok(())
    }
}

/// Plaatst een kandidaat terug net na de vijfde positie, of achteraan bij
/// een rij korter dan vijf.
fn reinsert(candidates: &mut VecDeque<Node>, node: Node) {
    if candidates.len() >= 5 {
        candidates.insert(5, node);
    } else {
        candidates.push_back(node);
    }
}
