//! src/dlas.rs
//!
//! Diversified Late Acceptance Search. Elke zet verwijdert een
//! willekeurige knoop uit een heuristisch gekozen component en plaatst
//! hebzuchtig terug; acceptatie vergelijkt met het maximum van een korte
//! kostenhistorie, en een afgewezen zet wordt teruggedraaid door het
//! opgeslagen masker integraal te herstellen.

use crate::error::Result;
use crate::graph::Graph;
use crate::search::{SearchParams, SearchResult};

pub struct DlasStrategy {
    max_idle_steps: usize,
    history_length: usize,
}

impl DlasStrategy {
    pub fn new(params: &SearchParams) -> Self {
        Self {
            max_idle_steps: params.max_idle_steps.unwrap_or(1000),
            history_length: params.history_length.unwrap_or(5),
        }
    }

    pub fn execute(&mut self, graph: &mut Graph) -> Result<SearchResult> {
        let mut best_solution = graph.removed_nodes().clone();
        let mut current_obj = graph.objective();
        let mut best_obj = current_obj;
        let mut num_steps = 0u64;
        let mut num_idle_steps = 0usize;

        let mut history = vec![current_obj; self.history_length];
        let mut max_cost = current_obj;
        let mut num_max_cost = self.history_length;

        while num_idle_steps < self.max_idle_steps {
            num_steps += 1;

            self.perform_move(
                graph,
                &mut current_obj,
                &mut history,
                &mut max_cost,
                &mut num_max_cost,
                num_steps,
            )?;

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
        history: &mut [u64],
        max_cost: &mut u64,
        num_max_cost: &mut usize,
        num_steps: u64,
    ) -> Result<()> {
        // Bewaar het masker en objectief zodat een afgewezen zet integraal
        // kan worden teruggedraaid.
        let previous_removed = graph.removed_nodes().clone();
        let previous_obj = *current_obj;

        let component = graph.select_component()?;
        let node_to_remove = graph.random_node_from(component)?;
        graph.remove(node_to_remove)?;

        if let Some(node_to_add) = graph.greedy_add_candidate()? {
            graph.add(node_to_add)?;
            graph.set_age(node_to_add, num_steps);
        }

        *current_obj = graph.objective();

        let history_index = (num_steps as usize) % history.len();

        if *current_obj != previous_obj && *current_obj >= *max_cost {
            graph.set_removed_all(&previous_removed)?;
            *current_obj = previous_obj;
        }

        if *current_obj > history[history_index] {
            history[history_index] = *current_obj;
        } else if *current_obj < history[history_index] && *current_obj < previous_obj {
            let overwritten = history[history_index];
            history[history_index] = *current_obj;

            if overwritten == *max_cost {
                *num_max_cost -= 1;
            }

            if *num_max_cost == 0 {
                *max_cost = history.iter().copied().max().unwrap_or(*current_obj);
                *num_max_cost = history.iter().filter(|&&cost| cost == *max_cost).count();
            }
        }

        Ok(())
    }
}
