//! src/cbns.rs
//!
//! Component-Based Neighborhood Search. Elke zet kiest heuristisch een
//! component, verwijdert daaruit de minst recent bewogen knoop en plaatst
//! hebzuchtig de goedkoopste verwijderde knoop terug. De zoektocht stopt
//! na `max_idle_steps` opeenvolgende zetten zonder verbetering.

use crate::error::Result;
use crate::graph::Graph;
use crate::search::{SearchParams, SearchResult};

pub struct CbnsStrategy {
    max_idle_steps: usize,
}

impl CbnsStrategy {
    pub fn new(params: &SearchParams) -> Self {
        Self {
            max_idle_steps: params.max_idle_steps.unwrap_or(1000),
        }
    }

    pub fn execute(&mut self, graph: &mut Graph) -> Result<SearchResult> {
        let mut best_solution = graph.removed_nodes().clone();
        let mut current_obj = graph.objective();
        let mut best_obj = current_obj;
        let mut num_idle_steps = 0usize;
        let mut num_steps = 0u64;

        while num_idle_steps < self.max_idle_steps {
            num_steps += 1;

            self.perform_move(graph, &mut current_obj, num_steps)?;

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
        num_steps: u64,
    ) -> Result<()> {
        let component = graph.select_component()?;
        let node_to_remove = graph.age_node_from(component)?;

        graph.remove(node_to_remove)?;
        graph.set_age(node_to_remove, num_steps);

        if let Some(node_to_add) = graph.greedy_add_candidate()? {
            graph.add(node_to_add)?;
            graph.set_age(node_to_add, num_steps);
        }

        *current_obj = graph.objective();
        Ok(())
    }
}
