//! src/memetic.rs
//!
//! De memetische hoofdlus: populatie initialiseren met lokale zoektochten,
//! daarna per generatie ouders selecteren, kruisen, het kind lokaal
//! verbeteren en de populatie bijwerken, tot het stopcriterium aanslaat.

use crate::crossover::{
    double_backbone_based_crossover, inherit_repair_recombination, reduce_solve_combine,
};
use crate::data::ProblemData;
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::params::{
    validate_crossover_strategy, validate_problem_type, validate_reduce_params,
    validate_search_strategy, MemeticSearchParams, ReduceParams, VariablePopulationParams,
};
use crate::population::Population;
use crate::search::Search;
use crate::stats::Statistics;
use crate::stop::StoppingCriterion;
use crate::Solution;
use crate::{CROSSOVER_DBX, CROSSOVER_IRR, CROSSOVER_RSC};
use std::time::Instant;

/// Uitkomst van een volledige solve-aanroep.
#[derive(Clone, Debug)]
pub struct SolveResult {
    /// De beste gevonden verzameling te verwijderen knopen.
    pub best_solution: Solution,
    /// Het objectief van die oplossing.
    pub best_obj_value: u64,
    /// Aantal uitgevoerde generaties (crossover plus lokale zoektocht).
    pub num_iterations: usize,
    /// Totale looptijd in seconden.
    pub runtime: f64,
    /// Moment (seconden sinds start) waarop de beste oplossing werd gevonden.
    pub best_found_at_time: f64,
    /// Optioneel verzamelde iteratiestatistieken.
    pub stats: Statistics,
}

/// De geconfigureerde memetische zoeker; bezit de master-graaf.
pub struct MemeticSearch {
    graph: Graph,
    seed: u64,
    search_strategy: String,
    crossover_strategy: String,
    reduce_params: ReduceParams,
    memetic_params: MemeticSearchParams,
    pop_params: VariablePopulationParams,
}

impl MemeticSearch {
    /// Valideert de configuratie en bouwt de master-graaf.
    pub fn new(
        problem_data: &ProblemData,
        problem_type: &str,
        budget: usize,
        seed: u64,
        memetic_params: MemeticSearchParams,
        pop_params: VariablePopulationParams,
        hop_distance: usize,
    ) -> Result<Self> {
        let problem_type = validate_problem_type(problem_type)?;
        let search_strategy = validate_search_strategy(&memetic_params.search, &problem_type)?;
        let crossover_strategy = validate_crossover_strategy(&memetic_params, &problem_type)?;
        let reduce_params = validate_reduce_params(&memetic_params.reduce_params, &problem_type)?;

        let graph = problem_data.create_graph(&problem_type, budget, seed, hop_distance)?;

        Ok(Self {
            graph,
            seed,
            search_strategy,
            crossover_strategy,
            reduce_params,
            memetic_params,
            pop_params,
        })
    }

    /// Voert de zoektocht uit tot het stopcriterium aanslaat.
    pub fn run(
        &mut self,
        stopping_criterion: &mut dyn StoppingCriterion,
        collect_stats: bool,
        display: bool,
    ) -> Result<SolveResult> {
        let start_time = Instant::now();
        let mut stats = Statistics::new(collect_stats);

        if display {
            log::info!(
                "starting memetic search: strategy={}, crossover={}, seed={}",
                self.search_strategy,
                self.crossover_strategy,
                self.seed
            );
        }

        let mut population = Population::new(
            &self.search_strategy,
            self.memetic_params.is_pop_variable,
            self.memetic_params.initial_pop_size,
            self.pop_params.max_pop_size,
            self.pop_params.increase_pop_size,
            self.pop_params.max_idle_gens,
            self.seed,
        );

        // Alleen een tijdslimiet wordt al tijdens de initialisatie gepolst.
        let (init_solution, init_obj_value) = if stopping_criterion.name() == "MaxRuntime" {
            population.initialize(
                &mut self.graph,
                display,
                Some(&mut |obj| stopping_criterion.should_stop(obj)),
            )?
        } else {
            population.initialize(&mut self.graph, display, None)?
        };

        let mut best_solution = init_solution;
        let mut best_obj_value = init_obj_value;
        let mut best_found_at_time = start_time.elapsed().as_secs_f64();

        let mut num_idle_generations = 0usize;
        let mut iterations = 0usize;

        while !stopping_criterion.should_stop(best_obj_value as f64) {
            iterations += 1;

            let mut offspring_graph = match self.crossover_strategy.as_str() {
                CROSSOVER_RSC => {
                    let (parent1, parent2) = population.tournament_select_two(2)?;
                    let offspring = reduce_solve_combine(
                        &self.graph,
                        &parent1,
                        &parent2,
                        &self.reduce_params.search,
                        self.reduce_params.beta,
                        self.seed,
                    )?;
                    self.seed += 1;
                    offspring
                }
                CROSSOVER_DBX => {
                    let (parent1, parent2) = population.tournament_select_two(2)?;
                    let offspring =
                        double_backbone_based_crossover(&self.graph, &parent1, &parent2, self.seed)?;
                    self.seed += 1;
                    offspring
                }
                CROSSOVER_IRR => {
                    let (parent1, parent2, parent3) = population.get_all_three()?;
                    let offspring = inherit_repair_recombination(
                        &self.graph,
                        &parent1,
                        &parent2,
                        &parent3,
                        self.seed,
                    )?;
                    self.seed += 1;
                    offspring
                }
                other => {
                    return Err(Error::InvalidArgument(format!(
                        "unknown crossover strategy: {other}"
                    )))
                }
            };

            let ls_result = {
                let mut local_search = Search::new(&mut offspring_graph, self.seed);
                self.seed += 1;
                local_search.set_strategy(&self.search_strategy)?;
                local_search.run()?
            };

            population.update(
                &mut self.graph,
                ls_result.solution.clone(),
                ls_result.obj_value,
                num_idle_generations,
                display,
            )?;

            if ls_result.obj_value < best_obj_value {
                best_solution = ls_result.solution;
                best_obj_value = ls_result.obj_value;
                best_found_at_time = start_time.elapsed().as_secs_f64();
                num_idle_generations = 0;
            } else {
                num_idle_generations += 1;
            }

            stats.record(best_obj_value, population.size(), num_idle_generations);

            if display {
                log::debug!(
                    "generation {iterations}: best={best_obj_value}, \
                     population={}, idle={num_idle_generations}",
                    population.size()
                );
            }
        }

        let runtime = start_time.elapsed().as_secs_f64();
        if display {
            log::info!(
                "memetic search finished: best={best_obj_value} after {iterations} \
                 generations in {runtime:.3}s"
            );
        }

        Ok(SolveResult {
            best_solution,
            best_obj_value,
            num_iterations: iterations,
            runtime,
            best_found_at_time,
            stats,
        })
    }
}
