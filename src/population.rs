//! src/population.rs
//!
//! Populatiebeheer voor het memetische algoritme. Elke oplossing krijgt
//! een uniek id en symmetrische Jaccard-gelijkenisvermeldingen naar alle
//! andere leden; fitness is een rangmengsel van kosten en gemiddelde
//! gelijkenis (lager is beter). Selectie verloopt via k-toernooien, en bij
//! stilstand kan de populatie groeien of herbouwd worden.

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::rng::RandomSource;
use crate::search::Search;
use crate::Solution;
use std::cmp::Ordering;

/// Gewicht van de kostenrang in de fitness; de rest is diversiteitsrang.
const ALPHA: f64 = 0.60;
/// Initiële capaciteit van de gelijkenislijst per individu.
const SIMILARITY_RESERVE: usize = 30;

/// Eén individu: oplossing, objectief, fitness, id en gelijkenissen.
#[derive(Clone, Debug)]
pub struct PopulationItem {
    solution: Solution,
    obj_value: u64,
    fitness: f64,
    id: u64,
    /// Paren (gelijkenis, id-van-ander); spiegelbeeldig aanwezig bij de ander.
    similarity: Vec<(f64, u64)>,
}

impl PopulationItem {
    #[inline]
    pub fn solution(&self) -> &Solution {
        &self.solution
    }

    #[inline]
    pub fn obj_value(&self) -> u64 {
        self.obj_value
    }

    #[inline]
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    #[inline]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[inline]
    pub fn similarity(&self) -> &[(f64, u64)] {
        &self.similarity
    }
}

/// De populatie zelf, met de configuratie voor adaptieve omvang.
#[derive(Debug)]
pub struct Population {
    items: Vec<PopulationItem>,
    rng: RandomSource,
    init_pop_size: usize,
    is_variable: bool,
    search: String,
    max_pop_size: usize,
    increase_pop_size: usize,
    max_idle_gens: usize,
    next_item_id: u64,
    next_search_seed: u64,
}

impl Population {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        search: &str,
        is_variable: bool,
        initial_pop_size: usize,
        max_pop_size: usize,
        increase_pop_size: usize,
        max_idle_gens: usize,
        seed: u64,
    ) -> Self {
        Self {
            items: Vec::new(),
            rng: RandomSource::new(seed),
            init_pop_size: initial_pop_size,
            is_variable,
            search: search.to_string(),
            max_pop_size,
            increase_pop_size,
            max_idle_gens,
            next_item_id: 0,
            // De zoekseed per gegenereerde oplossing loopt deterministisch
            // op vanaf de populatieseed.
            next_search_seed: seed.wrapping_add(1000),
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn items(&self) -> &[PopulationItem] {
        &self.items
    }

    /// Jaccard-gelijkenis tussen twee oplossingen: |A∩B| / |A∪B|.
    fn compute_similarity(first: &Solution, second: &Solution) -> f64 {
        let intersection = first.iter().filter(|node| second.contains(node)).count();
        let union = first.len() + second.len() - intersection;
        if union == 0 {
            return 0.0;
        }
        intersection as f64 / union as f64
    }

    /// Voegt een oplossing toe met een nieuw id en wederzijdse
    /// gelijkenisvermeldingen naar elk bestaand individu.
    pub fn add(&mut self, solution: Solution, obj_value: u64) {
        let id = self.next_item_id;
        self.next_item_id += 1;

        let mut item = PopulationItem {
            solution,
            obj_value,
            fitness: 0.0,
            id,
            similarity: Vec::with_capacity(SIMILARITY_RESERVE),
        };

        for other in &mut self.items {
            let similarity = Self::compute_similarity(&item.solution, &other.solution);
            item.similarity.push((similarity, other.id));
            other.similarity.push((similarity, item.id));
        }

        self.items.push(item);
    }

    /// Lineaire zoektocht naar een identieke oplossing.
    pub fn is_duplicate(&self, solution: &Solution) -> bool {
        self.items.iter().any(|item| item.solution == *solution)
    }

    /// Herberekent de fitness van alle individuen: α·rang(kosten) +
    /// (1−α)·rang(gemiddelde gelijkenis), beide 1-gebaseerd en stabiel
    /// gerangschikt. Lager is beter.
    pub fn update_fitness(&mut self) {
        let pop_size = self.items.len();
        if pop_size <= 1 {
            if pop_size == 1 {
                self.items[0].fitness = 0.0;
            }
            return;
        }

        let costs: Vec<f64> = self.items.iter().map(|item| item.obj_value as f64).collect();
        let diversity: Vec<f64> = self
            .items
            .iter()
            .map(|item| {
                if item.similarity.is_empty() {
                    0.0
                } else {
                    let sum: f64 = item.similarity.iter().map(|(value, _)| value).sum();
                    sum / item.similarity.len() as f64
                }
            })
            .collect();

        let cost_ranks = ranks(&costs);
        let diversity_ranks = ranks(&diversity);

        for (index, item) in self.items.iter_mut().enumerate() {
            item.fitness =
                ALPHA * cost_ranks[index] as f64 + (1.0 - ALPHA) * diversity_ranks[index] as f64;
        }
    }

    /// Verwijdert het individu met de hoogste fitness en schrapt diens id
    /// uit alle resterende gelijkenislijsten.
    pub fn remove_worst(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.update_fitness();

        let mut worst = 0;
        for index in 1..self.items.len() {
            if self.items[index].fitness > self.items[worst].fitness {
                worst = index;
            }
        }
        let worst_id = self.items[worst].id;

        for item in &mut self.items {
            if item.id != worst_id {
                item.similarity.retain(|&(_, other_id)| other_id != worst_id);
            }
        }

        self.items.remove(worst);
    }

    /// Verwerkt een nieuw kind: toevoegen, slechtste eruit, en bij
    /// aanhoudende stilstand de populatie vergroten of herbouwen.
    pub fn update(
        &mut self,
        graph: &mut Graph,
        solution: Solution,
        obj_value: u64,
        num_idle_generations: usize,
        verbose: bool,
    ) -> Result<()> {
        self.add(solution, obj_value);
        self.remove_worst();

        if self.is_variable
            && num_idle_generations > 0
            && num_idle_generations % self.max_idle_gens == 0
        {
            if self.items.len() < self.max_pop_size {
                if verbose {
                    log::debug!("expanding population due to idle generations");
                }
                self.expand(graph)?;
            } else {
                if verbose {
                    log::debug!("rebuilding population due to size limit");
                }
                self.rebuild(graph)?;
            }
        }

        Ok(())
    }

    /// Genereert een oplossing die nog niet in de populatie zit: een
    /// willekeurige toegelaten kloon wordt één keer lokaal doorzocht; bij
    /// een duplicaat volgen tot tien toevoeg-plus-verwijderstappen. De
    /// eindtoestand van de kloon is de uitkomst.
    pub fn generate_non_duplicate(&mut self, graph: &mut Graph) -> Result<(Solution, u64)> {
        let search_seed = self.next_search_seed;
        self.next_search_seed += 1;

        let mut new_graph = graph.random_feasible();

        {
            let mut local_search = Search::new(&mut new_graph, search_seed);
            local_search.set_strategy(&self.search)?;
            local_search.run()?;
        }

        let mut attempts = 0;
        while self.is_duplicate(new_graph.removed_nodes()) && attempts < 10 {
            let node_to_add = if graph.is_dcnp() {
                new_graph.find_best_to_add()?
            } else {
                new_graph.greedy_add_candidate()?
            }
            .ok_or_else(|| {
                Error::ContractViolation("no node available to perturb a duplicate".into())
            })?;
            new_graph.add(node_to_add)?;

            let node_to_remove = new_graph.random_remove_candidate()?;
            new_graph.remove(node_to_remove)?;
            attempts += 1;
        }

        Ok((new_graph.removed_nodes().clone(), new_graph.objective()))
    }

    /// Vult de populatie met verse, niet-duplicate oplossingen. Het
    /// stopcriterium wordt na elke gegenereerde oplossing gepolst; slaat
    /// het aan, dan keert die oplossing direct terug.
    pub fn initialize(
        &mut self,
        graph: &mut Graph,
        display: bool,
        mut stopping_criterion: Option<&mut dyn FnMut(f64) -> bool>,
    ) -> Result<(Solution, u64)> {
        self.items.clear();

        for _ in 0..self.init_pop_size {
            let (solution, obj_value) = self.generate_non_duplicate(graph)?;

            if let Some(criterion) = stopping_criterion.as_deref_mut() {
                if criterion(obj_value as f64) {
                    if display {
                        log::info!("stopping criterion met during initialization");
                    }
                    return Ok((solution, obj_value));
                }
            }

            self.add(solution, obj_value);
        }

        let best = self
            .best_item()
            .ok_or_else(|| Error::ContractViolation("population is empty".into()))?;
        Ok((best.solution.clone(), best.obj_value))
    }

    /// Breidt de populatie uit met `increase_pop_size` nieuwe individuen.
    pub fn expand(&mut self, graph: &mut Graph) -> Result<()> {
        let new_size = self.items.len() + self.increase_pop_size;
        while self.items.len() < new_size {
            let (solution, obj_value) = self.generate_non_duplicate(graph)?;
            self.add(solution, obj_value);
        }
        Ok(())
    }

    /// Herbouwt de populatie: alleen het beste individu blijft (onder een
    /// nieuw id, zonder gelijkenissen), plus één verse oplossing.
    pub fn rebuild(&mut self, graph: &mut Graph) -> Result<()> {
        let best = self
            .best_item()
            .ok_or_else(|| Error::ContractViolation("population is empty".into()))?;

        let kept = PopulationItem {
            solution: best.solution.clone(),
            obj_value: best.obj_value,
            fitness: best.fitness,
            id: self.next_item_id,
            similarity: Vec::with_capacity(SIMILARITY_RESERVE),
        };
        self.next_item_id += 1;

        self.items.clear();
        self.items.push(kept);

        let (solution, obj_value) = self.generate_non_duplicate(graph)?;
        self.add(solution, obj_value);
        Ok(())
    }

    /// k-toernooiselectie van twee verschillende ouders, beide op laagste
    /// fitness; de tweede trekking sluit de index van de eerste uit.
    pub fn tournament_select_two(&mut self, k: usize) -> Result<(Solution, Solution)> {
        if self.items.len() < 2 {
            return Err(Error::InvalidArgument(
                "tournament selection requires at least two solutions".into(),
            ));
        }

        let k = k.min(self.items.len());
        self.update_fitness();

        let parent1 = {
            let mut candidates = Vec::with_capacity(k);
            for _ in 0..k {
                candidates.push(self.rng.index(self.items.len()));
            }
            self.lowest_fitness(&candidates)
        };

        let parent2 = {
            let mut candidates = Vec::with_capacity(k);
            for _ in 0..k {
                let mut candidate = self.rng.index(self.items.len());
                while candidate == parent1 {
                    candidate = self.rng.index(self.items.len());
                }
                candidates.push(candidate);
            }
            self.lowest_fitness(&candidates)
        };

        Ok((
            self.items[parent1].solution.clone(),
            self.items[parent2].solution.clone(),
        ))
    }

    fn lowest_fitness(&self, candidates: &[usize]) -> usize {
        let mut best = candidates[0];
        for &candidate in &candidates[1..] {
            if self.items[candidate].fitness < self.items[best].fitness {
                best = candidate;
            }
        }
        best
    }

    /// De drie oplossingen in opslagvolgorde; alleen geldig bij een
    /// populatie van exact drie.
    pub fn get_all_three(&self) -> Result<(Solution, Solution, Solution)> {
        if self.items.len() != 3 {
            return Err(Error::InvalidArgument(
                "population size must be 3 to return all three solutions".into(),
            ));
        }
        Ok((
            self.items[0].solution.clone(),
            self.items[1].solution.clone(),
            self.items[2].solution.clone(),
        ))
    }

    /// Het individu met het laagste objectief.
    pub fn best_item(&self) -> Option<&PopulationItem> {
        self.items.iter().min_by_key(|item| item.obj_value)
    }
}

/// Stabiele 1-gebaseerde rangen: gelijke waarden behouden hun
/// oorspronkelijke volgorde.
fn ranks(values: &[f64]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..values.len()).collect();
    indices.sort_by(|&first, &second| {
        values[first]
            .partial_cmp(&values[second])
            .unwrap_or(Ordering::Equal)
            .then(first.cmp(&second))
    });

    let mut result = vec![0; values.len()];
    for (position, &index) in indices.iter().enumerate() {
        result[index] = position + 1;
    }
    result
}
