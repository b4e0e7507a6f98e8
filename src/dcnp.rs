//! src/dcnp.rs
//!
//! Graafengine voor het afstandsgebonden Critical Node Problem. Per knoop
//! wordt een K-hop-bereikbaarheidsrij bijgehouden als rij in één platte
//! bitmatrix van n² bits; `tree_size[v]` telt de bereikbare knopen minus de
//! knoop zelf. Verwijderen en terugplaatsen herbouwen alleen de geraakte
//! rijen via een begrensde BFS over herbruikbare buffers.

use crate::error::{Error, Result};
use crate::rng::RandomSource;
use crate::{Node, Solution};
use bitvec::prelude::*;
use rustc_hash::FxHashSet;

/// Graafengine voor DCNP met verwijdermasker en K-hop-administratie.
#[derive(Clone, Debug)]
pub struct DcnpEngine {
    num_nodes: usize,
    k_hops: usize,
    budget: usize,
    nodes: FxHashSet<Node>,
    age: Vec<u64>,

    current_adj: Vec<FxHashSet<Node>>,
    original_adj: Vec<FxHashSet<Node>>,

    /// Platte bitmatrix: bit `v * n + u` is gezet als `u` binnen K hops
    /// van `v` bereikbaar is over niet-verwijderde knopen.
    intree: BitVec,
    tree_size: Vec<usize>,
    removed: Solution,
    rng: RandomSource,

    // Herbruikbare BFS-buffers en de Brandes-uitvoerbuffer.
    bfs_visited: Vec<bool>,
    bfs_level: Vec<usize>,
    bfs_queue: Vec<Node>,
    betweenness: Vec<f64>,
}

impl DcnpEngine {
    /// Bouwt de engine op en berekent de K-hop-rij van elke knoop.
    pub fn new(
        nodes: FxHashSet<Node>,
        k_hops: usize,
        adj_list: Vec<FxHashSet<Node>>,
        budget: usize,
        seed: u64,
    ) -> Self {
        let num_nodes = adj_list.len();
        let mut engine = Self {
            num_nodes,
            k_hops,
            budget,
            nodes,
            age: vec![0; num_nodes],
            current_adj: adj_list.clone(),
            original_adj: adj_list,
            intree: bitvec![0; num_nodes * num_nodes],
            tree_size: vec![0; num_nodes],
            removed: Solution::default(),
            rng: RandomSource::new(seed),
            bfs_visited: vec![false; num_nodes],
            bfs_level: vec![0; num_nodes],
            bfs_queue: vec![0; num_nodes],
            betweenness: vec![0.0; num_nodes],
        };
        engine.build_tree();
        engine
    }

    /*────────── Queries ──────────*/

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    #[inline]
    pub fn budget(&self) -> usize {
        self.budget
    }

    #[inline]
    pub fn is_removed(&self, node: Node) -> bool {
        self.removed.contains(&node)
    }

    #[inline]
    pub fn removed_nodes(&self) -> &Solution {
        &self.removed
    }

    #[inline]
    pub fn tree_size(&self) -> &[usize] {
        &self.tree_size
    }

    /// Is `target` binnen K hops van `source` bereikbaar?
    #[inline]
    pub fn reaches(&self, source: Node, target: Node) -> bool {
        self.intree[source * self.num_nodes + target]
    }

    #[inline]
    pub fn set_age(&mut self, node: Node, age: u64) {
        self.age[node] = age;
    }

    fn check_node(&self, node: Node) -> Result<()> {
        if node >= self.num_nodes {
            return Err(Error::OutOfBounds {
                node,
                num_nodes: self.num_nodes,
            });
        }
        Ok(())
    }

    /// Het objectief: Σ tree_size over niet-verwijderde knopen, gedeeld
    /// door twee omdat de matrix symmetrisch is.
    pub fn khop_size(&self) -> u64 {
        let sum: u64 = (0..self.num_nodes)
            .filter(|node| !self.removed.contains(node))
            .map(|node| self.tree_size[node] as u64)
            .sum();
        sum / 2
    }

    #[inline]
    pub fn objective(&self) -> u64 {
        self.khop_size()
    }

    /*────────── K-hop-administratie ──────────*/

    /// Herbouwt de rij van `node`: schoont haar, en vult haar via een BFS
    /// tot diepte K over de huidige adjacentie, verwijderde knopen
    /// overslaand. Een verwijderde knoop houdt een lege rij.
    fn bfs_k(&mut self, node: Node) {
        let row = node * self.num_nodes;
        self.intree[row..row + self.num_nodes].fill(false);

        if self.removed.contains(&node) {
            self.tree_size[node] = 0;
            return;
        }

        self.bfs_visited.fill(false);

        let mut head = 0usize;
        let mut tail = 0usize;
        self.bfs_queue[tail] = node;
        tail += 1;
        self.bfs_visited[node] = true;
        self.bfs_level[node] = 0;

        let mut visited_count = 0usize;

        while head < tail {
            let current = self.bfs_queue[head];
            head += 1;

            if self.bfs_level[current] < self.k_hops {
                for &neighbor in &self.current_adj[current] {
                    if self.removed.contains(&neighbor) || self.bfs_visited[neighbor] {
                        continue;
                    }
                    self.bfs_queue[tail] = neighbor;
                    tail += 1;
                    self.bfs_visited[neighbor] = true;
                    self.bfs_level[neighbor] = self.bfs_level[current] + 1;
                }
            }

            self.intree.set(row + current, true);
            visited_count += 1;
        }

        self.tree_size[node] = visited_count.saturating_sub(1);
    }

    /// Herbouwt de rijen van alle knopen.
    pub fn build_tree(&mut self) {
        for node in 0..self.num_nodes {
            self.bfs_k(node);
        }
    }

    /*────────── Toestandswissels ──────────*/

    /// Herstelt de huidige adjacentie naar het origineel, zet het masker op
    /// `solution` en herbouwt alle rijen.
    pub fn set_removed_all(&mut self, solution: &Solution) -> Result<()> {
        for &node in solution {
            self.check_node(node)?;
        }
        self.apply_removed(solution);
        Ok(())
    }

    fn apply_removed(&mut self, solution: &Solution) {
        self.removed.clear();
        self.current_adj = self.original_adj.clone();
        for &node in solution {
            self.removed.insert(node);
        }
        self.build_tree();
    }

    /// Excideert de knopen in `remove_set` definitief uit de originele
    /// adjacentie, verlaagt het budget, schoont het masker en herbouwt
    /// alle rijen.
    pub fn get_reduced_by(&mut self, remove_set: &Solution) {
        self.removed.clear();
        self.budget = self.budget.saturating_sub(remove_set.len());

        for &node in remove_set {
            self.nodes.remove(&node);
            let neighbors: Vec<Node> = self.current_adj[node].iter().copied().collect();
            for neighbor in neighbors {
                self.original_adj[neighbor].remove(&node);
            }
            self.original_adj[node].clear();
        }

        self.current_adj = self.original_adj.clone();
        self.build_tree();
    }

    /// Plaatst `node` terug: herbouwt eerst diens eigen rij en daarna de
    /// rij van elke knoop in het zojuist ontdekte bereik.
    pub fn add(&mut self, node: Node) -> Result<()> {
        self.check_node(node)?;
        if !self.removed.contains(&node) {
            return Err(Error::ContractViolation(format!(
                "node {node} is not removed and can not be added"
            )));
        }
        self.removed.remove(&node);

        self.bfs_k(node);

        let row = node * self.num_nodes;
        for other in 0..self.num_nodes {
            if self.intree[row + other] {
                self.bfs_k(other);
            }
        }
        Ok(())
    }

    /// Verwijdert `node`: elke knoop die `node` tot dusver bereikte krijgt
    /// een herbouwde rij, inclusief `node` zelf (die leeg wordt).
    pub fn remove(&mut self, node: Node) -> Result<()> {
        self.check_node(node)?;
        if self.removed.contains(&node) {
            return Err(Error::ContractViolation(format!(
                "node {node} is already removed"
            )));
        }
        self.removed.insert(node);

        for other in 0..self.num_nodes {
            if self.intree[other * self.num_nodes + node] {
                self.bfs_k(other);
            }
        }
        Ok(())
    }

    /*────────── Zetprimitieven ──────────*/

    /// Probeert elke niet-verwijderde knoop tijdelijk te verwijderen en
    /// meet de objectiefwinst; houdt de kandidaten met maximale winst bij.
    /// Zonder strikt positieve winst is er geen kandidaat.
    pub fn find_best_to_remove(&mut self) -> Result<Option<Node>> {
        let current = self.khop_size();
        let mut max_improvement = 0u64;
        let mut candidates: Vec<Node> = Vec::new();

        for node in 0..self.num_nodes {
            if self.removed.contains(&node) {
                continue;
            }

            self.remove(node)?;
            let improvement = current - self.khop_size();
            self.add(node)?;

            if improvement > max_improvement {
                max_improvement = improvement;
                candidates.clear();
                candidates.push(node);
            } else if improvement == max_improvement && max_improvement > 0 {
                candidates.push(node);
            }
        }

        if candidates.is_empty() {
            return Ok(None);
        }
        Ok(Some(*self.rng.break_tie(&candidates)))
    }

    /// Probeert elke verwijderde knoop tijdelijk terug te plaatsen en meet
    /// de verslechtering; houdt de kandidaten met minimale verslechtering
    /// bij. Met een leeg masker is er geen kandidaat.
    pub fn find_best_to_add(&mut self) -> Result<Option<Node>> {
        let solution: Vec<Node> = self.removed.iter().copied().collect();
        let current = self.khop_size();
        let mut min_deterioration = u64::MAX;
        let mut candidates: Vec<Node> = Vec::new();

        for node in solution {
            self.add(node)?;
            let deterioration = self.khop_size() - current;
            self.remove(node)?;

            if deterioration < min_deterioration {
                min_deterioration = deterioration;
                candidates.clear();
                candidates.push(node);
            } else if deterioration == min_deterioration {
                candidates.push(node);
            }
        }

        if candidates.is_empty() {
            return Ok(None);
        }
        Ok(Some(*self.rng.break_tie(&candidates)))
    }

    /// Brandes-betweenness over de huidige graaf, verwijderde knopen
    /// overgeslagen. Schrijft in de herbruikbare buffer en geeft die terug.
    pub fn betweenness(&mut self) -> &[f64] {
        self.betweenness.fill(0.0);

        let n = self.num_nodes;
        for source in 0..n {
            if self.removed.contains(&source) {
                continue;
            }

            let mut order: Vec<Node> = Vec::with_capacity(n);
            let mut predecessors: Vec<Vec<Node>> = vec![Vec::new(); n];
            let mut distance: Vec<i64> = vec![-1; n];
            let mut sigma: Vec<u64> = vec![0; n];

            sigma[source] = 1;
            distance[source] = 0;

            let mut queue: Vec<Node> = vec![source];
            let mut head = 0usize;

            while head < queue.len() {
                let v = queue[head];
                head += 1;
                order.push(v);

                for &w in &self.current_adj[v] {
                    if self.removed.contains(&w) {
                        continue;
                    }
                    if distance[w] < 0 {
                        queue.push(w);
                        distance[w] = distance[v] + 1;
                    }
                    if distance[w] == distance[v] + 1 {
                        sigma[w] += sigma[v];
                        predecessors[w].push(v);
                    }
                }
            }

            let mut delta: Vec<f64> = vec![0.0; n];
            for &w in order.iter().rev() {
                for &v in &predecessors[w] {
                    delta[v] += (sigma[v] as f64 / sigma[w] as f64) * (1.0 + delta[w]);
                }
                if w != source {
                    self.betweenness[w] += delta[w];
                }
            }
        }

        &self.betweenness
    }

    /// Uniforme keuze over de niet-verwijderde knopen.
    pub fn random_remove_candidate(&mut self) -> Result<Node> {
        if self.removed.len() >= self.num_nodes {
            return Err(Error::InvalidArgument(
                "all nodes are removed, can not select node".into(),
            ));
        }
        let mut candidate = self.rng.index(self.num_nodes);
        while self.removed.contains(&candidate) {
            candidate = self.rng.index(self.num_nodes);
        }
        Ok(candidate)
    }

    /// Kloont de engine en vult het masker van de kloon met `budget`
    /// uniform gekozen knopen; de trekkingen lopen via de eigen stream.
    pub fn random_feasible(&mut self) -> DcnpEngine {
        let mut clone = self.clone();

        let mut available: Vec<Node> = (0..self.num_nodes)
            .filter(|node| self.nodes.contains(node))
            .collect();
        let mut solution = Solution::default();

        for _ in 0..self.budget {
            if available.is_empty() {
                break;
            }
            let position = self.rng.index(available.len());
            solution.insert(available[position]);
            available.swap_remove(position);
        }

        clone.apply_removed(&solution);
        clone
    }
}
