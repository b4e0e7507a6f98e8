//! src/data.rs
//!
//! Instantiegegevens: de knopenverzameling en de adjacentielijst van een
//! probleeminstantie, plus de parsers voor de twee ondersteunde
//! tekstformaten (adjacentielijst en DIMACS-achtige kantenlijst).

use crate::cnp::CnpEngine;
use crate::dcnp::DcnpEngine;
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::{PROBLEM_TYPE_CNP, PROBLEM_TYPE_DCNP};
use rustc_hash::FxHashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// De gegevens van één probleeminstantie: knopen en hun buren.
#[derive(Clone, Debug, Default)]
pub struct ProblemData {
    num_nodes: usize,
    nodes: FxHashSet<usize>,
    adj: Vec<FxHashSet<usize>>,
}

impl ProblemData {
    /// Creëert een lege instantie met `num_nodes` knoopposities.
    pub fn new(num_nodes: usize) -> Self {
        Self {
            num_nodes,
            nodes: FxHashSet::default(),
            adj: vec![FxHashSet::default(); num_nodes],
        }
    }

    /// Registreert een knoop. Ids moeten in [0, n) liggen.
    pub fn add_node(&mut self, node: usize) -> Result<()> {
        self.check_node(node)?;
        self.nodes.insert(node);
        Ok(())
    }

    /// Voegt een ongerichte kant (u, v) toe. Dubbele kanten zijn idempotent.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<()> {
        self.check_node(u)?;
        self.check_node(v)?;
        self.adj[u].insert(v);
        self.adj[v].insert(u);
        Ok(())
    }

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    #[inline]
    pub fn nodes(&self) -> &FxHashSet<usize> {
        &self.nodes
    }

    #[inline]
    pub fn adj_list(&self) -> &[FxHashSet<usize>] {
        &self.adj
    }

    fn check_node(&self, node: usize) -> Result<()> {
        if node >= self.num_nodes {
            return Err(Error::OutOfBounds {
                node,
                num_nodes: self.num_nodes,
            });
        }
        Ok(())
    }

    /// Parset het adjacentielijstformaat: eerste token is `n`, daarna per
    /// knoop een regel `id: buur buur ...`. Symmetrie wordt niet afgedwongen;
    /// het bestand wordt geacht beide richtingen te vermelden.
    pub fn parse_adjacency_list<R: Read>(reader: R) -> Result<Self> {
        let mut lines = BufReader::new(reader).lines();

        let num_nodes: usize = loop {
            match lines.next() {
                Some(line) => {
                    let line = line?;
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    break trimmed
                        .parse()
                        .map_err(|_| Error::Parse(format!("invalid node count: {trimmed}")))?;
                }
                None => return Err(Error::Parse("empty file".into())),
            }
        };

        let mut data = ProblemData::new(num_nodes);

        for line in lines {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let (head, tail) = trimmed
                .split_once(':')
                .ok_or_else(|| Error::Parse(format!("missing ':' separator: {trimmed}")))?;
            let node: usize = head
                .trim()
                .parse()
                .map_err(|_| Error::Parse(format!("invalid node id: {head}")))?;
            if node >= num_nodes {
                return Err(Error::Parse(format!(
                    "node id {node} out of range [0, {num_nodes})"
                )));
            }
            data.nodes.insert(node);

            for token in tail.split_whitespace() {
                let neighbor: usize = token
                    .parse()
                    .map_err(|_| Error::Parse(format!("invalid neighbor id: {token}")))?;
                if neighbor >= num_nodes {
                    return Err(Error::Parse(format!(
                        "neighbor id {neighbor} out of range [0, {num_nodes})"
                    )));
                }
                data.adj[node].insert(neighbor);
            }
        }

        Ok(data)
    }

    /// Parset het kantenlijstformaat: een `p <..> n m`-regel declareert de
    /// tellingen, `e u v`-regels declareren ongerichte kanten; overige
    /// tokens worden genegeerd.
    pub fn parse_edge_list<R: Read>(reader: R) -> Result<Self> {
        let mut content = String::new();
        BufReader::new(reader).read_to_string(&mut content)?;
        let mut tokens = content.split_whitespace();

        let mut data = None;

        while let Some(token) = tokens.next() {
            match token {
                "p" => {
                    // Het token na "p" (meestal "edge") wordt overgeslagen.
                    tokens.next();
                    let n: usize = tokens
                        .next()
                        .ok_or_else(|| Error::Parse("missing node count after 'p'".into()))?
                        .parse()
                        .map_err(|_| Error::Parse("invalid node count after 'p'".into()))?;
                    let _num_edges: usize = tokens
                        .next()
                        .ok_or_else(|| Error::Parse("missing edge count after 'p'".into()))?
                        .parse()
                        .map_err(|_| Error::Parse("invalid edge count after 'p'".into()))?;

                    let mut d = ProblemData::new(n);
                    for node in 0..n {
                        d.nodes.insert(node);
                    }
                    data = Some(d);
                }
                "e" => {
                    let data = data
                        .as_mut()
                        .ok_or_else(|| Error::Parse("edge line before 'p' header".into()))?;
                    let u: usize = tokens
                        .next()
                        .and_then(|t| t.parse().ok())
                        .ok_or_else(|| Error::Parse("invalid edge endpoint".into()))?;
                    let v: usize = tokens
                        .next()
                        .and_then(|t| t.parse().ok())
                        .ok_or_else(|| Error::Parse("invalid edge endpoint".into()))?;
                    if u >= data.num_nodes || v >= data.num_nodes {
                        return Err(Error::Parse(format!(
                            "edge ({u}, {v}) out of bounds for n={}",
                            data.num_nodes
                        )));
                    }
                    data.adj[u].insert(v);
                    data.adj[v].insert(u);
                }
                _ => {}
            }
        }

        data.ok_or_else(|| Error::Parse("no 'p' header found".into()))
    }

    /// Leest een instantiebestand en detecteert het formaat: bevat de eerste
    /// niet-lege regel een `p`-token, dan is het een kantenlijst, anders een
    /// adjacentielijst.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut content = String::new();
        File::open(path)?.read_to_string(&mut content)?;

        let first_line = content
            .lines()
            .find(|l| !l.trim().is_empty())
            .unwrap_or_default();
        let is_edge_list =
            first_line.trim_start().starts_with('p') || first_line.split_whitespace().any(|t| t == "p");

        if is_edge_list {
            Self::parse_edge_list(content.as_bytes())
        } else {
            Self::parse_adjacency_list(content.as_bytes())
        }
    }

    /// Bouwt de master-graaf voor het gegeven probleemtype.
    pub fn create_graph(
        &self,
        problem_type: &str,
        budget: usize,
        seed: u64,
        hop_distance: usize,
    ) -> Result<Graph> {
        if budget > self.nodes.len() {
            return Err(Error::InvalidArgument(format!(
                "budget {budget} exceeds the number of nodes {}",
                self.nodes.len()
            )));
        }

        match problem_type {
            PROBLEM_TYPE_CNP => Ok(Graph::Cnp(CnpEngine::new(
                self.nodes.clone(),
                self.adj.clone(),
                budget,
                seed,
            ))),
            PROBLEM_TYPE_DCNP => Ok(Graph::Dcnp(DcnpEngine::new(
                self.nodes.clone(),
                hop_distance,
                self.adj.clone(),
                budget,
                seed,
            ))),
            other => Err(Error::InvalidArgument(format!(
                "unknown problem type: {other}"
            ))),
        }
    }
}
