// tests/crossover_tests.rs
//! Tests voor de drie crossoveroperatoren: budgetbehoud, determinisme per
//! seed en de foutpaden (β-bereik, reparatie zonder kandidaten).

use vpms::crossover::{
    double_backbone_based_crossover, inherit_repair_recombination, reduce_solve_combine,
};
use vpms::{ProblemData, Solution, PROBLEM_TYPE_CNP, PROBLEM_TYPE_DCNP, STRATEGY_BCLS};

fn problem(n: usize, edges: &[(usize, usize)]) -> ProblemData {
    let mut data = ProblemData::new(n);
    for node in 0..n {
        data.add_node(node).unwrap();
    }
    for &(u, v) in edges {
        data.add_edge(u, v).unwrap();
    }
    data
}

fn grid_like() -> ProblemData {
    problem(
        10,
        &[
            (0, 1),
            (1, 2),
            (2, 3),
            (3, 4),
            (4, 5),
            (5, 6),
            (6, 7),
            (7, 8),
            (8, 9),
            (2, 7),
            (1, 8),
        ],
    )
}

fn solution_of(nodes: &[usize]) -> Solution {
    nodes.iter().copied().collect()
}

#[test]
fn test_dbx_produces_budget_sized_offspring() {
    let data = grid_like();
    let master = data.create_graph(PROBLEM_TYPE_CNP, 3, 1, 3).unwrap();

    let parent1 = solution_of(&[1, 4, 8]);
    let parent2 = solution_of(&[2, 4, 9]);

    let offspring =
        double_backbone_based_crossover(&master, &parent1, &parent2, 21).unwrap();
    assert_eq!(offspring.removed_nodes().len(), 3);

    // Het kind is zelfstandig: het origineel bleef leeg.
    assert!(master.removed_nodes().is_empty());
}

#[test]
fn test_dbx_is_deterministic_per_seed() {
    let data = grid_like();
    let master = data.create_graph(PROBLEM_TYPE_CNP, 3, 1, 3).unwrap();

    let parent1 = solution_of(&[1, 4, 8]);
    let parent2 = solution_of(&[2, 4, 9]);

    let first =
        double_backbone_based_crossover(&master, &parent1, &parent2, 5).unwrap();
    let second =
        double_backbone_based_crossover(&master, &parent1, &parent2, 5).unwrap();
    assert_eq!(first.removed_nodes(), second.removed_nodes());
}

#[test]
fn test_dbx_keeps_backbone() {
    let data = grid_like();
    let master = data.create_graph(PROBLEM_TYPE_CNP, 3, 1, 3).unwrap();

    // Gedeelde knopen worden onvoorwaardelijk overgenomen; met identieke
    // ouders is het kind dus de ouder zelf.
    let parent = solution_of(&[1, 4, 8]);
    let offspring = double_backbone_based_crossover(&master, &parent, &parent, 3).unwrap();
    assert_eq!(*offspring.removed_nodes(), parent);
}

#[test]
fn test_irr_produces_budget_sized_offspring() {
    let data = grid_like();
    let master = data.create_graph(PROBLEM_TYPE_DCNP, 3, 1, 3).unwrap();

    let parent1 = solution_of(&[1, 4, 8]);
    let parent2 = solution_of(&[1, 4, 9]);
    let parent3 = solution_of(&[1, 5, 8]);

    let offspring =
        inherit_repair_recombination(&master, &parent1, &parent2, &parent3, 13).unwrap();
    assert_eq!(offspring.removed_nodes().len(), 3);
    // Frequentie 3 wordt altijd geërfd.
    assert!(offspring.removed_nodes().contains(&1));
}

#[test]
fn test_irr_is_deterministic_per_seed() {
    let data = grid_like();
    let master = data.create_graph(PROBLEM_TYPE_DCNP, 3, 1, 3).unwrap();

    let parent1 = solution_of(&[1, 4, 8]);
    let parent2 = solution_of(&[2, 4, 9]);
    let parent3 = solution_of(&[3, 5, 8]);

    let first =
        inherit_repair_recombination(&master, &parent1, &parent2, &parent3, 31).unwrap();
    let second =
        inherit_repair_recombination(&master, &parent1, &parent2, &parent3, 31).unwrap();
    assert_eq!(first.removed_nodes(), second.removed_nodes());
}

#[test]
fn test_rsc_rejects_beta_out_of_range() {
    let data = grid_like();
    let master = data.create_graph(PROBLEM_TYPE_CNP, 3, 1, 3).unwrap();
    let parent = solution_of(&[1, 4, 8]);

    assert!(
        reduce_solve_combine(&master, &parent, &parent, "", 1.5, 1).is_err()
    );
    assert!(
        reduce_solve_combine(&master, &parent, &parent, "", -0.1, 1).is_err()
    );
}

#[test]
fn test_rsc_produces_budget_sized_offspring() {
    let data = grid_like();
    let master = data.create_graph(PROBLEM_TYPE_CNP, 3, 1, 3).unwrap();

    let parent1 = solution_of(&[1, 4, 8]);
    let parent2 = solution_of(&[1, 4, 9]);

    let offspring =
        reduce_solve_combine(&master, &parent1, &parent2, "", 0.9, 17).unwrap();
    assert_eq!(offspring.removed_nodes().len(), 3);
    assert!(master.removed_nodes().is_empty());
}

#[test]
fn test_rsc_on_dcnp_uses_bcls_default() {
    let data = grid_like();
    let master = data.create_graph(PROBLEM_TYPE_DCNP, 2, 1, 3).unwrap();

    let parent1 = solution_of(&[1, 4]);
    let parent2 = solution_of(&[1, 9]);

    // Lege strategienaam: de default voor DCNP is BCLS.
    let offspring =
        reduce_solve_combine(&master, &parent1, &parent2, "", 0.9, 23).unwrap();
    assert_eq!(offspring.removed_nodes().len(), 2);

    // Expliciet BCLS geeft met dezelfde seed hetzelfde kind.
    let explicit =
        reduce_solve_combine(&master, &parent1, &parent2, STRATEGY_BCLS, 0.9, 23).unwrap();
    assert_eq!(offspring.removed_nodes(), explicit.removed_nodes());
}

#[test]
fn test_rsc_with_full_backbone() {
    let data = grid_like();
    let master = data.create_graph(PROBLEM_TYPE_CNP, 3, 1, 3).unwrap();
    let parent = solution_of(&[1, 4, 8]);

    // β = 1 en identieke ouders: de volledige ouder wordt kern, het
    // gereduceerde probleem heeft budget 0.
    let offspring = reduce_solve_combine(&master, &parent, &parent, "", 1.0, 29).unwrap();
    assert_eq!(*offspring.removed_nodes(), parent);
}
