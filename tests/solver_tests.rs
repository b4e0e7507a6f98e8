// tests/solver_tests.rs
//! End-to-end-tests van de solve-ingang: de bekende scenario's met exacte
//! objectieven, seed-determinisme en de monotonie van het beste objectief.

use vpms::{
    solve, MaxIterations, MaxRuntime, MemeticSearchParams, NoImprovement, ProblemData,
    ReduceParams, SolveResult, VariablePopulationParams, PROBLEM_TYPE_CNP, PROBLEM_TYPE_DCNP,
    STRATEGY_BCLS, STRATEGY_CBNS, STRATEGY_CHNS,
};

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

fn cnp_params(search: &str) -> MemeticSearchParams {
    MemeticSearchParams {
        search: search.to_string(),
        ..MemeticSearchParams::default()
    }
}

fn solve_cnp(
    data: &ProblemData,
    budget: usize,
    seed: u64,
    search: &str,
    iterations: usize,
) -> SolveResult {
    let mut stop = MaxIterations::new(iterations).unwrap();
    solve(
        data,
        PROBLEM_TYPE_CNP,
        budget,
        &mut stop,
        seed,
        cnp_params(search),
        VariablePopulationParams::default(),
        None,
        false,
    )
    .unwrap()
}

/// De graaf uit het quickstart-voorbeeld: 20 knopen, 22 kanten.
fn quickstart20() -> ProblemData {
    problem(
        20,
        &[
            (0, 4),
            (1, 4),
            (2, 4),
            (2, 6),
            (3, 4),
            (4, 9),
            (5, 9),
            (6, 9),
            (7, 9),
            (7, 11),
            (8, 9),
            (9, 14),
            (10, 14),
            (11, 14),
            (12, 14),
            (12, 16),
            (13, 14),
            (14, 19),
            (15, 19),
            (16, 19),
            (17, 19),
            (18, 19),
        ],
    )
}

#[test]
fn test_empty_graph_has_zero_objective() {
    let data = problem(5, &[]);
    let result = solve_cnp(&data, 2, 42, STRATEGY_CHNS, 3);
    assert_eq!(result.best_obj_value, 0);
    assert_eq!(result.best_solution.len(), 2);
}

#[test]
fn test_clique_leaves_triangle() {
    let data = problem(
        5,
        &[
            (0, 1),
            (0, 2),
            (0, 3),
            (0, 4),
            (1, 2),
            (1, 3),
            (1, 4),
            (2, 3),
            (2, 4),
            (3, 4),
        ],
    );
    // Elke keuze van 2 uit K5 laat een driehoek achter.
    let result = solve_cnp(&data, 2, 42, STRATEGY_CHNS, 3);
    assert_eq!(result.best_obj_value, 3);
}

#[test]
fn test_star_hub_is_critical() {
    let data = problem(6, &[(0, 1), (0, 2), (0, 3), (0, 4), (0, 5)]);
    let result = solve_cnp(&data, 1, 42, STRATEGY_CBNS, 5);
    assert_eq!(result.best_obj_value, 0);
    assert!(result.best_solution.contains(&0));
}

#[test]
fn test_bridge_between_triangles_is_critical() {
    // Twee driehoeken met een brugknoop 6: zonder de brug overleven beide
    // driehoeken en niets meer, dus 3 + 3 paren.
    let data = problem(
        7,
        &[(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3), (2, 6), (6, 3)],
    );
    let result = solve_cnp(&data, 1, 42, STRATEGY_CHNS, 5);
    assert_eq!(result.best_obj_value, 6);
    assert!(result.best_solution.contains(&6));
}

#[test]
fn test_path_graph_with_three_cuts() {
    let data = problem(
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
        ],
    );

    let mut stop = NoImprovement::new(50).unwrap();
    let result = solve(
        &data,
        PROBLEM_TYPE_CNP,
        3,
        &mut stop,
        7,
        cnp_params(STRATEGY_CHNS),
        VariablePopulationParams::default(),
        None,
        false,
    )
    .unwrap();

    // Drie gebalanceerde sneden laten hooguit 4 paren over.
    assert!(result.best_obj_value <= 4);
}

#[test]
fn test_dcnp_quickstart_reaches_hub_set() {
    let data = quickstart20();

    let params = MemeticSearchParams {
        search: STRATEGY_BCLS.to_string(),
        reduce_params: ReduceParams {
            search: STRATEGY_BCLS.to_string(),
            beta: 0.9,
        },
        ..MemeticSearchParams::default()
    };

    let mut stop = MaxRuntime::new(5.0).unwrap();
    let result = solve(
        &data,
        PROBLEM_TYPE_DCNP,
        3,
        &mut stop,
        49,
        params,
        VariablePopulationParams::default(),
        Some(3),
        false,
    )
    .unwrap();

    // De hubverzameling {9, 14, 19} haalt objectief 17; de zoektocht moet
    // minstens zo goed eindigen.
    assert!(result.best_obj_value <= 17);
    assert_eq!(result.best_solution.len(), 3);
}

#[test]
fn test_seed_determinism() {
    let data = quickstart20();

    let run = || {
        let mut stop = MaxIterations::new(4).unwrap();
        solve(
            &data,
            PROBLEM_TYPE_CNP,
            3,
            &mut stop,
            6,
            cnp_params(STRATEGY_CHNS),
            VariablePopulationParams::default(),
            None,
            false,
        )
        .unwrap()
    };

    let first = run();
    let second = run();
    assert_eq!(first.best_obj_value, second.best_obj_value);
    assert_eq!(first.best_solution, second.best_solution);
    assert_eq!(first.num_iterations, second.num_iterations);
}

#[test]
fn test_best_objective_is_monotone() {
    let data = quickstart20();

    let mut stop = MaxIterations::new(8).unwrap();
    let result = solve(
        &data,
        PROBLEM_TYPE_CNP,
        3,
        &mut stop,
        11,
        cnp_params(STRATEGY_CHNS),
        VariablePopulationParams::default(),
        None,
        false,
    )
    .unwrap();

    assert_eq!(result.num_iterations, result.stats.num_iterations);
    let values = &result.stats.best_obj_values;
    assert!(values.windows(2).all(|pair| pair[1] <= pair[0]));
    assert_eq!(*values.last().unwrap(), result.best_obj_value);
    assert!(result.best_found_at_time <= result.runtime);
}

#[test]
fn test_dbx_crossover_run() {
    let data = quickstart20();

    let params = MemeticSearchParams {
        search: STRATEGY_CHNS.to_string(),
        crossover: Some("DBX".to_string()),
        is_problem_reduction: false,
        ..MemeticSearchParams::default()
    };

    let mut stop = MaxIterations::new(3).unwrap();
    let result = solve(
        &data,
        PROBLEM_TYPE_CNP,
        3,
        &mut stop,
        5,
        params,
        VariablePopulationParams::default(),
        None,
        false,
    )
    .unwrap();

    assert_eq!(result.best_solution.len(), 3);
    assert_eq!(result.num_iterations, 2);
}

#[test]
fn test_irr_crossover_run() {
    let data = quickstart20();

    let params = MemeticSearchParams {
        search: STRATEGY_BCLS.to_string(),
        crossover: Some("IRR".to_string()),
        is_problem_reduction: false,
        is_pop_variable: false,
        initial_pop_size: 3,
        reduce_params: ReduceParams {
            search: STRATEGY_BCLS.to_string(),
            beta: 0.9,
        },
    };

    let mut stop = MaxIterations::new(3).unwrap();
    let result = solve(
        &data,
        PROBLEM_TYPE_DCNP,
        3,
        &mut stop,
        5,
        params,
        VariablePopulationParams::default(),
        Some(3),
        false,
    )
    .unwrap();

    assert_eq!(result.best_solution.len(), 3);
}

#[test]
fn test_invalid_configurations_are_rejected() {
    let data = quickstart20();
    let mut stop = MaxIterations::new(2).unwrap();

    // Onbekend probleemtype.
    assert!(solve(
        &data,
        "MAXCUT",
        3,
        &mut stop,
        1,
        MemeticSearchParams::default(),
        VariablePopulationParams::default(),
        None,
        false,
    )
    .is_err());

    // BCLS hoort niet bij CNP.
    let mut stop = MaxIterations::new(2).unwrap();
    assert!(solve(
        &data,
        PROBLEM_TYPE_CNP,
        3,
        &mut stop,
        1,
        cnp_params(STRATEGY_BCLS),
        VariablePopulationParams::default(),
        None,
        false,
    )
    .is_err());

    // IRR vereist DCNP.
    let mut stop = MaxIterations::new(2).unwrap();
    let params = MemeticSearchParams {
        crossover: Some("IRR".to_string()),
        is_problem_reduction: false,
        is_pop_variable: false,
        initial_pop_size: 3,
        ..MemeticSearchParams::default()
    };
    assert!(solve(
        &data,
        PROBLEM_TYPE_CNP,
        3,
        &mut stop,
        1,
        params,
        VariablePopulationParams::default(),
        None,
        false,
    )
    .is_err());

    // Budget boven het aantal knopen.
    let mut stop = MaxIterations::new(2).unwrap();
    assert!(solve(
        &data,
        PROBLEM_TYPE_CNP,
        21,
        &mut stop,
        1,
        MemeticSearchParams::default(),
        VariablePopulationParams::default(),
        None,
        false,
    )
    .is_err());
}
