#![cfg(test)] // workaround for https://github.com/rust-lang/rust-clippy/issues/11024

use verdict_core::Clause;
use verdict_core::DpllSolver;
use verdict_core::Formula;
use verdict_core::Literal;
use verdict_core::SatisfactionResult;
use verdict_core::Solution;
use verdict_core::SolverError;
use verdict_core::branching::BranchingStrategy;

fn lit(code: i32) -> Literal {
    Literal::from_code(code).unwrap()
}

fn clauses(clauses: &[&[i32]]) -> Vec<Clause> {
    clauses
        .iter()
        .map(|codes| codes.iter().map(|&code| lit(code)).collect())
        .collect()
}

fn solve(clause_list: &[Clause], strategy: BranchingStrategy) -> (SatisfactionResult, u64) {
    let mut solver = DpllSolver::default();
    let mut heuristic = strategy.create();
    let result = solver
        .solve(Formula::new(clause_list.to_vec()), heuristic.as_mut())
        .expect("well-formed formulas solve without errors");
    (result, solver.statistics().num_recursive_calls())
}

fn expect_solution(result: SatisfactionResult) -> Solution {
    match result {
        SatisfactionResult::Satisfiable(solution) => solution,
        SatisfactionResult::Unsatisfiable => panic!("expected a satisfiable formula"),
    }
}

/// The classic unsatisfiable square over two variables: all four polarity combinations.
fn two_variable_square() -> Vec<Clause> {
    clauses(&[&[1, 2], &[-1, 2], &[1, -2], &[-1, -2]])
}

/// Three pigeons in two holes: every pigeon gets a hole, no hole holds two pigeons.
/// Variable 2(i - 1) + j means pigeon i sits in hole j.
fn pigeonhole() -> Vec<Clause> {
    clauses(&[
        &[1, 2],
        &[3, 4],
        &[5, 6],
        &[-1, -3],
        &[-1, -5],
        &[-3, -5],
        &[-2, -4],
        &[-2, -6],
        &[-4, -6],
    ])
}

fn satisfiable_chain() -> Vec<Clause> {
    clauses(&[&[1, 2], &[-1, 3], &[-2, -3], &[3, 4], &[-4, 1]])
}

#[test]
fn unit_propagation_alone_reaches_sat() {
    let clause_list = clauses(&[&[1, -2], &[2]]);
    let (result, _) = solve(&clause_list, BranchingStrategy::Dlis);

    let solution = expect_solution(result);
    assert_eq!(Some(true), solution.value(1));
    assert_eq!(Some(true), solution.value(2));
    assert!(solution.satisfies(&clause_list));
}

#[test]
fn conflicting_units_are_unsatisfiable() {
    let clause_list = clauses(&[&[1], &[-1]]);
    let (result, calls) = solve(&clause_list, BranchingStrategy::Dlis);

    assert_eq!(SatisfactionResult::Unsatisfiable, result);
    // One propagation, one terminal check; no branching ever happened.
    assert_eq!(2, calls);
}

#[test]
fn the_empty_formula_is_satisfiable_immediately() {
    let (result, calls) = solve(&[], BranchingStrategy::Dlis);

    let solution = expect_solution(result);
    assert_eq!(0, solution.num_variables());
    assert_eq!(1, calls);
}

#[test]
fn a_formula_containing_an_empty_clause_is_unsatisfiable() {
    let clause_list = vec![Clause::default()];
    let (result, _) = solve(&clause_list, BranchingStrategy::Dlis);
    assert_eq!(SatisfactionResult::Unsatisfiable, result);
}

#[test]
fn the_two_variable_square_is_unsatisfiable_under_every_heuristic() {
    for strategy in BranchingStrategy::ALL {
        let (result, _) = solve(&two_variable_square(), strategy);
        assert_eq!(
            SatisfactionResult::Unsatisfiable,
            result,
            "heuristic {strategy} disagrees on the square"
        );
    }
}

#[test]
fn all_heuristics_agree_on_every_instance() {
    let instances = [
        (clauses(&[&[1, -2], &[2]]), true),
        (satisfiable_chain(), true),
        (clauses(&[&[1, 2, 3], &[-1, -2], &[-2, -3], &[-1, -3]]), true),
        (two_variable_square(), false),
        (pigeonhole(), false),
    ];

    for (clause_list, expected_satisfiable) in &instances {
        for strategy in BranchingStrategy::ALL {
            let (result, _) = solve(clause_list, strategy);
            assert_eq!(
                *expected_satisfiable,
                result.is_satisfiable(),
                "heuristic {strategy} returned the wrong verdict"
            );
        }
    }
}

#[test]
fn satisfying_assignments_satisfy_the_original_clauses() {
    for strategy in BranchingStrategy::ALL {
        let clause_list = satisfiable_chain();
        let (result, _) = solve(&clause_list, strategy);
        let solution = expect_solution(result);
        assert!(
            solution.satisfies(&clause_list),
            "heuristic {strategy} produced a non-satisfying assignment"
        );
    }
}

#[test]
fn repeated_runs_are_deterministic() {
    for strategy in BranchingStrategy::ALL {
        let (first_result, first_calls) = solve(&satisfiable_chain(), strategy);
        let (second_result, second_calls) = solve(&satisfiable_chain(), strategy);

        assert_eq!(first_result, second_result);
        assert_eq!(
            first_calls, second_calls,
            "heuristic {strategy} explored a different tree on the second run"
        );
    }
}

#[test]
fn unit_clauses_preempt_every_heuristic() {
    // The unit clause forces variable 1 before any heuristic is consulted, which satisfies
    // the whole formula: exactly two recursive calls, whatever the strategy.
    let clause_list = clauses(&[&[1, 2, 3], &[1, 2], &[1]]);

    for strategy in BranchingStrategy::ALL {
        let (result, calls) = solve(&clause_list, strategy);
        let solution = expect_solution(result);
        assert_eq!(Some(true), solution.value(1));
        assert_eq!(2, calls, "heuristic {strategy} was consulted before the unit");
    }
}

#[test]
fn pure_literal_elimination_preempts_branching() {
    // Variable 1 only occurs positively; committing it satisfies both clauses without any
    // branching, so the run takes exactly two recursive calls.
    let clause_list = clauses(&[&[1, 2], &[1, -2]]);
    let (result, calls) = solve(&clause_list, BranchingStrategy::Dlis);

    let solution = expect_solution(result);
    assert_eq!(Some(true), solution.value(1));
    assert_eq!(2, calls);
}

#[test]
fn solving_a_clone_leaves_the_original_formula_usable() {
    let clause_list = two_variable_square();
    let original = Formula::new(clause_list.clone());
    let copy = original.clone();

    let mut solver = DpllSolver::default();
    let mut heuristic = BranchingStrategy::Mom.create();
    let first = solver.solve(copy, heuristic.as_mut()).unwrap();
    let second = solver.solve(original, heuristic.as_mut()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn statistics_reset_between_runs() {
    let mut solver = DpllSolver::default();
    let mut heuristic = BranchingStrategy::Dlis.create();

    let _ = solver
        .solve(Formula::new(pigeonhole()), heuristic.as_mut())
        .unwrap();
    let first_calls = solver.statistics().num_recursive_calls();
    assert!(first_calls > 0);

    solver.reset_statistics();
    assert_eq!(0, solver.statistics().num_recursive_calls());

    let _ = solver
        .solve(Formula::new(pigeonhole()), heuristic.as_mut())
        .unwrap();
    assert_eq!(first_calls, solver.statistics().num_recursive_calls());
}

#[test]
fn assigning_an_absent_literal_is_an_invariant_error() {
    let mut formula = Formula::new(clauses(&[&[1, 2]]));
    assert_eq!(
        Err(SolverError::UnknownLiteral(lit(-1))),
        formula.assign(lit(-1))
    );
}
