use countdown::{ModelError, NumberBag, Operation, Solver, SolverConfig, SolverError, solve};
use num_bigint::BigInt;

#[test]
fn classic_countdown_round_hits_target() {
    let result = solve(&[25, 50, 75, 100, 3, 6], 952);
    assert!(result.is_ok());
    if let Ok(solution) = result {
        assert_eq!(solution.distance(), &BigInt::from(0));
        assert_eq!(solution.final_result(), &BigInt::from(952));
        assert_eq!(solution.trace().len(), solution.used());
    }
}

#[test]
fn target_present_in_numbers_uses_one() {
    let result = solve(&[9, 8, 7], 8);
    assert!(result.is_ok());
    if let Ok(solution) = result {
        assert_eq!(solution.used(), 1);
        assert_eq!(solution.candidate().indices(), &[1]);
    }
}

#[test]
fn empty_numbers_are_rejected() {
    assert_eq!(
        solve(&[], 10).err(),
        Some(SolverError::Model(ModelError::EmptyNumbers))
    );
}

#[test]
fn steps_match_reported_trace() {
    let bag = NumberBag::new(vec![3, 7, 2, 4]);
    assert!(bag.is_ok());
    if let Ok(bag) = bag {
        let result = Solver::new(SolverConfig::sequential()).solve(&bag, &BigInt::from(50));
        assert!(result.is_ok());
        if let Ok(solution) = result {
            let mut running = solution.initial().clone();
            for step in solution.steps() {
                assert_eq!(bag.value(step.index), Some(&step.operand));
                running = step.operation.apply(&running, &step.operand);
                assert_eq!(running, step.result);
            }
            assert_eq!(&running, solution.final_result());
            assert!(solution.steps().iter().any(|s| s.operation == Operation::Mul));
        }
    }
}
