use num_bigint::BigInt;

use crate::model::{NumberBag, Operation};
use crate::report::{ReportFormat, render};
use crate::solver::{Candidate, Solution, Solver};

fn solve(numbers: &[i64], target: i64) -> Option<Solution> {
    let bag = NumberBag::new(numbers.to_vec()).ok()?;
    Solver::default().solve(&bag, &BigInt::from(target)).ok()
}

#[test]
fn test_steps_report() {
    let solution = solve(&[1, 2, 3], 10);
    assert!(solution.is_some());
    if let Some(solution) = solution {
        assert_eq!(
            render(&solution, ReportFormat::Steps),
            "Initial number: 1\n\
             Step 1: operation + with number 2 -> result 3\n\
             Step 2: operation * with number 3 -> result 9\n\
             Final number: 9\n\
             Distance from goal: 1"
        );
    }
}

#[test]
fn test_steps_report_without_steps() {
    let solution = solve(&[5], 100);
    assert!(solution.is_some());
    if let Some(solution) = solution {
        assert_eq!(
            solution.to_string(),
            "Initial number: 5\nFinal number: 5\nDistance from goal: 95"
        );
        assert_eq!(solution.to_expression(), "5 = 5 (distance 95)");
    }
}

#[test]
fn test_steps_report_negative_results() {
    let solution = solve(&[8, 3, 5, 2], -11);
    assert!(solution.is_some());
    if let Some(solution) = solution {
        let text = solution.to_string();
        assert!(text.starts_with("Initial number: 2\n"));
        assert!(text.contains("Step 1: operation - with number 8 -> result -6\n"));
        assert!(text.contains("Step 2: operation - with number 5 -> result -11\n"));
        assert!(text.ends_with("Distance from goal: 0"));
    }
}

#[test]
fn test_expression_parenthesizes_lower_precedence_prefix() {
    let solution = solve(&[1, 2, 3], 10);
    assert!(solution.is_some());
    if let Some(solution) = solution {
        assert_eq!(
            render(&solution, ReportFormat::Expression),
            "(1 + 2) * 3 = 9 (distance 1)"
        );
    }
}

#[test]
fn test_expression_without_parentheses() {
    let solution = solve(&[6, 4, 9, 1], 37);
    assert!(solution.is_some());
    if let Some(solution) = solution {
        assert_eq!(solution.to_expression(), "4 * 9 + 1 = 37 (distance 0)");
    }

    let solution = solve(&[8, 3, 5, 2], -11);
    assert!(solution.is_some());
    if let Some(solution) = solution {
        assert_eq!(solution.to_expression(), "2 - 8 - 5 = -11 (distance 0)");
    }
}

#[test]
fn test_expression_negative_operand() {
    let bag = NumberBag::new(vec![6, -3]);
    let candidate = Candidate::new(vec![0, 1], vec![Operation::Mul]);
    assert!(bag.is_ok() && candidate.is_ok());
    if let (Ok(bag), Ok(candidate)) = (bag, candidate) {
        let solution = Solution::from_candidate(candidate, &bag, &BigInt::from(0));
        assert!(solution.is_ok());
        if let Ok(solution) = solution {
            assert_eq!(solution.to_expression(), "6 * (-3) = -18 (distance 18)");
        }
    }
}
