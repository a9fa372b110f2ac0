use crate::basic_types::Literal;
use crate::branching::BranchingHeuristic;
use crate::engine::Formula;

/// Dynamic Largest Individual Sum: branches on the literal with the maximum occurrence count.
///
/// Satisfying that literal removes the largest number of clauses in one step. The literal's own
/// polarity is the branch polarity.
#[derive(Clone, Copy, Debug, Default)]
pub struct Dlis;

impl BranchingHeuristic for Dlis {
    fn name(&self) -> &'static str {
        "DLIS"
    }

    fn select_literal(&mut self, formula: &Formula) -> Option<Literal> {
        let mut best: Option<(Literal, usize)> = None;

        for literal in formula.literals() {
            let count = formula.occurrence_count(literal);
            // Strictly greater keeps the first literal in code order on ties.
            if best.map_or(true, |(_, best_count)| count > best_count) {
                best = Some((literal, count));
            }
        }

        best.map(|(literal, _)| literal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::Clause;

    fn lit(code: i32) -> Literal {
        Literal::from_code(code).unwrap()
    }

    fn formula(clauses: &[&[i32]]) -> Formula {
        Formula::new(
            clauses
                .iter()
                .map(|codes| codes.iter().map(|&code| lit(code)).collect::<Clause>()),
        )
    }

    #[test]
    fn picks_the_most_frequent_literal() {
        let formula = formula(&[&[1, 2], &[1, 3], &[-1, 2], &[1, -3]]);
        assert_eq!(Some(lit(1)), Dlis.select_literal(&formula));
    }

    #[test]
    fn ties_go_to_the_lowest_code() {
        let formula = formula(&[&[1, 2], &[-2, 3]]);
        assert_eq!(Some(lit(-2)), Dlis.select_literal(&formula));
    }

    #[test]
    fn no_candidates_without_clauses() {
        let formula = formula(&[]);
        assert_eq!(None, Dlis.select_literal(&formula));
    }
}
