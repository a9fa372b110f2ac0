use crate::basic_types::Literal;
use crate::branching::BranchingHeuristic;
use crate::engine::Formula;

/// Maximum Occurrences in clauses of Minimum size.
///
/// Scores every variable occurring in a clause of the current shortest length S as
/// `(f(l) + f(¬l))·P + f(l)·f(¬l)`, where `f` counts occurrences within the length-S clauses
/// and `P = (#distinct live literals)² + 1`. The `P` term makes the combined frequency dominate;
/// the product rewards variables constrained in both polarities. Orientation goes to the
/// polarity that is more frequent within the shortest clauses.
#[derive(Clone, Copy, Debug, Default)]
pub struct Mom;

impl BranchingHeuristic for Mom {
    fn name(&self) -> &'static str {
        "MOM"
    }

    fn select_literal(&mut self, formula: &Formula) -> Option<Literal> {
        let shortest = formula.shortest_clause_length()?;
        let p = {
            let distinct = formula.distinct_literal_count() as u64;
            distinct * distinct + 1
        };

        let mut best: Option<(Literal, u64)> = None;

        // The score is symmetric in a variable's polarities; double visits produce identical
        // pairs and strictly-greater keeps the first.
        for literal in formula.literals() {
            let positive = if literal.is_positive() { literal } else { !literal };
            let positive_count = formula.literal_frequency(shortest, positive) as u64;
            let negative_count = formula.literal_frequency(shortest, !positive) as u64;

            if positive_count + negative_count == 0 {
                // The variable does not occur in any shortest clause.
                continue;
            }

            let score = (positive_count + negative_count) * p + positive_count * negative_count;
            let candidate = if positive_count >= negative_count {
                positive
            } else {
                !positive
            };

            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((candidate, score));
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
    fn a_variable_constrained_in_both_polarities_beats_a_one_sided_one() {
        // Shortest length is 2. Variable 1 occurs once per polarity there, variable 2 twice
        // but only positively: combined counts tie at 2, the product term breaks the tie.
        let formula = formula(&[&[1, 2], &[-1, 2], &[1, 2, 3]]);
        assert_eq!(Some(lit(1)), Mom.select_literal(&formula));
    }

    #[test]
    fn variables_outside_the_shortest_clauses_are_not_candidates() {
        let formula = formula(&[&[1, 2], &[3, 4, 5]]);
        let selected = Mom.select_literal(&formula).unwrap();
        assert!(selected.variable() <= 2);
    }

    #[test]
    fn no_candidates_without_clauses() {
        let formula = formula(&[]);
        assert_eq!(None, Mom.select_literal(&formula));
    }
}
