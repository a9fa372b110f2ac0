use crate::basic_types::Literal;
use crate::branching::BranchingHeuristic;
use crate::engine::Formula;

/// Branches on the literal occurring in the largest number of shortest-length clauses.
///
/// A cheaper cousin of [`Mom`](crate::branching::Mom): it restricts attention to the same
/// shortest-clause bucket but counts single literals instead of scoring variable pairs, so the
/// chosen polarity directly satisfies the most small clauses.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShortestClauseMajority;

impl BranchingHeuristic for ShortestClauseMajority {
    fn name(&self) -> &'static str {
        "shortest-clause-majority"
    }

    fn select_literal(&mut self, formula: &Formula) -> Option<Literal> {
        let shortest = formula.shortest_clause_length()?;

        let mut best: Option<(Literal, usize)> = None;

        for literal in formula.literals() {
            let count = formula.literal_frequency(shortest, literal);
            if count == 0 {
                continue;
            }
            // Strictly greater keeps the first literal in code order on ties.
            if best.map_or(true, |(_, best_count)| count > best_count) {
                best = Some((literal, count));
            }
        }

        best.map(|(literal, _)| literal)
    }
}
