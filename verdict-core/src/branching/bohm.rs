use crate::basic_types::Literal;
use crate::branching::BranchingHeuristic;
use crate::engine::Formula;

/// Böhm's heuristic: prefers variables that are frequent in short clauses.
///
/// Each variable is scored as the sum over every nonempty clause length i (shortest to longest)
/// of `p1·max(fᵢ(l), fᵢ(¬l)) + p2·min(fᵢ(l), fᵢ(¬l))`, with fixed weights p1 = 1 and p2 = 2.
/// Orientation goes to the polarity with the higher total occurrence count.
#[derive(Clone, Copy, Debug, Default)]
pub struct Bohm;

const P1: u64 = 1;
const P2: u64 = 2;

impl BranchingHeuristic for Bohm {
    fn name(&self) -> &'static str {
        "BOHM"
    }

    fn select_literal(&mut self, formula: &Formula) -> Option<Literal> {
        let mut best: Option<(Literal, u64)> = None;

        // The score is symmetric in a variable's polarities; double visits produce identical
        // pairs and strictly-greater keeps the first.
        for literal in formula.literals() {
            let positive = if literal.is_positive() { literal } else { !literal };

            let mut total = 0_u64;
            for length in formula.clause_lengths() {
                let positive_count = formula.literal_frequency(length, positive) as u64;
                let negative_count = formula.literal_frequency(length, !positive) as u64;
                total += P1 * positive_count.max(negative_count)
                    + P2 * positive_count.min(negative_count);
            }

            let candidate = if formula.occurrence_count(positive)
                >= formula.occurrence_count(!positive)
            {
                positive
            } else {
                !positive
            };

            if best.map_or(true, |(_, best_total)| total > best_total) {
                best = Some((candidate, total));
            }
        }

        best.map(|(literal, _)| literal)
    }
}
