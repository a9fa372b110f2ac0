use crate::basic_types::Literal;
use crate::branching::BranchingHeuristic;
use crate::engine::Formula;

/// Dynamic Largest Combined Sum: branches on the variable maximizing the combined occurrence
/// count of its two polarities, oriented towards the polarity that occurs more often.
#[derive(Clone, Copy, Debug, Default)]
pub struct Dlcs;

impl BranchingHeuristic for Dlcs {
    fn name(&self) -> &'static str {
        "DLCS"
    }

    fn select_literal(&mut self, formula: &Formula) -> Option<Literal> {
        let mut best: Option<(Literal, usize)> = None;

        // A variable occurring in both polarities is visited twice; both visits produce the
        // same (candidate, score) pair, so strictly-greater keeps the first one.
        for literal in formula.literals() {
            let positive = if literal.is_positive() { literal } else { !literal };
            let positive_count = formula.occurrence_count(positive);
            let negative_count = formula.occurrence_count(!positive);

            let combined = positive_count + negative_count;
            let candidate = if positive_count >= negative_count {
                positive
            } else {
                !positive
            };

            if best.map_or(true, |(_, best_combined)| combined > best_combined) {
                best = Some((candidate, combined));
            }
        }

        best.map(|(literal, _)| literal)
    }
}
