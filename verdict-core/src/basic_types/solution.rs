use std::collections::BTreeMap;
use std::fmt::Display;
use std::fmt::Formatter;

use itertools::Itertools;

use crate::basic_types::Clause;
use crate::basic_types::Literal;

/// A total truth assignment over the variables of a formula, reconstructed from the literals
/// committed along an accepted search path.
///
/// Variables that were never committed on the accepted path are unconstrained; they are given a
/// fixed default polarity (true) so the assignment is total over the input variables.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Solution {
    values: BTreeMap<u32, bool>,
}

impl Solution {
    pub(crate) fn from_trail(trail: &[Literal], variables: impl IntoIterator<Item = u32>) -> Solution {
        let mut values: BTreeMap<u32, bool> = trail
            .iter()
            .map(|literal| (literal.variable(), literal.is_positive()))
            .collect();

        for variable in variables {
            let _ = values.entry(variable).or_insert(true);
        }

        Solution { values }
    }

    /// The truth value assigned to `variable`, or [`None`] when the variable did not occur in
    /// the solved formula.
    pub fn value(&self, variable: u32) -> Option<bool> {
        self.values.get(&variable).copied()
    }

    pub fn num_variables(&self) -> usize {
        self.values.len()
    }

    /// The assignment as `(variable, value)` pairs in ascending variable order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, bool)> + '_ {
        self.values.iter().map(|(&variable, &value)| (variable, value))
    }

    /// Evaluates a clause list under this assignment. Variables the assignment does not cover
    /// falsify the literal they appear in.
    pub fn satisfies(&self, clauses: &[Clause]) -> bool {
        clauses.iter().all(|clause| {
            clause
                .iter()
                .any(|literal| self.value(literal.variable()) == Some(literal.is_positive()))
        })
    }
}

impl Display for Solution {
    /// Formats the assignment as the body of a DIMACS `v` line: the signed code of every
    /// variable in ascending order.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            self.iter()
                .map(|(variable, value)| {
                    if value {
                        variable as i32
                    } else {
                        -(variable as i32)
                    }
                })
                .join(" ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(code: i32) -> Literal {
        Literal::from_code(code).unwrap()
    }

    #[test]
    fn trail_literals_determine_their_variables() {
        let solution = Solution::from_trail(&[lit(1), lit(-3)], [1, 2, 3]);
        assert_eq!(Some(true), solution.value(1));
        assert_eq!(Some(false), solution.value(3));
        assert_eq!(3, solution.num_variables());
    }

    #[test]
    fn unconstrained_variables_default_to_true() {
        let solution = Solution::from_trail(&[lit(-1)], [1, 2]);
        assert_eq!(Some(true), solution.value(2));
    }

    #[test]
    fn variables_outside_the_formula_have_no_value() {
        let solution = Solution::from_trail(&[lit(1)], [1]);
        assert_eq!(None, solution.value(7));
    }

    #[test]
    fn evaluates_clause_lists() {
        let solution = Solution::from_trail(&[lit(1), lit(-2)], [1, 2]);
        assert!(solution.satisfies(&[Clause::new([lit(1), lit(2)]), Clause::new([lit(-2)])]));
        assert!(!solution.satisfies(&[Clause::new([lit(2)])]));
    }

    #[test]
    fn displays_as_a_dimacs_values_line() {
        let solution = Solution::from_trail(&[lit(-2), lit(3)], [1, 2, 3]);
        assert_eq!("1 -2 3", solution.to_string());
    }
}
