use std::collections::BTreeMap;
use std::collections::BTreeSet;

use log::debug;

use crate::basic_types::Clause;
use crate::basic_types::Literal;
use crate::basic_types::SolverError;
use crate::verdict_assert_extreme;
use crate::verdict_assert_moderate;

/// Identifies a clause within a [`Formula`]. Ids are handed out in input order and are never
/// reused, so iterating an id set visits clauses in the order they appeared in the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct ClauseId(u32);

/// The CNF clause store. Owns all mutation logic for literal assignment and keeps two derived
/// indices consistent across every mutation:
///
/// - `buckets` partitions the live clauses by their current length, which gives O(1) unit-clause
///   detection (bucket 1) and the shortest/longest-length queries the heuristics scan;
/// - `occurrences` maps every literal to the live clauses containing it, which gives pure-literal
///   detection and the occurrence counts the heuristics score.
///
/// Both indices are updated incrementally during [`Formula::assign`]; nothing is ever recomputed
/// by scanning the clause store.
///
/// A clause whose last literal is stripped stays in the store (in bucket 0) and raises the
/// [`Formula::has_empty_clause`] flag; the search abandons such a branch on its next terminal
/// check.
#[derive(Clone, Debug, Default)]
pub struct Formula {
    /// The live clauses. Satisfied clauses are removed outright.
    clauses: BTreeMap<ClauseId, Clause>,
    /// Exact partition of the live clauses by current length. Bucket sets are never empty;
    /// a bucket is removed when its last clause leaves it.
    buckets: BTreeMap<usize, BTreeSet<ClauseId>>,
    /// For every literal, the live clauses containing it. Keys with no remaining clauses are
    /// removed, so key presence means "occurs at least once".
    occurrences: BTreeMap<Literal, BTreeSet<ClauseId>>,
    /// Set the moment a clause's last literal is stripped. Never recomputed by scanning.
    has_empty_clause: bool,
}

impl Formula {
    pub fn new(clauses: impl IntoIterator<Item = Clause>) -> Formula {
        let mut formula = Formula::default();

        for clause in clauses {
            let id = ClauseId(formula.clauses.len() as u32);

            if clause.is_empty() {
                formula.has_empty_clause = true;
            }

            let _ = formula.buckets.entry(clause.len()).or_default().insert(id);
            for literal in clause.iter() {
                let _ = formula.occurrences.entry(literal).or_default().insert(id);
            }
            let _ = formula.clauses.insert(id, clause);
        }

        debug!(
            "constructed formula with {} clauses over {} distinct literals",
            formula.clauses.len(),
            formula.occurrences.len()
        );
        verdict_assert_extreme!(formula.indices_are_consistent());

        formula
    }

    /// True iff no clauses remain; every clause of the input has been satisfied.
    pub fn is_satisfied(&self) -> bool {
        self.clauses.is_empty()
    }

    /// True iff some live clause has had all its literals stripped.
    pub fn has_empty_clause(&self) -> bool {
        self.has_empty_clause
    }

    pub fn num_clauses(&self) -> usize {
        self.clauses.len()
    }

    /// The number of live clauses containing `literal`.
    pub fn occurrence_count(&self, literal: Literal) -> usize {
        self.occurrences.get(&literal).map_or(0, BTreeSet::len)
    }

    /// The literals with at least one occurrence, in ascending code order.
    pub fn literals(&self) -> impl Iterator<Item = Literal> + '_ {
        self.occurrences.keys().copied()
    }

    /// The number of distinct literals with at least one occurrence.
    pub fn distinct_literal_count(&self) -> usize {
        self.occurrences.len()
    }

    /// The variables with at least one occurrence of either polarity, in ascending order.
    pub fn variables(&self) -> impl Iterator<Item = u32> {
        let variables: BTreeSet<u32> = self
            .occurrences
            .keys()
            .map(|literal| literal.variable())
            .collect();
        variables.into_iter()
    }

    /// The sole literal of some length-1 clause, or [`None`] when no unit clause exists.
    /// Deterministic: the unit clause earliest in input order wins.
    pub fn first_unit_literal(&self) -> Option<Literal> {
        let ids = self.buckets.get(&1)?;
        let id = ids.first()?;
        self.clauses[id].iter().next()
    }

    /// The first literal (in ascending code order) whose negation has no occurrences, or
    /// [`None`] when no pure literal exists.
    pub fn first_pure_literal(&self) -> Option<Literal> {
        self.literals()
            .find(|&literal| !self.occurrences.contains_key(&!literal))
    }

    /// The smallest current length over all nonempty live clauses. An emptied clause (length 0)
    /// does not count; callers interested in it check [`Formula::has_empty_clause`].
    pub fn shortest_clause_length(&self) -> Option<usize> {
        self.clause_lengths().next()
    }

    /// The largest current length over all live clauses.
    pub fn longest_clause_length(&self) -> Option<usize> {
        self.clause_lengths().last()
    }

    /// The lengths for which a nonempty live clause exists, ascending.
    pub fn clause_lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.buckets.keys().copied().filter(|&length| length > 0)
    }

    /// The live clauses currently of length `length`, in input order.
    pub fn clauses_of_length(&self, length: usize) -> impl Iterator<Item = &Clause> + '_ {
        self.buckets
            .get(&length)
            .into_iter()
            .flat_map(|ids| ids.iter().map(|id| &self.clauses[id]))
    }

    /// The number of clauses of length `length` containing `literal`.
    pub fn literal_frequency(&self, length: usize, literal: Literal) -> usize {
        self.clauses_of_length(length)
            .filter(|clause| clause.contains(literal))
            .count()
    }

    /// Asserts `literal` true. Every clause containing `literal` is removed as satisfied, and
    /// `!literal` is stripped from every clause containing it; a clause emptied by the strip
    /// raises the empty-clause flag.
    ///
    /// The literal must currently occur in the formula. Requesting any other literal is an
    /// invariant violation which leaves the formula untouched.
    pub fn assign(&mut self, literal: Literal) -> Result<(), SolverError> {
        let satisfied: Vec<ClauseId> = match self.occurrences.get(&literal) {
            Some(ids) => ids.iter().copied().collect(),
            None => return Err(SolverError::UnknownLiteral(literal)),
        };

        for id in satisfied {
            self.remove_clause(id);
        }

        // A tautological clause contained both polarities and was removed as satisfied above,
        // so every remaining occurrence of the negation genuinely shrinks its clause.
        let negation = !literal;
        let falsified: Vec<ClauseId> = self
            .occurrences
            .get(&negation)
            .map(|ids| ids.iter().copied().collect())
            .unwrap_or_default();

        for id in falsified {
            self.strip_literal(id, negation);
        }

        verdict_assert_extreme!(self.indices_are_consistent());

        Ok(())
    }

    /// Removes a satisfied clause and the occurrence entries of all its literals.
    fn remove_clause(&mut self, id: ClauseId) {
        let clause = self
            .clauses
            .remove(&id)
            .expect("clause ids are taken from a live index");

        self.remove_from_bucket(clause.len(), id);
        for literal in clause.iter() {
            self.remove_occurrence(literal, id);
        }
    }

    /// Strips `literal` from the clause, migrating its bucket membership and flagging the
    /// formula when the clause empties.
    fn strip_literal(&mut self, id: ClauseId, literal: Literal) {
        let (old_length, new_length) = {
            let clause = self
                .clauses
                .get_mut(&id)
                .expect("clause ids are taken from a live index");
            let old_length = clause.len();
            let removed = clause.remove(literal);
            verdict_assert_moderate!(removed, "the occurrence index names only containing clauses");
            (old_length, clause.len())
        };

        if new_length == 0 {
            self.has_empty_clause = true;
        }

        self.remove_from_bucket(old_length, id);
        let _ = self.buckets.entry(new_length).or_default().insert(id);
        self.remove_occurrence(literal, id);
    }

    fn remove_from_bucket(&mut self, length: usize, id: ClauseId) {
        let bucket = self
            .buckets
            .get_mut(&length)
            .expect("every live clause length has a bucket");
        let _ = bucket.remove(&id);
        if bucket.is_empty() {
            let _ = self.buckets.remove(&length);
        }
    }

    fn remove_occurrence(&mut self, literal: Literal, id: ClauseId) {
        if let Some(ids) = self.occurrences.get_mut(&literal) {
            let _ = ids.remove(&id);
            if ids.is_empty() {
                let _ = self.occurrences.remove(&literal);
            }
        }
    }

    /// Full audit of both derived indices against the clause store. Only run at the extreme
    /// assert level.
    fn indices_are_consistent(&self) -> bool {
        let buckets_partition = self.clauses.iter().all(|(id, clause)| {
            self.buckets
                .get(&clause.len())
                .is_some_and(|ids| ids.contains(id))
        }) && self.buckets.iter().all(|(&length, ids)| {
            !ids.is_empty()
                && ids.iter().all(|id| {
                    self.clauses
                        .get(id)
                        .is_some_and(|clause| clause.len() == length)
                })
        });

        let occurrences_exact = self.occurrences.iter().all(|(&literal, ids)| {
            !ids.is_empty()
                && ids.iter().all(|id| {
                    self.clauses
                        .get(id)
                        .is_some_and(|clause| clause.contains(literal))
                })
        }) && self.clauses.iter().all(|(id, clause)| {
            clause.iter().all(|literal| {
                self.occurrences
                    .get(&literal)
                    .is_some_and(|ids| ids.contains(id))
            })
        });

        let empty_clause_flagged =
            self.has_empty_clause || self.clauses.values().all(|clause| !clause.is_empty());

        buckets_partition && occurrences_exact && empty_clause_flagged
    }
}
