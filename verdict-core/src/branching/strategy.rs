use std::fmt::Display;
use std::fmt::Formatter;

use crate::branching::Bohm;
use crate::branching::BranchingHeuristic;
use crate::branching::Dlcs;
use crate::branching::Dlis;
use crate::branching::Mom;
use crate::branching::ShortestClauseMajority;

/// Names the built-in branching heuristics, for configuration surfaces (e.g. command-line
/// parsers with the `clap` feature) and for harnesses that compare the whole family.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum BranchingStrategy {
    #[default]
    Dlis,
    Dlcs,
    Mom,
    Bohm,
    ShortestClauseMajority,
}

impl BranchingStrategy {
    /// Every built-in strategy, in a fixed order.
    pub const ALL: [BranchingStrategy; 5] = [
        BranchingStrategy::Dlis,
        BranchingStrategy::Dlcs,
        BranchingStrategy::Mom,
        BranchingStrategy::Bohm,
        BranchingStrategy::ShortestClauseMajority,
    ];

    pub fn create(self) -> Box<dyn BranchingHeuristic> {
        match self {
            BranchingStrategy::Dlis => Box::new(Dlis),
            BranchingStrategy::Dlcs => Box::new(Dlcs),
            BranchingStrategy::Mom => Box::new(Mom),
            BranchingStrategy::Bohm => Box::new(Bohm),
            BranchingStrategy::ShortestClauseMajority => Box::new(ShortestClauseMajority),
        }
    }
}

impl Display for BranchingStrategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BranchingStrategy::Dlis => "DLIS",
            BranchingStrategy::Dlcs => "DLCS",
            BranchingStrategy::Mom => "MOM",
            BranchingStrategy::Bohm => "BOHM",
            BranchingStrategy::ShortestClauseMajority => "shortest-clause-majority",
        };
        write!(f, "{name}")
    }
}
