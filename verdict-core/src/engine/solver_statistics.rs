use crate::statistics::log_statistic;

/// Statistics of a single [`DpllSolver`](crate::DpllSolver) instance. Every solver owns its own
/// counters; nothing here is shared between concurrently running instances.
///
/// The counters are an observable side channel only. The search itself never consults them.
#[derive(Clone, Copy, Debug, Default)]
pub struct SolverStatistics {
    /// The number of invocations of the recursive search procedure.
    pub(crate) num_recursive_calls: u64,
}

impl SolverStatistics {
    pub fn num_recursive_calls(&self) -> u64 {
        self.num_recursive_calls
    }

    pub fn reset(&mut self) {
        *self = SolverStatistics::default();
    }

    pub(crate) fn log(&self) {
        log_statistic("recursiveCalls", self.num_recursive_calls);
    }
}
