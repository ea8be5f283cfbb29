mod aggregator;
mod commands;
mod debounce;
mod generation;
mod worker;

#[cfg(test)]
pub(crate) mod test_support;

pub use aggregator::QueryAggregator;
pub use commands::{MergeOutcome, SubQueryOutcome};
pub use debounce::{DEFAULT_DEBOUNCE, DebounceGate, GateDecision};
pub use generation::GenerationTracker;
