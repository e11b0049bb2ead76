// Library interface for the seqbench harness
// This allows the bench targets and integration tests to access internal modules

pub mod benchmark;
pub mod phases;
pub mod sequence;
pub mod workload;
