pub mod accumulator;
pub mod aggregator;
pub mod group_key;
pub mod joiner;
pub mod keyer;
pub mod pipeline;

pub use accumulator::Aggregate;
pub use aggregator::{aggregate_by_key, merge_partials};
pub use joiner::{JoinReport, Joiner};
pub use keyer::Keyed;
pub use pipeline::{Pipeline, PipelineOutput};
