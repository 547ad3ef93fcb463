pub mod collector;
pub mod enricher;

pub use collector::Collector;
pub use enricher::Enricher;
