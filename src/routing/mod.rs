/// Batch routing modules
pub mod evaluator;
pub mod router;

pub use evaluator::SizeEvaluator;
pub use router::{RouteDecision, SizeRouter};
