//! Route evaluation: turns a stop ordering into priced legs.

mod evaluator;

pub use evaluator::RouteEvaluator;
