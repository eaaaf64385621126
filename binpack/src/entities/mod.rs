mod builder;
mod evaluation;
mod instance;
mod problem;

#[doc(inline)]
pub use builder::InstanceBuilder;
#[doc(inline)]
pub use evaluation::{Evaluation, PENALTY, Violation};
#[doc(inline)]
pub use instance::{Assignment, BPInstance};
#[doc(inline)]
pub use problem::Problem;
