pub mod iterative;
pub mod step;

pub use iterative::IterativeResolver;
pub use step::{classify, Step};
