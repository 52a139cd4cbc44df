pub mod exploration;
pub mod pathfinding;
pub mod traits;

pub use traits::{GuaranteedTraversal, TraversalStrategy};
