mod mitigation;
mod trigger;

pub use mitigation::*;
pub use trigger::*;
