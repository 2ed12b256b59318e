mod proximity;
mod settings;

pub use proximity::{LocationPair, ProximityTable};
pub use settings::{OutputConfig, OutputFormat, Settings};
