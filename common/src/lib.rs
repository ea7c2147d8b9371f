mod telemetry;
pub use telemetry::*;

mod match_analysis;
pub use match_analysis::*;

mod entities;
pub use entities::*;
