pub mod config;
pub mod ixp;
pub mod registry;
pub mod report;
pub mod sample;
pub mod session;

pub use config::{ScenarioConfig, ScenarioFileConfig};
pub use ixp::compute_score;
pub use registry::{ScenarioRegistry, ScenarioRun};
pub use report::ScoreReport;
pub use sample::{generate_sample, SampleGenerator};
pub use session::IxpSession;
