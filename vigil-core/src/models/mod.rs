pub mod decay_result;
pub mod distribution;
pub mod running_mean;
pub mod sweep_report;

pub use decay_result::DecayResult;
pub use distribution::{StatusDistribution, TrustDistribution};
pub use running_mean::RunningMean;
pub use sweep_report::SweepReport;
