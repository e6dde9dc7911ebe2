mod groups;
mod metrics;
mod resources;
mod tasks;

pub use groups::{Group, GroupKind, Groups};
pub use metrics::{MetricKind, Metrics, Sector};
pub use resources::{ResourceKind, Resources};
pub use tasks::DailyTasks;
