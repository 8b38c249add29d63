pub mod error;
pub mod factory;
pub mod formulas;
pub mod message;
pub mod metrics;
pub mod models;
pub mod report;
pub mod types;

#[cfg(feature = "python")]
mod py;

pub use error::{Result, WorkoutError};
pub use factory::read_package;
pub use formulas::{Activity, RoundTo};
pub use message::Locale;
pub use metrics::Metrics;
pub use models::{Running, SportsWalking, Summary, Swimming, Workout, WorkoutKind};
pub use report::{summarize_batch, summarize_packages_json, write_report};
pub use types::{BatchReport, Cfg, Package, Rejected, SummaryOut};
