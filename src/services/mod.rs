pub mod exporter;
pub mod loader;
pub mod pipeline;
pub mod result_cache;
pub mod scheduler;
pub mod stats;

pub use pipeline::{RenderOutput, RenderSession};
pub use result_cache::ResultCache;
pub use scheduler::{Command, Debouncer, RenderScheduler};
pub use stats::ProcessingStats;
