//! Configuration system for Comply.
//! TOML-based, layered resolution: overrides > env > project > user > defaults.

pub mod comply_config;
pub mod inputs_config;
pub mod integrity_config;
pub mod output_config;
pub mod trend_config;

pub use comply_config::{ComplyConfig, ConfigOverrides};
pub use inputs_config::InputsConfig;
pub use integrity_config::{DuplicateControlPolicy, IntegrityConfig};
pub use output_config::OutputConfig;
pub use trend_config::TrendConfig;
