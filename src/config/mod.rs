//! Configuration loading and validation
//!
//! The configuration is a TOML file with `[site]`, `[fetch]`, `[report]`,
//! and `[output]` sections. It is parsed once at startup, validated, and
//! never mutated afterwards.

mod parser;
mod types;
mod validation;

pub use parser::{compute_config_hash, load_config, load_config_with_hash};
pub use types::{Config, FetchConfig, OutputConfig, ReportConfig, SiteConfig};
pub use validation::validate;
