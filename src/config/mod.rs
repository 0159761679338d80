//! Configuration types and loading.
//!
//! `ExamplesConfig` is read from `.hive/examples.toml` by the menu CLI only;
//! the standalone scenario binaries take no configuration.

mod settings;

pub use settings::{
    DEFAULT_CONFIG_PATH, DisplayConfig, ExamplesConfig, LoggingConfig, OutputConfig,
};
