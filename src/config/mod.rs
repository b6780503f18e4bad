//! Configuration loading and management for the pricing engine.
//!
//! This module provides functionality to load the rate parameters the engine
//! runs with: worker-side gross-up defaults, employer-side loadings, and the
//! standard work schedule.
//!
//! # Example
//!
//! ```no_run
//! use quote_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/rates.yaml").unwrap();
//! println!("Weekly hours: {}", config.rates().schedule.weekly_hours);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EmployerLoadings, PayrollDefaults, RatesConfig, WorkSchedule};
