//! Orca Common Library
//!
//! Shared configuration records and loading utilities for the orca motion
//! replay workspace.
//!
//! # Module Structure
//!
//! - [`config`] - Configuration loading traits and types
//! - [`consts`] - orca3 default values
//! - [`vehicle`] - Vehicle physical parameters
//! - [`motion`] - Motion limits and depth PID tuning
//! - [`columns`] - Log column layout
//! - [`prelude`] - Common re-exports for convenience
//!
//! # Usage
//!
//! ```rust
//! use orca_common::prelude::*;
//!
//! let vehicle = VehicleParameters::orca3();
//! assert!(vehicle.validate().is_ok());
//! ```

pub mod columns;
pub mod config;
pub mod consts;
pub mod motion;
pub mod prelude;
pub mod vehicle;
