//! # captable_scenarios: Exit scenario grids and break-point search
//!
//! ## Orchestration Layer Role
//!
//! Thin orchestration over [`captable_waterfall`]: evaluates the waterfall
//! across many exit values and discovers the exit values at which the set
//! of paid holders changes. No financial rules live here; every rule is the
//! engine's.
//!
//! Scenario evaluations are independent and side-effect-free, so large
//! grids fan out across a Rayon thread pool; output order always matches
//! input order regardless of execution order.
//!
//! ## Usage Examples
//!
//! ```rust
//! use captable_models::securities::{SecurityHolder, SecurityType};
//! use captable_scenarios::calculate_waterfall_scenarios;
//!
//! let holders = vec![SecurityHolder::new(
//!     "common",
//!     "Founders",
//!     SecurityType::Common,
//!     1_000_000,
//! )];
//!
//! let results = calculate_waterfall_scenarios(&holders, &[1_000, 2_000], false).unwrap();
//! assert_eq!(results.len(), 2);
//! assert_eq!(results[0].exit_value, 1_000);
//! assert_eq!(results[1].exit_value, 2_000);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

mod break_points;
mod runner;

pub use break_points::{find_break_points, DEFAULT_STEPS};
pub use runner::{calculate_waterfall_scenarios, exit_grid, PARALLEL_THRESHOLD};
