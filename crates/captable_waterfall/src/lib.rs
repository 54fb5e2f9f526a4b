//! # captable_waterfall: Exit waterfall distribution engine
//!
//! ## Engine Layer Role
//!
//! Given a set of [`SecurityHolder`](captable_models::securities::SecurityHolder)
//! records and a single exit value, computes the per-holder payout through
//! three ordered passes:
//!
//! 1. **Liquidation preferences** in descending seniority (ties keep input
//!    order), each capped by the value remaining;
//! 2. **Participation** for participating preferred holders whose
//!    preference was paid, pro rata over the participating-share pool, with
//!    cap clamping;
//! 3. **Residual common distribution** over the common-equivalent pool
//!    (or, under full conversion, the entire exit value over as-converted
//!    shares).
//!
//! The engine is stateless and purely functional: nothing is cached or
//! mutated across calls, and identical inputs always produce identical
//! outputs. Money is integer cents throughout; every intermediate ratio is
//! an exact decimal; rounding happens only at bucket writes
//! (see [`captable_core::money`]).
//!
//! ## Usage Examples
//!
//! ```rust
//! use captable_models::securities::{SecurityHolder, SecurityType};
//! use captable_waterfall::calculate_waterfall;
//!
//! let holders = vec![SecurityHolder::new(
//!     "h-1",
//!     "Founder",
//!     SecurityType::Common,
//!     10_000_000,
//! )];
//!
//! let result = calculate_waterfall(&holders, 1_000, false).unwrap();
//! assert_eq!(result.distributions[0].total, 1_000);
//! assert_eq!(result.summary.total_distributed, 1_000);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

mod distribution;
mod engine;
mod error;
mod validate;

pub use distribution::{WaterfallDistribution, WaterfallResult, WaterfallSummary};
pub use engine::calculate_waterfall;
pub use error::{ValidationError, ValidationIssue};
