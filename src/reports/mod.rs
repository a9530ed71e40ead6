//! Reports module for paycheck-cli
//!
//! `totals` holds the pure reducers and `projection` chains them into the
//! derived financial state. The remaining modules are one read model per
//! dashboard view, each generated from a storage snapshot.

pub mod close_out;
pub mod coaster;
pub mod paycheck;
pub mod projection;
pub mod survivor;
pub mod totals;

pub use close_out::CloseOutReport;
pub use coaster::{AccountSpend, CoasterReport};
pub use paycheck::PaycheckReport;
pub use projection::{Projection, SurvivalBreakdown, SurvivalStatus};
pub use survivor::SurvivorReport;
