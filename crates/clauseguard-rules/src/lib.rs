//! ClauseGuard Rule Table
//!
//! The ordered set of trigger phrases a contract is screened against.
//!
//! Tables are either the built-in set shipped with ClauseGuard or a YAML
//! document listing rules. Order matters: when a clause contains several
//! trigger phrases, the rule listed first wins.

pub mod builtin;
pub mod table;

pub use table::RuleTable;
