//! topogate-validate — topology safety rules.
//!
//! Consumes the derived `RoleCounts` from `topogate-topology` plus the
//! active scope mode and produces an ordered list of rule violations.
//! An empty list is the "may proceed" signal gating cluster creation.

pub mod rules;

pub use rules::{may_proceed, validate, ValidationError};
