//! Grammar rules for Puppet manifests.
//!
//! Each submodule adds `parse_*` methods to [`Parser`](super::Parser):
//!
//! - `definitions`: classes, defined types, nodes, functions, plans, type aliases
//! - `statements`: statement dispatch, blocks, conditionals, case
//! - `resources`: resource declarations, defaults, overrides, attributes
//! - `expressions`: operators, literals, calls, collections, selectors

mod definitions;
mod expressions;
mod resources;
mod statements;
