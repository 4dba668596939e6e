//! # optset
//!
//! A small command-line flag registry whose visitation order is
//! configurable at runtime: flags can be enumerated lexicographically by
//! name (the default) or in the order they were first defined.
//!
//! The canonical store ([`registry::Registry`]) only knows lexicographical
//! order. [`flag_set::FlagSet`] wraps it, records definition order as
//! flags are added, and exposes the order-aware `visit`/`visit_all`
//! operations.
pub use flag::Flag;
pub use flag_set::FlagSet;
pub use registry::Registry;

pub mod flag;
pub mod flag_set;
pub mod registry;
