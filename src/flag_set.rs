use std::collections::HashSet;

use log::trace;

pub use order::DefinitionOrder;

use crate::flag::Flag;
use crate::registry::error::{DuplicateFlagError, UnknownFlagError};
use crate::registry::Registry;

pub mod order;

/// A flag registry with a configurable visitation order. Wraps the
/// canonical `Registry` and additionally remembers the order in which
/// flags were defined, so `visit()` and `visit_all()` can replay either
/// lexicographical or definition order.
///
/// The sort mode is per-instance state, read at the top of every
/// visitation call; toggling it affects every subsequent call and nothing
/// already completed.
#[derive(Debug)]
pub struct FlagSet {
    registry: Registry,
    order: DefinitionOrder,
    sort_flags: bool,
}

impl FlagSet {
    pub fn new() -> FlagSet {
        FlagSet {
            registry: Registry::new(),
            order: DefinitionOrder::new(),
            sort_flags: true,
        }
    }

    /// Define a new flag. The name is recorded for definition-order
    /// replay only after the registry accepts it, so a rejected duplicate
    /// never reaches the order record.
    pub fn define(
        &mut self,
        name: &str,
        default: &str,
        help: &str,
    ) -> Result<(), DuplicateFlagError> {
        self.registry.define(Flag::new(name, default, help))?;
        self.order.record(name);
        Ok(())
    }

    /// Assign a flag's value through the canonical setter, marking the
    /// flag as explicitly set.
    pub fn set(&mut self, name: &str, value: &str) -> Result<(), UnknownFlagError> {
        self.registry.set(name, value)
    }

    pub fn get(&self, name: &str) -> Option<&Flag> {
        self.registry.get(name)
    }

    /// Mutable access to a flag definition. See `Registry::get_mut` for
    /// the "set" tracking caveat.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Flag> {
        self.registry.get_mut(name)
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Control whether visit() and visit_all() use lexicographical order
    /// (true, the default) or definition order (false). Takes effect for
    /// all subsequent visitation calls.
    pub fn sort_flags(&mut self, sort: bool) {
        self.sort_flags = sort;
    }

    /// Visit the flags, calling `visit` for each. It visits all flags,
    /// even those not set. Order is controlled by sort_flags
    /// (lexicographical by default).
    pub fn visit_all<F>(&self, mut visit: F)
    where
        F: FnMut(&Flag),
    {
        if self.sort_flags {
            self.registry.visit_all(visit);
            return;
        }

        trace!("visiting all flags in definition order");
        for name in self.order.names() {
            visit(self.resolve(name));
        }
    }

    /// Visit the flags, calling `visit` for each. It visits only those
    /// flags that have been set. Order is controlled by sort_flags
    /// (lexicographical by default).
    ///
    /// Note: only assignments made through the canonical setter count as
    /// "set". A value written via get_mut() + `Flag::set_value` changes
    /// the flag but is invisible here; use visit_all() if you need to
    /// iterate over all defined flags after such assignments.
    pub fn visit<F>(&self, mut visit: F)
    where
        F: FnMut(&Flag),
    {
        if self.sort_flags {
            self.registry.visit(visit);
            return;
        }

        // membership only; the set-only enumeration's order carries no
        // information for the definition-order replay below
        let mut actual = HashSet::new();
        self.registry.visit(|flag| {
            actual.insert(flag.name().to_owned());
        });

        trace!("visiting set flags in definition order");
        for name in self.order.names() {
            if actual.contains(name) {
                visit(self.resolve(name));
            }
        }
    }

    // A recorded name that fails to resolve means the registry and the
    // definition-order record have diverged. Registry entries are never
    // removed, so that is a bug in this pairing, not a recoverable
    // condition.
    fn resolve(&self, name: &str) -> &Flag {
        match self.registry.get(name) {
            Some(flag) => flag,
            None => panic!(
                "flag '{}' was recorded at definition time but is missing from the registry",
                name
            ),
        }
    }
}

impl Default for FlagSet {
    fn default() -> Self {
        FlagSet::new()
    }
}
