use std::collections::{HashMap, HashSet};

use lexical_sort::{lexical_cmp, StringSort};
use log::{debug, trace};

use crate::flag::Flag;
use error::{DuplicateFlagError, UnknownFlagError};

pub mod error;

/// Canonical flag store. Enumeration order here is always lexicographical
/// by flag name; callers that need definition order wrap this in a
/// `flag_set::FlagSet`, which records that order separately.
#[derive(Debug, Default)]
pub struct Registry {
    /// every defined flag, keyed by name
    formal: HashMap<String, Flag>,
    /// names assigned through set(); get_mut() assignments never land here
    actual: HashSet<String>,
}

impl Registry {
    pub fn new() -> Registry {
        Registry {
            formal: HashMap::new(),
            actual: HashSet::new(),
        }
    }

    /// Add a new flag definition. Each name can be defined at most once
    /// per registry.
    pub fn define(&mut self, flag: Flag) -> Result<(), DuplicateFlagError> {
        if self.formal.contains_key(flag.name()) {
            return Err(DuplicateFlagError(flag.name().to_owned()));
        }

        debug!("defined flag '{}'", flag.name());
        self.formal.insert(flag.name().to_owned(), flag);
        Ok(())
    }

    /// Assign a flag's value and record the flag as explicitly set. This
    /// is the canonical setter; only assignments made here are reported
    /// by visit().
    pub fn set(&mut self, name: &str, value: &str) -> Result<(), UnknownFlagError> {
        match self.formal.get_mut(name) {
            Some(flag) => {
                flag.set_value(value);
                self.actual.insert(name.to_owned());
                trace!("set flag '{}' to '{}'", name, value);
                Ok(())
            }
            None => Err(UnknownFlagError(name.to_owned())),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Flag> {
        self.formal.get(name)
    }

    /// Mutable access to a flag definition. Values assigned through the
    /// returned reference bypass "set" tracking, so visit() will not
    /// report the flag as set even though its value changed.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Flag> {
        self.formal.get_mut(name)
    }

    pub fn len(&self) -> usize {
        self.formal.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formal.is_empty()
    }

    /// Visit every defined flag, set or not, in lexicographical name
    /// order.
    pub fn visit_all<F>(&self, mut visit: F)
    where
        F: FnMut(&Flag),
    {
        let mut flags: Vec<&Flag> = self.formal.values().collect();
        flags.string_sort_unstable(lexical_cmp);

        for flag in flags {
            visit(flag);
        }
    }

    /// Visit only the flags assigned through set(), in lexicographical
    /// name order.
    pub fn visit<F>(&self, mut visit: F)
    where
        F: FnMut(&Flag),
    {
        let mut flags: Vec<&Flag> = self
            .formal
            .values()
            .filter(|flag| self.actual.contains(flag.name()))
            .collect();
        flags.string_sort_unstable(lexical_cmp);

        for flag in flags {
            visit(flag);
        }
    }
}
