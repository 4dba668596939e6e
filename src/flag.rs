use std::cmp::{Eq, PartialEq};
use std::hash::{Hash, Hasher};

/// Definition of a single named flag. The name, help text, and default are
/// fixed at definition time; only the current value changes afterwards.
#[derive(Clone, Debug, Eq)]
pub struct Flag {
    name: String,
    help: String,
    default: String,
    value: String,
}

impl Flag {
    pub fn new(name: &str, default: &str, help: &str) -> Flag {
        Flag {
            name: name.to_owned(),
            help: help.to_owned(),
            default: default.to_owned(),
            value: default.to_owned(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn help(&self) -> &str {
        &self.help
    }

    pub fn default_value(&self) -> &str {
        &self.default
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Overwrite the flag's current value in place. Assignments made
    /// through this method do not update the registry's "set" bookkeeping;
    /// see `Registry::set` for the tracked path.
    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_owned();
    }
}

impl Hash for Flag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl PartialEq for Flag {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl AsRef<str> for Flag {
    fn as_ref(&self) -> &str {
        self.name()
    }
}
