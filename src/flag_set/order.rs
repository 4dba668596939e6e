/// Record of flag definition order. The registry's own enumeration is
/// lexicographical only, so the order flags were first defined is kept
/// here, as a plain append-only list of names. Entries are never removed
/// or reordered, and the list holds names only, not flag data.
#[derive(Debug, Default)]
pub struct DefinitionOrder {
    names: Vec<String>,
}

impl DefinitionOrder {
    pub fn new() -> DefinitionOrder {
        DefinitionOrder { names: Vec::new() }
    }

    /// Append a name. Called exactly once per flag, at definition time.
    /// Duplicate rejection is the registry's job and happens before this.
    pub fn record(&mut self, name: &str) {
        self.names.push(name.to_owned());
    }

    /// All recorded names, oldest first.
    pub fn names(&self) -> &[String] {
        &self.names
    }
}
