/// Canonical registry tests: flag definition, the tracked setter, and the
/// two lexicographical enumerations.
mod registry {
    use optset::flag::Flag;
    use optset::registry::Registry;

    fn names_of_all(registry: &Registry) -> Vec<String> {
        let mut names = Vec::new();
        registry.visit_all(|flag| names.push(flag.name().to_owned()));
        names
    }

    fn names_of_set(registry: &Registry) -> Vec<String> {
        let mut names = Vec::new();
        registry.visit(|flag| names.push(flag.name().to_owned()));
        names
    }

    #[test]
    fn define_rejects_duplicate_names() {
        let mut registry = Registry::new();

        registry
            .define(Flag::new("alpha", "a", "First letter to use"))
            .expect("alpha is new");

        let err = registry
            .define(Flag::new("alpha", "b", "Redefinition attempt"))
            .expect_err("duplicate names are rejected");

        assert_eq!(err.to_string(), "flag 'alpha' is already defined");
        assert_eq!(registry.len(), 1);
        // the original definition survives untouched
        assert_eq!(
            registry.get("alpha").expect("alpha is defined").default_value(),
            "a"
        );
    }

    #[test]
    fn set_rejects_unknown_names() {
        let mut registry = Registry::new();

        let err = registry
            .set("ghost", "boo")
            .expect_err("unknown names are rejected");

        assert_eq!(err.to_string(), "unrecognized flag 'ghost'");
    }

    #[test]
    fn set_updates_value_and_marks_flag_set() {
        let mut registry = Registry::new();
        registry
            .define(Flag::new("timeout", "30", "Seconds to wait"))
            .expect("timeout is new");

        registry.set("timeout", "5").expect("timeout is defined");

        let flag = registry.get("timeout").expect("timeout is defined");
        assert_eq!(flag.value(), "5");
        assert_eq!(flag.default_value(), "30");
        assert_eq!(names_of_set(&registry), ["timeout"]);
    }

    #[test]
    fn visit_all_enumerates_in_lexicographical_order() {
        let mut registry = Registry::new();
        for name in ["zebra", "alpha", "beta"] {
            registry
                .define(Flag::new(name, "", ""))
                .expect("names are distinct");
        }

        assert_eq!(names_of_all(&registry), ["alpha", "beta", "zebra"]);
    }

    #[test]
    fn visit_covers_only_canonically_set_flags() {
        let mut registry = Registry::new();
        for name in ["zebra", "alpha", "beta"] {
            registry
                .define(Flag::new(name, "", ""))
                .expect("names are distinct");
        }

        registry.set("zebra", "3").expect("zebra is defined");
        registry.set("beta", "true").expect("beta is defined");

        assert_eq!(names_of_set(&registry), ["beta", "zebra"]);
    }

    #[test]
    fn get_mut_bypasses_set_tracking() {
        let mut registry = Registry::new();
        registry
            .define(Flag::new("output", "-", "Write results to this file"))
            .expect("output is new");

        registry
            .get_mut("output")
            .expect("output is defined")
            .set_value("out.txt");

        assert_eq!(
            registry.get("output").expect("output is defined").value(),
            "out.txt"
        );
        assert!(names_of_set(&registry).is_empty());
    }
}
