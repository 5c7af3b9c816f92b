use super::*;

use crate::tokenize::Policy;
use crate::value::{FlagValue, Port, StringSlice};

fn string(long: &str, short: &str, default: &str) -> Descriptor {
    Descriptor::new(long, short, format!("{long} usage"), Box::new(default.to_owned()))
}

mod insert {
    use super::*;

    #[test]
    fn long_and_short_share_one_descriptor() {
        let mut registry = Registry::new();
        let id = registry.insert(string("name", "n", "x")).unwrap();
        assert_eq!(registry.lookup("name"), Some(id));
        assert_eq!(registry.lookup("n"), Some(id));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn no_name_is_missing_binding() {
        let mut registry = Registry::new();
        let err = registry.insert(string("", "", "x")).unwrap_err();
        assert!(matches!(err, FlagError::MissingBinding { .. }));
    }

    #[test]
    fn short_only_becomes_long() {
        let mut registry = Registry::new();
        let id = registry.insert(string("", "v", "x")).unwrap();
        assert_eq!(registry.get(id).long(), "v");
        assert_eq!(registry.get(id).short(), None);
    }

    #[test]
    fn duplicate_name_is_redefined() {
        let mut registry = Registry::new();
        registry.insert(string("name", "n", "x")).unwrap();
        let err = registry.insert(string("other", "n", "x")).unwrap_err();
        assert!(matches!(err, FlagError::Redefined { ref name } if name == "n"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn help_names_are_reserved() {
        let mut registry = Registry::new();
        assert!(registry.insert(string("help", "", "x")).is_err());
        assert!(registry.insert(string("hosts", "h", "x")).is_err());
        assert!(registry.is_empty());
    }

    #[test]
    fn same_long_and_short_is_redefined() {
        let mut registry = Registry::new();
        assert!(registry.insert(string("v", "v", "x")).is_err());
    }
}

mod lookup {
    use super::*;

    #[test]
    fn find_folds_case_by_default() {
        let mut registry = Registry::new();
        registry.insert(string("Target", "T", "x")).unwrap();
        assert_eq!(registry.find("target").unwrap().long(), "Target");
        assert!(registry.lookup("target").is_none());
    }

    #[test]
    fn find_is_exact_when_case_sensitive() {
        let mut registry = Registry::new();
        registry.set_case_sensitive(true);
        registry.insert(string("Target", "", "x")).unwrap();
        assert!(registry.find("target").is_none());
        assert!(registry.find("Target").is_some());
    }

    #[test]
    fn search_matches_substrings() {
        let mut registry = Registry::new();
        registry.insert(string("rate-limit", "rl", "x")).unwrap();
        registry.insert(string("rate-limit-minute", "rlm", "x")).unwrap();
        registry.insert(string("timeout", "", "x")).unwrap();
        assert_eq!(registry.search("RATE"), ["rate-limit", "rate-limit-minute"]);
        assert_eq!(registry.search("rl"), ["rl", "rlm"]);
        assert!(registry.search("zzz").is_empty());
    }
}

mod order_and_dedup {
    use super::*;

    #[test]
    fn iteration_follows_registration() {
        let mut registry = Registry::new();
        for name in ["zeta", "alpha", "mid"] {
            registry.insert(string(name, "", "x")).unwrap();
        }
        let longs: Vec<&str> = registry.iter().map(Descriptor::long).collect();
        assert_eq!(longs, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn unique_shows_alias_pairs_once() {
        let mut registry = Registry::new();
        registry.insert(string("name", "n", "x")).unwrap();
        registry.insert(string("port", "p", "80")).unwrap();
        let unique: Vec<&str> = registry.unique().into_iter().map(Descriptor::long).collect();
        assert_eq!(unique, ["name", "port"]);
    }

    #[test]
    fn identity_depends_on_visible_fields() {
        let a = string("name", "n", "x");
        let b = string("name", "n", "x");
        let c = string("name", "n", "y");
        assert_eq!(a.identity(), b.identity());
        assert_ne!(a.identity(), c.identity());
    }
}

mod descriptor {
    use super::*;

    #[test]
    fn first_apply_replaces_list_default() {
        let mut list = StringSlice::new(Policy::COMMA_SEPARATED);
        list.set("a,b").unwrap();
        let mut descriptor = Descriptor::new("list", "", "", Box::new(list));
        assert_eq!(descriptor.default_value(), r#"["a", "b"]"#);

        descriptor.apply("c", Source::CommandLine).unwrap();
        descriptor.apply("d", Source::CommandLine).unwrap();
        let list = descriptor.downcast_ref::<StringSlice>().unwrap();
        assert_eq!(list.values(), ["c", "d"]);
        assert_eq!(descriptor.source(), Source::CommandLine);
        assert!(!descriptor.is_default());
    }

    #[test]
    fn failed_apply_keeps_source() {
        let mut descriptor = Descriptor::new("ports", "", "", Box::new(Port::default()));
        assert!(descriptor.apply("nope", Source::CommandLine).is_err());
        assert_eq!(descriptor.source(), Source::Default);
    }

    #[test]
    fn seed_rebases_default() {
        let mut descriptor = string("token", "", "");
        descriptor.seed("TOKEN", "abc").unwrap();
        assert_eq!(descriptor.default_value(), "abc");
        assert_eq!(descriptor.env(), Some("TOKEN"));
        assert_eq!(descriptor.source(), Source::Environment);
        assert!(descriptor.is_default());
    }

    #[test]
    fn default_comparison_ignores_case() {
        let mut descriptor = string("mode", "", "Fast");
        descriptor.apply("FAST", Source::Document).unwrap();
        assert!(descriptor.is_default());
    }

    #[test]
    fn downcast_to_wrong_type_is_none() {
        let descriptor = string("name", "", "x");
        assert!(descriptor.downcast_ref::<Port>().is_none());
        assert_eq!(descriptor.downcast_ref::<String>().map(String::as_str), Some("x"));
    }
}

mod groups {
    use super::*;

    #[test]
    fn later_assignment_wins() {
        let mut registry = Registry::new();
        let id = registry.insert(string("name", "", "x")).unwrap();
        registry.set_group("input", "Input");
        registry.set_group("output", "Output");
        registry.assign(id, "input");
        registry.assign(id, "output");
        assert_eq!(registry.get(id).group(), Some("output"));
    }

    #[test]
    fn set_group_updates_description_in_place() {
        let mut registry = Registry::new();
        registry.set_group("input", "Input");
        registry.set_group("output", "Output");
        registry.set_group("input", "Targets");
        assert_eq!(registry.groups().len(), 2);
        assert_eq!(registry.groups()[0].description, "Targets");
    }

    #[test]
    fn group_query_matches_name_or_description() {
        let mut registry = Registry::new();
        registry.set_group("rate", "Rate-Limit");
        assert!(registry.find_group("RATE").is_some());
        assert!(registry.find_group("rate-limit").is_some());
        assert!(registry.find_group("other").is_none());
    }
}
