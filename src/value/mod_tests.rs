use super::*;

use std::io::Write;

use tempfile::NamedTempFile;

use crate::tokenize::Policy;

fn file_with(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{line}").unwrap();
    }
    file
}

// ==================== Scalars ====================

mod scalars {
    use super::*;

    #[test]
    fn bool_accepts_go_literals() {
        let mut flag = false;
        for raw in ["1", "t", "T", "true", "TRUE", "True"] {
            flag.set(raw).unwrap();
            assert!(flag, "{raw}");
        }
        for raw in ["0", "f", "F", "false", "FALSE", "False"] {
            flag.set(raw).unwrap();
            assert!(!flag, "{raw}");
        }
        assert!(flag.set("yes").unwrap_err().is_malformed());
    }

    #[test]
    fn integers_and_floats() {
        let mut count = 0_i64;
        count.set(" 42 ").unwrap();
        assert_eq!(count, 42);
        assert!(count.set("4x").is_err());

        let mut ratio = 0.0_f64;
        ratio.set("0.25").unwrap();
        assert!((ratio - 0.25).abs() < f64::EPSILON);
        assert_eq!(ratio.to_yaml(), Value::Number(0.25.into()));
    }

    #[test]
    fn string_replaces() {
        let mut name = String::from("a");
        name.set("b").unwrap();
        assert_eq!(name, "b");
        assert_eq!(name.kind(), ValueKind::Single("string"));
    }

    #[test]
    fn duration_value() {
        let mut timeout = Duration::ZERO;
        timeout.set("2d").unwrap();
        assert_eq!(timeout, Duration::from_secs(2 * 86_400));
        timeout.set("2").unwrap();
        assert_eq!(timeout, Duration::from_secs(2));
        assert_eq!(timeout.render(), "2s");
    }

    #[test]
    fn kind_hints() {
        assert_eq!(ValueKind::Bool.hint(), "");
        assert_eq!(ValueKind::List("port").hint(), "port");
        assert_eq!(false.implicit_value(), "true");
    }
}

// ==================== Rate limits ====================

mod rate_limit {
    use super::*;

    #[test]
    fn count_per_unit() {
        let mut limits = RateLimitMap::default();
        limits.set("hackertarget=10/m").unwrap();
        assert_eq!(
            limits.get("hackertarget"),
            Some(&RateLimit {
                max_count: 10,
                duration: Duration::from_secs(60),
            })
        );
    }

    #[test]
    fn day_unit_and_several_entries() {
        let mut limits = RateLimitMap::default();
        limits.set("a=2/d, b=5/s").unwrap();
        assert_eq!(limits.get("a").unwrap().duration, Duration::from_secs(86_400));
        assert_eq!(limits.get("b").unwrap().max_count, 5);
    }

    #[test]
    fn missing_unit_is_malformed() {
        let mut limits = RateLimitMap::default();
        assert!(limits.set("hackertarget=1").unwrap_err().is_malformed());
        assert!(limits.set("hackertarget=1/").unwrap_err().is_malformed());
        assert!(limits.set("hackertarget=").unwrap_err().is_malformed());
    }

    #[test]
    fn bad_entries_are_malformed() {
        let mut limits = RateLimitMap::default();
        assert!(limits.set("hackertarget").unwrap_err().is_malformed());
        assert!(limits.set("=10/s").unwrap_err().is_malformed());
        assert!(limits.set("a=x/s").unwrap_err().is_malformed());
        assert!(limits.set("a=-1/s").unwrap_err().is_malformed());
        assert!(limits.set("a=1/fortnight").unwrap_err().is_malformed());
        assert!(limits.is_empty());
    }

    #[test]
    fn later_entry_overwrites() {
        let mut limits = RateLimitMap::default();
        limits.set("a=1/s").unwrap();
        limits.set("a=3/h").unwrap();
        assert_eq!(limits.as_map().len(), 1);
        assert_eq!(limits.get("a").unwrap().max_count, 3);
    }

    #[test]
    fn render_is_accepted_again() {
        let mut limits = RateLimitMap::default();
        limits.set("a=10/m,b=2/d").unwrap();
        let mut again = RateLimitMap::default();
        again.set(&limits.render()).unwrap();
        assert_eq!(again, limits);
    }

    #[test]
    fn del_removes_key() {
        let mut limits = RateLimitMap::default();
        limits.set("a=1/s").unwrap();
        assert!(limits.del("a").is_some());
        assert!(limits.del("a").is_none());
    }
}

// ==================== Runtime map ====================

mod runtime_map {
    use super::*;

    #[test]
    fn splits_on_first_equals() {
        let mut map = RuntimeMap::default();
        map.set("query=a=b").unwrap();
        map.set("empty=").unwrap();
        assert_eq!(map.get("query"), Some("a=b"));
        assert_eq!(map.get("empty"), Some(""));
    }

    #[test]
    fn reads_pairs_from_file() {
        let file = file_with(&["a=1", "not a pair", "b=2", "=skipped"]);
        let mut map = RuntimeMap::default();
        map.set(file.path().to_str().unwrap()).unwrap();
        assert_eq!(map.as_map().len(), 2);
        assert_eq!(map.get("b"), Some("2"));
    }

    #[test]
    fn rejects_other_input() {
        let mut map = RuntimeMap::default();
        assert!(map.set("no-separator").unwrap_err().is_malformed());
        assert!(map.set("=value").unwrap_err().is_malformed());
        assert!(map.is_empty());
    }

    #[test]
    fn del_and_render() {
        let mut map = RuntimeMap::default();
        map.set("a=1").unwrap();
        map.set("b=2").unwrap();
        assert_eq!(map.render(), r#"{"a"="1", "b"="2"}"#);
        assert_eq!(map.del("a").as_deref(), Some("1"));
        assert_eq!(map.render(), r#"{"b"="2"}"#);
    }
}

// ==================== Severities ====================

mod severity {
    use super::*;

    #[test]
    fn parses_case_insensitively_in_order() {
        let mut severities = Severities::default();
        severities.set(" High, critical ,INFO").unwrap();
        assert_eq!(
            severities.0,
            [Severity::High, Severity::Critical, Severity::Info]
        );
        assert_eq!(severities.render(), "high,critical,info");
    }

    #[test]
    fn unknown_name_is_malformed() {
        let mut severities = Severities::default();
        let err = severities.set("high,urgent").unwrap_err();
        assert!(err.is_malformed());
        assert!(severities.0.is_empty());
    }

    #[test]
    fn severities_are_ordered() {
        assert!(Severity::Info < Severity::Critical);
        assert_eq!("medium".parse::<Severity>().unwrap(), Severity::Medium);
    }

    #[test]
    fn yaml_is_a_sequence() {
        let severities = Severities(vec![Severity::Low]);
        assert_eq!(
            severities.to_yaml(),
            Value::Sequence(vec![Value::String("low".into())])
        );
    }
}

// ==================== String lists ====================

mod string_slice {
    use super::*;

    #[test]
    fn raw_policy_keeps_commas() {
        let mut list = StringSlice::new(Policy::RAW);
        list.set("a,b").unwrap();
        list.set("c").unwrap();
        assert_eq!(list.values(), ["a,b", "c"]);
    }

    #[test]
    fn normalized_policy_splits_and_lowercases() {
        let mut list = StringSlice::new(Policy::NORMALIZED);
        list.set("A,'B,C'").unwrap();
        assert_eq!(list.values(), ["a", "b,c"]);
    }

    #[test]
    fn file_policy_reads_lines() {
        let file = file_with(&["one # first", "", "two"]);
        let mut list = StringSlice::new(Policy::FILE);
        list.set(file.path().to_str().unwrap()).unwrap();
        assert_eq!(list.values(), ["one", "two"]);
    }

    #[test]
    fn reset_and_render() {
        let mut list = StringSlice::new(Policy::COMMA_SEPARATED);
        assert_eq!(list.render(), "[]");
        list.set("x,y").unwrap();
        assert_eq!(list.render(), r#"["x", "y"]"#);
        list.reset();
        assert!(list.is_empty());
    }
}

// ==================== Enumerations ====================

mod enumeration {
    use super::*;

    #[test]
    fn enum_accepts_only_allowed() {
        let mut kind = Enum::new("type1", ["type1", "type2"]);
        kind.set("type2").unwrap();
        assert_eq!(kind.value(), "type2");
        assert!(kind.set("type3").unwrap_err().is_malformed());
        assert_eq!(kind.value(), "type2");
    }

    #[test]
    fn enum_slice_collects() {
        let mut kinds = EnumSlice::new(["type1", "type2"]);
        kinds.set("type1,TYPE2").unwrap();
        assert_eq!(kinds.values(), ["type1", "type2"]);
        assert!(kinds.set("type3").is_err());
        assert_eq!(kinds.values().len(), 2);
    }
}

// ==================== Auth ====================

mod auth {
    use super::*;

    fn fixed_token() -> std::io::Result<String> {
        Ok("from-prompt".to_owned())
    }

    fn broken_terminal() -> std::io::Result<String> {
        Err(std::io::Error::other("no tty"))
    }

    #[test]
    fn explicit_token_is_kept() {
        let mut auth = Auth::with_prompt(fixed_token);
        auth.set("secret").unwrap();
        assert_eq!(auth.token(), "secret");
    }

    #[test]
    fn bool_like_value_prompts() {
        let mut auth = Auth::with_prompt(fixed_token);
        auth.set("true").unwrap();
        assert_eq!(auth.token(), "from-prompt");
        assert_eq!(auth.kind(), ValueKind::Optional("string"));
    }

    #[test]
    fn prompt_failure_is_reported() {
        let mut auth = Auth::with_prompt(broken_terminal);
        assert!(matches!(auth.set("1"), Err(ValueError::Prompt { .. })));
    }

    #[test]
    fn debug_hides_token() {
        let mut auth = Auth::with_prompt(fixed_token);
        auth.set("secret").unwrap();
        assert!(!format!("{auth:?}").contains("secret"));
    }
}

// ==================== Dynamic and callback ====================

mod optional_values {
    use super::*;

    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn dynamic_uses_fallback_when_bare() {
        let mut concurrency = Dynamic::new(0_i64, 25_i64);
        assert_eq!(concurrency.kind(), ValueKind::Optional("int"));
        assert_eq!(concurrency.implicit_value(), "25");
        concurrency.set("100").unwrap();
        assert_eq!(*concurrency.get(), 100);
    }

    #[test]
    fn dynamic_bool_stays_bool() {
        let flag = Dynamic::new(false, true);
        assert_eq!(flag.kind(), ValueKind::Bool);
    }

    #[test]
    fn callback_fires_only_when_enabled() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let mut update = Callback::new(move || counter.set(counter.get() + 1));

        assert!(!update.fire());
        update.set("true").unwrap();
        assert!(update.fire());
        assert_eq!(calls.get(), 1);
        assert!(update.set("maybe").is_err());
    }
}
