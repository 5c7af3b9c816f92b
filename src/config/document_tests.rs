//! Tests for document loading and value extraction.

use super::*;

use tempfile::tempdir;

mod parsing {
    use super::*;

    #[test]
    fn flat_mapping() {
        let mapping = parse("name: value\nthreads: 25\nsilent: true\n").unwrap();
        assert_eq!(mapping.len(), 3);
        assert_eq!(lookup(&mapping, &["name"]), Some(&Value::String("value".into())));
    }

    #[test]
    fn comment_only_document_is_empty() {
        let mapping = parse("# tool config file\n# generated by flagstack\n\n#name: x\n").unwrap();
        assert!(mapping.is_empty());
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn non_mapping_root_is_rejected() {
        assert!(parse("- a\n- b\n").is_err());
        assert!(parse("just text").is_err());
    }

    #[test]
    fn invalid_syntax_is_rejected() {
        assert!(parse("key: [unclosed").is_err());
    }
}

mod values {
    use super::*;

    #[test]
    fn scalars_become_one_string() {
        let mapping = parse("s: text\nb: false\nn: 42\nf: 0.5\n").unwrap();
        assert_eq!(raw_values(&mapping["s"]), ["text"]);
        assert_eq!(raw_values(&mapping["b"]), ["false"]);
        assert_eq!(raw_values(&mapping["n"]), ["42"]);
        assert_eq!(raw_values(&mapping["f"]), ["0.5"]);
    }

    #[test]
    fn sequences_keep_order() {
        let mapping = parse("list:\n  - b\n  - a\n  - 3\n  - [nested]\n").unwrap();
        assert_eq!(raw_values(&mapping["list"]), ["b", "a", "3"]);
    }

    #[test]
    fn null_gives_nothing() {
        let mapping = parse("empty:\n").unwrap();
        assert!(raw_values(&mapping["empty"]).is_empty());
    }

    #[test]
    fn lookup_tries_keys_in_order() {
        let mapping = parse("t: short\n").unwrap();
        assert_eq!(lookup(&mapping, &["target", "t"]), Some(&Value::String("short".into())));
        assert_eq!(lookup(&mapping, &["other"]), None);
    }
}

mod files {
    use super::*;

    #[test]
    fn write_creates_parents_and_load_reads_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a").join("b").join("config.yaml");

        let mut mapping = Mapping::new();
        mapping.insert("name".into(), "value".into());
        write(&path, &encode(&mapping).unwrap()).unwrap();

        assert_eq!(load(&path).unwrap(), mapping);
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = tempdir().unwrap();
        let err = load(&dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(!err.is_decode());
    }

    #[test]
    fn garbage_is_decode_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "- not\n- a mapping\n").unwrap();
        assert!(load(&path).unwrap_err().is_decode());
    }
}
