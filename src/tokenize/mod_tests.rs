//! Tests for the tokenizer.

use std::io::Write;

use tempfile::NamedTempFile;

use super::{Policy, tokenize};

fn tokens(input: &str, policy: &Policy) -> Vec<String> {
    tokenize(input, policy).unwrap()
}

mod identity {
    use super::*;

    #[test]
    fn raw_policy_returns_input_unchanged() {
        assert_eq!(tokens(" a, b ,'c' ", &Policy::RAW), [" a, b ,'c' "]);
    }

    #[test]
    fn raw_policy_keeps_empty_input() {
        assert_eq!(tokens("", &Policy::RAW), [""]);
    }
}

mod normalized {
    use super::*;

    #[test]
    fn splits_and_normalizes() {
        let expected = ["aa", "bb", "cc"];
        let cases = [
            "aa,bb,cc",
            "  aa, bb,  cc   ",
            "  `aa`, 'bb',  \"cc\"   ",
            "  `aa`, bb,  \"cc\"   ",
            "  `aa, bb,  cc\"   ",
            "  \"aa\", bb,  cc\"   ",
            "\n  aa, \tbb,  cc\r   ",
        ];
        for case in cases {
            assert_eq!(tokens(case, &Policy::NORMALIZED), expected, "input: {case:?}");
        }
    }

    #[test]
    fn lowercases_values() {
        assert_eq!(
            tokens("\"value1\",VALUE,'value3'", &Policy::NORMALIZED),
            ["value1", "value", "value3"]
        );
    }

    #[test]
    fn drops_empty_tokens_around_paths() {
        let expected = ["/root/home/file0"];
        let cases = [
            "\"/root/home/file0\"",
            "'/root/home/file0'",
            "`/root/home/file0`",
            "\"/root/home/file0\",",
            ",\"/root/home/file0\",",
            ",,\"/root/home/file0\"",
            "\"\",,\"/root/home/file0\"",
            "\" \",\"/root/home/file0\"",
            "\"/root/home/file0\",\"\"",
            "/root/home/file0",
        ];
        for case in cases {
            assert_eq!(tokens(case, &Policy::NORMALIZED), expected, "input: {case:?}");
        }
    }

    #[test]
    fn quoted_commas_do_not_split() {
        assert_eq!(
            tokens("\"/root/home/file4,/root/home/file5\"", &Policy::NORMALIZED),
            ["/root/home/file4,/root/home/file5"]
        );
        assert_eq!(
            tokens(
                "\"c:\\my files\\bug,bounty\",c:\\my_files\\bug bounty",
                &Policy::NORMALIZED
            ),
            ["c:\\my files\\bug,bounty", "c:\\my_files\\bug bounty"]
        );
    }

    #[test]
    fn escaped_quote_is_unescaped() {
        assert_eq!(
            tokens(r#""say \"hi\"",x"#, &Policy::COMMA_SEPARATED),
            ["say \"hi\"", "x"]
        );
    }

    #[test]
    fn duplicates_are_kept_in_order() {
        assert_eq!(tokens("a,a,b", &Policy::NORMALIZED), ["a", "a", "b"]);
    }

    #[test]
    fn unclosed_quote_is_an_error() {
        let cases = [
            "\"/root/home/file0",
            "'/root/home/file0",
            "`/root/home/file0",
            "\"/root/home/file0'",
            "\"/root/home/file0`",
            "\"aa",
        ];
        for case in cases {
            let err = tokenize(case, &Policy::NORMALIZED).unwrap_err();
            assert!(err.is_malformed(), "input: {case:?}");
        }
    }

    #[test]
    fn tokenizing_is_idempotent_on_normalized_output() {
        for policy in [Policy::COMMA_SEPARATED, Policy::NORMALIZED, Policy::NORMALIZED_ORIGINAL] {
            for input in ["aa, bb ,cc", " `X`,'y', z ", "a,,b,a"] {
                let first = tokens(input, &policy);
                let second = tokens(&first.join(","), &policy);
                assert_eq!(first, second, "input: {input:?}");
            }
        }
    }
}

mod original_case {
    use super::*;

    #[test]
    fn keeps_case_and_strips_quotes() {
        assert_eq!(
            tokens("/Users/Home/Test/test.yaml", &Policy::NORMALIZED_ORIGINAL),
            ["/Users/Home/Test/test.yaml"]
        );
        assert_eq!(tokens("'test user'", &Policy::NORMALIZED_ORIGINAL), ["test user"]);
    }

    #[test]
    fn file_normalized_lowercases_when_not_a_file() {
        assert_eq!(
            tokens("/Users/Home/Test/test.yaml", &Policy::FILE_NORMALIZED),
            ["/users/home/test/test.yaml"]
        );
        assert_eq!(tokens("'Test User'", &Policy::FILE_NORMALIZED), ["test user"]);
    }

    #[test]
    fn file_normalized_original_keeps_case() {
        assert_eq!(
            tokens("'Test User'", &Policy::FILE_NORMALIZED_ORIGINAL),
            ["Test User"]
        );
    }
}

mod from_file {
    use super::*;

    fn temp_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn reads_one_token_per_line() {
        let file = temp_file("value1,value2\nvalue3\n");
        let path = file.path().to_str().unwrap();

        assert_eq!(tokens(path, &Policy::FILE), ["value1,value2", "value3"]);
    }

    #[test]
    fn file_lines_are_normalized_and_filtered() {
        let file = temp_file("  Alpha  \n\n# comment\nbeta # trailing\n");
        let path = file.path().to_str().unwrap();

        assert_eq!(tokens(path, &Policy::FILE_NORMALIZED), ["alpha", "beta"]);
    }

    #[test]
    fn raw_value_is_kept_whole_when_not_a_file() {
        let input = "string:\"contains, comma and quotes.\"";
        assert_eq!(tokens(input, &Policy::FILE), [input]);
    }

    #[test]
    fn comma_separated_file_policy_splits_plain_values() {
        assert_eq!(
            tokens("a.txt,b.txt", &Policy::FILE_COMMA_SEPARATED),
            ["a.txt", "b.txt"]
        );
    }
}
