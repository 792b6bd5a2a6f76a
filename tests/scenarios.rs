//! End-to-end tests for the reader: the full parse-then-query flow,
//! including construction from an actual file on disk.

use std::fs;
use std::path::PathBuf;

use inicfg::{ErrorKind, IniReader};


/// Writes `contents` to a uniquely named file in the system temp
/// directory and returns its path.
fn write_temp_file(test_name: &str, contents: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("inicfg-test-{}-{}.ini", test_name, std::process::id()));

    fs::write(&path, contents).expect("failed to write temporary test file");

    path
}

fn error_kind(reader: &IniReader) -> Option<ErrorKind> {
    reader.error().map(|error| error.kind())
}


#[test]
fn well_formed_file_parses_successfully() {
    let path = write_temp_file(
        "well-formed",
        "; sample configuration\n\
         [server]\n\
         host = localhost\n\
         port = 8080\n\
         \n\
         [limits]\n\
         timeout = 2.5 ; seconds\n\
         retries = 3\n",
    );

    let reader = IniReader::from_path(&path);
    fs::remove_file(&path).ok();

    assert!(reader.success());
    assert_eq!(reader.error_message(), "No error has occurred.");

    assert_eq!(reader.get_string("server", "host", ""), "localhost");
    assert_eq!(reader.get_int("server", "port", 0), 8080);
    assert!((reader.get_double("limits", "timeout", 0.0) - 2.5).abs() < f64::EPSILON);
    assert_eq!(reader.get_long("limits", "retries", 0), 3);
}

#[test]
fn missing_file_reports_no_such_file() {
    let reader = IniReader::from_path("/definitely/not/a/real/path.ini");

    assert!(!reader.success());
    assert_eq!(error_kind(&reader), Some(ErrorKind::NoSuchFile));
    assert_eq!(reader.error_message(), "File does not exist.");
}

#[test]
fn single_section_lookup() {
    let reader = IniReader::parse_str("[A]\nx = 1\n");

    let names = reader.section_names().iter().cloned().collect::<Vec<_>>();
    assert_eq!(names, vec!["A".to_owned()]);
    assert_eq!(reader.get_int("A", "x", 0), 1);
}

#[test]
fn pair_before_any_section_fails() {
    let reader = IniReader::parse_str("x = 1\n");

    assert!(!reader.success());
    assert_eq!(error_kind(&reader), Some(ErrorKind::KeyOutsideSection));
    assert_eq!(
        reader.error_message(),
        "Key-value pair was found outside a section."
    );
}

#[test]
fn section_left_empty_fails() {
    let reader = IniReader::parse_str("[A]\n[B]\ny=2\n");

    assert!(!reader.success());
    assert_eq!(error_kind(&reader), Some(ErrorKind::EmptySection));
}

#[test]
fn quoted_value_keeps_inline_comment_characters() {
    let reader = IniReader::parse_str("[A]\nname = \"hello ; world\"\n");

    assert_eq!(reader.get_string("A", "name", ""), "hello ; world");
}

#[test]
fn uppercase_yes_parses_as_true() {
    let reader = IniReader::parse_str("[A]\nflag = YES\n");

    assert!(reader.get_bool("A", "flag", false));
}

#[test]
fn empty_unquoted_value_fails() {
    let reader = IniReader::parse_str("[A]\nkey=\n");

    assert!(!reader.success());
    assert_eq!(error_kind(&reader), Some(ErrorKind::NoValueForKey));
}

#[test]
fn unterminated_quoted_value_fails() {
    let reader = IniReader::parse_str("[A]\nkey=\"unterminated\n");

    assert!(!reader.success());
    assert_eq!(error_kind(&reader), Some(ErrorKind::NoClosingQuotation));
}

#[test]
fn reparsing_the_same_file_is_idempotent() {
    let text = "[server]\nhost = localhost\nport = 8080\n[limits]\nretries = 3\n";

    let first = IniReader::parse_str(text);
    let second = IniReader::parse_str(text);

    assert!(first.success());
    assert_eq!(first, second);
}

#[test]
fn fields_render_back_to_key_equals_value() {
    let reader = IniReader::parse_str("[A]\nx=1\ny=two\n");

    let rendered = reader
        .section_fields("A")
        .unwrap()
        .map(|field| field.to_string())
        .collect::<Vec<_>>();

    assert_eq!(rendered, vec!["x=1".to_owned(), "y=two".to_owned()]);
}
