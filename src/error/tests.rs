use super::*;
use crate::filtering::PageFilter;

#[test]
fn test_log() {
    let err = Error::Io(std::io::Error::other("test"));
    let mut buf = Vec::new();
    err.log_to(&mut buf).unwrap();
    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "\u{1b}[1m\u{1b}[91merror:\u{1b}[39m\u{1b}[0m test\n"
    );
}

#[test]
fn test_filter_error() {
    let err: Error = PageFilter::new("a b", "").unwrap_err().into();
    assert_eq!(err.to_string(), "invalid filter: include query: missing operand at column 3");
}

#[test]
fn test_file_read_error() {
    let err = Error::FileRead {
        path: "pages.json".into(),
        source: std::io::Error::from(std::io::ErrorKind::NotFound),
    };
    assert_eq!(
        err.to_string(),
        "failed to read \u{1b}[33m\"pages.json\"\u{1b}[0m: entity not found"
    );
}

#[test]
fn test_missing_option() {
    let err = Error::MissingOption {
        option: "--import",
        required: "--folder",
    };
    assert_eq!(
        err.to_string(),
        "option \u{1b}[33m\"--import\"\u{1b}[0m requires \u{1b}[33m\"--folder\"\u{1b}[0m"
    );
}
