use rstest::rstest;

use super::*;

fn pages() -> Vec<Page> {
    vec![
        Page {
            file_path: "/cache/cards_p1.png".into(),
            pdf_path: "/scans/cards.pdf".into(),
            page_index: 0,
            scanned_text: "Hero".into(),
            ..Default::default()
        },
        Page {
            file_path: "/cache/promo_p4.png".into(),
            pdf_path: "".into(),
            page_index: 3,
            ..Default::default()
        },
    ]
}

#[test]
fn test_list() {
    let pages = pages();
    let refs: Vec<_> = pages.iter().collect();
    let mut buf = Vec::new();
    OutputFormat::List.write(&mut buf, &refs).unwrap();
    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "cards.pdf\t1\t/cache/cards_p1.png\n\t4\t/cache/promo_p4.png\n"
    );
}

#[test]
fn test_json() {
    let pages = pages();
    let refs: Vec<_> = pages.iter().collect();
    let mut buf = Vec::new();
    OutputFormat::Json.write(&mut buf, &refs).unwrap();
    let parsed: Vec<Page> = json::from_slice(&buf).unwrap();
    assert_eq!(parsed, pages);
    assert!(buf.ends_with(b"]\n"));
}

#[test]
fn test_empty() {
    let mut buf = Vec::new();
    OutputFormat::List.write(&mut buf, &[]).unwrap();
    assert!(buf.is_empty());

    OutputFormat::Json.write(&mut buf, &[]).unwrap();
    assert_eq!(buf, b"[]\n");
}

#[rstest]
#[case(OutputFormat::List, "list")]
#[case(OutputFormat::Json, "json")]
fn test_names(#[case] format: OutputFormat, #[case] name: &str) {
    assert_eq!(format.to_string(), name);
    assert_eq!(OutputFormat::from_str(name, false), Ok(format));
    assert_eq!(json::from_str::<OutputFormat>(&format!("{name:?}")).unwrap(), format);
}

/// Accepts `lines` newline-terminated lines, then fails every write with `kind`.
struct ClosingWriter {
    buf: Vec<u8>,
    lines: usize,
    kind: io::ErrorKind,
}

impl ClosingWriter {
    fn new(lines: usize, kind: io::ErrorKind) -> Self {
        Self { buf: Vec::new(), lines, kind }
    }
}

impl Write for ClosingWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        if self.buf.iter().filter(|&&b| b == b'\n').count() >= self.lines {
            return Err(self.kind.into());
        }
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[rstest]
#[case(OutputFormat::List)]
#[case(OutputFormat::Json)]
fn test_write_until_closed(#[case] format: OutputFormat) {
    let pages = pages();
    let refs: Vec<_> = pages.iter().collect();

    let mut out = ClosingWriter::new(1, io::ErrorKind::BrokenPipe);
    assert!(!format.write_until_closed(&mut out, &refs).unwrap());
    assert!(out.buf.ends_with(b"\n"));
    assert!(format.write(&mut ClosingWriter::new(1, io::ErrorKind::BrokenPipe), &refs).is_err());

    let mut out = ClosingWriter::new(usize::MAX, io::ErrorKind::BrokenPipe);
    assert!(format.write_until_closed(&mut out, &refs).unwrap());
}

#[test]
fn test_write_until_closed_keeps_other_errors() {
    let pages = pages();
    let refs: Vec<_> = pages.iter().collect();

    let mut out = ClosingWriter::new(1, io::ErrorKind::PermissionDenied);
    let err = OutputFormat::List.write_until_closed(&mut out, &refs).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
    assert_eq!(out.buf, b"cards.pdf\t1\t/cache/cards_p1.png\n");
}
