// tests/output.rs
//
// Rendering rows and slug lists for the terminal / pipes.
//
use csp_lookup::output::{write_rows, write_slugs, Format};
use csp_lookup::specs::support::SupportRow;

fn rows() -> Vec<SupportRow> {
    vec![
        SupportRow {
            policy: "Update/AllowAutoUpdate".into(),
            edition: "Pro".into(),
            windows10: "Yes, starting in Windows 10 build 1607".into(),
            windows11: "Yes".into(),
        },
        SupportRow {
            policy: "Update/AllowAutoUpdate".into(),
            edition: "Windows SE".into(),
            windows10: "No".into(),
            windows11: "Yes".into(),
        },
    ]
}

fn render(format: Format) -> String {
    let mut buf = Vec::new();
    write_rows(&mut buf, &rows(), format).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn table_columns_line_up() {
    let text = render(Format::Table);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("Policy"));
    assert!(lines[1].starts_with("------"));
    // "Edition" column starts at the same offset on every line
    let col = lines[0].find("Edition").unwrap();
    assert_eq!(&lines[2][col..col + 3], "Pro");
    assert_eq!(&lines[3][col..col + 10], "Windows SE");
}

#[test]
fn empty_table_prints_nothing() {
    let mut buf = Vec::new();
    write_rows(&mut buf, &[], Format::Table).unwrap();
    assert!(buf.is_empty());
}

#[test]
fn csv_has_header_and_quotes() {
    let text = render(Format::Csv);
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("Policy,Edition,Windows10,Windows11"));
    assert_eq!(
        lines.next(),
        Some("Update/AllowAutoUpdate,Pro,\"Yes, starting in Windows 10 build 1607\",Yes")
    );
}

#[test]
fn json_uses_column_names() {
    let v: serde_json::Value = serde_json::from_str(&render(Format::Json)).unwrap();
    assert_eq!(v[1]["Edition"], "Windows SE");
    assert_eq!(v[0]["Windows10"], "Yes, starting in Windows 10 build 1607");
}

#[test]
fn slugs_one_per_line() {
    let mut buf = Vec::new();
    write_slugs(&mut buf, &["policy-csp-a".into(), "policy-csp-b".into()], Format::Tsv).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), "policy-csp-a\npolicy-csp-b\n");
}
