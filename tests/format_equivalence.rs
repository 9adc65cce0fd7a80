//! The three formats, inline or from a file, describe the same table.

use redirector::{Format, RedirectSource, RedirectTable};

mod common;

const JSON: &str = r#"[
    {"path": "/a", "url": "https://a.test"},
    {"path": "/b", "url": "https://b.test/page?x=1"},
    {"path": "/a", "url": "https://a2.test"},
    {"path": "/c", "url": ""}
]"#;

const YAML: &str = "\
- path: /a
  url: https://a.test
- path: /b
  url: \"https://b.test/page?x=1\"
- path: /a
  url: https://a2.test
- path: /c
  url: ''
";

const CSV: &str = "/a,https://a.test\n/b,\"https://b.test/page?x=1\"\n /a , https://a2.test\n/c,\n";

fn load(format: Format, source: RedirectSource) -> RedirectTable {
    RedirectTable::load(format, &source)
        .unwrap_or_else(|e| panic!("{} source failed: {}", format, e))
}

fn expected() -> Vec<(&'static str, Option<&'static str>)> {
    vec![
        ("/a", Some("https://a2.test")),
        ("/b", Some("https://b.test/page?x=1")),
        ("/c", None),
        ("/d", None),
    ]
}

#[test]
fn test_inline_sources_are_equivalent() {
    let json = load(Format::Json, RedirectSource::Inline(JSON.to_string()));
    let yaml = load(Format::Yaml, RedirectSource::Inline(YAML.to_string()));
    let csv = load(Format::Csv, RedirectSource::Inline(CSV.to_string()));

    assert_eq!(json, yaml);
    assert_eq!(json, csv);

    for (path, destination) in expected() {
        assert_eq!(json.resolve(path), destination, "path {}", path);
    }
}

#[test]
fn test_file_sources_match_inline_sources() {
    for (format, payload) in [(Format::Json, JSON), (Format::Yaml, YAML), (Format::Csv, CSV)] {
        let file = common::source_file(payload);
        let from_file = load(format, RedirectSource::File(file.path().to_path_buf()));
        let from_inline = load(format, RedirectSource::Inline(payload.to_string()));

        assert_eq!(from_file, from_inline, "format {}", format);
        assert_eq!(from_file.len(), 3);
    }
}

#[test]
fn test_unrecognized_mode_reads_json() {
    let table = load(Format::from_mode("xml"), RedirectSource::Inline(JSON.to_string()));
    assert_eq!(table.resolve("/a"), Some("https://a2.test"));
}
