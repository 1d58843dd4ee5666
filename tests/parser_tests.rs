use keydiff_rs::{parse_content, parse_file, parse_json, parse_toml, parse_yaml};
use keydiff_rs::{FormatHint, Node, ParseError};
use std::io::Write;
use std::path::Path;
use tempfile::Builder;

fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

#[test]
fn test_parse_json_nested() {
    let node = parse_json(r#"{"menu": {"open": "Open", "recent": ["a", "b"]}}"#).unwrap();
    match node {
        Node::Object(map) => match map.get("menu").unwrap() {
            Node::Object(menu) => {
                assert_eq!(menu.get("open").unwrap(), &Node::String("Open".to_string()));
                assert!(matches!(menu.get("recent").unwrap(), Node::Array(items) if items.len() == 2));
            }
            _ => panic!("Expected menu to be object"),
        },
        _ => panic!("Expected object"),
    }
}

#[test]
fn test_parse_json_invalid() {
    assert!(parse_json("{invalid json}").is_err());
    assert!(parse_json(r#"{"a": 1,}"#).is_err());
}

#[test]
fn test_parse_yaml_nested() {
    let node = parse_yaml("menu:\n  open: Abrir\n  save: Guardar").unwrap();
    match node {
        Node::Object(map) => {
            assert!(matches!(map.get("menu").unwrap(), Node::Object(menu) if menu.len() == 2));
        }
        _ => panic!("Expected object"),
    }
}

#[test]
fn test_parse_yaml_invalid() {
    assert!(parse_yaml("key: value: invalid").is_err());
    assert!(parse_yaml("[1, 2,").is_err());
}

#[test]
fn test_parse_toml_tables() {
    let node = parse_toml("greeting = \"Hallo\"\n\n[menu]\nopen = \"Öffnen\"\n").unwrap();
    match node {
        Node::Object(map) => {
            assert_eq!(
                map.get("greeting").unwrap(),
                &Node::String("Hallo".to_string())
            );
            assert!(matches!(map.get("menu").unwrap(), Node::Object(_)));
        }
        _ => panic!("Expected object"),
    }
}

#[test]
fn test_parse_toml_invalid() {
    assert!(parse_toml("[menu\nopen = 1").is_err());
}

#[test]
fn test_parse_file_by_extension() {
    let json = write_temp(".json", r#"{"a": {"b": 1}}"#);
    let yaml = write_temp(".yml", "a:\n  b: 1\n");
    let toml = write_temp(".toml", "[a]\nb = 1\n");

    let from_json = parse_file(json.path()).unwrap();
    let from_yaml = parse_file(yaml.path()).unwrap();
    let from_toml = parse_file(toml.path()).unwrap();

    assert_eq!(from_json, from_yaml);
    assert_eq!(from_json, from_toml);
}

#[test]
fn test_parse_file_unknown_extension_falls_back() {
    let file = write_temp(".txt", r#"{"key": "value"}"#);
    let doc = parse_file(file.path()).unwrap();
    assert_eq!(
        doc.root().get("key").unwrap(),
        &Node::String("value".to_string())
    );
}

#[test]
fn test_parse_file_not_found() {
    let result = parse_file(Path::new("/nonexistent/fr.json"));
    assert!(matches!(result, Err(ParseError::FileNotFound { .. })));
}

#[test]
fn test_parse_file_malformed_json() {
    let file = write_temp(".json", "{\"menu\": {");
    assert!(matches!(
        parse_file(file.path()),
        Err(ParseError::JsonError { .. })
    ));
}

#[test]
fn test_parse_file_non_utf8_is_read_error() {
    let mut file = Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(&[0xff, 0xfe, 0x00, 0x7b]).unwrap();
    assert!(matches!(
        parse_file(file.path()),
        Err(ParseError::ReadError { .. })
    ));
}

#[test]
fn test_parse_content_scalar_root() {
    match parse_content("42", FormatHint::Json, "mem") {
        Err(ParseError::NotAnObject { found, .. }) => assert_eq!(found, "number"),
        other => panic!("Expected NotAnObject, got {:?}", other),
    }
}
