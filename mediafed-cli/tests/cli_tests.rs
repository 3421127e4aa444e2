use mediafed_cli::{
    IdDescription, describe_id, read_input, rewrite_request, rewrite_response, summarize,
};
use mediafed_config::{FederationConfig, from_toml_str};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use std::io::Write;

fn config() -> FederationConfig {
    from_toml_str(
        r#"
server_id = "proxy-id"
server_name = "Family"

[[backend]]
prefix = "s1"
name = "Home"
url = "http://home:8096"

[limits]
max_body_bytes = 4096
"#,
    )
    .unwrap()
}

fn parse(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).unwrap()
}

#[test]
fn response_uses_configured_server_id() {
    let body = br#"{"Id":"a","ServerId":"backend"}"#;
    let out = rewrite_response(&config(), "s1", body, false).unwrap();
    assert_eq!(parse(&out), json!({"Id": "s1_a", "ServerId": "proxy-id"}));
}

#[test]
fn response_with_provenance() {
    let out = rewrite_response(&config(), "s1", br#"{"Id":"a"}"#, true).unwrap();
    assert_eq!(
        parse(&out),
        json!({
            "Id": "s1_a",
            "BackendId": "s1",
            "BackendName": "Home",
            "BackendUrl": "http://home:8096",
        })
    );
}

#[test]
fn response_unknown_prefix_fails() {
    let err = rewrite_response(&config(), "s7", b"{}", false).unwrap_err();
    assert!(err.to_string().contains("s7"));
}

#[test]
fn oversized_body_rejected() {
    let body = vec![b' '; 5000];
    assert!(rewrite_request(&config(), &body).is_err());
}

#[test]
fn request_strips_prefixes() {
    let out = rewrite_request(&config(), br#"{"ItemId":"s1_abc"}"#).unwrap();
    assert_eq!(parse(&out), json!({"ItemId": "abc"}));
}

#[test]
fn malformed_request_reports_context() {
    let err = rewrite_request(&config(), b"{").unwrap_err();
    assert!(err.to_string().contains("could not be rewritten"));
}

#[test]
fn describe_proxy_id_with_backend_name() {
    let config = config();
    assert_eq!(
        describe_id("s1_abc", Some(&config)),
        IdDescription::Proxy {
            prefix: "s1".into(),
            backend_id: "abc".into(),
            backend_name: Some("Home".into()),
        }
    );
}

#[test]
fn describe_merged_and_unmanaged() {
    assert_eq!(
        describe_id("merged_movies", None),
        IdDescription::Merged {
            collection_type: "movies".into()
        }
    );
    assert_eq!(
        describe_id("plain", None),
        IdDescription::Unmanaged {
            value: "plain".into()
        }
    );
}

#[test]
fn description_serializes_with_kind_tag() {
    let value = serde_json::to_value(describe_id("s2_x", None)).unwrap();
    assert_eq!(value, json!({"kind": "proxy", "prefix": "s2", "backend_id": "x"}));
}

#[test]
fn summary_lists_backends() {
    let summary = summarize(&config());
    assert!(summary.contains("Family (proxy-id)"));
    assert!(summary.contains("s1"));
    assert!(summary.contains("http://home:8096"));
}

#[test]
fn read_input_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"{\"Id\":\"a\"}").unwrap();
    assert_eq!(read_input(Some(file.path())).unwrap(), b"{\"Id\":\"a\"}");
}
