use mediafed_rewrite::{BackendInfo, FieldRegistry, TreeRewriter};
use pretty_assertions::assert_eq;
use serde_json::json;

fn mark(id: &str) -> String {
    format!("<{id}>")
}

#[test]
fn transforms_item_id_strings() {
    let mut doc = json!({"Id": "a", "SeasonId": "b", "Name": "c"});
    TreeRewriter::new(mark).rewrite(&mut doc);
    assert_eq!(doc, json!({"Id": "<a>", "SeasonId": "<b>", "Name": "c"}));
}

#[test]
fn skips_non_string_and_empty_ids() {
    let mut doc = json!({
        "Id": "",
        "ParentId": null,
        "SeriesId": 42,
        "ItemId": false,
    });
    let expected = doc.clone();
    TreeRewriter::new(mark).rewrite(&mut doc);
    assert_eq!(doc, expected);
}

#[test]
fn registered_keys_are_not_containers() {
    let mut doc = json!({
        "ItemId": {"Id": "inner"},
        "ParentId": [{"Id": "inner"}],
        "Other": {"Id": "inner"},
    });
    TreeRewriter::new(mark).rewrite(&mut doc);
    assert_eq!(
        doc,
        json!({
            "ItemId": {"Id": "inner"},
            "ParentId": [{"Id": "inner"}],
            "Other": {"Id": "<inner>"},
        })
    );
}

#[test]
fn server_identity_replaced_unconditionally() {
    let mut doc = json!([
        {"ServerId": "backend"},
        {"ServerId": null},
        {"ServerId": {"nested": true}},
    ]);
    TreeRewriter::new(mark)
        .replace_server_id("proxy")
        .rewrite(&mut doc);
    assert_eq!(
        doc,
        json!([{"ServerId": "proxy"}, {"ServerId": "proxy"}, {"ServerId": "proxy"}])
    );
}

#[test]
fn server_identity_untouched_without_replacement() {
    let mut doc = json!({"ServerId": {"Id": "x"}});
    TreeRewriter::new(mark).rewrite(&mut doc);
    assert_eq!(doc, json!({"ServerId": {"Id": "x"}}));
}

#[test]
fn arrays_of_arrays_are_walked() {
    let mut doc = json!([[{"Id": "a"}], [], [1, "Id", null]]);
    TreeRewriter::new(mark).rewrite(&mut doc);
    assert_eq!(doc, json!([[{"Id": "<a>"}], [], [1, "Id", null]]));
}

#[test]
fn provenance_only_on_objects_with_id() {
    let backend = BackendInfo::new("b1", "Home", "http://h");
    let mut doc = json!({
        "Items": [{"Id": "a"}, {"Name": "no id"}],
        "TotalRecordCount": 2,
    });
    TreeRewriter::new(mark)
        .inject_backend(Some(&backend))
        .rewrite(&mut doc);
    assert_eq!(
        doc,
        json!({
            "Items": [
                {"Id": "<a>", "BackendId": "b1", "BackendName": "Home", "BackendUrl": "http://h"},
                {"Name": "no id"},
            ],
            "TotalRecordCount": 2,
        })
    );
}

#[test]
fn provenance_applies_even_when_id_is_null() {
    let backend = BackendInfo::new("b1", "Home", "http://h");
    let mut doc = json!({"Id": null});
    TreeRewriter::new(mark)
        .inject_backend(Some(&backend))
        .rewrite(&mut doc);
    assert_eq!(doc["BackendId"], "b1");
    assert_eq!(doc["Id"], json!(null));
}

#[test]
fn injected_keys_are_appended_last() {
    let backend = BackendInfo::new("b1", "Home", "http://h");
    let mut doc = json!({"Id": "a", "Name": "n"});
    TreeRewriter::new(mark)
        .inject_backend(Some(&backend))
        .rewrite(&mut doc);
    let keys: Vec<_> = doc.as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys, ["Id", "Name", "BackendId", "BackendName", "BackendUrl"]);
}

#[test]
fn custom_registry() {
    static ITEM: &[&str] = &["Key"];
    static SERVER: &[&str] = &["Host"];
    let registry = FieldRegistry::new(ITEM, SERVER);
    let mut doc = json!({"Key": "k", "Id": "untouched", "Host": "h"});
    TreeRewriter::new(mark)
        .with_registry(&registry)
        .replace_server_id("proxy")
        .rewrite(&mut doc);
    assert_eq!(doc, json!({"Key": "<k>", "Id": "untouched", "Host": "proxy"}));
}
