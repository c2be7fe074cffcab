use super::*;
use crate::records::Subscriber;
use crate::testing::ReadOnlyStore;

fn subscriber(name: &str) -> Subscriber {
    Subscriber { name: name.to_owned(), email: format!("{name}@example.com"), ts: "2026-01-01T00:00:00.000Z".into() }
}

// =============================================================
// MemoryStore
// =============================================================

#[test]
fn memory_store_starts_empty() {
    let store = MemoryStore::new();
    assert!(store.is_empty());
    assert_eq!(store.get("theme").expect("get"), None);
}

#[test]
fn memory_store_overwrites_values() {
    let store = MemoryStore::new();
    store.set("theme", "light").expect("set");
    store.set("theme", "dark").expect("set");
    assert_eq!(store.get("theme").expect("get").as_deref(), Some("dark"));
    assert_eq!(store.len(), 1);
}

#[test]
fn rc_store_shares_state_between_handles() {
    let store: Rc<dyn KeyValueStore> = Rc::new(MemoryStore::new());
    let other = Rc::clone(&store);
    store.set("analyticsConsent", "granted").expect("set");
    assert_eq!(other.get("analyticsConsent").expect("get").as_deref(), Some("granted"));
}

// =============================================================
// load_records / append_record
// =============================================================

#[test]
fn absent_or_blank_list_loads_as_empty() {
    let store = MemoryStore::new();
    assert!(load_records::<Subscriber>(&store, "subscribers").expect("load").is_empty());
    store.set("subscribers", "").expect("set");
    assert!(load_records::<Subscriber>(&store, "subscribers").expect("load").is_empty());
}

#[test]
fn append_preserves_order_and_reports_length() {
    let store = MemoryStore::new();
    assert_eq!(append_record(&store, "subscribers", subscriber("ada")).expect("append"), 1);
    assert_eq!(append_record(&store, "subscribers", subscriber("ada")).expect("append"), 2);
    assert_eq!(append_record(&store, "subscribers", subscriber("grace")).expect("append"), 3);

    let names: Vec<String> = load_records::<Subscriber>(&store, "subscribers")
        .expect("load")
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert_eq!(names, ["ada", "ada", "grace"]);
}

#[test]
fn appended_list_is_a_plain_json_array() {
    let store = MemoryStore::new();
    append_record(&store, "subscribers", subscriber("ada")).expect("append");
    let raw = store.get("subscribers").expect("get").expect("present");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("json");
    assert_eq!(
        value,
        serde_json::json!([{ "name": "ada", "email": "ada@example.com", "ts": "2026-01-01T00:00:00.000Z" }])
    );
}

#[test]
fn corrupt_list_is_reported_and_left_untouched() {
    let store = MemoryStore::new();
    store.set("subscribers", "{not json").expect("set");
    let err = append_record(&store, "subscribers", subscriber("ada")).expect_err("corrupt");
    assert!(matches!(err, StoreError::Corrupt { ref key, .. } if key == "subscribers"));
    assert_eq!(store.get("subscribers").expect("get").as_deref(), Some("{not json"));
}

#[test]
fn list_of_wrong_shape_is_corrupt() {
    let store = MemoryStore::new();
    store.set("subscribers", r#"[{"subject":"hi"}]"#).expect("set");
    let err = load_records::<Subscriber>(&store, "subscribers").expect_err("wrong shape");
    assert!(matches!(err, StoreError::Corrupt { .. }));
}

#[test]
fn backend_write_failure_propagates() {
    let store = ReadOnlyStore::default();
    let err = append_record(&store, "subscribers", subscriber("ada")).expect_err("read only");
    assert!(matches!(err, StoreError::Backend(_)));
    assert!(store.inner.is_empty());
}
