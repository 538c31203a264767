use super::*;

#[test]
fn memory_store_get_missing_is_none() {
    let store = MemoryStore::new();
    assert_eq!(store.get("nope"), None);
}

#[test]
fn memory_store_set_then_get() {
    let store = MemoryStore::new();
    store.set("theme", "dark");
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
    store.set("theme", "light");
    assert_eq!(store.get("theme").as_deref(), Some("light"));
}

#[test]
fn memory_store_clones_share_entries() {
    let a = MemoryStore::new();
    let b = a.clone();
    a.set("k", "v");
    assert_eq!(b.get("k").as_deref(), Some("v"));
}

#[test]
fn memory_store_clear_drops_everything() {
    let store = MemoryStore::with_entries([("a", "1"), ("b", "2")]);
    store.clear();
    assert_eq!(store.get("a"), None);
    assert_eq!(store.get("b"), None);
}

#[test]
fn rc_store_delegates() {
    let inner = MemoryStore::new();
    let shared: Rc<MemoryStore> = Rc::new(inner.clone());
    shared.set("x", "7");
    assert_eq!(inner.get("x").as_deref(), Some("7"));
}

#[test]
fn read_count_defaults_to_zero() {
    let store = MemoryStore::new();
    assert_eq!(read_count(&store, "cvDownloadCount"), 0);
}

#[test]
fn read_count_non_numeric_is_zero() {
    let store = MemoryStore::with_entries([("n", "abc"), ("neg", "-3"), ("empty", "")]);
    assert_eq!(read_count(&store, "n"), 0);
    assert_eq!(read_count(&store, "neg"), 0);
    assert_eq!(read_count(&store, "empty"), 0);
}

#[test]
fn read_count_parses_decimal_text() {
    let store = MemoryStore::with_entries([("n", "42"), ("padded", " 9 ")]);
    assert_eq!(read_count(&store, "n"), 42);
    assert_eq!(read_count(&store, "padded"), 9);
}

#[test]
fn write_count_stores_decimal_text() {
    let store = MemoryStore::new();
    write_count(&store, "n", 12);
    assert_eq!(store.get("n").as_deref(), Some("12"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn local_storage_is_inert_off_browser() {
    let store = LocalStorage;
    store.set("k", "v");
    assert_eq!(store.get("k"), None);
}
