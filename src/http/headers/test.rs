use super::*;

fn store(pairs: &[(&str, &str)]) -> HeaderStore {
    pairs.iter().copied().collect()
}

#[test]
fn test_normalize() {
    assert_eq!(normalize("Content-Type"), "content-type");
    assert_eq!(normalize("X-REQUEST-ID"), "x-request-id");
    assert_eq!(normalize(" Accept "), " accept ");
}

#[test]
fn test_entry_joined() {
    let mut entry = HeaderEntry::new("Accept", "*/*".to_string());
    assert!(matches!(entry.joined(), Cow::Borrowed("*/*")));

    entry.push(String::new());
    entry.push("image/png".to_string());
    assert_eq!(entry.joined(), "*/*, , image/png");
    assert_eq!(entry.values(), ["*/*", "", "image/png"]);
    assert_eq!(entry.original_name(), "Accept");
}

#[test]
fn test_case_insensitive_lookup() {
    let mut headers = HeaderStore::new();
    headers.append("X-Trace", "a");
    headers.append("x-trace", "b");
    headers.append("X-TRACE", "c");

    for name in ["x-trace", "X-Trace", "X-TRACE", "x-TrAcE"] {
        assert_eq!(headers.get(name).as_deref(), Some("a, b, c"));
        assert!(headers.has(name));
    }
    assert_eq!(headers.len(), 1);
    assert_eq!(headers.raw().keys().collect::<Vec<_>>(), ["X-Trace"]);
}

#[test]
fn test_set_keeps_position_and_rebases_name() {
    let mut headers = store(&[("accept", "*/*"), ("Host", "localhost"), ("accept", "text/html")]);
    assert_eq!(headers.get("accept").as_deref(), Some("*/*, text/html"));

    headers.set("ACCEPT", "image/png");

    assert_eq!(headers.get("accept").as_deref(), Some("image/png"));
    assert_eq!(headers.keys().collect::<Vec<_>>(), ["accept", "host"]);
    assert_eq!(headers.raw().keys().collect::<Vec<_>>(), ["ACCEPT", "Host"]);
}

#[test]
fn test_set_new_header_goes_last() {
    let mut headers = store(&[("accept", "*/*")]);
    headers.set("Content-Type", "application/json");

    assert_eq!(headers.keys().collect::<Vec<_>>(), ["accept", "content-type"]);
    assert_eq!(headers.raw()["Content-Type"], "application/json");
}

#[test]
fn test_append_keeps_original_name() {
    let mut headers = HeaderStore::new();
    headers.append("Accept", "*/*");
    headers.append("ACCEPT", "image/png");

    assert_eq!(headers.raw().get("Accept").map(String::as_str), Some("*/*, image/png"));
    assert!(!headers.raw().contains_key("ACCEPT"));
}

#[test]
fn test_delete_moves_following_headers_up() {
    let mut headers = store(&[("a", "1"), ("b", "2"), ("c", "3")]);
    headers.delete("B");

    assert_eq!(headers.keys().collect::<Vec<_>>(), ["a", "c"]);
    assert_eq!(headers.values().collect::<Vec<_>>(), ["1", "3"]);

    let before = headers.all();
    headers.delete("b");
    assert_eq!(headers.all(), before);
}

#[test]
fn test_delete_then_append_starts_fresh() {
    let mut headers = store(&[("Accept", "*/*"), ("Host", "localhost")]);
    headers.delete("accept");
    headers.append("accept", "text/html");

    assert_eq!(headers.get("Accept").as_deref(), Some("text/html"));
    assert_eq!(headers.raw().keys().collect::<Vec<_>>(), ["Host", "accept"]);
}

#[test]
fn test_iterators_are_consistent() {
    let headers = store(&[("Accept", "*/*"), ("Via", "a"), ("via", "b")]);

    let entries: Vec<_> = headers.entries().collect();
    let keys: Vec<_> = headers.keys().collect();
    let values: Vec<_> = headers.values().collect();

    assert_eq!(entries, headers.iter().collect::<Vec<_>>());
    assert_eq!(keys, ["accept", "via"]);
    assert_eq!(values, ["*/*", "a, b"]);
    assert_eq!(
        entries,
        keys.iter()
            .copied()
            .zip(values.iter().cloned())
            .collect::<Vec<_>>()
    );
}

#[test]
fn test_iterators_restart() {
    let headers = store(&[("a", "1"), ("b", "2")]);
    let mut keys = headers.keys();
    assert_eq!(keys.next(), Some("a"));

    assert_eq!(headers.keys().collect::<Vec<_>>(), ["a", "b"]);
    assert_eq!(keys.next(), Some("b"));
    assert_eq!(keys.next(), None);
    assert_eq!(keys.next(), None);
}

#[test]
fn test_iterator_size_and_reverse() {
    let headers = store(&[("a", "1"), ("b", "2"), ("c", "3")]);
    assert_eq!(headers.iter().len(), 3);
    assert_eq!(headers.keys().rev().collect::<Vec<_>>(), ["c", "b", "a"]);
    assert_eq!(headers.values().next_back().as_deref(), Some("3"));
}

#[test]
fn test_set_cookie_unjoined() {
    let mut headers = HeaderStore::new();
    assert!(headers.get_set_cookie().is_empty());

    headers.append("Set-Cookie", "a=1; Path=/");
    headers.append("set-cookie", "b=2, c");

    assert_eq!(headers.get_set_cookie(), ["a=1; Path=/", "b=2, c"]);
    assert_eq!(headers.get("Set-Cookie").as_deref(), Some("a=1; Path=/, b=2, c"));
    assert_eq!(headers.all()[SET_COOKIE], "a=1; Path=/, b=2, c");

    headers.set("Set-Cookie", "d=4");
    assert_eq!(headers.get_set_cookie(), ["d=4"]);

    headers.delete("SET-COOKIE");
    assert!(headers.get_set_cookie().is_empty());
}

#[test]
fn test_for_each_matches_get() {
    let headers = store(&[("Accept", "*/*"), ("accept", "text/html"), ("User-Agent", "agent")]);
    let mut seen = Vec::new();

    headers.for_each(|value, name, headers| {
        assert_eq!(headers.get(name).as_deref(), Some(value));
        seen.push(name.to_string());
    });

    assert_eq!(seen, ["accept", "user-agent"]);
}

#[test]
fn test_for_each_with_receiver() {
    let headers = store(&[("accept", "*/*"), ("User-Agent", "agent")]);
    let mut seen: std::collections::HashSet<String> = Default::default();

    headers.for_each_with(&mut seen, |seen, value, name, headers| {
        assert_eq!(headers.get(name).as_deref(), Some(value));
        assert!(seen.insert(name.to_string()));
    });

    assert_eq!(seen.len(), 2);
    assert!(seen.contains("user-agent"));
}

#[test]
fn test_fill_missing() {
    let mut headers = store(&[("Server", "custom")]);
    let mut defaults = store(&[("server", "default"), ("X-Frame-Options", "DENY")]);
    defaults.append("Set-Cookie", "a=1");
    defaults.append("Set-Cookie", "b=2");

    headers.fill_missing(&defaults);

    assert_eq!(headers.get("server").as_deref(), Some("custom"));
    assert_eq!(
        headers.raw().keys().collect::<Vec<_>>(),
        ["Server", "X-Frame-Options", "Set-Cookie"]
    );
    assert_eq!(headers.get_set_cookie(), ["a=1", "b=2"]);
}

#[test]
fn test_header_values_join() {
    assert_eq!(HeaderValues::from("a").into_joined(), "a");
    assert_eq!(HeaderValues::from(["a", "b"]).into_joined(), "a, b");
    assert_eq!(HeaderValues::from(Vec::<String>::new()).into_joined(), "");
}

#[test]
fn test_init_shapes() {
    assert_eq!(HeaderInit::from(None::<HeaderStore>), HeaderInit::Empty);
    assert_eq!(HeaderInit::from(None::<HeaderStore>).shape(), "empty");

    let pairs = HeaderInit::from(vec![("Accept", ["a", "b"])]);
    assert_eq!(pairs.clone().into_pairs(), [("Accept".to_string(), "a, b".to_string())]);
    assert_eq!(pairs.shape(), "pairs");

    let source = store(&[("Accept", "a"), ("accept", "b")]);
    let copied = HeaderInit::from(&source);
    assert_eq!(copied.shape(), "store");
    assert_eq!(copied.into_pairs(), [("accept".to_string(), "a, b".to_string())]);
}
