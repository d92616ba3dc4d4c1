use resolvent_engine::{ErrorClassification, ErrorRecord, Extensions, FetchedValue, FieldPath, SourceLocation};
use serde_json::{Value, json};

fn sample() -> FetchedValue {
    let mut extensions = Extensions::new();
    extensions.insert("traceId".into(), json!("t-99"));
    extensions.insert("cacheHit".into(), json!(false));

    FetchedValue::builder()
        .fetched_value(json!({ "name": "Frodo" }))
        .raw_fetched_value(json!({ "data": { "name": "Frodo" } }))
        .local_context(json!({ "tenant": "shire" }))
        .errors(vec![
            ErrorRecord::builder()
                .message("friends timed out")
                .location(SourceLocation::new(3, 5))
                .path(FieldPath::root().field("hero").field("friends"))
                .classification(ErrorClassification::DataFetchingException)
                .build(),
        ])
        .extensions(Some(extensions))
        .build()
}

#[test]
fn to_builder_round_trip_is_field_for_field_equal() {
    let existing = sample();
    let rebuilt = existing.to_builder().build();

    assert_eq!(rebuilt, existing);

    // The copies must be independently mutable.
    let mut rebuilt_errors = rebuilt.errors();
    rebuilt_errors.clear();
    assert_eq!(existing.errors().len(), 1);
    assert_eq!(rebuilt.errors().len(), 1);

    let mut rebuilt_extensions = rebuilt.extensions().expect("extensions");
    rebuilt_extensions.insert("extra".into(), json!(true));
    assert_eq!(existing.extensions().expect("extensions").len(), 2);
    assert_eq!(rebuilt.extensions().expect("extensions").len(), 2);
}

#[test]
fn transform_with_no_mutations_copies_every_field() {
    let existing = sample();
    let copy = existing.transform(|builder| builder);
    assert_eq!(copy, existing);
}

#[test]
fn transform_replaces_one_field_and_keeps_the_rest() {
    let existing = sample();
    let coerced = existing.transform(|builder| builder.fetched_value(json!("FRODO")));

    assert_eq!(coerced.fetched_value(), &json!("FRODO"));
    assert_eq!(coerced.raw_fetched_value(), existing.raw_fetched_value());
    assert_eq!(coerced.local_context(), existing.local_context());
    assert_eq!(coerced.errors(), existing.errors());
    assert_eq!(coerced.extensions(), existing.extensions());

    // The receiver is never mutated.
    assert_eq!(existing.fetched_value(), &json!({ "name": "Frodo" }));
}

#[test]
fn transform_can_enrich_errors_without_touching_the_original() {
    let existing = sample();
    let mut errors = existing.errors();
    errors.push(ErrorRecord::builder().message("coercion lost precision").build());

    let enriched = existing.transform(|builder| builder.errors(errors));

    assert_eq!(enriched.errors().len(), 2);
    assert_eq!(existing.errors().len(), 1);
}

#[test]
fn transform_can_clear_extensions_to_absent() {
    let existing = sample();
    let stripped = existing.transform(|builder| builder.extensions(None));

    assert_eq!(stripped.extensions(), None);
    assert_eq!(existing.extensions().expect("extensions").len(), 2);
}

#[test]
fn extensions_preserve_insertion_order_across_reads() {
    let existing = sample();
    for _ in 0..3 {
        let keys: Vec<String> = existing.extensions().expect("extensions").keys().cloned().collect();
        assert_eq!(keys, ["traceId", "cacheHit"]);
    }
}

#[test]
fn unset_errors_read_back_as_empty_not_absent() {
    let fetched = FetchedValue::builder().fetched_value(json!(42)).build();
    assert_eq!(fetched.errors(), Vec::new());
}

#[test]
fn frodo_example_from_the_resolution_contract() {
    let fetched = FetchedValue::builder()
        .fetched_value(json!("Frodo"))
        .raw_fetched_value(json!({ "name": "Frodo" }))
        .errors(vec![])
        .extensions(None)
        .local_context(Value::Null)
        .build();

    assert_eq!(fetched.fetched_value(), &json!("Frodo"));
    assert!(fetched.extensions().is_none());
    assert!(fetched.errors().is_empty());
}

#[test]
fn carried_errors_project_to_the_response_format() {
    let existing = sample();
    let projected: Vec<Value> = existing.errors().iter().map(ErrorRecord::to_specification).collect();

    assert_eq!(
        projected,
        vec![json!({
            "message": "friends timed out",
            "locations": [ { "line": 3, "column": 5 } ],
            "path": ["hero", "friends"],
            "extensions": { "classification": "DataFetchingException" }
        })]
    );
}

#[test]
fn shared_instances_are_safe_to_read_concurrently() {
    let existing = sample();
    let shared = std::sync::Arc::new(existing);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let value = std::sync::Arc::clone(&shared);
            std::thread::spawn(move || {
                let mut errors = value.errors();
                errors.push(ErrorRecord::builder().message("local only").build());
                (value.errors().len(), value.extensions().expect("extensions").len())
            })
        })
        .collect();

    for handle in handles {
        let (error_count, extension_count) = handle.join().expect("reader thread");
        assert_eq!(error_count, 1);
        assert_eq!(extension_count, 2);
    }
}
