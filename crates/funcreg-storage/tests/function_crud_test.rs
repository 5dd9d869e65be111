//! Integration test: full registration lifecycle through FunctionStore.

use funcreg_core::errors::{RegistryErrorCode, StorageError, ValidationError};
use funcreg_core::traits::IFunctionStorage;
use funcreg_core::Function;
use funcreg_storage::FunctionStore;

fn make_function(name: &str, kind: &str) -> Function {
    Function {
        spec: format!(r#"{{"metadata": {{"name": "{name}"}}}}"#),
        framework: "pytorch".to_string(),
        description: format!("{name} model"),
        kind: kind.to_string(),
        help_message: "Click on the object".to_string(),
        animated_gif: "https://example.org/demo.gif".to_string(),
        status: "ready".to_string(),
        ..Function::new(name)
    }
}

#[test]
fn create_and_get() {
    let store = FunctionStore::open_in_memory().unwrap();
    let f = make_function("pth-dextr", "interactor");

    store.create(&f).unwrap();
    let loaded = store.get("pth-dextr").unwrap().expect("function should exist");
    assert_eq!(loaded, f);
    assert!(loaded.is_interactive());
}

#[test]
fn get_missing_returns_none() {
    let store = FunctionStore::open_in_memory().unwrap();
    assert!(store.get("nope").unwrap().is_none());
}

#[test]
fn duplicate_name_rejected() {
    let store = FunctionStore::open_in_memory().unwrap();
    store.create(&make_function("dup", "detector")).unwrap();

    let err = store.create(&make_function("dup", "tracker")).unwrap_err();
    assert!(matches!(err, StorageError::AlreadyExists { ref name } if name == "dup"));
    assert_eq!(err.error_code(), "ALREADY_EXISTS");

    // The first registration survives untouched.
    assert_eq!(store.get("dup").unwrap().unwrap().kind, "detector");
}

#[test]
fn invalid_record_never_reaches_storage() {
    let store = FunctionStore::open_in_memory().unwrap();
    let mut f = make_function("too-long", "detector");
    f.framework = "f".repeat(101);

    let err = store.create(&f).unwrap_err();
    assert!(matches!(
        err,
        StorageError::Validation(ValidationError::FieldTooLong { field: "framework", .. })
    ));
    assert_eq!(store.count().unwrap(), 0);
}

#[test]
fn update_replaces_fields() {
    let store = FunctionStore::open_in_memory().unwrap();
    let mut f = make_function("siammask", "tracker");
    store.create(&f).unwrap();

    f.spec = r#"{"metadata": {"name": "siammask", "version": 2}}"#.to_string();
    f.min_pos_points = 3;
    f.startswith_box = true;
    store.update(&f).unwrap();

    let loaded = store.get("siammask").unwrap().unwrap();
    assert_eq!(loaded.min_pos_points, 3);
    assert!(loaded.startswith_box);
    assert_eq!(loaded.manifest().unwrap()["metadata"]["version"], 2);
}

#[test]
fn update_missing_is_not_found() {
    let store = FunctionStore::open_in_memory().unwrap();
    let err = store.update(&make_function("ghost", "detector")).unwrap_err();
    assert!(matches!(err, StorageError::NotFound { .. }));
}

#[test]
fn update_status_only_touches_status() {
    let store = FunctionStore::open_in_memory().unwrap();
    let f = make_function("yolo", "detector");
    store.create(&f).unwrap();

    store.update_status("yolo", "building").unwrap();
    let loaded = store.get("yolo").unwrap().unwrap();
    assert_eq!(loaded.status, "building");
    assert_eq!(loaded.spec, f.spec);

    assert!(matches!(
        store.update_status("ghost", "ready"),
        Err(StorageError::NotFound { .. })
    ));
    assert!(matches!(
        store.update_status("yolo", &"x".repeat(101)),
        Err(StorageError::Validation(_))
    ));
}

#[test]
fn upsert_inserts_then_refreshes() {
    let store = FunctionStore::open_in_memory().unwrap();
    let mut f = make_function("hrnet", "interactor");

    assert!(store.upsert(&f).unwrap());
    f.status = "unhealthy".to_string();
    assert!(!store.upsert(&f).unwrap());

    assert_eq!(store.count().unwrap(), 1);
    assert_eq!(store.get("hrnet").unwrap().unwrap().status, "unhealthy");
}

#[test]
fn delete_reports_whether_removed() {
    let store = FunctionStore::open_in_memory().unwrap();
    store.create(&make_function("gone", "detector")).unwrap();

    assert!(store.delete("gone").unwrap());
    assert!(store.get("gone").unwrap().is_none());
    assert!(!store.delete("gone").unwrap());
}

#[test]
fn list_is_ascending_by_name() {
    let store = FunctionStore::open_in_memory().unwrap();
    for name in ["mask-rcnn", "dextr", "yolo-v3", "f-brs", "sam"] {
        store.create(&make_function(name, "detector")).unwrap();
    }

    let names: Vec<String> = store.list().unwrap().into_iter().map(|f| f.name).collect();
    assert_eq!(names, vec!["dextr", "f-brs", "mask-rcnn", "sam", "yolo-v3"]);
}

#[test]
fn filtered_listings() {
    let store = FunctionStore::open_in_memory().unwrap();
    store.create(&make_function("b-det", "detector")).unwrap();
    store.create(&make_function("a-det", "detector")).unwrap();
    store.create(&make_function("sam", "interactor")).unwrap();
    store.update_status("sam", "building").unwrap();

    let detectors: Vec<String> = store
        .list_by_kind("detector")
        .unwrap()
        .into_iter()
        .map(|f| f.name)
        .collect();
    assert_eq!(detectors, vec!["a-det", "b-det"]);

    let building = store.list_by_status("building").unwrap();
    assert_eq!(building.len(), 1);
    assert_eq!(building[0].name, "sam");
}

#[test]
fn keyset_pagination_walks_every_record_once() {
    let store = FunctionStore::open_in_memory().unwrap();
    let functions: Vec<Function> = (0..7)
        .map(|i| make_function(&format!("fn-{i:02}"), "detector"))
        .collect();
    assert_eq!(store.create_bulk(&functions).unwrap(), 7);

    let mut seen = Vec::new();
    let mut cursor: Option<String> = None;
    loop {
        let page = store.list_page(cursor.as_deref(), 3).unwrap();
        assert_eq!(page.total, 7);
        seen.extend(page.items.into_iter().map(|f| f.name));
        if !page.has_more {
            assert!(page.next_cursor.is_none());
            break;
        }
        cursor = page.next_cursor;
    }

    let expected: Vec<String> = (0..7).map(|i| format!("fn-{i:02}")).collect();
    assert_eq!(seen, expected);
}

#[test]
fn bulk_insert_is_all_or_nothing() {
    let store = FunctionStore::open_in_memory().unwrap();
    let batch = vec![
        make_function("one", "detector"),
        make_function("two", "detector"),
        make_function("one", "detector"),
    ];

    assert!(matches!(
        store.create_bulk(&batch),
        Err(StorageError::AlreadyExists { .. })
    ));
    assert_eq!(store.count().unwrap(), 0);
}

#[test]
fn schema_version_is_reported() {
    let store = FunctionStore::open_in_memory().unwrap();
    assert_eq!(
        store.schema_version().unwrap(),
        funcreg_storage::migrations::latest_version()
    );
}

#[test]
fn nul_in_any_text_field_rejected_before_sql() {
    let store = FunctionStore::open_in_memory().unwrap();

    let err = store.create(&Function::new("\0detector")).unwrap_err();
    assert!(matches!(
        err,
        StorageError::Validation(ValidationError::NulCharacter { field: "name" })
    ));
    assert_eq!(err.error_code(), "VALIDATION_ERROR");

    let mut f = make_function("nul-help", "detector");
    f.help_message = "click\0here".to_string();
    assert!(matches!(
        store.upsert(&f),
        Err(StorageError::Validation(ValidationError::NulCharacter { field: "help_message" }))
    ));
    assert_eq!(store.count().unwrap(), 0);
}

#[test]
fn multibyte_name_at_limit_roundtrips() {
    let store = FunctionStore::open_in_memory().unwrap();
    let name = "日".repeat(100);
    let f = Function {
        description: "é".repeat(100),
        ..make_function(&name, "detector")
    };

    store.create(&f).unwrap();
    assert_eq!(store.get(&name).unwrap().unwrap(), f);
    assert_eq!(store.list().unwrap()[0].name.chars().count(), 100);

    let err = store.create(&Function::new("日".repeat(101))).unwrap_err();
    assert!(matches!(
        err,
        StorageError::Validation(ValidationError::FieldTooLong { field: "name", max: 100, actual: 101 })
    ));
}

#[test]
fn unconventional_kind_is_stored_as_is() {
    let store = FunctionStore::open_in_memory().unwrap();
    store.create(&make_function("seg", "segmenter")).unwrap();
    assert!(store.upsert(&make_function("det", "detector")).unwrap());

    assert_eq!(store.list_by_kind("segmenter").unwrap().len(), 1);
    assert_eq!(store.get("seg").unwrap().unwrap().kind, "segmenter");
}
