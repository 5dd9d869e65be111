//! File-backed tests: reopen durability, read pool visibility, WAL mode.

use funcreg_core::config::{ConfigOverrides, RegistryConfig};
use funcreg_core::traits::IFunctionStorage;
use funcreg_core::Function;
use funcreg_storage::FunctionStore;

#[test]
fn records_survive_reopen() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("registry.db");

    {
        let store = FunctionStore::open(&path).unwrap();
        let mut f = Function::new("openvino-face");
        f.kind = "detector".to_string();
        f.min_neg_points = 0;
        store.create(&f).unwrap();
        store.checkpoint().unwrap();
    }

    let store = FunctionStore::open(&path).unwrap();
    let loaded = store.get("openvino-face").unwrap().unwrap();
    assert_eq!(loaded.kind, "detector");
    assert_eq!(loaded.min_neg_points, 0);
    assert_eq!(loaded.min_pos_points, 1);
}

#[test]
fn readers_see_committed_writes() {
    let dir = tempfile::TempDir::new().unwrap();
    let store = FunctionStore::open_with_pool(&dir.path().join("r.db"), 3).unwrap();
    assert_eq!(store.database().reader_count(), 3);

    for i in 0..6 {
        store.create(&Function::new(format!("f{i}"))).unwrap();
        // Round-robin across all readers.
        assert_eq!(store.count().unwrap(), i + 1);
    }
}

#[test]
fn wal_mode_enabled_on_file_db() {
    let dir = tempfile::TempDir::new().unwrap();
    let store = FunctionStore::open(&dir.path().join("wal.db")).unwrap();
    assert_eq!(store.database().journal_mode().unwrap(), "wal");

    let mem = FunctionStore::open_in_memory().unwrap();
    assert_eq!(mem.database().journal_mode().unwrap(), "memory");
    assert_eq!(mem.database().reader_count(), 0);
}

#[test]
fn open_from_config() {
    let dir = tempfile::TempDir::new().unwrap();
    let overrides = ConfigOverrides {
        db_path: Some(dir.path().join("cfg.db").display().to_string()),
        read_pool_size: Some(2),
    };
    let config = RegistryConfig::load(dir.path(), Some(&overrides)).unwrap();

    let store = FunctionStore::from_config(&config).unwrap();
    assert_eq!(store.database().reader_count(), 2);
    assert_eq!(store.database().path(), Some(dir.path().join("cfg.db").as_path()));
}

#[test]
fn concurrent_readers_and_writer() {
    let dir = tempfile::TempDir::new().unwrap();
    let store = std::sync::Arc::new(FunctionStore::open(&dir.path().join("c.db")).unwrap());

    let writer = {
        let store = store.clone();
        std::thread::spawn(move || {
            for i in 0..50 {
                store.create(&Function::new(format!("w{i:03}"))).unwrap();
            }
        })
    };
    let readers: Vec<_> = (0..4)
        .map(|_| {
            let store = store.clone();
            std::thread::spawn(move || {
                for _ in 0..50 {
                    let listed = store.list().unwrap();
                    assert!(listed.windows(2).all(|w| w[0].name < w[1].name));
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for r in readers {
        r.join().unwrap();
    }
    assert_eq!(store.count().unwrap(), 50);
}
