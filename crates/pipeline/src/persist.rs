use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Serialize;

use crate::snapshot::Snapshot;

/// File names written by [`write_snapshot_files`], in write order.
pub const SNAPSHOT_FILES: [&str; 5] = [
    "products.json",
    "users.json",
    "transactions.json",
    "transactions_with_products.json",
    "transactions_with_users.json",
];

/// Dump the snapshot's collections as pretty-printed JSON files under `dir`.
///
/// The directory is created if missing and existing files are overwritten,
/// so after a refresh the directory reflects exactly the latest snapshot.
pub fn write_snapshot_files(snapshot: &Snapshot, dir: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create snapshot directory {}", dir.display()))?;

    write_json(dir, "products.json", snapshot.products())?;
    write_json(dir, "users.json", snapshot.users())?;
    write_json(dir, "transactions.json", snapshot.transactions())?;
    write_json(
        dir,
        "transactions_with_products.json",
        snapshot.transactions_with_products(),
    )?;
    write_json(
        dir,
        "transactions_with_users.json",
        snapshot.transactions_with_users(),
    )?;

    tracing::info!(
        "Wrote {} snapshot files to {}",
        SNAPSHOT_FILES.len(),
        dir.display()
    );
    Ok(())
}

fn write_json<T: Serialize + ?Sized>(dir: &Path, name: &str, value: &T) -> anyhow::Result<()> {
    let path = dir.join(name);
    let body = serde_json::to_string_pretty(value)
        .with_context(|| format!("Failed to serialize {}", name))?;
    fs::write(&path, body).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::build_snapshot;
    use crate::snapshot::tests::{as_of, canned_outcome};

    #[test]
    fn writes_all_five_files_as_json_arrays() {
        let snapshot = build_snapshot(canned_outcome(), as_of());
        let dir = tempfile::tempdir().unwrap();

        write_snapshot_files(&snapshot, dir.path()).unwrap();

        for name in SNAPSHOT_FILES {
            let body = fs::read_to_string(dir.path().join(name)).unwrap();
            let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
            assert!(parsed.is_array(), "{} should hold a JSON array", name);
        }
    }

    #[test]
    fn written_collections_match_the_snapshot() {
        let snapshot = build_snapshot(canned_outcome(), as_of());
        let dir = tempfile::tempdir().unwrap();

        write_snapshot_files(&snapshot, dir.path()).unwrap();

        let products: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(dir.path().join("products.json")).unwrap())
                .unwrap();
        assert_eq!(products.as_array().unwrap().len(), snapshot.products().len());
        assert_eq!(products[0]["data"]["title"], "Backpack");
        assert_eq!(products[0]["entity_type"], "product");

        let joined: serde_json::Value = serde_json::from_str(
            &fs::read_to_string(dir.path().join("transactions_with_users.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(joined[0]["user"]["name"], "Brad Gibson");
        assert_eq!(joined[1]["user"], "User Not Found");
    }

    #[test]
    fn rewriting_overwrites_previous_contents() {
        let full = build_snapshot(canned_outcome(), as_of());
        let mut empty_outcome = canned_outcome();
        empty_outcome.products = Vec::new();
        empty_outcome.users = Vec::new();
        empty_outcome.transactions = Vec::new();
        let empty = build_snapshot(empty_outcome, as_of());

        let dir = tempfile::tempdir().unwrap();
        write_snapshot_files(&full, dir.path()).unwrap();
        write_snapshot_files(&empty, dir.path()).unwrap();

        let products: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(dir.path().join("products.json")).unwrap())
                .unwrap();
        assert_eq!(products.as_array().unwrap().len(), 0);
    }
}
