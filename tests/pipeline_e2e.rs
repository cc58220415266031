//! End-to-end pipeline tests over a real temporary directory tree.
//!
//! These exercise the full partition / rewrite / persist / merge cycle
//! the way the binary drives it: assets read from disk, rewritten in
//! place, and re-loaded from storage.

use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use amdnamer::asset::Asset;
use amdnamer::pipeline::{NamedModules, Outcome};
use amdnamer::resolver;
use tempfile::TempDir;

const ANONYMOUS_MYFOO: &str = r#"define(["require", "exports"], function(require, exports) { var MyFoo = (function () { })(); });"#;
const NAMED_BAR: &str = r#"define("Bar", ["require"], function(require) {});"#;

fn write_file(dir: &TempDir, rel: &str, content: &str) -> PathBuf {
    let path = dir.path().join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

async fn read_batch(paths: &[PathBuf]) -> Vec<Asset> {
    let mut batch = Vec::new();
    for path in paths {
        batch.push(Asset::read(path).await.unwrap());
    }
    batch
}

#[tokio::test]
async fn names_an_anonymous_module_and_persists_it() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "app/MyFoo.js", ANONYMOUS_MYFOO);

    let batch = read_batch(&[path.clone()]).await;
    let outcomes = NamedModules::new().run(batch).await.unwrap();

    assert_eq!(outcomes.len(), 1);
    let asset = match &outcomes[0] {
        Outcome::Replaced(asset) => asset,
        Outcome::Unchanged(_) => panic!("expected a rewrite"),
    };

    assert_eq!(
        asset.content,
        r#"define("MyFoo", ["require", "exports"], function(require, exports) { var MyFoo = (function () { })(); });"#
    );

    // The file on disk was rewritten and the asset re-loaded from it.
    assert_eq!(fs::read_to_string(&path).unwrap(), asset.content);
}

#[tokio::test]
async fn already_named_module_passes_through_byte_identical() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "app/Bar.js", NAMED_BAR);

    let batch = read_batch(&[path.clone()]).await;
    let outcomes = NamedModules::new().run(batch).await.unwrap();

    assert_eq!(outcomes.len(), 1);
    match &outcomes[0] {
        Outcome::Unchanged(asset) => assert_eq!(asset.content, NAMED_BAR),
        Outcome::Replaced(_) => panic!("named module must not be rewritten"),
    }
    assert_eq!(fs::read_to_string(&path).unwrap(), NAMED_BAR);
}

#[tokio::test]
async fn batch_invariant_holds_for_a_mixed_batch() {
    let dir = TempDir::new().unwrap();
    let paths = vec![
        write_file(&dir, "app/MyFoo.js", ANONYMOUS_MYFOO),
        write_file(&dir, "app/Bar.js", NAMED_BAR),
        write_file(&dir, "lib/plain.js", "var x = 1;\n"),
        write_file(&dir, "lib/empty.js", ""),
        write_file(&dir, "lib/Widget.js", "define([], function() { return {}; });"),
    ];

    let batch = read_batch(&paths).await;
    let outcomes = NamedModules::new().run(batch).await.unwrap();

    // Same size, same set of source identities, no duplicate or drop.
    assert_eq!(outcomes.len(), paths.len());
    let output_identities: BTreeSet<PathBuf> = outcomes
        .iter()
        .map(|outcome| outcome.asset().source_path.clone())
        .collect();
    let input_identities: BTreeSet<PathBuf> = paths.iter().cloned().collect();
    assert_eq!(output_identities, input_identities);

    assert_eq!(outcomes.iter().filter(|o| o.is_replaced()).count(), 2);
}

#[tokio::test]
async fn running_twice_changes_nothing_further() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "app/MyFoo.js", ANONYMOUS_MYFOO);

    let first = NamedModules::new()
        .run(read_batch(&[path.clone()]).await)
        .await
        .unwrap();
    assert!(first[0].is_replaced());
    let named = fs::read_to_string(&path).unwrap();

    let second = NamedModules::new()
        .run(read_batch(&[path.clone()]).await)
        .await
        .unwrap();
    assert!(!second[0].is_replaced());
    assert_eq!(fs::read_to_string(&path).unwrap(), named);
}

#[tokio::test]
async fn custom_resolver_controls_the_injected_name() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "src/MyFoo.js", ANONYMOUS_MYFOO);

    let transform = NamedModules::new().with_resolver(resolver::prefixed_resolver("app"));
    let outcomes = transform.run(read_batch(&[path]).await).await.unwrap();

    assert!(outcomes[0]
        .asset()
        .content
        .starts_with(r#"define("app/MyFoo", ["#));
}

#[tokio::test]
async fn plan_leaves_storage_untouched() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "app/MyFoo.js", ANONYMOUS_MYFOO);

    let batch = read_batch(&[path.clone()]).await;
    let planned = NamedModules::new().plan(&batch);

    assert_eq!(planned.len(), 1);
    assert_eq!(planned[0].module_name, "MyFoo");
    assert_eq!(fs::read_to_string(&path).unwrap(), ANONYMOUS_MYFOO);
}

#[tokio::test]
async fn empty_batch_yields_empty_output() {
    let outcomes = NamedModules::new().run(Vec::new()).await.unwrap();
    assert!(outcomes.is_empty());
}
