use super::*;
use tempfile::tempdir;

#[test]
fn test_bundled_catalog_serves_both_views() {
    let source = BundledViewSource::default();

    let dashboard = source.load(ViewId::Dashboard).unwrap();
    assert_eq!(dashboard.view(), ViewId::Dashboard);
    let ViewContent::Dashboard(content) = dashboard else {
        panic!("expected dashboard content");
    };
    assert_eq!(content.products.len(), bundled_catalog().products.len());

    let new_product = source.load(ViewId::NewProduct).unwrap();
    assert_eq!(new_product.view(), ViewId::NewProduct);
}

#[test]
fn test_catalog_file_is_used() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    std::fs::write(
        &path,
        r#"{"templates":[{"name":"Poster","category":"Prints"}]}"#,
    )
    .unwrap();

    let source = BundledViewSource::new(Some(path));
    match source.load(ViewId::NewProduct).unwrap() {
        ViewContent::NewProduct(content) => {
            assert_eq!(content.templates.len(), 1);
            assert_eq!(content.templates[0].name, "Poster");
        }
        other => panic!("unexpected content: {other:?}"),
    }
}

#[test]
fn test_missing_catalog_file_is_load_failure() {
    let dir = tempdir().unwrap();
    let source = BundledViewSource::new(Some(dir.path().join("missing.json")));

    match source.load(ViewId::Dashboard) {
        Err(ViewFault::LoadFailure { view, .. }) => assert_eq!(view, ViewId::Dashboard),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_malformed_catalog_file_is_load_failure() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    std::fs::write(&path, "[1, 2").unwrap();

    let source = BundledViewSource::new(Some(path));
    assert!(matches!(
        source.load(ViewId::NewProduct),
        Err(ViewFault::LoadFailure { .. })
    ));
}
