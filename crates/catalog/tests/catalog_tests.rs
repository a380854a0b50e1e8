//! End-to-end tests over real collection files

use inkshelf_catalog::{BookCatalog, BookEditor, CatalogError, CatalogPaths};
use inkshelf_core::{Page, PagePatch};
use serde_json::{json, Map, Value};
use tempfile::TempDir;

fn setup(info: Value, text: Value) -> (TempDir, CatalogPaths) {
    let dir = TempDir::new().unwrap();
    let paths = CatalogPaths::new(dir.path());
    std::fs::write(paths.info_path(), serde_json::to_string_pretty(&info).unwrap()).unwrap();
    std::fs::write(paths.text_path(), serde_json::to_string_pretty(&text).unwrap()).unwrap();
    (dir, paths)
}

fn one_book() -> (TempDir, CatalogPaths) {
    setup(
        json!([{"slug": "a", "data": {"name": "Book A", "status": "draft"}}]),
        json!([{"slug": "a", "pages": [{"title": "p1", "content": "c1"}]}]),
    )
}

fn map(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => panic!("expected object"),
    }
}

fn read_json(path: &std::path::Path) -> Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

#[tokio::test]
async fn listing_projects_joined_fields() {
    let (_dir, paths) = one_book();
    let listings = BookCatalog::new(paths).list().await;

    assert_eq!(listings.len(), 1);
    let listing = &listings[0];
    assert_eq!(listing.slug, "a");
    assert_eq!(listing.name, "Book A");
    assert_eq!(listing.status, "draft");
    assert!(listing.has_text);
    assert_eq!(listing.pages_count, 1);
}

#[tokio::test]
async fn listing_page_count_matches_detail() {
    let (_dir, paths) = setup(
        json!([
            {"slug": "a", "data": {"name": "Book A"}},
            {"slug": "b", "name": "Book B"}
        ]),
        json!([
            {"slug": "a", "pages": [{"title": "1", "content": "x"}, {"title": "2", "content": "y"}]},
            {"slug": "b", "pages": []}
        ]),
    );
    let catalog = BookCatalog::new(paths);

    for listing in catalog.list().await {
        let detail = catalog.get(&listing.slug).await.unwrap();
        assert_eq!(detail.pages.len(), listing.pages_count);
    }
}

#[tokio::test]
async fn listing_drops_records_without_slug() {
    let (_dir, paths) = setup(
        json!([{"name": "orphan"}, {"slug": "a", "data": {"name": "Book A"}}]),
        json!([]),
    );
    let listings = BookCatalog::new(paths).list().await;
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].slug, "a");
}

#[tokio::test]
async fn duplicate_text_slugs_resolve_first_wins_everywhere() {
    let (_dir, paths) = setup(
        json!([{"slug": "a", "data": {"name": "Book A"}}]),
        json!([
            {"slug": "a", "pages": [{"title": "first", "content": "c"}]},
            {"slug": "a", "pages": [{"title": "dup", "content": "c"}, {"title": "dup2", "content": "c"}]}
        ]),
    );
    let catalog = BookCatalog::new(paths);

    let listings = catalog.list().await;
    assert_eq!(listings[0].pages_count, 1);

    let detail = catalog.get("a").await.unwrap();
    assert_eq!(detail.pages.len(), 1);
    assert_eq!(detail.pages[0].title, "first");
}

#[tokio::test]
async fn get_unknown_slug_is_not_found() {
    let (_dir, paths) = one_book();
    let err = BookCatalog::new(paths).get("unknown-slug").await.unwrap_err();
    assert!(matches!(err, CatalogError::BookNotFound(slug) if slug == "unknown-slug"));
}

#[tokio::test]
async fn get_without_text_record_defaults_to_empty_pages() {
    let (_dir, paths) = setup(json!([{"slug": "a", "name": "Book A"}]), json!([]));
    let detail = BookCatalog::new(paths).get("a").await.unwrap();
    assert!(detail.pages.is_empty());
    assert_eq!(detail.data["name"], "Book A");
}

#[tokio::test]
async fn save_merges_one_field_and_leaves_the_rest() {
    let (_dir, paths) = setup(
        json!([{"slug": "a", "data": {"name": "old", "status": "draft", "short_desc": "s"}}]),
        json!([]),
    );
    let editor = BookEditor::new(&paths);
    editor
        .save("a", map(json!({"name": "X"})), &[], None)
        .await
        .unwrap();

    let expected = json!([{"slug": "a", "data": {"name": "X", "status": "draft", "short_desc": "s"}}]);
    assert_eq!(read_json(&paths.info_path()), expected);
}

#[tokio::test]
async fn save_patches_single_page_field() {
    let (_dir, paths) = one_book();
    let editor = BookEditor::new(&paths);
    editor
        .save("a", Map::new(), &[PagePatch::title(0, "T")], None)
        .await
        .unwrap();

    let detail = BookCatalog::new(paths).get("a").await.unwrap();
    assert_eq!(detail.pages[0].title, "T");
    assert_eq!(detail.pages[0].content, "c1");
}

#[tokio::test]
async fn save_status_and_page_content_scenario() {
    let (_dir, paths) = one_book();
    let editor = BookEditor::new(&paths);
    editor
        .save("a", Map::new(), &[PagePatch::content(0, "c2")], Some("published"))
        .await
        .unwrap();

    let detail = BookCatalog::new(paths).get("a").await.unwrap();
    assert_eq!(detail.status, "published");
    assert_eq!(detail.data["status"], "published");
    assert_eq!(detail.pages[0].title, "p1");
    assert_eq!(detail.pages[0].content, "c2");
}

#[tokio::test]
async fn save_ignores_out_of_range_page_index() {
    let (_dir, paths) = one_book();
    let editor = BookEditor::new(&paths);
    editor
        .save("a", Map::new(), &[PagePatch::title(7, "T")], None)
        .await
        .unwrap();

    let detail = BookCatalog::new(paths).get("a").await.unwrap();
    assert_eq!(detail.pages.len(), 1);
    assert_eq!(detail.pages[0].title, "p1");
}

#[tokio::test]
async fn save_never_creates_a_text_record() {
    let (_dir, paths) = setup(json!([{"slug": "a", "name": "Book A"}]), json!([]));
    let editor = BookEditor::new(&paths);
    editor
        .save("a", Map::new(), &[PagePatch::title(0, "T")], Some("published"))
        .await
        .unwrap();

    assert_eq!(read_json(&paths.text_path()), json!([]));
}

#[tokio::test]
async fn save_empty_status_changes_nothing() {
    let (_dir, paths) = setup(json!([{"slug": "a", "name": "Book A"}]), json!([]));
    BookEditor::new(&paths)
        .save("a", Map::new(), &[], Some(""))
        .await
        .unwrap();

    assert_eq!(
        read_json(&paths.info_path()),
        json!([{"slug": "a", "name": "Book A"}])
    );
}

#[tokio::test]
async fn save_unknown_slug_is_not_found() {
    let (_dir, paths) = one_book();
    let err = BookEditor::new(&paths)
        .save("nope", Map::new(), &[], None)
        .await
        .unwrap_err();
    assert!(matches!(err, CatalogError::BookNotFound(_)));
}

#[tokio::test]
async fn replace_pages_upserts_and_replaces_wholesale() {
    let (_dir, paths) = one_book();
    let editor = BookEditor::new(&paths);

    editor
        .replace_pages("b", vec![Page::new("n1", "nc1")])
        .await
        .unwrap();
    let texts = read_json(&paths.text_path());
    assert_eq!(texts.as_array().unwrap().len(), 2);
    assert_eq!(texts[1]["slug"], "b");

    editor.replace_pages("a", vec![]).await.unwrap();
    let catalog = BookCatalog::new(paths);
    let listing = catalog
        .list()
        .await
        .into_iter()
        .find(|l| l.slug == "a")
        .unwrap();
    assert!(listing.has_text);
    assert_eq!(listing.pages_count, 0);
}

#[tokio::test]
async fn patch_info_fields_filters_protected_keys() {
    let (_dir, paths) = one_book();
    BookEditor::new(&paths)
        .patch_info_fields("a", &map(json!({"slug": "evil", "book_review": "great"})))
        .await
        .unwrap();

    let infos = read_json(&paths.info_path());
    assert_eq!(infos[0]["slug"], "a");
    assert_eq!(infos[0]["data"]["book_review"], "great");
    assert!(infos[0]["data"].get("slug").is_none());
}

#[tokio::test]
async fn patch_info_fields_creates_wrapper_on_flat_record() {
    let (_dir, paths) = setup(json!([{"slug": "a", "name": "flat"}]), json!([]));
    BookEditor::new(&paths)
        .patch_info_fields("a", &map(json!({"short_desc": "fresh"})))
        .await
        .unwrap();

    let infos = read_json(&paths.info_path());
    assert_eq!(infos[0]["data"]["short_desc"], "fresh");
    assert_eq!(infos[0]["name"], "flat");
}

#[tokio::test]
async fn invalid_records_survive_an_edit_cycle() {
    let (_dir, paths) = setup(
        json!([{"note": "no slug here"}, {"slug": "a", "name": "Book A"}]),
        json!([]),
    );
    BookEditor::new(&paths)
        .save("a", map(json!({"name": "X"})), &[], None)
        .await
        .unwrap();

    let infos = read_json(&paths.info_path());
    assert_eq!(infos.as_array().unwrap().len(), 2);
    assert_eq!(infos[0]["note"], "no slug here");
}

#[tokio::test]
async fn read_raw_returns_verbatim_content() {
    let (dir, paths) = one_book();
    std::fs::write(dir.path().join("notes.txt"), "hello\nworld").unwrap();
    let content = BookCatalog::new(paths).read_raw("notes.txt").await.unwrap();
    assert_eq!(content, "hello\nworld");
}

#[tokio::test]
async fn read_raw_missing_file_is_io_error() {
    let (_dir, paths) = one_book();
    let err = BookCatalog::new(paths).read_raw("missing.txt").await.unwrap_err();
    assert!(matches!(err, CatalogError::Io(_)));
}

#[tokio::test]
async fn missing_collections_degrade_to_empty_catalog() {
    let dir = TempDir::new().unwrap();
    let paths = CatalogPaths::new(dir.path());
    let catalog = BookCatalog::new(paths);
    assert!(catalog.list().await.is_empty());
    assert!(matches!(
        catalog.get("a").await.unwrap_err(),
        CatalogError::BookNotFound(_)
    ));
}
