use homestock_core::{
    db::seed::{DEFAULT_CATEGORIES, DEFAULT_LOCATIONS},
    Database, ErrorKind, ItemDraft, NewItem,
};
use tempfile::NamedTempFile;

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

fn new_item(name: &str) -> NewItem {
    NewItem::try_from(ItemDraft {
        name: name.to_string(),
        ..Default::default()
    })
    .expect("Valid draft")
}

#[test]
fn test_schema_initialization_is_idempotent() {
    let (_temp_file, db) = create_test_db();

    let before = db.schema_snapshot().expect("Failed to read schema");
    db.initialize_schema().expect("Second initialization failed");
    db.initialize_schema().expect("Third initialization failed");
    let after = db.schema_snapshot().expect("Failed to read schema");

    assert_eq!(before, after);
    assert!(before.iter().any(|sql| sql.contains("items (")));
    assert!(before.iter().any(|sql| sql.contains("categories (")));
    assert!(before.iter().any(|sql| sql.contains("locations (")));
}

#[test]
fn test_reopening_keeps_data() {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    {
        let mut db = Database::new(temp_file.path()).unwrap();
        db.insert_item(&new_item("Globe")).unwrap();
    }

    let db = Database::new(temp_file.path()).unwrap();
    let items = db.search_items("").unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "Globe");
}

#[test]
fn test_seed_defaults_twice() {
    let (_temp_file, mut db) = create_test_db();

    let first = db.seed_defaults().expect("Failed to seed");
    assert_eq!(first.categories_added, 8);
    assert_eq!(first.locations_added, 7);

    let second = db.seed_defaults().expect("Failed to seed again");
    assert!(second.is_empty());

    assert_eq!(db.list_categories().unwrap().len(), DEFAULT_CATEGORIES.len());
    assert_eq!(db.list_locations().unwrap().len(), DEFAULT_LOCATIONS.len());
}

#[test]
fn test_seeded_values() {
    let (_temp_file, mut db) = create_test_db();
    db.seed_defaults().unwrap();

    let categories = db.list_categories().unwrap();
    let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Books",
            "Clothing",
            "Decor",
            "Electronics",
            "Furniture",
            "Kitchenware",
            "Other",
            "Tools"
        ]
    );
    let tools = categories.iter().find(|c| c.name == "Tools").unwrap();
    assert_eq!(tools.icon.as_deref(), Some("build"));

    let locations = db.list_locations().unwrap();
    let attic = locations.iter().find(|l| l.name == "Attic").unwrap();
    assert_eq!(attic.description.as_deref(), Some("Long-term storage"));
    assert_eq!(locations[0].name, "Attic");
    assert_eq!(locations[6].name, "Living Room");
}

#[test]
fn test_category_order_ignores_case() {
    let (_temp_file, mut db) = create_test_db();

    db.insert_category("banana crates", None).unwrap();
    db.insert_category("Apples", None).unwrap();
    db.insert_category("cherries", None).unwrap();

    let names: Vec<String> = db
        .list_categories()
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["Apples", "banana crates", "cherries"]);
}

#[test]
fn test_duplicate_location_is_ignored() {
    let (_temp_file, mut db) = create_test_db();

    let first = db.insert_location("Loft", Some("Upstairs")).unwrap();
    let second = db.insert_location("Loft", Some("Different text")).unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(second.description.as_deref(), Some("Upstairs"));
    assert_eq!(db.list_locations().unwrap().len(), 1);
}

#[test]
fn test_duplicate_category_is_ignored() {
    let (_temp_file, mut db) = create_test_db();

    let first = db.insert_category("Toys", Some("toy")).unwrap();
    let second = db.insert_category("Toys", None).unwrap();

    assert_eq!(first, second);
    assert_eq!(db.list_categories().unwrap().len(), 1);
}

#[test]
fn test_blank_location_name_rejected() {
    let (_temp_file, mut db) = create_test_db();

    let err = db.insert_location("  ", None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(db.list_locations().unwrap().is_empty());
}

#[test]
fn test_insert_and_get_item() {
    let (_temp_file, mut db) = create_test_db();

    let item = db.insert_item(&new_item("Drill")).expect("Failed to insert");
    assert!(item.id > 0);
    assert_eq!(item.quantity, 1);
    assert_eq!(item.created_at, item.updated_at);

    let fetched = db.get_item(item.id).unwrap().expect("Item should exist");
    assert_eq!(fetched, item);

    assert!(db.get_item(item.id + 100).unwrap().is_none());
}

#[test]
fn test_insert_item_with_dangling_reference_rejected() {
    let (_temp_file, mut db) = create_test_db();

    let mut item = new_item("Orphan");
    item.location_id = Some(77);

    let err = db.insert_item(&item).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(err.field(), Some("location_id"));
    assert!(db.search_items("").unwrap().is_empty());
}

#[test]
fn test_deleting_location_clears_item_reference() {
    let (_temp_file, mut db) = create_test_db();

    let basement = db.insert_location("Basement", None).unwrap();
    let mut item = new_item("Dehumidifier");
    item.location_id = Some(basement.id);
    let item = db.insert_item(&item).unwrap();
    assert_eq!(item.location_name.as_deref(), Some("Basement"));

    assert!(db.delete_location(basement.id).unwrap());

    let item = db.get_item(item.id).unwrap().unwrap();
    assert_eq!(item.location_id, None);
    assert_eq!(item.location_name, None);
}

#[test]
fn test_delete_item_is_idempotent() {
    let (_temp_file, mut db) = create_test_db();

    let item = db.insert_item(&new_item("Old phone")).unwrap();
    assert!(db.delete_item(item.id).unwrap());
    assert!(!db.delete_item(item.id).unwrap());
    assert!(db.get_item(item.id).unwrap().is_none());
}

#[test]
fn test_search_matches_wildcards_literally() {
    let (_temp_file, mut db) = create_test_db();

    db.insert_item(&new_item("100% wool blanket")).unwrap();
    db.insert_item(&new_item("1000 piece puzzle")).unwrap();
    db.insert_item(&new_item("usb_cable")).unwrap();
    db.insert_item(&new_item("usbXcable")).unwrap();

    let percent = db.search_items("0%").unwrap();
    assert_eq!(percent.len(), 1);
    assert_eq!(percent[0].name, "100% wool blanket");

    let underscore = db.search_items("b_c").unwrap();
    assert_eq!(underscore.len(), 1);
    assert_eq!(underscore[0].name, "usb_cable");
}

#[test]
fn test_search_folds_unicode_case() {
    let (_temp_file, mut db) = create_test_db();

    db.insert_item(&new_item("Émaille Topf")).unwrap();
    db.insert_item(&new_item("ÜBERSCHRANK")).unwrap();
    db.insert_item(&new_item("Kettle")).unwrap();

    let enamel = db.search_items("émaille").unwrap();
    assert_eq!(enamel.len(), 1);
    assert_eq!(enamel[0].name, "Émaille Topf");

    let wardrobe = db.search_items("überschrank").unwrap();
    assert_eq!(wardrobe.len(), 1);
    assert_eq!(wardrobe[0].name, "ÜBERSCHRANK");

    assert_eq!(db.search_items("TOPF").unwrap().len(), 1);
}

#[test]
fn test_order_folds_unicode_case() {
    let (_temp_file, mut db) = create_test_db();

    db.insert_item(&new_item("Öl")).unwrap();
    db.insert_item(&new_item("öffner")).unwrap();
    db.insert_location("Ölkeller", None).unwrap();
    db.insert_location("öfen", None).unwrap();

    let items: Vec<String> = db
        .search_items("")
        .unwrap()
        .into_iter()
        .map(|i| i.name)
        .collect();
    assert_eq!(items, vec!["öffner", "Öl"]);

    let locations: Vec<String> = db
        .list_locations()
        .unwrap()
        .into_iter()
        .map(|l| l.name)
        .collect();
    assert_eq!(locations, vec!["öfen", "Ölkeller"]);
}
