use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Temporary directory plus the database path inside it.
fn create_cli_test_environment() -> (TempDir, String) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let db_path = temp_dir
        .path()
        .join("cli_test.db")
        .to_str()
        .expect("Non UTF-8 temp path")
        .to_string();
    (temp_dir, db_path)
}

/// Command with --no-color and the given database.
fn homestock_cmd(db_path: &str) -> Command {
    let mut cmd = Command::cargo_bin("homestock").expect("Failed to find homestock binary");
    cmd.args(["--no-color", "--database-file", db_path]);
    cmd
}

/// Pulls the ID out of a "Created ... with ID: N" line.
fn extract_created_id(output: &[u8]) -> String {
    let output = String::from_utf8_lossy(output);
    output
        .lines()
        .find_map(|line| line.split("with ID: ").nth(1))
        .map(|id| id.trim().to_string())
        .expect("No created ID in output")
}

fn add_item(db_path: &str, args: &[&str]) -> String {
    let output = homestock_cmd(db_path)
        .args(["item", "add"])
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    extract_created_id(&output)
}

#[test]
fn test_cli_empty_inventory() {
    let (_temp_dir, db_path) = create_cli_test_environment();

    homestock_cmd(&db_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("No items found."));
}

#[test]
fn test_cli_init_reports_seeding() {
    let (_temp_dir, db_path) = create_cli_test_environment();

    homestock_cmd(&db_path)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Store ready"))
        .stdout(predicate::str::contains("8 categories and 7 locations added"));

    homestock_cmd(&db_path)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Default categories and locations already present",
        ));
}

#[test]
fn test_cli_default_data_is_seeded() {
    let (_temp_dir, db_path) = create_cli_test_environment();

    homestock_cmd(&db_path)
        .args(["category", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Electronics (ID: 1, icon: devices)"))
        .stdout(predicate::str::contains("Tools"));

    homestock_cmd(&db_path)
        .args(["location", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Garage"))
        .stdout(predicate::str::contains("Long-term storage"));
}

#[test]
fn test_cli_add_and_show_item() {
    let (_temp_dir, db_path) = create_cli_test_environment();

    let id = add_item(
        &db_path,
        &[
            "Cordless Drill",
            "--quantity",
            "2",
            "--category",
            "5",
            "--location",
            "5",
            "--purchase-date",
            "2023-11-24",
            "--price",
            "129.99",
        ],
    );

    homestock_cmd(&db_path)
        .args(["item", "show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("# {id}. Cordless Drill")))
        .stdout(predicate::str::contains("- Quantity: 2"))
        .stdout(predicate::str::contains("- Category: Tools"))
        .stdout(predicate::str::contains("- Location: Garage"))
        .stdout(predicate::str::contains("- Purchased: 2023-11-24"))
        .stdout(predicate::str::contains("- Price: 129.99"));
}

#[test]
fn test_cli_add_item_blank_name_fails() {
    let (_temp_dir, db_path) = create_cli_test_environment();

    homestock_cmd(&db_path)
        .args(["item", "add", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Item name is required"));

    homestock_cmd(&db_path)
        .args(["item", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No items found."));
}

#[test]
fn test_cli_add_item_unknown_category_fails() {
    let (_temp_dir, db_path) = create_cli_test_environment();

    homestock_cmd(&db_path)
        .args(["item", "add", "Mystery Box", "--category", "999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("category_id"));
}

#[test]
fn test_cli_invalid_quantity_defaults_to_one() {
    let (_temp_dir, db_path) = create_cli_test_environment();

    let id = add_item(&db_path, &["Spare Bulb", "--quantity", "-3"]);

    homestock_cmd(&db_path)
        .args(["item", "show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Quantity: 1"));
}

#[test]
fn test_cli_show_invalid_id() {
    let (_temp_dir, db_path) = create_cli_test_environment();

    homestock_cmd(&db_path)
        .args(["item", "show", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input for field 'id'"));
}

#[test]
fn test_cli_show_missing_item() {
    let (_temp_dir, db_path) = create_cli_test_environment();

    homestock_cmd(&db_path)
        .args(["item", "show", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Item with ID 42 not found"));
}

#[test]
fn test_cli_list_summary_format() {
    let (_temp_dir, db_path) = create_cli_test_environment();

    add_item(&db_path, &["Toaster", "--location", "2", "--category", "3"]);
    add_item(&db_path, &["armchair", "--description", "Green velvet"]);

    let output = homestock_cmd(&db_path)
        .args(["item", "list"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let output = String::from_utf8(output).expect("Invalid UTF-8");

    assert!(output.contains("- Qty: 1 • Kitchen • Kitchenware"));
    assert!(output.contains("- Qty: 1 • No category"));
    assert!(output.contains("- Green velvet"));

    // Case-insensitive ordering by name
    let armchair = output.find("## armchair").expect("armchair missing");
    let toaster = output.find("## Toaster").expect("Toaster missing");
    assert!(armchair < toaster);
}

#[test]
fn test_cli_search() {
    let (_temp_dir, db_path) = create_cli_test_environment();

    add_item(&db_path, &["Drawer Unit"]);
    add_item(&db_path, &["Desk", "--description", "Has a drawer"]);
    add_item(&db_path, &["Kettle"]);

    homestock_cmd(&db_path)
        .args(["item", "search", "DRAW"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Drawer Unit"))
        .stdout(predicate::str::contains("Desk"))
        .stdout(predicate::str::contains("Kettle").not());

    homestock_cmd(&db_path)
        .args(["item", "search", "sofa"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No items found."));
}

#[test]
fn test_cli_edit_item() {
    let (_temp_dir, db_path) = create_cli_test_environment();

    let id = add_item(&db_path, &["Lamp", "--category", "7"]);

    homestock_cmd(&db_path)
        .args([
            "item",
            "edit",
            &id,
            "--quantity",
            "3",
            "--clear-category",
            "--notes",
            "Needs a new bulb",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Updated item with ID: {id}")))
        .stdout(predicate::str::contains("- Changed quantity to 3"))
        .stdout(predicate::str::contains("- Removed category"))
        .stdout(predicate::str::contains("- Updated notes"))
        .stdout(predicate::str::contains("Needs a new bulb"));

    homestock_cmd(&db_path)
        .args(["item", "edit", &id, "--quantity", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No changes made."));
}

#[test]
fn test_cli_edit_invalid_date_fails() {
    let (_temp_dir, db_path) = create_cli_test_environment();

    let id = add_item(&db_path, &["Fridge"]);

    homestock_cmd(&db_path)
        .args(["item", "edit", &id, "--warranty", "next year"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("warranty_expiry"));
}

#[test]
fn test_cli_delete_requires_confirmation() {
    let (_temp_dir, db_path) = create_cli_test_environment();

    let id = add_item(&db_path, &["Old Radio"]);

    homestock_cmd(&db_path)
        .args(["item", "delete", &id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires confirmation"));

    homestock_cmd(&db_path)
        .args(["item", "delete", &id, "--confirm"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Deleted item 'Old Radio' (ID: {id})"
        )));

    homestock_cmd(&db_path)
        .args(["item", "show", &id])
        .assert()
        .failure();
}

#[test]
fn test_cli_location_lifecycle() {
    let (_temp_dir, db_path) = create_cli_test_environment();

    let output = homestock_cmd(&db_path)
        .args(["location", "add", "Shed", "--description", "Garden tools"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created location with ID: 8"))
        .get_output()
        .stdout
        .clone();
    let location_id = extract_created_id(&output);

    let item_id = add_item(&db_path, &["Rake", "--location", &location_id]);

    homestock_cmd(&db_path)
        .args(["location", "delete", &location_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted location 'Shed'"));

    homestock_cmd(&db_path)
        .args(["item", "show", &item_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Location: None"));
}

#[test]
fn test_cli_category_add_existing_name() {
    let (_temp_dir, db_path) = create_cli_test_environment();

    homestock_cmd(&db_path)
        .args(["category", "add", "Books", "--icon", "library"])
        .assert()
        .success()
        .stdout(predicate::str::contains("icon: book)"));

    homestock_cmd(&db_path)
        .args(["category", "delete", "999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Category with ID 999 not found"));
}

#[test]
fn test_cli_json_output() {
    let (_temp_dir, db_path) = create_cli_test_environment();

    add_item(&db_path, &["Blender", "--price", "not a price"]);

    homestock_cmd(&db_path)
        .args(["--json", "item", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"Blender\""))
        .stdout(predicate::str::contains("\"quantity\": 1"))
        .stdout(predicate::str::contains("\"purchase_price\": null"));
}
