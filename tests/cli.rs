use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("grocery-platform").unwrap();
    cmd.env_remove("GROCERY_CONFIG").env("RUST_LOG", "off");
    cmd
}

#[test]
fn single_item_checkout() {
    let assert = cmd()
        .write_stdin("12 Market Rd\nUPI\n2\n1\n1\n3\n0\n")
        .assert()
        .success()
        .stdout(contains("Potato x3 added to the order at ₹60.0"))
        .stdout(contains("\nOrder Summary:\nVegetable: Potato x3 - ₹60.0\n"))
        .stdout(contains("\nTotal Payment: ₹60.0\n"))
        .stdout(contains("Address: 12 Market Rd"))
        .stdout(contains("Payment Method: UPI"))
        .stdout(contains("Expected Delivery Time: 12:00 PM"));

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let partner = stdout
        .lines()
        .find_map(|l| l.strip_prefix("Delivery Partner: "))
        .expect("partner line");
    assert!(["Hitesh", "Pravin", "Krish", "Kiran"].contains(&partner));
}

#[test]
fn two_items_in_order() {
    cmd()
        .write_stdin("Home\nCash\n1\n1\n1\n2\n2\n1\n1\n0\n")
        .assert()
        .success()
        .stdout(contains("Vegetable: Potato x2 - ₹40.0\nFruit: Coconut x1 - ₹60.0\n"))
        .stdout(contains("Total Payment: ₹100.0"));
}

#[test]
fn bad_input_is_reasked() {
    cmd()
        .write_stdin("Home\nCash\nsoon\n9\n1\n8\n1\n1\n7\n2\n0\n")
        .assert()
        .success()
        .stdout(contains("Please enter a whole number."))
        .stdout(contains("Invalid choice, please try again."))
        .stdout(contains("Invalid category choice, please try again."))
        .stdout(contains("Invalid quantity. Enter a value between 1 and 5: "))
        .stdout(contains("Total Payment: ₹40.0"));
}

#[test]
fn rejected_input_keeps_stderr_quiet_by_default() {
    Command::cargo_bin("grocery-platform")
        .unwrap()
        .env_remove("GROCERY_CONFIG")
        .env_remove("RUST_LOG")
        .write_stdin("Home\nCash\n9\nabc\n1\n7\n1\n9\n1\n6\n2\n0\n")
        .assert()
        .success()
        .stdout(contains("Invalid choice, please try again."))
        .stdout(contains("Please enter a whole number."))
        .stdout(contains("Invalid category choice, please try again."))
        .stdout(contains("Invalid product choice, please try again."))
        .stdout(contains("Invalid quantity. Enter a value between 1 and 5: "))
        .stderr(predicate::str::is_empty());
}

#[test]
fn closed_input_fails() {
    cmd()
        .write_stdin("Home\nCash\n1\n")
        .assert()
        .failure()
        .stdout(contains("Order Summary").not());
}

#[test]
fn config_file_replaces_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grocery.toml");
    fs::write(
        &path,
        r#"
delivery_partners = ["Asha"]
delivery_slots = ["8:00 AM"]

[[categories]]
name = "Spices"
label = "Spice"
products = [{ name = "Turmeric", price = 12.5 }]
"#,
    )
    .unwrap();

    cmd()
        .env("GROCERY_CONFIG", &path)
        .write_stdin("Home\nUPI\n1\n1\n1\n1\n0\n")
        .assert()
        .success()
        .stdout(contains("1. 8:00 AM"))
        .stdout(contains("Available Spices:\n1. Spice: Turmeric - ₹12.5"))
        .stdout(contains("Spice: Turmeric x1 - ₹12.5"))
        .stdout(contains("Delivery Partner: Asha"));
}

#[test]
fn invalid_config_fails_fast() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grocery.toml");
    fs::write(&path, "delivery_partners = []\n").unwrap();

    cmd()
        .env("GROCERY_CONFIG", &path)
        .write_stdin("")
        .assert()
        .failure()
        .stdout(contains("Enter delivery address").not());
}
