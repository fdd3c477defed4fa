use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

fn checkout_demo() -> Command {
    let mut cmd = Command::new(cargo_bin!("checkout-demo"));
    cmd.env("CARD_SECURITY_CODE", "1234")
        .env("PAYPAL_EMAIL", "alice@daemonico.com")
        .env_remove("DEFAULT_CHANNEL")
        .env("RUST_LOG", "warn");
    cmd
}

fn phone_cart() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[[items]]
name = "Samsung"
quantity = 1
unit_price = 10000
"#
    )
    .unwrap();
    file
}

#[test]
fn scenarios_settle_phone_and_chair() {
    checkout_demo()
        .arg("scenarios")
        .assert()
        .success()
        .stdout(predicate::str::contains("Samsung x1 @ 10000"))
        .stdout(predicate::str::contains("office x2 @ 5000 = 10000"))
        .stdout(predicate::str::contains("status: open"));
}

#[test]
fn scenarios_as_json() {
    let output = checkout_demo()
        .args(["scenarios", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let orders: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(orders.as_array().unwrap().len(), 3);
    assert_eq!(orders[0]["status"], "paid");
    assert_eq!(orders[2]["total_price"], 500000);
}

#[test]
fn paypal_with_robot_check_succeeds() {
    let cart = phone_cart();
    checkout_demo()
        .args(["pay", "--channel", "paypal", "--not-robot", "--cart"])
        .arg(cart.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("total price: 10000"))
        .stdout(predicate::str::contains("status: paid"));
}

#[test]
fn unverified_debit_exits_with_authorization_code() {
    let cart = phone_cart();
    checkout_demo()
        .args(["pay", "--channel", "debit", "--cart"])
        .arg(cart.path())
        .assert()
        .code(3)
        .stdout(predicate::str::contains("status: open"))
        .stderr(predicate::str::contains("Authorization failed"));
}

#[test]
fn unknown_channel_is_rejected() {
    let cart = phone_cart();
    checkout_demo()
        .args(["pay", "--channel", "cash", "--cart"])
        .arg(cart.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unsupported payment channel: cash"));
}

#[test]
fn default_channel_comes_from_env() {
    let cart = phone_cart();
    checkout_demo()
        .env("DEFAULT_CHANNEL", "credit")
        .args(["pay", "--cart"])
        .arg(cart.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("status: paid"));
}

#[test]
fn missing_cart_file_fails() {
    checkout_demo()
        .args(["pay", "--cart", "does-not-exist.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read cart"));
}

#[test]
fn debit_with_sms_code_settles() {
    let cart = phone_cart();
    checkout_demo()
        .args(["pay", "--channel", "debit", "--sms-code", "1234", "--cart"])
        .arg(cart.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("total price: 10000"))
        .stdout(predicate::str::contains("status: paid"));
}

#[test]
fn pay_as_json() {
    let cart = phone_cart();
    let output = checkout_demo()
        .args(["pay", "--channel", "credit", "--json", "--cart"])
        .arg(cart.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let orders: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(orders.as_array().unwrap().len(), 1);
    assert_eq!(orders[0]["status"], "paid");
    assert_eq!(orders[0]["total_price"], 10000);
    assert_eq!(orders[0]["items"][0]["name"], "Samsung");
    assert!(orders[0]["paid_at"].is_string());
}

#[test]
fn unverified_paypal_as_json_reports_open_order() {
    let cart = phone_cart();
    let output = checkout_demo()
        .args(["pay", "--channel", "paypal", "--json", "--cart"])
        .arg(cart.path())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let orders: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(orders[0]["status"], "open");
    assert!(orders[0].get("paid_at").is_none());
}

#[test]
fn overflowing_cart_is_rejected() {
    let mut cart = NamedTempFile::new().unwrap();
    writeln!(
        cart,
        "[[items]]\nname = \"big\"\nquantity = 4294967295\nunit_price = 9223372036854775807"
    )
    .unwrap();

    checkout_demo()
        .args(["pay", "--channel", "credit", "--cart"])
        .arg(cart.path())
        .assert()
        .code(65)
        .stdout(predicate::str::is_empty());
}
