//! Integration tests for the ntp CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use ntp_core::{Attribute, CharacterClass, CharacterRecord};
use predicates::prelude::*;
use tempfile::TempDir;

fn ntp() -> Command {
    let mut cmd = Command::cargo_bin("ntp").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("NTP_LOG");
    cmd
}

/// Create a Fighter named Iris in a temp dir and return the dir and file.
fn fighter() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("iris.json");
    ntp()
        .args(["new", "Iris", "--class", "fighter", "-o"])
        .arg(&file)
        .assert()
        .success();
    (dir, file)
}

fn read(file: &Path) -> CharacterRecord {
    CharacterRecord::from_json(&fs::read_to_string(file).unwrap()).unwrap()
}

// ---------------------------------------------------------------------------
// new
// ---------------------------------------------------------------------------

#[test]
fn new_creates_recomputed_record() {
    let (_dir, file) = fighter();
    let record = read(&file);
    assert_eq!(record.name, "Iris");
    assert_eq!(record.class, CharacterClass::Fighter);
    assert_eq!(record.health.maximum, 26);
    assert_eq!(record.sanity.maximum, 15);
    assert_eq!(record.effort.maximum, 6);
    assert_eq!(record.defense, 11);
}

#[test]
fn new_defaults_file_name_from_character() {
    let dir = TempDir::new().unwrap();
    ntp()
        .args(["new", "Ada Quill"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Created Ada Quill"));

    assert!(dir.path().join("ada_quill.json").exists());
}

#[test]
fn new_fails_if_file_exists() {
    let (_dir, file) = fighter();
    ntp()
        .args(["new", "Iris", "-o"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn new_rejects_unknown_class() {
    let dir = TempDir::new().unwrap();
    ntp()
        .args(["new", "Iris", "--class", "wizard"])
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown class"));
}

// ---------------------------------------------------------------------------
// set
// ---------------------------------------------------------------------------

#[test]
fn set_recomputes_fighter_maxima() {
    let (_dir, file) = fighter();
    for (attr, value) in [("vigor", "3"), ("dis", "2"), ("str", "4")] {
        ntp()
            .args(["set"])
            .arg(&file)
            .args(["attribute", attr, value])
            .assert()
            .success();
    }
    ntp()
        .args(["set"])
        .arg(&file)
        .args(["exposure", "15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tier 3"));

    let record = read(&file);
    assert_eq!(record.health.maximum, 44);
    assert_eq!(record.sanity.maximum, 21);
    assert_eq!(record.effort.maximum, 16);
    assert_eq!(record.defense, 14);
}

#[test]
fn set_attribute_warns_when_clamped() {
    let (_dir, file) = fighter();
    ntp()
        .args(["set"])
        .arg(&file)
        .args(["attribute", "vigor", "12"])
        .assert()
        .success()
        .stderr(predicate::str::contains("clamped"));

    assert_eq!(read(&file).attributes.get(Attribute::Vigor), 10);
}

#[test]
fn set_exposure_snaps_and_clamps() {
    let (_dir, file) = fighter();
    ntp()
        .args(["set"])
        .arg(&file)
        .args(["exposure", "47"])
        .assert()
        .success()
        .stderr(predicate::str::contains("clamped").not());
    assert_eq!(read(&file).exposure.percent(), 45);

    ntp()
        .args(["set"])
        .arg(&file)
        .args(["exposure", "-3"])
        .assert()
        .success()
        .stderr(predicate::str::contains("clamped"));
    assert_eq!(read(&file).exposure.percent(), 5);
}

#[test]
fn set_class_to_none_keeps_maxima() {
    let (_dir, file) = fighter();
    ntp()
        .args(["set"])
        .arg(&file)
        .args(["class", "none"])
        .assert()
        .success();
    let record = read(&file);
    assert_eq!(record.class, CharacterClass::Unset);
    assert_eq!(record.health.maximum, 26);
}

// ---------------------------------------------------------------------------
// adjust
// ---------------------------------------------------------------------------

#[test]
fn adjust_clamps_to_bounds() {
    let (_dir, file) = fighter();
    ntp()
        .arg("adjust")
        .arg(&file)
        .args(["health", "-100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("health: 0/26"));

    ntp()
        .arg("adjust")
        .arg(&file)
        .args(["sanity", "1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sanity: 15/15"));
}

#[test]
fn adjust_rejects_unknown_pool() {
    let (_dir, file) = fighter();
    ntp()
        .arg("adjust")
        .arg(&file)
        .args(["mana", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown pool"));
}

// ---------------------------------------------------------------------------
// roll / dice
// ---------------------------------------------------------------------------

#[test]
fn roll_evaluates_notation() {
    ntp()
        .args(["roll", "2d6+3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2d6+3:").and(predicate::str::contains("total")));
}

#[test]
fn roll_is_reproducible_with_seed() {
    let first = ntp().args(["--seed", "42", "roll", "4d10"]).output().unwrap();
    let second = ntp().args(["--seed", "42", "roll", "4d10"]).output().unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn roll_rejects_malformed_notation() {
    ntp()
        .args(["roll", "abc"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("malformed dice notation"));
}

#[test]
fn roll_rejects_oversized_pool() {
    ntp()
        .args(["roll", "4000000000d6"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed dice notation"));
}

#[test]
fn dice_quantity_is_capped() {
    ntp()
        .args(["--seed", "2", "dice", "6", "-n", "5000000000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1000 d6"));
}

#[test]
fn dice_times_is_bounded() {
    ntp()
        .args(["dice", "6", "-t", "1000000"])
        .assert()
        .failure();
}

#[test]
fn dice_grades_d20() {
    ntp()
        .args(["--seed", "1", "dice", "d20", "-n", "3"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("3 d20")
                .and(predicate::str::is_match("Failure|Basic|Guaranteed|High|Extreme").unwrap()),
        );
}

#[test]
fn dice_keeps_earlier_batches() {
    ntp()
        .args(["--seed", "1", "dice", "6", "-n", "2", "-t", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("earlier"));
}

#[test]
fn dice_rejects_unsupported_size() {
    ntp()
        .args(["dice", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported die"));
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_skill_uses_governing_attribute() {
    let (_dir, file) = fighter();
    ntp()
        .args(["set"])
        .arg(&file)
        .args(["attribute", "agility", "3"])
        .assert()
        .success();

    ntp()
        .args(["--seed", "5", "check"])
        .arg(&file)
        .arg("stealth")
        .assert()
        .success()
        .stdout(predicate::str::contains("Stealth").and(predicate::str::contains("(AGI 3d20)")));
}

#[test]
fn check_accepts_attributes() {
    let (_dir, file) = fighter();
    ntp()
        .arg("check")
        .arg(&file)
        .arg("str")
        .assert()
        .success()
        .stdout(predicate::str::contains("STR").and(predicate::str::contains("→")));
}

#[test]
fn check_rejects_unknown_target() {
    let (_dir, file) = fighter();
    ntp()
        .arg("check")
        .arg(&file)
        .arg("juggling")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown skill or attribute"));
}

#[test]
fn sanity_rolls_one_die() {
    ntp()
        .args(["--seed", "3", "sanity"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sanity check"));
}

// ---------------------------------------------------------------------------
// items, weapons, powers
// ---------------------------------------------------------------------------

#[test]
fn weight_totals_inventory() {
    let (_dir, file) = fighter();
    ntp()
        .args(["item", "add"])
        .arg(&file)
        .args(["Rations", "-q", "3", "-w", "2"])
        .assert()
        .success();
    ntp()
        .args(["item", "add"])
        .arg(&file)
        .args(["Flask", "-q", "2", "-w", "1.5"])
        .assert()
        .success();

    ntp()
        .arg("weight")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("9.00"));
}

#[test]
fn item_remove_by_name() {
    let (_dir, file) = fighter();
    ntp()
        .args(["item", "add"])
        .arg(&file)
        .arg("Rope")
        .assert()
        .success();
    ntp()
        .args(["item", "remove"])
        .arg(&file)
        .arg("rope")
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed item Rope"));
    assert!(read(&file).inventory.is_empty());

    ntp()
        .args(["item", "remove"])
        .arg(&file)
        .arg("rope")
        .assert()
        .failure()
        .stderr(predicate::str::contains("item not found"));
}

#[test]
fn blank_names_are_rejected() {
    let (_dir, file) = fighter();
    ntp()
        .args(["power", "add"])
        .arg(&file)
        .arg("   ")
        .assert()
        .failure()
        .stderr(predicate::str::contains("must not be empty"));
}

#[test]
fn weapon_needs_damage() {
    let (_dir, file) = fighter();
    ntp()
        .args(["weapon", "add"])
        .arg(&file)
        .arg("Pistol")
        .assert()
        .failure()
        .stderr(predicate::str::contains("damage notation"));
}

#[test]
fn weapon_damage_and_ammo() {
    let (_dir, file) = fighter();
    ntp()
        .args(["weapon", "add"])
        .arg(&file)
        .args(["Pistol", "--damage", "1d8+2", "--ammo", "6"])
        .assert()
        .success();

    ntp()
        .args(["--seed", "9", "damage"])
        .arg(&file)
        .arg("pistol")
        .assert()
        .success()
        .stdout(predicate::str::contains("1d8+2:"));

    ntp()
        .arg("ammo")
        .arg(&file)
        .args(["Pistol", "-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5/6"));

    ntp()
        .arg("ammo")
        .arg(&file)
        .args(["Pistol", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("6/6"));
}

#[test]
fn damage_with_malformed_notation_fails() {
    let (_dir, file) = fighter();
    ntp()
        .args(["weapon", "add"])
        .arg(&file)
        .args(["Curse", "--damage", "special"])
        .assert()
        .success();

    ntp()
        .arg("damage")
        .arg(&file)
        .arg("curse")
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed dice notation"));
}

// ---------------------------------------------------------------------------
// show
// ---------------------------------------------------------------------------

#[test]
fn show_renders_sheet() {
    let (_dir, file) = fighter();
    ntp()
        .args(["power", "add"])
        .arg(&file)
        .args(["Hex", "-l", "2"])
        .assert()
        .success();

    ntp()
        .arg("show")
        .arg(&file)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Iris")
                .and(predicate::str::contains("Fighter"))
                .and(predicate::str::contains("VIG"))
                .and(predicate::str::contains("Fast Talk"))
                .and(predicate::str::contains("10/26"))
                .and(predicate::str::contains("level 2: Hex")),
        );
}

#[test]
fn show_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    ntp()
        .arg("show")
        .arg(dir.path().join("nobody.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

// ---------------------------------------------------------------------------
// slot
// ---------------------------------------------------------------------------

#[test]
fn slot_save_list_load_delete() {
    let (dir, file) = fighter();
    let store = dir.path().join("slots.json");

    ntp()
        .arg("--store")
        .arg(&store)
        .args(["slot", "save"])
        .arg(&file)
        .arg("night one")
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved slot night one"));

    ntp()
        .arg("--store")
        .arg(&store)
        .args(["slot", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("night one").and(predicate::str::contains("Iris")));

    let restored = dir.path().join("restored.json");
    ntp()
        .arg("--store")
        .arg(&store)
        .args(["slot", "load", "night one", "-o"])
        .arg(&restored)
        .assert()
        .success();
    assert_eq!(read(&restored), read(&file));

    ntp()
        .arg("--store")
        .arg(&store)
        .args(["slot", "delete", "night one"])
        .assert()
        .success();

    ntp()
        .arg("--store")
        .arg(&store)
        .args(["slot", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved slots"));
}

#[test]
fn slot_save_replaces_same_name() {
    let (dir, file) = fighter();
    let store = dir.path().join("slots.json");

    for _ in 0..2 {
        ntp()
            .arg("--store")
            .arg(&store)
            .args(["slot", "save"])
            .arg(&file)
            .arg("main")
            .assert()
            .success();
    }

    ntp()
        .arg("--store")
        .arg(&store)
        .args(["slot", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 slots"));
}

#[test]
fn slot_load_missing_fails() {
    let dir = TempDir::new().unwrap();
    ntp()
        .arg("--store")
        .arg(dir.path().join("slots.json"))
        .args(["slot", "load", "ghost"])
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("slot not found"));
}
