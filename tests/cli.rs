//! End-to-end tests for the `rowsync` binary.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const ROW_NAMES: &str = "src/Smithbox.Data/Assets/PARAM/ER/Community Row Names.json";

struct Fixture {
    _dir: TempDir,
    smithbox: PathBuf,
    paramdex: PathBuf,
}

impl Fixture {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let smithbox = dir.path().join("Smithbox");
        let paramdex = dir.path().join("Paramdex");
        fs::create_dir_all(smithbox.join("src/Smithbox.Data/Assets/PARAM/ER")).unwrap();
        fs::create_dir_all(paramdex.join("ER/Names")).unwrap();
        Self {
            _dir: dir,
            smithbox,
            paramdex,
        }
    }

    fn write_row_names(&self, json: &str) {
        fs::write(self.smithbox.join(ROW_NAMES), json).unwrap();
    }

    fn write_names(&self, param: &str, content: &str) {
        fs::write(self.names_path(param), content).unwrap();
    }

    fn names_path(&self, param: &str) -> PathBuf {
        self.paramdex.join("ER/Names").join(format!("{param}.txt"))
    }

    fn row_names(&self) -> serde_json::Value {
        let content = fs::read_to_string(self.smithbox.join(ROW_NAMES)).unwrap();
        serde_json::from_str(&content).unwrap()
    }

    fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("rowsync").unwrap();
        cmd.env_remove("ROWSYNC_SMITHBOX")
            .env_remove("ROWSYNC_PARAMDEX")
            .env_remove("RUST_LOG")
            .arg("--smithbox")
            .arg(&self.smithbox)
            .arg("--paramdex")
            .arg(&self.paramdex)
            .arg("--no-color");
        cmd
    }
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

const WEAPONS: &str = r#"{
  "Params": [
    {
      "Name": "EquipParamWeapon",
      "Entries": [
        { "Index": 0, "ID": 1000, "Name": "Dagger" },
        { "Index": 1, "ID": 1001, "Name": "" },
        { "Index": 2, "ID": 1002, "Name": "Parrying Dagger" }
      ]
    }
  ]
}"#;

#[test]
fn test_to_paramdex_writes_name_files() {
    let fixture = Fixture::new();
    fixture.write_row_names(WEAPONS);

    fixture.command().arg("to-paramdex").assert().success();

    assert_eq!(
        read(&fixture.names_path("EquipParamWeapon")),
        "1000 Dagger\n1002 Parrying Dagger\n"
    );
}

#[test]
fn test_to_paramdex_keeps_unknown_rows() {
    let fixture = Fixture::new();
    fixture.write_row_names(WEAPONS);
    fixture.write_names("EquipParamWeapon", "1000 Dagger\n1001 UNKNOWN\n");

    fixture.command().arg("to-paramdex").assert().success();

    assert_eq!(
        read(&fixture.names_path("EquipParamWeapon")),
        "1000 Dagger\n1001 UNKNOWN\n1002 Parrying Dagger\n"
    );
}

#[test]
fn test_to_paramdex_never_removes_curated_rows() {
    let fixture = Fixture::new();
    fixture.write_row_names(WEAPONS);
    fixture.write_names("EquipParamWeapon", "999 Curated\n1000 Knife\n1001 Spare\n");

    fixture.command().arg("to-paramdex").assert().success();

    assert_eq!(
        read(&fixture.names_path("EquipParamWeapon")),
        "999 Curated\n1000 Knife\n1001 Spare\n1002 Parrying Dagger\n"
    );
}

#[test]
fn test_to_smithbox_fills_blank_names() {
    let fixture = Fixture::new();
    fixture.write_row_names(WEAPONS);
    fixture.write_names("EquipParamWeapon", "1000 Knife\n1001 Misericorde\n");

    fixture.command().arg("to-smithbox").assert().success();

    let doc = fixture.row_names();
    let entries = &doc["Params"][0]["Entries"];
    assert_eq!(entries[0]["Name"], "Dagger");
    assert_eq!(entries[1]["Name"], "Misericorde");
    assert_eq!(entries[2]["Name"], "Parrying Dagger");
}

#[test]
fn test_to_smithbox_overwrite_replaces_names() {
    let fixture = Fixture::new();
    fixture.write_row_names(WEAPONS);
    fixture.write_names("EquipParamWeapon", "1000 Knife\n");

    fixture
        .command()
        .args(["to-smithbox", "--overwrite"])
        .assert()
        .success();

    assert_eq!(fixture.row_names()["Params"][0]["Entries"][0]["Name"], "Knife");
}

#[test]
fn test_dry_run_writes_nothing() {
    let fixture = Fixture::new();
    fixture.write_row_names(WEAPONS);

    fixture
        .command()
        .args(["--dry-run", "to-paramdex"])
        .assert()
        .success();

    assert!(!fixture.names_path("EquipParamWeapon").exists());
}

#[test]
fn test_json_report() {
    let fixture = Fixture::new();
    fixture.write_row_names(WEAPONS);

    let output = fixture
        .command()
        .args(["--json", "to-paramdex"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["success"], true);
    assert_eq!(report["report"]["direction"], "smithbox_to_paramdex");
    assert_eq!(report["report"]["games"][0]["game"], "ER");
    assert_eq!(report["report"]["japanese_saved"], true);
}

#[test]
fn test_malformed_names_file_exits_with_parse_error() {
    let fixture = Fixture::new();
    fixture.write_row_names(WEAPONS);
    fixture.write_names("EquipParamWeapon", "not a row\n");

    fixture.command().arg("to-smithbox").assert().code(4);
}

#[test]
fn test_unknown_game_exits_with_not_found() {
    let fixture = Fixture::new();

    fixture
        .command()
        .args(["--game", "BB", "status"])
        .assert()
        .code(3);
}

#[test]
fn test_missing_roots_exits_with_config_error() {
    Command::cargo_bin("rowsync")
        .unwrap()
        .env_remove("ROWSYNC_SMITHBOX")
        .env_remove("ROWSYNC_PARAMDEX")
        .arg("status")
        .assert()
        .code(7);
}

#[test]
fn test_version() {
    let output = Command::cargo_bin("rowsync")
        .unwrap()
        .arg("version")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert!(String::from_utf8(output).unwrap().starts_with("rowsync "));
}
