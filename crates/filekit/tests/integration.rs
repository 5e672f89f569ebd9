use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};

use filekit::filekit_render::{rows_from_json, BlockStyleOverride};
use filekit::handler::{self, FileOptions};
use filekit::{FileClass, FileError, FileHandle};
use serde_json::json;
use tempfile::TempDir;

fn filekit() -> Command {
    Command::new(env!("CARGO_BIN_EXE_filekit"))
}

#[test]
fn log_file_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("logs/service.log");

    let log = handler::create_or_open(&path, "", &FileOptions::default())
        .unwrap()
        .into_ascii()
        .unwrap();
    log.log("booting", false).unwrap();
    log.append_block(vec!["status", "ok"], "default", Some(&BlockStyleOverride::new().padh(2)))
        .unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "booting\n*----------*\n|  status  |\n|  ok      |\n*----------*\n"
    );
}

#[test]
fn table_written_through_handle() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("report.txt");
    let rows = rows_from_json(&json!([{"id": 1, "ok": true}, {"id": 20, "ok": false}])).unwrap();

    let handle = handler::create(&path, "", &FileOptions::default()).unwrap();
    let FileHandle::Ascii(report) = handle else {
        panic!("expected a text file");
    };
    report.put_table(&rows, "modern", None).unwrap();

    assert_eq!(
        report.content().unwrap(),
        "\
┌───┬────┬───────┐
│   │ id │ ok    │
├───┼────┼───────┤
│ 1 │  1 │ true  │
├───┼────┼───────┤
│ 2 │ 20 │ false │
└───┴────┴───────┘
"
    );
}

#[test]
fn moving_keeps_the_handle_class() {
    let dir = TempDir::new().unwrap();
    let from = dir.path().join("data.bin");
    fs::write(&from, [0u8, 1, 2]).unwrap();

    let mut handle = handler::open(&from, &FileOptions::default()).unwrap();
    assert!(matches!(handle, FileHandle::Binary(_)));

    let to = dir.path().join("data.raw");
    handle.file_mut().rename(&to, false).unwrap();
    assert_eq!(handle.path(), to.as_path());
    assert_eq!(handle.file().size().unwrap(), 3);
}

#[test]
fn forced_type_overrides_detection() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notes.dat");
    fs::write(&path, [0xffu8]).unwrap();

    let options = FileOptions::default().file_type(FileClass::Ascii);
    assert!(handler::open(&path, &options).unwrap().as_ascii().is_some());
    assert!(matches!(
        handler::create(&path, "", &options).unwrap_err(),
        FileError::AlreadyExists(_)
    ));
}

#[test]
fn cli_block_from_stdin() {
    let mut child = filekit()
        .args(["block", "--style", "modern", "--align", "center", "--width", "9"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(b"abc\n").unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "┌───────┐\n│  abc  │\n└───────┘\n"
    );
}

#[test]
fn cli_block_strict_width_fails() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.txt");
    fs::write(&input, "too wide for this").unwrap();

    let output = filekit()
        .args(["block", "--width", "5", "--strict"])
        .arg(&input)
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Parameter style.width must be of type integer and larger or equal to 21"));
}

#[test]
fn cli_table_to_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("rows.json");
    let out = dir.path().join("out/table.txt");
    fs::write(&input, r#"[["a", 1.5], ["bb", 10.25]]"#).unwrap();

    let status = filekit()
        .args(["table", "--style", "lines", "--no-rowlabel", "--no-collabel"])
        .arg(&input)
        .arg("--output")
        .arg(&out)
        .status()
        .unwrap();

    assert!(status.success());
    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        " a  |  1.5  \n--------------\n bb | 10.25 \n"
    );
}

#[test]
fn cli_log_appends() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("app.log");

    for message in ["first", "second"] {
        let status = filekit()
            .arg("log")
            .arg(&log)
            .arg(message)
            .arg("--no-date")
            .status()
            .unwrap();
        assert!(status.success());
    }

    assert_eq!(fs::read_to_string(&log).unwrap(), "first\nsecond\n");
}

#[test]
fn cli_info_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("a.md");
    fs::write(&path, "# hi\n").unwrap();

    let output = filekit().arg("info").arg(&path).arg("--json").output().unwrap();
    assert!(output.status.success());

    let info: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(info["basename"], "a.md");
    assert_eq!(info["size"], 5);
    assert_eq!(info["class"], "ascii");
}
