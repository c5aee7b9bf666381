use predicates::str::contains;
use std::fs;
use std::path::Path;

mod common;
use common::{init_db_with_data, rgl_with, setup_test_db, setup_test_log, temp_out};

#[test]
fn test_export_csv() {
    let db_path = setup_test_db("export_csv");
    let log_path = setup_test_log("export_csv");
    let out = temp_out("export_csv", "csv");
    init_db_with_data(&db_path, &log_path);

    rgl_with(&db_path, &log_path)
        .args(["export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("csv written");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "id,title,artist,year,style,price,created_at");
    assert_eq!(lines.len(), 4);
    assert!(lines[1].starts_with("3,Picture 3,Artist 3,2002,Oil,3000"));
}

#[test]
fn test_export_csv_empty_has_header() {
    let db_path = setup_test_db("export_csv_empty");
    let log_path = setup_test_log("export_csv_empty");
    let out = temp_out("export_csv_empty", "csv");

    rgl_with(&db_path, &log_path)
        .args(["export", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("csv written");
    assert_eq!(content.trim_end(), "id,title,artist,year,style,price,created_at");
}

#[test]
fn test_export_json() {
    let db_path = setup_test_db("export_json");
    let log_path = setup_test_log("export_json");
    let out = temp_out("export_json", "json");
    init_db_with_data(&db_path, &log_path);

    rgl_with(&db_path, &log_path)
        .args(["export", "--format", "json", "--file", &out])
        .assert()
        .success();

    let data: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).expect("valid json");
    let arr = data.as_array().unwrap();
    assert_eq!(arr.len(), 3);
    assert_eq!(arr[2]["title"], "Picture 1");
    assert_eq!(arr[2]["price"], 1000.0);
}

#[test]
fn test_export_refuses_overwrite_without_force() {
    let db_path = setup_test_db("export_overwrite");
    let log_path = setup_test_log("export_overwrite");
    let out = temp_out("export_overwrite", "json");
    init_db_with_data(&db_path, &log_path);
    fs::write(&out, "keep me").unwrap();

    rgl_with(&db_path, &log_path)
        .args(["export", "--format", "json", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("not overwritten"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    rgl_with(&db_path, &log_path)
        .args(["export", "--format", "json", "--file", &out, "--force"])
        .assert()
        .success();
    assert_ne!(fs::read_to_string(&out).unwrap(), "keep me");
}

#[test]
fn test_backup_plain_and_compressed() {
    let db_path = setup_test_db("backup");
    let log_path = setup_test_log("backup");
    let copy = temp_out("backup_copy", "db");
    let zipped = temp_out("backup_copy", "zip");
    init_db_with_data(&db_path, &log_path);

    rgl_with(&db_path, &log_path)
        .args(["backup", "--file", &copy])
        .assert()
        .success()
        .stdout(contains("Backup created"));
    assert_eq!(fs::read(&copy).unwrap(), fs::read(&db_path).unwrap());

    fs::remove_file(&copy).ok();

    rgl_with(&db_path, &log_path)
        .args(["backup", "--file", &copy, "--compress"])
        .assert()
        .success();
    assert!(Path::new(&zipped).exists());
    assert!(!Path::new(&copy).exists());
}

#[test]
fn test_export_and_backup_refuse_the_database_file() {
    let db_path = setup_test_db("export_self");
    let log_path = setup_test_log("export_self");
    init_db_with_data(&db_path, &log_path);
    let before = fs::read(&db_path).unwrap();

    rgl_with(&db_path, &log_path)
        .args(["export", "--format", "json", "--file", &db_path, "--force"])
        .assert()
        .failure()
        .stderr(contains("is the database itself"));

    rgl_with(&db_path, &log_path)
        .args(["backup", "--file", &db_path, "--force"])
        .assert()
        .failure()
        .stderr(contains("is the database itself"));

    assert_eq!(fs::read(&db_path).unwrap(), before);

    rgl_with(&db_path, &log_path)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("Picture 1"))
        .stdout(contains("Picture 3"));
}
