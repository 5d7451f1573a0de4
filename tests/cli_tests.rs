use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn todoql_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("todoql"));
    for var in [
        "TODOQL_CONFIG",
        "TODOQL_STORE_URI",
        "TODOQL_DATABASE",
        "TODOQL_PORT",
        "TODOQL_HOST",
        "TODOQL_LOG_FILE",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

// =============================================================================
// Basic CLI
// =============================================================================

#[test]
fn test_help() {
    todoql_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("GraphQL gateway"));
}

#[test]
fn test_version() {
    todoql_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("todoql"));
}

#[test]
fn test_schema_prints_sdl() {
    todoql_cmd()
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("getUserByID"))
        .stdout(predicate::str::contains("deleteTodoByID"))
        .stdout(predicate::str::contains("type User"));
}

// =============================================================================
// Query / Mutate
// =============================================================================

#[test]
fn test_query_against_memory_store() {
    todoql_cmd()
        .args(["--store-uri", "memory://", "query", "{ getUsers { userID } }"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"getUsers\": []"));
}

#[test]
fn test_mutate_wraps_body() {
    todoql_cmd()
        .args([
            "--store-uri",
            "memory://",
            "mutate",
            r#"createUser(userID: "u1", name: "Ann", email: "a@x.com") { userID name }"#,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"Ann\""));
}

#[test]
fn test_query_with_variables() {
    todoql_cmd()
        .args([
            "--store-uri",
            "memory://",
            "query",
            "query($id: ID!) { getTodoByID(id: $id) { id } }",
            "--variables",
            r#"{"id": "t1"}"#,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"getTodoByID\": null"));
}

#[test]
fn test_invalid_variables_fail() {
    todoql_cmd()
        .args([
            "--store-uri",
            "memory://",
            "query",
            "{ getUsers { userID } }",
            "--variables",
            "not json",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid --variables JSON"));
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_store_uri_from_config_file() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("todoql.toml"),
        "[store]\nuri = \"memory://\"\n",
    )
    .unwrap();

    todoql_cmd()
        .args(["query", "{ getTodos { id } }"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"getTodos\": []"));
}

#[test]
fn test_store_uri_from_env() {
    todoql_cmd()
        .env("TODOQL_STORE_URI", "memory://")
        .args(["query", "{ getTodos { id } }"])
        .assert()
        .success();
}

#[test]
fn test_unsupported_store_scheme_fails() {
    todoql_cmd()
        .args(["--store-uri", "redis://localhost", "query", "{ getUsers { userID } }"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported store scheme"));
}

#[test]
fn test_missing_config_file_fails() {
    let temp_dir = TempDir::new().unwrap();

    todoql_cmd()
        .args(["--config", "missing.toml", "query", "{ getUsers { userID } }"])
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn test_store_uri_flag_overrides_config_file() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("todoql.toml"),
        "[store]\nuri = \"redis://localhost\"\n",
    )
    .unwrap();

    todoql_cmd()
        .args(["query", "{ getUsers { userID } }"])
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported store scheme"));

    todoql_cmd()
        .args(["--store-uri", "memory://", "query", "{ getUsers { userID } }"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"getUsers\": []"));
}

#[test]
fn test_store_uri_env_overrides_config_file() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("todoql.toml"),
        "[store]\nuri = \"redis://localhost\"\n",
    )
    .unwrap();

    todoql_cmd()
        .env("TODOQL_STORE_URI", "memory://")
        .args(["query", "{ getTodos { id } }"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"getTodos\": []"));
}
