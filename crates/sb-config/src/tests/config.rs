use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, eq, ok};
use log::LevelFilter;
use serial_test::serial;

#[test]
#[serial]
fn given_no_config_file_when_load_then_defaults_apply() {
    // Given
    let _env = setup_config_dir();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.storage.path.as_str(), eq("board.json"));
    assert_that!(*config.logging.level, eq(LevelFilter::Info));
    assert_that!(config.logging.colored, eq(true));
    assert_that!(config.validate(), ok(anything()));
}

#[test]
#[serial]
fn given_config_toml_when_load_then_values_applied() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
            [storage]
            path = "kanban.json"

            [logging]
            level = "debug"
            colored = false
        "#,
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.storage.path.as_str(), eq("kanban.json"));
    assert_that!(*config.logging.level, eq(LevelFilter::Debug));
    assert_that!(config.logging.colored, eq(false));
}

#[test]
#[serial]
fn given_env_override_when_load_then_wins_over_toml() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        "[storage]\npath = \"from-toml.json\"\n",
    )
    .unwrap();
    let _path = EnvGuard::set("SB_STORAGE_PATH", "from-env.json");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.storage.path.as_str(), eq("from-env.json"));
}

#[test]
#[serial]
fn given_missing_config_dir_when_load_then_directory_created() {
    // Given
    let temp = tempfile::TempDir::new().unwrap();
    let nested = temp.path().join("nested").join(".sb");
    let _guard = EnvGuard::set("SB_CONFIG_DIR", nested.to_str().unwrap());

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    assert_that!(nested.exists(), eq(true));
}
