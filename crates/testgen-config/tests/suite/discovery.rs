use std::ffi::OsString;

use testgen_config::{
    discover_config_path, load_for_workspace, with_config_env_lock, TestgenConfig,
    TESTGEN_CONFIG_ENV_VAR,
};
use tempfile::tempdir;

struct EnvVarGuard {
    key: &'static str,
    prev: Option<OsString>,
}

impl EnvVarGuard {
    fn set(key: &'static str, value: &std::path::Path) -> Self {
        let prev = std::env::var_os(key);
        std::env::set_var(key, value);
        Self { key, prev }
    }

    fn unset(key: &'static str) -> Self {
        let prev = std::env::var_os(key);
        std::env::remove_var(key);
        Self { key, prev }
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        match &self.prev {
            Some(v) => std::env::set_var(self.key, v),
            None => std::env::remove_var(self.key),
        }
    }
}

#[test]
fn discovers_testgen_toml_in_workspace_root() {
    with_config_env_lock(|| {
        let _env = EnvVarGuard::unset(TESTGEN_CONFIG_ENV_VAR);

        let dir = tempdir().unwrap();
        let config_path = dir.path().join("testgen.toml");
        std::fs::write(&config_path, "[generation]\nseed = 1\n").unwrap();

        let discovered = discover_config_path(dir.path()).expect("testgen.toml is discovered");
        assert_eq!(discovered, config_path.canonicalize().unwrap_or(config_path));
    });
}

#[test]
fn plain_name_wins_over_dotfile() {
    with_config_env_lock(|| {
        let _env = EnvVarGuard::unset(TESTGEN_CONFIG_ENV_VAR);

        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(".testgen.toml"), "[generation]\nseed = 2\n").unwrap();
        let discovered = discover_config_path(dir.path()).expect(".testgen.toml is discovered");
        assert!(discovered.ends_with(".testgen.toml"), "{discovered:?}");

        std::fs::write(dir.path().join("testgen.toml"), "[generation]\nseed = 1\n").unwrap();
        let (config, path) = load_for_workspace(dir.path()).unwrap();
        assert!(path.expect("config path").ends_with("testgen.toml"));
        assert_eq!(config.generation.seed, Some(1));
    });
}

#[test]
fn env_override_wins_over_workspace_file() {
    with_config_env_lock(|| {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("testgen.toml"), "[index]\nlombok = true\n").unwrap();

        let override_path = dir.path().join("override.toml");
        std::fs::write(&override_path, "[index]\nlombok = false\n").unwrap();
        let _env = EnvVarGuard::set(TESTGEN_CONFIG_ENV_VAR, &override_path);

        let (config, path) = load_for_workspace(dir.path()).unwrap();
        assert_eq!(
            path.expect("config path"),
            override_path.canonicalize().unwrap_or(override_path)
        );
        assert!(!config.index.lombok);
    });
}

#[test]
fn relative_env_override_is_resolved_against_the_workspace_root() {
    with_config_env_lock(|| {
        let dir = tempdir().unwrap();
        std::fs::create_dir(dir.path().join("conf")).unwrap();
        let config_path = dir.path().join("conf").join("gen.toml");
        std::fs::write(&config_path, "").unwrap();
        let _env = EnvVarGuard::set(TESTGEN_CONFIG_ENV_VAR, std::path::Path::new("conf/gen.toml"));

        let discovered = discover_config_path(dir.path()).expect("override path");
        assert_eq!(discovered, config_path.canonicalize().unwrap_or(config_path));
    });
}

#[test]
fn missing_config_falls_back_to_defaults() {
    with_config_env_lock(|| {
        let _env = EnvVarGuard::unset(TESTGEN_CONFIG_ENV_VAR);

        let dir = tempdir().unwrap();
        let (config, path) = load_for_workspace(dir.path()).unwrap();
        assert_eq!(path, None);
        assert_eq!(config, TestgenConfig::default());
    });
}
