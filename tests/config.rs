// ABOUTME: Integration tests for configuration loading.
// ABOUTME: Tests environment lookup, validation, and dotenv file handling.

use azdeploy::config::*;
use azdeploy::error::{Error, ErrorKind};
use std::fs;

const ALL_VARS: [(&str, Option<&str>); 6] = [
    (RESOURCE_GROUP, Some("rg-demo")),
    (LOCATION, Some("westeurope")),
    (ACR_NAME, Some("myacr")),
    (IMAGE_NAME, Some("myapp")),
    (CONTAINER_NAME, Some("hello")),
    (IMAGE_TAG, Some("v1")),
];

mod from_env {
    use super::*;

    #[test]
    fn reads_process_environment() {
        temp_env::with_vars(ALL_VARS, || {
            let config = DeploymentConfig::from_env().unwrap();
            assert_eq!(config.resource_group, "rg-demo");
            assert_eq!(config.registry.login_server(), "myacr.azurecr.io");
            assert_eq!(
                config.registry_image().to_string(),
                "myacr.azurecr.io/myapp:v1"
            );
        });
    }

    #[test]
    fn each_missing_variable_is_a_configuration_error() {
        for missing in REQUIRED_VARS {
            let vars: Vec<(&str, Option<&str>)> = ALL_VARS
                .iter()
                .map(|&(k, v)| if k == missing { (k, None) } else { (k, v) })
                .collect();

            temp_env::with_vars(vars, || {
                let err = DeploymentConfig::from_env().unwrap_err();
                assert_eq!(err.kind(), ErrorKind::Configuration);
                assert_eq!(
                    err.to_string(),
                    format!("missing required environment variable: {missing}")
                );
            });
        }
    }

    #[test]
    fn empty_variable_is_missing() {
        let mut vars = ALL_VARS.to_vec();
        vars[4] = (CONTAINER_NAME, Some(""));
        temp_env::with_vars(vars, || {
            let err = DeploymentConfig::from_env().unwrap_err();
            assert!(matches!(err, Error::MissingEnvVar(CONTAINER_NAME)));
        });
    }

    #[test]
    fn uppercase_container_name_is_rejected() {
        let mut vars = ALL_VARS.to_vec();
        vars[4] = (CONTAINER_NAME, Some("Hello"));
        temp_env::with_vars(vars, || {
            let err = DeploymentConfig::from_env().unwrap_err();
            assert!(matches!(err, Error::InvalidConfig(ref m) if m.contains("lowercase")));
        });
    }
}

mod env_file {
    use super::*;

    #[test]
    fn default_env_file_populates_environment() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(ENV_FILENAME),
            "AZDEPLOY_TEST_DEFAULT_FILE=from_file\n",
        )
        .unwrap();

        temp_env::with_var_unset("AZDEPLOY_TEST_DEFAULT_FILE", || {
            load_env_file(dir.path(), None).unwrap();
            assert_eq!(
                std::env::var("AZDEPLOY_TEST_DEFAULT_FILE").as_deref(),
                Ok("from_file")
            );
        });
    }

    #[test]
    fn explicit_env_file_is_used() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("staging.env");
        fs::write(&path, "AZDEPLOY_TEST_EXPLICIT_FILE=staging\n").unwrap();

        temp_env::with_var_unset("AZDEPLOY_TEST_EXPLICIT_FILE", || {
            load_env_file(dir.path(), Some(&path)).unwrap();
            assert_eq!(
                std::env::var("AZDEPLOY_TEST_EXPLICIT_FILE").as_deref(),
                Ok("staging")
            );
        });
    }

    #[test]
    fn environment_wins_over_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(ENV_FILENAME),
            "AZDEPLOY_TEST_PRECEDENCE=from_file\n",
        )
        .unwrap();

        temp_env::with_var("AZDEPLOY_TEST_PRECEDENCE", Some("from_env"), || {
            load_env_file(dir.path(), None).unwrap();
            assert_eq!(
                std::env::var("AZDEPLOY_TEST_PRECEDENCE").as_deref(),
                Ok("from_env")
            );
        });
    }

    #[test]
    fn missing_explicit_file_is_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_env_file(dir.path(), Some(&dir.path().join("nope.env"))).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert!(err.to_string().contains("nope.env"));
    }
}
