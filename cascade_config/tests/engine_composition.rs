//! The two engines composed: merging split documents, then resolving
//! inheritance over the combined tree.

use anyhow::{Result, ensure};
use cascade_config::{deep_merge, resolve};
use serde_json::json;

#[test]
fn merge_combines_public_and_secret_documents() -> Result<()> {
    let public = json!({
        "dev": {"username": "dev.user"},
        "test": {
            "username": "test.user",
            "server": {"username": "ubuntu"},
            "databases": [
                {"host": "www.db1.com", "username": "admin"},
                {"host": "www.db2.com", "username": "admin"},
            ],
        },
    });
    let secret = json!({
        "test": {
            "password": "test.password",
            "server": {"password": "ubuntu.password"},
            "databases": [
                {"password": "db1pwd"},
                {"password": "db2pwd"},
            ],
        },
        "prod": {"password": "prod.password"},
    });

    let merged = deep_merge(&public, &secret)?;
    let expected = json!({
        "dev": {"username": "dev.user"},
        "test": {
            "username": "test.user",
            "password": "test.password",
            "server": {"username": "ubuntu", "password": "ubuntu.password"},
            "databases": [
                {"host": "www.db1.com", "username": "admin", "password": "db1pwd"},
                {"host": "www.db2.com", "username": "admin", "password": "db2pwd"},
            ],
        },
        "prod": {"password": "prod.password"},
    });
    ensure!(merged == expected, "unexpected merge: {merged:#}");
    Ok(())
}

#[test]
fn merged_tree_resolves_shared_defaults() -> Result<()> {
    let base = json!({
        "_shared": {"*.region": "eu-west-1"},
        "dev": {"databases": [{"host": "db1"}]},
        "prod": {"databases": [{"host": "db2"}], "region": "us-east-1"},
    });
    let secrets = json!({
        "dev": {"databases": [{"password": "dev-pwd"}]},
        "prod": {"databases": [{"password": "prod-pwd"}]},
    });

    let merged = deep_merge(&base, &secrets)?;
    let resolved = resolve(&merged)?;
    let expected = json!({
        "dev": {
            "databases": [{"host": "db1", "password": "dev-pwd"}],
            "region": "eu-west-1",
        },
        "prod": {
            "databases": [{"host": "db2", "password": "prod-pwd"}],
            "region": "us-east-1",
        },
    });
    ensure!(resolved == expected, "unexpected result: {resolved:#}");
    Ok(())
}

#[test]
fn shared_sections_merge_like_any_other_mapping() -> Result<()> {
    // Defaults may themselves be split across documents; the reserved key
    // is ordinary data to the merge engine.
    let left = json!({"_shared": {"*.memory": 2}, "dev": {}});
    let right = json!({"_shared": {"*.cpu": 1}, "prod": {}});
    let resolved = resolve(&deep_merge(&left, &right)?)?;
    ensure!(
        resolved == json!({
            "dev": {"memory": 2, "cpu": 1},
            "prod": {"memory": 2, "cpu": 1},
        }),
        "unexpected result: {resolved:#}"
    );
    Ok(())
}
