#![allow(dead_code)]

use assert_cmd::Command;
use binmark::{test_utils, ACCESS_KEY_VAR, API_KEY_VAR, HOME_VAR};
use serde_json::{json, Value};
use std::path::Path;
use wiremock::MockServer;

pub async fn start_mock_server() -> MockServer {
    MockServer::start().await
}

/// A command running in `temp_path` with a settings file pointing to the
/// mock server and without credentials.
pub fn command(temp_path: &Path, mock_server: &MockServer) -> Command {
    test_utils::write_config(temp_path, &mock_server.uri()).unwrap();

    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.current_dir(temp_path);
    cmd.env(HOME_VAR, temp_path);
    cmd.env_remove(API_KEY_VAR);
    cmd.env_remove(ACCESS_KEY_VAR);
    cmd
}

/// Like `command`, but with credentials.
pub fn authorized_command(temp_path: &Path, mock_server: &MockServer) -> Command {
    let mut cmd = command(temp_path, mock_server);
    cmd.env(API_KEY_VAR, "test-api-key");
    cmd.env(ACCESS_KEY_VAR, "test-access-key");
    cmd
}

pub fn bin(id: &str) -> Value {
    json!({
        "record": {
            "url": "https://www.youtube.com/watch?v=XYZ",
            "title": "Rust in 100 seconds",
            "text": "Rust in 100 seconds",
            "note": "watch later",
            "category": "programming",
            "kind": "youtube",
            "source": {
                "type": "youtube",
                "video_id": "XYZ",
                "title": "Rust in 100 seconds",
                "author": "Fireship",
                "thumbnail": "https://i.ytimg.com/vi/XYZ/hqdefault.jpg"
            }
        },
        "metadata": {
            "id": id,
            "createdAt": "2024-05-01T10:30:00.000Z",
            "private": true
        }
    })
}

pub fn bin_entries(count: usize) -> Value {
    (0..count)
        .map(|i| {
            json!({
                "private": i % 2 == 0,
                "snippetMeta": { "name": format!("Bookmark {i}") },
                "record": format!("bin-{i}"),
                "createdAt": "2024-05-01T10:30:00.000Z"
            })
        })
        .collect()
}
