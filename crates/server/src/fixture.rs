use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use serde_json::{json, Value};
use shared::protocol::{robot_list_from_value, RobotList};

/// Where the collection endpoint reads its robots from.
#[derive(Debug, Clone)]
pub enum RobotSource {
    Static(RobotList),
    /// Re-read on every request so the file can be edited while serving.
    File(PathBuf),
}

impl RobotSource {
    pub fn from_settings(robots_file: Option<&str>) -> Self {
        match robots_file {
            Some(path) => Self::File(PathBuf::from(path)),
            None => Self::Static(default_robots()),
        }
    }

    pub async fn robots(&self) -> anyhow::Result<RobotList> {
        match self {
            Self::Static(robots) => Ok(robots.clone()),
            Self::File(path) => read_robots_file(path).await,
        }
    }
}

pub fn default_robots() -> RobotList {
    let body = json!([
        {"id": "1", "name": "Bender", "model": "Bending Unit 22"},
        {"id": "2", "name": "R2-D2", "model": "Astromech"},
        {"id": "3", "name": "Marvin", "model": "Paranoid Android"},
    ]);
    robot_list_from_value(body).unwrap_or_default()
}

async fn read_robots_file(path: &Path) -> anyhow::Result<RobotList> {
    let raw = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read robots fixture '{}'", path.display()))?;
    let body: Value = serde_json::from_slice(&raw)
        .with_context(|| format!("robots fixture '{}' is not valid JSON", path.display()))?;
    robot_list_from_value(body)
        .ok_or_else(|| anyhow!("robots fixture '{}' must be a JSON array", path.display()))
}
