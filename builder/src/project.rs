//! Generated projects and the project index

use chrono::{DateTime, Utc};
use ntfly_core::{KeyValueStore, NtflyError};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::{BuilderError, Result};
use crate::generator::{self, Category, ProjectDescription};

pub const INDEX_KEY: &str = "ntfly_projects";
pub const PROJECT_KEY_PREFIX: &str = "ntfly_project_";

const ID_SUFFIX_LEN: usize = 9;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// A generated site. Never modified after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedProject {
    pub id: String,
    #[serde(rename = "data")]
    pub description: ProjectDescription,
    pub files: BTreeMap<String, String>,
    pub created_at: DateTime<Utc>,
}

/// Index entry, enough to list projects without loading their files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub category: Category,
    pub created_at: DateTime<Utc>,
}

impl From<&GeneratedProject> for ProjectSummary {
    fn from(project: &GeneratedProject) -> Self {
        Self {
            id: project.id.clone(),
            name: project.description.name.clone(),
            category: project.description.category,
            created_at: project.created_at,
        }
    }
}

pub struct ProjectRepository {
    store: Arc<dyn KeyValueStore>,
}

impl ProjectRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Generate a project, persist it and append it to the index.
    pub fn create(&self, description: ProjectDescription) -> Result<GeneratedProject> {
        let files = generator::generate_files(&description);
        let created_at = Utc::now();

        let mut id = new_project_id(created_at);
        while self.store.contains(&project_key(&id))? {
            id = new_project_id(created_at);
        }

        let project = GeneratedProject {
            id,
            description,
            files,
            created_at,
        };

        // Everything is serialized up front so a bad index fails before any write.
        let mut index = self.list()?;
        index.push(ProjectSummary::from(&project));
        let index_blob = serde_json::to_vec(&index).map_err(NtflyError::from)?;
        let blob = serde_json::to_vec(&project).map_err(NtflyError::from)?;

        let key = project_key(&project.id);
        self.store.set(&key, &blob)?;
        if let Err(e) = self.store.set(INDEX_KEY, &index_blob) {
            if let Err(cleanup) = self.store.remove(&key) {
                tracing::warn!(id = %project.id, error = %cleanup, "orphaned project blob");
            }
            return Err(e.into());
        }

        tracing::info!(
            id = %project.id,
            category = project.description.category.as_str(),
            "project created"
        );
        Ok(project)
    }

    pub fn get(&self, id: &str) -> Result<Option<GeneratedProject>> {
        let Some(blob) = self.store.get(&project_key(id))? else {
            return Ok(None);
        };
        let project = serde_json::from_slice(&blob).map_err(NtflyError::from)?;
        Ok(Some(project))
    }

    /// Like [`get`](Self::get), but a missing project is an error.
    pub fn require(&self, id: &str) -> Result<GeneratedProject> {
        self.get(id)?
            .ok_or_else(|| BuilderError::ProjectNotFound(id.to_string()))
    }

    /// Index entries in creation order
    pub fn list(&self) -> Result<Vec<ProjectSummary>> {
        match self.store.get(INDEX_KEY)? {
            Some(blob) => Ok(serde_json::from_slice(&blob).map_err(NtflyError::from)?),
            None => Ok(Vec::new()),
        }
    }

    /// Drop every project and the index
    pub fn clear(&self) -> Result<()> {
        for key in self.store.keys_with_prefix(PROJECT_KEY_PREFIX)? {
            self.store.remove(&key)?;
        }
        self.store.remove(INDEX_KEY)?;
        Ok(())
    }
}

fn project_key(id: &str) -> String {
    format!("{PROJECT_KEY_PREFIX}{id}")
}

/// `project_<epoch millis>_<9 base36 chars>`
fn new_project_id(now: DateTime<Utc>) -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();
    format!("project_{}_{}", now.timestamp_millis(), suffix)
}
