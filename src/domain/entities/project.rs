use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

use crate::entities::option_fields::OptionField;

const TECH_STACK_SEPARATOR: char = ',';

// ───── Database Models ───────────────────────────────────────────────

/// A `projects` row as stored: tech stack comma-joined, featured as 0/1.
#[derive(Debug, sqlx::FromRow)]
pub struct ProjectRow {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub image_path: String,
    pub project_type: String,
    pub year: i64,
    pub status: String,
    pub tech_stack: String,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub featured: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

// ───── API Models ───────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub image_path: String,
    pub project_type: String,
    pub year: i64,
    pub status: String,
    pub tech_stack: Vec<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub featured: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Tech stack as accepted from clients: either a list of names or a string
/// that is already comma-joined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TechStack {
    List(Vec<String>),
    Joined(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub image_path: String,
    pub project_type: String,
    pub year: i64,
    pub status: String,
    pub tech_stack: TechStack,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_false")]
    pub featured: bool,
}

/// An explicit `null` for `featured` on create means not featured.
fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateProjectRequest {
    pub title: OptionField<String>,
    pub description: OptionField<String>,
    pub image_path: OptionField<String>,
    pub project_type: OptionField<String>,
    pub year: OptionField<i64>,
    pub status: OptionField<String>,
    pub tech_stack: OptionField<TechStack>,
    pub github_url: OptionField<String>,
    pub live_url: OptionField<String>,
    pub featured: OptionField<bool>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProjectCreatedResponse {
    pub id: i64,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProjectCountResponse {
    pub count: i64,
}

// ───── Tech stack encoding ──────────────────────────────────────────

impl TechStack {
    /// Stored form. Names are joined as-is, so a name containing a comma
    /// comes back split in two.
    pub fn to_stored(&self) -> String {
        match self {
            TechStack::List(items) => items.join(","),
            TechStack::Joined(joined) => joined.clone(),
        }
    }

    pub fn has_embedded_separator(&self) -> bool {
        match self {
            TechStack::List(items) => items.iter().any(|item| item.contains(TECH_STACK_SEPARATOR)),
            TechStack::Joined(_) => false,
        }
    }
}

pub fn split_tech_stack(stored: &str) -> Vec<String> {
    if stored.is_empty() {
        return Vec::new();
    }
    stored.split(TECH_STACK_SEPARATOR).map(str::to_string).collect()
}

// ───── Conversions ──────────────────────────────────────────────────

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Project {
            id: row.id,
            title: row.title,
            description: row.description,
            image_path: row.image_path,
            project_type: row.project_type,
            year: row.year,
            status: row.status,
            tech_stack: split_tech_stack(&row.tech_stack),
            github_url: row.github_url,
            live_url: row.live_url,
            featured: row.featured != 0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl UpdateProjectRequest {
    /// True when the body named none of the updatable fields.
    pub fn is_empty(&self) -> bool {
        self.title.is_unchanged()
            && self.description.is_unchanged()
            && self.image_path.is_unchanged()
            && self.project_type.is_unchanged()
            && self.year.is_unchanged()
            && self.status.is_unchanged()
            && self.tech_stack.is_unchanged()
            && self.github_url.is_unchanged()
            && self.live_url.is_unchanged()
            && self.featured.is_unchanged()
    }

    /// First non-nullable column the body tries to set to `null`.
    pub fn null_required_field(&self) -> Option<&'static str> {
        let required = [
            ("title", self.title.is_set_to_null()),
            ("description", self.description.is_set_to_null()),
            ("image_path", self.image_path.is_set_to_null()),
            ("project_type", self.project_type.is_set_to_null()),
            ("year", self.year.is_set_to_null()),
            ("status", self.status.is_set_to_null()),
            ("tech_stack", self.tech_stack.is_set_to_null()),
            ("featured", self.featured.is_set_to_null()),
        ];

        required
            .into_iter()
            .find(|(_, is_null)| *is_null)
            .map(|(field, _)| field)
    }
}

impl ProjectCreatedResponse {
    pub fn new(id: i64) -> Self {
        ProjectCreatedResponse {
            id,
            message: "Project created successfully".to_string(),
        }
    }
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        MessageResponse { message: message.into() }
    }
}
