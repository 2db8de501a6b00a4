use serde::{Deserialize, Deserializer, Serialize};

pub mod date;
pub mod filter;
pub mod list;
pub mod protocol;
pub mod status;

pub use filter::{ProjectFilter, RequestFilter};
pub use list::{AREAS, SKILLS, join_list, split_list};
pub use status::{ProjectStatus, RequestStatus, StatusColors};

// =========================================================
// 常量定义 (Constants)
// =========================================================

pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Backend identifiers are numeric.
pub type Id = i64;

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// Full user record as returned by login and profile updates.
///
/// Persisted verbatim (as JSON) next to the bearer token, so every optional
/// field tolerates being absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Id,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub career: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub university: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Comma-joined
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<String>,
    /// Comma-joined
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interests: Option<String>,
    #[serde(default, alias = "portfolioLink", skip_serializing_if = "Option::is_none")]
    pub portfolio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl User {
    pub fn initials(&self) -> String {
        initials(&self.name)
    }

    pub fn skill_list(&self) -> Vec<String> {
        split_list(self.skills.as_deref().unwrap_or_default())
    }

    pub fn interest_list(&self) -> Vec<String> {
        split_list(self.interests.as_deref().unwrap_or_default())
    }

    /// "career • university", skipping whichever part is missing.
    pub fn headline(&self) -> String {
        let parts: Vec<&str> = [self.career.as_deref(), self.university.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.trim().is_empty())
            .collect();
        parts.join(" • ")
    }
}

/// Creator / applicant / collaborator reference embedded in other records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: Id,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl UserSummary {
    pub fn initials(&self) -> String {
        initials(&self.name)
    }
}

/// First letter of every word, "Ana María Ruiz" -> "AMR". Falls back to "U".
pub fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect();
    if letters.is_empty() {
        "U".to_string()
    } else {
        letters
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Id,
    #[serde(default)]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub objectives: String,
    /// Comma-joined skill names.
    #[serde(default, alias = "skills", deserialize_with = "null_as_default")]
    pub required_skills: String,
    #[serde(default, alias = "area", deserialize_with = "null_as_default")]
    pub area_theme: String,
    #[serde(default)]
    pub collaborators_needed: u32,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(default)]
    pub creator: Option<UserSummary>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub collaborators: Vec<UserSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Backend hint; the frontend double-checks with the session user.
    #[serde(default)]
    pub is_creator: bool,
}

impl Project {
    pub fn skill_list(&self) -> Vec<String> {
        split_list(&self.required_skills)
    }

    pub fn creator_id(&self) -> Option<Id> {
        self.creator.as_ref().map(|c| c.id)
    }

    pub fn is_collaborator(&self, user_id: Id) -> bool {
        self.collaborators.iter().any(|c| c.id == user_id)
    }
}

/// Project reference embedded in a collaboration request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRef {
    pub id: Id,
    #[serde(default)]
    pub title: String,
    #[serde(default, alias = "area", skip_serializing_if = "Option::is_none")]
    pub area_theme: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollaborationRequest {
    pub id: Id,
    #[serde(default)]
    pub project: Option<ProjectRef>,
    #[serde(default)]
    pub applicant: Option<UserSummary>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(default)]
    pub status: RequestStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl CollaborationRequest {
    pub fn project_id(&self) -> Option<Id> {
        self.project.as_ref().map(|p| p.id)
    }
}

// =========================================================
// 请求体 (Request Bodies)
// =========================================================

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub career: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub university: String,
}

/// Body of create/update project calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub objectives: String,
    /// Comma-joined skill names.
    pub required_skills: String,
    pub area_theme: String,
    pub collaborators_needed: u32,
}

impl Default for ProjectDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            objectives: String::new(),
            required_skills: String::new(),
            area_theme: String::new(),
            collaborators_needed: 1,
        }
    }
}

impl From<&Project> for ProjectDraft {
    fn from(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            description: project.description.clone(),
            objectives: project.objectives.clone(),
            required_skills: project.required_skills.clone(),
            area_theme: project.area_theme.clone(),
            collaborators_needed: project.collaborators_needed.max(1),
        }
    }
}

/// Body of the profile update call. List fields are comma-joined.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub name: String,
    pub career: String,
    pub university: String,
    pub bio: String,
    pub skills: String,
    pub interests: String,
    pub portfolio: String,
    pub github: String,
    pub linkedin: String,
    pub twitter: String,
}

impl From<&User> for ProfileUpdate {
    fn from(user: &User) -> Self {
        let field = |v: &Option<String>| v.clone().unwrap_or_default();
        Self {
            name: user.name.clone(),
            career: field(&user.career),
            university: field(&user.university),
            bio: field(&user.bio),
            skills: field(&user.skills),
            interests: field(&user.interests),
            portfolio: field(&user.portfolio),
            github: field(&user.github),
            linkedin: field(&user.linkedin),
            twitter: field(&user.twitter),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ApplicationMessage {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChange {
    pub status: RequestStatus,
}

// =========================================================
// 响应体 (Response Bodies)
// =========================================================

/// Login / register response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// Backend payloads arrive either bare or wrapped in `{ "data": ... }`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Envelope<T> {
    pub fn into_inner(self) -> T {
        match self {
            Envelope::Wrapped { data } => data,
            Envelope::Bare(value) => value,
        }
    }
}

/// Error body shape; only `message` is ever shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn project_decodes_with_nulls_and_aliases() {
        let project: Project = serde_json::from_value(json!({
            "id": 7,
            "title": "EcoTrack",
            "description": null,
            "skills": "React, Node.js",
            "area": "Educación",
            "collaboratorsNeeded": 3,
            "status": "BUSCANDO_COLABORADORES",
            "creator": { "id": 1, "name": "María González" }
        }))
        .unwrap();

        assert_eq!(project.description, "");
        assert_eq!(project.area_theme, "Educación");
        assert_eq!(project.skill_list(), vec!["React", "Node.js"]);
        assert_eq!(project.status, ProjectStatus::SearchingCollaborators);
        assert_eq!(project.creator_id(), Some(1));
        assert!(project.collaborators.is_empty());
    }

    #[test]
    fn envelope_accepts_both_shapes() {
        let wrapped: Envelope<Vec<Id>> = serde_json::from_value(json!({ "data": [1, 2] })).unwrap();
        let bare: Envelope<Vec<Id>> = serde_json::from_value(json!([1, 2])).unwrap();
        assert_eq!(wrapped.into_inner(), vec![1, 2]);
        assert_eq!(bare.into_inner(), vec![1, 2]);
    }

    #[test]
    fn user_round_trips_through_storage_json() {
        let user: User = serde_json::from_value(json!({
            "id": 3,
            "name": "ana ruiz",
            "portfolioLink": "https://ana.dev",
            "skills": "Rust,Python"
        }))
        .unwrap();
        assert_eq!(user.portfolio.as_deref(), Some("https://ana.dev"));

        let stored = serde_json::to_string(&user).unwrap();
        let restored: User = serde_json::from_str(&stored).unwrap();
        assert_eq!(restored, user);
        assert_eq!(restored.initials(), "AR");
        assert_eq!(restored.skill_list(), vec!["Rust", "Python"]);
    }

    #[test]
    fn user_without_id_is_rejected() {
        assert!(serde_json::from_value::<User>(json!({ "name": "x" })).is_err());
    }

    #[test]
    fn initials_fall_back_for_empty_names() {
        assert_eq!(initials("   "), "U");
        assert_eq!(initials("carlos mendoza"), "CM");
    }

    #[test]
    fn headline_skips_missing_parts() {
        let mut user: User = serde_json::from_value(json!({ "id": 1, "career": "Ingeniería" })).unwrap();
        assert_eq!(user.headline(), "Ingeniería");
        user.university = Some("UNAL".into());
        assert_eq!(user.headline(), "Ingeniería • UNAL");
    }

    #[test]
    fn draft_from_project_keeps_at_least_one_collaborator() {
        let project: Project = serde_json::from_value(json!({ "id": 1, "title": "t" })).unwrap();
        assert_eq!(ProjectDraft::from(&project).collaborators_needed, 1);
    }
}
