//! Typed catalogue of the backend endpoints.
//!
//! Every request struct knows its method, path and response type. Path
//! parameters are `#[serde(skip)]` so the struct itself serializes to the
//! JSON body for `POST`/`PUT` calls.

use crate::{
    ApplicationMessage, AuthResponse, CollaborationRequest, Credentials, Id, ProfileUpdate,
    Project, ProjectDraft, ProjectFilter, Registration, RequestStatus, User,
};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::{Deserialize, Serialize};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }

    pub fn has_body(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put)
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
pub trait ApiRequest: Serialize {
    /// The response type returned by this request (after unwrapping `{ data }`).
    type Response: DeserializeOwned;
    /// The HTTP method.
    const METHOD: HttpMethod;

    /// Path relative to the API base URL, parameters filled in.
    fn path(&self) -> String;

    /// Query string pairs, `GET` only.
    fn query(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}

// =========================================================
// Users
// =========================================================

impl ApiRequest for Registration {
    type Response = AuthResponse;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/users/register".to_string()
    }
}

impl ApiRequest for Credentials {
    type Response = AuthResponse;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/users/login".to_string()
    }
}

impl ApiRequest for ProfileUpdate {
    type Response = User;
    const METHOD: HttpMethod = HttpMethod::Put;

    fn path(&self) -> String {
        "/users/profile".to_string()
    }
}

// =========================================================
// Projects
// =========================================================

/// List/search projects
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListProjectsRequest {
    #[serde(skip)]
    pub filter: ProjectFilter,
}

impl ApiRequest for ListProjectsRequest {
    type Response = Vec<Project>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        "/projects".to_string()
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        self.filter.to_query()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GetProjectRequest {
    #[serde(skip)]
    pub id: Id,
}

impl ApiRequest for GetProjectRequest {
    type Response = Project;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/projects/{}", self.id)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateProjectRequest {
    #[serde(flatten)]
    pub draft: ProjectDraft,
}

impl ApiRequest for CreateProjectRequest {
    type Response = Project;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/projects".to_string()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateProjectRequest {
    #[serde(skip)]
    pub id: Id,
    #[serde(flatten)]
    pub draft: ProjectDraft,
}

impl ApiRequest for UpdateProjectRequest {
    type Response = Project;
    const METHOD: HttpMethod = HttpMethod::Put;

    fn path(&self) -> String {
        format!("/projects/{}", self.id)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteProjectRequest {
    #[serde(skip)]
    pub id: Id,
}

impl ApiRequest for DeleteProjectRequest {
    type Response = IgnoredAny;
    const METHOD: HttpMethod = HttpMethod::Delete;

    fn path(&self) -> String {
        format!("/projects/{}", self.id)
    }
}

/// Projects created by the caller
#[derive(Debug, Clone, Default, Serialize)]
pub struct MyProjectsRequest;

impl ApiRequest for MyProjectsRequest {
    type Response = Vec<Project>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        "/projects/my-projects".to_string()
    }
}

/// Projects the caller collaborates on
#[derive(Debug, Clone, Default, Serialize)]
pub struct CollaboratingProjectsRequest;

impl ApiRequest for CollaboratingProjectsRequest {
    type Response = Vec<Project>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        "/projects/collaborating".to_string()
    }
}

// =========================================================
// Collaboration requests
// =========================================================

#[derive(Debug, Clone, Serialize)]
pub struct ApplyRequest {
    #[serde(skip)]
    pub project_id: Id,
    #[serde(flatten)]
    pub body: ApplicationMessage,
}

impl ApiRequest for ApplyRequest {
    type Response = CollaborationRequest;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        format!("/requests/project/{}", self.project_id)
    }
}

/// Requests received by a project (owner only)
#[derive(Debug, Clone, Serialize)]
pub struct ProjectRequestsRequest {
    #[serde(skip)]
    pub project_id: Id,
}

impl ApiRequest for ProjectRequestsRequest {
    type Response = Vec<CollaborationRequest>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/requests/project/{}/solicitudes", self.project_id)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateRequestStatusRequest {
    #[serde(skip)]
    pub request_id: Id,
    pub status: RequestStatus,
}

impl ApiRequest for UpdateRequestStatusRequest {
    type Response = IgnoredAny;
    const METHOD: HttpMethod = HttpMethod::Put;

    fn path(&self) -> String {
        format!("/requests/{}/status", self.request_id)
    }
}

/// Requests sent by the caller
#[derive(Debug, Clone, Default, Serialize)]
pub struct MyApplicationsRequest;

impl ApiRequest for MyApplicationsRequest {
    type Response = Vec<CollaborationRequest>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        "/requests/my-applications".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn path_parameters_stay_out_of_the_body() {
        let req = UpdateRequestStatusRequest {
            request_id: 42,
            status: RequestStatus::Accepted,
        };
        assert_eq!(req.path(), "/requests/42/status");
        assert_eq!(serde_json::to_value(&req).unwrap(), json!({ "status": "ACCEPTED" }));

        let apply = ApplyRequest {
            project_id: 9,
            body: ApplicationMessage {
                message: "Hola".into(),
            },
        };
        assert_eq!(apply.path(), "/requests/project/9");
        assert_eq!(serde_json::to_value(&apply).unwrap(), json!({ "message": "Hola" }));
    }

    #[test]
    fn project_body_uses_camel_case() {
        let req = UpdateProjectRequest {
            id: 3,
            draft: ProjectDraft {
                title: "EcoTrack".into(),
                required_skills: "React,Python".into(),
                area_theme: "Educación".into(),
                ..Default::default()
            },
        };
        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(body["requiredSkills"], "React,Python");
        assert_eq!(body["areaTheme"], "Educación");
        assert_eq!(body["collaboratorsNeeded"], 1);
        assert!(body.get("id").is_none());
    }

    #[test]
    fn endpoint_table() {
        assert_eq!(MyProjectsRequest.path(), "/projects/my-projects");
        assert_eq!(CollaboratingProjectsRequest.path(), "/projects/collaborating");
        assert_eq!(MyApplicationsRequest.path(), "/requests/my-applications");
        assert_eq!(
            ProjectRequestsRequest { project_id: 5 }.path(),
            "/requests/project/5/solicitudes"
        );
        assert_eq!(DeleteProjectRequest { id: 5 }.path(), "/projects/5");
        assert_eq!(<DeleteProjectRequest as ApiRequest>::METHOD, HttpMethod::Delete);
        assert_eq!(<ProfileUpdate as ApiRequest>::METHOD, HttpMethod::Put);
    }
}
