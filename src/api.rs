use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::request::{HttpClient, HttpRequest};
use futures::future;
use proyectalia_shared::protocol::*;
use proyectalia_shared::{
    ApplicationMessage, AuthResponse, CollaborationRequest, CONTENT_TYPE_JSON, Credentials,
    Envelope, HEADER_AUTHORIZATION, HEADER_CONTENT_TYPE, Id, ProfileUpdate, Project, ProjectDraft,
    ProjectFilter, Registration, RequestStatus, User,
};
use tracing::{debug, warn};

/// Typed client for the ProyectaLia REST backend.
///
/// Holds an optional bearer token; the session store owns the token and
/// hands it over with [`ApiClient::with_token`] before each use.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient<C: HttpClient> {
    client: C,
    base_url: String,
    token: Option<String>,
}

impl<C: HttpClient> ApiClient<C> {
    pub fn new(client: C, config: &ClientConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.clone(),
            token: None,
        }
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn http(&self) -> &C {
        &self.client
    }

    fn url(&self, path: &str, query: &[(&'static str, String)]) -> String {
        let mut url = if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        };
        if !query.is_empty() {
            let encoded = url::form_urlencoded::Serializer::new(String::new())
                .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())))
                .finish();
            url.push('?');
            url.push_str(&encoded);
        }
        url
    }

    fn build<R: ApiRequest>(&self, req: &R) -> ApiResult<HttpRequest> {
        let url = self.url(&req.path(), &req.query());
        let mut http = HttpRequest::new(&url, R::METHOD).with_header(HEADER_CONTENT_TYPE, CONTENT_TYPE_JSON);

        if let Some(token) = &self.token {
            http = http.with_header(HEADER_AUTHORIZATION, &format!("Bearer {token}"));
        }

        if R::METHOD.has_body() {
            let body = serde_json::to_string(req).map_err(|e| ApiError::Encode(e.to_string()))?;
            http = http.with_body(body);
        }
        Ok(http)
    }

    /// Sends any endpoint of the catalogue and decodes its (possibly
    /// `{ data }`-wrapped) payload.
    pub async fn send<R: ApiRequest>(&self, req: &R) -> ApiResult<R::Response> {
        let http = self.build(req)?;
        debug!(method = R::METHOD.as_str(), url = %http.url, "api request");

        let resp = self.client.send(http).await?;
        if !resp.is_success() {
            let err = ApiError::from_response(resp.status, &resp.body);
            warn!(method = R::METHOD.as_str(), path = %req.path(), error = %err, "api call failed");
            return Err(err);
        }

        let body = if resp.body.trim().is_empty() { "null" } else { resp.body.as_str() };
        let envelope: Envelope<R::Response> = serde_json::from_str(body)?;
        Ok(envelope.into_inner())
    }

    // =========================================================
    // Users
    // =========================================================

    pub async fn register(&self, registration: &Registration) -> ApiResult<AuthResponse> {
        self.send(registration).await
    }

    pub async fn login(&self, credentials: &Credentials) -> ApiResult<AuthResponse> {
        self.send(credentials).await
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> ApiResult<User> {
        self.send(update).await
    }

    // =========================================================
    // Projects
    // =========================================================

    pub async fn list_projects(&self, filter: &ProjectFilter) -> ApiResult<Vec<Project>> {
        self.send(&ListProjectsRequest {
            filter: filter.clone(),
        })
        .await
    }

    pub async fn get_project(&self, id: Id) -> ApiResult<Project> {
        self.send(&GetProjectRequest { id }).await
    }

    pub async fn create_project(&self, draft: ProjectDraft) -> ApiResult<Project> {
        self.send(&CreateProjectRequest { draft }).await
    }

    pub async fn update_project(&self, id: Id, draft: ProjectDraft) -> ApiResult<Project> {
        self.send(&UpdateProjectRequest { id, draft }).await
    }

    pub async fn delete_project(&self, id: Id) -> ApiResult<()> {
        self.send(&DeleteProjectRequest { id }).await.map(|_| ())
    }

    pub async fn my_projects(&self) -> ApiResult<Vec<Project>> {
        self.send(&MyProjectsRequest).await
    }

    pub async fn collaborating_projects(&self) -> ApiResult<Vec<Project>> {
        self.send(&CollaboratingProjectsRequest).await
    }

    /// Created and collaborating projects, fetched concurrently. Either list
    /// degrades to empty when its call fails.
    pub async fn my_project_lists(&self) -> (Vec<Project>, Vec<Project>) {
        let (mine, collaborating) = future::join(self.my_projects(), self.collaborating_projects()).await;
        let or_empty = |res: ApiResult<Vec<Project>>, what: &str| {
            res.unwrap_or_else(|e| {
                warn!(error = %e, "{what} unavailable, showing none");
                Vec::new()
            })
        };
        (or_empty(mine, "my projects"), or_empty(collaborating, "collaborations"))
    }

    // =========================================================
    // Collaboration requests
    // =========================================================

    /// Submits an application. No client-side eligibility check happens
    /// here; the backend decides.
    pub async fn apply(&self, project_id: Id, message: impl Into<String>) -> ApiResult<CollaborationRequest> {
        self.send(&ApplyRequest {
            project_id,
            body: ApplicationMessage {
                message: message.into(),
            },
        })
        .await
    }

    pub async fn project_requests(&self, project_id: Id) -> ApiResult<Vec<CollaborationRequest>> {
        self.send(&ProjectRequestsRequest { project_id }).await
    }

    pub async fn update_request_status(&self, request_id: Id, status: RequestStatus) -> ApiResult<()> {
        self.send(&UpdateRequestStatusRequest { request_id, status })
            .await
            .map(|_| ())
    }

    pub async fn my_applications(&self) -> ApiResult<Vec<CollaborationRequest>> {
        self.send(&MyApplicationsRequest).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::MockHttpClient;
    use serde_json::json;

    const BASE: &str = "http://localhost:3001/api";

    fn api(token: Option<&str>) -> ApiClient<MockHttpClient> {
        ApiClient::new(MockHttpClient::new(), &ClientConfig::default()).with_token(token.map(String::from))
    }

    #[tokio::test]
    async fn bearer_header_only_with_a_token() {
        let anonymous = api(None);
        anonymous
            .http()
            .mock_response(HttpMethod::Get, &format!("{BASE}/projects"), 200, json!([]));
        anonymous.list_projects(&ProjectFilter::default()).await.unwrap();
        let req = anonymous.http().last_request().unwrap();
        assert!(!req.headers.contains_key(HEADER_AUTHORIZATION));
        assert_eq!(req.headers.get(HEADER_CONTENT_TYPE).map(String::as_str), Some(CONTENT_TYPE_JSON));

        let signed_in = api(Some("tok-123"));
        signed_in
            .http()
            .mock_response(HttpMethod::Get, &format!("{BASE}/projects/my-projects"), 200, json!([]));
        signed_in.my_projects().await.unwrap();
        let req = signed_in.http().last_request().unwrap();
        assert_eq!(req.headers.get(HEADER_AUTHORIZATION).map(String::as_str), Some("Bearer tok-123"));
    }

    #[tokio::test]
    async fn empty_token_counts_as_anonymous() {
        assert_eq!(api(Some("")).token(), None);
    }

    #[tokio::test]
    async fn search_filter_becomes_an_encoded_query() {
        let api = api(None);
        let url = format!("{BASE}/projects?search=eco+track&areaTheme=Educaci%C3%B3n&skills=React%2CPython");
        api.http().mock_response(
            HttpMethod::Get,
            &url,
            200,
            json!({ "data": [{ "id": 1, "title": "EcoTrack", "status": "SEARCHING_COLLABORATORS" }] }),
        );

        let filter = ProjectFilter {
            search: "eco track".into(),
            area: "Educación".into(),
            skills: vec!["React".into(), "Python".into()],
        };
        let projects = api.list_projects(&filter).await.unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].title, "EcoTrack");
    }

    #[tokio::test]
    async fn login_decodes_wrapped_and_bare_payloads() {
        let api = api(None);
        let url = format!("{BASE}/users/login");
        api.http().mock_response(
            HttpMethod::Post,
            &url,
            200,
            json!({ "data": { "token": "t1", "user": { "id": 4, "name": "Ana" } } }),
        );
        let creds = Credentials {
            email: "ana@uni.edu".into(),
            password: "secret".into(),
        };
        let auth = api.login(&creds).await.unwrap();
        assert_eq!(auth.token, "t1");
        assert_eq!(auth.user.id, 4);

        let body: serde_json::Value = serde_json::from_str(&api.http().last_request().unwrap().body.unwrap()).unwrap();
        assert_eq!(body, json!({ "email": "ana@uni.edu", "password": "secret" }));

        api.http().mock_response(
            HttpMethod::Post,
            &url,
            200,
            json!({ "token": "t2", "user": { "id": 4, "name": "Ana" } }),
        );
        assert_eq!(api.login(&creds).await.unwrap().token, "t2");
    }

    #[tokio::test]
    async fn failures_carry_the_backend_message() {
        let api = api(Some("expired"));
        api.http().mock_response(
            HttpMethod::Get,
            &format!("{BASE}/projects/9"),
            401,
            json!({ "message": "Token expirado" }),
        );
        let err = api.get_project(9).await.unwrap_err();
        assert_eq!(err.status(), Some(401));
        assert_eq!(err.user_message("Could not load the project."), "Token expirado");
    }

    #[tokio::test]
    async fn malformed_success_body_is_a_decode_error() {
        let api = api(None);
        api.http()
            .mock_raw(HttpMethod::Get, &format!("{BASE}/projects/1"), 200, "<html>");
        assert!(matches!(api.get_project(1).await, Err(ApiError::Decode(_))));
    }

    #[tokio::test]
    async fn delete_and_status_update_ignore_response_bodies() {
        let api = api(Some("t"));
        api.http().mock_raw(HttpMethod::Delete, &format!("{BASE}/projects/3"), 204, "");
        api.http().mock_response(
            HttpMethod::Put,
            &format!("{BASE}/requests/8/status"),
            200,
            json!({ "message": "Solicitud actualizada" }),
        );

        api.delete_project(3).await.unwrap();
        api.update_request_status(8, RequestStatus::Rejected).await.unwrap();

        let body = api.http().last_request().unwrap().body.unwrap();
        assert_eq!(body, r#"{"status":"REJECTED"}"#);
    }

    #[tokio::test]
    async fn apply_is_forwarded_even_when_already_applied() {
        let api = api(Some("t"));
        api.http().mock_response(
            HttpMethod::Post,
            &format!("{BASE}/requests/project/5"),
            409,
            json!({ "message": "Ya enviaste una solicitud a este proyecto" }),
        );

        let err = api.apply(5, "Otra vez").await.unwrap_err();
        assert_eq!(api.http().requests.borrow().len(), 1);
        assert_eq!(err.status(), Some(409));
        assert_eq!(
            err.user_message("Could not send the request."),
            "Ya enviaste una solicitud a este proyecto"
        );
    }

    #[tokio::test]
    async fn project_lists_degrade_independently() {
        let api = api(Some("t"));
        api.http().mock_response(
            HttpMethod::Get,
            &format!("{BASE}/projects/my-projects"),
            200,
            json!([{ "id": 1, "title": "Mine" }]),
        );
        api.http()
            .mock_offline(HttpMethod::Get, &format!("{BASE}/projects/collaborating"));

        let (mine, collaborating) = api.my_project_lists().await;
        assert_eq!(mine.len(), 1);
        assert!(collaborating.is_empty());
    }

    #[tokio::test]
    async fn create_and_update_send_the_draft() {
        let api = api(Some("t"));
        let draft = ProjectDraft {
            title: "CampusFood".into(),
            description: "Delivery".into(),
            objectives: "MVP".into(),
            required_skills: "Flutter,Firebase".into(),
            area_theme: "Emprendimiento".into(),
            collaborators_needed: 2,
        };
        api.http().mock_response(
            HttpMethod::Post,
            &format!("{BASE}/projects"),
            201,
            json!({ "data": { "id": 12, "title": "CampusFood" } }),
        );
        api.http().mock_response(
            HttpMethod::Put,
            &format!("{BASE}/projects/12"),
            200,
            json!({ "id": 12, "title": "CampusFood 2" }),
        );

        let created = api.create_project(draft.clone()).await.unwrap();
        assert_eq!(created.id, 12);
        let sent: serde_json::Value =
            serde_json::from_str(&api.http().last_request().unwrap().body.unwrap()).unwrap();
        assert_eq!(sent["requiredSkills"], "Flutter,Firebase");
        assert_eq!(sent["collaboratorsNeeded"], 2);

        let updated = api.update_project(12, draft).await.unwrap();
        assert_eq!(updated.title, "CampusFood 2");
    }

    #[tokio::test]
    async fn request_listings() {
        let api = api(Some("t"));
        api.http().mock_response(
            HttpMethod::Get,
            &format!("{BASE}/requests/project/5/solicitudes"),
            200,
            json!({ "data": [{ "id": 1, "status": "PENDIENTE", "applicant": { "id": 9, "name": "Diego" } }] }),
        );
        api.http().mock_response(
            HttpMethod::Get,
            &format!("{BASE}/requests/my-applications"),
            200,
            json!([{ "id": 2, "status": "ACCEPTED", "project": { "id": 5, "title": "MindWell" } }]),
        );

        let received = api.project_requests(5).await.unwrap();
        assert_eq!(received[0].status, RequestStatus::Pending);
        let sent = api.my_applications().await.unwrap();
        assert_eq!(sent[0].project_id(), Some(5));
    }

    #[tokio::test]
    async fn register_and_profile_update() {
        let api = api(None);
        api.http().mock_response(
            HttpMethod::Post,
            &format!("{BASE}/users/register"),
            201,
            json!({ "token": "new", "user": { "id": 30, "name": "Lucía" } }),
        );
        let auth = api
            .register(&Registration {
                name: "Lucía".into(),
                email: "lucia@uni.edu".into(),
                password: "pw".into(),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(auth.user.id, 30);

        let api = api.with_token(Some(auth.token));
        api.http().mock_response(
            HttpMethod::Put,
            &format!("{BASE}/users/profile"),
            200,
            json!({ "data": { "id": 30, "name": "Lucía P.", "skills": "Rust" } }),
        );
        let user = api
            .update_profile(&ProfileUpdate {
                name: "Lucía P.".into(),
                skills: "Rust".into(),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(user.skill_list(), vec!["Rust"]);
        assert_eq!(
            api.http().last_request().unwrap().headers.get(HEADER_AUTHORIZATION).map(String::as_str),
            Some("Bearer new")
        );
    }
}
