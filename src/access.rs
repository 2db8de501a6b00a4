//! Client-side hints for who may apply to or manage a project.
//!
//! These only decide what the page offers. The backend re-validates every
//! call and [`crate::api::ApiClient`] never consults this module.

use proyectalia_shared::{CollaborationRequest, Project, RequestStatus, User};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyDecision {
    /// The caller's sent requests are not known yet.
    Checking,
    Allowed,
    SignInRequired,
    OwnProject,
    AlreadyCollaborator,
    AlreadyApplied(RequestStatus),
    NotRecruiting,
}

impl ApplyDecision {
    pub fn can_apply(&self) -> bool {
        matches!(self, ApplyDecision::Allowed)
    }

    /// Notice shown in place of the apply button, if any.
    pub fn message(&self) -> Option<String> {
        let text = match self {
            ApplyDecision::AlreadyCollaborator | ApplyDecision::AlreadyApplied(RequestStatus::Accepted) => {
                "You are already a collaborator on this project!".to_string()
            }
            ApplyDecision::AlreadyApplied(RequestStatus::Pending) => {
                "You already applied to this project. Your request is pending review.".to_string()
            }
            ApplyDecision::AlreadyApplied(RequestStatus::Rejected) => {
                "You cannot apply to this project again because your request was rejected.".to_string()
            }
            ApplyDecision::AlreadyApplied(other) => {
                format!("You already applied to this project ({}).", other.label())
            }
            ApplyDecision::NotRecruiting => "This project is not looking for collaborators right now.".to_string(),
            ApplyDecision::Checking
            | ApplyDecision::Allowed
            | ApplyDecision::SignInRequired
            | ApplyDecision::OwnProject => return None,
        };
        Some(text)
    }
}

pub struct ApplicationGate;

impl ApplicationGate {
    /// The caller's request for `project`, looked up in their sent requests.
    pub fn existing_request<'a>(
        project: &Project,
        my_requests: &'a [CollaborationRequest],
    ) -> Option<&'a CollaborationRequest> {
        my_requests
            .iter()
            .find(|r| r.project_id() == Some(project.id))
    }

    /// Like [`Self::evaluate`], but `None` means the caller's requests have
    /// not arrived. Apply is never offered until they have.
    pub fn evaluate_loaded(
        user: Option<&User>,
        project: &Project,
        my_requests: Option<&[CollaborationRequest]>,
    ) -> ApplyDecision {
        match (user, my_requests) {
            (Some(u), None) if !is_owner(u, project) => ApplyDecision::Checking,
            (_, requests) => Self::evaluate(user, project, requests.unwrap_or_default()),
        }
    }

    /// Any earlier request blocks a new one, rejected ones included.
    pub fn evaluate(user: Option<&User>, project: &Project, my_requests: &[CollaborationRequest]) -> ApplyDecision {
        let Some(user) = user else {
            return ApplyDecision::SignInRequired;
        };
        if is_owner(user, project) {
            return ApplyDecision::OwnProject;
        }
        if let Some(request) = Self::existing_request(project, my_requests) {
            return ApplyDecision::AlreadyApplied(request.status.clone());
        }
        if project.is_collaborator(user.id) {
            return ApplyDecision::AlreadyCollaborator;
        }
        if !project.status.is_recruiting() {
            return ApplyDecision::NotRecruiting;
        }
        ApplyDecision::Allowed
    }
}

/// Edit, delete and the applications list are offered to the creator only.
pub fn can_edit(user: Option<&User>, project: &Project) -> bool {
    user.is_some_and(|u| is_owner(u, project))
}

fn is_owner(user: &User, project: &Project) -> bool {
    match project.creator_id() {
        Some(id) => id == user.id,
        None => project.is_creator,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user(id: i64) -> User {
        serde_json::from_value(json!({ "id": id, "name": "Ana" })).unwrap()
    }

    fn project(status: &str) -> Project {
        serde_json::from_value(json!({
            "id": 10,
            "title": "EcoTrack",
            "status": status,
            "creator": { "id": 1, "name": "María" },
            "collaborators": [{ "id": 3, "name": "Diego" }],
        }))
        .unwrap()
    }

    fn request(project_id: i64, status: &str) -> CollaborationRequest {
        serde_json::from_value(json!({
            "id": 99,
            "project": { "id": project_id, "title": "x" },
            "status": status,
        }))
        .unwrap()
    }

    #[test]
    fn pending_request_hides_apply() {
        let decision = ApplicationGate::evaluate(Some(&user(2)), &project("SEARCHING_COLLABORATORS"), &[
            request(10, "PENDING"),
        ]);
        assert!(!decision.can_apply());
        assert_eq!(decision, ApplyDecision::AlreadyApplied(RequestStatus::Pending));
        assert!(decision.message().unwrap().contains("pending"));
    }

    #[test]
    fn accepted_request_reads_as_collaborator() {
        let decision = ApplicationGate::evaluate(Some(&user(2)), &project("SEARCHING_COLLABORATORS"), &[
            request(10, "ACEPTADA"),
        ]);
        assert!(!decision.can_apply());
        assert_eq!(
            decision.message().as_deref(),
            Some("You are already a collaborator on this project!")
        );
    }

    #[test]
    fn rejected_request_still_blocks() {
        let decision = ApplicationGate::evaluate(Some(&user(2)), &project("SEARCHING_COLLABORATORS"), &[
            request(10, "REJECTED"),
        ]);
        assert!(!decision.can_apply());
        assert!(decision.message().unwrap().contains("rejected"));
    }

    #[test]
    fn requests_for_other_projects_are_ignored() {
        let decision = ApplicationGate::evaluate(Some(&user(2)), &project("SEARCHING_COLLABORATORS"), &[
            request(11, "PENDING"),
        ]);
        assert_eq!(decision, ApplyDecision::Allowed);
        assert_eq!(decision.message(), None);
    }

    #[test]
    fn other_reasons() {
        let open = project("SEARCHING_COLLABORATORS");
        assert_eq!(ApplicationGate::evaluate(None, &open, &[]), ApplyDecision::SignInRequired);
        assert_eq!(ApplicationGate::evaluate(Some(&user(1)), &open, &[]), ApplyDecision::OwnProject);
        assert_eq!(
            ApplicationGate::evaluate(Some(&user(3)), &open, &[]),
            ApplyDecision::AlreadyCollaborator
        );
        assert_eq!(
            ApplicationGate::evaluate(Some(&user(2)), &project("IN_DEVELOPMENT"), &[]),
            ApplyDecision::NotRecruiting
        );
    }

    #[test]
    fn apply_waits_for_sent_requests() {
        let open = project("SEARCHING_COLLABORATORS");
        let decision = ApplicationGate::evaluate_loaded(Some(&user(2)), &open, None);
        assert_eq!(decision, ApplyDecision::Checking);
        assert!(!decision.can_apply());
        assert_eq!(decision.message(), None);

        let pending = [request(10, "PENDING")];
        assert_eq!(
            ApplicationGate::evaluate_loaded(Some(&user(2)), &open, Some(&pending[..])),
            ApplyDecision::AlreadyApplied(RequestStatus::Pending)
        );
        assert_eq!(
            ApplicationGate::evaluate_loaded(Some(&user(2)), &open, Some(&[][..])),
            ApplyDecision::Allowed
        );
    }

    #[test]
    fn unloaded_requests_do_not_hide_sign_in_or_ownership() {
        let open = project("SEARCHING_COLLABORATORS");
        assert_eq!(ApplicationGate::evaluate_loaded(None, &open, None), ApplyDecision::SignInRequired);
        assert_eq!(
            ApplicationGate::evaluate_loaded(Some(&user(1)), &open, None),
            ApplyDecision::OwnProject
        );
    }

    #[test]
    fn only_the_creator_can_edit() {
        let p = project("COMPLETED");
        assert!(can_edit(Some(&user(1)), &p));
        assert!(!can_edit(Some(&user(2)), &p));
        assert!(!can_edit(None, &p));

        let mut hinted = p.clone();
        hinted.creator = None;
        hinted.is_creator = true;
        assert!(can_edit(Some(&user(2)), &hinted));
    }
}
