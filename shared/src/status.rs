//! Status codes for projects and collaboration requests, and their display
//! labels.
//!
//! Both enumerations are open: a code the frontend does not know is kept as
//! `Other(code)` and still gets a readable label.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProjectStatus {
    SearchingCollaborators,
    InDevelopment,
    Completed,
    Other(String),
}

impl ProjectStatus {
    pub fn code(&self) -> &str {
        match self {
            ProjectStatus::SearchingCollaborators => "SEARCHING_COLLABORATORS",
            ProjectStatus::InDevelopment => "IN_DEVELOPMENT",
            ProjectStatus::Completed => "COMPLETED",
            ProjectStatus::Other(code) => code,
        }
    }

    pub fn label(&self) -> String {
        match self {
            ProjectStatus::SearchingCollaborators => "Searching for collaborators".to_string(),
            ProjectStatus::InDevelopment => "In development".to_string(),
            ProjectStatus::Completed => "Completed".to_string(),
            ProjectStatus::Other(code) => humanize(code),
        }
    }

    pub fn is_recruiting(&self) -> bool {
        matches!(self, ProjectStatus::SearchingCollaborators)
    }

    pub fn badge_class(&self) -> &'static str {
        if self.is_recruiting() {
            "badge badge-success"
        } else {
            "badge badge-warning"
        }
    }
}

impl Default for ProjectStatus {
    fn default() -> Self {
        ProjectStatus::Other(String::new())
    }
}

impl From<String> for ProjectStatus {
    fn from(code: String) -> Self {
        match code.trim().to_uppercase().as_str() {
            "SEARCHING_COLLABORATORS" | "BUSCANDO_COLABORADORES" => Self::SearchingCollaborators,
            "IN_DEVELOPMENT" | "EN_DESARROLLO" => Self::InDevelopment,
            "COMPLETED" | "COMPLETADO" | "FINALIZADO" => Self::Completed,
            _ => Self::Other(code),
        }
    }
}

impl From<ProjectStatus> for String {
    fn from(status: ProjectStatus) -> Self {
        status.code().to_string()
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RequestStatus {
    Pending,
    Accepted,
    Rejected,
    Other(String),
}

/// Badge / side-bar / border classes for a request card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusColors {
    pub badge: &'static str,
    pub bar: &'static str,
    pub border: &'static str,
}

impl RequestStatus {
    pub fn code(&self) -> &str {
        match self {
            RequestStatus::Pending => "PENDING",
            RequestStatus::Accepted => "ACCEPTED",
            RequestStatus::Rejected => "REJECTED",
            RequestStatus::Other(code) => code,
        }
    }

    pub fn label(&self) -> String {
        match self {
            RequestStatus::Pending => "Pending".to_string(),
            RequestStatus::Accepted => "Accepted".to_string(),
            RequestStatus::Rejected => "Rejected".to_string(),
            RequestStatus::Other(code) => humanize(code),
        }
    }

    pub fn colors(&self) -> StatusColors {
        match self {
            RequestStatus::Accepted => StatusColors {
                badge: "badge badge-success",
                bar: "bg-success",
                border: "border-success/30",
            },
            RequestStatus::Rejected => StatusColors {
                badge: "badge badge-error",
                bar: "bg-error",
                border: "border-error/30",
            },
            RequestStatus::Pending => StatusColors {
                badge: "badge badge-warning",
                bar: "bg-warning",
                border: "border-warning/30",
            },
            RequestStatus::Other(_) => StatusColors {
                badge: "badge badge-ghost",
                bar: "bg-base-300",
                border: "border-base-300",
            },
        }
    }
}

impl Default for RequestStatus {
    fn default() -> Self {
        RequestStatus::Other(String::new())
    }
}

impl From<String> for RequestStatus {
    fn from(code: String) -> Self {
        match code.trim().to_uppercase().as_str() {
            "PENDING" | "PENDIENTE" => Self::Pending,
            "ACCEPTED" | "ACEPTADA" => Self::Accepted,
            "REJECTED" | "RECHAZADA" => Self::Rejected,
            _ => Self::Other(code),
        }
    }
}

impl From<RequestStatus> for String {
    fn from(status: RequestStatus) -> Self {
        status.code().to_string()
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Generic label for codes without a dedicated one:
/// `"ON_HOLD"` -> `"On Hold"`. Blank codes become `"Unknown"`.
pub fn humanize(code: &str) -> String {
    let words: Vec<String> = code
        .split(|c: char| c == '_' || c.is_whitespace())
        .filter(|w| !w.is_empty())
        .map(|w| {
            let lower = w.to_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect();

    if words.is_empty() {
        "Unknown".to_string()
    } else {
        words.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("SEARCHING_COLLABORATORS", "Searching for collaborators")]
    #[case("IN_DEVELOPMENT", "In development")]
    #[case("COMPLETED", "Completed")]
    #[case("BUSCANDO_COLABORADORES", "Searching for collaborators")]
    #[case("en_desarrollo", "In development")]
    #[case("FINALIZADO", "Completed")]
    #[case("ON_HOLD", "On Hold")]
    #[case("", "Unknown")]
    #[case("___", "Unknown")]
    fn project_labels(#[case] code: &str, #[case] label: &str) {
        assert_eq!(ProjectStatus::from(code.to_string()).label(), label);
    }

    #[rstest]
    #[case("PENDING", "Pending")]
    #[case("ACEPTADA", "Accepted")]
    #[case("rejected", "Rejected")]
    #[case("WITHDRAWN_BY_USER", "Withdrawn By User")]
    #[case("  ", "Unknown")]
    fn request_labels(#[case] code: &str, #[case] label: &str) {
        assert_eq!(RequestStatus::from(code.to_string()).label(), label);
    }

    #[test]
    fn every_known_code_has_a_non_empty_label() {
        let projects = [
            ProjectStatus::SearchingCollaborators,
            ProjectStatus::InDevelopment,
            ProjectStatus::Completed,
            ProjectStatus::default(),
        ];
        let requests = [
            RequestStatus::Pending,
            RequestStatus::Accepted,
            RequestStatus::Rejected,
            RequestStatus::default(),
        ];
        assert!(projects.iter().all(|s| !s.label().is_empty()));
        assert!(requests.iter().all(|s| !s.label().is_empty()));
    }

    #[test]
    fn unknown_codes_survive_serialization() {
        let status: RequestStatus = serde_json::from_str("\"ON_HOLD\"").unwrap();
        assert_eq!(status, RequestStatus::Other("ON_HOLD".into()));
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"ON_HOLD\"");
        assert_eq!(serde_json::to_string(&RequestStatus::Accepted).unwrap(), "\"ACCEPTED\"");
    }

    #[rstest]
    #[case("\"ACEPTADA\"", RequestStatus::Accepted, "\"ACCEPTED\"")]
    #[case("\"rechazada\"", RequestStatus::Rejected, "\"REJECTED\"")]
    #[case("\"PENDIENTE\"", RequestStatus::Pending, "\"PENDING\"")]
    fn spanish_codes_are_read_but_english_codes_are_sent(
        #[case] wire: &str,
        #[case] status: RequestStatus,
        #[case] sent: &str,
    ) {
        let decoded: RequestStatus = serde_json::from_str(wire).unwrap();
        assert_eq!(decoded, status);
        assert_eq!(serde_json::to_string(&decoded).unwrap(), sent);
    }

    #[test]
    fn only_searching_projects_recruit() {
        assert!(ProjectStatus::SearchingCollaborators.is_recruiting());
        assert!(!ProjectStatus::Completed.is_recruiting());
        assert!(!ProjectStatus::Other("SEARCHING".into()).is_recruiting());
    }
}
