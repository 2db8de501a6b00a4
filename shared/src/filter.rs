use crate::{CollaborationRequest, Project, RequestStatus, join_list};

/// Explore-page filter. Sent to the backend as query parameters and reused
/// for display filtering of already loaded lists.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectFilter {
    pub search: String,
    pub area: String,
    pub skills: Vec<String>,
}

impl ProjectFilter {
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty() && self.area.trim().is_empty() && self.skills.is_empty()
    }

    /// Query pairs for `GET /projects`; blank fields are left out.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if !self.search.trim().is_empty() {
            query.push(("search", self.search.trim().to_string()));
        }
        if !self.area.trim().is_empty() {
            query.push(("areaTheme", self.area.trim().to_string()));
        }
        if !self.skills.is_empty() {
            query.push(("skills", join_list(&self.skills)));
        }
        query
    }

    /// Title/description contain the search text (case-insensitive), the
    /// area matches exactly, and at least one selected skill is required.
    pub fn matches(&self, project: &Project) -> bool {
        let needle = self.search.trim().to_lowercase();
        let matches_search = needle.is_empty()
            || project.title.to_lowercase().contains(&needle)
            || project.description.to_lowercase().contains(&needle);

        let area = self.area.trim();
        let matches_area = area.is_empty() || project.area_theme == area;

        let matches_skills = self.skills.is_empty() || {
            let required = project.skill_list();
            self.skills.iter().any(|s| required.contains(s))
        };

        matches_search && matches_area && matches_skills
    }

    /// The parts that go to the backend right away. Search text is debounced
    /// separately, so two filters that differ only in `search` share a key.
    pub fn without_search(&self) -> ProjectFilter {
        ProjectFilter {
            search: String::new(),
            area: self.area.clone(),
            skills: self.skills.clone(),
        }
    }

    /// Backend query from the immediate parts plus the settled search text.
    pub fn with_search(mut self, search: impl Into<String>) -> ProjectFilter {
        self.search = search.into();
        self
    }

    pub fn toggle_skill(&mut self, skill: &str) {
        if let Some(pos) = self.skills.iter().position(|s| s == skill) {
            self.skills.remove(pos);
        } else {
            self.skills.push(skill.to_string());
        }
    }
}

/// Tabs of the "my applications" page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestFilter {
    #[default]
    All,
    Status(RequestStatus),
}

impl RequestFilter {
    pub fn matches(&self, request: &CollaborationRequest) -> bool {
        match self {
            RequestFilter::All => true,
            RequestFilter::Status(status) => &request.status == status,
        }
    }

    pub fn apply<'a>(&self, requests: &'a [CollaborationRequest]) -> Vec<&'a CollaborationRequest> {
        requests.iter().filter(|r| self.matches(r)).collect()
    }

    pub fn label(&self) -> String {
        match self {
            RequestFilter::All => "All".to_string(),
            RequestFilter::Status(status) => status.label(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn project(title: &str, area: &str, skills: &str) -> Project {
        serde_json::from_value(json!({
            "id": 1,
            "title": title,
            "description": "Red social para grupos de estudio",
            "areaTheme": area,
            "requiredSkills": skills,
        }))
        .unwrap()
    }

    #[test]
    fn empty_filter_sends_no_query_and_matches_everything() {
        let filter = ProjectFilter::default();
        assert!(filter.is_empty());
        assert!(filter.to_query().is_empty());
        assert!(filter.matches(&project("StudyBuddy", "Educación", "React")));
    }

    #[test]
    fn query_uses_backend_parameter_names() {
        let filter = ProjectFilter {
            search: "  eco ".into(),
            area: "Tecnología Verde".into(),
            skills: vec!["React".into(), "Python".into()],
        };
        assert_eq!(
            filter.to_query(),
            vec![
                ("search", "eco".to_string()),
                ("areaTheme", "Tecnología Verde".to_string()),
                ("skills", "React,Python".to_string()),
            ]
        );
    }

    #[test]
    fn display_filter_combines_all_criteria() {
        let p = project("StudyBuddy", "Educación", "React,Python");
        let mut filter = ProjectFilter {
            search: "GRUPOS".into(),
            ..Default::default()
        };
        assert!(filter.matches(&p));

        filter.area = "Deportes".into();
        assert!(!filter.matches(&p));

        filter.area = "Educación".into();
        filter.toggle_skill("Flutter");
        assert!(!filter.matches(&p));
        filter.toggle_skill("Python");
        assert!(filter.matches(&p));
        filter.toggle_skill("Flutter");
        assert_eq!(filter.skills, vec!["Python"]);
    }

    #[test]
    fn typing_search_text_leaves_the_immediate_key_unchanged() {
        let mut filter = ProjectFilter {
            area: "Educación".into(),
            ..Default::default()
        };
        let before = filter.without_search();
        for typed in ["e", "ec", "eco"] {
            filter.search = typed.into();
            assert_eq!(filter.without_search(), before);
        }

        filter.toggle_skill("React");
        assert_ne!(filter.without_search(), before);
        filter.area = "Deportes".into();
        assert_eq!(filter.without_search().area, "Deportes");
    }

    #[test]
    fn settled_search_is_merged_into_the_query() {
        let filter = ProjectFilter {
            search: "ecotr".into(),
            skills: vec!["React".into()],
            ..Default::default()
        };
        let query = filter.without_search().with_search("eco").to_query();
        assert_eq!(query, vec![("search", "eco".to_string()), ("skills", "React".to_string())]);
    }

    #[test]
    fn request_filter_selects_by_status() {
        let requests: Vec<CollaborationRequest> = serde_json::from_value(json!([
            { "id": 1, "status": "PENDING" },
            { "id": 2, "status": "ACCEPTED" },
            { "id": 3, "status": "PENDIENTE" },
        ]))
        .unwrap();

        let pending = RequestFilter::Status(RequestStatus::Pending).apply(&requests);
        assert_eq!(pending.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(RequestFilter::All.apply(&requests).len(), 3);
    }
}
