//! 表单状态管理模块
//!
//! 将零散的 signal 整合为 `ProjectFormState` 结构体，负责：
//! - 数据的持有
//! - 从已有项目加载
//! - 数据到请求对象的转换与校验

use leptos::prelude::*;
use proyectalia_shared::{Project, ProjectDraft, join_list};

/// 表单状态结构体
///
/// 使用 `RwSignal` 因为它实现了 `Copy` trait，非常适合作为 Props 在组件间传递。
#[derive(Clone, Copy)]
pub struct ProjectFormState {
    pub title: RwSignal<String>,
    pub description: RwSignal<String>,
    pub objectives: RwSignal<String>,
    pub area: RwSignal<String>,
    /// 原始输入，提交时解析
    pub collaborators_needed: RwSignal<String>,
    pub skills: RwSignal<Vec<String>>,
}

impl ProjectFormState {
    /// 创建新的表单状态，所有字段使用默认值
    pub fn new() -> Self {
        Self {
            title: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            objectives: RwSignal::new(String::new()),
            area: RwSignal::new(String::new()),
            collaborators_needed: RwSignal::new("1".to_string()),
            skills: RwSignal::new(Vec::new()),
        }
    }

    /// 用已有项目填充表单（编辑页）
    pub fn load(&self, project: &Project) {
        let draft = ProjectDraft::from(project);
        self.title.set(draft.title);
        self.description.set(draft.description);
        self.objectives.set(draft.objectives);
        self.area.set(draft.area_theme);
        self.collaborators_needed.set(draft.collaborators_needed.to_string());
        self.skills.set(project.skill_list());
    }

    /// 将表单状态转换为 API 请求对象
    pub fn to_draft(&self) -> Result<ProjectDraft, String> {
        build_draft(
            &self.title.get_untracked(),
            &self.description.get_untracked(),
            &self.objectives.get_untracked(),
            &self.area.get_untracked(),
            &self.collaborators_needed.get_untracked(),
            &self.skills.get_untracked(),
        )
    }
}

impl Default for ProjectFormState {
    fn default() -> Self {
        Self::new()
    }
}

/// 校验并组装请求体
pub fn build_draft(
    title: &str,
    description: &str,
    objectives: &str,
    area: &str,
    collaborators_needed: &str,
    skills: &[String],
) -> Result<ProjectDraft, String> {
    let title = title.trim();
    if title.is_empty() {
        return Err("The project needs a title.".to_string());
    }
    if description.trim().is_empty() {
        return Err("Describe the project.".to_string());
    }
    if area.trim().is_empty() {
        return Err("Pick a thematic area.".to_string());
    }
    let collaborators_needed = match collaborators_needed.trim().parse::<u32>() {
        Ok(n) if n >= 1 => n,
        _ => return Err("Collaborators needed must be a whole number of at least 1.".to_string()),
    };

    Ok(ProjectDraft {
        title: title.to_string(),
        description: description.trim().to_string(),
        objectives: objectives.trim().to_string(),
        required_skills: join_list(skills),
        area_theme: area.trim().to_string(),
        collaborators_needed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_joins_skills_and_parses_count() {
        let skills = vec!["React".to_string(), "Node.js".to_string()];
        let draft = build_draft(" EcoTrack ", "App", "Reducir\nMedir", "Tecnología Verde", "3", &skills).unwrap();
        assert_eq!(draft.title, "EcoTrack");
        assert_eq!(draft.required_skills, "React,Node.js");
        assert_eq!(draft.collaborators_needed, 3);
        assert_eq!(draft.objectives, "Reducir\nMedir");
    }

    #[test]
    fn draft_rejects_missing_fields() {
        assert!(build_draft("", "d", "", "Otro", "1", &[]).is_err());
        assert!(build_draft("t", " ", "", "Otro", "1", &[]).is_err());
        assert!(build_draft("t", "d", "", "", "1", &[]).is_err());
        assert!(build_draft("t", "d", "", "Otro", "0", &[]).is_err());
        assert!(build_draft("t", "d", "", "Otro", "dos", &[]).is_err());
    }

    #[test]
    fn draft_without_skills_sends_empty_string() {
        let draft = build_draft("t", "d", "", "Otro", "1", &[]).unwrap();
        assert_eq!(draft.required_skills, "");
    }
}
