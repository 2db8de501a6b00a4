//! Comma-joined list fields (skills, interests) and the option catalogues the
//! forms offer.

/// Areas a project can be filed under.
pub const AREAS: &[&str] = &[
    "Tecnología Verde",
    "Educación",
    "Salud y Bienestar",
    "Emprendimiento",
    "Arte y Cultura",
    "Ciencia e Investigación",
    "Desarrollo Social",
    "Innovación Tecnológica",
    "Deportes",
    "Otro",
];

/// Skills suggested by the filters and forms. Free text is allowed too.
pub const SKILLS: &[&str] = &[
    "React",
    "Python",
    "Node.js",
    "UX/UI Design",
    "Machine Learning",
    "Flutter",
    "Marketing Digital",
];

/// Splits a comma-joined field, trimming entries and dropping empty ones.
pub fn split_list(joined: &str) -> Vec<String> {
    joined
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Joins entries with a bare `,`, the inverse of [`split_list`] for
/// trim-normalized input.
pub fn join_list<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(",")
}

/// Adds `item` unless it is blank or already present. Returns whether the
/// list changed.
pub fn push_unique(items: &mut Vec<String>, item: &str) -> bool {
    let item = item.trim();
    if item.is_empty() || items.iter().any(|s| s == item) {
        return false;
    }
    items.push(item.to_string());
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("React,Python,Node.js")]
    #[case("UX/UI Design")]
    #[case("Machine Learning,Marketing Digital")]
    #[case("")]
    fn join_inverts_split(#[case] joined: &str) {
        assert_eq!(join_list(&split_list(joined)), joined);
    }

    #[test]
    fn split_trims_and_drops_empty_segments() {
        assert_eq!(split_list(" React , ,Python,"), vec!["React", "Python"]);
        assert!(split_list("  ").is_empty());
    }

    #[test]
    fn push_unique_ignores_duplicates_and_blanks() {
        let mut skills = vec!["Rust".to_string()];
        assert!(!push_unique(&mut skills, "Rust"));
        assert!(!push_unique(&mut skills, "   "));
        assert!(push_unique(&mut skills, " Go "));
        assert_eq!(skills, vec!["Rust", "Go"]);
    }
}
