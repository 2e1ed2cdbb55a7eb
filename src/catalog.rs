use std::collections::BTreeMap;

use serde::Deserialize;
use thiserror::Error;

const BUILTIN_PROJECTS: &str = include_str!("../assets/projects.json");

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub live_link: String,
    pub code_link: String,
}

#[derive(Deserialize)]
struct CatalogFile {
    projects: Vec<Project>,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse project catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("project id {0} appears more than once")]
    DuplicateId(u32),
}

/// Read-only lookup table of the projects shown in the portfolio grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectCatalog {
    projects: BTreeMap<u32, Project>,
}

impl ProjectCatalog {
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        let mut projects = BTreeMap::new();
        for project in file.projects {
            let id = project.id;
            if projects.insert(id, project).is_some() {
                return Err(CatalogError::DuplicateId(id));
            }
        }
        Ok(Self { projects })
    }

    /// The catalog shipped with the site. A broken asset leaves the
    /// portfolio empty instead of taking the page down.
    pub fn builtin() -> Self {
        match Self::from_json(BUILTIN_PROJECTS) {
            Ok(catalog) => catalog,
            Err(e) => {
                log::error!("Built-in project catalog unusable: {}", e);
                Self::default()
            }
        }
    }

    pub fn get(&self, id: u32) -> Option<&Project> {
        self.projects.get(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Project> {
        self.projects.values()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r##"{
        "projects": [
            {"id": 7, "title": "Bakery", "description": "Bread.", "technologies": ["Rust", "Yew"], "liveLink": "https://bakery.test", "codeLink": "https://git.test/bakery"},
            {"id": 3, "title": "Garage", "description": "Cars.", "technologies": [], "liveLink": "#", "codeLink": "#"}
        ]
    }"##;

    #[test]
    fn builtin_catalog_has_six_projects() {
        let catalog = ProjectCatalog::builtin();
        assert_eq!(catalog.len(), 6);
        let first = catalog.get(1).unwrap();
        assert_eq!(first.title, "E-Commerce Platform");
        assert_eq!(first.technologies.len(), 7);
        assert_eq!(first.live_link, "#");
    }

    #[test]
    fn fixture_catalog_is_keyed_by_id() {
        let catalog = ProjectCatalog::from_json(FIXTURE).unwrap();
        assert_eq!(catalog.get(7).unwrap().title, "Bakery");
        assert!(catalog.get(1).is_none());
        let ids: Vec<u32> = catalog.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 7]);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let json = r##"{"projects": [
            {"id": 1, "title": "a", "description": "", "technologies": [], "liveLink": "#", "codeLink": "#"},
            {"id": 1, "title": "b", "description": "", "technologies": [], "liveLink": "#", "codeLink": "#"}
        ]}"##;
        assert!(matches!(
            ProjectCatalog::from_json(json),
            Err(CatalogError::DuplicateId(1))
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            ProjectCatalog::from_json("{\"projects\": [}"),
            Err(CatalogError::Parse(_))
        ));
    }
}
