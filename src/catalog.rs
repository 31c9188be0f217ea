use std::{fmt, str::FromStr, sync::LazyLock};

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::content::{read_catalog, ContentError};

pub static CATALOG: LazyLock<Catalog> =
    LazyLock::new(|| Catalog::load().expect("embedded catalog should be valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    Flagship,
    Data,
    Ai,
    Db,
    Viz,
}

impl ProjectCategory {
    /// Display order of the filter buttons.
    pub const ALL: [ProjectCategory; 5] = [
        ProjectCategory::Flagship,
        ProjectCategory::Data,
        ProjectCategory::Ai,
        ProjectCategory::Db,
        ProjectCategory::Viz,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Flagship => "flagship",
            Self::Data => "data",
            Self::Ai => "ai",
            Self::Db => "db",
            Self::Viz => "viz",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Flagship => "Projet phare",
            Self::Data => "Data Engineering",
            Self::Ai => "IA & NLP",
            Self::Db => "Bases de données",
            Self::Viz => "DataViz",
        }
    }
}

/// Selection narrowing the projects gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ProjectCategory),
}

impl CategoryFilter {
    pub fn options() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(Self::All).chain(ProjectCategory::ALL.into_iter().map(Self::Only))
    }

    pub fn id(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(category) => category.id(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "Tout",
            Self::Only(category) => category.label(),
        }
    }

    /// Reads the `?categorie=` link parameter. Unknown ids show everything.
    pub fn from_query(value: Option<&str>) -> Self {
        let Some(value) = value else {
            return Self::All;
        };
        value.parse().unwrap_or_else(|err| {
            log::warn!("{err}, showing all projects");
            Self::All
        })
    }

    pub fn matches(self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => project.category == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::options()
            .find(|f| f.id() == s)
            .ok_or_else(|| ContentError::UnknownCategory(s.to_string()))
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLink {
    pub label: String,
    pub icon: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub image: String,
    pub category: ProjectCategory,
    pub technologies: Vec<String>,
    pub links: Vec<ProjectLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechItem {
    pub name: String,
    pub icon: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechCategory {
    pub id: String,
    pub title: String,
    pub icon: String,
    pub color: String,
    pub items: Vec<TechItem>,
}

impl TechCategory {
    /// First word of the title, used for the tab label on narrow screens.
    pub fn short_title(&self) -> &str {
        self.title.split(' ').next().unwrap_or(&self.title)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub icon: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub projects: Vec<Project>,
    pub tech: Vec<TechCategory>,
    pub social: Vec<SocialLink>,
}

impl Catalog {
    pub fn load() -> Result<Self, ContentError> {
        let catalog = Self {
            projects: parse("projects.json", &read_catalog("projects.json")?)?,
            tech: parse("tech.json", &read_catalog("tech.json")?)?,
            social: parse("social.json", &read_catalog("social.json")?)?,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        let mut project_ids = self.projects.iter().map(|p| p.id).collect::<Vec<_>>();
        project_ids.sort_unstable();
        if let Some(w) = project_ids.windows(2).find(|w| w[0] == w[1]) {
            return Err(ContentError::Invalid(format!("duplicate project id {}", w[0])));
        }
        for link in self.projects.iter().flat_map(|p| &p.links) {
            if link.url.is_empty() {
                return Err(ContentError::Invalid(format!("empty url for link {}", link.label)));
            }
        }

        if self.tech.is_empty() {
            return Err(ContentError::Invalid("no tech categories".to_string()));
        }
        for (i, category) in self.tech.iter().enumerate() {
            if self.tech[..i].iter().any(|c| c.id == category.id) {
                return Err(ContentError::Invalid(format!(
                    "duplicate tech category {}",
                    category.id
                )));
            }
            if category.items.is_empty() {
                return Err(ContentError::Invalid(format!(
                    "tech category {} has no items",
                    category.id
                )));
            }
            let mut colors =
                std::iter::once(&category.color).chain(category.items.iter().map(|t| &t.color));
            if let Some(bad) = colors.find(|c| !is_hex_color(c)) {
                return Err(ContentError::Invalid(format!(
                    "bad color {bad} in tech category {}",
                    category.id
                )));
            }
        }

        if let Some(link) = self.social.iter().find(|l| l.url.is_empty()) {
            return Err(ContentError::Invalid(format!("empty url for {}", link.name)));
        }
        Ok(())
    }

    pub fn filter_projects(&self, filter: CategoryFilter) -> Vec<&Project> {
        filter_projects(&self.projects, filter)
    }

    /// Clamps a tab index so it always names an existing category.
    pub fn tech_index(&self, index: usize) -> usize {
        if index < self.tech.len() {
            index
        } else {
            0
        }
    }

    pub fn tech_category(&self, index: usize) -> Option<&TechCategory> {
        self.tech.get(self.tech_index(index))
    }
}

/// Keeps catalog order.
pub fn filter_projects(projects: &[Project], filter: CategoryFilter) -> Vec<&Project> {
    projects.iter().filter(|p| filter.matches(p)).collect()
}

fn parse<T: DeserializeOwned>(path: &str, text: &str) -> Result<T, ContentError> {
    serde_json::from_str(text).map_err(|e| ContentError::Parse {
        path: path.to_string(),
        reason: e.to_string(),
    })
}

fn is_hex_color(s: &str) -> bool {
    s.len() == 7 && s.starts_with('#') && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}
