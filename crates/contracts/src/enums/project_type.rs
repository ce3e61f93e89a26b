use serde::{Deserialize, Serialize};
use std::fmt;

/// Тип видеопроекта
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Educational,
    Testimonial,
    Training,
    Recreational,
}

impl ProjectType {
    pub fn code(&self) -> &'static str {
        match self {
            ProjectType::Educational => "educational",
            ProjectType::Testimonial => "testimonial",
            ProjectType::Training => "training",
            ProjectType::Recreational => "recreational",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ProjectType::Educational => "Educational",
            ProjectType::Testimonial => "Testimonial",
            ProjectType::Training => "Training",
            ProjectType::Recreational => "Recreational",
        }
    }

    pub fn all() -> Vec<ProjectType> {
        vec![
            ProjectType::Educational,
            ProjectType::Testimonial,
            ProjectType::Training,
            ProjectType::Recreational,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "educational" => Some(ProjectType::Educational),
            "testimonial" => Some(ProjectType::Testimonial),
            "training" => Some(ProjectType::Training),
            "recreational" => Some(ProjectType::Recreational),
            _ => None,
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
