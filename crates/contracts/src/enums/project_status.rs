use serde::{Deserialize, Serialize};
use std::fmt;

/// Стадия производства проекта
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProjectStatus {
    /// Бриф ещё заполняется пользователем
    Incomplete,
    Shooting,
    Editing,
    /// Черновой монтаж ждёт обратной связи
    Feedback,
    Completed,
}

impl ProjectStatus {
    /// Код статуса в том виде, в котором он приходит с сервера
    pub fn code(&self) -> &'static str {
        match self {
            ProjectStatus::Incomplete => "INCOMPLETE",
            ProjectStatus::Shooting => "SHOOTING",
            ProjectStatus::Editing => "EDITING",
            ProjectStatus::Feedback => "FEEDBACK",
            ProjectStatus::Completed => "COMPLETED",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            ProjectStatus::Incomplete => "Incomplete",
            ProjectStatus::Shooting => "Shooting",
            ProjectStatus::Editing => "Editing",
            ProjectStatus::Feedback => "Feedback",
            ProjectStatus::Completed => "Completed",
        }
    }

    pub fn all() -> Vec<ProjectStatus> {
        vec![
            ProjectStatus::Incomplete,
            ProjectStatus::Shooting,
            ProjectStatus::Editing,
            ProjectStatus::Feedback,
            ProjectStatus::Completed,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "INCOMPLETE" => Some(ProjectStatus::Incomplete),
            "SHOOTING" => Some(ProjectStatus::Shooting),
            "EDITING" => Some(ProjectStatus::Editing),
            "FEEDBACK" => Some(ProjectStatus::Feedback),
            "COMPLETED" => Some(ProjectStatus::Completed),
            _ => None,
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
