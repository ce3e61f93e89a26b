use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::enums::{ProjectStatus, ProjectType};

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор проекта (целое число, назначается сервером)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub i64);

impl ProjectId {
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Проект в том виде, в котором его отдаёт `GET /projects`.
///
/// Клиент никогда не изменяет проекты: список только фильтруется и
/// сортируется локально.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub status: ProjectStatus,

    #[serde(rename = "type")]
    pub project_type: ProjectType,

    /// Календарная дата создания, время суток отброшено при разборе
    #[serde(rename = "createdOn", with = "created_on_format")]
    pub created_on: NaiveDate,

    pub archived: bool,
}

impl Project {
    /// Строковое представление каждого поля, по которым идёт полнотекстовый поиск
    pub fn search_fields(&self) -> [String; 6] {
        [
            self.id.to_string(),
            self.name.clone(),
            self.status.code().to_string(),
            self.project_type.code().to_string(),
            self.created_on.format(created_on_format::FORMAT).to_string(),
            self.archived.to_string(),
        ]
    }

    /// `needle` должен быть уже обрезан и приведён к нижнему регистру
    pub fn matches_search(&self, needle: &str) -> bool {
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Разбор даты создания: `YYYY-MM-DD`, локальное `YYYY-MM-DDTHH:MM:SS[.fff]`
/// или RFC 3339. Время всегда отбрасывается.
pub fn parse_created_on(raw: &str) -> Result<NaiveDate, String> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.date_naive());
    }
    if let Ok(dt) = raw.parse::<NaiveDateTime>() {
        return Ok(dt.date());
    }

    NaiveDate::parse_from_str(raw, created_on_format::FORMAT)
        .map_err(|e| format!("Invalid createdOn '{}': {}", raw, e))
}

mod created_on_format {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_created_on(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json(created_on: &str) -> String {
        format!(
            r#"{{"id":7,"name":"Onboarding Video","status":"EDITING","type":"training","createdOn":"{}","archived":false}}"#,
            created_on
        )
    }

    #[test]
    fn test_deserialize_wire_project() {
        let project: Project = serde_json::from_str(&sample_json("2023-01-05")).unwrap();
        assert_eq!(project.id, ProjectId(7));
        assert_eq!(project.status, ProjectStatus::Editing);
        assert_eq!(project.project_type, ProjectType::Training);
        assert_eq!(project.created_on, NaiveDate::from_ymd_opt(2023, 1, 5).unwrap());
        assert!(!project.archived);
    }

    #[test]
    fn test_created_on_time_is_discarded() {
        let expected = NaiveDate::from_ymd_opt(2023, 1, 5).unwrap();
        for raw in [
            "2023-01-05T23:59:59",
            "2023-01-05T08:15:00.250",
            "2023-01-05T10:00:00.000Z",
            "2023-01-05T22:00:00+03:00",
        ] {
            let project: Project = serde_json::from_str(&sample_json(raw)).unwrap();
            assert_eq!(project.created_on, expected, "input: {}", raw);
        }
    }

    #[test]
    fn test_malformed_project_is_rejected() {
        assert!(serde_json::from_str::<Project>(&sample_json("not a date")).is_err());
        assert!(serde_json::from_str::<Project>(r#"{"id":1,"name":"x"}"#).is_err());
    }

    #[test]
    fn test_serialize_uses_wire_names() {
        let project: Project = serde_json::from_str(&sample_json("2023-01-05T10:00:00Z")).unwrap();
        let value = serde_json::to_value(&project).unwrap();
        assert_eq!(value["createdOn"], "2023-01-05");
        assert_eq!(value["type"], "training");
        assert_eq!(value["id"], 7);
    }

    #[test]
    fn test_matches_search_across_fields() {
        let project: Project = serde_json::from_str(&sample_json("2023-01-05")).unwrap();
        assert!(project.matches_search("onboarding"));
        assert!(project.matches_search("edit"));
        assert!(project.matches_search("train"));
        assert!(project.matches_search("2023-01"));
        assert!(project.matches_search("false"));
        assert!(project.matches_search("7"));
        assert!(!project.matches_search("completed"));
    }
}
