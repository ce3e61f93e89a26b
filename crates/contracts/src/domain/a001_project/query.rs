//! Клиентский отбор и сортировка списка проектов.
//!
//! Каждый вызов [`filter_projects`] пересчитывает представление с нуля из
//! полного (канонического) списка; предыдущий результат не уточняется.

use chrono::NaiveDate;

use super::aggregate::Project;
use crate::enums::{ArchivedMode, ProjectStatus, ProjectType, SortDirection};

/// Активные критерии отбора
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectCriteria {
    /// Нижняя граница даты создания (включительно); `None` — без ограничения
    pub date_from: Option<NaiveDate>,
    /// Текст поиска как введён пользователем
    pub search: String,
    /// `None` — все типы
    pub project_type: Option<ProjectType>,
    /// `None` — все статусы
    pub status: Option<ProjectStatus>,
    pub archived: ArchivedMode,
}

impl ProjectCriteria {
    /// Поисковая строка после trim + lowercase
    pub fn normalized_search(&self) -> String {
        self.search.trim().to_lowercase()
    }

    /// Количество расширенных фильтров, отличных от значений по умолчанию
    pub fn active_filters_count(&self) -> usize {
        let mut count = 0;
        if self.date_from.is_some() {
            count += 1;
        }
        if self.project_type.is_some() {
            count += 1;
        }
        if self.status.is_some() {
            count += 1;
        }
        if self.archived != ArchivedMode::default() {
            count += 1;
        }
        count
    }

    fn admits(&self, project: &Project) -> bool {
        self.project_type.map_or(true, |t| project.project_type == t)
            && self.status.map_or(true, |s| project.status == s)
            && self.archived.admits(project.archived)
            && self.date_from.map_or(true, |floor| project.created_on >= floor)
    }
}

/// Значение из `<input type="date">`. Пустая или некорректная строка
/// означает отсутствие нижней границы.
pub fn parse_date_floor(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Строит отфильтрованное представление из канонического списка.
///
/// Сначала применяются тип, статус, режим архивности и дата, затем поверх
/// них — полнотекстовый поиск по всем полям. Порядок элементов совпадает с
/// порядком в `projects`.
pub fn filter_projects(projects: &[Project], criteria: &ProjectCriteria) -> Vec<Project> {
    let needle = criteria.normalized_search();

    projects
        .iter()
        .filter(|project| criteria.admits(project))
        .filter(|project| needle.is_empty() || project.matches_search(&needle))
        .cloned()
        .collect()
}

/// Сортировка текущего представления по дате создания.
///
/// Сортировка стабильная: проекты с одинаковой датой сохраняют взаимный порядок.
pub fn sort_by_created(projects: &mut [Project], direction: SortDirection) {
    match direction {
        SortDirection::Ascending => projects.sort_by(|a, b| a.created_on.cmp(&b.created_on)),
        SortDirection::Descending => projects.sort_by(|a, b| b.created_on.cmp(&a.created_on)),
    }
}
