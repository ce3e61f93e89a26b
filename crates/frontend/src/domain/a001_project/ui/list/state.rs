use chrono::NaiveDate;
use contracts::domain::a001_project::{filter_projects, sort_by_created, Project, ProjectCriteria};
use contracts::enums::{ArchivedMode, ProjectStatus, ProjectType, SortDirection};
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct ProjectListState {
    // Полный список с сервера, не изменяется после загрузки
    pub items: Vec<Project>,
    // Отображаемое представление
    pub filtered: Vec<Project>,

    pub criteria: ProjectCriteria,

    // Последнее выбранное направление сортировки (только для select)
    pub sort: Option<SortDirection>,

    pub advanced_filter_open: bool,
    pub is_loaded: bool,
}

impl Default for ProjectListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            filtered: Vec::new(),
            criteria: ProjectCriteria::default(),
            sort: None,
            advanced_filter_open: true,
            is_loaded: false,
        }
    }
}

impl ProjectListState {
    pub fn set_items(&mut self, items: Vec<Project>) {
        self.items = items;
        self.is_loaded = true;
        self.apply_filter();
    }

    /// Пересчитывает представление из полного списка.
    /// Порядок от предыдущей сортировки при этом теряется.
    pub fn apply_filter(&mut self) {
        log::debug!("filter pass, archived mode: {}", self.criteria.archived.code());
        self.filtered = filter_projects(&self.items, &self.criteria);
    }

    pub fn set_search(&mut self, text: String) {
        self.criteria.search = text;
        self.apply_filter();
    }

    pub fn set_date_from(&mut self, date_from: Option<NaiveDate>) {
        self.criteria.date_from = date_from;
        self.apply_filter();
    }

    pub fn set_type(&mut self, project_type: Option<ProjectType>) {
        self.criteria.project_type = project_type;
        self.apply_filter();
    }

    pub fn set_status(&mut self, status: Option<ProjectStatus>) {
        self.criteria.status = status;
        self.apply_filter();
    }

    pub fn set_archived(&mut self, archived: ArchivedMode) {
        self.criteria.archived = archived;
        self.apply_filter();
    }

    /// Сортирует только текущее представление
    pub fn sort(&mut self, direction: SortDirection) {
        self.sort = Some(direction);
        sort_by_created(&mut self.filtered, direction);
    }

    pub fn toggle_advanced_filter(&mut self) {
        self.advanced_filter_open = !self.advanced_filter_open;
    }
}

pub fn create_state() -> RwSignal<ProjectListState> {
    RwSignal::new(ProjectListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded_state() -> ProjectListState {
        let json = r#"[
            {"id":1,"name":"Safety Induction","status":"SHOOTING","type":"training","createdOn":"2023-01-05","archived":false},
            {"id":2,"name":"Customer Story","status":"FEEDBACK","type":"testimonial","createdOn":"2023-01-10T09:30:00Z","archived":false},
            {"id":3,"name":"Chemistry 101","status":"COMPLETED","type":"educational","createdOn":"2022-11-02","archived":true}
        ]"#;
        let items: Vec<Project> = serde_json::from_str(json).unwrap();
        let mut state = ProjectListState::default();
        state.set_items(items);
        state
    }

    fn ids(state: &ProjectListState) -> Vec<i64> {
        state.filtered.iter().map(|p| p.id.value()).collect()
    }

    #[test]
    fn test_initial_view_hides_archived() {
        let state = loaded_state();
        assert!(state.is_loaded);
        assert_eq!(state.items.len(), 3);
        assert_eq!(ids(&state), vec![1, 2]);
    }

    #[test]
    fn test_sort_is_discarded_by_next_filter() {
        let mut state = loaded_state();

        state.sort(SortDirection::Descending);
        assert_eq!(ids(&state), vec![2, 1]);

        state.set_date_from(NaiveDate::from_ymd_opt(2023, 1, 6));
        assert_eq!(ids(&state), vec![2]);

        state.set_date_from(None);
        assert_eq!(ids(&state), vec![1, 2]);
        assert_eq!(state.sort, Some(SortDirection::Descending));
    }

    #[test]
    fn test_search_uses_current_criteria() {
        let mut state = loaded_state();
        state.set_archived(ArchivedMode::All);
        state.set_search("ST".to_string());
        // hits the name and type of 2 and the name of 3
        assert_eq!(ids(&state), vec![2, 3]);

        state.set_type(Some(ProjectType::Educational));
        assert_eq!(ids(&state), vec![3]);

        state.set_search(String::new());
        state.set_status(Some(ProjectStatus::Shooting));
        assert!(state.filtered.is_empty());
    }

    #[test]
    fn test_toggle_advanced_filter_keeps_view() {
        let mut state = loaded_state();
        state.set_archived(ArchivedMode::Archived);
        let before = state.filtered.clone();

        assert!(state.advanced_filter_open);
        state.toggle_advanced_filter();
        assert!(!state.advanced_filter_open);
        state.toggle_advanced_filter();

        assert_eq!(state.filtered, before);
        assert_eq!(state.criteria.archived, ArchivedMode::Archived);
    }

    #[test]
    fn test_filtered_is_subset_of_items() {
        let mut state = loaded_state();
        state.set_archived(ArchivedMode::All);
        state.set_search("2023".to_string());
        assert!(state.filtered.iter().all(|p| state.items.contains(p)));
    }
}
