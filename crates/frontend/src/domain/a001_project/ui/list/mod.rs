pub mod state;

use self::state::create_state;
use crate::domain::a001_project::api::fetch_projects;
use crate::shared::api_utils::projects_url;
use crate::shared::components::{DateInput, FilterPanel};
use crate::shared::date_utils::format_display_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use chrono::NaiveDate;
use contracts::enums::{ArchivedMode, ProjectStatus, ProjectType, SortDirection};
use leptos::prelude::*;
use leptos::task::spawn_local;

const SELECT_STYLE: &str = "border: 1px solid #dee2e6; border-radius: 4px; padding: 4px 8px; color: #6c757d; background: white;";

#[component]
#[allow(non_snake_case)]
pub fn ProjectList() -> impl IntoView {
    let state = create_state();

    let load_projects = move || {
        spawn_local(async move {
            log::info!("Loading projects from {}", projects_url());
            match fetch_projects().await {
                Ok(items) => {
                    log::debug!("Loaded {} projects", items.len());
                    state.update(|s| s.set_items(items));
                }
                // Список остаётся пустым, повторной попытки нет
                Err(e) => log::error!("Failed to load projects: {}", e),
            }
        });
    };

    // Загрузка при монтировании
    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_projects();
        }
    });

    let search = Signal::derive(move || state.with(|s| s.criteria.search.clone()));
    let date_value = Signal::derive(move || state.with(|s| s.criteria.date_from));
    let advanced_open = Signal::derive(move || state.with(|s| s.advanced_filter_open));
    let active_filters = Signal::derive(move || state.with(|s| s.criteria.active_filters_count()));

    let on_search = Callback::new(move |text: String| state.update(|s| s.set_search(text)));
    let on_date = Callback::new(move |date: Option<NaiveDate>| state.update(|s| s.set_date_from(date)));
    let on_toggle_filter = Callback::new(move |_: ()| state.update(|s| s.toggle_advanced_filter()));

    view! {
        <div class="project-list" style="max-width: 1140px; margin: 24px auto; background: rgba(255,255,255,0.75); border-radius: 8px; padding: 16px 24px;">
            // Heading: counter and sort direction
            <div style="display: flex; justify-content: space-between; align-items: center; margin-bottom: 16px;">
                <h4 style="margin: 0; font-weight: 700;">
                    {move || format!("Recent Projects | {} Projects", state.with(|s| s.filtered.len()))}
                </h4>
                <select
                    style="border: 1px solid #dee2e6; border-radius: 4px; padding: 4px 12px; color: #6c757d; font-weight: 600; background: white;"
                    on:change=move |ev| {
                        if let Some(direction) = SortDirection::from_code(&event_target_value(&ev)) {
                            state.update(|s| s.sort(direction));
                        }
                    }
                >
                    <option value="none" selected=true disabled=true hidden=true>"Sort By"</option>
                    <option value=SortDirection::Ascending.code()>{SortDirection::Ascending.display_name()}</option>
                    <option value=SortDirection::Descending.code()>{SortDirection::Descending.display_name()}</option>
                </select>
            </div>

            // Search
            <div style="display: flex; gap: 8px; align-items: center; margin-bottom: 8px;">
                {icon("search")}
                <span>"Search:"</span>
                <SearchInput value=search on_change=on_search />
            </div>

            // Advanced filter: date, type, status, archived
            <FilterPanel
                is_expanded=advanced_open
                on_toggle=on_toggle_filter
                active_filters_count=active_filters
            >
                <DateInput value=date_value on_change=on_date />

                <select
                    style=SELECT_STYLE
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.set_type(ProjectType::from_code(&value)));
                    }
                >
                    <option value="none" selected=true disabled=true hidden=true>"Type"</option>
                    <option value="">"All"</option>
                    {ProjectType::all()
                        .into_iter()
                        .map(|t| view! { <option value=t.code()>{t.display_name()}</option> })
                        .collect_view()}
                </select>

                <select
                    style=SELECT_STYLE
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.set_status(ProjectStatus::from_code(&value)));
                    }
                >
                    <option value="none" selected=true disabled=true hidden=true>"Status"</option>
                    <option value="">"All"</option>
                    {ProjectStatus::all()
                        .into_iter()
                        .map(|st| view! { <option value=st.code()>{st.display_name()}</option> })
                        .collect_view()}
                </select>

                <select
                    style=SELECT_STYLE
                    prop:value=move || state.with(|s| s.criteria.archived.code())
                    on:change=move |ev| {
                        let mode = ArchivedMode::from_code(&event_target_value(&ev)).unwrap_or_default();
                        state.update(|s| s.set_archived(mode));
                    }
                >
                    {ArchivedMode::all()
                        .into_iter()
                        .map(|mode| view! { <option value=mode.code()>{mode.display_name()}</option> })
                        .collect_view()}
                </select>
            </FilterPanel>

            // Table
            <table class="table__data" style="width: 100%; border-collapse: separate; border-spacing: 0 12px; margin-top: 8px;">
                <thead>
                    <tr style="background: #dc3545; color: white; font-weight: 700;">
                        <th style="width: 34%; text-align: left; padding: 8px 12px; border-radius: 6px 0 0 6px;">"Name"</th>
                        <th style="width: 16%; text-align: left; padding: 8px;">"Type"</th>
                        <th style="width: 16%; text-align: left; padding: 8px;">"Status"</th>
                        <th style="width: 17%; text-align: center; padding: 8px;">"Created"</th>
                        <th style="width: 17%; text-align: center; padding: 8px; border-radius: 0 6px 6px 0;">"Manage"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let items = state.with(|s| s.filtered.clone());
                        let needle = search.get();

                        items.into_iter().map(|project| {
                            let name = highlight_matches(&project.name, &needle);
                            let project_type = project.project_type.display_name();
                            let status = project.status.code().to_lowercase();
                            let created = format_display_date(project.created_on);

                            view! {
                                <tr style="background: white;" data-id=project.id.to_string()>
                                    <td style="padding: 8px 12px; border-radius: 6px 0 0 6px;">{name}</td>
                                    <td style="padding: 8px;">{project_type}</td>
                                    <td style="padding: 8px;">{status}</td>
                                    <td style="padding: 8px; text-align: center;">{created}</td>
                                    <td style="padding: 8px; text-align: center; border-radius: 0 6px 6px 0;">{icon("more-vertical")}</td>
                                </tr>
                            }
                        }).collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}
