use crate::shared::icons::icon;
use leptos::prelude::*;

/// FilterPanel component - toggleable panel for secondary filter controls
///
/// Toggling only changes visibility; the controls keep their values while hidden.
#[component]
pub fn FilterPanel(
    /// Whether the filter controls are shown
    #[prop(into)]
    is_expanded: Signal<bool>,

    /// Called when the toggle button is clicked
    on_toggle: Callback<()>,

    /// Number of active filters (for badge display)
    #[prop(into)]
    active_filters_count: Signal<usize>,

    /// Filter content (form fields)
    children: Children,
) -> impl IntoView {
    view! {
        <div class="filter-panel">
            <div class="filter-panel-header" style="display: flex; justify-content: flex-end; margin-bottom: 8px;">
                <button
                    class="button"
                    style=move || format!(
                        "display: inline-flex; align-items: center; gap: 6px; color: white; border: none; border-radius: 4px; padding: 4px 10px; cursor: pointer; background: {};",
                        if is_expanded.get() { "#dc3545" } else { "#212529" }
                    )
                    on:click=move |_| on_toggle.run(())
                >
                    {icon("filter")}
                    <span class="filter-panel__title">"Advanced Filter"</span>
                    {move || {
                        let count = active_filters_count.get();
                        if count > 0 {
                            view! {
                                <span class="badge badge--primary" style="background: white; color: #212529; border-radius: 8px; padding: 0 6px; font-size: 11px;">{count}</span>
                            }.into_any()
                        } else {
                            view! { <></> }.into_any()
                        }
                    }}
                </button>
            </div>

            <div
                class=move || {
                    if is_expanded.get() {
                        "filter-panel__collapsible filter-panel__collapsible--expanded"
                    } else {
                        "filter-panel__collapsible filter-panel__collapsible--collapsed"
                    }
                }
                style:display=move || if is_expanded.get() { "block" } else { "none" }
            >
                <div class="filter-panel-content" style="display: flex; justify-content: flex-end; gap: 8px;">
                    {children()}
                </div>
            </div>
        </div>
    }
}
