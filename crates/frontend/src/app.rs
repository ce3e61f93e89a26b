use crate::domain::a001_project::ui::ProjectList;
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Shell>
            <ProjectList />
        </Shell>
    }
}
