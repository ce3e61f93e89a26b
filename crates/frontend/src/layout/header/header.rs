use leptos::prelude::*;

/// Static banner at the top of the page
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header data-zone="header" class="header" style="display: flex; align-items: center; padding: 12px 24px; background: #212529; color: white;">
            <div class="header__content">
                <span class="header__title" style="font-size: 1.25rem; font-weight: 700; letter-spacing: 0.5px;">"Projects Dashboard"</span>
            </div>
        </header>
    }
}
