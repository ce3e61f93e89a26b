pub mod header;

use leptos::prelude::*;

/// Page shell: banner on top, content below.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout" style="min-height: 100vh; background: #f1f3f5;">
            <header::Header />
            <main class="app-main">
                {children()}
            </main>
        </div>
    }
}
