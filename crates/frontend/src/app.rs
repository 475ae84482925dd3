use crate::domain::a001_tool_listing::ui::list::ToolListingPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ToolListingPage />
    }
}
