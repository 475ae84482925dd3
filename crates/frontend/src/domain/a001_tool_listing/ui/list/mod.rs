pub mod model;
pub mod view_model;

use self::view_model::ToolListingViewModel;
use crate::domain::a001_tool_listing::ui::card::ToolCard;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::FilterSelect;
use contracts::domain::a001_tool_listing::rating::RATING_OPTIONS;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn ToolListingPage() -> impl IntoView {
    let vm = ToolListingViewModel::new();
    vm.load();

    let rating_options: Vec<(String, String)> = RATING_OPTIONS
        .iter()
        .map(|(value, label)| (value.to_string(), label.to_string()))
        .collect();

    view! {
        <div class="tools-page">
            <PageHeader
                title="AI Tools Overzicht"
                subtitle="Ontdek en verken de laatste AI tools en technologieën"
            />

            <main class="tools-page__main">
                <section class="tools-page__section">
                    <h2 class="tools-page__heading">"Laatste toevoegingen"</h2>
                    <div class="tools-grid tools-grid--latest">
                        {move || vm
                            .latest()
                            .into_iter()
                            .map(|tool| view! { <ToolCard tool=tool compact=true /> })
                            .collect_view()}
                    </div>
                </section>

                <section class="tools-page__filters">
                    <h2 class="tools-page__heading">"Filter Tools"</h2>
                    <div class="tools-page__filter-row">
                        <FilterSelect
                            value=vm.subject_filter
                            on_change=Callback::new(move |v: String| vm.subject_filter.set(v))
                            all_label="Alle onderwerpen"
                            options=Signal::derive(move || vm.subject_options())
                        />
                        <FilterSelect
                            value=vm.rating_filter
                            on_change=Callback::new(move |v: String| vm.rating_filter.set(v))
                            all_label="Alle beoordelingen"
                            options=rating_options
                        />
                    </div>
                </section>

                <section class="tools-grid">
                    {move || vm
                        .filtered
                        .get()
                        .into_iter()
                        .map(|tool| view! { <ToolCard tool=tool /> })
                        .collect_view()}
                </section>
            </main>
        </div>
    }
}
