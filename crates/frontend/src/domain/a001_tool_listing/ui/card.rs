use contracts::domain::a001_tool_listing::listing::subject_tags;
use contracts::domain::a001_tool_listing::rating::RatingDisplay;
use contracts::domain::a001_tool_listing::ToolRecord;
use leptos::prelude::*;

/// Карточка инструмента
///
/// `compact` is the variant of the "latest additions" row: shorter
/// description, no author line, no note for untested tools.
#[component]
pub fn ToolCard(tool: ToolRecord, #[prop(optional)] compact: bool) -> impl IntoView {
    let tags: Vec<String> = subject_tags(&tool.subject)
        .into_iter()
        .map(str::to_string)
        .collect();

    let rating = rating_badge(RatingDisplay::from_rating(&tool.rating), compact)
        .map(|(class, text)| view! { <span class=class>{text}</span> });

    let description_class = if compact {
        "tool-card__description tool-card__description--clamped"
    } else {
        "tool-card__description"
    };

    view! {
        <div class="tool-card">
            <h3 class="tool-card__title">{tool.tool}</h3>
            <a
                class="tool-card__link"
                href=tool.url
                target="_blank"
                rel="noopener noreferrer"
            >
                "Bezoek website"
            </a>
            <p class=description_class>{tool.description}</p>
            <div class="tool-card__tags">
                {tags
                    .into_iter()
                    .map(|tag| view! { <span class="tool-card__tag">{tag}</span> })
                    .collect_view()}
            </div>
            {(!compact).then(|| view! {
                <div class="tool-card__muted">"Toegevoegd door: " {tool.added_by}</div>
            })}
            <div class="tool-card__footer">
                <span class="tool-card__muted">"Toegevoegd op: " {tool.date}</span>
                {rating}
            </div>
        </div>
    }
}

/// CSS class and text of the rating span. Compact cards leave out the
/// untested note.
fn rating_badge(display: RatingDisplay, compact: bool) -> Option<(&'static str, String)> {
    match display.stars() {
        Some(stars) => Some(("tool-card__stars", stars)),
        None if compact => None,
        None => Some(("tool-card__muted", "Nog niet getest".to_string())),
    }
}
