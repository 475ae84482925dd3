use super::model;
use contracts::domain::a001_tool_listing::listing::{
    derive_view, latest_additions, sorted_by_date_desc,
};
use contracts::domain::a001_tool_listing::{ListingResponse, ToolRecord};
use leptos::prelude::*;

/// ViewModel for the tool listing page
///
/// `tools` is the date-sorted snapshot from the server and is never written
/// back. `filtered` is recomputed from it whenever a filter or the snapshot
/// changes.
#[derive(Clone, Copy)]
pub struct ToolListingViewModel {
    pub tools: RwSignal<Vec<ToolRecord>>,
    pub subjects: RwSignal<Vec<String>>,
    pub subject_filter: RwSignal<String>,
    pub rating_filter: RwSignal<String>,
    pub filtered: Memo<Vec<ToolRecord>>,
}

impl ToolListingViewModel {
    pub fn new() -> Self {
        let tools = RwSignal::new(Vec::<ToolRecord>::new());
        let subject_filter = RwSignal::new(String::new());
        let rating_filter = RwSignal::new(String::new());

        let filtered = Memo::new(move |_| {
            let subject = subject_filter.get();
            let rating = rating_filter.get();
            tools.with(|base| derive_view(base, &subject, &rating))
        });

        Self {
            tools,
            subjects: RwSignal::new(Vec::new()),
            subject_filter,
            rating_filter,
            filtered,
        }
    }

    /// Fetch the listing once. On failure the lists stay empty.
    pub fn load(&self) {
        let this = *self;
        wasm_bindgen_futures::spawn_local(async move {
            this.finish_load(model::fetch_listing().await);
        });
    }

    fn finish_load(&self, result: Result<ListingResponse, String>) {
        match result {
            Ok(listing) => self.apply_listing(listing),
            Err(e) => log::error!("Error fetching tools: {}", e),
        }
    }

    pub fn apply_listing(&self, listing: ListingResponse) {
        let ListingResponse { tools, subjects, .. } = listing;
        log::debug!("Loaded {} tools, {} subjects", tools.len(), subjects.len());
        self.tools.set(sorted_by_date_desc(tools));
        self.subjects.set(subjects);
    }

    /// Newest records, independent of the filters
    pub fn latest(&self) -> Vec<ToolRecord> {
        self.tools.with(|t| latest_additions(t).to_vec())
    }

    pub fn subject_options(&self) -> Vec<(String, String)> {
        self.subjects
            .get()
            .into_iter()
            .map(|s| (s.clone(), s))
            .collect()
    }
}

impl Default for ToolListingViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tool(name: &str, date: &str, subject: &str, rating: &str) -> ToolRecord {
        ToolRecord {
            tool: name.into(),
            date: date.into(),
            subject: subject.into(),
            rating: rating.into(),
            ..Default::default()
        }
    }

    fn names(tools: &[ToolRecord]) -> Vec<String> {
        tools.iter().map(|t| t.tool.clone()).collect()
    }

    #[test]
    fn test_listing_is_sorted_and_filtered() {
        Owner::new().with(|| {
            let vm = ToolListingViewModel::new();
            vm.apply_listing(ListingResponse::new(
                vec![
                    tool("old", "01-01-2020", "AI", "5"),
                    tool("new", "01-01-2024", "AI, Writing", "4"),
                    tool("mid", "01-01-2022", "Writing", "5"),
                    tool("undated", "", "Video", ""),
                ],
                vec!["AI".into(), "Writing".into(), "Video".into()],
            ));

            assert_eq!(
                names(&vm.filtered.get_untracked()),
                vec!["new", "mid", "old", "undated"]
            );
            assert_eq!(names(&vm.latest()), vec!["new", "mid", "old"]);

            vm.subject_filter.set("Writing".into());
            assert_eq!(names(&vm.filtered.get_untracked()), vec!["new", "mid"]);

            vm.rating_filter.set("5".into());
            assert_eq!(names(&vm.filtered.get_untracked()), vec!["mid"]);
            assert_eq!(names(&vm.latest()), vec!["new", "mid", "old"]);

            vm.subject_filter.set(String::new());
            assert_eq!(names(&vm.filtered.get_untracked()), vec!["mid", "old"]);
        });
    }

    #[test]
    fn test_failed_load_leaves_lists_empty() {
        Owner::new().with(|| {
            let vm = ToolListingViewModel::new();
            vm.finish_load(Err("HTTP 500: Sheets API returned status 503".into()));

            assert!(vm.tools.get_untracked().is_empty());
            assert!(vm.subjects.get_untracked().is_empty());
            assert!(vm.filtered.get_untracked().is_empty());
            assert!(vm.latest().is_empty());
        });
    }
}
