use crate::{
    api::{ApiError, QuoteResponse},
    components::{
        empty_state::EmptyState,
        layout::{ErrorMessage, LoadingSpinner},
    },
    pages::super_admin::view_model::use_quotes_view_model,
};
use leptos::*;

#[component]
pub fn QuotesTable() -> impl IntoView {
    let vm = use_quotes_view_model();
    let quotes = Signal::derive(move || vm.quotes_resource.get());

    view! {
        <section class="bg-white shadow rounded-lg p-6 space-y-4" data-panel="quotes">
            <h2 class="text-lg font-semibold text-gray-900">"Kutipan"</h2>
            <QuoteList quotes=quotes />
        </section>
    }
}

#[component]
fn QuoteList(
    #[prop(into)] quotes: Signal<Option<Result<Vec<QuoteResponse>, ApiError>>>,
) -> impl IntoView {
    move || match quotes.get() {
        None => view! { <LoadingSpinner /> }.into_view(),
        Some(Err(err)) => view! { <ErrorMessage message=err.error /> }.into_view(),
        Some(Ok(list)) if list.is_empty() => {
            view! { <EmptyState title="Belum ada kutipan" /> }.into_view()
        }
        Some(Ok(list)) => view! {
            <ul class="divide-y divide-gray-200">
                {list
                    .into_iter()
                    .map(|quote| {
                        let author = quote.author.unwrap_or_else(|| "Anonim".to_string());
                        let date = quote
                            .created_at
                            .map(|at| at.format("%d-%m-%Y").to_string());
                        view! {
                            <li class="py-3">
                                <p class="text-sm text-gray-900 italic">{quote.content}</p>
                                <p class="mt-1 text-xs text-gray-500">
                                    {author}
                                    {date.map(|date| view! { <span class="ml-2">{date}</span> })}
                                </p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        }
        .into_view(),
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::quote;
    use crate::test_support::ssr::render_to_string;
    use chrono::{TimeZone, Utc};

    fn render_list(quotes: Option<Result<Vec<QuoteResponse>, ApiError>>) -> String {
        render_to_string(move || {
            let quotes = Signal::derive(move || quotes.clone());
            view! { <QuoteList quotes=quotes /> }
        })
    }

    #[test]
    fn quote_list_formats_author_and_date() {
        let mut dated = quote(1, "Ilmu adalah cahaya", Some("Ki Hajar"));
        dated.created_at = Utc.with_ymd_and_hms(2024, 3, 5, 8, 0, 0).single();
        let html = render_list(Some(Ok(vec![dated, quote(2, "Belajar terus", None)])));
        assert!(html.contains("Ki Hajar"));
        assert!(html.contains("05-03-2024"));
        assert!(html.contains("Anonim"));
        assert_eq!(html.matches("<li").count(), 2);
    }

    #[test]
    fn quote_list_loading_and_empty() {
        assert!(render_list(None).contains("animate-spin"));
        assert!(render_list(Some(Ok(Vec::new()))).contains("Belum ada kutipan"));
    }
}
