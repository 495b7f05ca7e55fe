//! Client-side search and sorting of small in-memory lists

use leptos::prelude::*;
use std::cmp::Ordering;

/// Rows that can be matched by the search box
pub trait Searchable {
    /// Case-insensitive substring match against the row's text fields
    fn matches_filter(&self, filter: &str) -> bool;
}

pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Keeps rows matching `filter`; a blank filter keeps everything.
pub fn filter_list<T: Searchable>(items: Vec<T>, filter: &str) -> Vec<T> {
    let filter = filter.trim();
    if filter.is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|item| item.matches_filter(filter))
        .collect()
}

/// Case-insensitive `haystack.contains(needle)`
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// Clicking the active column flips the direction; another column starts ascending.
pub fn toggle_sort(field: &str, sort_field: RwSignal<String>, ascending: RwSignal<bool>) {
    if sort_field.get_untracked() == field {
        ascending.update(|a| *a = !*a);
    } else {
        sort_field.set(field.to_string());
        ascending.set(true);
    }
}

/// Clickable column header showing the sort direction
#[component]
pub fn SortHeader(
    label: &'static str,
    field: &'static str,
    sort_field: RwSignal<String>,
    ascending: RwSignal<bool>,
) -> impl IntoView {
    view! {
        <th
            class="table__header-cell table__header-cell--sortable"
            on:click=move |_| toggle_sort(field, sort_field, ascending)
        >
            {label}
            <span class="table__sort-indicator">
                {move || get_sort_indicator(&sort_field.get(), field, ascending.get())}
            </span>
        </th>
    }
}

/// Search box with a clear button
#[component]
pub fn SearchInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Rechercher...".to_string()
    } else {
        placeholder
    };

    view! {
        <div class="search-input">
            <input
                type="search"
                class="search-input__field"
                class:search-input__field--active=move || !value.get().trim().is_empty()
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            <Show when=move || !value.get().is_empty()>
                <button
                    class="search-input__clear"
                    title="Effacer"
                    on:click=move |_| on_change.run(String::new())
                >
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: i64,
        name: &'static str,
    }

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            contains_ci(self.name, filter)
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "name" => self.name.cmp(other.name),
                _ => self.id.cmp(&other.id),
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { id: 2, name: "Tomate" },
            Row { id: 3, name: "Farine" },
            Row { id: 1, name: "Tomme" },
        ]
    }

    #[test]
    fn test_sort_list() {
        let mut items = rows();
        sort_list(&mut items, "id", false);
        assert_eq!(items.iter().map(|r| r.id).collect::<Vec<_>>(), vec![3, 2, 1]);
        sort_list(&mut items, "name", true);
        assert_eq!(items[0].name, "Farine");
    }

    #[test]
    fn test_filter_list() {
        assert_eq!(filter_list(rows(), "tom").len(), 2);
        assert_eq!(filter_list(rows(), "  ").len(), 3);
        assert!(filter_list(rows(), "sel").is_empty());
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("id", "id", true), " ▲");
        assert_eq!(get_sort_indicator("id", "id", false), " ▼");
        assert_eq!(get_sort_indicator("id", "name", true), " ⇅");
    }
}
