//! List helpers: search highlighting and sortable column headers.
use contracts::shared::filtering::is_search_active;
use contracts::shared::sorting::SortState;
use leptos::prelude::*;

/// Highlights case-insensitive matches of `filter` in `text`.
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    if !is_search_active(filter) {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let parts = split_matches(text, filter.trim());
    if !parts.iter().any(|(_, hit)| *hit) {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    parts
        .into_iter()
        .map(|(chunk, hit)| {
            if hit {
                view! { <span class="search-highlight">{chunk}</span> }.into_any()
            } else {
                view! { <span>{chunk}</span> }.into_any()
            }
        })
        .collect_view()
        .into_any()
}

/// Splits `text` into (chunk, is_match) pieces. Matching is case-insensitive
/// on chars, so byte offsets stay valid for non-ASCII text.
pub fn split_matches(text: &str, filter: &str) -> Vec<(String, bool)> {
    let needle: Vec<char> = filter.chars().flat_map(char::to_lowercase).collect();
    let chars: Vec<char> = text.chars().collect();
    let lower: Vec<char> = chars
        .iter()
        .map(|c| c.to_lowercase().next().unwrap_or(*c))
        .collect();

    let mut parts = Vec::new();
    if needle.is_empty() || needle.len() > lower.len() {
        parts.push((text.to_string(), false));
        return parts;
    }

    let mut plain = String::new();
    let mut i = 0;
    while i < chars.len() {
        if i + needle.len() <= lower.len() && lower[i..i + needle.len()] == needle[..] {
            if !plain.is_empty() {
                parts.push((std::mem::take(&mut plain), false));
            }
            parts.push((chars[i..i + needle.len()].iter().collect(), true));
            i += needle.len();
        } else {
            plain.push(chars[i]);
            i += 1;
        }
    }
    if !plain.is_empty() {
        parts.push((plain, false));
    }
    parts
}

/// Header CSS class; the sorted field gets the active modifier.
pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

/// Column header that toggles sorting on click.
#[component]
pub fn SortHeader(
    #[prop(into)] label: String,
    field: &'static str,
    #[prop(into)] sort: Signal<SortState>,
    on_sort: Callback<&'static str>,
) -> impl IntoView {
    view! {
        <div class="table__sortable-header" style="cursor:pointer;" on:click=move |_| on_sort.run(field)>
            {label}
            <span class=move || sort.with(|s| get_sort_class(&s.field, field))>
                {move || sort.with(|s| s.indicator(field))}
            </span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hits(parts: &[(String, bool)]) -> Vec<&str> {
        parts.iter().filter(|(_, h)| *h).map(|(c, _)| c.as_str()).collect()
    }

    #[test]
    fn test_split_matches() {
        let parts = split_matches("Acme and ACME labs", "acme");
        assert_eq!(hits(&parts), vec!["Acme", "ACME"]);
        let joined: String = parts.iter().map(|(c, _)| c.as_str()).collect();
        assert_eq!(joined, "Acme and ACME labs");
    }

    #[test]
    fn test_split_matches_non_ascii() {
        let parts = split_matches("Facturación Ñandú", "ñan");
        assert_eq!(hits(&parts), vec!["Ñan"]);
    }

    #[test]
    fn test_split_without_match() {
        assert_eq!(split_matches("Globex", "acme"), vec![("Globex".to_string(), false)]);
        assert_eq!(split_matches("ab", "abc"), vec![("ab".to_string(), false)]);
    }

    #[test]
    fn test_get_sort_class() {
        assert!(get_sort_class("name", "name").ends_with("--active"));
        assert_eq!(get_sort_class("name", "email"), "table__sort-indicator");
    }
}
