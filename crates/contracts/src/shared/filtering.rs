//! Row filters for list screens.
//!
//! A `FilterSet` is a conjunction: a row is kept only when every predicate
//! accepts it. There is no disjunction.

use chrono::NaiveDate;
use std::fmt;
use std::sync::Arc;

/// Quick-search queries shorter than this do not filter.
pub const MIN_SEARCH_LEN: usize = 3;

/// Rows that support the quick-search box.
pub trait Searchable {
    fn matches_filter(&self, filter: &str) -> bool;

    fn get_field_value(&self, field: &str) -> Option<String>;
}

pub fn is_search_active(filter: &str) -> bool {
    filter.trim().chars().count() >= MIN_SEARCH_LEN
}

pub fn filter_list<T: Searchable>(items: Vec<T>, filter: &str) -> Vec<T> {
    if !is_search_active(filter) {
        return items;
    }
    let filter = filter.trim();
    items
        .into_iter()
        .filter(|item| item.matches_filter(filter))
        .collect()
}

/// Case-insensitive substring test used by `Searchable` impls.
pub fn contains_ci(haystack: Option<&str>, needle: &str) -> bool {
    haystack
        .map(|h| h.to_lowercase().contains(&needle.to_lowercase()))
        .unwrap_or(false)
}

/// Reads `YYYY-MM-DD` from the start of a date or RFC 3339 timestamp.
pub fn parse_date_prefix(value: &str) -> Option<NaiveDate> {
    let head = value.get(..10)?;
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}

type Predicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

pub struct Filter<T> {
    field: String,
    predicate: Predicate<T>,
}

impl<T> Filter<T> {
    pub fn new(field: impl Into<String>, predicate: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        Self {
            field: field.into(),
            predicate: Arc::new(predicate),
        }
    }

    pub fn matches(&self, item: &T) -> bool {
        (self.predicate)(item)
    }
}

impl<T> Clone for Filter<T> {
    fn clone(&self) -> Self {
        Self {
            field: self.field.clone(),
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<T> fmt::Debug for Filter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter").field("field", &self.field).finish()
    }
}

#[derive(Debug)]
pub struct FilterSet<T> {
    filters: Vec<Filter<T>>,
}

impl<T: 'static> FilterSet<T> {
    pub fn new() -> Self {
        Self { filters: Vec::new() }
    }

    pub fn with(mut self, filter: Filter<T>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Case-insensitive "contains". A blank query adds nothing.
    pub fn text_contains<F>(self, field: &str, query: &str, accessor: F) -> Self
    where
        F: Fn(&T) -> Option<&str> + Send + Sync + 'static,
    {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self;
        }
        self.with(Filter::new(field, move |item: &T| {
            contains_ci(accessor(item), &query)
        }))
    }

    /// Exact match. `None` as expected value adds nothing.
    pub fn equals<V, F>(self, field: &str, expected: Option<V>, accessor: F) -> Self
    where
        V: PartialEq + Send + Sync + 'static,
        F: Fn(&T) -> V + Send + Sync + 'static,
    {
        match expected {
            Some(expected) => self.with(Filter::new(field, move |item: &T| {
                accessor(item) == expected
            })),
            None => self,
        }
    }

    /// Inclusive date bounds. Rows without a date fail once any bound is set.
    pub fn date_range<F>(
        self,
        field: &str,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        accessor: F,
    ) -> Self
    where
        F: Fn(&T) -> Option<NaiveDate> + Send + Sync + 'static,
    {
        if from.is_none() && to.is_none() {
            return self;
        }
        self.with(Filter::new(field, move |item: &T| match accessor(item) {
            Some(date) => from.map_or(true, |f| date >= f) && to.map_or(true, |t| date <= t),
            None => false,
        }))
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn matches(&self, item: &T) -> bool {
        self.filters.iter().all(|f| f.matches(item))
    }

    /// Returns the matching rows in input order. The source is not touched.
    pub fn apply(&self, items: &[T]) -> Vec<T>
    where
        T: Clone,
    {
        items.iter().filter(|item| self.matches(item)).cloned().collect()
    }
}

impl<T: 'static> Default for FilterSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for FilterSet<T> {
    fn clone(&self) -> Self {
        Self {
            filters: self.filters.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Invoice {
        number: String,
        customer: Option<String>,
        status: &'static str,
        issued: Option<NaiveDate>,
    }

    impl Searchable for Invoice {
        fn matches_filter(&self, filter: &str) -> bool {
            contains_ci(Some(&self.number), filter) || contains_ci(self.customer.as_deref(), filter)
        }

        fn get_field_value(&self, field: &str) -> Option<String> {
            match field {
                "number" => Some(self.number.clone()),
                "customer" => self.customer.clone(),
                _ => None,
            }
        }
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn invoices() -> Vec<Invoice> {
        vec![
            Invoice { number: "F-001".into(), customer: Some("Acme Corp".into()), status: "paid", issued: Some(date("2024-01-05")) },
            Invoice { number: "F-002".into(), customer: Some("Globex".into()), status: "open", issued: Some(date("2024-02-10")) },
            Invoice { number: "F-003".into(), customer: None, status: "open", issued: None },
            Invoice { number: "F-004".into(), customer: Some("acme labs".into()), status: "open", issued: Some(date("2024-03-01")) },
        ]
    }

    fn numbers(rows: &[Invoice]) -> Vec<&str> {
        rows.iter().map(|r| r.number.as_str()).collect()
    }

    #[test]
    fn test_quick_search_needs_three_chars() {
        assert_eq!(filter_list(invoices(), "ac").len(), 4);
        assert_eq!(filter_list(invoices(), "  ac ").len(), 4);
        assert_eq!(numbers(&filter_list(invoices(), "ACME")), vec!["F-001", "F-004"]);
    }

    #[test]
    fn test_empty_set_keeps_everything() {
        let set = FilterSet::<Invoice>::new();
        assert!(set.is_empty());
        assert_eq!(set.apply(&invoices()).len(), 4);
    }

    #[test]
    fn test_conjunction() {
        let set = FilterSet::new()
            .text_contains("customer", "acme", |i: &Invoice| i.customer.as_deref())
            .equals("status", Some("open"), |i: &Invoice| i.status);
        assert_eq!(set.len(), 2);
        assert_eq!(numbers(&set.apply(&invoices())), vec!["F-004"]);
    }

    #[test]
    fn test_blank_inputs_add_nothing() {
        let set = FilterSet::new()
            .text_contains("customer", "   ", |i: &Invoice| i.customer.as_deref())
            .equals::<&str, _>("status", None, |i: &Invoice| i.status)
            .date_range("issued", None, None, |i: &Invoice| i.issued);
        assert!(set.is_empty());
    }

    #[test]
    fn test_date_range_inclusive() {
        let set = FilterSet::new().date_range(
            "issued",
            Some(date("2024-01-05")),
            Some(date("2024-02-10")),
            |i: &Invoice| i.issued,
        );
        assert_eq!(numbers(&set.apply(&invoices())), vec!["F-001", "F-002"]);

        let open_ended = FilterSet::new().date_range("issued", Some(date("2024-02-01")), None, |i: &Invoice| i.issued);
        assert_eq!(numbers(&open_ended.apply(&invoices())), vec!["F-002", "F-004"]);
    }

    #[test]
    fn test_source_is_untouched() {
        let source = invoices();
        let set = FilterSet::new().equals("status", Some("paid"), |i: &Invoice| i.status);
        let filtered = set.apply(&source);
        assert_eq!(filtered.len(), 1);
        assert_eq!(source, invoices());
    }

    #[test]
    fn test_parse_date_prefix() {
        assert_eq!(parse_date_prefix("2024-03-15T14:02:26.123Z"), Some(date("2024-03-15")));
        assert_eq!(parse_date_prefix("2024-03-15"), Some(date("2024-03-15")));
        assert_eq!(parse_date_prefix("15.03.2024"), None);
        assert_eq!(parse_date_prefix("short"), None);
    }

    #[test]
    fn test_get_field_value() {
        let row = &invoices()[2];
        assert_eq!(row.get_field_value("number").as_deref(), Some("F-003"));
        assert_eq!(row.get_field_value("customer"), None);
    }
}
