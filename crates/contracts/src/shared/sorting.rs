//! Sorting of list rows by a named field.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn is_ascending(&self) -> bool {
        matches!(self, Self::Asc)
    }

    pub fn flipped(&self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub field: String,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    pub fn ascending(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    /// Header click: same field flips the direction, another field starts ascending.
    pub fn toggle(&mut self, field: &str) {
        if self.field == field {
            self.direction = self.direction.flipped();
        } else {
            self.field = field.to_string();
            self.direction = SortDirection::Asc;
        }
    }

    /// Header glyph for `field` under the current state.
    pub fn indicator(&self, field: &str) -> &'static str {
        if self.field == field {
            match self.direction {
                SortDirection::Asc => " ▲",
                SortDirection::Desc => " ▼",
            }
        } else {
            " ⇅"
        }
    }
}

/// Rows that can be ordered by a named field.
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Case-insensitive text comparison; `None` sorts as the empty string.
pub fn compare_text(a: Option<&str>, b: Option<&str>) -> Ordering {
    let a = a.unwrap_or("").to_lowercase();
    let b = b.unwrap_or("").to_lowercase();
    a.cmp(&b)
}

/// Numeric comparison; `None` and NaN sort as zero.
pub fn compare_number(a: Option<f64>, b: Option<f64>) -> Ordering {
    // -0.0 folds into 0.0 so it ties with a missing value
    let normalize = |v: Option<f64>| match v {
        Some(n) if !n.is_nan() && n != 0.0 => n,
        _ => 0.0,
    };
    normalize(a).total_cmp(&normalize(b))
}

/// Stable in-place sort. Rows with equal keys keep their relative order.
pub fn sort_list<T: Sortable>(items: &mut [T], sort: &SortState) {
    items.sort_by(|a, b| sort.direction.apply(a.compare_by_field(b, &sort.field)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u32,
        name: Option<&'static str>,
        amount: Option<f64>,
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "amount" => compare_number(self.amount, other.amount),
                _ => compare_text(self.name, other.name),
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { id: 1, name: Some("beta"), amount: Some(10.0) },
            Row { id: 2, name: Some("Alpha"), amount: None },
            Row { id: 3, name: None, amount: Some(-2.5) },
            Row { id: 4, name: Some("alpha"), amount: Some(10.0) },
            Row { id: 5, name: Some("Gamma"), amount: Some(3.0) },
        ]
    }

    fn ids(rows: &[Row]) -> Vec<u32> {
        rows.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_text_is_case_insensitive_and_missing_first() {
        let mut data = rows();
        sort_list(&mut data, &SortState::ascending("name"));
        // "Alpha" and "alpha" tie; input order (2 before 4) is kept
        assert_eq!(ids(&data), vec![3, 2, 4, 1, 5]);
    }

    #[test]
    fn test_numbers_with_missing_as_zero() {
        let mut data = rows();
        sort_list(&mut data, &SortState::ascending("amount"));
        assert_eq!(ids(&data), vec![3, 2, 5, 1, 4]);
    }

    #[test]
    fn test_negative_zero_ties_with_missing() {
        assert_eq!(compare_number(None, Some(-0.0)), Ordering::Equal);
        assert_eq!(compare_number(Some(-0.0), Some(0.0)), Ordering::Equal);
        assert_eq!(compare_number(Some(f64::NAN), Some(-0.0)), Ordering::Equal);
        assert_eq!(compare_number(Some(-1.0), None), Ordering::Less);
    }

    #[test]
    fn test_descending_keeps_ties_stable() {
        let mut data = rows();
        sort_list(&mut data, &SortState::new("amount", SortDirection::Desc));
        assert_eq!(ids(&data), vec![1, 4, 5, 2, 3]);
    }

    #[test]
    fn test_sorting_sorted_list_is_noop() {
        for sort in [
            SortState::ascending("name"),
            SortState::new("name", SortDirection::Desc),
            SortState::ascending("amount"),
            SortState::new("amount", SortDirection::Desc),
        ] {
            let mut once = rows();
            sort_list(&mut once, &sort);
            let mut twice = once.clone();
            sort_list(&mut twice, &sort);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_toggle() {
        let mut sort = SortState::ascending("name");
        sort.toggle("name");
        assert_eq!(sort.direction, SortDirection::Desc);
        sort.toggle("amount");
        assert_eq!(sort, SortState::ascending("amount"));
    }

    #[test]
    fn test_indicator() {
        let sort = SortState::new("name", SortDirection::Desc);
        assert_eq!(sort.indicator("name"), " ▼");
        assert_eq!(sort.indicator("amount"), " ⇅");
    }
}
