use contracts::shared::filtering::{is_search_active, parse_date_prefix, Filter, FilterSet, Searchable};
use contracts::system::users::User;

pub const DEFAULT_SORT_FIELD: &str = "username";
pub const PAGE_SIZE: usize = 25;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Blocked,
}

impl StatusFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Blocked => "blocked",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "active" => Self::Active,
            "blocked" => Self::Blocked,
            _ => Self::All,
        }
    }

    fn expected(&self) -> Option<bool> {
        match self {
            Self::All => None,
            Self::Active => Some(true),
            Self::Blocked => Some(false),
        }
    }
}

/// Filter inputs of the users list as typed by the user.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UsersFilterState {
    pub search_query: String,
    pub status: StatusFilter,
    /// `YYYY-MM-DD` from `<input type="date">`, empty when unset.
    pub created_from: String,
    pub created_to: String,
}

impl UsersFilterState {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn to_filter_set(&self) -> FilterSet<User> {
        let mut filters = FilterSet::new();
        if is_search_active(&self.search_query) {
            let query = self.search_query.trim().to_string();
            filters = filters.with(Filter::new("search", move |u: &User| u.matches_filter(&query)));
        }
        filters
            .equals("is_active", self.status.expected(), |u: &User| u.is_active)
            .date_range(
                "created_at",
                parse_date_prefix(&self.created_from),
                parse_date_prefix(&self.created_to),
                |u: &User| parse_date_prefix(&u.created_at),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::sorting::{sort_list, SortState};

    fn user(id: &str, username: &str, email: Option<&str>, active: bool, created: &str) -> User {
        User {
            id: id.into(),
            username: username.into(),
            email: email.map(str::to_string),
            full_name: None,
            role: None,
            is_active: active,
            is_admin: false,
            created_at: created.into(),
            last_login_at: None,
        }
    }

    fn users() -> Vec<User> {
        vec![
            user("1", "maria", Some("maria@acme.test"), true, "2024-01-10T08:00:00Z"),
            user("2", "Jorge", None, false, "2024-02-01T09:30:00Z"),
            user("3", "ana", Some("ana@globex.test"), true, "2024-03-15T10:00:00Z"),
        ]
    }

    fn ids(rows: &[User]) -> Vec<&str> {
        rows.iter().map(|u| u.id.as_str()).collect()
    }

    #[test]
    fn test_default_filters_keep_all() {
        let state = UsersFilterState::default();
        assert!(state.is_empty());
        assert!(state.to_filter_set().is_empty());
        assert_eq!(state.to_filter_set().apply(&users()).len(), 3);
    }

    #[test]
    fn test_search_and_status() {
        let state = UsersFilterState {
            search_query: "acme".into(),
            status: StatusFilter::Active,
            ..Default::default()
        };
        assert_eq!(ids(&state.to_filter_set().apply(&users())), vec!["1"]);

        let short = UsersFilterState {
            search_query: "an".into(),
            ..Default::default()
        };
        assert!(short.to_filter_set().is_empty());
    }

    #[test]
    fn test_created_range() {
        let state = UsersFilterState {
            created_from: "2024-02-01".into(),
            ..Default::default()
        };
        assert_eq!(ids(&state.to_filter_set().apply(&users())), vec!["2", "3"]);

        let blocked = UsersFilterState {
            status: StatusFilter::from_str("blocked"),
            created_to: "2024-02-01".into(),
            ..Default::default()
        };
        assert_eq!(ids(&blocked.to_filter_set().apply(&users())), vec!["2"]);
    }

    #[test]
    fn test_username_sort_is_case_insensitive() {
        let mut rows = users();
        sort_list(&mut rows, &SortState::ascending(DEFAULT_SORT_FIELD));
        assert_eq!(ids(&rows), vec!["3", "2", "1"]);
    }
}
