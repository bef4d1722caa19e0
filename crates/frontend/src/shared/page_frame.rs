//! PageFrame: standard root wrapper for every routed page.
//!
//! Root element carries `id="{module}--{category}"` and `data-page-category`,
//! so a page found in the DOM inspector maps straight back to its module.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageCategory {
    /// Table with filters and pagination.
    List,
    /// Create / edit form for one record.
    Detail,
    /// Administration page.
    System,
}

impl PageCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Detail => "detail",
            Self::System => "system",
        }
    }

    fn class(&self) -> &'static str {
        match self {
            Self::Detail => "page page--detail",
            Self::List | Self::System => "page",
        }
    }
}

/// `{module}--{category}` with both halves non-empty.
pub fn is_valid_page_id(id: &str) -> bool {
    matches!(id.split_once("--"), Some((module, category)) if !module.is_empty() && !category.is_empty())
}

#[component]
pub fn PageFrame(
    /// HTML id in format `{module}--{category}`, e.g. `"sys_users--list"`.
    page_id: &'static str,
    category: PageCategory,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(page_id), "bad page id: {page_id}");

    view! {
        <div id=page_id class=category.class() data-page-category=category.as_str()>
            {children()}
        </div>
    }
}
