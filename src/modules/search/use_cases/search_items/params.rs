// Search request and response shapes for the read model.
//
// Unknown `orderBy` / `filterBy` values fall back to the defaults rather than failing.

use crate::modules::search::core::item::Item;
use serde::Serialize;

pub const DEFAULT_PAGE_SIZE: u32 = 4;
pub const ENDING_SOON_HOURS: i64 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderBy {
    #[default]
    EndingSoonest,
    Make,
    Newest,
}

impl OrderBy {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::to_ascii_lowercase).as_deref() {
            Some("make") => Self::Make,
            Some("new") => Self::Newest,
            _ => Self::EndingSoonest,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterBy {
    #[default]
    Live,
    Finished,
    EndingSoon,
}

impl FilterBy {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::to_ascii_lowercase).as_deref() {
            Some("finished") => Self::Finished,
            Some("endingsoon") => Self::EndingSoon,
            _ => Self::Live,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    pub search_term: Option<String>,
    pub seller: Option<String>,
    pub winner: Option<String>,
    pub order_by: OrderBy,
    pub filter_by: FilterBy,
    pub page_number: u32,
    pub page_size: u32,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            search_term: None,
            seller: None,
            winner: None,
            order_by: OrderBy::default(),
            filter_by: FilterBy::default(),
            page_number: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl SearchParams {
    /// Page numbers start at 1; zero sizes and numbers are clamped up.
    pub fn offset(&self) -> usize {
        (self.page_number.max(1) as usize - 1) * self.limit()
    }

    pub fn limit(&self) -> usize {
        self.page_size.max(1) as usize
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    pub results: Vec<Item>,
    pub page_count: u64,
    pub total_count: u64,
}
