use async_graphql::{Context, Object, Result as GqlResult};
use chrono::Utc;

use crate::modules::search::core::item::Item;
use crate::modules::search::use_cases::search_items::params::{
    DEFAULT_PAGE_SIZE, FilterBy, OrderBy, SearchPage, SearchParams,
};
use crate::shared::core::primitives::Timestamp;
use crate::shell::state::SearchAppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlItem {
    pub id: String,
    pub reserve_price: i32,
    pub seller: String,
    pub winner: Option<String>,
    pub sold_amount: Option<i32>,
    pub current_high_bid: Option<i32>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub auction_end: Timestamp,
    pub status: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub mileage: i32,
    pub image_url: String,
}

impl From<Item> for GqlItem {
    fn from(v: Item) -> Self {
        Self {
            id: v.id,
            reserve_price: v.reserve_price,
            seller: v.seller,
            winner: v.winner,
            sold_amount: v.sold_amount,
            current_high_bid: v.current_high_bid,
            created_at: v.created_at,
            updated_at: v.updated_at,
            auction_end: v.auction_end,
            status: v.status,
            make: v.make,
            model: v.model,
            year: v.year,
            color: v.color,
            mileage: v.mileage,
            image_url: v.image_url,
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlSearchPage {
    pub results: Vec<GqlItem>,
    pub page_count: u64,
    pub total_count: u64,
}

impl From<SearchPage> for GqlSearchPage {
    fn from(page: SearchPage) -> Self {
        Self {
            results: page.results.into_iter().map(Into::into).collect(),
            page_count: page.page_count,
            total_count: page.total_count,
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    #[allow(clippy::too_many_arguments)]
    async fn search_items(
        &self,
        context: &Context<'_>,
        search_term: Option<String>,
        seller: Option<String>,
        winner: Option<String>,
        order_by: Option<String>,
        filter_by: Option<String>,
        page_number: Option<i32>,
        page_size: Option<i32>,
    ) -> GqlResult<GqlSearchPage> {
        let state = context.data_unchecked::<SearchAppState>();
        let params = SearchParams {
            search_term: search_term.filter(|term| !term.trim().is_empty()),
            seller: seller.filter(|seller| !seller.is_empty()),
            winner: winner.filter(|winner| !winner.is_empty()),
            order_by: OrderBy::parse(order_by.as_deref()),
            filter_by: FilterBy::parse(filter_by.as_deref()),
            page_number: page_number.unwrap_or(1).max(1) as u32,
            page_size: page_size.unwrap_or(DEFAULT_PAGE_SIZE as i32).max(1) as u32,
        };
        let page = state.queries.search(&params, Utc::now()).await?;
        Ok(page.into())
    }
}
