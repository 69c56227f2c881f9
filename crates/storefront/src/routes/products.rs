//! Product listing route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use tracing::instrument;

use crate::filters;
use crate::state::AppState;
use crate::views::listing::{self, ListingSelection, PriceBucket, SortKey};
use crate::views::{NoticeView, ProductCardView};

/// Listing query parameters.
///
/// The category checkboxes repeat the `cats` key, so the query string is
/// read as raw pairs instead of a flat struct.
#[derive(Debug, Default)]
pub struct ListingQuery {
    pub category: Option<String>,
    pub search: Option<String>,
    pub cats: Vec<String>,
    pub price: Option<String>,
    pub sort: Option<String>,
}

impl ListingQuery {
    fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "category" => query.category = Some(value),
                "search" => query.search = Some(value),
                "cats" => query.cats.push(value),
                "price" => query.price = Some(value),
                "sort" => query.sort = Some(value),
                _ => {}
            }
        }
        query
    }

    /// Collapse the raw parameters into a listing selection. Blank values
    /// behave as absent ones.
    fn selection(self) -> ListingSelection {
        ListingSelection {
            category: self.category.filter(|c| !c.is_empty()),
            search: self
                .search
                .as_deref()
                .map(str::trim)
                .filter(|q| !q.is_empty())
                .map(str::to_owned),
            checked: self.cats.into_iter().filter(|c| !c.is_empty()).collect(),
            bucket: self.price.as_deref().and_then(PriceBucket::parse),
            sort: self.sort.as_deref().and_then(SortKey::parse),
        }
    }
}

/// A sidebar category checkbox.
#[derive(Debug, Clone)]
pub struct CategoryOption {
    pub name: String,
    pub checked: bool,
}

/// Product listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub title: String,
    pub products: Vec<ProductCardView>,
    pub category_options: Vec<CategoryOption>,
    /// Selected price radio value, empty when none.
    pub price_value: String,
    /// Selected sort value, empty for seed order.
    pub sort_value: String,
    /// Active category context, carried through the filter form.
    pub category: String,
    /// Active search term, carried through the filter form.
    pub search: String,
    pub cart_count: u32,
    pub notices: Vec<NoticeView>,
}

/// Display the product listing with filters and sorting applied.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> impl IntoResponse {
    let selection = ListingQuery::from_pairs(pairs).selection();
    let products = listing::select(state.catalog(), &selection);

    let category_options = state
        .catalog()
        .categories()
        .into_iter()
        .map(|name| CategoryOption {
            checked: selection.checked.contains(&name),
            name,
        })
        .collect();

    ProductsIndexTemplate {
        title: listing::page_title(&selection),
        products: products.iter().map(ProductCardView::from).collect(),
        category_options,
        price_value: selection
            .bucket
            .map(PriceBucket::as_str)
            .unwrap_or_default()
            .to_owned(),
        sort_value: selection
            .sort
            .map(SortKey::as_str)
            .unwrap_or_default()
            .to_owned(),
        category: selection.category.unwrap_or_default(),
        search: selection.search.unwrap_or_default(),
        cart_count: state.cart_count(),
        notices: state.notice_views(),
    }
}
