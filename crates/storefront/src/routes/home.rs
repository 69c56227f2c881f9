//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::filters;
use crate::state::AppState;
use crate::views::listing::capitalize;
use crate::views::{NoticeView, ProductCardView, SortKey};

/// Number of top-rated products featured on the home page.
const FEATURED_COUNT: usize = 4;

/// A category tile linking into the listing.
#[derive(Debug, Clone)]
pub struct CategoryTile {
    /// Raw category value, used in the link.
    pub name: String,
    /// Capitalized label shown on the tile.
    pub title: String,
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    /// Category tiles in catalog order.
    pub categories: Vec<CategoryTile>,
    /// The highest-rated products.
    pub featured: Vec<ProductCardView>,
    pub cart_count: u32,
    pub notices: Vec<NoticeView>,
}

/// Display the home page.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    let categories = state
        .catalog()
        .categories()
        .into_iter()
        .map(|name| CategoryTile {
            title: capitalize(&name),
            name,
        })
        .collect();

    let featured = {
        let mut products = state.catalog().all().to_vec();
        SortKey::Rating.apply(&mut products);
        products
            .iter()
            .take(FEATURED_COUNT)
            .map(ProductCardView::from)
            .collect()
    };

    HomeTemplate {
        categories,
        featured,
        cart_count: state.cart_count(),
        notices: state.notice_views(),
    }
}
