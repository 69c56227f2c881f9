//! Filter and sort composition for the product listing.

use minimart_core::Price;

use crate::catalog::{Product, ProductCatalog};

/// The fixed price-range buckets offered by the filter sidebar.
///
/// The inequalities are kept exactly as the controls label them: $100
/// falls only in `100-250`, while $250 satisfies both `100-250` and
/// `250-500`, and the same one-dollar overlap repeats at $500. At most one
/// bucket is ever active, so the overlap only shows at the boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceBucket {
    Under100,
    From100To250,
    From250To500,
    From500To1000,
    Over1000,
}

impl PriceBucket {
    /// Parse a radio-control value. Unknown values select no bucket.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "0-100" => Some(Self::Under100),
            "100-250" => Some(Self::From100To250),
            "250-500" => Some(Self::From250To500),
            "500-1000" => Some(Self::From500To1000),
            "1000+" => Some(Self::Over1000),
            _ => None,
        }
    }

    /// The radio-control value for this bucket.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Under100 => "0-100",
            Self::From100To250 => "100-250",
            Self::From250To500 => "250-500",
            Self::From500To1000 => "500-1000",
            Self::Over1000 => "1000+",
        }
    }

    /// Whether `price` falls inside this bucket.
    #[must_use]
    pub fn matches(self, price: Price) -> bool {
        match self {
            Self::Under100 => price < Price::from_dollars(100),
            Self::From100To250 => {
                price >= Price::from_dollars(100) && price <= Price::from_dollars(250)
            }
            Self::From250To500 => {
                price >= Price::from_dollars(250) && price <= Price::from_dollars(500)
            }
            Self::From500To1000 => {
                price >= Price::from_dollars(500) && price <= Price::from_dollars(1000)
            }
            Self::Over1000 => price > Price::from_dollars(1000),
        }
    }
}

/// Sort order for the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    PriceLow,
    PriceHigh,
    Rating,
    Newest,
}

impl SortKey {
    /// Parse a select-control value. Unknown values keep seed order.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "price-low" => Some(Self::PriceLow),
            "price-high" => Some(Self::PriceHigh),
            "rating" => Some(Self::Rating),
            "newest" => Some(Self::Newest),
            _ => None,
        }
    }

    /// The select-control value for this sort.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Rating => "rating",
            Self::Newest => "newest",
        }
    }

    /// Reorder `products` in place. All sorts are stable, so equal keys
    /// keep their current relative order.
    pub fn apply(self, products: &mut [Product]) {
        match self {
            Self::PriceLow => products.sort_by(|a, b| a.price.cmp(&b.price)),
            Self::PriceHigh => products.sort_by(|a, b| b.price.cmp(&a.price)),
            Self::Rating => products.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
            // Products carry no timestamps; "newest" is seed order reversed.
            Self::Newest => products.reverse(),
        }
    }
}

/// The request-scoped listing controls.
#[derive(Debug, Clone, Default)]
pub struct ListingSelection {
    /// Category context carried in from a category link.
    pub category: Option<String>,
    /// Search term. Takes the place of the category context when present.
    pub search: Option<String>,
    /// Checked category boxes. Empty means no restriction.
    pub checked: Vec<String>,
    /// At most one active price bucket.
    pub bucket: Option<PriceBucket>,
    pub sort: Option<SortKey>,
}

/// Project the catalog through `selection`.
///
/// A search term searches the whole catalog and displaces the category
/// context. The checkbox set then intersects, followed by the price
/// bucket, then the sort.
#[must_use]
pub fn select(catalog: &ProductCatalog, selection: &ListingSelection) -> Vec<Product> {
    let mut products = if let Some(query) = selection.search.as_deref() {
        catalog.search(query)
    } else if let Some(category) = selection.category.as_deref() {
        catalog.by_category(category)
    } else {
        catalog.all().to_vec()
    };

    if !selection.checked.is_empty() {
        products.retain(|p| selection.checked.iter().any(|c| *c == p.category));
    }

    if let Some(bucket) = selection.bucket {
        products.retain(|p| bucket.matches(p.price));
    }

    if let Some(sort) = selection.sort {
        sort.apply(&mut products);
    }

    products
}

/// The listing heading for `selection`. The category context names the
/// page even when a search term displaced it from the product list.
#[must_use]
pub fn page_title(selection: &ListingSelection) -> String {
    if let Some(category) = selection.category.as_deref() {
        format!("{} Products", capitalize(category))
    } else if let Some(query) = selection.search.as_deref() {
        format!("Search Results for \"{query}\"")
    } else {
        "All Products".to_owned()
    }
}

/// Uppercase the first character, leaving the rest untouched.
pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use minimart_core::ProductId;

    use super::*;

    fn product(id: i32, category: &str, dollars: i64, rating: f32) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            category: category.to_owned(),
            price: Price::from_dollars(dollars),
            image: String::new(),
            rating,
            reviews: 0,
        }
    }

    fn ids(products: &[Product]) -> Vec<i32> {
        products.iter().map(|p| p.id.as_i32()).collect()
    }

    // ------------------------------------------------------------------
    // Price buckets
    // ------------------------------------------------------------------

    #[test]
    fn test_bucket_parse_roundtrip() {
        for value in ["0-100", "100-250", "250-500", "500-1000", "1000+"] {
            assert_eq!(PriceBucket::parse(value).unwrap().as_str(), value);
        }
        assert!(PriceBucket::parse("50-75").is_none());
        assert!(PriceBucket::parse("").is_none());
    }

    #[test]
    fn test_bucket_hundred_dollar_boundary() {
        let hundred = Price::from_dollars(100);
        assert!(!PriceBucket::Under100.matches(hundred));
        assert!(PriceBucket::From100To250.matches(hundred));
    }

    #[test]
    fn test_bucket_boundaries_overlap_at_250() {
        let price = Price::from_dollars(250);
        assert!(PriceBucket::From100To250.matches(price));
        assert!(PriceBucket::From250To500.matches(price));
    }

    #[test]
    fn test_bucket_boundaries_overlap_at_500() {
        let price = Price::from_dollars(500);
        assert!(PriceBucket::From250To500.matches(price));
        assert!(PriceBucket::From500To1000.matches(price));
    }

    #[test]
    fn test_bucket_thousand_dollar_boundary() {
        assert!(PriceBucket::From500To1000.matches(Price::from_dollars(1000)));
        assert!(!PriceBucket::Over1000.matches(Price::from_dollars(1000)));
        assert!(PriceBucket::Over1000.matches(Price::from_cents(100_001)));
    }

    // ------------------------------------------------------------------
    // Sorting
    // ------------------------------------------------------------------

    #[test]
    fn test_sort_parse_roundtrip() {
        for value in ["price-low", "price-high", "rating", "newest"] {
            assert_eq!(SortKey::parse(value).unwrap().as_str(), value);
        }
        assert!(SortKey::parse("alphabetical").is_none());
    }

    #[test]
    fn test_sort_price_ascending() {
        let mut products = vec![
            product(1, "a", 300, 4.0),
            product(2, "a", 100, 4.0),
            product(3, "a", 200, 4.0),
        ];
        SortKey::PriceLow.apply(&mut products);
        assert_eq!(ids(&products), vec![2, 3, 1]);
    }

    #[test]
    fn test_sort_price_descending() {
        let mut products = vec![
            product(1, "a", 300, 4.0),
            product(2, "a", 100, 4.0),
            product(3, "a", 200, 4.0),
        ];
        SortKey::PriceHigh.apply(&mut products);
        assert_eq!(ids(&products), vec![1, 3, 2]);
    }

    #[test]
    fn test_sort_rating_descending() {
        let mut products = vec![
            product(1, "a", 100, 4.1),
            product(2, "a", 100, 4.9),
            product(3, "a", 100, 4.5),
        ];
        SortKey::Rating.apply(&mut products);
        assert_eq!(ids(&products), vec![2, 3, 1]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let mut products = vec![
            product(1, "a", 100, 4.8),
            product(2, "a", 100, 4.8),
            product(3, "a", 100, 4.8),
        ];
        SortKey::Rating.apply(&mut products);
        assert_eq!(ids(&products), vec![1, 2, 3]);
    }

    #[test]
    fn test_sort_newest_reverses_seed_order() {
        let mut products = vec![
            product(1, "a", 100, 4.0),
            product(2, "a", 100, 4.0),
            product(3, "a", 100, 4.0),
        ];
        SortKey::Newest.apply(&mut products);
        assert_eq!(ids(&products), vec![3, 2, 1]);
    }

    // ------------------------------------------------------------------
    // Selection composition
    // ------------------------------------------------------------------

    fn small_catalog() -> ProductCatalog {
        ProductCatalog::new(vec![
            product(1, "laptops", 1999, 4.8),
            product(2, "audio", 349, 4.7),
            product(3, "audio", 79, 4.3),
            product(4, "gaming", 499, 4.8),
        ])
    }

    #[test]
    fn test_select_with_no_controls_returns_everything() {
        let catalog = small_catalog();
        let selected = select(&catalog, &ListingSelection::default());
        assert_eq!(ids(&selected), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_select_category_context() {
        let catalog = small_catalog();
        let selection = ListingSelection {
            category: Some("audio".to_owned()),
            ..ListingSelection::default()
        };
        assert_eq!(ids(&select(&catalog, &selection)), vec![2, 3]);
    }

    #[test]
    fn test_select_search_displaces_category_context() {
        let catalog = small_catalog();
        let selection = ListingSelection {
            category: Some("audio".to_owned()),
            search: Some("laptops".to_owned()),
            ..ListingSelection::default()
        };
        // The search runs over the whole catalog, not within "audio".
        assert_eq!(ids(&select(&catalog, &selection)), vec![1]);
    }

    #[test]
    fn test_select_checked_categories_intersect() {
        let catalog = small_catalog();
        let selection = ListingSelection {
            checked: vec!["audio".to_owned(), "gaming".to_owned()],
            ..ListingSelection::default()
        };
        assert_eq!(ids(&select(&catalog, &selection)), vec![2, 3, 4]);
    }

    #[test]
    fn test_select_unchecked_boxes_do_not_restrict() {
        let catalog = small_catalog();
        let selection = ListingSelection {
            checked: Vec::new(),
            bucket: Some(PriceBucket::Under100),
            ..ListingSelection::default()
        };
        assert_eq!(ids(&select(&catalog, &selection)), vec![3]);
    }

    #[test]
    fn test_select_composes_all_controls() {
        let catalog = small_catalog();
        let selection = ListingSelection {
            checked: vec!["audio".to_owned(), "gaming".to_owned()],
            bucket: Some(PriceBucket::From250To500),
            sort: Some(SortKey::PriceHigh),
            ..ListingSelection::default()
        };
        assert_eq!(ids(&select(&catalog, &selection)), vec![4, 2]);
    }

    #[test]
    fn test_select_can_produce_empty_result() {
        let catalog = small_catalog();
        let selection = ListingSelection {
            checked: vec!["laptops".to_owned()],
            bucket: Some(PriceBucket::Under100),
            ..ListingSelection::default()
        };
        assert!(select(&catalog, &selection).is_empty());
    }

    // ------------------------------------------------------------------
    // Page title
    // ------------------------------------------------------------------

    #[test]
    fn test_page_title_default() {
        assert_eq!(page_title(&ListingSelection::default()), "All Products");
    }

    #[test]
    fn test_page_title_capitalizes_category() {
        let selection = ListingSelection {
            category: Some("laptops".to_owned()),
            ..ListingSelection::default()
        };
        assert_eq!(page_title(&selection), "Laptops Products");
    }

    #[test]
    fn test_page_title_quotes_search_term() {
        let selection = ListingSelection {
            search: Some("macbook".to_owned()),
            ..ListingSelection::default()
        };
        assert_eq!(page_title(&selection), "Search Results for \"macbook\"");
    }

    #[test]
    fn test_page_title_prefers_category_over_search() {
        let selection = ListingSelection {
            category: Some("audio".to_owned()),
            search: Some("sony".to_owned()),
            ..ListingSelection::default()
        };
        assert_eq!(page_title(&selection), "Audio Products");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("laptops"), "Laptops");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("a"), "A");
    }
}
