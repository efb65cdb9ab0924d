//! Product listing queries.

use crate::catalog::Product;
use crate::money::Money;
use crate::search::results::{Page, Pagination};
use serde::{Deserialize, Serialize};

/// Sort options for product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortOption {
    /// Newest first.
    #[default]
    Newest,
    /// Price, low to high.
    PriceAsc,
    /// Price, high to low.
    PriceDesc,
    /// Name A-Z.
    NameAsc,
    /// Name Z-A.
    NameDesc,
    /// Highest rated first.
    Rating,
}

impl SortOption {
    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Newest => "Newest",
            SortOption::PriceAsc => "Price: Low to High",
            SortOption::PriceDesc => "Price: High to Low",
            SortOption::NameAsc => "Name: A-Z",
            SortOption::NameDesc => "Name: Z-A",
            SortOption::Rating => "Highest Rated",
        }
    }

    fn sort(&self, items: &mut [&Product]) {
        match self {
            SortOption::Newest => items.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            SortOption::PriceAsc => {
                items.sort_by(|a, b| a.price.amount_cents.cmp(&b.price.amount_cents))
            }
            SortOption::PriceDesc => {
                items.sort_by(|a, b| b.price.amount_cents.cmp(&a.price.amount_cents))
            }
            SortOption::NameAsc => items.sort_by(|a, b| a.name.cmp(&b.name)),
            SortOption::NameDesc => items.sort_by(|a, b| b.name.cmp(&a.name)),
            SortOption::Rating => {
                items.sort_by(|a, b| b.average_rating().total_cmp(&a.average_rating()))
            }
        }
    }
}

/// A product listing query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductQuery {
    /// Case-insensitive substring match on the product name.
    pub search: Option<String>,
    /// Exact category match.
    pub category: Option<String>,
    /// Minimum price, inclusive.
    pub min_price: Option<Money>,
    /// Maximum price, inclusive.
    pub max_price: Option<Money>,
    /// Minimum average rating.
    pub min_rating: Option<f64>,
    /// Sort option.
    pub sort: SortOption,
    /// Current page (1-indexed).
    pub page: i64,
    /// Items per page.
    pub per_page: i64,
}

impl ProductQuery {
    /// Create a query with default pagination.
    pub fn new() -> Self {
        Self {
            search: None,
            category: None,
            min_price: None,
            max_price: None,
            min_rating: None,
            sort: SortOption::Newest,
            page: 1,
            per_page: 12,
        }
    }

    /// Set the search text.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        let search = search.into();
        if !search.is_empty() {
            self.search = Some(search);
        }
        self
    }

    /// Set the category filter.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the price range filter.
    pub fn with_price_range(mut self, min: Option<Money>, max: Option<Money>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    /// Set the minimum-rating filter.
    pub fn with_min_rating(mut self, min: f64) -> Self {
        self.min_rating = Some(min);
        self
    }

    /// Set the sort option.
    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    /// Set pagination.
    pub fn with_pagination(mut self, page: i64, per_page: i64) -> Self {
        self.page = page.max(1);
        self.per_page = per_page.clamp(1, 100);
        self
    }

    /// Check whether a product matches every filter.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(search) = &self.search {
            if !product
                .name
                .to_lowercase()
                .contains(&search.to_lowercase())
            {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if !product.category.eq_ignore_ascii_case(category) {
                return false;
            }
        }
        if let Some(min) = &self.min_price {
            if product.price.amount_cents < min.amount_cents {
                return false;
            }
        }
        if let Some(max) = &self.max_price {
            if product.price.amount_cents > max.amount_cents {
                return false;
            }
        }
        if let Some(min_rating) = self.min_rating {
            if product.average_rating() < min_rating {
                return false;
            }
        }
        true
    }

    /// Run the query over a catalog slice.
    ///
    /// Matching, sorting, and pagination happen in that order; a page
    /// past the end of the results is empty, not an error.
    pub fn apply(&self, products: &[Product]) -> Page<Product> {
        let mut matched: Vec<&Product> = products.iter().filter(|p| self.matches(p)).collect();
        self.sort.sort(&mut matched);

        let pagination = Pagination::new(self.page, self.per_page, matched.len() as i64);
        let start = (pagination.offset() as usize).min(matched.len());
        let end = (start + self.per_page as usize).min(matched.len());
        let items = matched[start..end].iter().map(|p| (*p).clone()).collect();

        Page { items, pagination }
    }
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self::new()
    }
}
