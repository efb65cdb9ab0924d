//! The mocked storefront backend.
//!
//! Endpoints resolve after a simulated network delay, as one-shot futures
//! with no cancellation and no retry policy; a failure is a terminal
//! rejection surfaced to the caller once. All data lives in memory.

use crate::ApiError;
use rand::Rng;
use shopfront_auth::{AuthError, Credentials, TokenPair};
use shopfront_commerce::cart::{promo, CartState, PromoCode};
use shopfront_commerce::catalog::{Product, Rating, RatingSummary, Review};
use shopfront_commerce::checkout::ShippingAddress;
use shopfront_commerce::ids::{ProductId, UserId};
use shopfront_commerce::money::{Currency, Money};
use shopfront_commerce::orders::Order;
use shopfront_commerce::search::{Page, ProductQuery};
use shopfront_commerce::CommerceError;
use std::time::Duration;
use tracing::{debug, info};

/// Default simulated network latency.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(500);

/// In-memory backend with simulated latency.
#[derive(Debug)]
pub struct MockBackend {
    products: Vec<Product>,
    reviews: Vec<Review>,
    users: Vec<Credentials>,
    latency: Duration,
    jitter: Duration,
}

impl MockBackend {
    /// Create a backend with the demo catalog and the default latency.
    pub fn new() -> Self {
        Self {
            products: seed_catalog(),
            reviews: Vec::new(),
            users: Vec::new(),
            latency: DEFAULT_LATENCY,
            jitter: Duration::ZERO,
        }
    }

    /// Override the fixed latency (use `Duration::ZERO` in tests).
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Add a randomized component on top of the fixed latency.
    pub fn with_jitter(mut self, jitter: Duration) -> Self {
        self.jitter = jitter;
        self
    }

    /// Replace the catalog.
    pub fn with_products(mut self, products: Vec<Product>) -> Self {
        self.products = products;
        self
    }

    async fn simulate_latency(&self) {
        let mut delay = self.latency;
        if !self.jitter.is_zero() {
            let extra = rand::thread_rng().gen_range(0..=self.jitter.as_millis() as u64);
            delay += Duration::from_millis(extra);
        }
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    // --- auth ---

    /// Register a user account.
    pub async fn register(&mut self, email: &str, password: &str) -> Result<UserId, ApiError> {
        self.simulate_latency().await;
        let user_id = UserId::generate();
        let credentials = Credentials::register(user_id.clone(), email, password)?;
        self.users.push(credentials);
        info!(%user_id, "user registered");
        Ok(user_id)
    }

    /// Issue a token pair for valid credentials.
    ///
    /// Unknown emails and wrong passwords fail identically so the
    /// response does not reveal which accounts exist.
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenPair, ApiError> {
        self.simulate_latency().await;
        let user = self
            .users
            .iter()
            .find(|u| u.matches_email(email))
            .ok_or(AuthError::InvalidCredentials)?;
        user.verify(password)?;
        debug!(user_id = %user.user_id, "login ok");
        Ok(TokenPair::issue(user.user_id.clone()))
    }

    /// Rotate the access token off a valid refresh token.
    pub async fn refresh(&self, tokens: &TokenPair) -> Result<TokenPair, ApiError> {
        self.simulate_latency().await;
        Ok(tokens.refresh()?)
    }

    // --- catalog ---

    /// Paginated product listing.
    pub async fn list_products(&self, query: &ProductQuery) -> Page<Product> {
        self.simulate_latency().await;
        query.apply(&self.products)
    }

    /// Product detail.
    pub async fn product(&self, id: ProductId) -> Result<Product, ApiError> {
        self.simulate_latency().await;
        self.find_product(id).map(Product::clone)
    }

    /// Record a rating; returns the new average.
    pub async fn rate_product(
        &mut self,
        id: ProductId,
        user_id: UserId,
        value: f64,
    ) -> Result<f64, ApiError> {
        self.simulate_latency().await;
        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(CommerceError::ProductNotFound(id))?;
        product.rate(Rating::new(user_id, value.clamp(1.0, 5.0)));
        Ok(product.average_rating())
    }

    /// Reviews for a product, newest first.
    pub async fn reviews(&self, id: ProductId) -> Result<Vec<Review>, ApiError> {
        self.simulate_latency().await;
        self.find_product(id)?;
        let mut reviews: Vec<Review> = self
            .reviews
            .iter()
            .filter(|r| r.product_id == id)
            .cloned()
            .collect();
        reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(reviews)
    }

    /// Aggregated rating figures for a product.
    pub async fn review_summary(&self, id: ProductId) -> Result<RatingSummary, ApiError> {
        self.simulate_latency().await;
        let product = self.find_product(id)?;
        Ok(RatingSummary::from_ratings(id, &product.ratings))
    }

    /// Create a review.
    pub async fn create_review(
        &mut self,
        product_id: ProductId,
        author: &str,
        rating: u8,
        title: &str,
        body: &str,
    ) -> Result<Review, ApiError> {
        self.simulate_latency().await;
        self.find_product(product_id)?;
        let review = Review::new(product_id, author, rating, title, body);
        self.reviews.push(review.clone());
        Ok(review)
    }

    // --- cart & checkout ---

    /// Validate a promo code against the static table.
    pub async fn validate_promo(&self, code: &str) -> Result<PromoCode, ApiError> {
        self.simulate_latency().await;
        Ok(promo::validate(code)?)
    }

    /// Check every cart line against current stock.
    pub async fn validate_cart(&self, cart: &CartState) -> Result<(), ApiError> {
        self.simulate_latency().await;
        self.check_stock(cart)
    }

    /// Place an order from a cart snapshot.
    ///
    /// A stock failure is retryable: the cart and checkout input are left
    /// untouched and the same submission can be attempted again.
    pub async fn place_order(
        &self,
        cart: &CartState,
        shipping_address: ShippingAddress,
    ) -> Result<Order, ApiError> {
        self.simulate_latency().await;
        self.check_stock(cart)?;
        let order = Order::from_cart(cart, Some(shipping_address))?;
        info!(order_number = %order.order_number, total = %order.total, "order created");
        Ok(order)
    }

    fn find_product(&self, id: ProductId) -> Result<&Product, ApiError> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| ApiError::NotFound(format!("product {}", id)))
    }

    fn check_stock(&self, cart: &CartState) -> Result<(), ApiError> {
        for line in &cart.lines {
            let product = self
                .products
                .iter()
                .find(|p| p.id == line.product.id)
                .ok_or(CommerceError::ProductNotFound(line.product.id))?;
            if !product.can_fulfill(line.quantity) {
                return Err(CommerceError::InsufficientStock {
                    product_id: product.id,
                    requested: line.quantity,
                    available: product.stock,
                }
                .into());
            }
        }
        Ok(())
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// The demo catalog the backend starts with.
fn seed_catalog() -> Vec<Product> {
    let mut ceramic_mug = Product::new(1, "Ceramic Mug", Money::new(250, Currency::USD))
        .with_category("kitchen")
        .with_stock(40);
    ceramic_mug.rate(Rating::new(UserId::new("seed-1"), 4.0));
    ceramic_mug.rate(Rating::new(UserId::new("seed-2"), 5.0));

    let film_poster = Product::new(2, "Film Poster", Money::new(390, Currency::USD))
        .with_category("decor")
        .with_stock(15);

    let mut desk_lamp = Product::new(3, "Desk Lamp", Money::new(2500, Currency::USD))
        .with_category("lighting")
        .with_stock(8);
    desk_lamp.rate(Rating::new(UserId::new("seed-1"), 3.0));

    let mut office_chair = Product::new(4, "Office Chair", Money::new(9900, Currency::USD))
        .with_category("furniture")
        .with_stock(3);
    office_chair.low_stock_threshold = 5;

    let notebook = Product::new(5, "Dotted Notebook", Money::new(850, Currency::USD))
        .with_category("stationery")
        .with_stock(120);

    vec![ceramic_mug, film_poster, desk_lamp, office_chair, notebook]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend() -> MockBackend {
        MockBackend::new().with_latency(Duration::ZERO)
    }

    #[tokio::test]
    async fn test_product_detail_and_missing() {
        let backend = backend();
        let product = backend.product(ProductId::new(1)).await.unwrap();
        assert_eq!(product.name, "Ceramic Mug");

        assert!(matches!(
            backend.product(ProductId::new(999)).await,
            Err(ApiError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_validate_promo_delegates_to_table() {
        let backend = backend();
        let promo = backend.validate_promo("summer2025").await.unwrap();
        assert_eq!(promo.code, "SUMMER2025");
        assert_eq!(promo.amount_cents, 2000);

        let err = backend.validate_promo("bogus").await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::Commerce(CommerceError::InvalidPromoCode(_))
        ));
        assert!(!err.is_retryable());
    }

    #[tokio::test]
    async fn test_with_products_replaces_catalog() {
        let solo = Product::new(42, "Lone Item", Money::new(100, Currency::USD)).with_stock(1);
        let backend = backend().with_products(vec![solo]);

        let page = backend.list_products(&ProductQuery::new()).await;
        assert_eq!(page.pagination.total, 1);
        assert_eq!(page.items[0].name, "Lone Item");
    }

    #[tokio::test]
    async fn test_rate_product_updates_average() {
        let mut backend = backend();
        // Seeded ratings: 4.0 and 5.0.
        let average = backend
            .rate_product(ProductId::new(1), UserId::new("u9"), 3.0)
            .await
            .unwrap();
        assert!((average - 4.0).abs() < 1e-9);
    }
}
