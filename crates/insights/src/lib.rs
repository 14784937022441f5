//! `storelens-insights` — aggregations over normalized collections.
//!
//! Pure functions, no shared mutable state. Every aggregation tolerates an
//! empty input by returning the empty/zero form of its result type. Ranked
//! lists sort descending with a stable sort over first-seen key order, so
//! ties resolve by encounter order.

mod rank;

pub mod products;
pub mod users;

pub use products::{
    average_price_by_category, cheapest_and_most_expensive, most_popular_categories,
    most_rated_products, product_insights, revenue_by_category, top_revenue_categories,
    top_selling_products, PriceExtremes, ProductInsights, DEFAULT_TOP_N,
};
pub use users::{
    inactive_users, most_active_user, transactions_per_user, user_insights, user_statistics,
    AgeDistribution, UserInsights, UserStatistics,
};
