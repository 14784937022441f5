//! Product-side insight aggregations.

use std::collections::BTreeMap;

use serde::Serialize;

use storelens_core::{Envelope, ProductData};

use crate::rank::accumulate_in_order;

/// Default truncation for the ranked lists.
pub const DEFAULT_TOP_N: usize = 5;

const MOST_RATED_LIMIT: usize = 5;

/// Cheapest and most expensive product payloads, by list price.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PriceExtremes {
    pub cheapest_product: Option<ProductData>,
    pub most_expensive_product: Option<ProductData>,
}

/// Bundle served by the product-insight surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductInsights {
    pub popular_categories: Vec<(String, u64)>,
    pub avg_price_by_category: BTreeMap<String, f64>,
    pub top_selling: Vec<(String, u64)>,
    pub cheapest_and_most_expensive: PriceExtremes,
    pub revenue_by_category: BTreeMap<String, f64>,
    pub most_rated: Vec<Envelope<ProductData>>,
    pub top_revenue_categories: Vec<(String, f64)>,
}

/// Category ranked by summed `rating.count`, descending, ties by encounter
/// order.
pub fn most_popular_categories(products: &[Envelope<ProductData>]) -> Vec<(String, u64)> {
    let mut totals = accumulate_in_order(
        products
            .iter()
            .map(|product| (product.data().category.clone(), product.data().rating.count))
            .filter(|(category, _)| !category.is_empty()),
    );
    totals.sort_by(|a, b| b.1.cmp(&a.1));
    totals
}

/// Mean list price per category.
pub fn average_price_by_category(products: &[Envelope<ProductData>]) -> BTreeMap<String, f64> {
    let mut sums: BTreeMap<String, (f64, u64)> = BTreeMap::new();
    for product in products {
        let data = product.data();
        if data.category.is_empty() {
            continue;
        }
        let entry = sums.entry(data.category.clone()).or_insert((0.0, 0));
        entry.0 += data.price;
        entry.1 += 1;
    }

    sums.into_iter()
        .map(|(category, (total, count))| (category, total / count as f64))
        .collect()
}

/// Titles ranked by summed `rating.count`, descending, truncated to `top_n`.
///
/// Duplicate titles aggregate into one entry rather than overwriting each
/// other.
pub fn top_selling_products(
    products: &[Envelope<ProductData>],
    top_n: usize,
) -> Vec<(String, u64)> {
    let mut totals = accumulate_in_order(
        products
            .iter()
            .map(|product| (product.data().title.clone(), product.data().rating.count))
            .filter(|(title, _)| !title.is_empty()),
    );
    totals.sort_by(|a, b| b.1.cmp(&a.1));
    totals.truncate(top_n);
    totals
}

/// Single min/max by price over the whole collection.
///
/// Uses a stable sort, so price ties resolve to the earliest product for the
/// cheapest side and the latest for the most expensive side.
pub fn cheapest_and_most_expensive(products: &[Envelope<ProductData>]) -> PriceExtremes {
    let mut by_price: Vec<&ProductData> = products.iter().map(Envelope::data).collect();
    by_price.sort_by(|a, b| a.price.total_cmp(&b.price));

    PriceExtremes {
        cheapest_product: by_price.first().map(|data| (*data).clone()),
        most_expensive_product: by_price.last().map(|data| (*data).clone()),
    }
}

/// Sum of list prices per category (literally prices, not price × quantity).
pub fn revenue_by_category(products: &[Envelope<ProductData>]) -> BTreeMap<String, f64> {
    let mut revenue: BTreeMap<String, f64> = BTreeMap::new();
    for product in products {
        let data = product.data();
        if data.category.is_empty() {
            continue;
        }
        *revenue.entry(data.category.clone()).or_insert(0.0) += data.price;
    }
    revenue
}

/// Categories ranked by summed revenue, descending, truncated to `top_n`.
pub fn top_revenue_categories(
    products: &[Envelope<ProductData>],
    top_n: usize,
) -> Vec<(String, f64)> {
    let mut totals = accumulate_in_order(
        products
            .iter()
            .map(|product| (product.data().category.clone(), product.data().price))
            .filter(|(category, _)| !category.is_empty()),
    );
    totals.sort_by(|a, b| b.1.total_cmp(&a.1));
    totals.truncate(top_n);
    totals
}

/// Whole product envelopes ranked by `rating.count`, descending, top 5.
pub fn most_rated_products(products: &[Envelope<ProductData>]) -> Vec<Envelope<ProductData>> {
    let mut ranked = products.to_vec();
    ranked.sort_by(|a, b| b.data().rating.count.cmp(&a.data().rating.count));
    ranked.truncate(MOST_RATED_LIMIT);
    ranked
}

/// Compute the full product-insight bundle.
pub fn product_insights(products: &[Envelope<ProductData>]) -> ProductInsights {
    ProductInsights {
        popular_categories: most_popular_categories(products),
        avg_price_by_category: average_price_by_category(products),
        top_selling: top_selling_products(products, DEFAULT_TOP_N),
        cheapest_and_most_expensive: cheapest_and_most_expensive(products),
        revenue_by_category: revenue_by_category(products),
        most_rated: most_rated_products(products),
        top_revenue_categories: top_revenue_categories(products, DEFAULT_TOP_N),
    }
}
