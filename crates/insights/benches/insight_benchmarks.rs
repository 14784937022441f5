use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chrono::Utc;
use storelens_core::{EntityKind, Envelope, ProductData, Rating, TransactionData, UserData};
use storelens_insights::{most_popular_categories, product_insights, user_insights};

const CATEGORIES: [&str; 5] = [
    "electronics",
    "jewelery",
    "men's clothing",
    "women's clothing",
    "outdoors",
];

fn synthetic_products(count: usize) -> Vec<Envelope<ProductData>> {
    (0..count)
        .map(|i| {
            Envelope::new(
                EntityKind::Product,
                "fakestoreapi",
                ProductData {
                    id: i.to_string(),
                    title: format!("Product {}", i),
                    category: CATEGORIES[i % CATEGORIES.len()].to_string(),
                    price: (i % 400) as f64 + 0.99,
                    rating: Rating {
                        rate: ((i % 50) as f64) / 10.0,
                        count: (i * 7 % 1000) as u64,
                    },
                },
            )
        })
        .collect()
}

fn synthetic_users(count: usize) -> Vec<Envelope<UserData>> {
    (0..count)
        .map(|i| {
            Envelope::new(
                EntityKind::User,
                "randomuserapi",
                UserData {
                    id: format!("uuid-{}", i),
                    name: format!("User {}", i),
                    gender: if i % 2 == 0 { "female" } else { "male" }.to_string(),
                    email: format!("user{}@example.com", i),
                    location: "Kerry , Ireland".to_string(),
                    user_name: format!("user{}", i),
                    dob: format!("{}-03-11T00:00:00.000Z", 1950 + (i % 60)),
                    phone: "555-0100".to_string(),
                },
            )
        })
        .collect()
}

fn synthetic_transactions(count: usize, users: usize) -> Vec<Envelope<TransactionData>> {
    (0..count)
        .map(|i| {
            Envelope::new(
                EntityKind::Transaction,
                "mockaroo",
                TransactionData {
                    transaction_id: i.to_string(),
                    parcel_id: (i % 997).to_string(),
                    status: "shipped".to_string(),
                    sender: "Depot".to_string(),
                    user_phone: "555-0100".to_string(),
                    user_name: format!("User {}", i % users.max(1)),
                    user_ref: None,
                    product_ref: None,
                },
            )
        })
        .collect()
}

fn bench_product_insights(c: &mut Criterion) {
    let mut group = c.benchmark_group("product_insights");

    for product_count in [20, 200, 2000].iter() {
        group.throughput(Throughput::Elements(*product_count as u64));
        group.bench_with_input(
            BenchmarkId::new("full_bundle", product_count),
            product_count,
            |b, &count| {
                let products = synthetic_products(count);
                b.iter(|| black_box(product_insights(black_box(&products))));
            },
        );
    }

    group.finish();
}

fn bench_category_ranking(c: &mut Criterion) {
    let mut group = c.benchmark_group("category_ranking");
    group.sample_size(200);

    for product_count in [200, 2000, 20000].iter() {
        group.throughput(Throughput::Elements(*product_count as u64));
        group.bench_with_input(
            BenchmarkId::new("most_popular_categories", product_count),
            product_count,
            |b, &count| {
                let products = synthetic_products(count);
                b.iter(|| black_box(most_popular_categories(black_box(&products))));
            },
        );
    }

    group.finish();
}

fn bench_user_insights(c: &mut Criterion) {
    let mut group = c.benchmark_group("user_insights");

    for transaction_count in [100, 1000, 10000].iter() {
        group.throughput(Throughput::Elements(*transaction_count as u64));
        group.bench_with_input(
            BenchmarkId::new("full_bundle", transaction_count),
            transaction_count,
            |b, &count| {
                let users = synthetic_users(50);
                let transactions = synthetic_transactions(count, 50);
                let as_of = Utc::now();
                b.iter(|| {
                    black_box(user_insights(
                        black_box(&users),
                        black_box(&transactions),
                        as_of,
                    ))
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_product_insights,
    bench_category_ranking,
    bench_user_insights
);
criterion_main!(benches);
