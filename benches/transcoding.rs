use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::{Deserialize, Serialize};
use serde_mjon::{decode, encode, from_str, to_string};

#[derive(Serialize, Deserialize, Clone)]
struct User {
    id: u32,
    name: String,
    email: String,
    active: bool,
}

#[derive(Serialize, Deserialize, Clone)]
struct Product {
    sku: String,
    name: String,
    price: f64,
    quantity: u32,
}

#[derive(Serialize, Deserialize, Clone)]
struct NestedData {
    id: u32,
    metadata: Metadata,
    tags: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone)]
struct Metadata {
    created: String,
    updated: String,
    version: u32,
}

#[derive(Serialize, Deserialize, Clone)]
struct Catalog {
    products: Vec<Product>,
}

fn products(size: usize) -> Catalog {
    Catalog {
        products: (0..size)
            .map(|i| Product {
                sku: format!("SKU-{:05}", i),
                name: format!("Product {}", i),
                price: 9.99 + i as f64,
                quantity: (i % 100) as u32,
            })
            .collect(),
    }
}

fn benchmark_serialize_simple(c: &mut Criterion) {
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        active: true,
    };

    c.bench_function("serialize_simple_struct", |b| {
        b.iter(|| to_string(black_box(&user)))
    });
}

fn benchmark_deserialize_simple(c: &mut Criterion) {
    let mjon = "@id: 123\n@name: Alice\n@email: alice@example.com\n@active: true";

    c.bench_function("deserialize_simple_struct", |b| {
        b.iter(|| from_str::<User>(black_box(mjon)))
    });
}

fn benchmark_nested(c: &mut Criterion) {
    let data = NestedData {
        id: 1,
        metadata: Metadata {
            created: "2024-01-15".to_string(),
            updated: "2024-02-01".to_string(),
            version: 3,
        },
        tags: vec!["alpha".to_string(), "beta".to_string(), "gamma".to_string()],
    };
    let mjon = to_string(&data).unwrap_or_default();

    c.bench_function("serialize_nested", |b| b.iter(|| to_string(black_box(&data))));
    c.bench_function("deserialize_nested", |b| {
        b.iter(|| from_str::<NestedData>(black_box(&mjon)))
    });
}

fn benchmark_decode_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog");

    for size in [10, 50, 100, 500].iter() {
        let text = to_string(&products(*size)).unwrap_or_default();

        group.bench_with_input(BenchmarkId::new("decode", size), &text, |b, text| {
            b.iter(|| decode(black_box(text)))
        });

        if let Ok(value) = decode(&text) {
            group.bench_with_input(BenchmarkId::new("encode", size), &value, |b, value| {
                b.iter(|| encode(black_box(value), 0))
            });
        }
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_serialize_simple,
    benchmark_deserialize_simple,
    benchmark_nested,
    benchmark_decode_encode
);
criterion_main!(benches);
