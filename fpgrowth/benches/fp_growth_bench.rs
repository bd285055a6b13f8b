use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use fpgrowth::{find_frequent_patterns, fp_growth_algorithm};

/// Seeded binary transaction matrix. Each row draws about `avg_transaction_size`
/// item picks (scaled by 0.5x to 1.5x), and each pick lands with probability
/// `density`, so repeated picks and misses make rows sparser than the average.
fn generate_transactions(
    num_transactions: usize,
    num_items: usize,
    avg_transaction_size: usize,
    density: f64,
) -> Array2<i32> {
    let mut rng = StdRng::seed_from_u64(42);
    let mut data = vec![0i32; num_transactions * num_items];

    for tx_idx in 0..num_transactions {
        let random_factor: f64 = rng.r#gen();
        let num_items_in_tx = (avg_transaction_size as f64 * (0.5 + random_factor)).round() as usize;
        let num_items_in_tx = num_items_in_tx.min(num_items);

        for _ in 0..num_items_in_tx {
            if rng.gen_bool(density) {
                let item = rng.gen_range(0..num_items);
                data[tx_idx * num_items + item] = 1;
            }
        }
    }

    Array2::from_shape_vec((num_transactions, num_items), data).unwrap()
}

fn to_labels(matrix: &Array2<i32>) -> Vec<Vec<String>> {
    matrix
        .outer_iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .filter(|&(_, &cell)| cell != 0)
                .map(|(item, _)| format!("item{}", item))
                .collect()
        })
        .collect()
}

fn bench_fp_growth_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("fp_growth_scaling");

    let configs = vec![
        ("small_100tx", 100, 20, 5),
        ("medium_500tx", 500, 50, 10),
        ("large_1000tx", 1000, 100, 15),
        ("xlarge_5000tx", 5000, 100, 20),
    ];

    for (name, num_tx, num_items, avg_size) in configs {
        let transactions = generate_transactions(num_tx, num_items, avg_size, 0.7);

        group.bench_with_input(BenchmarkId::from_parameter(name), &transactions, |b, tx| {
            b.iter(|| fp_growth_algorithm(black_box(tx.view()), black_box(0.1)));
        });
    }

    group.finish();
}

fn bench_fp_growth_min_support(c: &mut Criterion) {
    let mut group = c.benchmark_group("fp_growth_min_support");

    let transactions = generate_transactions(1000, 50, 10, 0.7);

    for &min_sup in &[0.05, 0.1, 0.2, 0.3, 0.5] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:.2}", min_sup)),
            &min_sup,
            |b, &sup| {
                b.iter(|| fp_growth_algorithm(black_box(transactions.view()), black_box(sup)));
            },
        );
    }

    group.finish();
}

fn bench_fp_growth_density(c: &mut Criterion) {
    let mut group = c.benchmark_group("fp_growth_density");

    let densities = vec![
        ("sparse_30", 0.3),
        ("medium_50", 0.5),
        ("dense_70", 0.7),
        ("very_dense_90", 0.9),
    ];

    for (name, density) in densities {
        let transactions = generate_transactions(1000, 50, 10, density);

        group.bench_with_input(BenchmarkId::from_parameter(name), &transactions, |b, tx| {
            b.iter(|| fp_growth_algorithm(black_box(tx.view()), black_box(0.1)));
        });
    }

    group.finish();
}

/// Label input pays for itemizing on top of mining.
fn bench_labeled_transactions(c: &mut Criterion) {
    let mut group = c.benchmark_group("fp_growth_labels");

    let matrix = generate_transactions(1000, 30, 8, 0.8);
    let labels = to_labels(&matrix);

    group.bench_function("grocery_labels", |b| {
        b.iter(|| find_frequent_patterns(black_box(labels.clone()), black_box(150)));
    });
    group.bench_function("grocery_matrix", |b| {
        b.iter(|| fp_growth_algorithm(black_box(matrix.view()), black_box(0.15)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_fp_growth_scaling,
    bench_fp_growth_min_support,
    bench_fp_growth_density,
    bench_labeled_transactions
);
criterion_main!(benches);
