//! Performance benchmarks for jls

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use jls::test_utils::{TestTree, dir, file};
use jls::{KindFilter, ListingConfig, ListingFormatter, OutputConfig, list, load_tree};
use serde_json::Value;

/// Root with `width` entries, every tenth one a directory of `width` files.
fn wide_contents(width: usize) -> Vec<Value> {
    (0..width)
        .map(|i| {
            let time = 1_700_000_000 + (i as i64 * 7919) % 100_000;
            if i % 10 == 0 {
                let children = (0..width)
                    .map(|j| file(&format!("file_{j}.rs"), "-rw-r--r--", j as i64, time + j as i64))
                    .collect();
                dir(&format!("dir_{i}"), "drwxr-xr-x", 4096, time, children)
            } else if i % 7 == 0 {
                file(&format!(".hidden_{i}"), "-rw-r--r--", i as i64, time)
            } else {
                file(&format!("entry_{i}.tar.gz"), "-rw-r--r--", i as i64, time)
            }
        })
        .collect()
}

fn bench_load(c: &mut Criterion) {
    let tree = TestTree::new();
    let path = tree.write_structure("Structure.json", wide_contents(500));

    c.bench_function("load_tree_500", |b| {
        b.iter(|| load_tree(black_box(&path)).expect("load"))
    });
}

fn bench_root_listing(c: &mut Criterion) {
    let tree = TestTree::new();
    let path = tree.write_structure("Structure.json", wide_contents(2000));
    let loaded = load_tree(&path).expect("load");

    let mut group = c.benchmark_group("root_listing");
    group.bench_function("default", |b| {
        let config = ListingConfig::default();
        b.iter(|| list(black_box(&loaded), ".", &config).expect("list"))
    });
    group.bench_function("time_reverse_dirs", |b| {
        let config = ListingConfig {
            show_all: true,
            kind_filter: Some(KindFilter::Dir),
            sort_by_time: true,
            reverse: true,
            ..Default::default()
        };
        b.iter(|| list(black_box(&loaded), ".", &config).expect("list"))
    });
    group.bench_function("ignore_patterns", |b| {
        let config = ListingConfig {
            ignore_patterns: vec!["*.gz".to_string(), "dir_1?0".to_string()],
            ..Default::default()
        };
        b.iter(|| list(black_box(&loaded), ".", &config).expect("list"))
    });
    group.finish();
}

fn bench_long_format(c: &mut Criterion) {
    let tree = TestTree::new();
    let path = tree.write_structure("Structure.json", wide_contents(2000));
    let loaded = load_tree(&path).expect("load");
    let entries = list(&loaded, ".", &ListingConfig::default()).expect("list");
    let formatter = ListingFormatter::new(OutputConfig {
        long_format: true,
        use_color: false,
    });

    c.bench_function("long_format_2000", |b| {
        b.iter(|| formatter.format(black_box(&entries)).expect("format"))
    });
}

criterion_group!(benches, bench_load, bench_root_listing, bench_long_format);
criterion_main!(benches);
