use crate::common::{configure_criterion, WidgetJammed};
use criterion::{criterion_group, BenchmarkId, Criterion};
use error_bridge::bridge::{BridgeConfig, ErrorBridge};
use error_bridge::{keys, AttributeValue, Domain, FlatError};
use std::hint::black_box;

pub fn bench_flatten(c: &mut Criterion) {
    let lazy = ErrorBridge::new(BridgeConfig::lazy());
    let eager = ErrorBridge::new(BridgeConfig::eager());

    c.bench_function("bridge/flatten_lazy", |b| {
        b.iter(|| black_box(lazy.flatten(WidgetJammed::new(black_box(3)))))
    });

    c.bench_function("bridge/flatten_eager", |b| {
        b.iter(|| black_box(eager.flatten(WidgetJammed::new(black_box(3)))))
    });
}

pub fn bench_lazy_attribute(c: &mut Criterion) {
    let bridge = ErrorBridge::default();
    let flat = bridge.flatten(WidgetJammed::new(3));

    c.bench_function("bridge/attribute_stored", |b| {
        b.iter(|| black_box(bridge.attribute(&flat, keys::FILE_PATH)))
    });

    c.bench_function("bridge/attribute_computed", |b| {
        b.iter(|| black_box(bridge.attribute(&flat, keys::DESCRIPTION)))
    });

    c.bench_function("bridge/resolved_attributes", |b| {
        b.iter(|| black_box(bridge.resolved_attributes(&flat)))
    });
}

pub fn bench_registry_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("bridge/registry_lookup");

    for domains in [1, 16, 256] {
        let bridge = ErrorBridge::default();
        for i in 0..domains {
            let domain = Domain::new(format!("net.example.widget{i}")).expect("non-empty domain");
            bridge.register_provider(domain, |_: &FlatError, _: &str| -> Option<AttributeValue> {
                None
            });
        }
        let flat = FlatError::new(Domain::new("net.example.widget0").expect("non-empty domain"), 1);

        group.bench_with_input(BenchmarkId::from_parameter(domains), &flat, |b, flat| {
            b.iter(|| black_box(bridge.attribute(flat, keys::DESCRIPTION)))
        });
    }
    group.finish();
}

criterion_group! {
    name = bridge_benches;
    config = configure_criterion();
    targets =
        bench_flatten,
        bench_lazy_attribute,
        bench_registry_scaling,
}
