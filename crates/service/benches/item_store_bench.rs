use criterion::{criterion_group, criterion_main, Criterion};
use std::sync::Arc;

use service::items::{InMemoryItemRepository, ItemInput, ItemService};

fn bench_item_ops(c: &mut Criterion) {
    let svc = ItemService::new(Arc::new(InMemoryItemRepository::new()));
    let rt = tokio::runtime::Runtime::new().unwrap();

    // seed a populated store so get/list see realistic shard contention
    let seeded = rt.block_on(async {
        let mut last = 0;
        for i in 0..1_000 {
            last = svc.create(ItemInput::new(format!("seed-{i}"), "bench")).await.id;
        }
        last
    });

    let svc = &svc;

    c.bench_function("item_create", |b| {
        b.to_async(&rt).iter(|| svc.create(ItemInput::new("Widget", "A widget")));
    });

    c.bench_function("item_get", |b| {
        b.to_async(&rt).iter(|| async move { svc.get(seeded).await.unwrap() });
    });

    c.bench_function("item_update", |b| {
        b.to_async(&rt).iter(|| async move { svc.update(seeded, ItemInput::new("Widget2", "B")).await.unwrap() });
    });
}

criterion_group!(benches, bench_item_ops);
criterion_main!(benches);
