use criterion::{black_box, criterion_group, criterion_main, Criterion};
use trailhead::Router;

fn routed_paths() -> Vec<String> {
    (0..100)
        .flat_map(|i| {
            [
                format!("/api/v{}/users", i),
                format!("/api/v{}/users/{}", i, i * 7),
                format!("/api/v{}/users/{}/posts/{}", i, i * 7, i),
            ]
        })
        .collect()
}

fn build_router() -> Router<bool> {
    let mut router = Router::new();
    router.define("id", "[0-9]+");
    for i in 0..100 {
        let prefix = format!("/api/v{i}");
        router
            .with_prefix(&prefix, |r| {
                r.get("/users", true)?;
                r.get("/users/{id}", true)?;
                r.get("/users/{id}/posts/{post}", true)?;
                Ok(())
            })
            .unwrap();
    }
    router
}

fn resolve(c: &mut Criterion) {
    let router = build_router();
    let paths = routed_paths();

    c.bench_function("resolve", |b| {
        b.iter(|| {
            for path in black_box(&paths) {
                let matched = black_box(router.resolve("GET", path).unwrap());
                assert!(*matched.route.handler());
            }
        });
    });
}

criterion_group!(benches, resolve);
criterion_main!(benches);
