//! Benchmarks for cast ranking
//!
//! Run with: cargo bench --package ranking
//!
//! Uses synthetic casts sized like a blockbuster's full credits and a long
//! running series' aggregate credits.

use cast_model::{MovieCastMember, RoleCredit, SeriesCastMember};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ranking::{rank_batch, CastRankingEngine, NoopObserver, RankRequest};

fn synthetic_movie_cast(size: usize) -> Vec<MovieCastMember> {
    (0..size)
        .map(|i| MovieCastMember {
            id: i as u64 + 1,
            name: format!("Actor {}", i),
            profile_path: (i % 4 != 0).then(|| format!("/actor_{}.jpg", i)),
            popularity: ((i * 37) % 400) as f64 / 10.0,
            character: if i % 9 == 0 {
                format!("Extra {} (uncredited)", i)
            } else {
                format!("Character {}", i)
            },
            order: (i % 7 != 0).then_some(i as u32),
        })
        .collect()
}

fn synthetic_series_cast(size: usize) -> Vec<SeriesCastMember> {
    (0..size)
        .map(|i| {
            let episodes = ((i * 53) % 120) as u32;
            SeriesCastMember {
                id: i as u64 + 1,
                name: format!("Actor {}", i),
                profile_path: (i % 5 != 0).then(|| format!("/actor_{}.jpg", i)),
                popularity: ((i * 29) % 300) as f64 / 10.0,
                roles: vec![RoleCredit {
                    character: format!("Character {}", i),
                    episode_count: episodes,
                }],
                total_episode_count: episodes,
            }
        })
        .collect()
}

fn bench_rank_movie_cast(c: &mut Criterion) {
    let engine = CastRankingEngine::new().with_observer(NoopObserver);
    let cast = synthetic_movie_cast(300);

    c.bench_function("rank_movie_cast_300", |b| {
        b.iter(|| {
            let result = engine.rank_movie_cast(black_box(&cast));
            black_box(result)
        })
    });
}

fn bench_rank_series_cast(c: &mut Criterion) {
    let engine = CastRankingEngine::new().with_observer(NoopObserver);
    let cast = synthetic_series_cast(300);

    c.bench_function("rank_series_cast_300", |b| {
        b.iter(|| {
            let result = engine.rank_series_cast(black_box(&cast), black_box(120));
            black_box(result)
        })
    });
}

fn bench_rank_batch(c: &mut Criterion) {
    let engine = CastRankingEngine::new().with_observer(NoopObserver);
    let requests: Vec<RankRequest> = (0..64)
        .map(|i| {
            if i % 2 == 0 {
                RankRequest::movie(synthetic_movie_cast(150))
            } else {
                RankRequest::series(synthetic_series_cast(150), 80)
            }
        })
        .collect();

    c.bench_function("rank_batch_64", |b| {
        b.iter(|| {
            let results = rank_batch(&engine, black_box(&requests));
            black_box(results)
        })
    });
}

criterion_group!(
    benches,
    bench_rank_movie_cast,
    bench_rank_series_cast,
    bench_rank_batch
);
criterion_main!(benches);
