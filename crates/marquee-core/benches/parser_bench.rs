use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::sync::Arc;
use marquee_core::{FilenameCleaner, NoopSink};

fn bench_clean(c: &mut Criterion) {
    let cleaner = FilenameCleaner::default().with_sink(Arc::new(NoopSink));

    let inputs = vec![
        "[SubsPlease] Jujutsu Kaisen - 24 (1080p) [A1B2C3D4].mkv",
        "Show.Name.S01E02.1080p.x264-GROUP.mkv",
        "Movie.Title.2023.1080p.BluRay.mkv",
        "One.Piece.1080.WEBRip.mkv",
        "content://media/file%2FDownload%2FSopranos.S01E01.1080p.mkv",
    ];

    c.bench_function("clean_single", |b| {
        b.iter(|| cleaner.clean(black_box(inputs[0])));
    });

    c.bench_function("clean_batch_5", |b| {
        b.iter(|| {
            for input in &inputs {
                let _ = cleaner.clean(black_box(input));
            }
        });
    });

    c.bench_function("display_title_batch_5", |b| {
        b.iter(|| {
            for input in &inputs {
                let _ = cleaner.extract_display_title(black_box(input));
            }
        });
    });
}

criterion_group!(benches, bench_clean);
criterion_main!(benches);
