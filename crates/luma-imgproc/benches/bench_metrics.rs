use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use luma_image::{Image, ImageSize};
use luma_imgproc::metrics;
use rand::Rng;

fn random_image(width: usize, height: usize) -> Image<f32, 1> {
    let mut rng = rand::rng();
    let data: Vec<f32> = (0..width * height).map(|_| rng.random::<f32>()).collect();
    Image::new(ImageSize { width, height }, data).unwrap()
}

fn bench_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("metrics");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        let image1 = random_image(*width, *height);
        let image2 = random_image(*width, *height);

        group.bench_with_input(
            BenchmarkId::new("mse", &parameter_string),
            &(&image1, &image2),
            |b, (i1, i2)| b.iter(|| metrics::mse(black_box(i1), black_box(i2))),
        );

        group.bench_with_input(
            BenchmarkId::new("compare", &parameter_string),
            &(&image1, &image2),
            |b, (i1, i2)| b.iter(|| metrics::compare(black_box(i1), black_box(i2))),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_metrics);
criterion_main!(benches);
