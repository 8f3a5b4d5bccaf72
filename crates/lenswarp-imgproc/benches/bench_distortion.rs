use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use lenswarp_image::{Image, ImageSize};
use lenswarp_imgproc::calibration::distortion::{
    generate_distortion_map_polynomial, PolynomialDistortion,
};
use lenswarp_imgproc::calibration::CameraIntrinsic;
use lenswarp_imgproc::simulation::{simulate_distortion, SimulationConfig};

fn bench_generate_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("DistortionMap");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        let size: ImageSize = [*width, *height].into();
        let intrinsic = CameraIntrinsic::new(
            1738.06409,
            1736.96128,
            *width as f64 / 2.0,
            *height as f64 / 2.0,
        );
        let distortion = PolynomialDistortion::radial(0.2, 0.0, 0.0);

        group.bench_with_input(
            BenchmarkId::new("rayon_rows", &parameter_string),
            &size,
            |b, size| {
                b.iter(|| {
                    generate_distortion_map_polynomial(
                        black_box(&intrinsic),
                        black_box(&distortion),
                        black_box(size),
                    )
                    .unwrap()
                })
            },
        );
    }
    group.finish();
}

fn bench_simulate(c: &mut Criterion) {
    let mut group = c.benchmark_group("DistortionPipeline");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        // input image
        let image_size: ImageSize = [*width, *height].into();
        let image = Image::<u8, 3>::new(image_size, vec![128u8; width * height * 3]).unwrap();

        group.bench_with_input(
            BenchmarkId::new("u8_rgb", &parameter_string),
            &image,
            |b, src| {
                let mut distorted = Image::<u8, 3>::from_size_val(src.size(), 0).unwrap();
                let mut restored = Image::<u8, 3>::from_size_val(src.size(), 0).unwrap();
                let config = SimulationConfig::for_size(src.size());
                b.iter(|| {
                    simulate_distortion(
                        black_box(src),
                        black_box(&mut distorted),
                        black_box(&mut restored),
                        black_box(&config),
                    )
                    .unwrap()
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_generate_map, bench_simulate);
criterion_main!(benches);
