//! Benchmarks for the exifmark formatting, layout, and blur stages.
//!
//! Run with: cargo bench -p exifmark-core

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::{DynamicImage, Rgba, RgbaImage};

use exifmark_core::layout::{self, LayoutOptions, TextBox};
use exifmark_core::{ExifRecord, FormattedStrings, Ratio, ShutterSpeed, TextMeasure};

/// Half-em advance per character, one em per line.
struct FixedAdvance;

impl TextMeasure for FixedAdvance {
    fn measure(&self, text: &str, font_size: f32, line_spacing: f32) -> TextBox {
        let lines = text.split('\n').count() as f32;
        let widest = text.split('\n').map(|l| l.chars().count()).max().unwrap_or(0);
        TextBox::sized(
            widest as f32 * font_size * 0.5,
            lines * font_size + (lines - 1.0) * line_spacing,
        )
    }
}

fn sample_record() -> ExifRecord {
    ExifRecord {
        camera: "Canon EOS R6".to_string(),
        lens_model: "RF24-105mm F4 L IS USM".to_string(),
        focal_length: 105,
        f_number: Ratio::new(40, 10),
        exposure_time: Ratio::new(10, 2500),
        iso: 800,
    }
}

fn benchmark_shutter_speed(c: &mut Criterion) {
    c.bench_function("shutter_speed_fraction", |b| {
        b.iter(|| ShutterSpeed::from_seconds(black_box(0.004)).to_string())
    });

    c.bench_function("shutter_speed_ratio", |b| {
        b.iter(|| ShutterSpeed::from_ratio(black_box(Ratio::new(1, 3200))).to_string())
    });
}

fn benchmark_format(c: &mut Criterion) {
    let record = sample_record();

    c.bench_function("format_strings", |b| {
        b.iter(|| FormattedStrings::from_record(black_box(&record)))
    });
}

fn benchmark_brightness(c: &mut Criterion) {
    let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(1920, 1080, Rgba([90, 140, 200, 255])));

    c.bench_function("brightness_1080p", |b| {
        b.iter(|| layout::brightness(black_box(&img)))
    });
}

fn benchmark_plan_layout(c: &mut Criterion) {
    let strings = FormattedStrings::from_record(&sample_record());
    let options = LayoutOptions::default();

    c.bench_function("plan_layout_with_shrink", |b| {
        b.iter(|| {
            layout::plan_layout(
                &FixedAdvance,
                black_box(&strings),
                black_box(600),
                black_box(400),
                0.3,
                &options,
            )
        })
    });
}

fn benchmark_blur(c: &mut Criterion) {
    let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(1280, 720, Rgba([30, 60, 90, 255])));

    c.bench_function("blur_720p_sigma50", |b| {
        b.iter(|| exifmark_core::render::blur(black_box(&img), 50.0))
    });
}

criterion_group!(
    benches,
    benchmark_shutter_speed,
    benchmark_format,
    benchmark_brightness,
    benchmark_plan_layout,
    benchmark_blur,
);
criterion_main!(benches);
