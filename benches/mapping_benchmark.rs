use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use kontaktregister_statistikk::models::{ClassificationTable, KontaktregisterField};
use kontaktregister_statistikk::processors::{
    remove_trailing_zeroes, FieldClassifier, StatisticsMapper,
};

// Build a full report set: every D5 code plus the three D7 provider rows,
// with `hours` reported values and `padding` trailing zero columns each.
fn create_report_fields(hours: usize, padding: usize) -> Vec<KontaktregisterField> {
    let mut fields = Vec::new();

    for code in ["D5.1", "D5.2", "D5.4", "D5.5", "D5.6", "D5.7"] {
        let mut values = vec![code.to_string()];
        values.extend((0..hours).map(|h| (1000 + h).to_string()));
        values.extend((0..padding).map(|_| "0".to_string()));
        fields.push(KontaktregisterField::from_values(values));
    }

    for (provider, orgnr) in [
        ("Digipost", "984661185"),
        ("e-Boks", "996460320"),
        ("e-Boks", "958935420"),
    ] {
        let mut values = vec![
            provider.to_string(),
            orgnr.to_string(),
            "Unike brukere".to_string(),
        ];
        values.extend((0..hours).map(|h| (500 + h).to_string()));
        values.extend((0..padding).map(|_| "0".to_string()));
        fields.push(KontaktregisterField::from_values(values));
    }

    fields
}

fn benchmark_classify_and_map(c: &mut Criterion) {
    let fields = create_report_fields(24, 0);
    let from = Utc.with_ymd_and_hms(2017, 3, 1, 0, 0, 0).unwrap();

    c.bench_function("classify_and_map_24h", |b| {
        b.iter(|| {
            let classifier = FieldClassifier::new(ClassificationTable::standard());
            let measurements = classifier.classify(&fields).unwrap();
            let mapped = StatisticsMapper::new().map(&measurements, from).unwrap();
            black_box(mapped.points.len())
        })
    });
}

fn benchmark_trimming(c: &mut Criterion) {
    let fields = create_report_fields(24 * 7, 24);

    c.bench_function("remove_trailing_zeroes", |b| {
        b.iter(|| {
            let trimmed = remove_trailing_zeroes(&fields);
            black_box(trimmed.len())
        })
    });
}

fn benchmark_varying_report_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("mapping_by_report_size");
    let from = Utc.with_ymd_and_hms(2017, 3, 1, 0, 0, 0).unwrap();

    for &hours in &[24, 168, 744] {
        group.bench_with_input(BenchmarkId::new("hours", hours), &hours, |b, &hours| {
            let fields = create_report_fields(hours, 12);
            let classifier = FieldClassifier::new(ClassificationTable::standard());

            b.iter(|| {
                let trimmed = remove_trailing_zeroes(&fields);
                let measurements = classifier.classify(&trimmed).unwrap();
                let mapped = StatisticsMapper::new().map(&measurements, from).unwrap();
                black_box(mapped.points.len())
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_classify_and_map,
    benchmark_trimming,
    benchmark_varying_report_sizes
);
criterion_main!(benches);
