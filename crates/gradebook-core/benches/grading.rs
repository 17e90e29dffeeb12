use criterion::{black_box, criterion_group, criterion_main, Criterion};

use gradebook_core::grading::gpa_points;
use gradebook_core::model::Student;
use gradebook_core::statistics::ClassStatistics;
use gradebook_core::store::StudentStore;

fn make_roster(size: usize) -> StudentStore {
    let mut store = StudentStore::new();
    for i in 0..size {
        let id = format!("S{i:05}");
        let mut student = Student::new(&id, format!("Student {i}"), format!("{id}@example.edu"), 20);
        for (j, subject) in ["Math", "Science", "History", "English"].iter().enumerate() {
            let score = ((i * 17 + j * 13) % 101) as f64;
            student.add_grade(*subject, score).unwrap();
        }
        store.add(student).unwrap();
    }
    store
}

fn bench_gpa_points(c: &mut Criterion) {
    let mut group = c.benchmark_group("gpa_points");
    for score in [0.0, 59.9, 75.0, 95.0] {
        group.bench_function(format!("score={score}"), |b| {
            b.iter(|| gpa_points(black_box(score)))
        });
    }
    group.finish();
}

fn bench_statistics(c: &mut Criterion) {
    let mut group = c.benchmark_group("class_statistics");
    for size in [10, 100, 1000] {
        let store = make_roster(size);
        group.bench_function(format!("compute/{size}"), |b| {
            b.iter(|| ClassStatistics::compute(black_box(&store)))
        });
    }
    group.finish();
}

fn bench_sorting(c: &mut Criterion) {
    let store = make_roster(1000);
    c.bench_function("sorted_by_gpa/1000", |b| {
        b.iter(|| black_box(&store).sorted_by_gpa())
    });
}

criterion_group!(benches, bench_gpa_points, bench_statistics, bench_sorting);
criterion_main!(benches);
