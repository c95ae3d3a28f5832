use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use rollbook_core::{BoundedText, OverflowPolicy, Roster, StudentRecord, write_report};

fn build_roster(count: usize) -> Roster {
    let mut roster = Roster::with_expected(count);
    for i in 0..count {
        roster.push(StudentRecord {
            name: BoundedText::new(format!("Student{i}"), 50, OverflowPolicy::Reject).unwrap(),
            class_number: (i % 12) as i32,
            address: BoundedText::new(format!("Street{i}"), 100, OverflowPolicy::Reject).unwrap(),
        });
    }
    roster
}

fn benchmark_report_render(c: &mut Criterion) {
    let counts: [usize; 3] = [16, 256, 4096];
    let mut group = c.benchmark_group("report_render");

    for count in counts {
        let roster = build_roster(count);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("write_report", count), &roster, |b, r| {
            b.iter(|| {
                let mut out = Vec::with_capacity(count * 64);
                write_report(black_box(r), &mut out).unwrap();
                black_box(out);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_report_render);
criterion_main!(benches);
