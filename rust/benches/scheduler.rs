use criterion::{black_box, criterion_group, criterion_main, Criterion};

use leadtime::{nd, Cal, DateRoll, Delivery, NamedCal, Process, Scheduler};

fn fixture_deliveries(n: usize) -> Vec<Delivery> {
    (0..n)
        .map(|i| {
            let date = nd(2025, 1, 6) + chrono::Days::new((i * 3) as u64);
            let processes = (0..8u32)
                .map(|p| Process::new(format!("P{}", p), 1 + p % 3))
                .collect();
            Delivery::new(format!("Delivery {}", i), date, processes)
        })
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let bus = Cal::new(vec![], vec![5, 6]);
    let jpn = NamedCal::try_new("bus,jpn").unwrap();
    let end = nd(2025, 12, 24);
    let deliveries = fixture_deliveries(100);

    c.bench_function("bus_days_before 20 bus", |z| {
        z.iter(|| bus.bus_days_before(black_box(&end), 20))
    });
    c.bench_function("bus_days_before 20 jpn", |z| {
        z.iter(|| jpn.bus_days_before(black_box(&end), 20))
    });
    c.bench_function("bus_days_before 2000 jpn", |z| {
        z.iter(|| jpn.bus_days_before(black_box(&end), 2000))
    });
    c.bench_function("schedule 100 deliveries jpn", |z| {
        let scheduler = Scheduler::new(&jpn);
        z.iter(|| scheduler.schedule(black_box(&deliveries), nd(2025, 1, 1)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
