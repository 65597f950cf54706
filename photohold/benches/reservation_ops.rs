use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tempfile::TempDir;

use photohold::database::{Database, DatabaseConfig};
use photohold::{
    Identity, ListFilter, PhotoId, ReservationService, ReservationStatus,
};

const LIST_SIZES: &[usize] = &[10, 100, 500];

fn setup_database() -> (TempDir, Database) {
    let temp_dir = TempDir::new().expect("failed to create temporary directory");
    let db_path = temp_dir.path().join("photohold.db");
    let config = DatabaseConfig::new(&db_path);
    let db = Database::open(config).expect("failed to open temporary database");
    (temp_dir, db)
}

fn member(index: usize) -> Identity {
    Identity::new(
        format!("u-{index}"),
        format!("Member {index}"),
        format!("member{index}@example.org"),
    )
}

fn admin() -> Identity {
    Identity::new("admin-1", "Office", "office@example.org").into_admin()
}

fn populate(db: &mut Database, count: usize) {
    let mut service = ReservationService::new(db);
    for index in 0..count {
        let photo = PhotoId::new(format!("gallery/{index}")).expect("valid photo id");
        service
            .create_reservation(photo, &member(index), None)
            .expect("failed to populate reservation");
    }
}

fn bench_reserve_cancel_cycle(c: &mut Criterion) {
    c.bench_function("reserve_cancel_cycle", |b| {
        let (_temp_dir, mut db) = setup_database();
        let requester = member(1);
        let photo = PhotoId::new("gallery/cycle").expect("valid photo id");

        b.iter(|| {
            let mut service = ReservationService::new(&mut db);
            let reservation = service
                .create_reservation(black_box(photo.clone()), &requester, None)
                .expect("reserve failed");
            service
                .cancel_reservation(reservation.id(), &requester)
                .expect("cancel failed");
        });
    });
}

fn bench_conflicting_reserve(c: &mut Criterion) {
    c.bench_function("conflicting_reserve", |b| {
        let (_temp_dir, mut db) = setup_database();
        {
            let mut service = ReservationService::new(&mut db);
            let photo = PhotoId::new("gallery/held").expect("valid photo id");
            service
                .create_reservation(photo, &member(1), None)
                .expect("reserve failed");
        }

        let photo = PhotoId::new("gallery/held").expect("valid photo id");
        let challenger = member(2);
        b.iter(|| {
            let mut service = ReservationService::new(&mut db);
            let result = service.create_reservation(black_box(photo.clone()), &challenger, None);
            assert!(result.is_err());
        });
    });
}

fn bench_list_with_stats(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_with_stats");
    for &size in LIST_SIZES {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let (_temp_dir, mut db) = setup_database();
            populate(&mut db, size);
            let admin = admin();

            b.iter(|| {
                let service = ReservationService::new(&mut db);
                let outcome = service
                    .query(&ListFilter::new(), &admin)
                    .expect("query failed");
                assert_eq!(outcome.stats.total, size);
                black_box(outcome);
            });
        });
    }
    group.finish();
}

fn bench_status_advance(c: &mut Criterion) {
    c.bench_function("status_advance", |b| {
        let (_temp_dir, mut db) = setup_database();
        let admin = admin();
        let requester = member(1);
        let photo = PhotoId::new("gallery/advance").expect("valid photo id");

        b.iter(|| {
            let mut service = ReservationService::new(&mut db);
            let reservation = service
                .create_reservation(photo.clone(), &requester, None)
                .expect("reserve failed");
            service
                .advance_status(reservation.id(), ReservationStatus::Confirmed, None, &admin)
                .expect("confirm failed");
            service
                .cancel_reservation(reservation.id(), &admin)
                .expect("cancel failed");
        });
    });
}

criterion_group!(
    benches,
    bench_reserve_cancel_cycle,
    bench_conflicting_reserve,
    bench_list_with_stats,
    bench_status_advance
);
criterion_main!(benches);
