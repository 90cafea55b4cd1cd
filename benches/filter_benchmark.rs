use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{seq::SliceRandom, thread_rng, Rng};
use stayease_booking::{DateRange, FilterCriteria, PriceRange, Room, RoomCatalog, RoomType, TypeFilter};

const LOCATIONS: [&str; 4] = [
    "Downtown, New York",
    "Midtown, New York",
    "Bandra, Mumbai",
    "Colaba, Mumbai",
];

fn generate_catalog(size: usize) -> RoomCatalog {
    let mut rng = thread_rng();
    let season_start = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();

    let rooms = (0..size)
        .map(|i| Room {
            id: format!("room{}", i),
            name: format!("Room {}", i),
            room_type: *RoomType::ALL.choose(&mut rng).unwrap(),
            location: LOCATIONS.choose(&mut rng).unwrap().to_string(),
            price_per_night: rng.gen_range(50..=500),
            images: vec![format!("room{}.jpg", i)],
            thumbnail: format!("room{}.jpg", i),
            description: String::new(),
            amenities: vec!["Free Wi-Fi".to_string()],
            rating: rng.gen_range(0.0..=5.0),
            reviews: rng.gen_range(0..500),
            unavailable_dates: (0..rng.gen_range(0..30))
                .map(|_| season_start + chrono::Duration::days(rng.gen_range(0..120)))
                .collect(),
        })
        .collect();

    RoomCatalog::new(rooms).unwrap()
}

pub fn filter_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("room_availability_filter");

    let criteria = FilterCriteria {
        location: "new york".to_string(),
        room_type: TypeFilter::All,
        price: PriceRange::new(80, 400).unwrap(),
        dates: Some(
            DateRange::new(
                NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
                NaiveDate::from_ymd_opt(2025, 8, 14).unwrap(),
            )
            .unwrap(),
        ),
    };

    for size in [10, 1_000, 100_000].iter() {
        let catalog = generate_catalog(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &catalog, |b, catalog| {
            b.iter(|| black_box(catalog.search(black_box(&criteria)).len()));
        });
    }

    group.finish();
}

criterion_group!(benches, filter_benchmark);
criterion_main!(benches);
