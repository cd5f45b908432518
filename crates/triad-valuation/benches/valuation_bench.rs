use criterion::{black_box, criterion_group, criterion_main, Criterion};
use triad_core::decimal::Decimal;
use triad_core::resources::*;
use triad_valuation::ValuationEngine;

fn representative_bundle(per_category: usize) -> ResourceBundle {
    let land = (0..per_category)
        .map(|i| LandResource {
            category: LandCategory::Agricultural,
            area: Decimal::from_int(1000 + i as i64),
            fertility: 0.8,
            accessibility: 0.9,
            sovereignty: if i % 2 == 0 {
                SovereigntyStatus::Sovereign
            } else {
                SovereigntyStatus::Transitioning
            },
            wisdom_value: 0.5,
        })
        .collect();
    let air = (0..per_category)
        .map(|i| AirResource {
            category: if i % 3 == 0 {
                AirCategory::Communication
            } else {
                AirCategory::Breathable
            },
            volume: Decimal::from_int(500 + i as i64),
            purity: 0.9,
            frequency: 2400.0,
            wind_energy_potential: 120.0,
        })
        .collect();
    let water = (0..per_category)
        .map(|i| WaterResource {
            category: WaterCategory::Drinking,
            volume: Decimal::from_int(2000 + i as i64),
            purity: 0.95,
            flow_rate: Decimal::from_int(40),
            spiritual_significance: 0.3,
        })
        .collect();

    ResourceBundle {
        land,
        air,
        water,
        collateral: Decimal::from_int(50_000),
        wisdom_coefficient: 0.7,
    }
}

fn bench_calculate(c: &mut Criterion) {
    let engine = ValuationEngine::new();

    for size in [10usize, 100, 1000] {
        let bundle = representative_bundle(size);
        c.bench_function(&format!("calculate_{size}_per_category"), |b| {
            b.iter(|| engine.calculate(black_box(&bundle)).unwrap())
        });
    }
}

criterion_group!(benches, bench_calculate);
criterion_main!(benches);
