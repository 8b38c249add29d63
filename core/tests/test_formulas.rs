// core/tests/test_formulas.rs
use workout_core::{read_package, Activity, Running, Swimming};

#[test]
fn running_distance_is_steps_times_step_length() {
    for action_count in [0u64, 1, 999, 15_000, 123_457] {
        for duration_hours in [0.25, 1.0, 3.5] {
            let r = Running { action_count, duration_hours, weight_kg: 75.0 };
            let expected = action_count as f64 * 0.00065;
            assert!(
                (r.distance_km() - expected).abs() <= 1e-9,
                "steps={action_count}: {} vs {}",
                r.distance_km(),
                expected
            );
            assert!((r.mean_speed_kmh() - expected / duration_hours).abs() <= 1e-9);
        }
    }
}

#[test]
fn swimming_speed_ignores_action_count() {
    let base = Swimming { action_count: 0, duration_hours: 1.0, weight_kg: 80.0, pool_length_m: 25.0, pool_laps: 40 };
    for action_count in [0u64, 720, 1_000_000] {
        let s = Swimming { action_count, ..base };
        assert_eq!(s.mean_speed_kmh(), base.mean_speed_kmh());
        assert_eq!(s.spent_calories(), base.spent_calories());
    }
    // distance still uses stroke length
    let s = Swimming { action_count: 720, ..base };
    assert!((s.distance_km() - 0.9936).abs() < 1e-9);
}

#[test]
fn run_reference_package() {
    let w = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();
    assert!((w.distance_km() - 9.75).abs() < 1e-9);
    assert!((w.mean_speed_kmh() - 9.75).abs() < 1e-9);
    // ((18 * 9.75) - 20) * 75 / 1000 * 1 * 60
    assert!((w.calories() - 699.75).abs() < 1e-9);
}

#[test]
fn swim_reference_package() {
    let w = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
    assert!((w.mean_speed_kmh() - 1.0).abs() < 1e-12);
    assert!((w.calories() - 336.0).abs() < 1e-9);
}

#[test]
fn walk_reference_package() {
    let w = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
    assert!((w.distance_km() - 5.85).abs() < 1e-9);
    assert!((w.mean_speed_kmh() - 5.85).abs() < 1e-9);
    // 5.85² // 180 == 0, so only 0.035 * 75 * 60 remains
    assert!((w.calories() - 157.5).abs() < 1e-9);
}

#[test]
fn summary_carries_all_fields() {
    let w = read_package("RUN", &[6000.0, 0.5, 60.0]).unwrap();
    let s = w.summary();
    assert_eq!(s.activity_label, "Running");
    assert_eq!(s.duration_hours, 0.5);
    assert_eq!(s.distance_km, w.distance_km());
    assert_eq!(s.mean_speed_kmh, w.mean_speed_kmh());
    assert_eq!(s.calories, w.calories());

    let r = s.rounded(3);
    assert_eq!(r.distance_km, 3.9);
    assert_eq!(r.calories, 216.72);
}

#[test]
fn walking_floor_division_follows_python_semantics() {
    // speed = 1 km/h, height 0.1: 1.0 // 0.1 == 9.0 even though 1.0 / 0.1 rounds to 10.0
    let w = read_package("WLK", &[1000.0, 0.65, 75.0, 0.1]).unwrap();
    assert!((w.mean_speed_kmh() - 1.0).abs() < 1e-12);
    // (0.035 * 75 + 9 * 0.029 * 75) * 0.65 * 60
    assert!((w.calories() - 865.8).abs() < 1e-6, "got {}", w.calories());
}
