// core/tests/test_message.rs
use workout_core::{read_package, Locale, Summary};

#[test]
fn english_template() {
    let s = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap().summary();
    assert_eq!(
        s.message(Locale::En),
        "Workout type: Running; Duration: 1.000 h; Distance: 9.750 km; \
         Mean speed: 9.750 km/h; Calories spent: 699.750."
    );
    assert_eq!(s.to_string(), s.message(Locale::En));
}

#[test]
fn russian_template_keeps_field_order() {
    let s = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap().summary();
    assert_eq!(
        s.message(Locale::Ru),
        "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; \
         Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000."
    );
}

#[test]
fn three_decimals_everywhere() {
    let s = Summary {
        activity_label: "SportsWalking".into(),
        duration_hours: 1.23456,
        distance_km: 2.0,
        mean_speed_kmh: 0.0004,
        calories: 12345.6789,
    };
    assert_eq!(
        s.to_string(),
        "Workout type: SportsWalking; Duration: 1.235 h; Distance: 2.000 km; \
         Mean speed: 0.000 km/h; Calories spent: 12345.679."
    );
}

#[test]
fn locale_from_str() {
    assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
    assert_eq!("RU".parse::<Locale>().unwrap(), Locale::Ru);
    assert!("de".parse::<Locale>().is_err());
}
