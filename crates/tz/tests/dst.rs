use almanac_calendar::{CalendarDate, DateFields, GregorianDate, IslamicDate};
use almanac_tz::{FALLBACK_ZONE_ID, TimeZone, TimeZoneOptions, ZoneRegistry};

fn zone(id: &str) -> TimeZone {
    let registry = ZoneRegistry::embedded().unwrap();
    registry
        .time_zone(&TimeZoneOptions::default().with_id(id))
        .unwrap()
}

fn utc(y: i32, m: i32, d: i32, h: i32, min: i32) -> GregorianDate {
    GregorianDate::new(DateFields::ymd(y, m, d).with_time(h, min, 0))
}

#[test]
fn northern_hemisphere_window() {
    let ny = zone("America/New_York");
    assert!(!ny.in_daylight_time(&utc(2024, 1, 15, 12, 0)));
    assert!(ny.in_daylight_time(&utc(2024, 7, 15, 12, 0)));
    assert!(!ny.in_daylight_time(&utc(2024, 12, 15, 12, 0)));
}

#[test]
fn new_york_transition_instants() {
    let ny = zone("America/New_York");
    // Spring forward at 02:00 EST = 07:00 UTC, fall back at 02:00 EDT = 06:00 UTC.
    assert!(!ny.in_daylight_time(&utc(2024, 3, 10, 6, 59)));
    assert!(ny.in_daylight_time(&utc(2024, 3, 10, 7, 0)));
    assert!(ny.in_daylight_time(&utc(2024, 11, 3, 5, 59)));
    assert!(!ny.in_daylight_time(&utc(2024, 11, 3, 6, 0)));
}

#[test]
fn southern_hemisphere_window_wraps() {
    let sydney = zone("Australia/Sydney");
    let window = sydney.dst_window(2024).unwrap();
    assert!(window.start > window.end);
    assert!(sydney.in_daylight_time(&utc(2024, 1, 15, 0, 0)));
    assert!(!sydney.in_daylight_time(&utc(2024, 6, 15, 0, 0)));
    assert!(sydney.in_daylight_time(&utc(2024, 11, 15, 0, 0)));
    assert_eq!(sydney.abbreviation(&utc(2024, 1, 15, 0, 0)), "AEDT");
    assert_eq!(sydney.abbreviation(&utc(2024, 6, 15, 0, 0)), "AEST");
    assert_eq!(sydney.offset_string(&utc(2024, 1, 15, 0, 0)), "+11:00");
}

#[test]
fn european_rules_in_utc() {
    let london = zone("Europe/London");
    // Last Sunday of March 2024 is the 31st; clocks change at 01:00 UTC.
    assert!(!london.in_daylight_time(&utc(2024, 3, 31, 0, 59)));
    assert!(london.in_daylight_time(&utc(2024, 3, 31, 1, 0)));
    assert_eq!(london.abbreviation(&utc(2024, 7, 1, 0, 0)), "BST");
    assert_eq!(london.abbreviation(&utc(2024, 12, 1, 0, 0)), "GMT");

    let paris = zone("Europe/Paris");
    assert_eq!(paris.abbreviation(&utc(2024, 7, 1, 0, 0)), "CEST");
    assert_eq!(paris.abbreviation(&utc(2024, 12, 1, 0, 0)), "CET");
    assert_eq!(paris.offset_millis(&utc(2024, 7, 1, 0, 0)), 7_200_000);
}

#[test]
fn half_hour_savings() {
    let lord_howe = zone("Australia/Lord_Howe");
    assert_eq!(lord_howe.dst_savings_minutes(), 30);
    assert_eq!(lord_howe.offset_string(&utc(2024, 1, 15, 0, 0)), "+11:00");
    assert_eq!(lord_howe.offset_string(&utc(2024, 6, 15, 0, 0)), "+10:30");
    assert_eq!(lord_howe.abbreviation(&utc(2024, 6, 15, 0, 0)), "+1030");
}

#[test]
fn zones_without_rules() {
    let tokyo = zone("Asia/Tokyo");
    assert!(!tokyo.uses_daylight_time());
    assert!(tokyo.dst_window(2024).is_none());
    assert_eq!(tokyo.offset_string(&utc(2024, 7, 1, 0, 0)), "+09:00");

    let kathmandu = zone("Asia/Kathmandu");
    assert_eq!(kathmandu.raw_offset_minutes(), 345);

    let st_johns = zone("America/St_Johns");
    assert_eq!(st_johns.offset_string(&utc(2024, 1, 1, 12, 0)), "-03:30");
    assert_eq!(st_johns.offset_string(&utc(2024, 7, 1, 12, 0)), "-02:30");
}

#[test]
fn unknown_zone_is_utc() {
    let zone = zone("Nowhere/Imaginary");
    assert_eq!(zone.id(), FALLBACK_ZONE_ID);
    assert_eq!(zone.raw_offset_millis(), 0);
    assert!(!zone.uses_daylight_time());
    assert_eq!(zone.abbreviation(&utc(2024, 7, 1, 0, 0)), "UTC");
}

#[test]
fn rule_times_past_midnight() {
    let cairo = zone("Africa/Cairo");
    // Summer time ends at 24:00 on the last Thursday of October
    // (2024-10-31), i.e. Oct 31 21:00 UTC.
    assert!(cairo.in_daylight_time(&utc(2024, 10, 31, 20, 59)));
    assert!(!cairo.in_daylight_time(&utc(2024, 10, 31, 21, 0)));
}

#[test]
fn any_calendar_date_is_accepted() {
    let ny = zone("America/New_York");
    // 1 Muharram 1446 is 2024-07-08.
    let date = IslamicDate::ymd(1446, 1, 1);
    assert!(ny.in_daylight_time(&date));
    assert_eq!(ny.offset_millis(&date), -14_400_000);
}

#[test]
fn window_follows_year() {
    let ny = zone("America/New_York");
    for year in 2020..2030 {
        let window = ny.dst_window(year).unwrap();
        let start = GregorianDate::from_rata_die(window.start);
        let end = GregorianDate::from_rata_die(window.end);
        assert_eq!((start.year(), start.month()), (year, 3));
        assert_eq!((end.year(), end.month()), (year, 11));
        assert!((8..=14).contains(&start.day()), "{year}");
        assert!((1..=7).contains(&end.day()), "{year}");
    }
}
