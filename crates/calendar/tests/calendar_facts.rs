use almanac_calendar::{
    CalendarDate, CalendarKind, CalendarSystem, DateFields, DateInput, GregorianDate, HebrewCalendar,
    HebrewDate, IslamicDate, JulianDate, MAX_ORDINAL_DAYS, MAX_YEAR, MIN_YEAR, RataDie,
    UNIX_TIME_MAX_MS, Weekday,
};

#[test]
fn leap_year_facts() {
    assert!(CalendarKind::Gregorian.is_leap_year(2000));
    assert!(CalendarKind::Gregorian.is_leap_year(1600));
    assert!(!CalendarKind::Gregorian.is_leap_year(1900));
    assert!(!CalendarKind::Gregorian.is_leap_year(2100));
    assert!(CalendarKind::Julian.is_leap_year(1900));
    assert_eq!(CalendarKind::Hebrew.months_in_year(5776), 13);
    assert_eq!(CalendarKind::Hebrew.month_name(13, 5776), Some("Adar II"));
    assert!(CalendarKind::Islamic.is_leap_year(2));
    assert!(!CalendarKind::Islamic.is_leap_year(1));
}

#[test]
fn weekday_search_from_day_zero() {
    for kind in CalendarKind::ALL {
        let phase = kind.weekday_phase();
        let origin = RataDie::new(0.0);
        for index in 0..7 {
            let target = Weekday::from_index(index);
            let found = origin.on_or_after(target, phase);
            assert_eq!(found.day_of_week(phase), target, "{kind} {target}");
            let ahead = found.day() - origin.day();
            assert!((0..=6).contains(&ahead), "{kind} {target}: {ahead} days ahead");

            let back = origin.on_or_before(target, phase);
            assert_eq!(back.day_of_week(phase), target, "{kind} {target}");
            assert!((0..=6).contains(&(origin.day() - back.day())));
        }
    }
}

#[test]
fn strict_weekday_search_skips_today() {
    let date = GregorianDate::ymd(2024, 1, 7);
    assert_eq!(date.day_of_week(), Weekday::Sunday);
    assert_eq!(date.before(Weekday::Sunday).day(), 31);
    assert_eq!(date.after(Weekday::Sunday).day(), 14);
    assert_eq!(date.on_or_after(Weekday::Sunday).day(), 7);
}

#[test]
fn unix_time_window() {
    let last = GregorianDate::new(DateFields::ymd(2038, 1, 19).with_time(3, 14, 7));
    assert_eq!(last.unix_time(), UNIX_TIME_MAX_MS);
    let past = GregorianDate::new(DateFields::ymd(2038, 1, 19).with_time(3, 14, 8));
    assert_eq!(past.unix_time(), -1);
    assert_eq!(past.unix_time_extended(), UNIX_TIME_MAX_MS + 1_000);

    let before_epoch = GregorianDate::ymd(1969, 12, 31);
    assert_eq!(before_epoch.unix_time(), -1);
    assert_eq!(before_epoch.unix_time_extended(), -86_400_000);
}

#[test]
fn unix_time_agrees_across_calendars() {
    let greg = GregorianDate::new(DateFields::ymd(2015, 10, 15).with_time(12, 0, 0));
    for kind in CalendarKind::ALL {
        let date = kind.new_date(DateInput::UnixTime(greg.unix_time()));
        assert_eq!(date.unix_time(), greg.unix_time(), "{kind}");
        assert_eq!(date.julian_day(), greg.julian_day(), "{kind}");
    }
}

#[test]
fn week_of_year_boundaries() {
    // 2021-01-01 is a Friday; it belongs to the 53rd week of 2020.
    assert_eq!(GregorianDate::ymd(2021, 1, 1).week_of_year(), 53);
    assert_eq!(GregorianDate::ymd(2021, 1, 3).week_of_year(), 1);
    // 2024-12-31 falls in the first week of 2025.
    assert_eq!(GregorianDate::ymd(2024, 12, 31).week_of_year(), 1);
    assert_eq!(GregorianDate::ymd(2024, 12, 28).week_of_year(), 52);
    assert_eq!(GregorianDate::ymd(2024, 7, 4).week_of_year(), 27);
}

#[test]
fn week_of_month_counts_leading_days() {
    // September 2024 starts on a Sunday.
    let first = GregorianDate::ymd(2024, 9, 1);
    assert_eq!(first.week_of_month(Weekday::Sunday), 1);
    assert_eq!(GregorianDate::ymd(2024, 9, 8).week_of_month(Weekday::Sunday), 2);
    // Only one day precedes the first Monday.
    assert_eq!(first.week_of_month(Weekday::Monday), 0);
    assert_eq!(GregorianDate::ymd(2024, 9, 2).week_of_month(Weekday::Monday), 1);

    // June 2024 starts on a Saturday; five days precede the first Thursday.
    let june = GregorianDate::ymd(2024, 6, 1);
    assert_eq!(june.week_of_month(Weekday::Thursday), 1);
    assert_eq!(GregorianDate::ymd(2024, 6, 6).week_of_month(Weekday::Thursday), 2);
    assert_eq!(june.week_of_month(Weekday::Sunday), 0);
}

#[test]
fn day_of_year() {
    assert_eq!(GregorianDate::ymd(2024, 12, 31).day_of_year(), 366);
    assert_eq!(JulianDate::ymd(1900, 3, 1).day_of_year(), 61);
    assert_eq!(HebrewDate::ymd(5776, 7, 1).day_of_year(), 1);
    // Nisan 1 of a leap year follows 13 months of Tishri..Adar II.
    assert_eq!(HebrewCalendar::days_in_year(5776), 385);
    assert_eq!(HebrewDate::ymd(5776, 1, 1).day_of_year(), 209);
    assert_eq!(IslamicDate::ymd(2, 12, 30).day_of_year(), 355);
}

#[test]
fn cross_calendar_anchors() {
    let greg = CalendarKind::Gregorian.new_date(DateFields::ymd(2000, 1, 1));
    let julian = greg.convert(CalendarKind::Julian);
    assert_eq!((julian.year(), julian.month(), julian.day()), (1999, 12, 19));

    let greg = CalendarKind::Gregorian.new_date(DateFields::ymd(2015, 9, 14));
    let hebrew = greg.convert(CalendarKind::Hebrew);
    assert_eq!((hebrew.year(), hebrew.month(), hebrew.day()), (5776, 7, 1));

    let greg = CalendarKind::Gregorian.new_date(DateFields::ymd(2015, 10, 15));
    let islamic = greg.convert(CalendarKind::Islamic);
    assert_eq!((islamic.year(), islamic.month(), islamic.day()), (1437, 1, 1));

    for kind in CalendarKind::ALL {
        let there = greg.convert(kind);
        assert_eq!(there.day_of_week(), Weekday::Thursday, "{kind}");
        assert_eq!(there.convert(CalendarKind::Gregorian).fields(), greg.fields());
    }
}

#[test]
fn integer_steps_advance_civil_days() {
    for kind in CalendarKind::ALL {
        let start = kind.new_date(DateInput::JulianDay(2_460_000.5));
        let mut date = start.clone();
        for step in 1..=800 {
            let next = date.add_days(1);
            assert_eq!(
                next.day_of_week(),
                Weekday::from_index(date.day_of_week().index() as i64 + 1),
                "{kind} step {step}"
            );
            assert!(next.rata_die() > date.rata_die());
            date = next;
        }
        assert_eq!(date.julian_day().get() - start.julian_day().get(), 800.0);
    }
}

#[test]
fn years_beyond_range_are_clamped() {
    for kind in CalendarKind::ALL {
        let top = kind.new_date(DateFields::ymd(MAX_YEAR, 1, 1));
        assert_eq!((top.year(), top.month(), top.day()), (MAX_YEAR, 1, 1), "{kind}");
        assert_eq!(kind.new_date(DateFields::ymd(i32::MAX, 1, 1)), top, "{kind}");

        let bottom = kind.new_date(DateFields::ymd(MIN_YEAR, 1, 1));
        assert_eq!(bottom.year(), MIN_YEAR, "{kind}");
        assert_eq!(kind.new_date(DateFields::ymd(i32::MIN, 1, 1)), bottom, "{kind}");
        assert!(bottom.rata_die().get().abs() < MAX_ORDINAL_DAYS);
    }
}

#[test]
fn ordinals_beyond_range_are_clamped() {
    let far = GregorianDate::new(DateInput::JulianDay(1e12));
    assert_eq!(far.rata_die().get(), MAX_ORDINAL_DAYS);
    assert!(far.year() > MAX_YEAR);
    assert_eq!(far, GregorianDate::from_rata_die(RataDie::new(MAX_ORDINAL_DAYS)));

    let past = JulianDate::new(DateInput::RataDie(f64::NEG_INFINITY));
    assert_eq!(past.rata_die().get(), -MAX_ORDINAL_DAYS);

    let nan = HebrewDate::new(DateInput::JulianDay(f64::NAN));
    assert_eq!(nan.rata_die().get(), 0.0);
    assert_eq!(nan, HebrewDate::from_rata_die(RataDie::new(0.0)));

    let stepped = far.add_days(1_000);
    assert_eq!(stepped.rata_die().get(), MAX_ORDINAL_DAYS);
}
