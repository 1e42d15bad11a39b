use crate::{
  Error,
  calendar::{
    CalendarError, Date, DateTime, DateTimeTz, DateTz, Duration, Time, TimeTz,
    iso_8601::{
      DATE_STRLEN, DATETIME_STRLEN, DATETIMETZ_STRLEN, Iso8601, Iso8601Config, MAX_STRLEN,
      TIME_STRLEN, generate, generate_raw, parse,
    },
  },
};
use core::fmt::Debug;

const Z: Iso8601Config = Iso8601Config::new(true);

fn date(year: u16, month: u8, day: u8) -> Date {
  Date::from_ymd(year, month, day).unwrap()
}

fn date_time(ymd: (u16, u8, u8), hms: (u8, u8, u8), ms: u16) -> DateTime {
  DateTime::new(date(ymd.0, ymd.1, ymd.2), time(hms, ms))
}

fn err<T>(string: &str) -> CalendarError
where
  T: Debug + Iso8601,
{
  match parse::<T>(string.as_bytes()) {
    Err(Error::CalendarError(elem)) => elem,
    rslt => panic!("`{string}` should fail with a calendar error but returned {rslt:?}"),
  }
}

fn ok<T>(string: &str) -> T
where
  T: Iso8601,
{
  parse::<T>(string.as_bytes()).unwrap()
}

fn time(hms: (u8, u8, u8), ms: u16) -> Time {
  Time::from_hms_ms(hms.0, hms.1, hms.2, ms).unwrap()
}

#[test]
fn canonical_widths() {
  let dt = date_time((2020, 1, 2), (3, 4, 5), 6);
  assert_eq!(Date::MIN.to_iso_8601(Iso8601Config::default()).len(), DATE_STRLEN);
  assert_eq!(Time::ZERO.to_iso_8601(Iso8601Config::default()).len(), TIME_STRLEN);
  assert_eq!(dt.to_iso_8601(Iso8601Config::default()).as_str(), "2020-01-02T03:04:05.006");
  assert_eq!(dt.to_iso_8601(Iso8601Config::default()).len(), DATETIME_STRLEN);
  let utc = DateTimeTz::new(dt, 0).unwrap();
  assert_eq!(utc.to_iso_8601(Iso8601Config::default()).len(), DATETIMETZ_STRLEN);
  assert_eq!(utc.to_iso_8601(Z).len(), DATETIME_STRLEN + 1);
}

#[test]
fn owned_generation_holds_the_widest_value() {
  let value = DateTimeTz::new(date_time((9999, 12, 31), (23, 59, 59), 999), -1439).unwrap();
  let string = value.to_iso_8601(Iso8601Config::default());
  assert_eq!(string.as_str(), "9999-12-31T23:59:59.999-23:59");
  assert_eq!(string.len(), MAX_STRLEN);
  let mut raw = [0; MAX_STRLEN];
  assert_eq!(generate_raw(&value, &mut raw, Iso8601Config::default()), MAX_STRLEN);
  assert_eq!(string.as_bytes(), raw);
}

#[test]
fn generate_into_buffers_of_different_sizes() {
  let value = date(2020, 1, 2);

  let mut small = [b'x'; 5];
  assert_eq!(generate(&value, &mut small, Iso8601Config::default()), DATE_STRLEN);
  assert_eq!(&small, b"2020-");

  let mut exact = [b'x'; DATE_STRLEN];
  assert_eq!(generate(&value, &mut exact, Iso8601Config::default()), DATE_STRLEN);
  assert_eq!(&exact, b"2020-01-02");

  let mut large = [b'x'; DATE_STRLEN + 2];
  assert_eq!(generate(&value, &mut large, Iso8601Config::default()), DATE_STRLEN);
  assert_eq!(&large, b"2020-01-02\0x");

  let mut empty: [u8; 0] = [];
  assert_eq!(generate(&value, &mut empty, Iso8601Config::default()), DATE_STRLEN);
}

#[test]
fn generate_raw_writes_exactly_the_canonical_width() {
  let value = TimeTz::new(time((23, 59, 59), 999), -90).unwrap();
  let mut buffer = [b'x'; 20];
  assert_eq!(generate_raw(&value, &mut buffer, Iso8601Config::default()), 18);
  assert_eq!(&buffer, b"23:59:59.999-01:30xx");
}

#[should_panic]
#[test]
fn generate_raw_panics_with_small_buffers() {
  let mut buffer = [0; DATETIME_STRLEN - 1];
  let _len = generate_raw(&DateTime::MAX, &mut buffer, Iso8601Config::default());
}

#[test]
fn generate_time_zones() {
  let dt = date_time((1999, 12, 31), (0, 0, 0), 0);
  let tz = |offset| DateTimeTz::new(dt, offset).unwrap();
  assert_eq!(tz(0).to_iso_8601(Iso8601Config::default()).as_str(), "1999-12-31T00:00:00.000+00:00");
  assert_eq!(tz(0).to_iso_8601(Z).as_str(), "1999-12-31T00:00:00.000Z");
  assert_eq!(tz(1439).to_iso_8601(Z).as_str(), "1999-12-31T00:00:00.000+23:59");
  assert_eq!(tz(-1439).to_iso_8601(Z).as_str(), "1999-12-31T00:00:00.000-23:59");
  assert_eq!(tz(-1).to_iso_8601(Z).as_str(), "1999-12-31T00:00:00.000-00:01");
  let date_tz = DateTz::new(date(1, 1, 1), 330).unwrap();
  assert_eq!(date_tz.to_iso_8601(Z).as_str(), "0001-01-01+05:30");
}

#[test]
fn parse_24_00() {
  assert_eq!(ok::<DateTime>("2021-06-30T24:00:00.000"), date_time((2021, 7, 1), (0, 0, 0), 0));
  assert_eq!(ok::<DateTime>("2021-12-31T24:00:00"), date_time((2022, 1, 1), (0, 0, 0), 0));
  assert_eq!(
    ok::<DateTimeTz>("2021-06-30T24:00:00Z").local_date_time(),
    date_time((2021, 7, 1), (0, 0, 0), 0)
  );
  assert_eq!(ok::<Time>("24:00:00.000"), Time::ZERO);
  assert_eq!(ok::<TimeTz>("24:00:00+00:00").local_time(), Time::ZERO);

  assert_eq!(err::<DateTime>("2021-06-30T24:00:01.000"), CalendarError::InvalidParsingClockTime);
  assert_eq!(err::<DateTime>("2021-06-30T24:01:00"), CalendarError::InvalidParsingClockTime);
  assert_eq!(err::<DateTime>("2021-06-30T24:00:00.0005"), CalendarError::InvalidParsingClockTime);
  assert_eq!(err::<DateTime>("2021-06-30T24:00:60"), CalendarError::InvalidParsingClockTime);
  assert_eq!(err::<Time>("24:00:00+01:00"), CalendarError::InvalidParsingClockTime);
  assert_eq!(err::<TimeTz>("24:00:00-00:01"), CalendarError::InvalidParsingClockTime);
  assert_eq!(err::<DateTime>("9999-12-31T24:00:00"), CalendarError::ParsedValueOutOfRange);
  assert_eq!(err::<Time>("25:00:00"), CalendarError::InvalidHour { received: 25 });
}

#[test]
fn parse_dates() {
  assert_eq!(ok::<Date>("2020-02-29"), date(2020, 2, 29));
  assert_eq!(ok::<Date>("2020-02-29+05:00"), date(2020, 2, 29));
  assert_eq!(ok::<Date>("2020-02-29z"), date(2020, 2, 29));
  let date_tz = ok::<DateTz>("2020-02-29-05:00");
  assert_eq!((date_tz.local_date(), date_tz.offset()), (date(2020, 2, 29), -300));
  assert_eq!(ok::<DateTz>("2020-02-29").offset(), 0);

  assert_eq!(err::<Date>("2021-02-29"), CalendarError::InvalidMonthDay { received: 29 });
  assert_eq!(err::<Date>("2021-13-01"), CalendarError::InvalidMonth { received: 13 });
  assert_eq!(err::<Date>("0000-01-01"), CalendarError::InvalidYear { received: 0 });
  assert_eq!(err::<Date>("2021-1-011"), CalendarError::InvalidParsingBytes);
  assert_eq!(err::<Date>("02021-01-01"), CalendarError::InvalidParsingBytes);
  assert_eq!(err::<Date>("2021/01/01"), CalendarError::InvalidParsingBytes);
  assert_eq!(err::<Date>("2021-01-01T"), CalendarError::InvalidParsingTimezone);
  assert_eq!(err::<Date>("2021-01-01Z "), CalendarError::InvalidParsingBytes);
  assert_eq!(err::<DateTz>("2021-01-01+1:00"), CalendarError::InvalidParsingTimezone);
}

#[test]
fn parse_date_times() {
  assert_eq!(ok::<DateTime>("2020-01-02T03:04:05"), date_time((2020, 1, 2), (3, 4, 5), 0));
  assert_eq!(ok::<DateTime>("2020-01-02T03:04:05.6"), date_time((2020, 1, 2), (3, 4, 5), 600));
  assert_eq!(
    ok::<DateTime>("2020-01-02T03:04:05.123456789"),
    date_time((2020, 1, 2), (3, 4, 5), 123)
  );
  assert_eq!(
    ok::<DateTime>("2020-01-01T01:00:00.000+02:00"),
    date_time((2019, 12, 31), (23, 0, 0), 0)
  );
  assert_eq!(
    ok::<DateTimeTz>("2020-01-01T01:00:00.000+02:00"),
    DateTimeTz::new(date_time((2020, 1, 1), (1, 0, 0), 0), 120).unwrap()
  );
  assert_eq!(err::<DateTime>("2020-01-02t03:04:05"), CalendarError::InvalidParsingBytes);
  assert_eq!(err::<DateTime>("2020-01-02T03:04:05."), CalendarError::InvalidParsingBytes);
  assert_eq!(err::<DateTime>("2020-01-02T03:04:05.1+"), CalendarError::InvalidParsingTimezone);
  assert_eq!(err::<DateTime>("2020-01-02T03:04:61"), CalendarError::InvalidSecond { received: 61 });
}

#[test]
fn parse_fractions() {
  assert_eq!(ok::<Time>("10:00:00.12345"), time((10, 0, 0), 123));
  assert_eq!(ok::<Time>("10:00:00.1235"), time((10, 0, 0), 124));
  assert_eq!(ok::<Time>("10:00:00.9994"), time((10, 0, 0), 999));
  assert_eq!(ok::<Time>("10:00:00.9995"), time((10, 0, 1), 0));
  assert_eq!(ok::<Time>("23:59:59.99951"), Time::ZERO);
  assert_eq!(ok::<DateTime>("2000-01-01T23:59:59.9995"), date_time((2000, 1, 2), (0, 0, 0), 0));
  assert_eq!(err::<DateTime>("9999-12-31T23:59:59.9995"), CalendarError::ParsedValueOutOfRange);
}

#[test]
fn parse_leap_seconds() {
  assert_eq!(ok::<DateTime>("2021-06-30T23:59:60.000Z"), date_time((2021, 7, 1), (0, 0, 0), 0));
  assert_eq!(
    ok::<DateTime>("2021-06-30T23:59:60.000Z"),
    ok::<DateTime>("2021-06-30T23:59:59.000Z").add(Duration::from_milliseconds(1_000)).unwrap()
  );
  assert_eq!(ok::<DateTime>("2021-06-30T12:30:60.5"), date_time((2021, 6, 30), (12, 31, 0), 500));
  assert_eq!(
    ok::<DateTimeTz>("2016-12-31T23:59:60+01:00"),
    DateTimeTz::new(date_time((2017, 1, 1), (0, 0, 0), 0), 60).unwrap()
  );
  assert_eq!(ok::<TimeTz>("23:59:60.5").local_time(), time((0, 0, 0), 500));
  assert_eq!(err::<DateTime>("9999-12-31T23:59:60"), CalendarError::ParsedValueOutOfRange);
}

#[test]
fn parse_lengths() {
  assert_eq!(
    err::<Date>("2020-1-01"),
    CalendarError::InvalidParsingLength { expected: 10, received: 9 }
  );
  assert_eq!(err::<DateTz>(""), CalendarError::InvalidParsingLength { expected: 10, received: 0 });
  assert_eq!(
    err::<DateTime>("2020-01-01T10:00"),
    CalendarError::InvalidParsingLength { expected: 19, received: 16 }
  );
  assert_eq!(
    err::<DateTimeTz>("2020-01-01"),
    CalendarError::InvalidParsingLength { expected: 19, received: 10 }
  );
  assert_eq!(
    err::<Time>("10:00:0"),
    CalendarError::InvalidParsingLength { expected: 8, received: 7 }
  );
  assert_eq!(err::<TimeTz>("1"), CalendarError::InvalidParsingLength { expected: 8, received: 1 });
}

#[test]
fn parse_out_of_range_utc_normalizations() {
  let out_of_range = CalendarError::ParsedValueOutOfRange;
  assert_eq!(err::<DateTime>("0001-01-01T00:00:00+00:01"), out_of_range);
  assert_eq!(err::<DateTime>("9999-12-31T23:59:59.999-00:01"), out_of_range);
  assert_eq!(ok::<DateTime>("0001-01-01T00:00:00-00:01"), date_time((1, 1, 1), (0, 1, 0), 0));
  let tz = ok::<DateTimeTz>("9999-12-31T23:59:59.999-00:01");
  assert_eq!((tz.local_date_time(), tz.offset()), (DateTime::MAX, -1));
}

#[test]
fn parse_times() {
  assert_eq!(ok::<Time>("10:00:00-00:00"), ok::<Time>("10:00:00Z"));
  assert_eq!(ok::<TimeTz>("10:00:00-00:00"), ok::<TimeTz>("10:00:00Z"));
  assert_eq!(ok::<Time>("10:00:00+01:00"), time((9, 0, 0), 0));
  assert_eq!(ok::<Time>("01:00:00+02:00"), time((23, 0, 0), 0));
  assert_eq!(ok::<Time>("23:00:00-02:30"), time((1, 30, 0), 0));
  let time_tz = ok::<TimeTz>("01:00:00.5+02:00");
  assert_eq!((time_tz.local_time(), time_tz.offset()), (time((1, 0, 0), 500), 120));
  assert_eq!(err::<Time>("10:00:00+24:00"), CalendarError::InvalidParsingTimezone);
  assert_eq!(err::<TimeTz>("10:00:00+23:60"), CalendarError::InvalidParsingTimezone);
  assert_eq!(err::<Time>("10:00:00 "), CalendarError::InvalidParsingTimezone);
  assert_eq!(err::<Time>("10:0:000"), CalendarError::InvalidParsingBytes);
  assert_eq!(err::<Time>("10:60:00"), CalendarError::InvalidMinute { received: 60 });
}

#[test]
fn round_trips() {
  for offset in [-1439, -60, 0, 1, 330, 1439] {
    for config in [Iso8601Config::default(), Z] {
      let dt = DateTimeTz::new(date_time((2024, 2, 29), (12, 34, 56), 789), offset).unwrap();
      assert_eq!(ok::<DateTimeTz>(&dt.to_iso_8601(config)), dt);
      let dtz = DateTz::new(date(1582, 10, 15), offset).unwrap();
      assert_eq!(ok::<DateTz>(&dtz.to_iso_8601(config)), dtz);
      let ttz = TimeTz::new(Time::MAX, offset).unwrap();
      assert_eq!(ok::<TimeTz>(&ttz.to_iso_8601(config)), ttz);
    }
  }
  for value in [DateTime::MIN, DateTime::EPOCH, DateTime::MAX] {
    assert_eq!(ok::<DateTime>(&value.to_iso_8601(Iso8601Config::default())), value);
  }
}

#[cfg(feature = "serde")]
#[test]
fn serde_uses_iso_8601_strings() {
  let value = DateTimeTz::new(date_time((2020, 1, 2), (3, 4, 5), 6), -90).unwrap();
  let json = serde_json::to_string(&value).unwrap();
  assert_eq!(json, r#""2020-01-02T03:04:05.006-01:30""#);
  assert_eq!(serde_json::from_str::<DateTimeTz>(&json).unwrap(), value);
  assert_eq!(serde_json::from_str::<Date>(r#""2020-01-02Z""#).unwrap(), date(2020, 1, 2));
  assert!(serde_json::from_str::<Time>(r#""25:00:00""#).is_err());
  let config = serde_json::from_str::<Iso8601Config>(r#"{"use_z_abbreviation_for_utc":true}"#);
  assert_eq!(config.unwrap(), Z);
}

#[cfg(feature = "_proptest")]
#[cfg(test)]
mod _proptest {
  use crate::calendar::{
    Date, DateTime, DateTimeTz, Duration, Time, TimeTz,
    iso_8601::{Iso8601, Iso8601Config},
  };

  #[test_strategy::proptest]
  fn date_time_tz(
    #[strategy(0i64..315_537_897_600_000)] ce_milliseconds: i64,
    #[strategy(-1439i16..=1439)] offset: i16,
    use_z: bool,
  ) {
    let config = Iso8601Config::new(use_z);
    let dt = DateTime::from_ce_milliseconds(ce_milliseconds).unwrap();
    assert_eq!(DateTime::parse_iso_8601(dt.to_iso_8601(config).as_bytes()).unwrap(), dt);
    let dt_tz = DateTimeTz::new(dt, offset).unwrap();
    let string = dt_tz.to_iso_8601(config);
    assert_eq!(DateTimeTz::parse_iso_8601(string.as_bytes()).unwrap(), dt_tz);
    assert_eq!(Date::parse_iso_8601(&string.as_bytes()[..10]).unwrap(), dt.date());
  }

  #[test_strategy::proptest]
  fn time_tz(
    #[strategy(0i64..86_400_000)] milliseconds: i64,
    #[strategy(-1439i16..=1439)] offset: i16,
  ) {
    let time = Time::ZERO.wrapping_add(Duration::from_milliseconds(milliseconds));
    let string = TimeTz::new(time, offset).unwrap().to_iso_8601(Iso8601Config::default());
    let time_tz = TimeTz::parse_iso_8601(string.as_bytes()).unwrap();
    assert_eq!((time_tz.local_time(), time_tz.offset()), (time, offset));
    let utc = Time::parse_iso_8601(string.as_bytes()).unwrap();
    assert_eq!(TimeTz::new(time, offset).unwrap().utc_time(), utc);
  }
}
