//! ISO-8601

#![no_main]

use bedrock::calendar::{
  Date, DateTime, DateTimeTz, DateTz, Time, TimeTz,
  iso_8601::{Iso8601, Iso8601Config},
};

fn round_trip<T>(value: T, config: Iso8601Config)
where
  T: Iso8601 + PartialEq,
{
  let string = value.to_iso_8601(config);
  assert!(T::parse_iso_8601(string.as_bytes()).is_ok_and(|elem| elem == value));
}

libfuzzer_sys::fuzz_target!(|data: (DateTimeTz, DateTz, TimeTz, bool, &[u8])| {
  let (date_time_tz, date_tz, time_tz, use_z, bytes) = data;
  let config = Iso8601Config::new(use_z);
  round_trip(date_time_tz, config);
  round_trip(date_time_tz.local_date_time(), config);
  round_trip(date_tz, config);
  round_trip(date_tz.local_date(), config);
  round_trip(time_tz, config);
  round_trip(time_tz.local_time(), config);
  let _rslt = Date::parse_iso_8601(bytes);
  let _rslt = DateTime::parse_iso_8601(bytes);
  let _rslt = DateTimeTz::parse_iso_8601(bytes);
  let _rslt = DateTz::parse_iso_8601(bytes);
  let _rslt = Time::parse_iso_8601(bytes);
  let _rslt = TimeTz::parse_iso_8601(bytes);
});
