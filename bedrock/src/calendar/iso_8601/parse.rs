#![allow(
  clippy::cast_possible_truncation,
  reason = "fixed-width fields have at most 4 digits and are validated before use"
)]

use crate::calendar::{
  CalendarError, Date, DateTime, DateTimeTz, DateTz, Duration, MILLISECONDS_PER_DAY,
  MILLISECONDS_PER_SECOND, Time, TimeTz,
};

const MAX_DIGITS: usize = 10;
const MIN_DATE_LEN: usize = 10;
const MIN_DATE_TIME_LEN: usize = 19;
const MIN_TIME_LEN: usize = 8;

/// Fields of a clock time exactly as they were found in the input.
#[derive(Debug, PartialEq)]
struct RawTime {
  hour: u8,
  minute: u8,
  second: u8,
  /// Rounded from the fraction, which means that `1000` is possible.
  millisecond: u16,
  /// `:60` was found. `second` was clamped to `59`.
  has_leap_second: bool,
}

impl RawTime {
  fn is_end_of_day(&self) -> bool {
    self.hour == 24
  }

  /// `24:00:00.000` is only valid without sub-fields and without timezone conversions.
  fn check_end_of_day(&self, offset: i16) -> Result<(), CalendarError> {
    if self.is_end_of_day()
      && (self.minute != 0
        || self.second != 0
        || self.millisecond != 0
        || self.has_leap_second
        || offset != 0)
    {
      _debug!("rejected `24:00` combined with sub-fields or timezone");
      return Err(CalendarError::InvalidParsingClockTime);
    }
    Ok(())
  }

  /// Local time of the day, `24:00` being midnight, with leap seconds and rounded milliseconds
  /// applied. The result wraps around midnight.
  fn local_time(&self) -> Result<Time, CalendarError> {
    let hour = if self.is_end_of_day() { 0 } else { self.hour };
    let time = Time::from_hms(hour, self.minute, self.second)?;
    let mut milliseconds = i64::from(self.millisecond);
    if self.has_leap_second {
      milliseconds = milliseconds.wrapping_add(MILLISECONDS_PER_SECOND.into());
    }
    Ok(time.wrapping_add(Duration::from_milliseconds(milliseconds)))
  }
}

pub(crate) fn date(bytes: &[u8]) -> Result<Date, CalendarError> {
  check_len(bytes, MIN_DATE_LEN)?;
  let ((year, month, day), rest) = parse_date(bytes)?;
  let date = Date::from_ymd(year, month, day)?;
  // Plain dates have nowhere to store the offset.
  let _offset = parse_trailing_time_zone(rest)?;
  Ok(date)
}

pub(crate) fn date_time(bytes: &[u8]) -> Result<DateTime, CalendarError> {
  let date_time_tz = date_time_tz(bytes)?;
  date_time_tz.utc_date_time().map_err(|_err| {
    _debug!("UTC normalization of a parsed datetime is out of range");
    CalendarError::ParsedValueOutOfRange
  })
}

pub(crate) fn date_time_tz(bytes: &[u8]) -> Result<DateTimeTz, CalendarError> {
  check_len(bytes, MIN_DATE_TIME_LEN)?;
  let ((year, month, day), mut rest) = parse_date(bytes)?;
  rest = parse_literal(rest, b'T')?;
  let (raw, rest) = parse_time(rest)?;
  let offset = parse_trailing_time_zone(rest)?;
  raw.check_end_of_day(offset)?;

  // Leap seconds, a rounded millisecond of `1000` and `24:00` can not be directly represented.
  // The closest valid value is constructed first and then moved forward.
  let mut adjustment: i64 = 0;
  let mut hour = raw.hour;
  let mut millisecond = raw.millisecond;
  if raw.is_end_of_day() {
    hour = 0;
    adjustment = adjustment.wrapping_add(MILLISECONDS_PER_DAY.into());
  }
  if raw.has_leap_second {
    adjustment = adjustment.wrapping_add(MILLISECONDS_PER_SECOND.into());
  }
  if u32::from(millisecond) == MILLISECONDS_PER_SECOND {
    millisecond = 0;
    adjustment = adjustment.wrapping_add(MILLISECONDS_PER_SECOND.into());
  }

  let date = Date::from_ymd(year, month, day)?;
  let time = Time::from_hms_ms(hour, raw.minute, raw.second, millisecond)?;
  let local = DateTime::new(date, time).add(Duration::from_milliseconds(adjustment)).map_err(
    |_err| {
      _debug!("adjustment of a parsed datetime is out of range");
      CalendarError::ParsedValueOutOfRange
    },
  )?;
  DateTimeTz::new(local, offset)
}

pub(crate) fn date_tz(bytes: &[u8]) -> Result<DateTz, CalendarError> {
  check_len(bytes, MIN_DATE_LEN)?;
  let ((year, month, day), rest) = parse_date(bytes)?;
  let date = Date::from_ymd(year, month, day)?;
  let offset = parse_trailing_time_zone(rest)?;
  DateTz::new(date, offset)
}

pub(crate) fn time(bytes: &[u8]) -> Result<Time, CalendarError> {
  let (local, offset) = parse_local_time(bytes)?;
  Ok(TimeTz::new(local, offset)?.utc_time())
}

pub(crate) fn time_tz(bytes: &[u8]) -> Result<TimeTz, CalendarError> {
  let (local, offset) = parse_local_time(bytes)?;
  TimeTz::new(local, offset)
}

fn check_len(bytes: &[u8], expected: usize) -> Result<(), CalendarError> {
  if bytes.len() < expected {
    return Err(CalendarError::InvalidParsingLength { expected, received: bytes.len() });
  }
  Ok(())
}

/// `hh:mm:ss[.d+][(Z|±hh:mm)]` followed by nothing else.
fn parse_local_time(bytes: &[u8]) -> Result<(Time, i16), CalendarError> {
  check_len(bytes, MIN_TIME_LEN)?;
  let (raw, rest) = parse_time(bytes)?;
  let offset = parse_trailing_time_zone(rest)?;
  raw.check_end_of_day(offset)?;
  Ok((raw.local_time()?, offset))
}

/// `YYYY-MM-DD`
fn parse_date(bytes: &[u8]) -> Result<((u16, u8, u8), &[u8]), CalendarError> {
  let (year, rest) = parse_fixed_uint(bytes, 4)?;
  let rest = parse_literal(rest, b'-')?;
  let (month, rest) = parse_fixed_uint(rest, 2)?;
  let rest = parse_literal(rest, b'-')?;
  let (day, rest) = parse_fixed_uint(rest, 2)?;
  Ok(((year as u16, month as u8, day as u8), rest))
}

/// An unsigned integer with exactly `width` digits.
fn parse_fixed_uint(bytes: &[u8], width: usize) -> Result<(u64, &[u8]), CalendarError> {
  let (num, rest) = parse_uint(bytes)?;
  if bytes.len().wrapping_sub(rest.len()) != width {
    return Err(CalendarError::InvalidParsingBytes);
  }
  Ok((num, rest))
}

/// Milliseconds of the digits that follow a `.`. Only the first four digits are considered and
/// the result is rounded, half up, to the nearest millisecond.
fn parse_fraction(bytes: &[u8]) -> Result<(u16, &[u8]), CalendarError> {
  let digits = bytes.iter().take_while(|elem| elem.is_ascii_digit()).count();
  if digits == 0 {
    return Err(CalendarError::InvalidParsingBytes);
  }
  let mut tenths_of_ms: u16 = 0;
  for idx in 0..4 {
    let digit = bytes.get(idx).filter(|_| idx < digits).map_or(0, |elem| elem.wrapping_sub(b'0'));
    tenths_of_ms = tenths_of_ms.wrapping_mul(10).wrapping_add(digit.into());
  }
  let rest = bytes.get(digits..).unwrap_or_default();
  Ok((tenths_of_ms.wrapping_add(5) / 10, rest))
}

fn parse_literal(bytes: &[u8], literal: u8) -> Result<&[u8], CalendarError> {
  match bytes {
    [first, rest @ ..] if *first == literal => Ok(rest),
    _ => Err(CalendarError::InvalidParsingBytes),
  }
}

/// `hh:mm:ss[.d+]`. Nothing after the pattern is inspected.
fn parse_time(bytes: &[u8]) -> Result<(RawTime, &[u8]), CalendarError> {
  let (hour, rest) = parse_fixed_uint(bytes, 2)?;
  let rest = parse_literal(rest, b':')?;
  let (minute, rest) = parse_fixed_uint(rest, 2)?;
  let rest = parse_literal(rest, b':')?;
  let (mut second, mut rest) = parse_fixed_uint(rest, 2)?;
  let mut millisecond = 0;
  if let [b'.', fraction @ ..] = rest {
    (millisecond, rest) = parse_fraction(fraction)?;
  }
  let has_leap_second = second == 60;
  if has_leap_second {
    second = 59;
  }
  let raw = RawTime {
    hour: hour as u8,
    minute: minute as u8,
    second: second as u8,
    millisecond,
    has_leap_second,
  };
  Ok((raw, rest))
}

/// `Z`, `z` or `±hh:mm` where `hh` is within `[0, 24)` and `mm` is within `[0, 60)`.
fn parse_time_zone_offset(bytes: &[u8]) -> Result<(i16, &[u8]), CalendarError> {
  let (is_neg, rest) = match bytes {
    [b'Z' | b'z', rest @ ..] => return Ok((0, rest)),
    [b'+', rest @ ..] => (false, rest),
    [b'-', rest @ ..] => (true, rest),
    _ => return Err(CalendarError::InvalidParsingTimezone),
  };
  let map_err = |_err| CalendarError::InvalidParsingTimezone;
  let (hour, rest) = parse_fixed_uint(rest, 2).map_err(map_err)?;
  let rest = parse_literal(rest, b':').map_err(map_err)?;
  let (minute, rest) = parse_fixed_uint(rest, 2).map_err(map_err)?;
  if hour >= 24 || minute >= 60 {
    return Err(CalendarError::InvalidParsingTimezone);
  }
  let minutes = (hour * 60 + minute) as i16;
  Ok((if is_neg { -minutes } else { minutes }, rest))
}

/// Absent or a single timezone token that consumes all remaining bytes.
fn parse_trailing_time_zone(bytes: &[u8]) -> Result<i16, CalendarError> {
  if bytes.is_empty() {
    return Ok(0);
  }
  let (offset, rest) = parse_time_zone_offset(bytes)?;
  if !rest.is_empty() {
    return Err(CalendarError::InvalidParsingBytes);
  }
  Ok(offset)
}

/// Up to 10 digits. Stops at the first non-digit, which is not an error.
fn parse_uint(bytes: &[u8]) -> Result<(u64, &[u8]), CalendarError> {
  let digits = bytes.iter().take(MAX_DIGITS.wrapping_add(1)).take_while(|el| el.is_ascii_digit());
  let len = digits.clone().count();
  if len == 0 || len > MAX_DIGITS {
    return Err(CalendarError::InvalidParsingBytes);
  }
  let num = digits.fold(0u64, |acc, elem| {
    acc.wrapping_mul(10).wrapping_add(u64::from(elem.wrapping_sub(b'0')))
  });
  Ok((num, bytes.get(len..).unwrap_or_default()))
}
