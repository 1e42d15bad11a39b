//! Strict ISO-8601 textual codec.
//!
//! | Value type   | Canonical width | Format                          |
//! | ------------ | --------------- | ------------------------------- |
//! | `Date`       | 10              | `YYYY-MM-DD`                    |
//! | `Time`       | 12              | `hh:mm:ss.mmm`                  |
//! | `DateTime`   | 23              | `YYYY-MM-DDThh:mm:ss.mmm`       |
//! | `DateTz`     | 10 + (1 or 6)   | `YYYY-MM-DD(Z\|±hh:mm)`          |
//! | `TimeTz`     | 12 + (1 or 6)   | `hh:mm:ss.mmm(Z\|±hh:mm)`        |
//! | `DateTimeTz` | 23 + (1 or 6)   | `YYYY-MM-DDThh:mm:ss.mmm(Z\|±hh:mm)` |
//!
//! Generation is always fixed-width. Parsing accepts any number of fractional digits, rounding
//! them to milliseconds, leap seconds (`:60`) and the `24:00:00.000` end-of-day notation.

mod config;
mod generate;
mod parse;
#[cfg(test)]
mod tests;

use crate::calendar::{Date, DateTime, DateTimeTz, DateTz, Time, TimeTz};
use arrayvec::ArrayString;
pub use config::Iso8601Config;

/// Number of bytes of a generated `Date`.
pub const DATE_STRLEN: usize = 10;
/// Maximum number of bytes of a generated `DateTz`.
pub const DATETZ_STRLEN: usize = DATE_STRLEN + TZ_STRLEN;
/// Number of bytes of a generated `DateTime`.
pub const DATETIME_STRLEN: usize = 23;
/// Maximum number of bytes of a generated `DateTimeTz`.
pub const DATETIMETZ_STRLEN: usize = DATETIME_STRLEN + TZ_STRLEN;
/// Maximum number of bytes generated by any type.
pub const MAX_STRLEN: usize = DATETIMETZ_STRLEN;
/// Number of bytes of a generated `Time`.
pub const TIME_STRLEN: usize = 12;
/// Maximum number of bytes of a generated `TimeTz`.
pub const TIMETZ_STRLEN: usize = TIME_STRLEN + TZ_STRLEN;

const TZ_STRLEN: usize = 6;

/// Types that have an ISO-8601 representation.
pub trait Iso8601: Sized {
  /// Maximum number of bytes written by [`Iso8601::generate_raw`].
  const STRLEN: usize;

  /// Parses `bytes` using the strict ISO-8601 profile of this crate.
  ///
  /// Nothing is returned on failure, partial results are never produced.
  fn parse_iso_8601(bytes: &[u8]) -> crate::Result<Self>;

  /// Writes the canonical representation of `self` into the beginning of `buffer`, returning the
  /// number of written bytes. A terminator is never written.
  ///
  /// # Panics
  ///
  /// If `buffer` can not hold the canonical representation. `Self::STRLEN` is always enough.
  fn generate_raw(&self, buffer: &mut [u8], config: Iso8601Config) -> usize;

  /// Writes the canonical representation of `self` into `buffer`, returning the number of bytes
  /// the representation requires.
  ///
  /// If `buffer` is smaller than the representation, the output is truncated and no terminator
  /// is written. If `buffer` is larger, a `0` terminator follows the representation.
  #[inline]
  fn generate(&self, buffer: &mut [u8], config: Iso8601Config) -> usize {
    let mut local = [0; MAX_STRLEN];
    let len = self.generate_raw(&mut local, config);
    generate::copy_buf(buffer, local.get(..len).unwrap_or_default())
  }

  /// Owned version of [`Iso8601::generate_raw`].
  #[inline]
  fn to_iso_8601(&self, config: Iso8601Config) -> ArrayString<MAX_STRLEN> {
    let mut local = [0; MAX_STRLEN];
    let len = self.generate_raw(&mut local, config);
    let bytes = local.get(..len).unwrap_or_default();
    ArrayString::from(core::str::from_utf8(bytes).unwrap_or_default()).unwrap_or_default()
  }
}

/// See [`Iso8601::generate`].
#[inline]
pub fn generate<T>(value: &T, buffer: &mut [u8], config: Iso8601Config) -> usize
where
  T: Iso8601,
{
  value.generate(buffer, config)
}

/// See [`Iso8601::generate_raw`].
#[inline]
pub fn generate_raw<T>(value: &T, buffer: &mut [u8], config: Iso8601Config) -> usize
where
  T: Iso8601,
{
  value.generate_raw(buffer, config)
}

/// See [`Iso8601::parse_iso_8601`].
#[inline]
pub fn parse<T>(bytes: &[u8]) -> crate::Result<T>
where
  T: Iso8601,
{
  T::parse_iso_8601(bytes)
}

impl Iso8601 for Date {
  const STRLEN: usize = DATE_STRLEN;

  #[inline]
  fn parse_iso_8601(bytes: &[u8]) -> crate::Result<Self> {
    Ok(parse::date(bytes)?)
  }

  #[inline]
  fn generate_raw(&self, buffer: &mut [u8], _: Iso8601Config) -> usize {
    let mut writer = generate::FixedWriter::new(buffer, DATE_STRLEN);
    writer.date(*self);
    writer.len()
  }
}

impl Iso8601 for DateTime {
  const STRLEN: usize = DATETIME_STRLEN;

  #[inline]
  fn parse_iso_8601(bytes: &[u8]) -> crate::Result<Self> {
    Ok(parse::date_time(bytes)?)
  }

  #[inline]
  fn generate_raw(&self, buffer: &mut [u8], _: Iso8601Config) -> usize {
    let mut writer = generate::FixedWriter::new(buffer, DATETIME_STRLEN);
    writer.date_time(*self);
    writer.len()
  }
}

impl Iso8601 for DateTimeTz {
  const STRLEN: usize = DATETIMETZ_STRLEN;

  #[inline]
  fn parse_iso_8601(bytes: &[u8]) -> crate::Result<Self> {
    Ok(parse::date_time_tz(bytes)?)
  }

  #[inline]
  fn generate_raw(&self, buffer: &mut [u8], config: Iso8601Config) -> usize {
    let len = DATETIME_STRLEN.wrapping_add(generate::tz_len(self.offset(), config));
    let mut writer = generate::FixedWriter::new(buffer, len);
    writer.date_time(self.local_date_time());
    writer.time_zone(self.offset(), config);
    writer.len()
  }
}

impl Iso8601 for DateTz {
  const STRLEN: usize = DATETZ_STRLEN;

  #[inline]
  fn parse_iso_8601(bytes: &[u8]) -> crate::Result<Self> {
    Ok(parse::date_tz(bytes)?)
  }

  #[inline]
  fn generate_raw(&self, buffer: &mut [u8], config: Iso8601Config) -> usize {
    let len = DATE_STRLEN.wrapping_add(generate::tz_len(self.offset(), config));
    let mut writer = generate::FixedWriter::new(buffer, len);
    writer.date(self.local_date());
    writer.time_zone(self.offset(), config);
    writer.len()
  }
}

impl Iso8601 for Time {
  const STRLEN: usize = TIME_STRLEN;

  #[inline]
  fn parse_iso_8601(bytes: &[u8]) -> crate::Result<Self> {
    Ok(parse::time(bytes)?)
  }

  #[inline]
  fn generate_raw(&self, buffer: &mut [u8], _: Iso8601Config) -> usize {
    let mut writer = generate::FixedWriter::new(buffer, TIME_STRLEN);
    writer.time(*self);
    writer.len()
  }
}

impl Iso8601 for TimeTz {
  const STRLEN: usize = TIMETZ_STRLEN;

  #[inline]
  fn parse_iso_8601(bytes: &[u8]) -> crate::Result<Self> {
    Ok(parse::time_tz(bytes)?)
  }

  #[inline]
  fn generate_raw(&self, buffer: &mut [u8], config: Iso8601Config) -> usize {
    let len = TIME_STRLEN.wrapping_add(generate::tz_len(self.offset(), config));
    let mut writer = generate::FixedWriter::new(buffer, len);
    writer.time(self.local_time());
    writer.time_zone(self.offset(), config);
    writer.len()
  }
}
