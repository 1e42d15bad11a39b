
use crate::calendar::{
  CalendarError, Date, Duration, EPOCH_CE_DAYS, MILLISECONDS_PER_DAY, Time,
  iso_8601::{Iso8601 as _, Iso8601Config},
  misc::{i32i64, u32i64},
};
use core::{
  fmt::{Debug, Display, Formatter},
  str::FromStr,
};

/// Date and clock time without timezone information.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct DateTime {
  date: Date,
  time: Time,
}

impl DateTime {
  /// Instance that refers the UNIX epoch (1970-01-01T00:00:00.000).
  pub const EPOCH: Self = Self::new(Date::EPOCH, Time::ZERO);
  /// Instance with the maximum allowed value of `9999-12-31T23:59:59.999`
  pub const MAX: Self = Self::new(Date::MAX, Time::MAX);
  /// Instance with the minimum allowed value of `0001-01-01T00:00:00.000`
  pub const MIN: Self = Self::new(Date::MIN, Time::ZERO);

  /// Creates a new instance from the number of milliseconds elapsed since `MIN`.
  #[allow(clippy::cast_possible_truncation, reason = "`Date::from_ce_days` validates the range")]
  #[inline]
  pub const fn from_ce_milliseconds(milliseconds: i64) -> Result<Self, CalendarError> {
    let day = u32i64(MILLISECONDS_PER_DAY);
    let days = milliseconds.div_euclid(day).saturating_add(1);
    if days < 1 || days > i32i64(Date::MAX_CE_DAYS) {
      return Err(CalendarError::ArithmeticOverflow);
    }
    let date = match Date::from_ce_days(days as i32) {
      Ok(elem) => elem,
      Err(err) => return Err(err),
    };
    Ok(Self::new(date, Time::from_milliseconds_since_mn(milliseconds.rem_euclid(day))))
  }

  /// New instance from basic parameters
  #[inline]
  pub const fn new(date: Date, time: Time) -> Self {
    Self { date, time }
  }

  /// Computes `self + duration`, returning an error if the result is outside the `MIN..=MAX`
  /// range.
  #[inline]
  pub const fn add(self, duration: Duration) -> Result<Self, CalendarError> {
    if duration.is_zero() {
      return Ok(self);
    }
    let Some(sum) = self.ce_milliseconds().checked_add(duration.milliseconds()) else {
      return Err(CalendarError::ArithmeticOverflow);
    };
    Self::from_ce_milliseconds(sum)
  }

  /// Number of milliseconds elapsed since `MIN`.
  #[inline]
  pub const fn ce_milliseconds(self) -> i64 {
    i32i64(self.date.ce_days())
      .wrapping_sub(1)
      .wrapping_mul(u32i64(MILLISECONDS_PER_DAY))
      .wrapping_add(u32i64(self.time.milliseconds_since_mn()))
  }

  /// See [`Date`].
  #[inline]
  pub const fn date(self) -> Date {
    self.date
  }

  /// Computes `self - rhs`.
  #[inline]
  pub const fn duration_since(self, rhs: Self) -> Duration {
    Duration::from_milliseconds(self.ce_milliseconds().wrapping_sub(rhs.ce_milliseconds()))
  }

  /// Computes `self - duration`, returning an error if the result is outside the `MIN..=MAX`
  /// range.
  #[inline]
  pub const fn sub(self, duration: Duration) -> Result<Self, CalendarError> {
    self.add(duration.neg())
  }

  /// See [`Time`].
  #[inline]
  pub const fn time(self) -> Time {
    self.time
  }

  /// UNIX timestamp in milliseconds.
  #[inline]
  pub const fn timestamp_ms(self) -> i64 {
    let epoch = i32i64(EPOCH_CE_DAYS).wrapping_sub(1).wrapping_mul(u32i64(MILLISECONDS_PER_DAY));
    self.ce_milliseconds().wrapping_sub(epoch)
  }
}

impl Debug for DateTime {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    f.write_str(&self.to_iso_8601(Iso8601Config::default()))
  }
}

impl Default for DateTime {
  #[inline]
  fn default() -> Self {
    Self::MIN
  }
}

impl Display for DateTime {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    f.write_str(&self.to_iso_8601(Iso8601Config::default()))
  }
}

impl FromStr for DateTime {
  type Err = crate::Error;

  #[inline]
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::parse_iso_8601(s.as_bytes())
  }
}

#[cfg(feature = "serde")]
_iso_8601_serde!(DateTime, "a formatted datetime string");

#[cfg(feature = "arbitrary")]
mod arbitrary {
  use crate::calendar::{DateTime, Time};
  use arbitrary::{Arbitrary, Unstructured};

  impl<'any> Arbitrary<'any> for DateTime {
    #[inline]
    fn arbitrary(u: &mut Unstructured<'any>) -> arbitrary::Result<Self> {
      Ok(DateTime::new(u.arbitrary()?, Time::arbitrary(u)?))
    }
  }
}
