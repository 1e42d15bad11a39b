use crate::calendar::{
  CalendarError, MILLISECONDS_PER_DAY, MILLISECONDS_PER_SECOND, SECONDS_PER_MINUTE,
  misc::{u8u32, u32i64},
};

/// A signed span of time with millisecond precision.
///
/// Differently from [`core::time::Duration`], this structure allows negative durations.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Duration {
  milliseconds: i64,
}

impl Duration {
  /// Instance without intervals.
  pub const ZERO: Self = Self::from_milliseconds(0);

  /// Creates a new instance from the specified number of days.
  #[inline]
  pub const fn from_days(days: i64) -> Result<Self, CalendarError> {
    Self::checked_from(days, u32i64(MILLISECONDS_PER_DAY))
  }

  /// Creates a new instance from the specified number of milliseconds.
  #[inline]
  pub const fn from_milliseconds(milliseconds: i64) -> Self {
    Self { milliseconds }
  }

  /// Creates a new instance from the specified number of minutes.
  #[inline]
  pub const fn from_minutes(minutes: i64) -> Result<Self, CalendarError> {
    Self::checked_from(minutes, u32i64(MILLISECONDS_PER_SECOND * u8u32(SECONDS_PER_MINUTE)))
  }

  /// Creates a new instance from the specified number of whole seconds.
  #[inline]
  pub const fn from_seconds(seconds: i64) -> Result<Self, CalendarError> {
    Self::checked_from(seconds, u32i64(MILLISECONDS_PER_SECOND))
  }

  /// Computes `self + other`, returning an error if an overflow occurred.
  #[inline]
  pub const fn add(self, other: Self) -> Result<Self, CalendarError> {
    match self.milliseconds.checked_add(other.milliseconds) {
      Some(milliseconds) => Ok(Self { milliseconds }),
      None => Err(CalendarError::ArithmeticOverflow),
    }
  }

  /// If this instance has no interval.
  #[inline]
  pub const fn is_zero(self) -> bool {
    self.milliseconds == 0
  }

  /// Total number of milliseconds.
  #[inline]
  pub const fn milliseconds(self) -> i64 {
    self.milliseconds
  }

  /// Returns an instance with the opposite sign.
  #[inline]
  #[must_use]
  pub const fn neg(self) -> Self {
    Self { milliseconds: self.milliseconds.saturating_neg() }
  }

  /// Number of whole seconds, truncated towards zero.
  #[allow(clippy::arithmetic_side_effects, reason = "divisor is constant")]
  #[inline]
  pub const fn seconds(self) -> i64 {
    self.milliseconds / u32i64(MILLISECONDS_PER_SECOND)
  }

  const fn checked_from(num: i64, factor: i64) -> Result<Self, CalendarError> {
    match num.checked_mul(factor) {
      Some(milliseconds) => Ok(Self { milliseconds }),
      None => Err(CalendarError::ArithmeticOverflow),
    }
  }
}
