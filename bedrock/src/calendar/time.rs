
use crate::calendar::{
  CalendarError, Duration, HOURS_PER_DAY, MILLISECONDS_PER_DAY, MILLISECONDS_PER_SECOND,
  MINUTES_PER_HOUR, SECONDS_PER_MINUTE,
  iso_8601::{Iso8601 as _, Iso8601Config},
  misc::{u8u32, u16u32, u32i64},
};
use core::{
  fmt::{Debug, Display, Formatter},
  str::FromStr,
};

/// Clock time with millisecond precision.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Time {
  hour: u8,
  minute: u8,
  second: u8,
  millisecond: u16,
}

impl Time {
  /// Instance with the maximum allowed value of `23:59:59.999`
  pub const MAX: Self = Self { hour: 23, minute: 59, second: 59, millisecond: 999 };
  /// Instance with the minimum allowed value of `00:00:00.000`
  pub const ZERO: Self = Self { hour: 0, minute: 0, second: 0, millisecond: 0 };

  /// New instance without millisecond precision.
  #[inline]
  pub const fn from_hms(hour: u8, minute: u8, second: u8) -> Result<Self, CalendarError> {
    Self::from_hms_ms(hour, minute, second, 0)
  }

  /// New instance with millisecond precision.
  #[inline]
  pub const fn from_hms_ms(
    hour: u8,
    minute: u8,
    second: u8,
    millisecond: u16,
  ) -> Result<Self, CalendarError> {
    if hour >= HOURS_PER_DAY {
      return Err(CalendarError::InvalidHour { received: hour });
    }
    if minute >= MINUTES_PER_HOUR {
      return Err(CalendarError::InvalidMinute { received: minute });
    }
    if second >= SECONDS_PER_MINUTE {
      return Err(CalendarError::InvalidSecond { received: second });
    }
    if millisecond > 999 {
      return Err(CalendarError::InvalidMillisecond { received: millisecond });
    }
    Ok(Self { hour, minute, second, millisecond })
  }

  /// Hour of the day, from 0 to 23.
  #[inline]
  pub const fn hour(self) -> u8 {
    self.hour
  }

  /// Milliseconds of a second
  #[inline]
  pub const fn millisecond(self) -> u16 {
    self.millisecond
  }

  /// The total number of milliseconds since midnight (00:00:00.000).
  #[inline]
  pub const fn milliseconds_since_mn(self) -> u32 {
    let mut rslt = u8u32(self.hour).wrapping_mul(u8u32(MINUTES_PER_HOUR));
    rslt = rslt.wrapping_add(u8u32(self.minute)).wrapping_mul(u8u32(SECONDS_PER_MINUTE));
    rslt = rslt.wrapping_add(u8u32(self.second)).wrapping_mul(MILLISECONDS_PER_SECOND);
    rslt.wrapping_add(u16u32(self.millisecond))
  }

  /// Minute of an hour
  #[inline]
  pub const fn minute(self) -> u8 {
    self.minute
  }

  /// Adds the given `duration`, wrapping around midnight and returning the number of whole days
  /// ignored from the addition.
  #[inline]
  #[must_use]
  pub const fn overflowing_add(self, duration: Duration) -> (Self, i64) {
    if duration.is_zero() {
      return (self, 0);
    }
    let day = u32i64(MILLISECONDS_PER_DAY);
    let sum = u32i64(self.milliseconds_since_mn()).saturating_add(duration.milliseconds());
    (Self::from_milliseconds_since_mn(sum.rem_euclid(day)), sum.div_euclid(day))
  }

  /// Seconds of a minute
  #[inline]
  pub const fn second(self) -> u8 {
    self.second
  }

  /// Adds the given `duration`, wrapping around midnight.
  #[inline]
  #[must_use]
  pub const fn wrapping_add(self, duration: Duration) -> Self {
    self.overflowing_add(duration).0
  }

  #[allow(
    clippy::arithmetic_side_effects,
    clippy::cast_possible_truncation,
    reason = "`total` is less than the number of milliseconds of a day"
  )]
  pub(crate) const fn from_milliseconds_since_mn(total: i64) -> Self {
    let millisecond = total % 1_000;
    let seconds = total / 1_000;
    Self {
      hour: (seconds / 3_600) as u8,
      minute: ((seconds % 3_600) / 60) as u8,
      second: (seconds % 60) as u8,
      millisecond: millisecond as u16,
    }
  }
}

impl Debug for Time {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    f.write_str(&self.to_iso_8601(Iso8601Config::default()))
  }
}

impl Default for Time {
  #[inline]
  fn default() -> Self {
    Self::ZERO
  }
}

impl Display for Time {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    f.write_str(&self.to_iso_8601(Iso8601Config::default()))
  }
}

impl FromStr for Time {
  type Err = crate::Error;

  #[inline]
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::parse_iso_8601(s.as_bytes())
  }
}

#[cfg(feature = "serde")]
_iso_8601_serde!(Time, "a formatted time string");

#[cfg(feature = "arbitrary")]
mod arbitrary {
  use crate::calendar::{MILLISECONDS_PER_DAY, Time, misc::u32i64};
  use arbitrary::{Arbitrary, Unstructured};

  impl<'any> Arbitrary<'any> for Time {
    #[inline]
    fn arbitrary(u: &mut Unstructured<'any>) -> arbitrary::Result<Self> {
      let total = u.int_in_range(0..=u32i64(MILLISECONDS_PER_DAY).wrapping_sub(1))?;
      Ok(Time::from_milliseconds_since_mn(total))
    }
  }
}
