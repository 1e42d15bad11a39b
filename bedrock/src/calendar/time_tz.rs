use crate::calendar::{
  CalendarError, Duration, Time, check_offset,
  iso_8601::{Iso8601 as _, Iso8601Config},
  misc::i16i64,
};
use core::{
  fmt::{Debug, Display, Formatter},
  str::FromStr,
};

/// Clock time along side the offset, in minutes, of the local time zone where the time was
/// observed.
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
pub struct TimeTz {
  local_time: Time,
  offset: i16,
}

impl TimeTz {
  /// Fails if `offset` is not within `-1439..=1439`.
  #[inline]
  pub const fn new(local_time: Time, offset: i16) -> Result<Self, CalendarError> {
    match check_offset(offset) {
      Ok(offset) => Ok(Self { local_time, offset }),
      Err(err) => Err(err),
    }
  }

  /// Time as observed in the local time zone.
  #[inline]
  pub const fn local_time(self) -> Time {
    self.local_time
  }

  /// Minutes ahead of UTC.
  #[inline]
  pub const fn offset(self) -> i16 {
    self.offset
  }

  /// Local time converted to UTC, wrapping around midnight.
  #[inline]
  pub const fn utc_time(self) -> Time {
    // Minutes are bounded by `check_offset`, the multiplication never overflows.
    let duration = Duration::from_milliseconds(i16i64(self.offset).wrapping_mul(-60_000));
    self.local_time.wrapping_add(duration)
  }
}

impl Debug for TimeTz {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    f.write_str(&self.to_iso_8601(Iso8601Config::default()))
  }
}

impl Display for TimeTz {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    f.write_str(&self.to_iso_8601(Iso8601Config::default()))
  }
}

impl FromStr for TimeTz {
  type Err = crate::Error;

  #[inline]
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::parse_iso_8601(s.as_bytes())
  }
}

#[cfg(feature = "serde")]
_iso_8601_serde!(TimeTz, "a formatted time string with an optional timezone");

#[cfg(feature = "arbitrary")]
mod arbitrary {
  use crate::calendar::{MAX_OFFSET_MINUTES, TimeTz};
  use arbitrary::{Arbitrary, Unstructured};

  impl<'any> Arbitrary<'any> for TimeTz {
    #[inline]
    fn arbitrary(u: &mut Unstructured<'any>) -> arbitrary::Result<Self> {
      let offset = u.int_in_range(-MAX_OFFSET_MINUTES..=MAX_OFFSET_MINUTES)?;
      TimeTz::new(u.arbitrary()?, offset).map_err(|_err| arbitrary::Error::IncorrectFormat)
    }
  }
}

#[cfg(test)]
mod tests {
  use crate::calendar::{Time, TimeTz};

  #[test]
  fn utc_time_wraps_around_midnight() {
    let time = TimeTz::new(Time::from_hms(1, 0, 0).unwrap(), 120).unwrap();
    assert_eq!(time.utc_time(), Time::from_hms(23, 0, 0).unwrap());
    let time = TimeTz::new(Time::from_hms_ms(23, 30, 0, 5).unwrap(), -45).unwrap();
    assert_eq!(time.utc_time(), Time::from_hms_ms(0, 15, 0, 5).unwrap());
    assert_eq!(time.local_time(), Time::from_hms_ms(23, 30, 0, 5).unwrap());
  }
}
