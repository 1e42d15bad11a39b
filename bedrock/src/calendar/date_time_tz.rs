use crate::calendar::{
  CalendarError, DateTime, Duration, check_offset,
  iso_8601::{Iso8601 as _, Iso8601Config},
  misc::i16i64,
};
use core::{
  fmt::{Debug, Display, Formatter},
  str::FromStr,
};

/// Date and clock time along side the offset, in minutes, of the local time zone where the
/// instant was observed.
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
pub struct DateTimeTz {
  local_date_time: DateTime,
  offset: i16,
}

impl DateTimeTz {
  /// Fails if `offset` is not within `-1439..=1439`.
  #[inline]
  pub const fn new(local_date_time: DateTime, offset: i16) -> Result<Self, CalendarError> {
    match check_offset(offset) {
      Ok(offset) => Ok(Self { local_date_time, offset }),
      Err(err) => Err(err),
    }
  }

  /// Date and time as observed in the local time zone.
  #[inline]
  pub const fn local_date_time(self) -> DateTime {
    self.local_date_time
  }

  /// Minutes ahead of UTC.
  #[inline]
  pub const fn offset(self) -> i16 {
    self.offset
  }

  /// The same instant expressed in UTC.
  ///
  /// Fails if the conversion crosses the boundaries of `DateTime`.
  #[inline]
  pub const fn utc_date_time(self) -> Result<DateTime, CalendarError> {
    let duration = match Duration::from_minutes(i16i64(self.offset)) {
      Ok(elem) => elem,
      Err(err) => return Err(err),
    };
    self.local_date_time.sub(duration)
  }
}

impl Debug for DateTimeTz {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    f.write_str(&self.to_iso_8601(Iso8601Config::default()))
  }
}

impl Display for DateTimeTz {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    f.write_str(&self.to_iso_8601(Iso8601Config::default()))
  }
}

impl FromStr for DateTimeTz {
  type Err = crate::Error;

  #[inline]
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::parse_iso_8601(s.as_bytes())
  }
}

#[cfg(feature = "serde")]
_iso_8601_serde!(DateTimeTz, "a formatted datetime string with an optional timezone");

#[cfg(feature = "arbitrary")]
mod arbitrary {
  use crate::calendar::{DateTimeTz, MAX_OFFSET_MINUTES};
  use arbitrary::{Arbitrary, Unstructured};

  impl<'any> Arbitrary<'any> for DateTimeTz {
    #[inline]
    fn arbitrary(u: &mut Unstructured<'any>) -> arbitrary::Result<Self> {
      let offset = u.int_in_range(-MAX_OFFSET_MINUTES..=MAX_OFFSET_MINUTES)?;
      DateTimeTz::new(u.arbitrary()?, offset).map_err(|_err| arbitrary::Error::IncorrectFormat)
    }
  }
}
