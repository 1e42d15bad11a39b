use crate::calendar::{
  CalendarError, Date, DateTime, Duration, Time, check_offset,
  iso_8601::{Iso8601 as _, Iso8601Config},
  misc::i16i64,
};
use core::{
  fmt::{Debug, Display, Formatter},
  str::FromStr,
};

/// Date along side the offset, in minutes, of the local time zone where the date was observed.
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
pub struct DateTz {
  local_date: Date,
  offset: i16,
}

impl DateTz {
  /// Fails if `offset` is not within `-1439..=1439`.
  #[inline]
  pub const fn new(local_date: Date, offset: i16) -> Result<Self, CalendarError> {
    match check_offset(offset) {
      Ok(offset) => Ok(Self { local_date, offset }),
      Err(err) => Err(err),
    }
  }

  /// Date as observed in the local time zone.
  #[inline]
  pub const fn local_date(self) -> Date {
    self.local_date
  }

  /// Minutes ahead of UTC.
  #[inline]
  pub const fn offset(self) -> i16 {
    self.offset
  }

  /// The UTC instant that corresponds to the start of the local date.
  #[inline]
  pub const fn utc_date_time(self) -> Result<DateTime, CalendarError> {
    let duration = match Duration::from_minutes(i16i64(self.offset)) {
      Ok(elem) => elem,
      Err(err) => return Err(err),
    };
    DateTime::new(self.local_date, Time::ZERO).sub(duration)
  }
}

impl Debug for DateTz {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    f.write_str(&self.to_iso_8601(Iso8601Config::default()))
  }
}

impl Display for DateTz {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    f.write_str(&self.to_iso_8601(Iso8601Config::default()))
  }
}

impl FromStr for DateTz {
  type Err = crate::Error;

  #[inline]
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::parse_iso_8601(s.as_bytes())
  }
}

#[cfg(feature = "serde")]
_iso_8601_serde!(DateTz, "a formatted date string with an optional timezone");

#[cfg(feature = "arbitrary")]
mod arbitrary {
  use crate::calendar::{DateTz, MAX_OFFSET_MINUTES};
  use arbitrary::{Arbitrary, Unstructured};

  impl<'any> Arbitrary<'any> for DateTz {
    #[inline]
    fn arbitrary(u: &mut Unstructured<'any>) -> arbitrary::Result<Self> {
      let offset = u.int_in_range(-MAX_OFFSET_MINUTES..=MAX_OFFSET_MINUTES)?;
      DateTz::new(u.arbitrary()?, offset).map_err(|_err| arbitrary::Error::IncorrectFormat)
    }
  }
}

#[cfg(test)]
mod tests {
  use crate::calendar::{CalendarError, Date, DateTime, DateTz, Time};

  #[test]
  fn new_checks_offset() {
    assert!(DateTz::new(Date::EPOCH, 1439).is_ok());
    assert!(DateTz::new(Date::EPOCH, -1439).is_ok());
    assert_eq!(
      DateTz::new(Date::EPOCH, 1440),
      Err(CalendarError::InvalidTimezoneOffset { received: 1440 })
    );
  }

  #[test]
  fn utc_date_time() {
    let date = Date::from_ymd(2021, 6, 30).unwrap();
    assert_eq!(
      DateTz::new(date, 90).unwrap().utc_date_time().unwrap(),
      DateTime::new(Date::from_ymd(2021, 6, 29).unwrap(), Time::from_hms(22, 30, 0).unwrap())
    );
    assert_eq!(
      DateTz::new(date, -90).unwrap().utc_date_time().unwrap(),
      DateTime::new(date, Time::from_hms(1, 30, 0).unwrap())
    );
    assert_eq!(
      DateTz::new(Date::MIN, 1).unwrap().utc_date_time(),
      Err(CalendarError::ArithmeticOverflow)
    );
  }
}
