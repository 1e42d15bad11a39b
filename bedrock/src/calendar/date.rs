#![allow(
  clippy::cast_possible_truncation,
  reason = "results of the civil algorithms are bounded by the supported range of years"
)]


use crate::calendar::{
  CalendarError, DAYS_OF_MONTHS,
  iso_8601::{Iso8601 as _, Iso8601Config},
  misc::{i32i64, u8u16, u8usize, u16i32},
};
use core::{
  fmt::{Debug, Display, Formatter},
  str::FromStr,
};

/// Proleptic Gregorian calendar.
///
/// Can represent years from 1 to 9999.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Date {
  year: u16,
  month: u8,
  day: u8,
}

impl Date {
  /// Instance that refers the UNIX epoch (1970-01-01).
  pub const EPOCH: Self = Self { year: 1970, month: 1, day: 1 };
  /// Instance with the maximum allowed value of `9999-12-31`
  pub const MAX: Self = Self { year: 9999, month: 12, day: 31 };
  /// Instance with the minimum allowed value of `0001-01-01`
  pub const MIN: Self = Self { year: 1, month: 1, day: 1 };

  pub(crate) const MAX_CE_DAYS: i32 = 3_652_059;

  /// Creates a new instance from the number of days since the common era. `0001-01-01` is the
  /// first day.
  //
  // Credits to https://howardhinnant.github.io/date_algorithms.html.
  #[allow(clippy::arithmetic_side_effects, reason = "`ce_days` is bounded by `MAX_CE_DAYS`")]
  #[inline]
  pub const fn from_ce_days(ce_days: i32) -> Result<Self, CalendarError> {
    if ce_days < 1 || ce_days > Self::MAX_CE_DAYS {
      return Err(CalendarError::InvalidCeDays { received: i32i64(ce_days) });
    }
    // Days since 0000-03-01
    let days = ce_days.cast_unsigned() + 305;
    let era = days / 146_097;
    let day_of_era = days % 146_097;
    let year_of_era =
      (day_of_era - day_of_era / 1_460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let month_helper = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * month_helper + 2) / 5 + 1;
    let month = if month_helper < 10 { month_helper + 3 } else { month_helper - 9 };
    let year = year_of_era + era * 400 + if month <= 2 { 1 } else { 0 };
    Ok(Self { year: year as u16, month: month as u8, day: day as u8 })
  }

  /// Constructs a new instance that automatically deals with leap years.
  #[inline]
  pub const fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self, CalendarError> {
    if year < 1 || year > 9999 {
      return Err(CalendarError::InvalidYear { received: year });
    }
    if month < 1 || month > 12 {
      return Err(CalendarError::InvalidMonth { received: month });
    }
    if day < 1 || day > days_in_month(year, month) {
      return Err(CalendarError::InvalidMonthDay { received: day });
    }
    Ok(Self { year, month, day })
  }

  /// Adds the given number of `days`, which can be negative.
  #[inline]
  pub const fn add_days(self, days: i64) -> Result<Self, CalendarError> {
    if days == 0 {
      return Ok(self);
    }
    let Some(sum) = i32i64(self.ce_days()).checked_add(days) else {
      return Err(CalendarError::ArithmeticOverflow);
    };
    if sum < 1 || sum > i32i64(Self::MAX_CE_DAYS) {
      return Err(CalendarError::ArithmeticOverflow);
    }
    Self::from_ce_days(sum as i32)
  }

  /// Number of days since the common era. `0001-01-01` is the first day.
  #[allow(clippy::arithmetic_side_effects, reason = "years are within the 1-9999 range")]
  #[inline]
  pub const fn ce_days(self) -> i32 {
    let year = u16i32(self.year) - 1;
    year * 365 + year / 4 - year / 100 + year / 400 + u16i32(self.day_of_year())
  }

  /// Day of the month.
  #[inline]
  pub const fn day(self) -> u8 {
    self.day
  }

  /// Day of the year, from 1 to 366.
  #[inline]
  pub const fn day_of_year(self) -> u16 {
    let months = &DAYS_OF_MONTHS[is_leap_year(self.year) as usize];
    months[u8usize(self.month).wrapping_sub(1)].wrapping_add(u8u16(self.day))
  }

  /// If the year of this date has 366 days.
  #[inline]
  pub const fn is_leap_year(self) -> bool {
    is_leap_year(self.year)
  }

  /// Month of the year, from 1 to 12.
  #[inline]
  pub const fn month(self) -> u8 {
    self.month
  }

  /// Year
  #[inline]
  pub const fn year(self) -> u16 {
    self.year
  }
}

impl Debug for Date {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    f.write_str(&self.to_iso_8601(Iso8601Config::default()))
  }
}

impl Default for Date {
  #[inline]
  fn default() -> Self {
    Self::MIN
  }
}

impl Display for Date {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    f.write_str(&self.to_iso_8601(Iso8601Config::default()))
  }
}

impl FromStr for Date {
  type Err = crate::Error;

  #[inline]
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::parse_iso_8601(s.as_bytes())
  }
}

#[allow(clippy::indexing_slicing, reason = "callers always pass months within 1-12")]
pub(crate) const fn days_in_month(year: u16, month: u8) -> u8 {
  let months = &DAYS_OF_MONTHS[is_leap_year(year) as usize];
  let idx = u8usize(month);
  months[idx].wrapping_sub(months[idx.wrapping_sub(1)]) as u8
}

pub(crate) const fn is_leap_year(year: u16) -> bool {
  year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

#[cfg(feature = "serde")]
_iso_8601_serde!(Date, "a formatted date string");

#[cfg(feature = "arbitrary")]
mod arbitrary {
  use crate::calendar::{Date, date::days_in_month};
  use arbitrary::{Arbitrary, Unstructured};

  impl<'any> Arbitrary<'any> for Date {
    #[inline]
    fn arbitrary(u: &mut Unstructured<'any>) -> arbitrary::Result<Self> {
      let year = u.int_in_range(1..=9999)?;
      let month = u.int_in_range(1..=12)?;
      let day = u.int_in_range(1..=days_in_month(year, month))?;
      Date::from_ymd(year, month, day).map_err(|_err| arbitrary::Error::IncorrectFormat)
    }
  }
}
