//! Date and time values with millisecond precision along side their ISO-8601 textual
//! representation.
//!
//! Time zones are raw offsets expressed in minutes from UTC. Named zones are not supported.

mod calendar_error;
mod date;
mod date_time;
mod date_time_tz;
mod date_tz;
mod duration;
pub mod iso_8601;
mod misc;
mod time;
mod time_tz;

pub use calendar_error::CalendarError;
pub use date::Date;
pub use date_time::DateTime;
pub use date_time_tz::DateTimeTz;
pub use date_tz::DateTz;
pub use duration::Duration;
pub use time::Time;
pub use time_tz::TimeTz;

/// Number of days between the Common Era (0001-01-01 is day 1) and the UNIX epoch.
pub(crate) const EPOCH_CE_DAYS: i32 = 719_163;
pub(crate) const HOURS_PER_DAY: u8 = 24;
/// Timezone offsets must be within `-23:59` and `+23:59`.
pub(crate) const MAX_OFFSET_MINUTES: i16 = 1_439;
pub(crate) const MILLISECONDS_PER_DAY: u32 = MILLISECONDS_PER_SECOND * SECONDS_PER_DAY;
pub(crate) const MILLISECONDS_PER_SECOND: u32 = 1_000;
pub(crate) const MINUTES_PER_HOUR: u8 = 60;
pub(crate) const SECONDS_PER_DAY: u32 = SECONDS_PER_HOUR * misc::u8u32(HOURS_PER_DAY);
pub(crate) const SECONDS_PER_HOUR: u32 = misc::u8u32(SECONDS_PER_MINUTE) * 60;
pub(crate) const SECONDS_PER_MINUTE: u8 = 60;

/// Accumulated number of days that precede each month. The last element is the number of days of
/// the whole year.
pub(crate) const DAYS_OF_MONTHS: [[u16; 13]; 2] = [
  [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334, 365],
  [0, 31, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335, 366],
];

/// Makes sure that `offset` is within the `-1439..=1439` range.
pub(crate) const fn check_offset(offset: i16) -> Result<i16, CalendarError> {
  if offset < -MAX_OFFSET_MINUTES || offset > MAX_OFFSET_MINUTES {
    return Err(CalendarError::InvalidTimezoneOffset { received: offset });
  }
  Ok(offset)
}
