use crate::calendar::{
  Date, DateTime, MINUTES_PER_HOUR, Time,
  iso_8601::{Iso8601Config, TZ_STRLEN},
  misc::{u8u32, u16u32},
};

/// Writes fixed-width fields into a buffer whose capacity was verified upfront.
pub(crate) struct FixedWriter<'buffer> {
  buffer: &'buffer mut [u8],
  idx: usize,
}

impl<'buffer> FixedWriter<'buffer> {
  #[track_caller]
  pub(crate) fn new(buffer: &'buffer mut [u8], required: usize) -> Self {
    assert!(
      buffer.len() >= required,
      "buffer of {} bytes can not hold an ISO-8601 representation of {required} bytes",
      buffer.len()
    );
    Self { buffer, idx: 0 }
  }

  pub(crate) fn date(&mut self, date: Date) {
    self.int(u16u32(date.year()), 4);
    self.byte(b'-');
    self.int(u8u32(date.month()), 2);
    self.byte(b'-');
    self.int(u8u32(date.day()), 2);
  }

  pub(crate) fn date_time(&mut self, date_time: DateTime) {
    self.date(date_time.date());
    self.byte(b'T');
    self.time(date_time.time());
  }

  pub(crate) fn len(self) -> usize {
    self.idx
  }

  pub(crate) fn time(&mut self, time: Time) {
    self.int(u8u32(time.hour()), 2);
    self.byte(b':');
    self.int(u8u32(time.minute()), 2);
    self.byte(b':');
    self.int(u8u32(time.second()), 2);
    self.byte(b'.');
    self.int(u16u32(time.millisecond()), 3);
  }

  /// `Z` or `±hh:mm`.
  pub(crate) fn time_zone(&mut self, offset: i16, config: Iso8601Config) {
    if offset == 0 && config.use_z_abbreviation_for_utc() {
      self.byte(b'Z');
      return;
    }
    let minutes = offset.unsigned_abs();
    debug_assert!(minutes <= 24 * 60, "offsets can't be greater than 24 hours");
    let mph = u16::from(MINUTES_PER_HOUR);
    self.byte(if offset < 0 { b'-' } else { b'+' });
    self.int(u16u32(minutes / mph), 2);
    self.byte(b':');
    self.int(u16u32(minutes % mph), 2);
  }

  fn byte(&mut self, byte: u8) {
    if let Some(elem) = self.buffer.get_mut(self.idx) {
      *elem = byte;
    }
    self.idx = self.idx.wrapping_add(1);
  }

  /// Left-padded with zeros. Only the lower `len` digits are written if `value` has more digits.
  #[allow(clippy::cast_possible_truncation, reason = "`value % 10` is always a single digit")]
  fn int(&mut self, mut value: u32, len: usize) {
    let end = self.idx.wrapping_add(len);
    if let Some(digits) = self.buffer.get_mut(self.idx..end) {
      for digit in digits.iter_mut().rev() {
        *digit = b'0'.wrapping_add((value % 10) as u8);
        value /= 10;
      }
    }
    self.idx = end;
  }
}

/// Copies `src` into `dest` returning the length of `src`.
///
/// `dest` receives a `0` terminator if it is larger than `src`. When `dest` is not larger than
/// `src`, only the first `dest.len()` bytes are copied.
pub(crate) fn copy_buf(dest: &mut [u8], src: &[u8]) -> usize {
  if let Some((content, [terminator, ..])) = dest.split_at_mut_checked(src.len()) {
    content.copy_from_slice(src);
    *terminator = 0;
  } else {
    let len = dest.len();
    dest.copy_from_slice(src.get(..len).unwrap_or_default());
  }
  src.len()
}

/// Number of bytes used to represent `offset`.
pub(crate) fn tz_len(offset: i16, config: Iso8601Config) -> usize {
  if offset == 0 && config.use_z_abbreviation_for_utc() { 1 } else { TZ_STRLEN }
}
