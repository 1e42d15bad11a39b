use crate::{calendar::CalendarError, de::Base64Error};
use core::fmt::{Debug, Display, Formatter};

/// Grouped individual errors
#[derive(Debug)]
pub enum Error {
  // External
  //
  /// See [`base64::EncodeSliceError`].
  #[cfg(feature = "base64")]
  EncodeSliceError(base64::EncodeSliceError),

  // Internal
  //
  /// See [`Base64Error`].
  Base64Error(Base64Error),
  /// See [`CalendarError`].
  CalendarError(CalendarError),
}

impl Display for Error {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    <Self as Debug>::fmt(self, f)
  }
}

impl core::error::Error for Error {}

#[cfg(feature = "base64")]
impl From<base64::EncodeSliceError> for Error {
  #[inline]
  #[track_caller]
  fn from(from: base64::EncodeSliceError) -> Self {
    Self::EncodeSliceError(from)
  }
}

impl From<Base64Error> for Error {
  #[inline]
  #[track_caller]
  fn from(from: Base64Error) -> Self {
    Self::Base64Error(from)
  }
}

impl From<CalendarError> for Error {
  #[inline]
  #[track_caller]
  fn from(from: CalendarError) -> Self {
    Self::CalendarError(from)
  }
}
