/// Calendar error
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CalendarError {
  // Generic
  //
  /// Underlying time structure couldn't hold the value generated during an arithmetic operation.
  ArithmeticOverflow,
  /// Days from CE must be within the `1` ~ `3652059` range
  InvalidCeDays {
    /// Invalid received number
    received: i64,
  },
  /// A day can only have up to 24 hours
  InvalidHour {
    /// Invalid received number
    received: u8,
  },
  /// A second can only have up to `999` milliseconds
  InvalidMillisecond {
    /// Invalid received number
    received: u16,
  },
  /// An hour can only have up to 60 minutes
  InvalidMinute {
    /// Invalid received number
    received: u8,
  },
  /// A year can only have up to 12 months
  InvalidMonth {
    /// Invalid received number
    received: u8,
  },
  /// The day does not exist in the given month of the given year
  InvalidMonthDay {
    /// Invalid received number
    received: u8,
  },
  /// A minute can only have up to 60 seconds
  InvalidSecond {
    /// Invalid received number
    received: u8,
  },
  /// Timezone offsets must be within the `-1439` ~ `1439` range of minutes
  InvalidTimezoneOffset {
    /// Invalid received number
    received: i16,
  },
  /// A year must be between `1` and `9999`.
  InvalidYear {
    /// Invalid received year
    received: u16,
  },

  // Parsing
  //
  /// Provided data does not match the expected grammar
  InvalidParsingBytes,
  /// Provided data can not represent a single clock time
  InvalidParsingClockTime,
  /// Provided data is shorter than the smallest valid representation
  InvalidParsingLength {
    /// Minimum number of bytes
    expected: usize,
    /// Number of received bytes
    received: usize,
  },
  /// Provided data can not represent a timezone
  InvalidParsingTimezone,
  /// Parsed fields are valid but the adjusted or UTC-normalized value is outside the
  /// `0001-01-01T00:00:00.000` ~ `9999-12-31T23:59:59.999` range
  ParsedValueOutOfRange,
}
