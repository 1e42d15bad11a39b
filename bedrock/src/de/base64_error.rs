/// Errors of Base64 operations
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Base64Error {
  /// The decoder already finished successfully and can not receive more data.
  AlreadyFinished,
  /// An alphabet symbol was found after `=`.
  DataAfterPadding,
  /// Input ended with a single symbol in the last quantum, which can not form a byte.
  IncompleteQuantum,
  /// The provided output buffer can not hold a decoded byte that is still pending. Calling the
  /// same method again with more room resumes the operation.
  InsufficientOutput,
  /// `=` was found in a position that does not terminate a quantum of two or three symbols, or
  /// the decoder does not expect padding at all.
  MisplacedPadding,
  /// Input ended in a quantum that is not terminated by the required `=` characters.
  MissingPadding,
  /// The decoder previously entered the error state. A reset is necessary.
  Sticky,
  /// A byte that is neither part of the alphabet nor ignorable.
  UnrecognizedCharacter {
    /// Offending byte
    byte: u8,
  },
}
