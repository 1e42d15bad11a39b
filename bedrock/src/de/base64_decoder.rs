
use crate::de::{Base64Alphabet, Base64Error, base64_alphabet::INVALID};

/// Parameters that define how a [`Base64Decoder`] interprets its input.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Base64DecoderOptions {
  /// See [`Base64Alphabet`].
  pub alphabet: Base64Alphabet,
  /// If the last quantum must be terminated by `=` characters. When `false`, `=` is an error and
  /// a final quantum of two or three symbols is accepted as is.
  pub is_padded: bool,
  /// If bytes that are neither symbols nor whitespace are errors. When `false`, such bytes are
  /// skipped and a final quantum of two or three symbols is accepted without padding.
  pub is_unrecognized_an_error: bool,
}

impl Base64DecoderOptions {
  /// Padded input with the given parameters.
  #[inline]
  pub const fn new(alphabet: Base64Alphabet, is_unrecognized_an_error: bool) -> Self {
    Self { alphabet, is_padded: true, is_unrecognized_an_error }
  }
}

impl Default for Base64DecoderOptions {
  #[inline]
  fn default() -> Self {
    Self::new(Base64Alphabet::Basic, true)
  }
}

/// Stage of a [`Base64Decoder`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Base64DecoderState {
  /// Terminal failure. Only [`Base64Decoder::reset_state`] leaves this state.
  Error,
  /// Nothing was received.
  Initial,
  /// Number of symbols, from 0 to 3, accumulated in the current quantum. `0` means that at least
  /// one quantum was completed.
  Input(u8),
  /// A quantum of two symbols and one `=` was received. Another `=` is required.
  NeedEqual,
  /// Padding terminated the input. Only ignorable bytes are allowed from now on.
  SoftDone,
  /// Terminal success.
  Done,
}

/// Amount of data handled by a single call of [`Base64Decoder::convert`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ConvertProgress {
  /// Number of input bytes that were processed.
  pub consumed: usize,
  /// Number of decoded bytes written to the output.
  pub written: usize,
}

/// Incremental Base64 decoder.
///
/// Input can be fed in chunks of any size through [`Self::convert`] and the decoded bytes are
/// written as soon as they are available. [`Self::end_convert`] must be called after the last
/// chunk to validate the final quantum.
///
/// ```rust
/// let mut decoder = bedrock::de::Base64Decoder::new(bedrock::de::Base64Alphabet::Basic, true);
/// let mut out = [0; 8];
/// let first = decoder.convert(&mut out, b"SGVs").unwrap();
/// let second = decoder.convert(&mut out[first.written..], b"bG8=").unwrap();
/// let third = decoder.end_convert(&mut out[first.written + second.written..]).unwrap();
/// assert_eq!(&out[..first.written + second.written + third], b"Hello");
/// ```
#[derive(Debug)]
pub struct Base64Decoder {
  bits_in_stack: u8,
  options: Base64DecoderOptions,
  output_length: usize,
  stack: u32,
  state: Base64DecoderState,
}

impl Base64Decoder {
  /// Decoder of padded input.
  #[inline]
  pub const fn new(alphabet: Base64Alphabet, is_unrecognized_an_error: bool) -> Self {
    Self::with_options(Base64DecoderOptions::new(alphabet, is_unrecognized_an_error))
  }

  /// Decoder with custom parameters.
  #[inline]
  pub const fn with_options(options: Base64DecoderOptions) -> Self {
    Self {
      bits_in_stack: 0,
      options,
      output_length: 0,
      stack: 0,
      state: Base64DecoderState::Initial,
    }
  }

  /// See [`Base64Alphabet`].
  #[inline]
  pub const fn alphabet(&self) -> Base64Alphabet {
    self.options.alphabet
  }

  /// Decodes `input` into `out`.
  ///
  /// Processing stops when `input` is exhausted or when a decoded byte does not fit in `out`. In
  /// the latter case the remaining input, indicated by [`ConvertProgress::consumed`], should be
  /// provided again with more room.
  ///
  /// Any error moves the decoder into [`Base64DecoderState::Error`].
  #[inline]
  pub fn convert(&mut self, out: &mut [u8], input: &[u8]) -> crate::Result<ConvertProgress> {
    self.output_length = 0;
    self.check_not_finished()?;
    let mut consumed = 0;
    let mut written = 0;
    loop {
      written = self.flush(out, written);
      if self.bits_in_stack >= 8 {
        break;
      }
      let Some(byte) = input.get(consumed).copied() else {
        break;
      };
      consumed = consumed.wrapping_add(1);
      if let Err(err) = self.consume(byte) {
        self.output_length = written;
        return Err(self.fail(err));
      }
    }
    self.output_length = written;
    Ok(ConvertProgress { consumed, written })
  }

  /// Validates the last quantum and writes any pending byte into `out`, returning the number of
  /// written bytes.
  ///
  /// [`Base64Error::InsufficientOutput`] is returned if `out` has no room for the pending bytes.
  /// The decoder stays valid and this method can be called again with a larger buffer.
  #[inline]
  pub fn end_convert(&mut self, out: &mut [u8]) -> crate::Result<usize> {
    self.output_length = 0;
    self.check_not_finished()?;
    match self.state {
      Base64DecoderState::NeedEqual => return Err(self.fail(Base64Error::MissingPadding)),
      Base64DecoderState::Input(1) => return Err(self.fail(Base64Error::IncompleteQuantum)),
      Base64DecoderState::Input(2 | 3) => {
        if self.requires_padding() {
          return Err(self.fail(Base64Error::MissingPadding));
        }
        self.drop_residue();
      }
      _ => {}
    }
    let written = self.flush(out, 0);
    self.output_length = written;
    if self.bits_in_stack >= 8 {
      return Err(Base64Error::InsufficientOutput.into());
    }
    _trace!("finished base64 decoding");
    self.state = Base64DecoderState::Done;
    Ok(written)
  }

  /// If the input received so far forms a complete encoding.
  #[inline]
  pub const fn is_accepting(&self) -> bool {
    match self.state {
      Base64DecoderState::Done
      | Base64DecoderState::Initial
      | Base64DecoderState::Input(0)
      | Base64DecoderState::SoftDone => true,
      Base64DecoderState::Input(2 | 3) => !self.requires_padding(),
      Base64DecoderState::Error | Base64DecoderState::Input(_) | Base64DecoderState::NeedEqual => {
        false
      }
    }
  }

  /// If [`Self::end_convert`] finished successfully.
  #[inline]
  pub const fn is_done(&self) -> bool {
    matches!(self.state, Base64DecoderState::Done)
  }

  /// If a previous operation failed.
  #[inline]
  pub const fn is_error(&self) -> bool {
    matches!(self.state, Base64DecoderState::Error)
  }

  /// If nothing was received since the creation or the last reset.
  #[inline]
  pub const fn is_initial_state(&self) -> bool {
    matches!(self.state, Base64DecoderState::Initial)
  }

  /// If the input is complete and no more symbols can be received.
  #[inline]
  pub const fn is_maximal(&self) -> bool {
    matches!(self.state, Base64DecoderState::Done | Base64DecoderState::SoftDone)
  }

  /// See [`Base64DecoderOptions::is_unrecognized_an_error`].
  #[inline]
  pub const fn is_unrecognized_an_error(&self) -> bool {
    self.options.is_unrecognized_an_error
  }

  /// See [`Base64DecoderOptions`].
  #[inline]
  pub const fn options(&self) -> Base64DecoderOptions {
    self.options
  }

  /// Number of bytes written by the last call of [`Self::convert`] or [`Self::end_convert`],
  /// successful or not.
  #[inline]
  pub const fn output_length(&self) -> usize {
    self.output_length
  }

  /// Discards everything that was received, including errors.
  #[inline]
  pub const fn reset_state(&mut self) {
    self.bits_in_stack = 0;
    self.output_length = 0;
    self.stack = 0;
    self.state = Base64DecoderState::Initial;
  }

  /// See [`Base64DecoderState`].
  #[inline]
  pub const fn state(&self) -> Base64DecoderState {
    self.state
  }

  fn check_not_finished(&mut self) -> crate::Result<()> {
    match self.state {
      Base64DecoderState::Done => Err(self.fail(Base64Error::AlreadyFinished)),
      Base64DecoderState::Error => Err(Base64Error::Sticky.into()),
      _ => Ok(()),
    }
  }

  #[allow(clippy::indexing_slicing, reason = "tables have an entry for every `u8`")]
  fn consume(&mut self, byte: u8) -> Result<(), Base64Error> {
    let value = self.options.alphabet.decode_table()[usize::from(byte)];
    if value != INVALID {
      let count = match self.state {
        Base64DecoderState::Initial => 0,
        Base64DecoderState::Input(count) => count,
        _ => return Err(Base64Error::DataAfterPadding),
      };
      self.stack = (self.stack << 6) | u32::from(value);
      self.bits_in_stack = self.bits_in_stack.wrapping_add(6);
      self.state = Base64DecoderState::Input(count.wrapping_add(1) % 4);
      return Ok(());
    }
    if byte == b'=' && self.options.is_padded {
      self.state = match self.state {
        Base64DecoderState::Input(2) => {
          self.drop_residue();
          Base64DecoderState::NeedEqual
        }
        Base64DecoderState::Input(3) => {
          self.drop_residue();
          Base64DecoderState::SoftDone
        }
        Base64DecoderState::NeedEqual => Base64DecoderState::SoftDone,
        _ => return Err(Base64Error::MisplacedPadding),
      };
      return Ok(());
    }
    let ignorable = if self.options.is_unrecognized_an_error {
      Base64Alphabet::ignorable_strict()
    } else {
      self.options.alphabet.ignorable_relaxed()
    };
    if ignorable[usize::from(byte)] {
      return Ok(());
    }
    if byte == b'=' {
      return Err(Base64Error::MisplacedPadding);
    }
    Err(Base64Error::UnrecognizedCharacter { byte })
  }

  /// Bits that don't form a whole byte at the end of the final quantum are discarded.
  fn drop_residue(&mut self) {
    let residue = self.bits_in_stack % 8;
    self.stack >>= residue;
    self.bits_in_stack = self.bits_in_stack.wrapping_sub(residue);
  }

  fn fail(&mut self, err: Base64Error) -> crate::Error {
    _debug!("base64 decoder entered the error state: {err:?}");
    self.state = Base64DecoderState::Error;
    err.into()
  }

  /// Writes pending bytes into `out` starting at `written` while there is room.
  #[allow(clippy::cast_possible_truncation, reason = "only the lower 8 bits are desired")]
  fn flush(&mut self, out: &mut [u8], mut written: usize) -> usize {
    while self.bits_in_stack >= 8 {
      let Some(elem) = out.get_mut(written) else {
        break;
      };
      self.bits_in_stack = self.bits_in_stack.wrapping_sub(8);
      *elem = (self.stack >> self.bits_in_stack) as u8;
      self.stack &= (1u32 << self.bits_in_stack).wrapping_sub(1);
      written = written.wrapping_add(1);
    }
    written
  }

  /// Strict padded input must end with `=` when the final quantum is partial.
  const fn requires_padding(&self) -> bool {
    self.options.is_padded && self.options.is_unrecognized_an_error
  }
}

impl Default for Base64Decoder {
  #[inline]
  fn default() -> Self {
    Self::with_options(Base64DecoderOptions::default())
  }
}

impl Drop for Base64Decoder {
  #[inline]
  fn drop(&mut self) {
    debug_assert!(self.bits_in_stack < 14, "at most one byte and one symbol can be pending");
    debug_assert!(
      !matches!(self.state, Base64DecoderState::Input(4..)),
      "a quantum has at most four symbols"
    );
  }
}
