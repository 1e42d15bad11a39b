const BASIC_SYMBOLS: &[u8; 64] =
  b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
const URL_SYMBOLS: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Marks bytes that are not part of an alphabet.
pub(crate) const INVALID: u8 = 0xFF;

static BASIC_DECODE: [u8; 256] = decode_table(BASIC_SYMBOLS);
static BASIC_IGNORABLE_RELAXED: [bool; 256] = ignorable_relaxed(&BASIC_DECODE);
static IGNORABLE_STRICT: [bool; 256] = ignorable_strict();
static URL_DECODE: [u8; 256] = decode_table(URL_SYMBOLS);
static URL_IGNORABLE_RELAXED: [bool; 256] = ignorable_relaxed(&URL_DECODE);

/// Set of 64 symbols that represent 6-bit groups.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Base64Alphabet {
  /// `+` and `/` as the last two symbols.
  #[default]
  Basic,
  /// URL and filename safe, `-` and `_` as the last two symbols.
  Url,
}

impl Base64Alphabet {
  /// Maps every byte to its 6-bit value or to `0xFF` if the byte is not a symbol.
  #[inline]
  pub const fn decode_table(self) -> &'static [u8; 256] {
    match self {
      Self::Basic => &BASIC_DECODE,
      Self::Url => &URL_DECODE,
    }
  }

  /// Encodes `bytes` into the beginning of `out`, returning the number of written bytes.
  #[cfg(feature = "base64")]
  #[inline]
  pub fn encode_to_slice(
    self,
    bytes: &[u8],
    out: &mut [u8],
    is_padded: bool,
  ) -> crate::Result<usize> {
    use base64::{
      Engine,
      engine::general_purpose::{STANDARD, STANDARD_NO_PAD, URL_SAFE, URL_SAFE_NO_PAD},
    };
    let engine = match (self, is_padded) {
      (Self::Basic, true) => &STANDARD,
      (Self::Basic, false) => &STANDARD_NO_PAD,
      (Self::Url, true) => &URL_SAFE,
      (Self::Url, false) => &URL_SAFE_NO_PAD,
    };
    Ok(engine.encode_slice(bytes, out)?)
  }

  /// Bytes skipped when unrecognized bytes are not errors: everything that is not a symbol and
  /// not `=`.
  #[inline]
  pub const fn ignorable_relaxed(self) -> &'static [bool; 256] {
    match self {
      Self::Basic => &BASIC_IGNORABLE_RELAXED,
      Self::Url => &URL_IGNORABLE_RELAXED,
    }
  }

  /// ASCII whitespace, skipped when unrecognized bytes are errors.
  #[inline]
  pub const fn ignorable_strict() -> &'static [bool; 256] {
    &IGNORABLE_STRICT
  }

  /// The 64 symbols ordered by value.
  #[inline]
  pub const fn symbols(self) -> &'static [u8; 64] {
    match self {
      Self::Basic => BASIC_SYMBOLS,
      Self::Url => URL_SYMBOLS,
    }
  }
}

/// Upper bound of the number of decoded bytes of `input_len` encoded bytes.
#[inline]
pub const fn max_decoded_length(input_len: usize) -> usize {
  input_len.saturating_add(3) / 4 * 3
}

/// Number of bytes produced by the encoding of `input_len` bytes.
#[inline]
pub const fn max_encoded_length(input_len: usize, is_padded: bool) -> usize {
  if is_padded {
    input_len.saturating_add(2) / 3 * 4
  } else {
    let rem = input_len % 3;
    input_len / 3 * 4 + if rem == 0 { 0 } else { rem + 1 }
  }
}

#[allow(
  clippy::cast_possible_truncation,
  clippy::indexing_slicing,
  reason = "`idx` is lesser than 64 and every `u8` fits in the table"
)]
const fn decode_table(symbols: &[u8; 64]) -> [u8; 256] {
  let mut table = [INVALID; 256];
  let mut idx = 0;
  while idx < symbols.len() {
    table[symbols[idx] as usize] = idx as u8;
    idx += 1;
  }
  table
}

#[allow(clippy::indexing_slicing, reason = "both tables have the same length")]
const fn ignorable_relaxed(decode: &[u8; 256]) -> [bool; 256] {
  let mut table = [false; 256];
  let mut idx = 0;
  while idx < table.len() {
    table[idx] = decode[idx] == INVALID && idx != b'=' as usize;
    idx += 1;
  }
  table
}

#[allow(clippy::indexing_slicing, reason = "indices are ASCII")]
const fn ignorable_strict() -> [bool; 256] {
  let mut table = [false; 256];
  let mut idx = b'\t' as usize;
  while idx <= 0x0D {
    table[idx] = true;
    idx += 1;
  }
  table[b' ' as usize] = true;
  table
}
