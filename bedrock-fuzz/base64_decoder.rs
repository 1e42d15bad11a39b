//! Base64 decoder

#![no_main]

use bedrock::de::{Base64Alphabet, Base64Decoder, Base64DecoderOptions};

libfuzzer_sys::fuzz_target!(|data: (bool, bool, bool, u8, &[u8])| {
  let (is_padded, is_unrecognized_an_error, is_url, chunk_len, input) = data;
  let alphabet = if is_url { Base64Alphabet::Url } else { Base64Alphabet::Basic };
  let mut decoder = Base64Decoder::with_options(Base64DecoderOptions {
    alphabet,
    is_padded,
    is_unrecognized_an_error,
  });
  let mut out = [0; 3];
  for chunk in input.chunks(usize::from(chunk_len.max(1))) {
    let mut remaining = chunk;
    while !remaining.is_empty() {
      let Ok(progress) = decoder.convert(&mut out, remaining) else {
        return;
      };
      remaining = remaining.get(progress.consumed..).unwrap_or_default();
    }
  }
  let _rslt = decoder.end_convert(&mut out);
});
