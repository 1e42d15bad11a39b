//! Decode/Encode
//!
//! Streaming decoders that transform textual representations into raw bytes.

mod base64_alphabet;
mod base64_decoder;
mod base64_error;

pub use base64_alphabet::{Base64Alphabet, max_decoded_length, max_encoded_length};
pub use base64_decoder::{Base64Decoder, Base64DecoderOptions, Base64DecoderState, ConvertProgress};
pub use base64_error::Base64Error;
