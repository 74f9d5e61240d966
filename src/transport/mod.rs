//! Transport layer: HTTP and wire-format details (form encoding, reply decoding).

mod send_sms;

pub use send_sms::{decode_send_response, encode_send_form};
