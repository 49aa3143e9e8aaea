//! steganocrypt: classical ciphers and LSB image steganography.
//!
//! A small library of byte/bit-level primitives for two jobs: encrypting
//! byte streams with classical symmetric schemes (Caesar, Vigenère,
//! single-byte XOR, one-time pad, chained-XOR block mode) and hiding
//! bit-level payloads in the least significant bits of packed-ARGB pixel
//! grids.
//!
//! Every operation is a pure function over caller-supplied values: no
//! I/O, no shared state, freshly allocated outputs. Key, IV and pad
//! buffers are never mutated. None of the cipher schemes provide
//! cryptographic security; they are round-trip-exact byte transforms.
//!
//! # Architecture
//!
//! ```text
//! utils::bits   (atomic unit — bit arrays, single-bit get/set)
//!     ↕
//! utils::image  (packed-ARGB pixels, grayscale, binarization)
//! utils::text   (UTF-8 boundary conversions)
//!     ↕
//! cipher        (five symmetric byte-stream schemes)
//! stegano       (LSB embedding/extraction over pixel grids)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt a message with the chained-XOR block mode:
//!
//! ```
//! use steganocrypt::cipher;
//!
//! let plain = b"meet me at midnight";
//! let iv = [0xC0, 0xFF, 0xEE];
//!
//! let encrypted = cipher::cbc_encrypt(plain, &iv).unwrap();
//! assert_ne!(encrypted, plain);
//!
//! let decrypted = cipher::cbc_decrypt(&encrypted, &iv).unwrap();
//! assert_eq!(decrypted, plain);
//! ```
//!
//! Hide a text message in a cover image and reveal it again:
//!
//! ```
//! use steganocrypt::stegano::text;
//!
//! let cover = vec![vec![0xFF101010u32; 8]; 4];
//!
//! let hidden = text::embed_text(&cover, b"hi").unwrap();
//! let revealed = text::reveal_text(&hidden).unwrap();
//! assert_eq!(&revealed[..2], b"hi");
//! ```

#![deny(clippy::all)]

pub mod error;

pub mod cipher;
pub mod stegano;
pub mod utils;

pub use error::SteganoCryptError;
