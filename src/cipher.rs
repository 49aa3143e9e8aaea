//! Classical symmetric byte-stream ciphers.
//!
//! Five schemes, each with an encrypt and an inverse decrypt operation
//! over arbitrary-length byte slices: Caesar shift, repeating-key
//! Vigenère, single-byte XOR, one-time pad, and a chained-XOR block
//! mode. All arithmetic is modulo 256. Key, keyword, pad and IV buffers
//! are read-only; the chained-XOR mode works on a private copy of its
//! IV.
//!
//! None of these schemes provide cryptographic security. They are
//! round-trip-exact byte transforms, nothing more.

use crate::error::SteganoCryptError;

/// Encrypts a message by adding a single-byte key to every byte.
///
/// Addition wraps around at 256. Any key value is valid.
///
/// # Parameters
/// - `plain`: The message to encrypt.
/// - `key`: The shift to apply to each byte.
///
/// # Returns
/// The encrypted message, same length as `plain`.
///
/// # Examples
///
/// ```
/// use steganocrypt::cipher;
///
/// assert_eq!(cipher::caesar_encrypt(&[65, 66, 67], 1), vec![66, 67, 68]);
/// ```
pub fn caesar_encrypt(plain: &[u8], key: u8) -> Vec<u8> {
    plain.iter().map(|&byte| byte.wrapping_add(key)).collect()
}

/// Decrypts a Caesar-encrypted message by subtracting the key from
/// every byte.
///
/// # Parameters
/// - `cipher`: The message to decrypt.
/// - `key`: The shift that was applied during encryption.
///
/// # Returns
/// The decrypted message, same length as `cipher`.
pub fn caesar_decrypt(cipher: &[u8], key: u8) -> Vec<u8> {
    cipher.iter().map(|&byte| byte.wrapping_sub(key)).collect()
}

/// Encrypts a message by adding a repeating keyword to it.
///
/// Byte `i` of the keyword stream is `keyword[i % keyword.len()]`;
/// addition wraps around at 256.
///
/// # Parameters
/// - `plain`: The message to encrypt.
/// - `keyword`: The repeating key. Must not be empty.
///
/// # Returns
/// The encrypted message, same length as `plain`.
///
/// # Errors
/// Returns [`SteganoCryptError::EmptyKeyword`] if `keyword` is empty.
pub fn vigenere_encrypt(plain: &[u8], keyword: &[u8]) -> Result<Vec<u8>, SteganoCryptError> {
    if keyword.is_empty() {
        return Err(SteganoCryptError::EmptyKeyword);
    }
    Ok(plain
        .iter()
        .enumerate()
        .map(|(i, &byte)| byte.wrapping_add(keyword[i % keyword.len()]))
        .collect())
}

/// Decrypts a Vigenère-encrypted message by subtracting the repeating
/// keyword from it.
///
/// # Parameters
/// - `cipher`: The message to decrypt.
/// - `keyword`: The repeating key used during encryption. Must not be
///   empty.
///
/// # Returns
/// The decrypted message, same length as `cipher`.
///
/// # Errors
/// Returns [`SteganoCryptError::EmptyKeyword`] if `keyword` is empty.
pub fn vigenere_decrypt(cipher: &[u8], keyword: &[u8]) -> Result<Vec<u8>, SteganoCryptError> {
    if keyword.is_empty() {
        return Err(SteganoCryptError::EmptyKeyword);
    }
    Ok(cipher
        .iter()
        .enumerate()
        .map(|(i, &byte)| byte.wrapping_sub(keyword[i % keyword.len()]))
        .collect())
}

/// Encrypts a message by XORing every byte with a single-byte key.
///
/// # Parameters
/// - `plain`: The message to encrypt.
/// - `key`: The byte to XOR with.
///
/// # Returns
/// The encrypted message, same length as `plain`.
pub fn xor_encrypt(plain: &[u8], key: u8) -> Vec<u8> {
    plain.iter().map(|&byte| byte ^ key).collect()
}

/// Decrypts a XOR-encrypted message.
///
/// XOR is an involution: applying the same key a second time restores
/// the original input, so this delegates to [`xor_encrypt`].
///
/// # Parameters
/// - `cipher`: The message to decrypt.
/// - `key`: The byte that was XORed during encryption.
///
/// # Returns
/// The decrypted message, same length as `cipher`.
pub fn xor_decrypt(cipher: &[u8], key: u8) -> Vec<u8> {
    xor_encrypt(cipher, key)
}

/// Encrypts a message with a one-time pad of the same length.
///
/// Every byte is XORed with the pad byte at the same index.
///
/// # Parameters
/// - `plain`: The message to encrypt.
/// - `pad`: The pad. Must be exactly as long as `plain`.
///
/// # Returns
/// The encrypted message, same length as `plain`.
///
/// # Errors
/// Returns [`SteganoCryptError::PadLengthMismatch`] if
/// `pad.len() != plain.len()`.
pub fn one_time_pad_encrypt(plain: &[u8], pad: &[u8]) -> Result<Vec<u8>, SteganoCryptError> {
    if pad.len() != plain.len() {
        return Err(SteganoCryptError::PadLengthMismatch);
    }
    Ok(plain
        .iter()
        .zip(pad.iter())
        .map(|(&byte, &pad_byte)| byte ^ pad_byte)
        .collect())
}

/// Decrypts a one-time-pad-encrypted message.
///
/// A per-byte XOR is an involution, so this delegates to
/// [`one_time_pad_encrypt`] with the cipher text acting as the input.
///
/// # Parameters
/// - `cipher`: The message to decrypt.
/// - `pad`: The pad used during encryption. Must be exactly as long as
///   `cipher`.
///
/// # Returns
/// The decrypted message, same length as `cipher`.
///
/// # Errors
/// Returns [`SteganoCryptError::PadLengthMismatch`] if
/// `pad.len() != cipher.len()`.
pub fn one_time_pad_decrypt(cipher: &[u8], pad: &[u8]) -> Result<Vec<u8>, SteganoCryptError> {
    one_time_pad_encrypt(cipher, pad)
}

/// Encrypts a message with the chained-XOR block mode.
///
/// The IV seeds a running pad of length `T = iv.len()`. The message is
/// processed in blocks of `T` bytes (the last block may be shorter):
/// each byte is XORed with the pad byte at its in-block offset, and the
/// pad byte is then replaced by the cipher byte just produced. The pad
/// is therefore a single-block feedback register reused across all
/// blocks, not a textbook CBC chain.
///
/// The caller's IV is never modified; the running pad is a private
/// copy.
///
/// # Parameters
/// - `plain`: The message to encrypt.
/// - `iv`: The initialization vector. Must not be empty.
///
/// # Returns
/// The encrypted message, same length as `plain`.
///
/// # Errors
/// Returns [`SteganoCryptError::EmptyIv`] if `iv` is empty.
///
/// # Examples
///
/// ```
/// use steganocrypt::cipher;
///
/// let plain = b"block chaining example";
/// let iv = [0x13, 0x37];
/// let encrypted = cipher::cbc_encrypt(plain, &iv).unwrap();
/// let decrypted = cipher::cbc_decrypt(&encrypted, &iv).unwrap();
/// assert_eq!(decrypted, plain);
/// ```
pub fn cbc_encrypt(plain: &[u8], iv: &[u8]) -> Result<Vec<u8>, SteganoCryptError> {
    if iv.is_empty() {
        return Err(SteganoCryptError::EmptyIv);
    }
    let block_size = iv.len();
    let mut pad = iv.to_vec();
    let mut cipher = vec![0u8; plain.len()];
    let num_blocks = plain.len().div_ceil(block_size);
    for i in 0..num_blocks {
        // The last block may stop short of a full pad width
        for j in 0..block_size {
            let k = i * block_size + j;
            if k >= plain.len() {
                break;
            }
            cipher[k] = plain[k] ^ pad[j];
            pad[j] = cipher[k];
        }
    }
    Ok(cipher)
}

/// Decrypts a chained-XOR-encrypted message.
///
/// Mirrors [`cbc_encrypt`]: each byte is XORed with the running pad at
/// its in-block offset, and the pad byte is then replaced by the cipher
/// byte just consumed — the same value the encrypting side stored, which
/// keeps the two registers in lockstep for any number of blocks.
///
/// The caller's IV is never modified.
///
/// # Parameters
/// - `cipher`: The message to decrypt.
/// - `iv`: The initialization vector used during encryption. Must not
///   be empty.
///
/// # Returns
/// The decrypted message, same length as `cipher`.
///
/// # Errors
/// Returns [`SteganoCryptError::EmptyIv`] if `iv` is empty.
pub fn cbc_decrypt(cipher: &[u8], iv: &[u8]) -> Result<Vec<u8>, SteganoCryptError> {
    if iv.is_empty() {
        return Err(SteganoCryptError::EmptyIv);
    }
    let block_size = iv.len();
    let mut pad = iv.to_vec();
    let mut plain = vec![0u8; cipher.len()];
    let num_blocks = cipher.len().div_ceil(block_size);
    for i in 0..num_blocks {
        for j in 0..block_size {
            let k = i * block_size + j;
            if k >= cipher.len() {
                break;
            }
            plain[k] = cipher[k] ^ pad[j];
            pad[j] = cipher[k];
        }
    }
    Ok(plain)
}
