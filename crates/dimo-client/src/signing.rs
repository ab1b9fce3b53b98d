//! Local challenge signing (Ethereum personal-sign, EIP-191)
//!
//! Signing is CPU-bound and never touches the network, so it can be retried
//! or run on a blocking thread independently of the handshake's HTTP steps.

use alloy::primitives::{Address, Signature};
use alloy::signers::local::PrivateKeySigner;
use alloy::signers::SignerSync;

use crate::error::{DimoError, Result};

/// Parse a hex private key, with or without `0x`.
///
/// The key itself never appears in the error.
pub fn parse_private_key(private_key: &str) -> Result<PrivateKeySigner> {
    let trimmed = private_key.trim();
    if trimmed.is_empty() {
        return Err(DimoError::validation(
            "private_key",
            "must be a non-empty string",
        ));
    }
    trimmed.parse::<PrivateKeySigner>().map_err(|_| {
        DimoError::validation("private_key", "not a valid 32-byte secp256k1 private key")
    })
}

/// Sign `message` with `private_key`, returning `0x` + hex(r || s || v)
pub fn sign_challenge(message: &str, private_key: &str) -> Result<String> {
    let signer = parse_private_key(private_key)?;
    sign_with(&signer, message)
}

/// Sign `message` with an already parsed key
pub fn sign_with(signer: &PrivateKeySigner, message: &str) -> Result<String> {
    let signature = signer
        .sign_message_sync(message.as_bytes())
        .map_err(|e| DimoError::Signing(e.to_string()))?;
    Ok(encode_signature(&signature))
}

/// 65-byte signature as `0x`-prefixed hex, `v` in {27, 28}
pub fn encode_signature(signature: &Signature) -> String {
    format!("0x{}", hex::encode(signature.as_bytes()))
}

/// Checksummed address controlled by `private_key`
pub fn address_of(private_key: &str) -> Result<String> {
    Ok(parse_private_key(private_key)?.address().to_checksum(None))
}

/// Recover the address that produced `signature` over `message`
pub fn recover_signer(message: &str, signature: &str) -> Result<Address> {
    let raw = hex::decode(signature.trim_start_matches("0x"))
        .map_err(|e| DimoError::validation("signature", e.to_string()))?;
    let signature = Signature::from_raw(&raw)
        .map_err(|e| DimoError::validation("signature", e.to_string()))?;
    signature
        .recover_address_from_msg(message.as_bytes())
        .map_err(|e| DimoError::Signing(e.to_string()))
}
