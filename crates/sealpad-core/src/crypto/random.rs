use crate::error::{Result, SealpadError};

/// Fill a fixed-size array from the OS CSPRNG.
pub(crate) fn random_bytes<const N: usize>() -> Result<[u8; N]> {
    let mut bytes = [0u8; N];
    getrandom::getrandom(&mut bytes)
        .map_err(|e| SealpadError::Crypto(format!("Failed to gather randomness: {}", e)))?;
    Ok(bytes)
}
