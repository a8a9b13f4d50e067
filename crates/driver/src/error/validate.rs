//! Buffer-shape checks run before anything reaches the back-end
//!
//! Every check that fails here reports `NotSupported`: the request is well
//! formed as a PSA call but its shape is outside what this driver handles, so
//! the front-end may try another driver.

use super::{PsaError, PsaResult};
use p256m_params::driver::{
    P256_PUBLIC_KEY_SIZE, P256_RAW_PUBLIC_KEY_SIZE, P256_UNCOMPRESSED_POINT_TAG,
};
use tracing::trace;

/// Require `actual == expected`
pub fn exact_size(context: &'static str, actual: usize, expected: usize) -> PsaResult<()> {
    if actual != expected {
        trace!(context, actual, expected, "buffer size rejected");
        return Err(PsaError::NotSupported);
    }
    Ok(())
}

/// Require `actual >= minimum`
pub fn min_size(context: &'static str, actual: usize, minimum: usize) -> PsaResult<()> {
    if actual < minimum {
        trace!(context, actual, minimum, "buffer capacity rejected");
        return Err(PsaError::NotSupported);
    }
    Ok(())
}

/// View an input buffer as exactly `N` bytes
pub fn exact_array<'a, const N: usize>(
    context: &'static str,
    buffer: &'a [u8],
) -> PsaResult<&'a [u8; N]> {
    exact_size(context, buffer.len(), N)?;
    buffer.try_into().map_err(|_| PsaError::NotSupported)
}

/// View an output buffer as exactly `N` bytes
pub fn exact_array_mut<'a, const N: usize>(
    context: &'static str,
    buffer: &'a mut [u8],
) -> PsaResult<&'a mut [u8; N]> {
    exact_size(context, buffer.len(), N)?;
    buffer.try_into().map_err(|_| PsaError::NotSupported)
}

/// View the first `N` bytes of an output buffer holding at least `N`
pub fn prefix_array_mut<'a, const N: usize>(
    context: &'static str,
    buffer: &'a mut [u8],
) -> PsaResult<&'a mut [u8; N]> {
    min_size(context, buffer.len(), N)?;
    buffer
        .get_mut(..N)
        .and_then(|prefix| prefix.try_into().ok())
        .ok_or(PsaError::NotSupported)
}

/// Check a 65-byte uncompressed point and return its 64-byte `X || Y` body
///
/// Only the length and the leading tag are inspected here. Whether the point
/// lies on the curve is the back-end's call.
pub fn uncompressed_point<'a>(
    context: &'static str,
    key: &'a [u8],
) -> PsaResult<&'a [u8; P256_RAW_PUBLIC_KEY_SIZE]> {
    exact_size(context, key.len(), P256_PUBLIC_KEY_SIZE)?;
    match key.split_first() {
        Some((&P256_UNCOMPRESSED_POINT_TAG, body)) => exact_array(context, body),
        Some((&tag, _)) => {
            trace!(context, tag, "point encoding rejected");
            Err(PsaError::NotSupported)
        }
        None => Err(PsaError::NotSupported),
    }
}
