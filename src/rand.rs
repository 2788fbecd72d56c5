//! Cryptographically secure randomness.

use crate::scalar::ORDER;
use ethnum::U256;
use std::{io, os::raw::c_int};

/// Populates the provided slice with cryptographically strong entropy.
pub fn get_entropy(mut buf: impl AsMut<[u8]>) -> io::Result<()> {
    let buf = buf.as_mut();
    let result = unsafe { getentropy(buf.as_mut_ptr(), buf.len()) };
    if result >= 0 {
        Ok(())
    } else {
        Err(io::Error::last_os_error())
    }
}

/// Samples a uniformly random scalar in `[1, ORDER)`.
///
/// Candidates outside of the range are discarded and resampled.
pub fn scalar() -> io::Result<U256> {
    loop {
        let mut buf = [0_u8; 32];
        get_entropy(&mut buf)?;
        let candidate = U256::from_be_bytes(buf);
        if candidate != U256::ZERO && candidate < ORDER {
            return Ok(candidate);
        }
    }
}

extern "C" {
    fn getentropy(buffer: *mut u8, len: usize) -> c_int;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_os_entropy() {
        let mut buf = [0u8; 32];
        assert!(get_entropy(&mut buf[..16]).is_ok());
        assert!(get_entropy(&mut buf).is_ok());
    }

    #[test]
    fn error_reading_more_than_256_bytes() {
        let mut buf = [0u8; 257];
        assert!(get_entropy(&mut buf).is_err());
    }

    #[test]
    fn random_scalars_are_distinct_and_in_range() {
        let a = scalar().unwrap();
        let b = scalar().unwrap();
        assert_ne!(a, b);
        assert!(a < ORDER && b < ORDER);
    }
}
