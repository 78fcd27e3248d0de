//! Wire encodings shared by every signature type.
//!
//! Group elements travel in their canonical 32-byte compressed form. Scalars travel as 32-byte
//! big-endian integers, whereas `curve25519_dalek::scalar::Scalar` stores them little-endian, so
//! every scalar crossing the wire is byte-reversed here.

use crate::error::{Error, Malformed};
use curve25519_dalek::ristretto::{CompressedRistretto, RistrettoPoint};
use curve25519_dalek::scalar::Scalar;

/// Length of every encoded scalar and group element
pub const ELEMENT_LEN: usize = 32;

/// Big-endian encoding of a scalar
pub fn scalar_to_bytes(s: &Scalar) -> [u8; ELEMENT_LEN] {
    let mut bytes = s.to_bytes();
    bytes.reverse();
    bytes
}

/// Decode a big-endian scalar, rejecting values outside `[0, n)`
pub fn scalar_from_bytes(bytes: &[u8]) -> Result<Scalar, Error> {
    let mut le = fixed(bytes)?;
    le.reverse();
    Option::<Scalar>::from(Scalar::from_canonical_bytes(le))
        .ok_or(Error::MalformedInput(Malformed::NonCanonicalScalar))
}

/// Decode a canonical Ristretto encoding
pub fn point_from_bytes(bytes: &[u8]) -> Result<(CompressedRistretto, RistrettoPoint), Error> {
    let compressed = CompressedRistretto(fixed(bytes)?);
    let point = compressed
        .decompress()
        .ok_or(Error::MalformedInput(Malformed::InvalidCurvePoint))?;
    Ok((compressed, point))
}

/// Copy a slice into a 32-byte array, failing on any other length
pub fn fixed(bytes: &[u8]) -> Result<[u8; ELEMENT_LEN], Error> {
    <[u8; ELEMENT_LEN]>::try_from(bytes).map_err(|_| Error::length_mismatch(bytes.len(), ELEMENT_LEN))
}

#[cfg(test)]
mod test {
    use super::*;
    use curve25519_dalek::constants::RISTRETTO_BASEPOINT_COMPRESSED;

    #[test]
    fn scalars_are_big_endian() {
        let bytes = scalar_to_bytes(&Scalar::from(0x0102u64));
        assert_eq!(bytes[31], 0x02);
        assert_eq!(bytes[30], 0x01);
        assert!(bytes[..30].iter().all(|b| *b == 0));
        assert_eq!(scalar_from_bytes(&bytes).unwrap(), Scalar::from(0x0102u64));
    }

    #[test]
    fn rejects_unreduced_scalar() {
        let bytes = [0xffu8; 32];
        assert_eq!(
            scalar_from_bytes(&bytes),
            Err(Error::MalformedInput(Malformed::NonCanonicalScalar))
        );
    }

    #[test]
    fn rejects_wrong_lengths() {
        assert_eq!(scalar_from_bytes(&[0u8; 31]), Err(Error::length_mismatch(31, 32)));
        assert_eq!(
            point_from_bytes(&[0u8; 33]).map(|_| ()),
            Err(Error::length_mismatch(33, 32))
        );
    }

    #[test]
    fn decodes_basepoint_and_rejects_garbage() {
        let (_, point) = point_from_bytes(RISTRETTO_BASEPOINT_COMPRESSED.as_bytes()).unwrap();
        assert_eq!(point.compress(), RISTRETTO_BASEPOINT_COMPRESSED);

        // Negative field elements are never canonical
        let mut bad = [0u8; 32];
        bad[0] = 1;
        assert_eq!(
            point_from_bytes(&bad).map(|_| ()),
            Err(Error::MalformedInput(Malformed::InvalidCurvePoint))
        );
    }
}
