use crate::VssError;
use bls::{G2Affine, Scalar};
use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

/// Length of an exported scalar.
pub const FR_BYTES: usize = 32;
/// Length of an uncompressed G2 point.
pub const G2_BYTES: usize = 192;

const G2_COMPRESSED_BYTES: usize = G2_BYTES / 2;

/// Point encoding used on the wire.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compression {
    Uncompressed = 0,
    #[default]
    Compressed = 1,
}

impl Compression {
    /// Size of a single encoded G2 point.
    pub const fn point_size(self) -> usize {
        G2_BYTES / (self as usize + 1)
    }
}

fn write_point(point: &G2Affine, compression: Compression, out: &mut [u8]) {
    match compression {
        Compression::Compressed => out.copy_from_slice(&point.to_compressed()),
        Compression::Uncompressed => out.copy_from_slice(&point.to_uncompressed()),
    }
}

fn read_point(bytes: &[u8], compression: Compression) -> Option<G2Affine> {
    match compression {
        Compression::Compressed => {
            let bytes = <&[u8; G2_COMPRESSED_BYTES]>::try_from(bytes).ok()?;
            G2Affine::from_compressed(bytes).into()
        }
        Compression::Uncompressed => {
            let bytes = <&[u8; G2_BYTES]>::try_from(bytes).ok()?;
            G2Affine::from_uncompressed(bytes).into()
        }
    }
}

/// Concatenates the encodings of `points` without any framing.
///
/// The number of points is not part of the output, the reader has to know it.
pub fn encode_g2_vector(points: &[G2Affine], compression: Compression) -> Vec<u8> {
    let mut out = vec![0u8; points.len() * compression.point_size()];
    for (chunk, point) in out.chunks_exact_mut(compression.point_size()).zip(points) {
        write_point(point, compression, chunk);
    }
    out
}

/// Same as [`encode_g2_vector`] but writes into a buffer of exactly
/// `points.len() * point_size` bytes.
pub fn encode_g2_vector_into(
    points: &[G2Affine],
    compression: Compression,
    out: &mut [u8],
) -> Result<(), VssError> {
    let size = compression.point_size();
    let expected = points.len() * size;
    if out.len() != expected {
        return Err(VssError::BufferLengthMismatch {
            expected,
            actual: out.len(),
        });
    }
    for (chunk, point) in out.chunks_exact_mut(size).zip(points) {
        write_point(point, compression, chunk);
    }
    Ok(())
}

/// Parses `len` consecutive G2 points from the front of `bytes`.
///
/// Every point is checked to be on the curve and in the prime order
/// subgroup. The first invalid point fails the whole decode, nothing is
/// returned partially. Bytes past `len * point_size` are ignored.
pub fn decode_g2_vector(
    bytes: &[u8],
    len: usize,
    compression: Compression,
) -> Result<Vec<G2Affine>, VssError> {
    let size = compression.point_size();
    let expected = len.checked_mul(size).unwrap_or(usize::MAX);
    if bytes.len() < expected {
        return Err(VssError::BufferTooShort {
            expected,
            actual: bytes.len(),
        });
    }

    tracing::trace!(len, point_size = size, "decoding g2 vector");
    bytes[..expected]
        .chunks_exact(size)
        .enumerate()
        .map(|(i, chunk)| {
            read_point(chunk, compression).ok_or(VssError::InvalidPointEncoding(i))
        })
        .collect()
}

/// Big-endian encoding of a scalar in `[0, r)`.
pub fn export_scalar(scalar: &Scalar) -> [u8; FR_BYTES] {
    let mut bytes = scalar.to_bytes();
    bytes.reverse();
    bytes
}

/// Parses a big-endian scalar, rejecting values that are not reduced modulo `r`.
pub fn import_scalar(bytes: &[u8]) -> Result<Scalar, VssError> {
    let mut le_bytes =
        <[u8; FR_BYTES]>::try_from(bytes).map_err(|_| VssError::InvalidScalarEncoding)?;
    le_bytes.reverse();
    let scalar = Option::<Scalar>::from(Scalar::from_bytes(&le_bytes));
    le_bytes.zeroize();
    scalar.ok_or(VssError::InvalidScalarEncoding)
}

#[cfg(test)]
mod test {
    use super::*;
    use ff::Field;
    use rand_core::OsRng;

    fn random_points(n: usize) -> Vec<G2Affine> {
        let mut rng = OsRng;
        (0..n)
            .map(|_| G2Affine::from(G2Affine::generator() * Scalar::random(&mut rng)))
            .collect()
    }

    #[test]
    fn point_sizes() {
        assert_eq!(Compression::default(), Compression::Compressed);
        assert_eq!(Compression::Compressed.point_size(), 96);
        assert_eq!(Compression::Uncompressed.point_size(), 192);
    }

    #[test]
    fn vector_round_trip() {
        let mut points = random_points(4);
        points.push(G2Affine::identity());
        points.push(G2Affine::generator());

        for compression in [Compression::Compressed, Compression::Uncompressed] {
            let bytes = encode_g2_vector(&points, compression);
            assert_eq!(bytes.len(), points.len() * compression.point_size());
            let decoded = decode_g2_vector(&bytes, points.len(), compression).unwrap();
            assert_eq!(decoded, points);

            let mut buffer = vec![0u8; bytes.len()];
            encode_g2_vector_into(&points, compression, &mut buffer).unwrap();
            assert_eq!(buffer, bytes);
        }

        assert!(encode_g2_vector(&[], Compression::Compressed).is_empty());
        assert_eq!(
            decode_g2_vector(&[], 0, Compression::Compressed),
            Ok(Vec::new())
        );
    }

    #[test]
    fn encode_into_checks_buffer_length() {
        let points = random_points(2);
        let mut buffer = vec![0u8; 191];
        assert_eq!(
            encode_g2_vector_into(&points, Compression::Compressed, &mut buffer),
            Err(VssError::BufferLengthMismatch {
                expected: 192,
                actual: 191
            })
        );
    }

    #[test]
    fn decode_length_handling() {
        let points = random_points(3);
        let mut bytes = encode_g2_vector(&points, Compression::Compressed);

        assert_eq!(
            decode_g2_vector(&bytes[..250], 3, Compression::Compressed),
            Err(VssError::BufferTooShort {
                expected: 288,
                actual: 250
            })
        );
        // prefix only
        assert_eq!(
            decode_g2_vector(&bytes, 2, Compression::Compressed).unwrap(),
            points[..2]
        );
        // trailing bytes are not inspected
        bytes.extend_from_slice(&[0xff; 10]);
        assert_eq!(
            decode_g2_vector(&bytes, 3, Compression::Compressed).unwrap(),
            points
        );
        assert!(matches!(
            decode_g2_vector(&bytes, usize::MAX, Compression::Compressed),
            Err(VssError::BufferTooShort { .. })
        ));
    }

    #[test]
    fn decode_rejects_corruption() {
        let points = random_points(3);
        for compression in [Compression::Compressed, Compression::Uncompressed] {
            let size = compression.point_size();
            let bytes = encode_g2_vector(&points, compression);

            let mut corrupted = bytes.clone();
            corrupted[size + size / 2] ^= 0x01;
            assert_eq!(
                decode_g2_vector(&corrupted, 3, compression),
                Err(VssError::InvalidPointEncoding(1))
            );

            let mut corrupted = bytes.clone();
            corrupted[2 * size + size - 1] ^= 0x80;
            assert_eq!(
                decode_g2_vector(&corrupted, 3, compression),
                Err(VssError::InvalidPointEncoding(2))
            );
        }

        // flag bits do not match the requested mode
        let bytes = encode_g2_vector(&points, Compression::Compressed);
        assert_eq!(
            decode_g2_vector(&bytes, 1, Compression::Uncompressed),
            Err(VssError::InvalidPointEncoding(0))
        );
    }

    #[test]
    fn scalar_export_is_big_endian() {
        let bytes = export_scalar(&Scalar::from(0x0102_u64));
        assert_eq!(bytes[FR_BYTES - 2..], [0x01_u8, 0x02]);
        assert!(bytes[..FR_BYTES - 2].iter().all(|b| *b == 0));

        let scalar = Scalar::random(&mut OsRng);
        assert_eq!(import_scalar(&export_scalar(&scalar)), Ok(scalar));
        assert_eq!(import_scalar(&export_scalar(&-Scalar::one())), Ok(-Scalar::one()));
    }

    #[test]
    fn scalar_import_rejects_invalid() {
        assert_eq!(
            import_scalar(&[0u8; 31]),
            Err(VssError::InvalidScalarEncoding)
        );
        // not reduced modulo r
        assert_eq!(
            import_scalar(&[0xff; FR_BYTES]),
            Err(VssError::InvalidScalarEncoding)
        );
    }
}
