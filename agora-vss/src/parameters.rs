use crate::codec::Compression;
use crate::evaluate::{g2_images, private_shares};
use crate::share::{PrivateShare, PublicKeyShare};
use crate::vector::{CoefficientVector, VerificationVector};
use crate::{VssError, N_MAX, T_MAX};

use serde::{Deserialize, Serialize};

/// Round parameters every participant agrees on before dealing.
///
/// `threshold` is the polynomial degree, so `threshold + 1` shares are
/// needed to reconstruct the secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawParameters")]
pub struct Parameters {
    threshold: usize,
    nodes: usize,
    compression: Compression,
}

/// Unchecked form of [`Parameters`], used when deserializing.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RawParameters {
    pub threshold: usize,
    pub nodes: usize,
    #[serde(default)]
    pub compression: Compression,
}

impl Parameters {
    pub fn new(threshold: usize, nodes: usize) -> Result<Self, VssError> {
        if nodes > N_MAX {
            return Err(VssError::TooManyParticipants(nodes));
        }
        if nodes == 0 || threshold > T_MAX || threshold >= nodes {
            return Err(VssError::InvalidThreshold { threshold, nodes });
        }
        Ok(Self {
            threshold,
            nodes,
            compression: Compression::default(),
        })
    }

    pub fn with_compression(self, compression: Compression) -> Self {
        Self {
            compression,
            ..self
        }
    }

    pub fn nodes(&self) -> usize {
        self.nodes
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn compression(&self) -> Compression {
        self.compression
    }

    /// Expected length of coefficient and verification vectors.
    pub fn coefficients(&self) -> usize {
        self.threshold + 1
    }

    /// Size of an encoded verification vector.
    pub fn vector_bytes(&self) -> usize {
        self.coefficients() * self.compression.point_size()
    }

    fn check_degree(&self, len: usize) -> Result<(), VssError> {
        if len != self.coefficients() {
            return Err(VssError::VectorLengthMismatch {
                expected: self.coefficients(),
                actual: len,
            });
        }
        Ok(())
    }

    pub fn encode_verification_vector(
        &self,
        vector: &VerificationVector,
    ) -> Result<Vec<u8>, VssError> {
        self.check_degree(vector.len())?;
        Ok(vector.to_bytes(self.compression))
    }

    /// Decodes a verification vector of exactly `threshold + 1` points.
    pub fn decode_verification_vector(&self, bytes: &[u8]) -> Result<VerificationVector, VssError> {
        if bytes.len() != self.vector_bytes() {
            return Err(VssError::BufferLengthMismatch {
                expected: self.vector_bytes(),
                actual: bytes.len(),
            });
        }
        VerificationVector::from_bytes(bytes, self.coefficients(), self.compression)
    }

    /// Private shares of all `nodes` participants.
    pub fn private_shares(
        &self,
        coeffs: &CoefficientVector,
    ) -> Result<Vec<PrivateShare>, VssError> {
        self.check_degree(coeffs.len())?;
        private_shares(coeffs, self.nodes)
    }

    /// Public key shares of all `nodes` participants.
    pub fn public_key_shares(
        &self,
        vector: &VerificationVector,
    ) -> Result<Vec<PublicKeyShare>, VssError> {
        self.check_degree(vector.len())?;
        g2_images(vector, self.nodes)
    }
}

impl TryFrom<RawParameters> for Parameters {
    type Error = VssError;
    fn try_from(raw: RawParameters) -> Result<Self, Self::Error> {
        Ok(Self::new(raw.threshold, raw.nodes)?.with_compression(raw.compression))
    }
}
