use crate::codec::{export_scalar, import_scalar, FR_BYTES};
use crate::{ParticipantIndex, VssError};

use bls::{G2Affine, Scalar};
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use std::fmt;

/// Returns whether `share * G2 == public_share`.
pub fn verify_share(share: &Scalar, public_share: &G2Affine) -> bool {
    let expected = G2Affine::from(G2Affine::generator() * share);
    expected.ct_eq(public_share).into()
}

/// `P(index)`, the secret share a dealer sends to a single participant.
pub struct PrivateShare {
    index: ParticipantIndex,
    value: Scalar,
}

impl PrivateShare {
    pub fn new(index: ParticipantIndex, value: Scalar) -> Self {
        Self { index, value }
    }

    pub fn import(index: ParticipantIndex, bytes: &[u8]) -> Result<Self, VssError> {
        Ok(Self::new(index, import_scalar(bytes)?))
    }

    pub fn index(&self) -> ParticipantIndex {
        self.index
    }

    pub fn value(&self) -> &Scalar {
        &self.value
    }

    pub fn export(&self) -> [u8; FR_BYTES] {
        export_scalar(&self.value)
    }

    pub fn public_key_share(&self) -> PublicKeyShare {
        PublicKeyShare::new(
            self.index,
            G2Affine::from(G2Affine::generator() * self.value),
        )
    }

    /// False if the shares belong to different participants.
    pub fn verify(&self, public_share: &PublicKeyShare) -> bool {
        self.index == public_share.index() && verify_share(&self.value, public_share.value())
    }
}

impl Drop for PrivateShare {
    fn drop(&mut self) {
        self.value.zeroize();
    }
}

impl fmt::Debug for PrivateShare {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("PrivateShare")
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

/// `Q(index)`, the public counterpart of a [`PrivateShare`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PublicKeyShare {
    index: ParticipantIndex,
    value: G2Affine,
}

impl PublicKeyShare {
    pub fn new(index: ParticipantIndex, value: G2Affine) -> Self {
        Self { index, value }
    }

    pub fn index(&self) -> ParticipantIndex {
        self.index
    }

    pub fn value(&self) -> &G2Affine {
        &self.value
    }
}
