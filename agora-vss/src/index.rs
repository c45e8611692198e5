use crate::VssError;
use bls::Scalar;

use std::fmt;

/// Maximum number of participants.
pub const N_MAX: usize = 250;
/// Maximum supported polynomial degree.
pub const T_MAX: usize = (N_MAX - 1) / 2;
/// Maximum length of a coefficient or verification vector.
pub const MAX_COEFFICIENTS: usize = T_MAX + 1;

/// Evaluation point of a participant, always in `[1, N_MAX]`.
///
/// Participant `i` (0-based ordinal) is evaluated at `i + 1`, never at zero.
#[derive(Debug, Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Hash)]
pub struct ParticipantIndex(u8);

impl ParticipantIndex {
    pub const MIN: Self = Self(1);
    pub const MAX: Self = Self(N_MAX as u8);

    pub fn new(index: u8) -> Result<Self, VssError> {
        if index == 0 || usize::from(index) > N_MAX {
            Err(VssError::InvalidIndex(index.into()))
        } else {
            Ok(Self(index))
        }
    }

    pub fn from_ordinal(ordinal: usize) -> Result<Self, VssError> {
        if ordinal >= N_MAX {
            return Err(VssError::InvalidIndex(ordinal.saturating_add(1)));
        }
        // ordinal < N_MAX <= u8::MAX
        Ok(Self(ordinal as u8 + 1))
    }

    /// Indices `1..=participants` in increasing order.
    pub fn all(participants: usize) -> Result<impl Iterator<Item = Self>, VssError> {
        if participants > N_MAX {
            return Err(VssError::TooManyParticipants(participants));
        }
        Ok((1..=participants as u8).map(Self))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn ordinal(self) -> usize {
        usize::from(self.0) - 1
    }

    pub fn as_scalar(self) -> Scalar {
        Scalar::from(u64::from(self.0))
    }
}

impl TryFrom<u8> for ParticipantIndex {
    type Error = VssError;
    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::new(index)
    }
}

impl From<ParticipantIndex> for u8 {
    fn from(index: ParticipantIndex) -> Self {
        index.0
    }
}

impl fmt::Display for ParticipantIndex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
