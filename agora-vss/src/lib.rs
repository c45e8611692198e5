#![deny(clippy::all)]
#![deny(clippy::dbg_macro)]
//! Share evaluation and verification for Feldman style verifiable secret
//! sharing over BLS12-381 G2.
//!
//! The dealer's secret polynomial
//!
//! $$a(x) = a_0 + a_1x +\ldots + a_tx^t$$
//!
//! is committed to by its public version
//!
//! $$A(x) = A_0 + A_1x +\ldots + A_tx^t$$
//!
//! with $A_i = g_2^{a_i}\in\mathbb{G_2}$. Participant $i$ receives $a(i + 1)$
//! privately and checks it against $A(i + 1)$, which anyone can compute from
//! the published verification vector.
mod codec;
mod error;
mod evaluate;
mod index;
mod parameters;
mod share;
mod vector;

pub use codec::{
    decode_g2_vector, encode_g2_vector, encode_g2_vector_into, export_scalar, import_scalar,
    Compression, FR_BYTES, G2_BYTES,
};
pub use error::VssError;
pub use evaluate::{
    g2_image, g2_images, private_shares, scalar_image, scalar_image_export, scalar_image_lifted,
};
pub use index::{ParticipantIndex, MAX_COEFFICIENTS, N_MAX, T_MAX};
pub use parameters::{Parameters, RawParameters};
pub use share::{verify_share, PrivateShare, PublicKeyShare};
pub use vector::{CoefficientVector, VerificationVector};
