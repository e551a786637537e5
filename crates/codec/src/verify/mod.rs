mod hamming;
mod parity;

pub use hamming::Hamming;
pub use parity::Parity;

use serde::{Deserialize, Serialize};

use crate::error::CodecError;
use crate::matrix::BitMatrix;
use crate::progress::ProgressMonitor;
use crate::traits::VerificationMethod;

/// Verification schemes for row-level error handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verifier {
    /// Extended Hamming code: corrects one bit and detects two per row.
    Hamming,
    /// Single even-parity bit: detects an odd number of flipped bits per row.
    Parity,
}

impl std::fmt::Display for Verifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hamming => write!(f, "hamming"),
            Self::Parity => write!(f, "parity"),
        }
    }
}

impl std::str::FromStr for Verifier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hamming" => Ok(Self::Hamming),
            "parity" => Ok(Self::Parity),
            _ => Err(format!("Unknown verification method: {s}. Available: hamming, parity")),
        }
    }
}

impl VerificationMethod for Verifier {
    fn add_for_matrix(
        &self,
        matrix: BitMatrix,
        monitor: &mut dyn ProgressMonitor,
    ) -> Result<BitMatrix, CodecError> {
        match self {
            Verifier::Hamming => Hamming.add_for_matrix(matrix, monitor),
            Verifier::Parity => Parity.add_for_matrix(matrix, monitor),
        }
    }

    fn verify_for_matrix(
        &self,
        matrix: BitMatrix,
        monitor: &mut dyn ProgressMonitor,
    ) -> Result<BitMatrix, CodecError> {
        match self {
            Verifier::Hamming => Hamming.verify_for_matrix(matrix, monitor),
            Verifier::Parity => Parity.verify_for_matrix(matrix, monitor),
        }
    }
}
