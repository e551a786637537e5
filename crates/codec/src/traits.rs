use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::CodecError;
use crate::matrix::{BitMatrix, Layout};
use crate::model::Model;
use crate::progress::ProgressMonitor;
use crate::seqio::SymbolSequence;

/// Converts bit matrices to symbol sequences and back.
///
/// `encode` records whatever it needs for the reverse direction, which is why
/// it takes `&mut self`. That includes the [`Layout`] it was given: `decode`
/// must return it unchanged alongside the exact matrix that was encoded.
pub trait EncodingMethod {
    fn encode(
        &mut self,
        matrix: BitMatrix,
        layout: Layout,
        monitor: &mut dyn ProgressMonitor,
    ) -> Result<Vec<SymbolSequence>, CodecError>;

    fn decode(
        &self,
        sequences: &[SymbolSequence],
        monitor: &mut dyn ProgressMonitor,
    ) -> Result<(BitMatrix, Layout), CodecError>;
}

/// Adds per-row redundancy and later checks (and possibly repairs) it.
pub trait VerificationMethod {
    fn add_for_matrix(
        &self,
        matrix: BitMatrix,
        monitor: &mut dyn ProgressMonitor,
    ) -> Result<BitMatrix, CodecError>;

    /// Strip the redundancy again. Fails with [`CodecError::Uncorrectable`]
    /// when a row cannot be restored.
    fn verify_for_matrix(
        &self,
        matrix: BitMatrix,
        monitor: &mut dyn ProgressMonitor,
    ) -> Result<BitMatrix, CodecError>;
}

/// Embeds row positions so the original order survives reordering.
pub trait IndexOperator {
    fn connect_all(
        &self,
        matrix: BitMatrix,
        monitor: &mut dyn ProgressMonitor,
    ) -> Result<BitMatrix, CodecError>;

    /// Split every row into its index and its payload bits.
    fn divide_all(
        &self,
        matrix: BitMatrix,
        monitor: &mut dyn ProgressMonitor,
    ) -> Result<(Vec<usize>, Vec<Vec<u8>>), CodecError>;

    /// Place each payload row at the position named by its index.
    fn sort_order(
        &self,
        indexes: Vec<usize>,
        rows: Vec<Vec<u8>>,
        monitor: &mut dyn ProgressMonitor,
    ) -> Result<BitMatrix, CodecError>;
}

/// Persists the configuration used at encode time.
pub trait ModelStore {
    fn save<M: Serialize, V: Serialize>(
        &self,
        path: &Path,
        model: &Model<M, V>,
    ) -> Result<(), CodecError>;

    fn load<M: DeserializeOwned, V: DeserializeOwned>(
        &self,
        path: &Path,
    ) -> Result<Model<M, V>, CodecError>;
}
