mod church;
mod simple;

pub use church::{Church, DEFAULT_MAX_HOMOPOLYMER};
pub use simple::Simple;

use serde::{Deserialize, Serialize};

use crate::error::CodecError;
use crate::matrix::{BitMatrix, Layout};
use crate::progress::ProgressMonitor;
use crate::seqio::SymbolSequence;
use crate::traits::EncodingMethod;

/// Shape of the matrix a method last encoded, needed to invert it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shape {
    /// Payload layout handed over by the pipeline.
    pub layout: Layout,
    /// Bits per matrix row, including index and verification bits.
    pub row_width: usize,
}

impl Shape {
    fn require(shape: Option<Shape>) -> Result<Shape, CodecError> {
        shape.ok_or_else(|| {
            CodecError::Decode(
                "Method has no recorded layout; encode with it first or load a model".into(),
            )
        })
    }
}

/// Encoding methods available to the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Method {
    /// Two bits per base, direct mapping.
    Simple(Simple),
    /// One bit per base with homopolymer control.
    Church(Church),
}

impl Method {
    /// Shape recorded by the last encode, if any.
    pub fn shape(&self) -> Option<Shape> {
        match self {
            Method::Simple(m) => m.shape(),
            Method::Church(m) => m.shape(),
        }
    }
}

impl Default for Method {
    fn default() -> Self {
        Self::Simple(Simple::default())
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Simple(_) => write!(f, "simple"),
            Self::Church(_) => write!(f, "church"),
        }
    }
}

impl std::str::FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "simple" => Ok(Self::Simple(Simple::default())),
            "church" => Ok(Self::Church(Church::default())),
            _ => Err(format!("Unknown encoding method: {s}. Available: simple, church")),
        }
    }
}

impl EncodingMethod for Method {
    fn encode(
        &mut self,
        matrix: BitMatrix,
        layout: Layout,
        monitor: &mut dyn ProgressMonitor,
    ) -> Result<Vec<SymbolSequence>, CodecError> {
        match self {
            Method::Simple(m) => m.encode(matrix, layout, monitor),
            Method::Church(m) => m.encode(matrix, layout, monitor),
        }
    }

    fn decode(
        &self,
        sequences: &[SymbolSequence],
        monitor: &mut dyn ProgressMonitor,
    ) -> Result<(BitMatrix, Layout), CodecError> {
        match self {
            Method::Simple(m) => m.decode(sequences, monitor),
            Method::Church(m) => m.decode(sequences, monitor),
        }
    }
}
