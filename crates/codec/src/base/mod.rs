mod nucleotide;

pub use nucleotide::Nucleotide;
