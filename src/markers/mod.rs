//! Region marker synthesis and stripping.
//!
//! The two halves are mutual inverses: stripping the markers the
//! synthesizer inserted reproduces the original text byte for byte.

pub mod stripper;
pub mod synthesizer;

pub use stripper::MarkerStripper;
pub use synthesizer::MarkerSynthesizer;
