//! 핵심 변환 파이프라인: 음절 분해 -> 음소열 -> 발음열

pub mod converter;
pub mod phonemize;
pub mod syllable;

pub use converter::{G2pConfig, G2pConverter, G2pError};
pub use phonemize::romanize;
pub use syllable::decompose_syllable;
