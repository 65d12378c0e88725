//! 순서 있는 음운 규칙집 모듈

mod rulebook;

pub use rulebook::{Rule, RuleBook, RuleBookError};
