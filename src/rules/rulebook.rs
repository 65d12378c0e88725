//! 음운 규칙집 로드 및 적용
//!
//! 탭으로 구분된 `패턴<TAB>치환` 줄을 순서대로 읽어
//! 정규식 규칙 목록을 만들고, 한 번 호출에 전체 규칙을
//! 적힌 순서 그대로 한 차례씩 적용합니다.

use std::fs;
use std::path::Path;

use regex::Regex;

/// 규칙집 로드/파싱 에러
#[derive(Debug)]
pub enum RuleBookError {
    /// 파일 읽기 실패
    Io(std::io::Error),
    /// 탭으로 구분된 패턴/치환 필드 누락
    MissingField { line: usize, content: String },
    /// 패턴 컴파일 실패
    BadPattern { line: usize, message: String },
}

impl std::fmt::Display for RuleBookError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleBookError::Io(e) => write!(f, "규칙집 파일 읽기 오류: {}", e),
            RuleBookError::MissingField { line, content } => {
                write!(f, "규칙집 {}행: 탭 구분 필드가 없습니다: {:?}", line, content)
            }
            RuleBookError::BadPattern { line, message } => {
                write!(f, "규칙집 {}행: 패턴 컴파일 실패: {}", line, message)
            }
        }
    }
}

impl std::error::Error for RuleBookError {}

impl From<std::io::Error> for RuleBookError {
    fn from(e: std::io::Error) -> Self {
        RuleBookError::Io(e)
    }
}

/// 패턴 하나와 그 치환 문자열
#[derive(Debug, Clone)]
pub struct Rule {
    /// 매칭 패턴
    pattern: Regex,
    /// 치환 문자열 (빈 문자열이면 삭제 규칙)
    replacement: String,
    /// 규칙집 파일에서의 행 번호 (진단용)
    line: usize,
}

impl Rule {
    /// 규칙집에서의 행 번호
    pub fn line(&self) -> usize {
        self.line
    }

    /// 패턴 원문
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

/// 순서가 의미를 갖는 음운 규칙 목록
///
/// 규칙 순서는 파일에 적힌 순서 그대로 보존됩니다.
/// 로드 후에는 불변이며 여러 변환 요청이 동시에 읽어도 안전합니다.
#[derive(Debug, Clone)]
pub struct RuleBook {
    rules: Vec<Rule>,
}

impl RuleBook {
    /// 규칙집 파일 로드
    ///
    /// # 파일 형식
    /// 빈 줄과 `#`으로 시작하는 줄은 무시.
    /// 나머지 줄은 `패턴<TAB>치환` (치환이 비면 삭제 규칙).
    /// 치환에서는 `\1` 형식으로 캡처 그룹을 참조할 수 있습니다.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RuleBookError> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// 규칙집 텍스트 파싱
    pub fn parse(text: &str) -> Result<Self, RuleBookError> {
        let mut rules = Vec::new();

        for (idx, raw) in text.lines().enumerate() {
            let line_no = idx + 1;

            if raw.trim().is_empty() || raw.trim_start().starts_with('#') {
                continue;
            }

            // trim하지 않고 자름: 삭제 규칙은 탭 뒤가 빈 문자열
            let mut fields = raw.splitn(3, '\t');
            let pattern_src = match fields.next() {
                Some(p) if !p.is_empty() => p,
                _ => {
                    return Err(RuleBookError::MissingField {
                        line: line_no,
                        content: raw.to_string(),
                    })
                }
            };
            let replacement_src = fields.next().ok_or_else(|| RuleBookError::MissingField {
                line: line_no,
                content: raw.to_string(),
            })?;

            let pattern =
                Regex::new(pattern_src).map_err(|e| RuleBookError::BadPattern {
                    line: line_no,
                    message: e.to_string(),
                })?;

            rules.push(Rule {
                pattern,
                replacement: convert_replacement(replacement_src),
                line: line_no,
            });
        }

        Ok(Self { rules })
    }

    /// 빈 규칙집 생성 (테스트용)
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// 전체 규칙을 적힌 순서대로 한 차례씩 적용
    ///
    /// 규칙 1의 출력이 규칙 2의 입력이 되는 식으로 끝까지 이어집니다.
    /// 각 규칙은 현재 문자열 안의 겹치지 않는 모든 매칭을 치환합니다.
    pub fn apply_once(&self, phones: &str) -> String {
        let mut current = phones.to_string();
        for rule in &self.rules {
            current = rule
                .pattern
                .replace_all(&current, rule.replacement.as_str())
                .into_owned();
        }
        current
    }

    /// 규칙 수
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// 규칙이 하나도 없는지 확인
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// 규칙 목록 (순서 보존)
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}

/// `\1` 형식의 그룹 참조를 정규식 치환 문법 `${1}`로 변환
/// 치환 데이터의 `$`는 리터럴로 취급
fn convert_replacement(raw: &str) -> String {
    let mut converted = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek().is_some_and(|d| d.is_ascii_digit()) => {
                converted.push_str("${");
                while let Some(&d) = chars.peek() {
                    if d.is_ascii_digit() {
                        converted.push(d);
                        chars.next();
                    } else {
                        break;
                    }
                }
                converted.push('}');
            }
            '$' => converted.push_str("$$"),
            _ => converted.push(c),
        }
    }

    converted
}
