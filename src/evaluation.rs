//! G2P 성능 평가 하네스
//!
//! `입력<TAB>정답 표기` 형식의 테스트셋을 읽어, 정답 표기에서
//! 유도한 음소열과 변환기 출력을 항목별로 비교합니다.

use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

use crate::core::converter::{G2pConverter, G2pError};
use crate::core::phonemize::{romanize, space_out};

/// 테스트셋 로드/평가 에러
#[derive(Debug)]
pub enum EvalError {
    /// 파일 읽기/쓰기 실패
    Io(std::io::Error),
    /// 탭으로 구분된 입력/정답 필드 누락
    MissingField { line: usize, content: String },
    /// 항목 변환 실패 (문제 입력 포함)
    Convert { input: String, source: G2pError },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvalError::Io(e) => write!(f, "테스트셋 파일 입출력 오류: {}", e),
            EvalError::MissingField { line, content } => {
                write!(f, "테스트셋 {}행: 탭 구분 필드가 없습니다: {:?}", line, content)
            }
            EvalError::Convert { input, source } => {
                write!(f, "항목 {:?} 변환 실패: {}", input, source)
            }
        }
    }
}

impl std::error::Error for EvalError {}

impl From<std::io::Error> for EvalError {
    fn from(e: std::io::Error) -> Self {
        EvalError::Io(e)
    }
}

/// 테스트 항목: 입력 표기와 정답 발음 표기
#[derive(Debug, Clone)]
pub struct TestItem {
    /// 입력 그래핌 (맞춤법 표기)
    pub input: String,
    /// 정답 발음의 그래핌 표기
    pub expected: String,
}

/// 라벨링된 테스트셋
#[derive(Debug, Clone)]
pub struct TestSet {
    items: Vec<TestItem>,
}

impl TestSet {
    /// 테스트셋 파일 로드
    ///
    /// 빈 줄과 `#`으로 시작하는 줄은 무시.
    /// 나머지 줄은 `입력<TAB>정답 표기`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EvalError> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// 테스트셋 텍스트 파싱
    pub fn parse(text: &str) -> Result<Self, EvalError> {
        let mut items = Vec::new();

        for (idx, raw) in text.lines().enumerate() {
            if raw.trim().is_empty() || raw.trim_start().starts_with('#') {
                continue;
            }

            let mut fields = raw.splitn(3, '\t');
            let input = match fields.next() {
                Some(i) if !i.is_empty() => i,
                _ => {
                    return Err(EvalError::MissingField {
                        line: idx + 1,
                        content: raw.to_string(),
                    })
                }
            };
            let expected = fields.next().ok_or_else(|| EvalError::MissingField {
                line: idx + 1,
                content: raw.to_string(),
            })?;

            items.push(TestItem {
                input: input.to_string(),
                expected: expected.to_string(),
            });
        }

        Ok(Self { items })
    }

    /// 항목 목록
    pub fn items(&self) -> &[TestItem] {
        &self.items
    }

    /// 항목 수
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// 항목이 하나도 없는지 확인
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// 불일치 항목 상세
#[derive(Debug, Clone)]
pub struct EvalFailure {
    /// 입력 그래핌
    pub input: String,
    /// 정답 발음 표기
    pub expected: String,
    /// 정답 표기에서 유도한 음소열
    pub expected_phones: String,
    /// 변환기 출력
    pub actual: String,
}

/// 평가 결과 집계
#[derive(Debug, Clone)]
pub struct EvalReport {
    /// 전체 항목 수
    pub total: usize,
    /// 불일치 항목
    pub failures: Vec<EvalFailure>,
    /// 통과 항목 기록 (결과 파일용)
    pub passing_lines: Vec<String>,
    /// 소요 시간
    pub elapsed: Duration,
}

impl EvalReport {
    /// 통과 항목 수
    pub fn passed(&self) -> usize {
        self.total - self.failures.len()
    }

    /// 불일치 없이 전부 통과했는지 확인
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// 통과 항목을 결과 파일에 기록
    pub fn write_results(&self, path: impl AsRef<Path>) -> Result<(), EvalError> {
        let mut body = self.passing_lines.join("\n");
        if !body.is_empty() {
            body.push('\n');
        }
        fs::write(path, body)?;
        Ok(())
    }
}

/// 정답 발음 표기에서 기대 음소열 유도
/// (로마자 변환 -> 경계 제거 -> 두 글자씩 공백 구분)
pub fn expected_phones(expected_graphs: &str) -> String {
    let phones = romanize(expected_graphs).replace('-', "");
    space_out(&phones)
}

/// 테스트셋 전체를 변환기로 평가
///
/// 각 항목의 불일치는 입력/정답/실제 출력과 함께 수집되고,
/// 변환 자체가 실패하면 문제 입력을 담아 전체 평가를 중단합니다.
pub fn evaluate(converter: &G2pConverter, testset: &TestSet) -> Result<EvalReport, EvalError> {
    let begin = Instant::now();
    let total = testset.len();
    let mut failures = Vec::new();
    let mut passing_lines = Vec::new();

    for (idx, item) in testset.items().iter().enumerate() {
        log::info!("평가 항목 {}/{}: {}", idx + 1, total, item.input);

        let answer = expected_phones(&item.expected);
        let predicted = converter.convert(&item.input).map_err(|e| EvalError::Convert {
            input: item.input.clone(),
            source: e,
        })?;

        if predicted == answer {
            passing_lines.push(format!(
                "[결과] {}\t\t\t[정답] {} [{}] {}",
                predicted, item.input, item.expected, answer
            ));
        } else {
            log::warn!(
                "불일치: 입력 {:?} 정답 {:?} 실제 {:?}",
                item.input,
                answer,
                predicted
            );
            failures.push(EvalFailure {
                input: item.input.clone(),
                expected: item.expected.clone(),
                expected_phones: answer,
                actual: predicted,
            });
        }
    }

    Ok(EvalReport {
        total,
        failures,
        passing_lines,
        elapsed: begin.elapsed(),
    })
}
