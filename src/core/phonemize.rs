//! 그래핌 문자열 -> 로마자 음소열 변환
//!
//! 한글 음절은 음절 경계(`-`)와 함께 음소 코드로 풀어 쓰고,
//! 공백은 단어 경계(`#`)로 표시합니다. 그 외 문자는 버립니다.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::syllable::decompose_syllable;

/// 음절 경계 바로 뒤의 초성 이응 (음가 없음)
static BOUNDARY_OH: LazyLock<Regex> = LazyLock::new(|| Regex::new("-(oh)").unwrap());

/// 문자열 맨 앞의 초성 이응 (앞에 경계가 없는 경우)
static LEADING_OH: LazyLock<Regex> = LazyLock::new(|| Regex::new("^oh").unwrap());

/// 음절 경계 앞의 받침 이응
static CODA_OH_BEFORE_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| Regex::new("oh-").unwrap());

/// 단어 경계/공백/문자열 끝 앞의 받침 이응
static CODA_OH_FINAL: LazyLock<Regex> = LazyLock::new(|| Regex::new("oh([# ]|$)").unwrap());

/// 비음소 문자 뒤에 붙은 음절 경계
static BOUNDARY_AFTER_NONWORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\W+)-").unwrap());

/// 문자열 끝의 비음소 문자
static TRAILING_NONWORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\W+$").unwrap());

/// 문자열 맨 앞의 음절 경계
static LEADING_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| Regex::new("^-").unwrap());

/// 그래핌 문자열을 경계 표시가 붙은 로마자 음소열로 변환
///
/// 문자 분류는 세 갈래입니다:
/// - 한글 음절: `-` + 초성 + 중성 + 종성 (종성 없으면 생략)
/// - 공백 (U+0020): `#`
/// - 그 외 (구두점, 숫자, 로마자 등): 버림
///
/// 초성 이응은 음가가 없으므로 글자를 내보낼 때마다 즉시 지웁니다.
/// 뒤따르는 경계 정리 단계들이 문자 인접성을 전제하기 때문에
/// 걷기가 끝난 뒤에 몰아서 지우면 안 됩니다.
pub fn romanize(graphs: &str) -> String {
    let mut phones = String::new();

    for c in graphs.chars() {
        if let Some((onset, nucleus, coda)) = decompose_syllable(c) {
            phones.push('-');
            phones.push_str(onset);
            phones.push_str(nucleus);
            phones.push_str(coda); // 종성 없으면 빈 문자열
        } else if c == ' ' {
            phones.push('#');
        }
        // 그 외 문자는 내보내지 않음

        phones = BOUNDARY_OH.replace_all(&phones, "-").into_owned();
    }

    // 문두 초성 이응 제거
    let phones = LEADING_OH.replace_all(&phones, "");
    // 남은 음절 초 이응 제거 (경계째)
    let phones = BOUNDARY_OH.replace_all(&phones, "");
    // 받침 이응은 연구개 비음 'ng'로 실현
    let phones = CODA_OH_BEFORE_BOUNDARY.replace_all(&phones, "ng-");
    let phones = CODA_OH_FINAL.replace_all(&phones, "ng");
    // 비음소 문자 뒤의 경계 제거, 꼬리/머리 정리
    let phones = BOUNDARY_AFTER_NONWORD.replace_all(&phones, "${1}");
    let phones = TRAILING_NONWORD.replace_all(&phones, "");
    let phones = LEADING_BOUNDARY.replace_all(&phones, "");

    phones.into_owned()
}

/// 경계 없는 음소열을 두 글자씩 끊어 공백으로 구분
pub fn space_out(phones: &str) -> String {
    let chars: Vec<char> = phones.chars().collect();
    let mut spaced = String::new();
    let mut ipos = 0;

    while ipos + 1 < chars.len() {
        if ipos > 0 {
            spaced.push(' ');
        }
        spaced.push(chars[ipos]);
        spaced.push(chars[ipos + 1]);
        ipos += 2;
    }

    spaced
}
