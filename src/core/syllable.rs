//! 한글 음절 블록 분해 (음소 코드 변환)

/// 한글 음절 시작 코드포인트 (가)
const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// 한글 음절 끝 코드포인트 (힣)
const HANGUL_SYLLABLE_LAST: u32 = 0xD7A3;

/// 중성 개수
const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
const JONGSEONG_COUNT: u32 = 28;

/// 초성 로마자 음소 코드 (19개)
/// ㄱ ㄲ ㄴ ㄷ ㄸ ㄹ ㅁ ㅂ ㅃ ㅅ ㅆ ㅇ ㅈ ㅉ ㅊ ㅋ ㅌ ㅍ ㅎ
#[rustfmt::skip]
pub const ONSETS: [&str; 19] = [
    "k0", "kk", "nn", "t0", "tt", "rr", "mm", "p0", "pp", "s0",
    "ss", "oh", "c0", "cc", "ch", "kh", "th", "ph", "h0",
];

/// 중성 로마자 음소 코드 (21개)
/// ㅏ ㅐ ㅑ ㅒ ㅓ ㅔ ㅕ ㅖ ㅗ ㅘ ㅙ ㅚ ㅛ ㅜ ㅝ ㅞ ㅟ ㅠ ㅡ ㅢ ㅣ
#[rustfmt::skip]
pub const NUCLEI: [&str; 21] = [
    "aa", "qq", "ya", "yq", "vv", "ee", "yv", "ye", "oo", "wa",
    "wq", "wo", "yo", "uu", "wv", "we", "wi", "yu", "xx", "xi",
    "ii",
];

/// 종성 로마자 음소 코드 (28개, 인덱스 0 = 종성 없음)
/// 없음 ㄱ ㄲ ㄳ ㄴ ㄵ ㄶ ㄷ ㄹ ㄺ ㄻ ㄼ ㄽ ㄾ ㄿ ㅀ ㅁ ㅂ ㅄ ㅅ ㅆ ㅇ ㅈ ㅊ ㅋ ㅌ ㅍ ㅎ
#[rustfmt::skip]
pub const CODAS: [&str; 28] = [
    "",   "kf", "kk", "ks", "nf", "nc", "nh", "tf", "ll", "lk",
    "lm", "lb", "ls", "lt", "lp", "lh", "mf", "pf", "ps", "s0",
    "ss", "oh", "c0", "ch", "kh", "th", "ph", "h0",
];

/// 완성형 한글 음절인지 확인
pub fn is_hangul_syllable(c: char) -> bool {
    (HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&(c as u32))
}

/// 완성형 한글을 초성/중성/종성 인덱스로 분해
/// 반환: (초성 인덱스 0~18, 중성 인덱스 0~20, 종성 인덱스 0~27, 0 = 종성 없음)
pub fn decompose_indices(c: char) -> Option<(u32, u32, u32)> {
    if !is_hangul_syllable(c) {
        return None;
    }
    let offset = c as u32 - HANGUL_SYLLABLE_BASE;
    let jongseong = offset % JONGSEONG_COUNT;
    let jungseong = (offset / JONGSEONG_COUNT) % JUNGSEONG_COUNT;
    let choseong = offset / (JUNGSEONG_COUNT * JONGSEONG_COUNT);
    Some((choseong, jungseong, jongseong))
}

/// 완성형 한글을 음소 코드 세 쌍으로 분해
/// 반환: (초성 코드, 중성 코드, 종성 코드 — 종성 없으면 빈 문자열)
pub fn decompose_syllable(c: char) -> Option<(&'static str, &'static str, &'static str)> {
    let (cho, jung, jong) = decompose_indices(c)?;
    Some((
        ONSETS[cho as usize],
        NUCLEI[jung as usize],
        CODAS[jong as usize],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_hangul_syllable() {
        assert!(is_hangul_syllable('가')); // 0xAC00
        assert!(is_hangul_syllable('힣')); // 0xD7A3
        assert!(is_hangul_syllable('물'));

        // 한글이 아닌 문자
        assert!(!is_hangul_syllable('a'));
        assert!(!is_hangul_syllable('1'));
        assert!(!is_hangul_syllable('ㄱ')); // 낱자모는 음절 블록이 아님
        assert!(!is_hangul_syllable(' '));
    }

    #[test]
    fn test_decompose_indices() {
        assert_eq!(decompose_indices('가'), Some((0, 0, 0)));
        assert_eq!(decompose_indices('각'), Some((0, 0, 1)));
        assert_eq!(decompose_indices('한'), Some((18, 0, 4)));
        assert_eq!(decompose_indices('글'), Some((0, 18, 8)));

        assert_eq!(decompose_indices('a'), None);
    }

    #[test]
    fn test_decompose_syllable() {
        assert_eq!(decompose_syllable('가'), Some(("k0", "aa", "")));
        assert_eq!(decompose_syllable('한'), Some(("h0", "aa", "nf")));
        assert_eq!(decompose_syllable('글'), Some(("k0", "xx", "ll")));
        assert_eq!(decompose_syllable('스'), Some(("s0", "xx", "")));
        assert_eq!(decompose_syllable('물'), Some(("mm", "uu", "ll")));
        assert_eq!(decompose_syllable('강'), Some(("k0", "aa", "oh")));
        assert_eq!(decompose_syllable('닭'), Some(("t0", "aa", "lk")));

        // 범위 양끝
        assert_eq!(decompose_syllable('가'), Some(("k0", "aa", "")));
        assert_eq!(decompose_syllable('힣'), Some(("h0", "ii", "h0")));

        assert_eq!(decompose_syllable('!'), None);
        assert_eq!(decompose_syllable('ㅏ'), None);
    }

    #[test]
    fn test_roundtrip_all_syllables() {
        // 전체 음절 범위: 인덱스 범위 검증 + 재조합 일치
        for code in 0xAC00u32..=0xD7A3 {
            let c = char::from_u32(code).unwrap();
            let (cho, jung, jong) = decompose_indices(c).unwrap();

            assert!(cho < 19);
            assert!(jung < 21);
            assert!(jong < 28);

            let recomposed = 0xAC00 + cho * 588 + jung * 28 + jong;
            assert_eq!(recomposed, code);
        }
    }
}
