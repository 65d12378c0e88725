//! 통합 테스트 - 내장 규칙집 기반 전체 변환 파이프라인

use baleum::evaluation::{self, TestSet};
use baleum::G2pConverter;

fn rulebook_path() -> String {
    format!("{}/data/rulebook.txt", env!("CARGO_MANIFEST_DIR"))
}

fn testset_path() -> String {
    format!("{}/data/testset.txt", env!("CARGO_MANIFEST_DIR"))
}

fn converter() -> G2pConverter {
    G2pConverter::load(&rulebook_path()).expect("규칙집 로드")
}

#[test]
fn test_nasalization() {
    let c = converter();
    assert_eq!(c.convert("국물").unwrap(), "k0 uu ng mm uu ll"); // 궁물
    assert_eq!(c.convert("먹는").unwrap(), "mm vv ng nn xx nf"); // 멍는
}

#[test]
fn test_nasalization_of_liquid_needs_two_passes() {
    // 백로 -> 뱅노: ㄹ이 먼저 ㄴ이 되고, 그 ㄴ이 다음 패스에서 받침 ㄱ을 비음화
    let c = converter();
    assert_eq!(c.convert("백로").unwrap(), "p0 qq ng nn oo");
}

#[test]
fn test_liquidization() {
    let c = converter();
    assert_eq!(c.convert("신라").unwrap(), "s0 ii ll rr aa"); // 실라
    assert_eq!(c.convert("칼날").unwrap(), "kh aa ll rr aa ll"); // 칼랄
}

#[test]
fn test_liaison() {
    let c = converter();
    assert_eq!(c.convert("먹어").unwrap(), "mm vv k0 vv"); // 머거
    assert_eq!(c.convert("옷이").unwrap(), "oo s0 ii"); // 오시
    assert_eq!(c.convert("값이").unwrap(), "k0 aa pf ss ii"); // 갑씨
    assert_eq!(c.convert("읽어").unwrap(), "ii ll k0 vv"); // 일거
}

#[test]
fn test_h_deletion_and_aspiration() {
    let c = converter();
    assert_eq!(c.convert("좋아").unwrap(), "c0 oo aa"); // 조아
    assert_eq!(c.convert("좋고").unwrap(), "c0 oo kh oo"); // 조코
    assert_eq!(c.convert("않고").unwrap(), "aa nf kh oo"); // 안코
    // 못하다 -> 모타다: ㅅ이 먼저 ㄷ으로 중화된 뒤 다음 패스에서 격음화
    assert_eq!(c.convert("못하다").unwrap(), "mm oo th aa t0 aa");
}

#[test]
fn test_palatalization() {
    let c = converter();
    assert_eq!(c.convert("같이").unwrap(), "k0 aa ch ii"); // 가치
    assert_eq!(c.convert("굳이").unwrap(), "k0 uu c0 ii"); // 구지
}

#[test]
fn test_coda_neutralization() {
    let c = converter();
    assert_eq!(c.convert("부엌").unwrap(), "p0 uu vv kf"); // 부억
    assert_eq!(c.convert("밖").unwrap(), "p0 aa kf"); // 박
    assert_eq!(c.convert("읽고").unwrap(), "ii ll kk oo"); // 일꼬
}

#[test]
fn test_tensification() {
    let c = converter();
    assert_eq!(c.convert("먹고").unwrap(), "mm vv kf kk oo"); // 먹꼬
    assert_eq!(c.convert("국밥").unwrap(), "k0 uu kf pp aa pf"); // 국빱
}

#[test]
fn test_no_rule_needed() {
    let c = converter();
    assert_eq!(c.convert("스물").unwrap(), "s0 xx mm uu ll");
    assert_eq!(c.convert("강").unwrap(), "k0 aa ng");
}

#[test]
fn test_phrase_with_word_boundary() {
    let c = converter();
    assert_eq!(c.convert("한 글").unwrap(), "h0 aa nf k0 xx ll");
    assert_eq!(
        c.convert("국물 먹는").unwrap(),
        "k0 uu ng mm uu ll mm vv ng nn xx nf"
    );
    // 연음은 단어 경계를 넘어서도 적용됨
    assert_eq!(c.convert("맑은 물").unwrap(), "mm aa ll k0 xx nf mm uu ll");
}

#[test]
fn test_embedded_punctuation_is_elided() {
    // 단어 안의 숫자/구두점은 음소 없이 탈락하며,
    // 각 음절이 자기 경계를 내므로 음소 내용은 붙지 않음 (동작 고정)
    let c = converter();
    assert_eq!(c.convert("가1나").unwrap(), c.convert("가나").unwrap());
    assert_eq!(c.convert("가1나").unwrap(), "k0 aa nn aa");
}

#[test]
fn test_whitespace_only_input() {
    let c = converter();
    assert_eq!(c.convert("").unwrap(), "");
    assert_eq!(c.convert("   ").unwrap(), "");
    assert_eq!(c.convert("...").unwrap(), "");
}

#[test]
fn test_shipped_testset_is_clean() {
    // 내장 규칙집 + 내장 테스트셋: 불일치 0건
    let c = converter();
    let testset = TestSet::load(testset_path()).expect("테스트셋 로드");
    assert!(!testset.is_empty());

    let report = evaluation::evaluate(&c, &testset).expect("평가 실행");
    assert_eq!(report.total, testset.len());
    assert!(
        report.is_clean(),
        "불일치 {}건: {:?}",
        report.failures.len(),
        report.failures
    );
    assert_eq!(report.passed(), report.total);
}
