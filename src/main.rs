//! Baleum - 한국어 발음 변환 프로그램

use baleum::config::load_config;
use baleum::evaluation::{self, TestSet};
use baleum::rules::RuleBook;
use baleum::{G2pConfig, G2pConverter};
use std::env;
use std::process;

fn main() {
    let mut verbose = false;
    let mut args = Vec::new();
    for arg in env::args().skip(1) {
        if arg == "-v" || arg == "--verbose" {
            verbose = true;
        } else {
            args.push(arg);
        }
    }

    // 로깅 초기화 (-v면 변환 패스별 디버그 출력)
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if args.is_empty() {
        eprintln!("사용법: baleum [-v] '<한글 텍스트>'");
        eprintln!("       baleum [-v] test [테스트셋 경로]");
        process::exit(2);
    }

    // 설정 로드
    let config = load_config();

    let rulebook = match RuleBook::load(&config.rulebook_path) {
        Ok(book) => book,
        Err(e) => {
            eprintln!("규칙집 로드 실패 ({}): {}", config.rulebook_path, e);
            process::exit(1);
        }
    };
    log::debug!("규칙 {}개 로드: {}", rulebook.len(), config.rulebook_path);

    let converter = G2pConverter::with_config(
        rulebook,
        G2pConfig::new().with_max_passes(config.max_passes),
    );

    if args[0] == "test" {
        // G2P 성능 평가 모드
        let testset_path = args
            .get(1)
            .map(String::as_str)
            .unwrap_or(&config.testset_path);
        run_test(&converter, testset_path, &config.results_path);
    } else {
        match converter.convert(&args[0]) {
            Ok(prono) => println!("{}", prono),
            Err(e) => {
                eprintln!("변환 실패 ({:?}): {}", args[0], e);
                process::exit(1);
            }
        }
    }
}

/// 테스트셋 평가 실행 및 결과 보고
fn run_test(converter: &G2pConverter, testset_path: &str, results_path: &str) {
    println!("[ G2P 성능 평가 ]");

    let testset = match TestSet::load(testset_path) {
        Ok(set) => set,
        Err(e) => {
            eprintln!("테스트셋 로드 실패 ({}): {}", testset_path, e);
            process::exit(1);
        }
    };

    let report = match evaluation::evaluate(converter, &testset) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("평가 실패: {}", e);
            process::exit(1);
        }
    };

    for failure in &report.failures {
        println!(
            "G2P 오류:  [결과] {}\t\t\t[정답] {} [{}] {}",
            failure.actual, failure.input, failure.expected, failure.expected_phones
        );
    }
    println!("총 {}건 중 실패 {}건", report.total, report.failures.len());
    println!("소요 시간: {:?}", report.elapsed);

    if let Err(e) = report.write_results(results_path) {
        eprintln!("결과 파일 저장 실패 ({}): {}", results_path, e);
    }

    if !report.is_clean() {
        process::exit(1);
    }
}
