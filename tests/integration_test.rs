//! 통합 테스트 모듈
//!
//! 탐색, 무시 목록, 변환 실행, CLI 바이너리 동작을 함께 테스트합니다.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// 테스트용 책 파일 생성 헬퍼
fn create_book(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, "book").unwrap();
    path
}

/// `a.epub`, `b.epub`, `sub/c.epub` 구조 생성
fn setup_books() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    create_book(temp_dir.path(), "a.epub");
    create_book(temp_dir.path(), "b.epub");
    create_book(temp_dir.path(), "readme.txt");

    let sub = temp_dir.path().join("sub");
    fs::create_dir(&sub).unwrap();
    create_book(&sub, "c.epub");

    temp_dir
}

/// 인자로 받은 두 경로로 동작하는 sh 스크립트 작성
///
/// 실행 권한 없이 `sh <script>` 로 호출합니다.
fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    path
}

mod discovery_tests {
    use super::*;
    use ebook_convert_helper::discover;
    use std::collections::HashSet;

    #[test]
    fn test_non_recursive_skips_subdirectories() {
        let temp_dir = setup_books();
        let root = temp_dir.path();

        let files: HashSet<PathBuf> = discover(root, "epub", false).into_iter().collect();
        let expected: HashSet<PathBuf> = [root.join("a.epub"), root.join("b.epub")]
            .into_iter()
            .collect();
        assert_eq!(files, expected);
    }

    #[test]
    fn test_recursive_includes_subdirectories() {
        let temp_dir = setup_books();
        let root = temp_dir.path();

        let files: HashSet<PathBuf> = discover(root, "epub", true).into_iter().collect();
        assert_eq!(files.len(), 3);
        assert!(files.contains(&root.join("sub").join("c.epub")));
    }

    #[test]
    fn test_other_extension() {
        let temp_dir = setup_books();
        let files = discover(temp_dir.path(), "txt", true);
        assert_eq!(files, vec![temp_dir.path().join("readme.txt")]);
    }
}

mod ignore_tests {
    use super::*;
    use ebook_convert_helper::{discover, IgnoreList};

    #[test]
    fn test_relative_entry_excludes_subtree() {
        let temp_dir = setup_books();
        let root = temp_dir.path();
        fs::write(root.join(".echignore"), "sub\n").unwrap();

        let candidates = discover(root, "epub", true);
        assert_eq!(candidates.len(), 3);

        let list = IgnoreList::load(root, &root.join(".echignore")).unwrap();
        let filtered = list.filter(candidates);
        assert_eq!(filtered.kept.len(), 2);
        assert_eq!(filtered.ignored, vec![root.join("sub").join("c.epub")]);
    }

    #[test]
    fn test_absolute_entry() {
        let temp_dir = setup_books();
        let root = temp_dir.path();
        let absolute = root.join("a.epub");
        fs::write(
            root.join(".echignore"),
            format!("{}\n\n", absolute.display()),
        )
        .unwrap();

        let list = IgnoreList::load(root, &root.join(".echignore")).unwrap();
        let filtered = list.filter(discover(root, "epub", false));
        assert_eq!(filtered.kept, vec![root.join("b.epub")]);
    }

    #[test]
    fn test_missing_ignore_file_keeps_everything() {
        let temp_dir = setup_books();
        let root = temp_dir.path();

        let list = IgnoreList::load(root, &root.join(".echignore")).unwrap();
        let candidates = discover(root, "epub", true);
        let filtered = list.filter(candidates.clone());
        assert_eq!(filtered.kept, candidates);
    }
}

#[cfg(unix)]
mod runner_tests {
    use super::*;
    use ebook_convert_helper::{
        discover, ActivityLog, ConversionRequest, ConversionRunner, ExternalConverter,
        OutcomeStatus, ProgressReporter,
    };

    fn sh_converter(script: &Path) -> ExternalConverter {
        ExternalConverter::new("sh").with_args([script])
    }

    #[test]
    fn test_example_scenario_non_recursive() {
        let temp_dir = setup_books();
        let root = temp_dir.path();
        let script = write_script(root, "ok.sh", r#"cp "$1" "$2""#);

        let request = ConversionRequest::new(root, "epub", "mobi");
        let files = discover(root, "epub", false);
        let converter = sh_converter(&script);
        let log = ActivityLog::console();
        let mut progress = ProgressReporter::hidden(files.len() as u64);

        let outcomes = ConversionRunner::new(&request, &converter, &log)
            .run(&files, &mut progress)
            .unwrap();

        assert_eq!(outcomes.len(), 2);
        assert!(outcomes.iter().all(|o| o.is_converted()));
        assert!(root.join("a.mobi").exists());
        assert!(root.join("b.mobi").exists());
        assert!(!root.join("sub").join("c.mobi").exists());
    }

    #[test]
    fn test_example_scenario_recursive() {
        let temp_dir = setup_books();
        let root = temp_dir.path();
        let script = write_script(root, "ok.sh", r#"cp "$1" "$2""#);

        let request = ConversionRequest::new(root, "epub", "mobi").with_recursive(true);
        let files = discover(root, "epub", true);
        let converter = sh_converter(&script);
        let log = ActivityLog::console();
        let mut progress = ProgressReporter::hidden(files.len() as u64);

        ConversionRunner::new(&request, &converter, &log)
            .run(&files, &mut progress)
            .unwrap();

        assert!(root.join("sub").join("c.mobi").exists());
        assert_eq!(progress.completed(), 3);
    }

    #[test]
    fn test_delete_after_confirmed_output() {
        let temp_dir = setup_books();
        let root = temp_dir.path();
        let script = write_script(root, "ok.sh", r#"cp "$1" "$2""#);

        let request = ConversionRequest::new(root, "epub", "mobi").with_delete(true);
        let files = discover(root, "epub", false);
        let converter = sh_converter(&script);
        let log = ActivityLog::console();
        let mut progress = ProgressReporter::hidden(files.len() as u64);

        let outcomes = ConversionRunner::new(&request, &converter, &log)
            .run(&files, &mut progress)
            .unwrap();

        assert!(outcomes.iter().all(|o| o.deleted));
        assert!(!root.join("a.epub").exists());
        assert!(!root.join("b.epub").exists());
        assert!(root.join("a.mobi").exists());
    }

    #[test]
    fn test_zero_exit_without_output_keeps_input() {
        let temp_dir = setup_books();
        let root = temp_dir.path();
        let script = write_script(root, "noop.sh", "exit 0");

        let request = ConversionRequest::new(root, "epub", "mobi").with_delete(true);
        let files = discover(root, "epub", false);
        let converter = sh_converter(&script);
        let log = ActivityLog::console();
        let mut progress = ProgressReporter::hidden(files.len() as u64);

        let outcomes = ConversionRunner::new(&request, &converter, &log)
            .run(&files, &mut progress)
            .unwrap();

        assert!(outcomes.iter().all(|o| o.is_converted() && !o.deleted));
        assert!(root.join("a.epub").exists());
        assert!(root.join("b.epub").exists());
    }

    #[test]
    fn test_one_failure_does_not_affect_others() {
        let temp_dir = setup_books();
        let root = temp_dir.path();
        let script = write_script(
            root,
            "flaky.sh",
            r#"case "$1" in
  */b.epub) echo "cannot read $1" >&2; exit 1 ;;
esac
cp "$1" "$2""#,
        );

        let request = ConversionRequest::new(root, "epub", "mobi")
            .with_recursive(true)
            .with_delete(true);
        let files = discover(root, "epub", true);
        let converter = sh_converter(&script);
        let log = ActivityLog::console();
        let mut progress = ProgressReporter::hidden(files.len() as u64);

        let outcomes = ConversionRunner::new(&request, &converter, &log)
            .run(&files, &mut progress)
            .unwrap();

        assert_eq!(outcomes.len(), 3);
        assert_eq!(progress.completed(), 3);

        for outcome in &outcomes {
            if outcome.input.ends_with("b.epub") {
                match &outcome.status {
                    OutcomeStatus::Failed(reason) => assert!(reason.contains("cannot read")),
                    other => panic!("expected failure, got {:?}", other),
                }
                assert!(outcome.input.exists());
                assert!(!outcome.deleted);
            } else {
                assert!(outcome.is_converted());
                assert!(outcome.deleted);
                assert!(outcome.output.exists());
            }
        }
    }
}

mod stats_tests {
    use ebook_convert_helper::stats::format_duration;
    use ebook_convert_helper::BatchSummary;
    use std::time::Duration;

    #[test]
    fn test_empty_batch_summary() {
        let summary = BatchSummary::from_outcomes(&[], Duration::from_secs(1));
        assert_eq!(summary.converted, 0);
        assert_eq!(summary.failed, 0);
        assert!(summary.success_rate().is_none());
    }

    #[test]
    fn test_format_duration_hours() {
        assert_eq!(format_duration(Duration::from_secs(7322)), "02:02:02");
    }
}

mod error_tests {
    use ebook_convert_helper::HelperError;
    use std::path::PathBuf;

    #[test]
    fn test_directory_not_found_display() {
        let error = HelperError::DirectoryNotFound {
            path: PathBuf::from("/nonexistent"),
        };
        let msg = error.to_string();
        assert!(msg.contains("/nonexistent"));
        assert!(msg.contains("doesnt exist"));
    }

    #[test]
    fn test_delete_failed_display() {
        let error = HelperError::DeleteFailed {
            path: PathBuf::from("/books/a.epub"),
            reason: "permission denied".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("/books/a.epub"));
        assert!(msg.contains("permission denied"));
    }
}

mod cli_tests {
    use super::*;
    use std::process::Command;

    fn bin() -> Command {
        Command::new(env!("CARGO_BIN_EXE_ebook-convert-helper"))
    }

    #[test]
    fn test_no_arguments_prints_help_and_fails() {
        let output = bin().output().unwrap();
        assert_eq!(output.status.code(), Some(1));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("--input-format"));
    }

    #[test]
    fn test_version_exits_zero() {
        let output = bin().arg("--version").output().unwrap();
        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_missing_directory_exits_one() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing");

        let output = bin()
            .args(["-i", "epub", "-o", "mobi", "--dir"])
            .arg(&missing)
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(1));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("doesnt exist"));
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(!stdout.contains("Converting"));
        assert!(!stdout.contains("Files found"));
    }

    #[cfg(unix)]
    #[test]
    fn test_zero_exit_converter_without_output_keeps_sources() {
        let temp_dir = setup_books();
        let root = temp_dir.path();

        let output = bin()
            .args(["-i", "epub", "-o", "mobi", "-r", "--delete", "--converter", "true", "--dir"])
            .arg(root)
            .output()
            .unwrap();

        assert!(output.status.success());
        assert!(root.join("a.epub").exists());
        assert!(root.join("sub").join("c.epub").exists());
        assert!(!root.join("a.mobi").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_converter_still_exits_zero() {
        let temp_dir = setup_books();
        let root = temp_dir.path();

        let output = bin()
            .args(["-i", "epub", "-o", "mobi", "--delete", "--converter", "false", "--dir"])
            .arg(root)
            .output()
            .unwrap();

        assert!(output.status.success());
        assert!(root.join("a.epub").exists());
        assert!(root.join("b.epub").exists());
    }

    #[test]
    fn test_log_file_is_written_in_directory() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        let output = bin()
            .args(["-i", "epub", "-o", "mobi", "--log", "--dir"])
            .arg(root)
            .output()
            .unwrap();
        assert!(output.status.success());

        let log_files: Vec<PathBuf> = fs::read_dir(root)
            .unwrap()
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.extension().map(|e| e == "log").unwrap_or(false))
            .collect();
        assert_eq!(log_files.len(), 1);

        let content = fs::read_to_string(&log_files[0]).unwrap();
        assert!(content.contains(" - INFO - Initialized logging"));
        assert!(content.contains(" - INFO - Files found: 0"));
        assert!(content.contains(" - WARNING - No files to process"));
    }

    /// 구조화 로그 형식(`YYYY-MM-DD HH:MM:SS,mmm - LEVEL - message`)의 줄인지 확인
    fn is_structured_line(line: &str, level: &str) -> bool {
        let bytes = line.as_bytes();
        bytes.len() > 23
            && bytes[..4].iter().all(u8::is_ascii_digit)
            && bytes[4] == b'-'
            && bytes[19] == b','
            && line[23..].starts_with(&format!(" - {} - ", level))
    }

    /// 내용이 지정된 책 한 권만 있는 폴더
    fn setup_single_book(content: &str) -> (TempDir, PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("a.epub");
        fs::write(&path, content).unwrap();
        (temp_dir, path)
    }

    #[cfg(unix)]
    #[test]
    fn test_verbose_echoes_converter_stdout() {
        let (temp_dir, input) = setup_single_book("book");
        let root = temp_dir.path();
        let expected = format!("{} {}", input.display(), root.join("a.mobi").display());

        let verbose = bin()
            .args(["-i", "epub", "-o", "mobi", "--verbose", "--converter", "echo", "--dir"])
            .arg(root)
            .output()
            .unwrap();
        assert!(verbose.status.success());
        assert!(String::from_utf8_lossy(&verbose.stdout).contains(&expected));

        let quiet = bin()
            .args(["-i", "epub", "-o", "mobi", "--converter", "echo", "--dir"])
            .arg(root)
            .output()
            .unwrap();
        assert!(quiet.status.success());
        assert!(!String::from_utf8_lossy(&quiet.stdout).contains(&expected));
    }

    #[cfg(unix)]
    #[test]
    fn test_failure_echoes_converter_stderr() {
        // cat 은 입력 내용을 stdout 에 쓰고, 없는 출력 경로 때문에 0 이 아닌 코드로 끝난다.
        let (temp_dir, input) = setup_single_book("chapter-one-text");
        let root = temp_dir.path();

        let output = bin()
            .args(["-i", "epub", "-o", "mobi", "--verbose", "--delete", "--converter", "cat", "--dir"])
            .arg(root)
            .output()
            .unwrap();

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains(&root.join("a.mobi").display().to_string()));
        assert!(stdout.contains("Failed to convert"));
        // 종료 코드와 무관하게 --verbose 는 변환기 stdout 을 출력한다.
        assert!(stdout.contains("chapter-one-text"));
        assert!(input.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_debug_writes_structured_lines_to_stderr() {
        let (temp_dir, input) = setup_single_book("book");
        let root = temp_dir.path();

        let output = bin()
            .args(["-i", "epub", "-o", "mobi", "--debug", "--converter", "true", "--dir"])
            .arg(root)
            .output()
            .unwrap();

        assert!(output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        let lines: Vec<&str> = stderr.lines().collect();
        assert!(lines
            .iter()
            .any(|l| is_structured_line(l, "INFO") && l.ends_with("Initialized logging")));
        assert!(lines.iter().any(|l| is_structured_line(l, "INFO")
            && l.ends_with(&format!("Converting {}", input.display()))));
        assert!(lines
            .iter()
            .any(|l| is_structured_line(l, "WARNING") && l.contains("was not created")));

        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(!stdout.contains("Converting"));
    }

    #[test]
    fn test_debug_reports_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing");

        let output = bin()
            .args(["-i", "epub", "-o", "mobi", "--debug", "--dir"])
            .arg(&missing)
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(1));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.lines().any(|l| is_structured_line(l, "ERROR")
            && l.ends_with(&format!("DirectoryNotFound: {}", missing.display()))));
    }
}
