//! 파일 탐색 모듈
//!
//! 대상 폴더에서 입력 확장자를 가진 파일을 수집합니다.

use colored::Color;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::activity::ActivityLog;
use crate::error::Result;

/// 파일 이름이 `.{extension}` 으로 끝나는지 확인
///
/// 대소문자를 구분하는 바이트 비교이며, UTF-8 이 아닌 파일 이름도 검사합니다.
pub fn has_extension(path: &Path, extension: &str) -> bool {
    let suffix = format!(".{}", extension);
    path.file_name()
        .map(|name| name.as_encoded_bytes().ends_with(suffix.as_bytes()))
        .unwrap_or(false)
}

/// 입력 확장자를 가진 파일 수집
///
/// # Arguments
/// * `root` - 탐색할 루트 폴더
/// * `extension` - 찾을 확장자 (점 제외)
/// * `recursive` - 하위 폴더까지 탐색할지 여부
///
/// # Returns
/// 탐색 순서대로 수집된 파일 경로 (정렬되지 않음)
///
/// 읽을 수 없는 하위 폴더는 건너뜁니다.
pub fn discover(root: &Path, extension: &str, recursive: bool) -> Vec<PathBuf> {
    let walker = if recursive {
        WalkDir::new(root)
    } else {
        WalkDir::new(root).max_depth(1)
    };

    walker
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.depth() > 0)
        .filter(|e| e.path().is_file())
        .filter(|e| has_extension(e.path(), extension))
        .map(|e| e.into_path())
        .collect()
}

/// 탐색 시작/결과를 활동 로그에 기록하며 파일 수집
pub fn discover_logged(
    root: &Path,
    extension: &str,
    recursive: bool,
    log: &ActivityLog,
) -> Result<Vec<PathBuf>> {
    let mode = if recursive {
        "Recursively"
    } else {
        "Non-recursively"
    };
    log.info(
        Color::Yellow,
        &format!(
            "{} searching for {} files in {}",
            mode,
            extension,
            root.display()
        ),
    )?;

    let files = discover(root, extension, recursive);
    log::debug!("discovered {} candidate(s) under {:?}", files.len(), root);

    Ok(files)
}
