//! 무시 목록 모듈
//!
//! `.echignore` 파일에 적힌 경로(또는 접두어)에 해당하는 파일을 변환 대상에서 제외합니다.

use colored::Color;
use std::collections::BTreeSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::activity::ActivityLog;
use crate::error::{HelperError, Result};

/// 절대 경로 접두어 집합
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreList {
    prefixes: BTreeSet<String>,
}

/// 필터링 결과
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Filtered {
    /// 변환 대상으로 남은 파일 (원래 순서 유지)
    pub kept: Vec<PathBuf>,
    /// 무시된 파일
    pub ignored: Vec<PathBuf>,
}

impl IgnoreList {
    /// 무시 목록 파일 읽기
    ///
    /// 파일이 없으면 빈 목록을 반환합니다 (에러 아님).
    pub fn load(root: &Path, ignore_file: &Path) -> Result<Self> {
        match fs::read_to_string(ignore_file) {
            Ok(content) => Ok(Self::parse(root, &content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(HelperError::IgnoreFileRead {
                path: ignore_file.to_path_buf(),
                reason: e.to_string(),
            }),
        }
    }

    /// 무시 목록 내용 파싱
    ///
    /// 빈 줄은 건너뛰고, 루트 경로로 시작하지 않는 항목은 루트 아래 상대 경로로 해석합니다.
    pub fn parse(root: &Path, content: &str) -> Self {
        let root_str = root.to_string_lossy();
        let prefixes = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                if line.starts_with(root_str.as_ref()) {
                    line.to_string()
                } else {
                    root.join(line).to_string_lossy().into_owned()
                }
            })
            .collect();

        Self { prefixes }
    }

    /// 접두어 목록
    pub fn prefixes(&self) -> impl Iterator<Item = &str> {
        self.prefixes.iter().map(String::as_str)
    }

    /// 경로가 어느 접두어로든 시작하는지 확인
    ///
    /// 경로 구분자를 고려하지 않는 문자열 접두어 비교입니다.
    /// 따라서 `/books/sub` 는 `/books/subway.epub` 도 제외합니다.
    pub fn is_ignored(&self, path: &Path) -> bool {
        let path = path.to_string_lossy();
        self.prefixes.iter().any(|p| path.starts_with(p.as_str()))
    }

    /// 후보 파일 필터링
    pub fn filter(&self, candidates: Vec<PathBuf>) -> Filtered {
        let (ignored, kept): (Vec<PathBuf>, Vec<PathBuf>) =
            candidates.into_iter().partition(|p| self.is_ignored(p));
        Filtered { kept, ignored }
    }
}

/// 무시 목록을 읽고 필터링 결과를 활동 로그에 기록
///
/// # Arguments
/// * `candidates` - 탐색된 후보 파일
/// * `root` - 대상 루트 폴더
/// * `ignore_file` - 무시 목록 파일 경로
/// * `extension` - 로그에 표시할 입력 확장자
/// * `log` - 활동 로그
pub fn apply_ignore_file(
    candidates: Vec<PathBuf>,
    root: &Path,
    ignore_file: &Path,
    extension: &str,
    log: &ActivityLog,
) -> Result<Vec<PathBuf>> {
    log.info(
        Color::Blue,
        &format!("Processing: {}", ignore_file.display()),
    )?;

    if !ignore_file.exists() {
        log::debug!("no ignore file at {:?}", ignore_file);
        return Ok(candidates);
    }

    let list = IgnoreList::load(root, ignore_file)?;
    for prefix in list.prefixes() {
        log::debug!("ignore prefix: {}", prefix);
    }

    let filtered = list.filter(candidates);
    log.info(
        Color::Cyan,
        &format!(
            "Ignoring: {} {} files",
            filtered.ignored.len(),
            extension
        ),
    )?;
    for path in &filtered.ignored {
        log.info(Color::Cyan, &format!("Ignoring: {}", path.display()))?;
    }

    Ok(filtered.kept)
}
