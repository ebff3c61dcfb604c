//! 변환 요청 모듈

use std::path::{Path, PathBuf};

/// 무시 목록 파일 이름 (대상 폴더 바로 아래에 위치)
pub const IGNORE_FILE_NAME: &str = ".echignore";

/// 한 번의 실행에 대한 변환 요청
///
/// CLI 입력으로부터 한 번 생성된 뒤에는 변경되지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    /// 탐색할 루트 폴더
    pub root_directory: PathBuf,
    /// 찾을 확장자 (점 제외)
    pub input_extension: String,
    /// 생성할 확장자 (점 제외)
    pub output_extension: String,
    /// 하위 폴더까지 탐색
    pub recursive: bool,
    /// `.echignore` 필터링 사용
    pub ignore_enabled: bool,
    /// 변환 확인 후 원본 삭제
    pub delete_on_success: bool,
    /// 변환기 stdout 출력
    pub verbose: bool,
}

impl ConversionRequest {
    /// 기본 옵션으로 요청 생성
    pub fn new(
        root_directory: impl Into<PathBuf>,
        input_extension: impl Into<String>,
        output_extension: impl Into<String>,
    ) -> Self {
        Self {
            root_directory: root_directory.into(),
            input_extension: input_extension.into(),
            output_extension: output_extension.into(),
            recursive: false,
            ignore_enabled: false,
            delete_on_success: false,
            verbose: false,
        }
    }

    /// 재귀 탐색 설정
    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// 무시 목록 사용 설정
    pub fn with_ignore(mut self, ignore_enabled: bool) -> Self {
        self.ignore_enabled = ignore_enabled;
        self
    }

    /// 원본 삭제 설정
    pub fn with_delete(mut self, delete_on_success: bool) -> Self {
        self.delete_on_success = delete_on_success;
        self
    }

    /// 상세 출력 설정
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// 루트 폴더의 무시 목록 파일 경로
    pub fn ignore_file(&self) -> PathBuf {
        self.root_directory.join(IGNORE_FILE_NAME)
    }

    /// 입력 파일에 대응하는 출력 파일 경로 (같은 폴더, 같은 이름, 확장자만 교체)
    pub fn output_path_for(&self, input: &Path) -> PathBuf {
        input.with_extension(&self.output_extension)
    }
}
