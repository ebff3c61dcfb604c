//! 에러 타입 정의 모듈
//!
//! ebook-convert-helper에서 발생할 수 있는 모든 에러 타입을 정의합니다.
//! 변환기가 0이 아닌 종료 코드를 반환하는 경우는 에러가 아니라
//! 파일 단위 결과(`OutcomeStatus::Failed`)로 다룹니다.

use std::path::PathBuf;
use thiserror::Error;

/// ebook-convert-helper에서 발생할 수 있는 에러 타입
#[derive(Error, Debug)]
pub enum HelperError {
    /// 대상 폴더가 존재하지 않음
    #[error("Directory: {path} doesnt exist! Please enter a valid directory path")]
    DirectoryNotFound { path: PathBuf },

    /// 대상 경로가 폴더가 아님
    #[error("Not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// 무시 목록 파일 읽기 실패 (파일이 없는 경우는 제외)
    #[error("Failed to read ignore file ({path}): {reason}")]
    IgnoreFileRead { path: PathBuf, reason: String },

    /// 변환기 프로세스 실행 실패
    #[error("Failed to run converter '{program}' for {input}: {reason}")]
    ConverterSpawn {
        program: String,
        input: PathBuf,
        reason: String,
    },

    /// 원본 파일 삭제 실패
    #[error("Failed to delete {path}: {reason}")]
    DeleteFailed { path: PathBuf, reason: String },

    /// 로그 파일 열기 실패
    #[error("Failed to open log file ({path}): {reason}")]
    LogFileOpen { path: PathBuf, reason: String },

    /// 로그 파일 쓰기 실패
    #[error("Failed to write log file: {reason}")]
    LogWrite { reason: String },
}

/// ebook-convert-helper 결과 타입 별칭
pub type Result<T> = std::result::Result<T, HelperError>;
