//! ebook-convert-helper - EBOOK BATCH CONVERTER
//!
//! calibre의 `ebook-convert` 를 폴더 단위로 일괄 실행하는 CLI 도구입니다.
//! 실제 포맷 변환은 외부 변환기가 수행하며, 이 크레이트는 파일 탐색,
//! 무시 목록 필터링, 순차 실행, 진행률 및 로그 기록을 담당합니다.
//!
//! # 주요 기능
//!
//! - 🔍 **파일 탐색**: 입력 확장자 파일을 폴더(또는 하위 폴더 전체)에서 수집
//! - 🚫 **무시 목록**: `.echignore` 에 적힌 경로 접두어 제외
//! - 🔁 **순차 변환**: 파일마다 변환기를 한 번씩 실행, 실패해도 다음 파일 계속
//! - 🗑️ **원본 삭제**: 출력 파일이 확인된 경우에만 삭제
//! - 📊 **진행률 표시**: 개수, 처리 속도, 남은 시간
//! - 📝 **로그**: 콘솔 또는 타임스탬프 로그 파일
//!
//! # 예제
//!
//! ```bash
//! # 폴더의 epub 을 mobi 로 변환
//! ebook-convert-helper -i epub -o mobi --dir /books
//!
//! # 하위 폴더 포함, .echignore 적용, 변환 후 원본 삭제
//! ebook-convert-helper -i epub -o azw3 --dir /books -r --ignore --delete
//! ```

pub mod activity;
pub mod cli;
pub mod converter;
pub mod discovery;
pub mod error;
pub mod ignore;
pub mod progress;
pub mod request;
pub mod runner;
pub mod stats;

// Re-exports for convenient access
pub use activity::{ActivityLog, LogConfig};
pub use cli::Args;
pub use converter::{Converter, ConverterOutput, ExternalConverter};
pub use discovery::discover;
pub use error::{HelperError, Result};
pub use ignore::{Filtered, IgnoreList};
pub use progress::ProgressReporter;
pub use request::ConversionRequest;
pub use runner::{ConversionOutcome, ConversionRunner, OutcomeStatus};
pub use stats::BatchSummary;
