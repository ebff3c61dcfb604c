//! CLI 인자 파싱 모듈
//!
//! clap을 사용한 명령줄 인자 정의 및 파싱을 담당합니다.

use clap::Parser;
use std::path::PathBuf;

use crate::activity::{log_file_path, LogConfig};
use crate::request::ConversionRequest;

/// 기본 변환기 실행 파일 (calibre)
pub const DEFAULT_CONVERTER: &str = "ebook-convert";

/// ebook-convert-helper CLI 인자 구조체
#[derive(Parser, Debug)]
#[command(
    name = "ebook-convert-helper",
    author = "YourName <your@email.com>",
    version,
    about = "A helper CLI for calibre's ebook-convert which converts all files in a directory into another format",
    long_about = r#"
EBOOK BATCH CONVERTER
=====================

A helper CLI for calibre's ebook-convert CLI which is used to convert
all files in a directory into another format.

Calibre needs to be installed to use this CLI.

Supported formats which are compatible with calibre can be found here:
https://manual.calibre-ebook.com/generated/en/ebook-convert.html

Examples:
  ebook-convert-helper -i epub -o mobi --dir /books
  ebook-convert-helper -i epub -o azw3 --dir /books -r --ignore
  ebook-convert-helper -i mobi -o epub --dir /books -r --delete --log
"#
)]
pub struct Args {
    /// Input format (extension to search for, e.g. "epub")
    #[arg(short, long = "input-format")]
    pub input_format: String,

    /// Output format (extension to produce, e.g. "mobi")
    #[arg(short, long = "output-format")]
    pub output_format: String,

    /// Absolute path to the directory
    #[arg(long)]
    pub dir: PathBuf,

    /// Delete all the files with the input format after a confirmed conversion
    #[arg(long)]
    pub delete: bool,

    /// Convert all files from both the directory and its sub-directories
    #[arg(short, long)]
    pub recursive: bool,

    /// Read directories or files from .echignore which will be excluded from the conversion
    #[arg(long)]
    pub ignore: bool,

    /// Show ebook-convert's stdout
    #[arg(long)]
    pub verbose: bool,

    /// Show the log in console
    #[arg(long)]
    pub debug: bool,

    /// Generate a log file in the directory
    #[arg(long)]
    pub log: bool,

    /// Converter executable to invoke for every file
    #[arg(long, default_value = DEFAULT_CONVERTER)]
    pub converter: String,
}

impl Args {
    /// 변환 요청 생성
    ///
    /// 확장자 앞에 붙은 `.`은 제거합니다 (`-i .epub` 와 `-i epub` 은 동일).
    pub fn to_request(&self) -> ConversionRequest {
        ConversionRequest {
            root_directory: self.dir.clone(),
            input_extension: normalize_extension(&self.input_format),
            output_extension: normalize_extension(&self.output_format),
            recursive: self.recursive,
            ignore_enabled: self.ignore,
            delete_on_success: self.delete,
            verbose: self.verbose,
        }
    }

    /// 로그 설정 생성
    ///
    /// `--log` 가 지정되면 대상 폴더 안에 타임스탬프가 붙은 로그 파일을 사용합니다.
    pub fn log_config(&self) -> LogConfig {
        LogConfig {
            console_echo: self.debug,
            file_sink: self
                .log
                .then(|| log_file_path(&self.dir, chrono::Local::now())),
        }
    }
}

fn normalize_extension(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_string()
}
