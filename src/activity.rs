//! 활동 로그 모듈
//!
//! 탐색, 필터링, 변환, 삭제 이벤트를 한 줄씩 기록합니다.
//!
//! - `--debug`: `timestamp - LEVEL - message` 형식을 콘솔(stderr)에 출력
//! - `--log`: 같은 형식을 대상 폴더의 로그 파일에 추가
//! - 둘 다 없으면 컬러 일반 메시지를 콘솔(stdout)에 출력
//!
//! 프로세스 전역 로거 대신 실행 시작 시 한 번 생성하여 참조로 전달합니다.

use chrono::{DateTime, Local};
use colored::{Color, Colorize};
use indicatif::ProgressBar;
use log::Level;
use std::cell::RefCell;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{HelperError, Result};

/// 로그 파일 이름 접두어
pub const LOG_FILE_PREFIX: &str = "ebook-convert-helper";

/// 활동 로그 설정
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogConfig {
    /// 구조화된 로그를 콘솔에 출력
    pub console_echo: bool,
    /// 구조화된 로그를 추가할 파일
    pub file_sink: Option<PathBuf>,
}

impl LogConfig {
    /// 구조화된 로그 형식 사용 여부
    pub fn is_structured(&self) -> bool {
        self.console_echo || self.file_sink.is_some()
    }
}

/// 실행 시각이 붙은 로그 파일 경로 (`<dir>/ebook-convert-helper - 2024-01-31 T093000.log`)
pub fn log_file_path(dir: &Path, now: DateTime<Local>) -> PathBuf {
    dir.join(format!(
        "{} - {}.log",
        LOG_FILE_PREFIX,
        now.format("%Y-%m-%d T%H%M%S")
    ))
}

/// 한 줄짜리 구조화 로그 레코드 포맷
pub fn format_record(time: DateTime<Local>, level: Level, message: &str) -> String {
    format!(
        "{} - {} - {}",
        time.format("%Y-%m-%d %H:%M:%S,%3f"),
        level_name(level),
        message
    )
}

fn level_name(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARNING",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}

fn default_color(level: Level) -> Color {
    match level {
        Level::Error => Color::Red,
        Level::Warn => Color::Yellow,
        _ => Color::White,
    }
}

/// 실행 단위 활동 로그 싱크
pub struct ActivityLog {
    config: LogConfig,
    file: Option<File>,
    /// 출력 중 잠시 숨길 진행률 바
    bar: RefCell<Option<ProgressBar>>,
}

impl ActivityLog {
    /// 설정으로부터 로그 싱크 생성
    ///
    /// 파일 싱크가 있으면 추가 모드로 열고 "Initialized logging" 을 기록합니다.
    pub fn new(config: LogConfig) -> Result<Self> {
        let file = match &config.file_sink {
            Some(path) => Some(
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(|e| HelperError::LogFileOpen {
                        path: path.clone(),
                        reason: e.to_string(),
                    })?,
            ),
            None => None,
        };

        let log = Self {
            config,
            file,
            bar: RefCell::new(None),
        };

        if log.is_structured() {
            log.log(Level::Info, "Initialized logging")?;
        }

        Ok(log)
    }

    /// 콘솔 일반 출력만 하는 로그 싱크
    pub fn console() -> Self {
        Self {
            config: LogConfig::default(),
            file: None,
            bar: RefCell::new(None),
        }
    }

    /// 구조화된 로그 형식 사용 여부
    pub fn is_structured(&self) -> bool {
        self.config.is_structured()
    }

    /// 로그 파일 경로
    pub fn file_path(&self) -> Option<&Path> {
        self.config.file_sink.as_deref()
    }

    /// 레벨 기본 색상으로 기록
    pub fn log(&self, level: Level, message: &str) -> Result<()> {
        self.log_colored(level, default_color(level), message)
    }

    /// 이벤트 하나를 기록
    ///
    /// `color` 는 일반 출력 모드에서만 사용됩니다.
    pub fn log_colored(&self, level: Level, color: Color, message: &str) -> Result<()> {
        if !self.is_structured() {
            let line = message.color(color).to_string();
            self.print(|| println!("{}", line));
            return Ok(());
        }

        let record = format_record(Local::now(), level, message);

        if self.config.console_echo {
            self.print(|| eprintln!("{}", record));
        }

        if let Some(mut file) = self.file.as_ref() {
            writeln!(file, "{}", record).map_err(|e| HelperError::LogWrite {
                reason: e.to_string(),
            })?;
        }

        Ok(())
    }

    /// 정보 이벤트 기록
    pub fn info(&self, color: Color, message: &str) -> Result<()> {
        self.log_colored(Level::Info, color, message)
    }

    /// 경고 이벤트 기록
    pub fn warn(&self, message: &str) -> Result<()> {
        self.log(Level::Warn, message)
    }

    /// 에러 이벤트 기록
    pub fn error(&self, message: &str) -> Result<()> {
        self.log(Level::Error, message)
    }

    /// 변환기 stdout 을 그대로 출력 (로그 모드와 무관)
    pub fn echo_stdout(&self, text: &str) {
        let text = text.trim_end();
        if !text.is_empty() {
            self.print(|| println!("{}", text));
        }
    }

    /// 변환기 stderr 를 그대로 출력 (로그 모드와 무관)
    pub fn echo_stderr(&self, text: &str) {
        let text = text.trim_end();
        if !text.is_empty() {
            self.print(|| eprintln!("{}", text));
        }
    }

    /// 진행률 바 연결 (출력 시 바를 잠시 숨김)
    pub fn attach_progress(&self, bar: ProgressBar) {
        *self.bar.borrow_mut() = Some(bar);
    }

    /// 진행률 바 연결 해제
    pub fn detach_progress(&self) {
        self.bar.borrow_mut().take();
    }

    fn print(&self, f: impl FnOnce()) {
        match self.bar.borrow().as_ref() {
            Some(bar) if !bar.is_finished() => bar.suspend(f),
            _ => f(),
        }
    }
}
