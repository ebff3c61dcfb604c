//! 외부 변환기 모듈
//!
//! 변환기 프로세스를 동기적으로 실행하고 종료 코드와 출력을 수집합니다.

use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

use crate::error::{HelperError, Result};

/// 변환기 실행 결과
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConverterOutput {
    /// 종료 코드 (시그널로 종료된 경우 None)
    pub exit_code: Option<i32>,
    /// 수집된 표준 출력
    pub stdout: String,
    /// 수집된 표준 에러
    pub stderr: String,
}

impl ConverterOutput {
    /// 종료 코드가 0인지 확인
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// 실패 원인 문자열
    ///
    /// stderr 가 비어 있으면 종료 코드를 설명합니다.
    pub fn failure_reason(&self) -> String {
        let stderr = self.stderr.trim();
        if !stderr.is_empty() {
            return stderr.to_string();
        }
        match self.exit_code {
            Some(code) => format!("converter exited with status {}", code),
            None => "converter was terminated by a signal".to_string(),
        }
    }
}

/// 파일 하나를 변환하는 동기 호출
pub trait Converter {
    /// `input` 을 `output` 으로 변환하고 끝날 때까지 대기
    ///
    /// 프로세스를 실행하지 못한 경우에만 `Err` 를 반환합니다.
    /// 0이 아닌 종료 코드는 `ConverterOutput` 으로 전달됩니다.
    fn convert(&self, input: &Path, output: &Path) -> Result<ConverterOutput>;
}

/// 외부 실행 파일 변환기 (`<program> [args...] <input> <output>`)
#[derive(Debug, Clone)]
pub struct ExternalConverter {
    program: OsString,
    args: Vec<OsString>,
}

impl ExternalConverter {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// 입력/출력 경로 앞에 붙일 고정 인자 설정
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// 실행 파일 이름
    pub fn program(&self) -> String {
        self.program.to_string_lossy().into_owned()
    }
}

impl Converter for ExternalConverter {
    fn convert(&self, input: &Path, output: &Path) -> Result<ConverterOutput> {
        log::debug!(
            "spawning {:?} {:?} {:?} {:?}",
            self.program,
            self.args,
            input,
            output
        );

        let result = Command::new(&self.program)
            .args(&self.args)
            .arg(input)
            .arg(output)
            .output()
            .map_err(|e| HelperError::ConverterSpawn {
                program: self.program(),
                input: input.to_path_buf(),
                reason: e.to_string(),
            })?;

        log::debug!("converter exited with {:?}", result.status.code());

        Ok(ConverterOutput {
            exit_code: result.status.code(),
            stdout: String::from_utf8_lossy(&result.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&result.stderr).into_owned(),
        })
    }
}
