//! 변환 실행 모듈
//!
//! 후보 파일을 하나씩 순서대로 변환기에 넘기고 결과를 기록합니다.
//! 한 파일의 실패는 배치를 멈추지 않으며, 재시도하지 않습니다.

use colored::Color;
use std::fs;
use std::path::{Path, PathBuf};

use crate::activity::ActivityLog;
use crate::converter::Converter;
use crate::error::{HelperError, Result};
use crate::progress::ProgressReporter;
use crate::request::ConversionRequest;

/// 파일 하나의 변환 상태
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutcomeStatus {
    /// 종료 코드 0 (출력 파일 경로)
    Converted(PathBuf),
    /// 종료 코드 0 이 아님 (에러 내용)
    Failed(String),
}

/// 파일 하나의 변환 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionOutcome {
    /// 입력 파일
    pub input: PathBuf,
    /// 출력 파일
    pub output: PathBuf,
    /// 변환 상태
    pub status: OutcomeStatus,
    /// 변환 후 출력 파일이 디스크에 존재했는지
    pub output_exists: bool,
    /// 원본 파일이 삭제되었는지
    pub deleted: bool,
}

impl ConversionOutcome {
    pub fn is_converted(&self) -> bool {
        matches!(self.status, OutcomeStatus::Converted(_))
    }
}

/// 순차 변환 실행기
pub struct ConversionRunner<'a, C: Converter + ?Sized> {
    request: &'a ConversionRequest,
    converter: &'a C,
    log: &'a ActivityLog,
}

impl<'a, C: Converter + ?Sized> ConversionRunner<'a, C> {
    pub fn new(request: &'a ConversionRequest, converter: &'a C, log: &'a ActivityLog) -> Self {
        Self {
            request,
            converter,
            log,
        }
    }

    /// 모든 파일을 순서대로 변환
    ///
    /// # Arguments
    /// * `files` - 변환할 파일 목록
    /// * `progress` - 파일마다 1씩 증가하는 진행률
    ///
    /// # Returns
    /// 파일별 변환 결과. 변환기 실행 실패나 삭제 실패 시에는 즉시 중단하고 `Err` 를 반환합니다.
    pub fn run(
        &self,
        files: &[PathBuf],
        progress: &mut ProgressReporter,
    ) -> Result<Vec<ConversionOutcome>> {
        if files.is_empty() {
            self.log.warn("No files to process")?;
            return Ok(Vec::new());
        }

        self.log.attach_progress(progress.bar());
        let result = self.run_all(files, progress);
        progress.finish();
        self.log.detach_progress();
        log::debug!("processed {}/{} file(s)", progress.completed(), progress.total());

        result
    }

    fn run_all(
        &self,
        files: &[PathBuf],
        progress: &mut ProgressReporter,
    ) -> Result<Vec<ConversionOutcome>> {
        let mut outcomes = Vec::with_capacity(files.len());

        for input in files {
            outcomes.push(self.convert_one(input)?);
            progress.advance(1);
        }

        Ok(outcomes)
    }

    /// 파일 하나 변환
    ///
    /// 원본 삭제는 종료 코드 0, 출력 파일 존재, 삭제 요청이 모두 만족될 때만 수행합니다.
    /// 출력 경로가 입력 경로와 같으면 (입력/출력 확장자가 같은 경우) 삭제하지 않습니다.
    pub fn convert_one(&self, input: &Path) -> Result<ConversionOutcome> {
        let output = self.request.output_path_for(input);

        self.log
            .info(Color::Green, &format!("Converting {}", input.display()))?;

        let result = self.converter.convert(input, &output)?;

        // 종료 코드와 무관하게 출력
        if self.request.verbose {
            self.log.echo_stdout(&result.stdout);
        }

        if !result.success() {
            self.log.echo_stderr(&result.stderr);
            let reason = result.failure_reason();
            self.log.error(&format!(
                "Failed to convert {}: {}",
                input.display(),
                reason
            ))?;

            return Ok(ConversionOutcome {
                input: input.to_path_buf(),
                output,
                status: OutcomeStatus::Failed(reason),
                output_exists: false,
                deleted: false,
            });
        }

        let output_exists = output.exists();
        let mut deleted = false;

        if !output_exists {
            self.log.warn(&format!(
                "Converter reported success but {} was not created, keeping {}",
                output.display(),
                input.display()
            ))?;
        } else if self.request.delete_on_success && output == input {
            self.log.warn(&format!(
                "Output {} is the input file itself, not deleting it",
                output.display()
            ))?;
        } else if self.request.delete_on_success {
            self.log
                .info(Color::Red, &format!("Deleting {}", input.display()))?;
            fs::remove_file(input).map_err(|e| HelperError::DeleteFailed {
                path: input.to_path_buf(),
                reason: e.to_string(),
            })?;
            deleted = true;
        }

        self.log.info(
            Color::Magenta,
            &format!("File converted as {}", output.display()),
        )?;

        Ok(ConversionOutcome {
            input: input.to_path_buf(),
            output: output.clone(),
            status: OutcomeStatus::Converted(output),
            output_exists,
            deleted,
        })
    }
}
