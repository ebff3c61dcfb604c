//! 통계 및 유틸리티 모듈
//!
//! 변환 결과 집계 및 포맷팅을 담당합니다.

use colored::Colorize;
use std::time::Duration;

use crate::runner::{ConversionOutcome, OutcomeStatus};

/// 배치 처리 통계
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    /// 총 파일 수
    pub total_files: usize,
    /// 변환 성공 수
    pub converted: usize,
    /// 변환 실패 수
    pub failed: usize,
    /// 삭제된 원본 수
    pub deleted: usize,
    /// 종료 코드 0 이지만 출력 파일이 없는 수
    pub unverified: usize,
    /// 처리 시간
    pub elapsed: Duration,
}

impl BatchSummary {
    /// 변환 결과로부터 통계 생성
    pub fn from_outcomes(outcomes: &[ConversionOutcome], elapsed: Duration) -> Self {
        let mut summary = Self {
            total_files: outcomes.len(),
            elapsed,
            ..Default::default()
        };

        for outcome in outcomes {
            match &outcome.status {
                OutcomeStatus::Converted(_) => {
                    summary.converted += 1;
                    if !outcome.output_exists {
                        summary.unverified += 1;
                    }
                }
                OutcomeStatus::Failed(_) => summary.failed += 1,
            }
            if outcome.deleted {
                summary.deleted += 1;
            }
        }

        summary
    }

    /// 성공률 (%)
    pub fn success_rate(&self) -> Option<f64> {
        (self.total_files > 0)
            .then(|| (self.converted as f64 / self.total_files as f64) * 100.0)
    }

    /// 초당 처리 파일 수
    pub fn rate(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.total_files as f64 / secs
        } else {
            0.0
        }
    }

    /// 처리 통계 요약 출력
    pub fn print_summary(&self) {
        println!("\n{}", "═".repeat(50).bright_blue());
        println!("{}", " 📊 Conversion summary".bright_white().bold());
        println!("{}", "═".repeat(50).bright_blue());

        println!("  {} Files:       {}", "📁".bright_cyan(), self.total_files);
        println!(
            "  {} Converted:   {}",
            "✅".bright_green(),
            self.converted.to_string().green()
        );

        if self.failed > 0 {
            println!(
                "  {} Failed:      {}",
                "❌".bright_red(),
                self.failed.to_string().red()
            );
        } else {
            println!("  {} Failed:      {}", "✅".bright_green(), "0".green());
        }

        if self.unverified > 0 {
            println!(
                "  {} No output:   {}",
                "⚠️".bright_yellow(),
                self.unverified.to_string().yellow()
            );
        }

        println!("  {} Deleted:     {}", "🗑️".bright_magenta(), self.deleted);

        if let Some(rate) = self.success_rate() {
            println!("  {} Success:     {:.1}%", "📈".bright_white(), rate);
        }

        println!(
            "  {} Elapsed:     {} ({:.2} files/s)",
            "⏱️".bright_cyan(),
            format_duration(self.elapsed),
            self.rate()
        );

        println!("{}", "═".repeat(50).bright_blue());
    }
}

/// 경과 시간을 `HH:MM:SS` 형식으로 변환
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use ebook_convert_helper::stats::format_duration;
///
/// assert_eq!(format_duration(Duration::from_secs(3725)), "01:02:05");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    format!(
        "{:02}:{:02}:{:02}",
        secs / 3600,
        (secs % 3600) / 60,
        secs % 60
    )
}
