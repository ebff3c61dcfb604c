//! 진행률 표시 모듈

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::{Duration, Instant};

/// 진행률 바 템플릿 (퍼센트, 고정 폭 바, 개수, 처리 속도, 남은 시간)
const BAR_TEMPLATE: &str =
    "{percent:>3}% |{bar:50.cyan/blue}| {pos}/{len}, {per_sec}, ETA: {eta_precise}";

/// 배치 진행 상태
pub struct ProgressReporter {
    bar: ProgressBar,
    start: Instant,
    completed: u64,
    total: u64,
}

impl ProgressReporter {
    /// 터미널(stderr)에 그리는 진행률 생성
    ///
    /// `total` 이 0이면 바를 그리지 않습니다.
    pub fn new(total: u64) -> Self {
        let bar = if total == 0 {
            ProgressBar::hidden()
        } else {
            create_progress_bar(total)
        };
        Self::with_bar(bar, total)
    }

    /// 화면에 그리지 않는 진행률 (테스트, 비대화형 실행용)
    pub fn hidden(total: u64) -> Self {
        let bar = ProgressBar::with_draw_target(Some(total), ProgressDrawTarget::hidden());
        Self::with_bar(bar, total)
    }

    fn with_bar(bar: ProgressBar, total: u64) -> Self {
        Self {
            bar,
            start: Instant::now(),
            completed: 0,
            total,
        }
    }

    /// 출력 일시 중지에 사용할 바 핸들
    pub fn bar(&self) -> ProgressBar {
        self.bar.clone()
    }

    /// 진행 개수 증가
    pub fn advance(&mut self, by: u64) {
        self.completed += by;
        self.bar.inc(by);
    }

    /// 진행 완료 처리
    pub fn finish(&self) {
        self.bar.finish();
    }

    pub fn completed(&self) -> u64 {
        self.completed
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// 진행률 바 생성
fn create_progress_bar(total: u64) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(BAR_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▉▊▋▌▍▎▏-"),
    );
    pb
}
