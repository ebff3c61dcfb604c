//! ebook-convert-helper - EBOOK BATCH CONVERTER
//!
//! 메인 엔트리포인트

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use colored::{Color, Colorize};
use std::io;
use std::path::{Path, PathBuf};

use ebook_convert_helper::{
    activity::{ActivityLog, LogConfig},
    cli::Args,
    converter::ExternalConverter,
    discovery::discover_logged,
    error::HelperError,
    ignore::apply_ignore_file,
    progress::ProgressReporter,
    request::ConversionRequest,
    runner::ConversionRunner,
    stats::BatchSummary,
};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    // 인자가 없으면 도움말을 stderr 로 출력하고 종료
    if std::env::args_os().len() <= 1 {
        Args::command().write_help(&mut io::stderr())?;
        std::process::exit(1);
    }

    let args = Args::parse();
    let request = args.to_request();

    // 대상 폴더 확인
    if let Err(e) = validate_dir(&request.root_directory) {
        if args.debug {
            let log = ActivityLog::new(LogConfig {
                console_echo: true,
                file_sink: None,
            })?;
            log.error(&format!("DirectoryNotFound: {}", request.root_directory.display()))?;
        }
        return Err(e.into());
    }

    let log = ActivityLog::new(args.log_config()).context("로그 초기화 실패")?;

    print_header(&args, &log);

    // 변환 대상 수집
    let files = collect_files(&request, &log)?;
    log.info(Color::Cyan, &format!("Files found: {}", files.len()))?;

    // 순차 변환
    let converter = ExternalConverter::new(&args.converter);
    let mut progress = ProgressReporter::new(files.len() as u64);
    let outcomes = ConversionRunner::new(&request, &converter, &log).run(&files, &mut progress)?;

    BatchSummary::from_outcomes(&outcomes, progress.elapsed()).print_summary();

    Ok(())
}

/// 대상 폴더 유효성 검사
fn validate_dir(dir: &Path) -> std::result::Result<(), HelperError> {
    if !dir.exists() {
        return Err(HelperError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    if !dir.is_dir() {
        return Err(HelperError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    Ok(())
}

/// 헤더 출력
fn print_header(args: &Args, log: &ActivityLog) {
    println!("\n{}", "═".repeat(50).bright_blue());
    println!("{}", " 📚 EBOOK BATCH CONVERTER".bright_white().bold());
    println!("{}", "═".repeat(50).bright_blue());
    println!("  {} Directory:  {}", "📂".bright_cyan(), args.dir.display());
    println!(
        "  {} Formats:    {} → {}",
        "🔁".bright_green(),
        args.input_format,
        args.output_format
    );
    println!("  {} Converter:  {}", "⚙️".bright_yellow(), args.converter);

    if args.recursive {
        println!("  {} {}", "🌲".bright_green(), "Recursive".green());
    }

    if args.ignore {
        println!("  {} {}", "🚫".bright_blue(), "Using .echignore".blue());
    }

    if args.delete {
        println!(
            "  {} {}",
            "🗑️".bright_red(),
            "Deleting converted source files".red()
        );
    }

    if let Some(path) = log.file_path() {
        println!("  {} Log file:   {}", "📝".bright_white(), path.display());
    }

    println!("{}", "═".repeat(50).bright_blue());
}

/// 변환 대상 파일 수집 (탐색 후 필요하면 무시 목록 적용)
fn collect_files(request: &ConversionRequest, log: &ActivityLog) -> Result<Vec<PathBuf>> {
    let files = discover_logged(
        &request.root_directory,
        &request.input_extension,
        request.recursive,
        log,
    )?;

    if !request.ignore_enabled {
        return Ok(files);
    }

    let files = apply_ignore_file(
        files,
        &request.root_directory,
        &request.ignore_file(),
        &request.input_extension,
        log,
    )?;

    Ok(files)
}
