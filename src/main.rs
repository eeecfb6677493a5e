// src/main.rs

use clap::Parser;
use kplc::diagnostics::{Diagnostic, codes};
use kplc::semantic::printer;
use std::fs;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt};

/// KPL 的解析器与名字解析器：检查源文件并打印解析出的声明树
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// 需要编译的源文件路径
    #[arg(required_unless_present = "explain")]
    input_file: Option<String>,

    /// 不打印声明树，只用退出码表示结果
    #[arg(short, long)]
    quiet: bool,

    /// 提高日志级别（-v info，-vv debug，-vvv trace）；设置了 RUST_LOG 时以它为准
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// 打印某个错误码的详细解释，例如 `--explain E0200`
    #[arg(long, value_name = "CODE")]
    explain: Option<String>,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn explain(code: &str) -> ExitCode {
    match codes::lookup(code) {
        Some(error_code) => {
            println!("{}: {}\n\n{}", error_code.code, error_code.message, error_code.explanation);
            ExitCode::SUCCESS
        }
        None => {
            eprintln!("error: unknown error code `{}`", code);
            ExitCode::from(2)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Some(code) = &cli.explain {
        return explain(code);
    }
    // clap 已经保证没有 --explain 时一定有输入文件
    let Some(input_file) = cli.input_file.as_deref() else {
        return ExitCode::from(2);
    };

    let source_code = match fs::read_to_string(input_file) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("error: failed to read file '{}': {}", input_file, e);
            return ExitCode::from(2);
        }
    };

    match kplc::compile(&source_code) {
        Ok(table) => {
            if !cli.quiet {
                print!("{}", printer::render(&table));
            }
            ExitCode::SUCCESS
        }
        Err(error) => {
            tracing::debug!(code = error.code().code, "compilation aborted");
            let diagnostic = Diagnostic::from(&error);
            if diagnostic.print(input_file, &source_code).is_err() {
                // 渲染失败时至少给出一行文字
                eprintln!("{}: {}", diagnostic.code(), error);
            }
            ExitCode::from(1)
        }
    }
}
