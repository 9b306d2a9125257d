//! # 扫描演示应用
//!
//! 演示如何使用 ServiceScan 的声明宏与扫描器完成服务注册

mod services;

use clap::Parser;
use registration_scanner::{RegistrationTable, ScanConfig, ServiceScanner};
use services::{AppClock, AuditSink, ConsoleReporter, Greeting, GreetingService, ReportRenderer};
use tracing::info;

/// 命令行参数
#[derive(Parser, Debug)]
#[command(name = "scan-demo")]
#[command(about = "ServiceScan 扫描演示应用")]
struct Args {
    /// 扫描配置文件路径
    #[arg(short, long, default_value = "config/scan.toml")]
    config: String,

    /// 日志级别
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // 初始化日志
    tracing_subscriber::fmt()
        .with_max_level(parse_log_level(&args.log_level))
        .init();

    info!("启动 ServiceScan 扫描演示");

    // 构建扫描器
    let scanner = build_scanner(&args)?;

    // 扫描声明注册表并发出注册调用
    let mut table = RegistrationTable::new();
    let summary = scanner.scan(&mut table)?;

    info!(
        "注册请求表收到 {} 项请求 (命中 {} 个声明)",
        table.len(),
        summary.matched
    );

    for request in table.requests() {
        if request.is_self_binding() {
            info!(
                "  [{}] {}",
                request.lifetime,
                request.implementation.short_name()
            );
        } else {
            info!(
                "  [{}] {} => {}",
                request.lifetime,
                request.service.short_name(),
                request.implementation.short_name()
            );
        }
    }

    // 直接使用声明的服务
    let greeter = GreetingService::default();
    info!("{}", greeter.greet("世界"));

    let clock = AppClock::default();
    info!("当前时间戳: {}", clock.unix_seconds());

    let reporter = ConsoleReporter::default();
    info!("{}", reporter.render());
    reporter.write("演示完成");

    Ok(())
}

/// 构建扫描器
fn build_scanner(args: &Args) -> Result<ServiceScanner, Box<dyn std::error::Error>> {
    if std::path::Path::new(&args.config).exists() {
        let config = if args.config.ends_with(".json") {
            ScanConfig::from_json_file(&args.config)?
        } else {
            ScanConfig::from_toml_file(&args.config)?
        };
        Ok(ServiceScanner::from_config(&config))
    } else {
        info!("配置文件不存在，使用默认扫描目标");
        Ok(ServiceScanner::new().add_module("scan_demo::services"))
    }
}

/// 解析日志级别
fn parse_log_level(level: &str) -> tracing::Level {
    match level.to_lowercase().as_str() {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "info" => tracing::Level::INFO,
        "warn" => tracing::Level::WARN,
        "error" => tracing::Level::ERROR,
        _ => tracing::Level::INFO,
    }
}
