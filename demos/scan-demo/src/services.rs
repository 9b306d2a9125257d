//! 演示服务声明

use service_macros::service;
use tracing::info;

/// 问候服务接口
pub trait Greeting {
    /// 生成问候语
    fn greet(&self, name: &str) -> String;
}

/// 审计记录接口
pub trait AuditSink {
    /// 写入一条审计记录
    fn write(&self, entry: &str);
}

/// 报表渲染接口
pub trait ReportRenderer {
    /// 渲染报表文本
    fn render(&self) -> String;
}

/// 问候服务
#[service(scoped, expose(Greeting))]
#[derive(Debug, Default)]
pub struct GreetingService;

impl Greeting for GreetingService {
    fn greet(&self, name: &str) -> String {
        format!("你好，{}！", name)
    }
}

/// 应用时钟，未暴露接口，按自身类型注册
#[service(singleton, name = "app_clock")]
#[derive(Debug, Default)]
pub struct AppClock;

impl AppClock {
    /// 当前 Unix 时间戳（秒）
    pub fn unix_seconds(&self) -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }
}

/// 控制台报表服务，同时暴露两个接口
#[service(transient, expose(ReportRenderer, AuditSink))]
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl ReportRenderer for ConsoleReporter {
    fn render(&self) -> String {
        "控制台报表".to_string()
    }
}

impl AuditSink for ConsoleReporter {
    fn write(&self, entry: &str) {
        info!("审计: {}", entry);
    }
}
