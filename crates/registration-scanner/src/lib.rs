//! # Registration Scanner
//!
//! 这个 crate 实现 ServiceScan 的启动扫描: 按调用方给出的模块
//! 目标筛选进程级声明注册表中的服务声明，并向实现了注册契约的
//! 容器逐条发出注册调用。
//!
//! ## 核心组件
//!
//! - [`ServiceCollection`] - 容器注册契约 (每种生命周期两种元数)
//! - [`RegistrationRequest`] - 注册请求三元组
//! - [`ScanTarget`] / [`ServiceScanner`] - 扫描目标与扫描器
//! - [`RegistrationTable`] - 显式注册表
//! - [`ScanConfig`] - 扫描目标配置 (TOML / JSON)
//!
//! ## 设计原则
//!
//! - 扫描是同步的、运行到底的一次性启动过程
//! - 单条注册失败只放弃当前声明，不中断扫描
//! - 只负责注册，解析与构造不在职责之内

pub mod collection;
pub mod config;
pub mod scanner;
pub mod table;

pub use collection::*;
pub use config::*;
pub use scanner::*;
pub use table::*;
