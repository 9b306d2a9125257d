//! # Registration Common
//!
//! 这个 crate 提供了 ServiceScan 声明式服务注册的核心模型。
//!
//! ## 核心组件
//!
//! - [`Lifetime`] - 服务生命周期
//! - [`TypeKey`] - 可注册类型标识
//! - [`ServiceDescriptor`] - 服务声明描述符
//! - [`DeclaredService`] - 声明类型的编译时元信息 trait
//! - [`submit_declaration`] - 进程级声明注册表入口
//!
//! ## 设计原则
//!
//! - 基于 Rust 类型系统的编译时安全，不做运行时反射
//! - 声明是惰性数据，提交与扫描分离
//! - 注册表始终存在，启动构造函数可在 `main` 之前安全提交

pub mod descriptor;
pub mod errors;
pub mod lifetime;
pub mod registry;
pub mod service;

pub use descriptor::*;
pub use errors::*;
pub use lifetime::*;
pub use registry::*;
pub use service::*;
