//! # Service Macros
//!
//! 这个 crate 提供了用于声明式服务注册的过程宏。
//!
//! ## 核心宏
//!
//! - [`macro@service`] - 服务声明宏
//!
//! ## 使用示例
//!
//! ```rust
//! use service_macros::service;
//!
//! pub trait Greeting {
//!     fn greet(&self, name: &str) -> String;
//! }
//!
//! #[service(scoped, expose(Greeting))]
//! #[derive(Default)]
//! pub struct GreetingService;
//!
//! impl Greeting for GreetingService {
//!     fn greet(&self, name: &str) -> String {
//!         format!("你好，{}！", name)
//!     }
//! }
//! ```

use proc_macro::TokenStream;

mod service;

/// 服务声明宏
///
/// 这个宏会为结构体实现 `DeclaredService` trait，并在程序启动时
/// 将服务描述符提交到进程级声明注册表中。生命周期参数必填，
/// 未暴露任何接口的服务按自身类型注册。
///
/// # 参数
///
/// - `singleton` - 单例生命周期
/// - `scoped` - 作用域生命周期
/// - `transient` - 瞬态生命周期
/// - `expose(TraitA, TraitB)` - 按书写顺序暴露的服务接口
/// - `name = "custom_name"` - 自定义服务名称
///
/// # 示例
///
/// ```rust
/// use service_macros::service;
///
/// pub trait ReportRenderer {
///     fn render(&self) -> String;
/// }
///
/// #[service(transient, expose(ReportRenderer), name = "console_reporter")]
/// pub struct ConsoleReporter;
///
/// impl ReportRenderer for ConsoleReporter {
///     fn render(&self) -> String {
///         "报表".to_string()
///     }
/// }
/// ```
#[proc_macro_attribute]
pub fn service(args: TokenStream, input: TokenStream) -> TokenStream {
    service::service_impl(args, input)
}
