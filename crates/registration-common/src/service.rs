//! 服务声明的编译时元信息

use crate::descriptor::ServiceDescriptor;
use crate::lifetime::Lifetime;

/// 已声明服务类型的编译时元信息
///
/// 由 `#[service(...)]` 宏为标记类型自动实现，也可以手工实现，
/// 以便在不使用宏的场合提交声明。`descriptor()` 是声明的唯一
/// 权威来源，启动构造函数提交的正是它的返回值。
pub trait DeclaredService {
    /// 服务显示名称
    fn service_name() -> &'static str;

    /// 声明的生命周期
    fn lifetime() -> Lifetime;

    /// 构建完整的服务描述符
    fn descriptor() -> ServiceDescriptor;
}
