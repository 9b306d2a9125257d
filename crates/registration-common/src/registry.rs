//! 进程级服务声明注册表

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::descriptor::{ServiceDescriptor, TypeKey};

/// 全局服务声明注册表
///
/// 始终存在，无需任何前置初始化，因此启动构造函数可以在
/// `main` 之前安全提交声明。
static DECLARED_SERVICES: Lazy<RwLock<Vec<ServiceDescriptor>>> =
    Lazy::new(|| RwLock::new(Vec::new()));

/// 提交一条服务声明
///
/// 注册表以实现类型的 `TypeId` 为键: 重复提交同一实现类型时，
/// 后提交的声明原位替换先前的声明，保持原有位置。本函数运行
/// 于 `main` 之前，不记录日志也不会失败。
pub fn submit_declaration(descriptor: ServiceDescriptor) {
    let mut services = DECLARED_SERVICES.write();
    if let Some(existing) = services
        .iter_mut()
        .find(|d| d.implementation == descriptor.implementation)
    {
        *existing = descriptor;
    } else {
        services.push(descriptor);
    }
}

/// 获取当前全部声明的快照 (提交顺序)
pub fn declared_services() -> Vec<ServiceDescriptor> {
    DECLARED_SERVICES.read().clone()
}

/// 当前声明数量
pub fn declaration_count() -> usize {
    DECLARED_SERVICES.read().len()
}

/// 按实现类型查找声明
pub fn find_declaration(implementation: TypeKey) -> Option<ServiceDescriptor> {
    DECLARED_SERVICES
        .read()
        .iter()
        .find(|d| d.implementation == implementation)
        .cloned()
}
