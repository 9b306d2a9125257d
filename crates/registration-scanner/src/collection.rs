//! 容器注册契约与注册请求

use registration_common::{Lifetime, RegistrationResult, TypeKey};

/// 容器注册契约
///
/// 每种生命周期提供两种元数的注册原语: 双参数形式按接口注册，
/// `_self` 形式把实现类型注册为自身。适配器对缺失的原语返回
/// `PrimitiveUnavailable` 错误，由扫描器记录并跳过。
/// 契约只覆盖注册，解析与构造不属于本层职责。
pub trait ServiceCollection {
    /// 以单例生命周期注册接口绑定
    fn register_singleton(
        &mut self,
        service: TypeKey,
        implementation: TypeKey,
    ) -> RegistrationResult<()>;

    /// 以单例生命周期注册自绑定
    fn register_singleton_self(&mut self, implementation: TypeKey) -> RegistrationResult<()>;

    /// 以作用域生命周期注册接口绑定
    fn register_scoped(
        &mut self,
        service: TypeKey,
        implementation: TypeKey,
    ) -> RegistrationResult<()>;

    /// 以作用域生命周期注册自绑定
    fn register_scoped_self(&mut self, implementation: TypeKey) -> RegistrationResult<()>;

    /// 以瞬态生命周期注册接口绑定
    fn register_transient(
        &mut self,
        service: TypeKey,
        implementation: TypeKey,
    ) -> RegistrationResult<()>;

    /// 以瞬态生命周期注册自绑定
    fn register_transient_self(&mut self, implementation: TypeKey) -> RegistrationResult<()>;
}

/// 注册请求三元组
///
/// `service` 是调用方向容器请求的类型，`implementation` 是实际
/// 构造的实现类型，自绑定请求二者相同。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistrationRequest {
    /// 服务类型 (对外暴露的键)
    pub service: TypeKey,
    /// 实现类型
    pub implementation: TypeKey,
    /// 生命周期
    pub lifetime: Lifetime,
}

impl RegistrationRequest {
    /// 创建接口绑定请求
    pub fn for_interface(service: TypeKey, implementation: TypeKey, lifetime: Lifetime) -> Self {
        Self {
            service,
            implementation,
            lifetime,
        }
    }

    /// 创建自绑定请求
    pub fn self_binding(implementation: TypeKey, lifetime: Lifetime) -> Self {
        Self {
            service: implementation,
            implementation,
            lifetime,
        }
    }

    /// 是否为自绑定请求
    pub fn is_self_binding(&self) -> bool {
        self.service == self.implementation
    }

    /// 注册原语元数: 自绑定为 1，接口绑定为 2
    pub fn arity(&self) -> usize {
        if self.is_self_binding() {
            1
        } else {
            2
        }
    }
}
