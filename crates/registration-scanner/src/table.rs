//! 有序注册请求表

use registration_common::{Lifetime, RegistrationResult, TypeKey};

use crate::collection::{RegistrationRequest, ServiceCollection};

/// 注册请求表
///
/// [`ServiceCollection`] 的内置实现。按调用顺序原样记录每一次
/// 注册请求，保留重复项，从不失败。适合作为真实容器适配层就绪
/// 之前的落点，也用于测试中断言扫描产出。
#[derive(Debug, Clone, Default)]
pub struct RegistrationTable {
    requests: Vec<RegistrationRequest>,
}

impl RegistrationTable {
    /// 创建空请求表
    pub fn new() -> Self {
        Self::default()
    }

    /// 已记录的注册请求，按发出顺序排列
    pub fn requests(&self) -> &[RegistrationRequest] {
        &self.requests
    }

    /// 已记录的请求数量
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    /// 请求表是否为空
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// 是否存在指定服务与实现的请求
    pub fn contains(&self, service: TypeKey, implementation: TypeKey) -> bool {
        self.requests
            .iter()
            .any(|r| r.service == service && r.implementation == implementation)
    }

    /// 查找指定服务类型的第一条请求
    pub fn find(&self, service: TypeKey) -> Option<&RegistrationRequest> {
        self.requests.iter().find(|r| r.service == service)
    }

    /// 取出全部请求并清空请求表
    pub fn take_requests(&mut self) -> Vec<RegistrationRequest> {
        std::mem::take(&mut self.requests)
    }

    fn record(&mut self, request: RegistrationRequest) -> RegistrationResult<()> {
        self.requests.push(request);
        Ok(())
    }
}

impl ServiceCollection for RegistrationTable {
    fn register_singleton(
        &mut self,
        service: TypeKey,
        implementation: TypeKey,
    ) -> RegistrationResult<()> {
        self.record(RegistrationRequest::for_interface(
            service,
            implementation,
            Lifetime::Singleton,
        ))
    }

    fn register_singleton_self(&mut self, implementation: TypeKey) -> RegistrationResult<()> {
        self.record(RegistrationRequest::self_binding(
            implementation,
            Lifetime::Singleton,
        ))
    }

    fn register_scoped(
        &mut self,
        service: TypeKey,
        implementation: TypeKey,
    ) -> RegistrationResult<()> {
        self.record(RegistrationRequest::for_interface(
            service,
            implementation,
            Lifetime::Scoped,
        ))
    }

    fn register_scoped_self(&mut self, implementation: TypeKey) -> RegistrationResult<()> {
        self.record(RegistrationRequest::self_binding(
            implementation,
            Lifetime::Scoped,
        ))
    }

    fn register_transient(
        &mut self,
        service: TypeKey,
        implementation: TypeKey,
    ) -> RegistrationResult<()> {
        self.record(RegistrationRequest::for_interface(
            service,
            implementation,
            Lifetime::Transient,
        ))
    }

    fn register_transient_self(&mut self, implementation: TypeKey) -> RegistrationResult<()> {
        self.record(RegistrationRequest::self_binding(
            implementation,
            Lifetime::Transient,
        ))
    }
}
