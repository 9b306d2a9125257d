//! 类型标识与服务描述符

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::lifetime::Lifetime;

/// 可注册类型标识
///
/// 由 `TypeId` 和完整类型名组成，同时覆盖具体类型和
/// trait 对象类型 (`dyn Trait`)。相等性与哈希只基于 `TypeId`，
/// 类型名仅用于日志展示。
#[derive(Debug, Clone, Copy)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    /// 获取类型 `T` 的标识
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// 类型唯一标识
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// 完整类型名
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// 类型短名称 (路径最后一段)
    pub fn short_name(&self) -> &'static str {
        self.name.rsplit("::").next().unwrap_or(self.name)
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// 服务声明描述符
///
/// 对应一个带标记的实现类型: 记录实现类型标识、显示名称、
/// 声明所在模块路径、生命周期以及按声明顺序暴露的接口列表。
/// 描述符是惰性数据，构建过程不产生任何注册动作。
#[derive(Debug, Clone)]
pub struct ServiceDescriptor {
    /// 实现类型标识
    pub implementation: TypeKey,
    /// 显示名称，默认为实现类型短名称
    pub name: String,
    /// 声明所在模块路径
    pub module_path: &'static str,
    /// 服务生命周期
    pub lifetime: Lifetime,
    /// 暴露的接口列表 (声明顺序)
    pub provides: Vec<TypeKey>,
}

impl ServiceDescriptor {
    /// 创建描述符，显示名称默认为类型短名称，接口列表为空
    pub fn new<T: 'static>(module_path: &'static str, lifetime: Lifetime) -> Self {
        let implementation = TypeKey::of::<T>();
        Self {
            implementation,
            name: implementation.short_name().to_string(),
            module_path,
            lifetime,
            provides: Vec::new(),
        }
    }

    /// 覆盖显示名称
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// 追加一个暴露接口，调用顺序即声明顺序
    pub fn provides<I: ?Sized + 'static>(mut self) -> Self {
        self.provides.push(TypeKey::of::<I>());
        self
    }

    /// 是否为自绑定声明 (未暴露任何接口)
    pub fn is_self_binding(&self) -> bool {
        self.provides.is_empty()
    }
}
