//! 服务生命周期定义

use std::fmt;

/// 服务生命周期
///
/// 声明服务实例的创建与复用策略。本层不解释生命周期语义，
/// 只负责把声明转发给目标容器中同名的注册原语，实例缓存、
/// 作用域管理和释放都由容器自己完成。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lifetime {
    /// 单例: 容器生命周期内共享同一个实例
    Singleton,
    /// 作用域: 每个作用域 (通常是一次请求) 内共享同一个实例
    Scoped,
    /// 瞬态: 每次解析都创建新实例
    Transient,
}

impl Lifetime {
    /// 生命周期的小写名称
    pub fn as_str(&self) -> &'static str {
        match self {
            Lifetime::Singleton => "singleton",
            Lifetime::Scoped => "scoped",
            Lifetime::Transient => "transient",
        }
    }
}

impl fmt::Display for Lifetime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
