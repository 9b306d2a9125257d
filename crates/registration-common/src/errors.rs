//! 错误类型定义

use thiserror::Error;

/// 注册错误类型
///
/// 由容器适配器在注册原语层面返回。扫描过程把此类错误记入
/// 日志并放弃当前声明的剩余接口，不会中断整个扫描。
#[derive(Error, Debug)]
pub enum RegistrationError {
    #[error("注册原语不可用: {primitive} (元数 {arity})")]
    PrimitiveUnavailable { primitive: String, arity: usize },

    #[error("服务重复注册: {service}")]
    DuplicateRegistration { service: String },

    #[error("容器拒绝注册服务 {service}, 原因: {reason}")]
    Rejected { service: String, reason: String },
}

impl RegistrationError {
    /// 创建原语缺失错误
    pub fn primitive_unavailable(primitive: impl Into<String>, arity: usize) -> Self {
        Self::PrimitiveUnavailable {
            primitive: primitive.into(),
            arity,
        }
    }

    /// 创建注册被拒错误
    pub fn rejected(service: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Rejected {
            service: service.into(),
            reason: reason.into(),
        }
    }
}

/// 扫描错误类型
///
/// 仅在扫描开始前的输入校验阶段产生，扫描一旦开始就不会再
/// 整体失败。
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("未提供任何扫描目标")]
    NoTargets,

    #[error("扫描目标的模块前缀为空")]
    EmptyTargetPrefix,
}

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件不存在: {path}")]
    FileNotFound { path: String },

    #[error("配置文件读取失败: {source}")]
    FileReadError {
        #[from]
        source: std::io::Error,
    },

    #[error("配置解析失败: {source}")]
    ParseError {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// 注册结果类型
pub type RegistrationResult<T> = Result<T, RegistrationError>;

/// 扫描结果类型
pub type ScanResult<T> = Result<T, ScanError>;

/// 配置结果类型
pub type ConfigResult<T> = Result<T, ConfigError>;
