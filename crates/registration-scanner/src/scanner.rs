//! 模块目标筛选与注册扫描

use registration_common::{
    declared_services, Lifetime, RegistrationResult, ScanError, ScanResult, ServiceDescriptor,
};
use tracing::{debug, info, warn};

use crate::collection::{RegistrationRequest, ServiceCollection};
use crate::config::ScanConfig;

/// 默认扫描深度: 目标模块自身加直接子模块
pub const DEFAULT_SCAN_DEPTH: usize = 1;

/// 扫描目标
///
/// 由模块路径前缀和深度上界组成。深度按前缀之下的模块段数
/// 计算，深度 1 覆盖目标模块自身与直接子模块。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanTarget {
    /// 模块路径前缀
    pub prefix: String,
    /// 前缀之下允许的最大模块段数
    pub depth: usize,
}

impl ScanTarget {
    /// 以默认深度创建扫描目标
    ///
    /// 前缀尾部多余的 `::` 分隔符会被去除，`app::services::` 与
    /// `app::services` 指向同一个目标模块。只含分隔符的前缀归一化
    /// 为空，由扫描前的空白前缀校验拒绝。
    pub fn module(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        Self {
            prefix: prefix.trim_end_matches("::").to_string(),
            depth: DEFAULT_SCAN_DEPTH,
        }
    }

    /// 覆盖深度上界
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    /// 判断模块路径是否落在目标范围内
    ///
    /// 路径与前缀完全相等，或位于前缀之下且多出的段数不超过
    /// 深度上界时命中。段边界严格按 `::` 切分，`app::serv`
    /// 不会命中 `app::services` 下的声明。
    pub fn matches(&self, module_path: &str) -> bool {
        if module_path == self.prefix {
            return true;
        }
        match module_path.strip_prefix(self.prefix.as_str()) {
            Some(rest) => match rest.strip_prefix("::") {
                Some(below) => below.split("::").count() <= self.depth,
                None => false,
            },
            None => false,
        }
    }
}

/// 扫描结果统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// 命中扫描目标的声明数量
    pub matched: usize,
    /// 成功发出的注册调用数量
    pub registered: usize,
    /// 因注册失败被放弃的声明数量
    pub failed: usize,
}

/// 服务注册扫描器
///
/// 持有有序的扫描目标列表，对声明注册表执行一次同步的、
/// 运行到底的扫描。
#[derive(Debug, Clone, Default)]
pub struct ServiceScanner {
    targets: Vec<ScanTarget>,
}

impl ServiceScanner {
    /// 创建空扫描器
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一个扫描目标
    pub fn add_target(mut self, target: ScanTarget) -> Self {
        self.targets.push(target);
        self
    }

    /// 以默认深度追加一个模块目标
    pub fn add_module(self, prefix: impl Into<String>) -> Self {
        self.add_target(ScanTarget::module(prefix))
    }

    /// 从扫描配置构建扫描器
    pub fn from_config(config: &ScanConfig) -> Self {
        Self {
            targets: config.scan_targets(),
        }
    }

    /// 当前扫描目标
    pub fn targets(&self) -> &[ScanTarget] {
        &self.targets
    }

    /// 扫描进程级声明注册表并向容器发出注册调用
    ///
    /// 等价于以 `declared_services()` 的快照调用
    /// [`Self::scan_declarations`]。
    pub fn scan(&self, services: &mut dyn ServiceCollection) -> ScanResult<ScanSummary> {
        let declarations = declared_services();
        self.scan_declarations(&declarations, services)
    }

    /// 对给定声明列表执行扫描
    ///
    /// 扫描开始前校验目标列表: 目标为空或存在空白前缀时立即
    /// 失败，不发出任何注册调用。扫描开始之后单条注册失败只
    /// 放弃当前声明的剩余接口，记入日志与计数后继续处理下一
    /// 条声明，不会中断扫描，也不做重试。
    pub fn scan_declarations(
        &self,
        declarations: &[ServiceDescriptor],
        services: &mut dyn ServiceCollection,
    ) -> ScanResult<ScanSummary> {
        if self.targets.is_empty() {
            return Err(ScanError::NoTargets);
        }
        if self.targets.iter().any(|t| t.prefix.trim().is_empty()) {
            return Err(ScanError::EmptyTargetPrefix);
        }

        debug!(
            "开始服务注册扫描，目标 {} 个，声明 {} 条",
            self.targets.len(),
            declarations.len()
        );

        let mut summary = ScanSummary::default();

        for declaration in declarations {
            if !self
                .targets
                .iter()
                .any(|t| t.matches(declaration.module_path))
            {
                continue;
            }
            summary.matched += 1;

            for request in declaration_requests(declaration) {
                match apply_request(services, &request) {
                    Ok(()) => {
                        summary.registered += 1;
                        if request.is_self_binding() {
                            info!("注册服务: {}", request.implementation);
                        } else {
                            info!(
                                "注册服务: {} (接口: {})",
                                request.implementation, request.service
                            );
                        }
                    }
                    Err(error) => {
                        summary.failed += 1;
                        warn!(
                            "注册服务失败: {} - {}",
                            declaration.implementation, error
                        );
                        break;
                    }
                }
            }
        }

        info!(
            "扫描完成，命中 {} 个声明，注册 {} 项，失败 {} 个",
            summary.matched, summary.registered, summary.failed
        );

        Ok(summary)
    }
}

/// 推导一条声明的注册请求序列
///
/// 暴露了接口的声明按声明顺序产生接口绑定请求，否则产生单条
/// 自绑定请求。
pub fn declaration_requests(declaration: &ServiceDescriptor) -> Vec<RegistrationRequest> {
    if declaration.is_self_binding() {
        vec![RegistrationRequest::self_binding(
            declaration.implementation,
            declaration.lifetime,
        )]
    } else {
        declaration
            .provides
            .iter()
            .map(|service| {
                RegistrationRequest::for_interface(
                    *service,
                    declaration.implementation,
                    declaration.lifetime,
                )
            })
            .collect()
    }
}

/// 按 (生命周期, 元数) 选择注册原语并直接调用
pub fn apply_request(
    services: &mut dyn ServiceCollection,
    request: &RegistrationRequest,
) -> RegistrationResult<()> {
    match (request.lifetime, request.is_self_binding()) {
        (Lifetime::Singleton, true) => services.register_singleton_self(request.implementation),
        (Lifetime::Singleton, false) => {
            services.register_singleton(request.service, request.implementation)
        }
        (Lifetime::Scoped, true) => services.register_scoped_self(request.implementation),
        (Lifetime::Scoped, false) => {
            services.register_scoped(request.service, request.implementation)
        }
        (Lifetime::Transient, true) => services.register_transient_self(request.implementation),
        (Lifetime::Transient, false) => {
            services.register_transient(request.service, request.implementation)
        }
    }
}
