//! Centralized integration tests for registration-scanner crate

use registration_common::{
    find_declaration, Lifetime, RegistrationError, RegistrationResult, ScanError, TypeKey,
};
use registration_scanner::{
    RegistrationTable, ScanConfig, ScanSummary, ScanTarget, ServiceCollection, ServiceScanner,
};

mod fixtures {
    pub mod services {
        use service_macros::service;

        pub trait PricingFeed {
            fn quote(&self) -> u64;
        }

        pub trait AuditTrail {
            fn record(&self, line: &str);
        }

        /// 暴露单接口的作用域服务
        #[service(scoped, expose(PricingFeed))]
        #[derive(Debug, Default)]
        pub struct SpotPricing;

        impl PricingFeed for SpotPricing {
            fn quote(&self) -> u64 {
                42
            }
        }

        /// 同时暴露两个接口的瞬态服务
        #[service(transient, expose(PricingFeed, AuditTrail))]
        #[derive(Debug, Default)]
        pub struct AuditedPricing;

        impl PricingFeed for AuditedPricing {
            fn quote(&self) -> u64 {
                7
            }
        }

        impl AuditTrail for AuditedPricing {
            fn record(&self, _line: &str) {}
        }

        /// 未暴露接口的单例服务
        #[service(singleton)]
        #[derive(Debug, Default)]
        pub struct QuoteCache;

        /// 未标记的普通类型
        #[derive(Debug, Default)]
        pub struct PlainHelper;

        pub mod nested {
            pub mod deep {
                use service_macros::service;

                /// 深层模块里的服务
                #[service(transient)]
                #[derive(Debug, Default)]
                pub struct BuriedService;
            }
        }
    }
}

use fixtures::services::nested::deep::BuriedService;
use fixtures::services::{
    AuditTrail, AuditedPricing, PlainHelper, PricingFeed, QuoteCache, SpotPricing,
};

fn services_root() -> String {
    format!("{}::fixtures::services", module_path!())
}

fn services_scanner() -> ServiceScanner {
    ServiceScanner::new().add_module(services_root())
}

#[test]
fn test_startup_declarations_are_submitted() {
    assert!(find_declaration(TypeKey::of::<SpotPricing>()).is_some());
    assert!(find_declaration(TypeKey::of::<AuditedPricing>()).is_some());
    assert!(find_declaration(TypeKey::of::<QuoteCache>()).is_some());
    assert!(find_declaration(TypeKey::of::<BuriedService>()).is_some());
    assert!(find_declaration(TypeKey::of::<PlainHelper>()).is_none());
}

#[test]
fn test_scan_issues_requests_per_declared_interface() {
    let mut table = RegistrationTable::new();
    let summary = services_scanner().scan(&mut table).unwrap();

    assert_eq!(
        summary,
        ScanSummary {
            matched: 3,
            registered: 4,
            failed: 0
        }
    );
    assert_eq!(table.len(), 4);

    let requests = table.requests();
    let audited: Vec<usize> = requests
        .iter()
        .enumerate()
        .filter(|(_, r)| r.implementation == TypeKey::of::<AuditedPricing>())
        .map(|(i, _)| i)
        .collect();
    assert_eq!(audited.len(), 2);
    assert_eq!(audited[1], audited[0] + 1);
    assert_eq!(
        requests[audited[0]].service,
        TypeKey::of::<dyn PricingFeed>()
    );
    assert_eq!(requests[audited[1]].service, TypeKey::of::<dyn AuditTrail>());
    assert!(requests[audited[0]].lifetime == Lifetime::Transient);
}

#[test]
fn test_interface_binding_carries_lifetime() {
    let mut table = RegistrationTable::new();
    services_scanner().scan(&mut table).unwrap();

    let request = table
        .requests()
        .iter()
        .find(|r| r.implementation == TypeKey::of::<SpotPricing>())
        .copied()
        .unwrap();
    assert_eq!(request.service, TypeKey::of::<dyn PricingFeed>());
    assert_eq!(request.lifetime, Lifetime::Scoped);
    assert_eq!(request.arity(), 2);
}

#[test]
fn test_self_binding_registration() {
    let mut table = RegistrationTable::new();
    services_scanner().scan(&mut table).unwrap();

    let request = table
        .requests()
        .iter()
        .find(|r| r.implementation == TypeKey::of::<QuoteCache>())
        .copied()
        .unwrap();
    assert!(request.is_self_binding());
    assert_eq!(request.service, TypeKey::of::<QuoteCache>());
    assert_eq!(request.lifetime, Lifetime::Singleton);
    assert_eq!(request.arity(), 1);
}

#[test]
fn test_unmarked_types_are_ignored() {
    let mut table = RegistrationTable::new();
    ServiceScanner::new()
        .add_target(ScanTarget::module(services_root()).with_depth(2))
        .scan(&mut table)
        .unwrap();

    assert!(!table
        .requests()
        .iter()
        .any(|r| r.implementation == TypeKey::of::<PlainHelper>()));
}

#[test]
fn test_scan_depth_excludes_nested_modules() {
    let mut shallow = RegistrationTable::new();
    services_scanner().scan(&mut shallow).unwrap();
    assert!(!shallow
        .requests()
        .iter()
        .any(|r| r.implementation == TypeKey::of::<BuriedService>()));

    let mut deep = RegistrationTable::new();
    ServiceScanner::new()
        .add_target(ScanTarget::module(services_root()).with_depth(2))
        .scan(&mut deep)
        .unwrap();
    let buried: Vec<_> = deep
        .requests()
        .iter()
        .filter(|r| r.implementation == TypeKey::of::<BuriedService>())
        .collect();
    assert_eq!(buried.len(), 1);
    assert!(buried[0].is_self_binding());
    assert_eq!(buried[0].lifetime, Lifetime::Transient);
}

#[test]
fn test_unmatched_targets_register_nothing() {
    let mut table = RegistrationTable::new();
    let summary = ServiceScanner::new()
        .add_module("no_such::module")
        .scan(&mut table)
        .unwrap();

    assert_eq!(summary, ScanSummary::default());
    assert!(table.is_empty());
}

#[test]
fn test_repeated_scan_is_idempotent() {
    let scanner = services_scanner();

    let mut first = RegistrationTable::new();
    let mut second = RegistrationTable::new();
    scanner.scan(&mut first).unwrap();
    scanner.scan(&mut second).unwrap();

    assert_eq!(first.len(), 4);
    assert_eq!(first.requests(), second.requests());
}

#[test]
fn test_scan_without_targets_fails_fast() {
    let mut table = RegistrationTable::new();
    let result = ServiceScanner::new().scan(&mut table);
    assert!(matches!(result, Err(ScanError::NoTargets)));
    assert!(table.is_empty());
}

#[test]
fn test_blank_target_prefix_fails_fast() {
    let mut table = RegistrationTable::new();
    let result = ServiceScanner::new()
        .add_module(services_root())
        .add_module("   ")
        .scan(&mut table);
    assert!(matches!(result, Err(ScanError::EmptyTargetPrefix)));
    assert!(table.is_empty());
}

/// 缺少作用域接口注册原语的容器
#[derive(Debug, Default)]
struct PartialCollection {
    inner: RegistrationTable,
}

impl ServiceCollection for PartialCollection {
    fn register_singleton(
        &mut self,
        service: TypeKey,
        implementation: TypeKey,
    ) -> RegistrationResult<()> {
        self.inner.register_singleton(service, implementation)
    }

    fn register_singleton_self(&mut self, implementation: TypeKey) -> RegistrationResult<()> {
        self.inner.register_singleton_self(implementation)
    }

    fn register_scoped(
        &mut self,
        _service: TypeKey,
        _implementation: TypeKey,
    ) -> RegistrationResult<()> {
        Err(RegistrationError::primitive_unavailable("register_scoped", 2))
    }

    fn register_scoped_self(&mut self, implementation: TypeKey) -> RegistrationResult<()> {
        self.inner.register_scoped_self(implementation)
    }

    fn register_transient(
        &mut self,
        service: TypeKey,
        implementation: TypeKey,
    ) -> RegistrationResult<()> {
        self.inner.register_transient(service, implementation)
    }

    fn register_transient_self(&mut self, implementation: TypeKey) -> RegistrationResult<()> {
        self.inner.register_transient_self(implementation)
    }
}

#[test]
fn test_missing_primitive_abandons_declaration_but_not_scan() {
    let mut collection = PartialCollection::default();
    let summary = services_scanner().scan(&mut collection).unwrap();

    assert_eq!(
        summary,
        ScanSummary {
            matched: 3,
            registered: 3,
            failed: 1
        }
    );
    assert!(!collection
        .inner
        .requests()
        .iter()
        .any(|r| r.implementation == TypeKey::of::<SpotPricing>()));
    assert!(collection
        .inner
        .contains(TypeKey::of::<dyn AuditTrail>(), TypeKey::of::<AuditedPricing>()));
    assert!(collection
        .inner
        .contains(TypeKey::of::<QuoteCache>(), TypeKey::of::<QuoteCache>()));
}

#[test]
fn test_scan_from_config() -> anyhow::Result<()> {
    let content = format!(
        "[[targets]]\nmodule = \"{}\"\ndepth = 2\n",
        services_root()
    );
    let config = ScanConfig::from_toml_str(&content)?;
    let scanner = ServiceScanner::from_config(&config);

    let mut table = RegistrationTable::new();
    let summary = scanner.scan(&mut table)?;

    assert_eq!(summary.matched, 4);
    assert_eq!(table.len(), 5);
    Ok(())
}

#[test]
fn test_declared_types_remain_usable() {
    assert_eq!(SpotPricing::default().quote(), 42);
    assert_eq!(AuditedPricing::default().quote(), 7);
    AuditedPricing::default().record("审计演练");
}
