//! Centralized integration tests for service-macros crate

use registration_common::{find_declaration, DeclaredService, Lifetime, TypeKey};
use service_macros::service;

pub trait Notifier {
    fn notify(&self, message: &str) -> usize;
}

pub trait Dispatcher {
    fn dispatch(&self) -> bool;
}

/// 作用域通知服务
#[service(scoped, expose(Notifier))]
#[derive(Debug, Default)]
pub struct MailNotifier;

impl Notifier for MailNotifier {
    fn notify(&self, message: &str) -> usize {
        message.len()
    }
}

/// 暴露两个接口并自定义名称的服务
#[service(transient, expose(Notifier, Dispatcher), name = "hub")]
#[derive(Debug, Default)]
pub struct NotificationHub;

impl Notifier for NotificationHub {
    fn notify(&self, message: &str) -> usize {
        message.len()
    }
}

impl Dispatcher for NotificationHub {
    fn dispatch(&self) -> bool {
        true
    }
}

/// 自绑定单例服务
#[service(singleton)]
#[derive(Debug, Default)]
pub struct MetricsBuffer;

#[test]
fn test_declared_service_surface() {
    assert_eq!(MailNotifier::service_name(), "MailNotifier");
    assert_eq!(MailNotifier::lifetime(), Lifetime::Scoped);
    assert_eq!(NotificationHub::service_name(), "hub");
    assert_eq!(NotificationHub::lifetime(), Lifetime::Transient);
    assert_eq!(MetricsBuffer::lifetime(), Lifetime::Singleton);
}

#[test]
fn test_descriptor_carries_ordered_interfaces() {
    let descriptor = NotificationHub::descriptor();
    assert_eq!(descriptor.implementation, TypeKey::of::<NotificationHub>());
    assert_eq!(descriptor.module_path, module_path!());
    assert_eq!(descriptor.name, "hub");
    assert_eq!(descriptor.lifetime, Lifetime::Transient);
    assert_eq!(descriptor.provides.len(), 2);
    assert_eq!(descriptor.provides[0], TypeKey::of::<dyn Notifier>());
    assert_eq!(descriptor.provides[1], TypeKey::of::<dyn Dispatcher>());
    assert!(!descriptor.is_self_binding());
}

#[test]
fn test_self_binding_descriptor_has_no_interfaces() {
    let descriptor = MetricsBuffer::descriptor();
    assert!(descriptor.is_self_binding());
    assert!(descriptor.provides.is_empty());
    assert_eq!(descriptor.name, "MetricsBuffer");
}

#[test]
fn test_startup_ctor_submits_declarations() {
    let declaration = find_declaration(TypeKey::of::<MailNotifier>()).unwrap();
    assert_eq!(declaration.lifetime, Lifetime::Scoped);
    assert_eq!(declaration.provides, vec![TypeKey::of::<dyn Notifier>()]);

    let hub = find_declaration(TypeKey::of::<NotificationHub>()).unwrap();
    assert_eq!(hub.name, "hub");
}

#[test]
fn test_marked_types_remain_usable() {
    assert_eq!(MailNotifier::default().notify("你好"), "你好".len());
    assert!(NotificationHub::default().dispatch());
}
