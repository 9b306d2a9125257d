use registration_common::DeclaredService;
use service_macros::service;

#[derive(Debug)]
#[service(singleton)]
struct OkService;

fn main() {
    // Ensure the macro generated impl provides the metadata without manual impl conflicts
    assert_eq!(OkService::service_name(), "OkService");
    assert_eq!(
        OkService::lifetime(),
        registration_common::Lifetime::Singleton
    );
}
