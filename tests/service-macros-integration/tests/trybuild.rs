//! trybuild compile-time tests for service_macros

#[test]
fn trybuild_service_macros() {
    let t = trybuild::TestCases::new();
    t.pass("tests/trybuild/ok_service.rs");
    t.pass("tests/trybuild/ok_service_expose.rs");
}
