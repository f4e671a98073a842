// Integration tests for sys — Runtime trait and the build-selected variant

use rtshim::sys::{self, HostRuntime, Runtime, HOST};

#[test]
fn host_static_matches_free_functions() {
    assert_eq!(HOST.available_processor_count(), sys::available_processor_count());
    assert_eq!(HOST.exit_code_for(300), sys::exit_code_for(300));
    assert_eq!(HOST.name(), sys::variant_name());
}

#[test]
fn fresh_variant_instance_agrees_with_host() {
    let rt = HostRuntime::new();
    assert_eq!(rt.available_processor_count(), HOST.available_processor_count());
}

#[test]
fn runtime_usable_as_trait_object() {
    let rt: &dyn Runtime = &HOST;
    assert!(rt.available_processor_count() >= 1);
}

#[test]
fn runtime_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HostRuntime>();
}

#[cfg(any(target_os = "linux", target_os = "android"))]
#[test]
fn linux_variant_selected() {
    assert_eq!(sys::variant_name(), "linux");
}

#[cfg(target_vendor = "apple")]
#[test]
fn apple_variant_selected() {
    assert_eq!(sys::variant_name(), "apple");
}

#[cfg(windows)]
#[test]
fn windows_variant_selected() {
    assert_eq!(sys::variant_name(), "windows");
}
