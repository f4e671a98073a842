// build.rs — Platform detection for rtshim.
//
// Emits `cargo:rustc-cfg=has_sched_affinity` on targets whose kernel exposes
// a per-process CPU affinity mask through `sched_getaffinity(2)`. The Linux
// runtime variant counts the CPUs in that mask; without the cfg it falls back
// to `sysconf(_SC_NPROCESSORS_ONLN)`.
fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let target_os = std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    let affinity_targets = ["linux", "android"];
    if affinity_targets.contains(&target_os.as_str()) {
        println!("cargo:rustc-cfg=has_sched_affinity");
    }
}
