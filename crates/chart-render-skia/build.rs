// File: crates/chart-render-skia/build.rs
// Summary: Links the extra Windows system library Skia's font manager needs.

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    // Target, not host: cross builds to Windows still need the registry APIs.
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("windows") {
        println!("cargo:rustc-link-lib=advapi32");
    }
}
