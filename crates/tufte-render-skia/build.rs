// File: crates/tufte-render-skia/build.rs
// Summary: Links advapi32 on Windows; Skia's ICU loader reads the registry.

fn main() {
    #[cfg(target_os = "windows")]
    println!("cargo:rustc-link-lib=advapi32");
}
