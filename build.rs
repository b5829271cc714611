fn main() {
    let now = chrono::Utc::now();

    // Read back with env! for the footer year and the startup log
    println!("cargo:rustc-env=BUILD_TIME={}", now.to_rfc3339());

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=content");
}
