use std::time::SystemTime;

// Stamps the OpenAPI `Last-Modified` header with the build time.
fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/presentation/http/openapi");
    println!(
        "cargo:rustc-env=BUILD_DATE={}",
        httpdate::fmt_http_date(SystemTime::now())
    );
}
