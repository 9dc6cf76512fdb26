use std::env;
use std::fs;

fn main() {
    // VERSION 文件优先，缺失或为空时回退到 Cargo.toml 的版本号
    let version = fs::read_to_string("VERSION")
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| env::var("CARGO_PKG_VERSION").unwrap_or_default());

    println!("cargo:rustc-env=APP_VERSION={}", version);
    println!("cargo:rerun-if-changed=VERSION");
}
