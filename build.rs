//! Captures the compiler and web framework versions so `/info` can report
//! them without runtime introspection.

use std::path::Path;
use std::process::Command;

const UNKNOWN: &str = "unknown";

fn main() {
    println!("cargo:rustc-env=PROBE_RUSTC_VERSION={}", rustc_version());
    println!("cargo:rustc-env=PROBE_AXUM_VERSION={}", locked_version("axum"));

    println!("cargo:rerun-if-env-changed=RUSTC");
    println!("cargo:rerun-if-changed=Cargo.lock");
    println!("cargo:rerun-if-changed=build.rs");
}

/// "rustc 1.83.0 (90b35a623 2024-11-26)" -> "1.83.0"
fn rustc_version() -> String {
    let rustc = std::env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    Command::new(rustc)
        .arg("--version")
        .output()
        .ok()
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .and_then(|line| line.split_whitespace().nth(1).map(str::to_string))
        .unwrap_or_else(|| UNKNOWN.to_string())
}

/// Version of `package` as resolved in Cargo.lock.
fn locked_version(package: &str) -> String {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let lock = Path::new(&manifest_dir).join("Cargo.lock");

    let Ok(contents) = std::fs::read_to_string(&lock) else {
        println!("cargo:warning=Cargo.lock not found, reporting framework version as unknown");
        return UNKNOWN.to_string();
    };
    let Ok(table) = contents.parse::<toml::Table>() else {
        println!("cargo:warning=Cargo.lock could not be parsed");
        return UNKNOWN.to_string();
    };

    table
        .get("package")
        .and_then(|packages| packages.as_array())
        .into_iter()
        .flatten()
        .filter_map(|entry| entry.as_table())
        .find(|entry| entry.get("name").and_then(|n| n.as_str()) == Some(package))
        .and_then(|entry| entry.get("version"))
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .unwrap_or_else(|| UNKNOWN.to_string())
}
