use std::env;
use std::path::Path;
use std::process::Command;

/// Exposes `PASSBOOK_BUILD_SHA` for the `--version` string. An explicit
/// `PASSBOOK_BUILD_SHA` in the build environment wins (release tarballs have
/// no `.git`); otherwise the short HEAD of the enclosing checkout, else
/// "unknown".
fn main() {
    println!("cargo:rerun-if-env-changed=PASSBOOK_BUILD_SHA");

    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let workspace = Path::new(&manifest_dir).join("..");

    let head = workspace.join(".git").join("HEAD");
    if head.exists() {
        println!("cargo:rerun-if-changed={}", head.display());
    }

    let sha = env::var("PASSBOOK_BUILD_SHA")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .or_else(|| git_short_sha(&workspace))
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=PASSBOOK_BUILD_SHA={sha}");
}

fn git_short_sha(workspace: &Path) -> Option<String> {
    let out = Command::new("git")
        .arg("-C")
        .arg(workspace)
        .args(["rev-parse", "--short=10", "HEAD"])
        .output()
        .ok()?;
    if !out.status.success() {
        return None;
    }
    let sha = String::from_utf8(out.stdout).ok()?;
    let sha = sha.trim();
    (!sha.is_empty()).then(|| sha.to_string())
}
