use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs");

    let version = git_describe().unwrap_or_else(|| {
        let pkg = std::env::var("CARGO_PKG_VERSION").unwrap_or_default();
        if pkg.is_empty() {
            "unknown".to_string()
        } else {
            pkg
        }
    });

    println!("cargo:rustc-env=GIT_VERSION={version}");
}

/// Version from `git describe`, normalized: tag-based output loses its leading
/// 'v', a bare hash becomes "0.0.0-g<hash>". None outside a git checkout.
fn git_describe() -> Option<String> {
    let output = Command::new("git")
        .args([
            "describe", "--always", "--long", "--dirty", "--tags", "--match", "v[0-9]*",
        ])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }

    let raw = String::from_utf8(output.stdout).ok()?;
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Some(stripped) = raw.strip_prefix('v') {
        return Some(stripped.to_string());
    }
    Some(format!("0.0.0-g{raw}"))
}
