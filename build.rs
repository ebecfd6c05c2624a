use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");
    println!("cargo:rerun-if-env-changed=GIT_VERSION");

    println!("cargo:rustc-env=GIT_VERSION={}", git_version());
}

/// Version reported by `/health`.
///
/// An explicit `GIT_VERSION` (set by container and CI builds) wins over
/// `git describe`; builds outside a checkout report `dev`.
fn git_version() -> String {
    match std::env::var("GIT_VERSION") {
        Ok(version) if !version.is_empty() && version != "dev" => return version,
        _ => {}
    }

    Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
        .filter(|version| !version.is_empty())
        .unwrap_or_else(|| "dev".to_string())
}
