use std::process::Command;

fn main() {
    // Prefer NETVIS_VERSION env (set by CI), fall back to git tag, then the package version.
    let version = std::env::var("NETVIS_VERSION")
        .ok()
        .filter(|s| !s.is_empty() && s != "dev")
        .or_else(|| {
            Command::new("git")
                .args(["describe", "--tags", "--abbrev=0"])
                .output()
                .ok()
                .filter(|o| o.status.success())
                .and_then(|o| String::from_utf8(o.stdout).ok())
                .map(|s| s.trim().trim_start_matches('v').to_string())
                .filter(|s| !s.is_empty())
        })
        .unwrap_or_else(|| std::env::var("CARGO_PKG_VERSION").unwrap_or_else(|_| "dev".into()));

    println!("cargo:rustc-env=NETVIS_VERSION={}", version);
    println!("cargo:rerun-if-env-changed=NETVIS_VERSION");
}
