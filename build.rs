use std::process::Command;

/// Short git revision of the benchmark sources, with a `-dirty` suffix when the
/// tree has local edits. Results from a dirty tree are not comparable.
fn source_revision() -> String {
    let head = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success());

    let Some(head) = head else {
        return "unknown".to_string();
    };

    let rev = String::from_utf8_lossy(&head.stdout).trim().to_string();
    let dirty = Command::new("git")
        .args(["diff", "--quiet", "--", "src"])
        .output()
        .map(|o| !o.status.success())
        .unwrap_or(false);

    if dirty { format!("{}-dirty", rev) } else { rev }
}

fn main() {
    println!("cargo:rustc-env=BENCH_SOURCE_REV={}", source_revision());
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/heads");
}
