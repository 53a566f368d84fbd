use std::path::{Path, PathBuf};

use which::which;

/// Absolute directories checked before falling back to a PATH lookup.
const BIN_DIRS: &[&str] = &["/usr/local/bin", "/usr/bin", "/opt/homebrew/bin"];

/// Directories checked relative to $HOME (Go-installed recon tools land in
/// go/bin).
const HOME_BIN_DIRS: &[&str] = &["go/bin", ".local/bin"];

/// Resolve a tool's executable path. Never fails closed: when nothing is
/// found the bare name is returned and the "not found" failure is deferred
/// to invocation time.
pub fn locate_tool(name: &str) -> PathBuf {
    for dir in BIN_DIRS {
        let candidate = Path::new(dir).join(name);
        if candidate.is_file() {
            return candidate;
        }
    }
    if let Ok(home) = std::env::var("HOME") {
        for rel in HOME_BIN_DIRS {
            let candidate = Path::new(&home).join(rel).join(name);
            if candidate.is_file() {
                return candidate;
            }
        }
    }
    which(name).unwrap_or_else(|_| PathBuf::from(name))
}

/// Common install locations for the vulnerability-template collection.
fn template_roots() -> Vec<PathBuf> {
    let mut roots = vec![
        PathBuf::from("/app/nuclei-templates"),
        PathBuf::from("/root/nuclei-templates"),
        PathBuf::from("/root/.nuclei-templates"),
        PathBuf::from("/root/.local/nuclei-templates"),
    ];
    if let Ok(home) = std::env::var("HOME") {
        roots.push(Path::new(&home).join("nuclei-templates"));
    }
    roots
}

pub fn locate_template_dir() -> Option<PathBuf> {
    let found = template_roots().into_iter().find(|p| p.is_dir());
    match &found {
        Some(p) => tracing::info!("found vulnerability templates at {}", p.display()),
        None => tracing::warn!(
            "no template directory found; the scanner will rely on relative template paths"
        ),
    }
    found
}

/// Build the `-t` arguments for the vulnerability scanner: the cves,
/// vulnerabilities and misconfiguration subsets when present (newer
/// collections nest them under http/), the collection root otherwise, and
/// relative defaults when no collection was found at all.
pub fn template_args() -> Vec<String> {
    let root = match locate_template_dir() {
        Some(root) => root,
        None => {
            return ["cves/", "vulnerabilities/", "misconfiguration/"]
                .iter()
                .flat_map(|p| ["-t".to_string(), p.to_string()])
                .collect();
        }
    };

    let mut args = Vec::new();
    for subset in ["cves", "vulnerabilities", "misconfiguration"] {
        let mut dir = root.join("http").join(subset);
        if !dir.is_dir() {
            dir = root.join(subset);
        }
        if dir.is_dir() {
            args.push("-t".to_string());
            args.push(dir.display().to_string());
        }
    }
    if args.is_empty() {
        args.push("-t".to_string());
        args.push(root.display().to_string());
    }
    args
}
