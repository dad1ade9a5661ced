//! Browser-hosted Sokoban.
//!
//! The canvas app only exists on `wasm32` with `--features web`; native builds
//! compile the input queue, play session and settings so they can be tested
//! with plain `cargo test`.
//!
//! Build with Trunk from this directory: `trunk serve` (dev) or `trunk build`.

pub mod events;
pub mod session;
pub mod settings;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod web;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use web::run;

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    fn root() -> &'static Path {
        Path::new(env!("CARGO_MANIFEST_DIR"))
    }

    fn read(rel: &str) -> String {
        let path = root().join(rel);
        std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("{}: {e}", path.display()))
    }

    #[test]
    fn page_links_the_crate_and_static_dir() {
        let html = read("index.html");
        assert!(html.contains(r#"rel="rust""#));
        assert!(html.contains(r#"data-cargo-features="web""#));
        assert!(html.contains(r#"rel="copy-dir" href="static""#));
        assert!(html.contains(r#"id="sokoban-canvas""#));
        assert!(html.contains(crate::settings::DEFAULT_CANVAS_ID));
    }

    #[test]
    fn entry_script_exists_and_calls_run() {
        let js = read("static/index.js");
        assert!(js.contains("run()"));
    }

    /// Entries of the `[watch] watch = [...]` array in Trunk.toml.
    fn watch_entries() -> Vec<String> {
        let cfg = read("Trunk.toml");
        let start = cfg.find("watch = [").expect("Trunk.toml has a watch list") + "watch = [".len();
        let end = start + cfg[start..].find(']').expect("watch list is closed");
        cfg[start..end]
            .split(',')
            .map(|e| e.trim().trim_matches('"').to_string())
            .filter(|e| !e.is_empty())
            .collect()
    }

    fn files_under(dir: &Path, out: &mut Vec<PathBuf>) {
        for entry in std::fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                files_under(&path, out);
            } else {
                out.push(path);
            }
        }
    }

    #[test]
    fn trunk_config_writes_to_dist() {
        let cfg = read("Trunk.toml");
        assert!(cfg.contains(r#"dist = "dist""#));
        assert!(cfg.contains(r#"target = "index.html""#));
    }

    #[test]
    fn trunk_watches_only_files() {
        // A watched directory would also see editor swap files (`*.swp`).
        for entry in watch_entries() {
            assert!(root().join(&entry).is_file(), "{entry} is not a file");
        }
    }

    #[test]
    fn every_source_is_watched() {
        let watched: Vec<PathBuf> = watch_entries()
            .iter()
            .map(|e| root().join(e).canonicalize().unwrap())
            .collect();

        let mut sources = Vec::new();
        files_under(&root().join("src"), &mut sources);
        files_under(&root().join("static"), &mut sources);
        files_under(&root().join("../shared/sokoban_games/src"), &mut sources);
        assert!(!sources.is_empty());

        for source in sources {
            let source = source.canonicalize().unwrap();
            assert!(watched.contains(&source), "{} is not watched", source.display());
        }
    }

    #[test]
    fn manifest_builds_a_cdylib() {
        let manifest = read("Cargo.toml");
        assert!(manifest.contains(r#"crate-type = ["cdylib", "rlib"]"#));
    }
}
