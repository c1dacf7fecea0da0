//! Keeps the unit test tree a one-to-one mirror of the source tree

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    // Crate roots and module declarations carry no logic of their own
    const EXEMPT: [&str; 3] = ["lib.rs", "main.rs", "mod.rs"];

    fn root() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
    }

    fn is_exempt(path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| EXEMPT.contains(&name))
    }

    // Every `.rs` file under `dir`, relative to `dir`
    fn rust_files(dir: &Path) -> io::Result<BTreeSet<PathBuf>> {
        let mut files = BTreeSet::new();
        let mut pending = vec![dir.to_path_buf()];
        while let Some(current) = pending.pop() {
            for entry in fs::read_dir(&current)? {
                let path = entry?.path();
                if path.is_dir() {
                    pending.push(path);
                } else if path.extension().is_some_and(|ext| ext == "rs") {
                    let relative = path
                        .strip_prefix(dir)
                        .map_err(|err| io::Error::other(format!("{}: {err}", path.display())))?;
                    files.insert(relative.to_path_buf());
                }
            }
        }
        Ok(files)
    }

    fn mirrored_pair() -> (BTreeSet<PathBuf>, BTreeSet<PathBuf>) {
        let sources = rust_files(&root().join("src")).unwrap();
        let unit_tests = rust_files(&root().join("tests/unit")).unwrap();
        let keep = |files: BTreeSet<PathBuf>| -> BTreeSet<PathBuf> {
            files.into_iter().filter(|path| !is_exempt(path)).collect()
        };
        (keep(sources), keep(unit_tests))
    }

    fn listing<'a>(paths: impl Iterator<Item = &'a PathBuf>) -> String {
        paths
            .map(|path| format!("  - {}", path.display()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_every_module_has_unit_tests() {
        let (sources, unit_tests) = mirrored_pair();
        let untested: Vec<&PathBuf> = sources.difference(&unit_tests).collect();
        assert!(
            untested.is_empty(),
            "Modules without a tests/unit counterpart:\n{}",
            listing(untested.into_iter())
        );
    }

    #[test]
    fn test_every_unit_test_has_a_module() {
        let (sources, unit_tests) = mirrored_pair();
        let orphaned: Vec<&PathBuf> = unit_tests.difference(&sources).collect();
        assert!(
            orphaned.is_empty(),
            "Unit test files for modules that no longer exist under src:\n{}",
            listing(orphaned.into_iter())
        );
    }

    #[test]
    fn test_test_files_declare_tests() {
        let tests_dir = root().join("tests");
        let mut empty = Vec::new();
        for relative in rust_files(&tests_dir).unwrap() {
            if is_exempt(&relative) {
                continue;
            }
            let content = fs::read_to_string(tests_dir.join(&relative)).unwrap();
            if !content.contains("#[test]") {
                empty.push(relative);
            }
        }
        assert!(
            empty.is_empty(),
            "Test files without any #[test] function:\n{}",
            listing(empty.iter())
        );
    }

    #[test]
    fn test_mirror_is_populated() {
        let (sources, unit_tests) = mirrored_pair();
        assert!(sources.contains(Path::new("theory/fingering.rs")));
        assert!(unit_tests.contains(Path::new("sheet/compose.rs")));
    }
}
