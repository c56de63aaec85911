//! Structural checks keeping `tests/unit` in step with `src`

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    // Module organisation files carry no logic of their own
    fn is_module_file(relative: &str) -> bool {
        relative == "lib.rs" || relative == "main.rs" || relative.ends_with("mod.rs")
    }

    fn rust_files(root: &Path) -> io::Result<BTreeSet<String>> {
        let mut found = BTreeSet::new();
        walk(root, root, &mut found)?;
        Ok(found)
    }

    fn walk(dir: &Path, root: &Path, found: &mut BTreeSet<String>) -> io::Result<()> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_dir() {
                walk(&path, root, found)?;
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                let relative = path
                    .strip_prefix(root)
                    .map_err(|_| io::Error::other("path outside walk root"))?;
                found.insert(relative.to_string_lossy().replace('\\', "/"));
            }
        }
        Ok(())
    }

    fn report(title: &str, entries: &[String]) -> String {
        format!("{title}:\n{}", entries.join("\n"))
    }

    // Tests every source file has a unit test file at the mirrored path
    #[test]
    fn test_source_files_have_unit_tests() {
        let sources = rust_files(Path::new("src")).unwrap();
        let tests = rust_files(Path::new("tests/unit")).unwrap();

        let missing: Vec<String> = sources
            .iter()
            .filter(|source| !is_module_file(source) && !tests.contains(*source))
            .map(|source| format!("  - src/{source} -> tests/unit/{source}"))
            .collect();

        assert!(missing.is_empty(), "{}", report("Source files without unit tests", &missing));
    }

    // Tests no unit test file outlives the source file it covers
    #[test]
    fn test_unit_tests_have_sources() {
        let sources = rust_files(Path::new("src")).unwrap();
        let tests = rust_files(Path::new("tests/unit")).unwrap();

        let orphaned: Vec<String> = tests
            .iter()
            .filter(|test| !test.ends_with("mod.rs") && !sources.contains(*test))
            .map(|test| format!("  - tests/unit/{test}"))
            .collect();

        assert!(orphaned.is_empty(), "{}", report("Unit tests without a source file", &orphaned));
    }

    // Tests every non-module test file declares at least one test
    #[test]
    fn test_test_files_contain_tests() {
        let root = Path::new("tests");
        let empty: Vec<String> = rust_files(root)
            .unwrap()
            .into_iter()
            .filter(|relative| !relative.ends_with("mod.rs"))
            .filter(|relative| {
                fs::read_to_string(root.join(relative))
                    .map(|content| !content.contains("#[test]"))
                    .unwrap_or(true)
            })
            .map(|relative| format!("  - tests/{relative}"))
            .collect();

        assert!(empty.is_empty(), "{}", report("Test files without #[test]", &empty));
    }
}
