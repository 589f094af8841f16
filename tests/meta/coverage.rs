//! Keeps `tests/unit` mirroring `src` and every mirrored file compiled

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";

    // Entry points and module organization files don't require separate test files
    fn is_organizational(relative: &str) -> bool {
        relative == "main.rs" || relative == "lib.rs" || relative.ends_with("mod.rs")
    }

    #[test]
    fn test_all_src_files_have_unit_tests() {
        let src_paths = collect_relative_paths(Path::new(SRC_DIR)).unwrap_or_default();
        let test_paths = collect_relative_paths(Path::new(UNIT_DIR)).unwrap_or_default();
        assert!(!src_paths.is_empty(), "src directory should not be empty");

        let missing: Vec<_> = src_paths
            .iter()
            .filter(|path| !is_organizational(path) && !test_paths.contains(*path))
            .map(|path| format!("  - src/{path} -> {UNIT_DIR}/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "The following src files are missing unit test counterparts:\n{}",
            missing.join("\n")
        );
    }

    #[test]
    fn test_all_unit_tests_have_src_counterparts() {
        let src_paths = collect_relative_paths(Path::new(SRC_DIR)).unwrap_or_default();
        let test_paths = collect_relative_paths(Path::new(UNIT_DIR)).unwrap_or_default();

        let orphaned: Vec<_> = test_paths
            .iter()
            .filter(|path| !is_organizational(path) && !src_paths.contains(*path))
            .map(|path| format!("  - {UNIT_DIR}/{path} -> src/{path} (missing)"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "The following unit test files have no corresponding src files:\n{}",
            orphaned.join("\n")
        );
    }

    // A file that no parent module declares is silently never compiled
    #[test]
    fn test_all_unit_test_files_are_declared() {
        let test_paths = collect_relative_paths(Path::new(UNIT_DIR)).unwrap_or_default();
        let mut undeclared = Vec::new();

        for path in test_paths.iter().filter(|path| path.ends_with(".rs")) {
            if path == "main.rs" {
                continue;
            }

            let relative = Path::new(path);
            let Some(stem) = relative.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let (module, parent_file) = if stem == "mod" {
                let Some(dir) = relative.parent() else {
                    continue;
                };
                let Some(name) = dir.file_name().and_then(|s| s.to_str()) else {
                    continue;
                };
                (name.to_string(), parent_module_file(dir.parent()))
            } else {
                (stem.to_string(), parent_module_file(relative.parent()))
            };

            let declaration = format!("mod {module};");
            let declared = fs::read_to_string(Path::new(UNIT_DIR).join(&parent_file))
                .is_ok_and(|content| content.lines().any(|line| line.trim() == declaration));

            if !declared {
                undeclared.push(format!("  - {UNIT_DIR}/{path} (expected `{declaration}` in {parent_file})"));
            }
        }

        assert!(
            undeclared.is_empty(),
            "The following unit test files are never compiled:\n{}",
            undeclared.join("\n")
        );
    }

    #[test]
    fn test_all_test_files_contain_tests() {
        let tests_dir = Path::new("tests");
        let mut files_without_tests = Vec::new();

        let result = check_test_files(tests_dir, &mut files_without_tests);
        assert!(result.is_ok(), "Failed to scan tests directory: {result:?}");

        assert!(
            files_without_tests.is_empty(),
            "The following test files don't contain any #[test] functions:\n{}",
            files_without_tests.join("\n")
        );
    }

    fn parent_module_file(dir: Option<&Path>) -> String {
        match dir {
            Some(dir) if !dir.as_os_str().is_empty() => {
                dir.join("mod.rs").to_string_lossy().to_string()
            }
            _ => "main.rs".to_string(),
        }
    }

    fn collect_relative_paths(base: &Path) -> Result<BTreeSet<String>, io::Error> {
        let mut paths = BTreeSet::new();
        collect_into(base, base, &mut paths)?;
        Ok(paths)
    }

    fn collect_into(dir: &Path, base: &Path, paths: &mut BTreeSet<String>) -> Result<(), io::Error> {
        for entry_result in fs::read_dir(dir)? {
            let path = entry_result?.path();
            let relative = path
                .strip_prefix(base)
                .map_err(|_stripped| io::Error::other("Failed to strip prefix"))?
                .to_string_lossy()
                .to_string();

            if path.is_dir() {
                paths.insert(relative);
                collect_into(&path, base, paths)?;
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                paths.insert(relative);
            }
        }
        Ok(())
    }

    fn check_test_files(dir: &Path, files_without_tests: &mut Vec<String>) -> Result<(), io::Error> {
        for entry_result in fs::read_dir(dir)? {
            let path = entry_result?.path();

            if path.is_dir() {
                check_test_files(&path, files_without_tests)?;
                continue;
            }
            if path.extension().and_then(|ext| ext.to_str()) != Some("rs") {
                continue;
            }

            // Test target roots only declare modules
            let file_name = path.file_name().and_then(|name| name.to_str());
            if matches!(file_name, Some("main.rs" | "mod.rs")) {
                continue;
            }

            if !fs::read_to_string(&path)?.contains("#[test]") {
                files_without_tests.push(format!("  - {}", path.display()));
            }
        }
        Ok(())
    }
}
