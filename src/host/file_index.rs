//! In-memory file registry, filled by hand or by globbing a project directory.

use std::collections::BTreeMap;
use std::path::{Component, Path};

use anyhow::Context;
use glob::Pattern;

use crate::host::FileRegistry;
use crate::models::file::{FileRole, InputFile};

#[derive(Debug, Clone)]
struct IndexedFile {
    file: InputFile,
    role: FileRole,
    language: Option<String>,
}

/// File registry keyed by relative path.
#[derive(Debug, Clone, Default)]
pub struct FileIndex {
    files: BTreeMap<String, IndexedFile>,
}

impl FileIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `file`, replacing any entry with the same relative path.
    pub fn insert(&mut self, file: InputFile, role: FileRole, language: Option<&str>) {
        self.files.insert(
            file.relative_path.clone(),
            IndexedFile {
                file,
                role,
                language: language.map(str::to_string),
            },
        );
    }

    /// Builder form of `insert` for a file with no on-disk location of interest.
    pub fn with_file(mut self, relative_path: &str, role: FileRole, language: Option<&str>) -> Self {
        self.insert(InputFile::new(relative_path, relative_path), role, language);
        self
    }

    /// Index every file under `project_dir` matching one of `source_patterns`.
    ///
    /// Matched files get `language`. Files whose relative path also matches
    /// one of `test_patterns` get the `Test` role, all others `Main`.
    pub fn scan(
        project_dir: &Path,
        source_patterns: &[String],
        test_patterns: &[String],
        language: &str,
    ) -> anyhow::Result<Self> {
        let root = project_dir
            .canonicalize()
            .with_context(|| format!("Project directory not found: {}", project_dir.display()))?;
        let tests = test_patterns
            .iter()
            .map(|p| Pattern::new(p).with_context(|| format!("Invalid test pattern '{p}'")))
            .collect::<anyhow::Result<Vec<_>>>()?;

        let mut index = Self::new();
        let escaped_root = Pattern::escape(&root.to_string_lossy());
        for pattern in source_patterns {
            let full = format!("{escaped_root}/{pattern}");
            let entries =
                glob::glob(&full).with_context(|| format!("Invalid source pattern '{pattern}'"))?;
            // Unreadable entries are skipped.
            for path in entries.flatten().filter(|p| p.is_file()) {
                let Some(relative_path) = relative_to(&path, &root) else {
                    continue;
                };
                let role = if tests.iter().any(|t| t.matches(&relative_path)) {
                    FileRole::Test
                } else {
                    FileRole::Main
                };
                index.insert(InputFile::new(relative_path, path), role, Some(language));
            }
        }

        tracing::debug!(root = %root.display(), files = index.len(), "Indexed project files");
        Ok(index)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// `/`-separated path of `path` below `root`.
fn relative_to(path: &Path, root: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Vec<String> = relative
        .components()
        .map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Option<_>>()?;
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("/"))
    }
}

impl FileRegistry for FileIndex {
    fn find_file(&self, relative_path: &str, role: FileRole) -> Option<InputFile> {
        self.files
            .get(relative_path)
            .filter(|entry| entry.role == role)
            .map(|entry| entry.file.clone())
    }

    fn language_of(&self, file: &InputFile) -> Option<String> {
        self.files
            .get(&file.relative_path)
            .and_then(|entry| entry.language.clone())
    }

    fn files_with_language(&self, language: &str, role: FileRole) -> Vec<InputFile> {
        self.files
            .values()
            .filter(|entry| entry.role == role && entry.language.as_deref() == Some(language))
            .map(|entry| entry.file.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn sample_index() -> FileIndex {
        FileIndex::new()
            .with_file("bin/run.sh", FileRole::Main, Some("bash"))
            .with_file("test/run_test.sh", FileRole::Test, Some("bash"))
            .with_file("README", FileRole::Main, None)
    }

    #[test]
    fn finds_main_file_by_exact_path() {
        let index = sample_index();
        let file = index.find_file("bin/run.sh", FileRole::Main).unwrap();
        assert_eq!(file.relative_path, "bin/run.sh");
        assert!(index.find_file("./bin/run.sh", FileRole::Main).is_none());
        assert!(index.find_file("run.sh", FileRole::Main).is_none());
    }

    #[test]
    fn role_restricts_lookup() {
        let index = sample_index();
        assert!(index.find_file("test/run_test.sh", FileRole::Main).is_none());
        assert!(index.find_file("test/run_test.sh", FileRole::Test).is_some());
    }

    #[test]
    fn language_lookup() {
        let index = sample_index();
        let script = index.find_file("bin/run.sh", FileRole::Main).unwrap();
        let readme = index.find_file("README", FileRole::Main).unwrap();
        assert_eq!(index.language_of(&script).as_deref(), Some("bash"));
        assert_eq!(index.language_of(&readme), None);
    }

    #[test]
    fn files_with_language_filters_role_and_language() {
        let index = sample_index();
        let files = index.files_with_language("bash", FileRole::Main);
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].relative_path, "bin/run.sh");
        assert!(index.files_with_language("python", FileRole::Main).is_empty());
    }

    #[test]
    fn scan_indexes_matching_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("scripts/nested")).unwrap();
        fs::create_dir_all(dir.path().join("test")).unwrap();
        fs::write(dir.path().join("install.sh"), "#!/bin/sh\n").unwrap();
        fs::write(dir.path().join("scripts/nested/deploy.sh"), "#!/bin/bash\n").unwrap();
        fs::write(dir.path().join("test/install_test.sh"), "#!/bin/sh\n").unwrap();
        fs::write(dir.path().join("notes.txt"), "text\n").unwrap();

        let index = FileIndex::scan(
            dir.path(),
            &["**/*.sh".to_string()],
            &["test/**".to_string()],
            "bash",
        )
        .unwrap();

        assert_eq!(index.len(), 3);
        let main: Vec<String> = index
            .files_with_language("bash", FileRole::Main)
            .into_iter()
            .map(|f| f.relative_path)
            .collect();
        assert_eq!(main, vec!["install.sh", "scripts/nested/deploy.sh"]);
        assert!(index.find_file("test/install_test.sh", FileRole::Test).is_some());
        assert!(index.find_file("notes.txt", FileRole::Main).is_none());

        let deploy = index.find_file("scripts/nested/deploy.sh", FileRole::Main).unwrap();
        assert!(deploy.absolute_path.is_absolute());
        assert!(deploy.absolute_path.ends_with("scripts/nested/deploy.sh"));
    }

    #[test]
    fn scan_rejects_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(FileIndex::scan(&missing, &["**/*.sh".to_string()], &[], "bash").is_err());
    }

    #[test]
    fn scan_rejects_invalid_test_pattern() {
        let dir = tempfile::tempdir().unwrap();
        let result = FileIndex::scan(dir.path(), &["**/*.sh".to_string()], &["[".to_string()], "bash");
        assert!(result.is_err());
    }
}
