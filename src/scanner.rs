//! File-tree scanner
//!
//! Walks a root directory once and classifies every regular file against the
//! catalog's descriptor patterns, the IaC/source category patterns, and the
//! file-type statistics tables. Globally excluded directories are pruned
//! during the walk; per-build-system exclusions are applied afterwards by
//! checking ancestor path components, so exclusion is always an exact
//! directory-name test and never a substring test.

use crate::build_systems::{BuildSystemId, Catalog, DescriptorFile};
use crate::error::ScanError;
use crate::patterns;
use ignore::WalkBuilder;
use regex::Regex;
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Maximum traversal depth below the root; `None` for unbounded.
    pub max_depth: Option<usize>,
    /// Collect file-type statistics alongside descriptor matches.
    pub file_stats: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_depth: None,
            file_stats: true,
        }
    }
}

/// Count and share of one file type in the scanned tree.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct FileTypeInfo {
    pub count: u64,
    pub percentage: f64,
}

/// Everything one walk of the tree produces.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// Build descriptor files, keyed by build system.
    pub descriptors: BTreeMap<BuildSystemId, Vec<DescriptorFile>>,
    /// IaC and source-category matches, keyed by category name.
    pub categories: BTreeMap<String, Vec<PathBuf>>,
    /// Source/container file counts by extension, with percentages.
    pub file_types: BTreeMap<String, FileTypeInfo>,
}

pub struct Scanner<'a> {
    root: PathBuf,
    catalog: &'a Catalog,
    config: ScanConfig,
}

impl<'a> Scanner<'a> {
    pub fn new(root: impl Into<PathBuf>, catalog: &'a Catalog) -> Result<Self, ScanError> {
        let root = root.into();
        if !root.is_dir() {
            return Err(ScanError::InaccessibleRoot {
                path: root,
                source: None,
            });
        }
        // An unreadable root is fatal; unreadable subtrees are not.
        if let Err(e) = std::fs::read_dir(&root) {
            return Err(ScanError::InaccessibleRoot {
                path: root,
                source: Some(e),
            });
        }
        let root = match root.canonicalize() {
            Ok(canonical) => canonical,
            Err(e) => {
                return Err(ScanError::InaccessibleRoot {
                    path: root,
                    source: Some(e),
                })
            }
        };

        debug!(root = %root.display(), "scanner initialized");

        Ok(Self {
            root,
            catalog,
            config: ScanConfig::default(),
        })
    }

    pub fn with_config(mut self, config: ScanConfig) -> Self {
        self.config = config;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Walk the tree once and classify every file.
    ///
    /// Membership of the result is deterministic for an unchanged tree; the
    /// per-system descriptor lists are sorted by path.
    pub fn scan(&self) -> ScanOutcome {
        let start = Instant::now();
        info!(root = %self.root.display(), "starting environment scan");

        let system_patterns: Vec<(BuildSystemId, Vec<Regex>)> = self
            .catalog
            .systems()
            .iter()
            .map(|s| {
                (
                    s.id,
                    s.patterns().map(patterns::glob_to_regex).collect(),
                )
            })
            .collect();
        let category_patterns: Vec<(&str, Vec<Regex>)> = patterns::CATEGORY_PATTERNS
            .iter()
            .map(|(name, globs)| {
                (
                    *name,
                    globs.iter().map(|g| patterns::glob_to_regex(g)).collect(),
                )
            })
            .collect();

        let mut outcome = ScanOutcome::default();
        let mut files_seen: u64 = 0;

        let pruned: HashSet<String> = patterns::EXCLUDED_DIRECTORIES
            .iter()
            .map(|d| d.to_string())
            .collect();

        let walker = WalkBuilder::new(&self.root)
            .hidden(false)
            .ignore(false)
            .git_ignore(false)
            .git_global(false)
            .git_exclude(false)
            .parents(false)
            .follow_links(false)
            .max_depth(self.config.max_depth)
            .filter_entry(move |entry| {
                if entry.depth() == 0 {
                    return true;
                }
                let is_dir = entry.file_type().map_or(false, |t| t.is_dir());
                if !is_dir {
                    return true;
                }
                match entry.file_name().to_str() {
                    Some(name) => !pruned.contains(name),
                    None => true,
                }
            })
            .build();

        for result in walker {
            let entry = match result {
                Ok(e) => e,
                Err(err) => {
                    // Permission-denied subtrees degrade to a warning.
                    warn!(error = %err, "skipping unreadable directory entry");
                    continue;
                }
            };
            let path = entry.path();
            if !entry.file_type().map_or(false, |t| t.is_file()) {
                continue;
            }
            files_seen += 1;

            let filename = match path.file_name().and_then(|n| n.to_str()) {
                Some(n) => n,
                None => continue,
            };

            for (id, regexes) in &system_patterns {
                if regexes.iter().any(|re| re.is_match(filename))
                    && !self.excluded_for_system(path, *id)
                {
                    outcome
                        .descriptors
                        .entry(*id)
                        .or_default()
                        .push(DescriptorFile::new(path.to_path_buf(), *id));
                }
            }

            for (category, regexes) in &category_patterns {
                if regexes.iter().any(|re| re.is_match(filename)) {
                    outcome
                        .categories
                        .entry(category.to_string())
                        .or_default()
                        .push(path.to_path_buf());
                }
            }

            if self.config.file_stats {
                count_file_type(&mut outcome.file_types, filename);
            }
        }

        for files in outcome.descriptors.values_mut() {
            files.sort_by(|a, b| a.path.cmp(&b.path));
        }
        for files in outcome.categories.values_mut() {
            files.sort();
        }
        finalize_percentages(&mut outcome.file_types);

        info!(
            files_seen,
            build_systems = outcome.descriptors.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "environment scan completed"
        );

        outcome
    }

    /// True if any ancestor directory component of `path` (below the scan
    /// root, excluding the file itself) is in the system's own exclusion set.
    ///
    /// The global set was already pruned during the walk.
    fn excluded_for_system(&self, path: &Path, id: BuildSystemId) -> bool {
        let Some(system) = self.catalog.get(id) else {
            return false;
        };
        if system.excluded_dirs.is_empty() {
            return false;
        }
        let rel = path.strip_prefix(&self.root).unwrap_or(path);
        let Some(dir) = rel.parent() else {
            return false;
        };
        dir.components().any(|c| {
            c.as_os_str()
                .to_str()
                .map_or(false, |name| system.excluded_dirs.contains(&name))
        })
    }
}

fn count_file_type(counts: &mut BTreeMap<String, FileTypeInfo>, filename: &str) {
    let lower = filename.to_lowercase();
    let key = if patterns::is_container_file(&lower) {
        Some("Dockerfile/Container".to_string())
    } else {
        lower.rsplit_once('.').and_then(|(stem, ext)| {
            // Hidden files like `.gitignore` have an empty stem, not an extension.
            if !stem.is_empty() && patterns::is_source_extension(ext) {
                Some(ext.to_string())
            } else {
                None
            }
        })
    };
    if let Some(key) = key {
        counts
            .entry(key)
            .or_insert(FileTypeInfo {
                count: 0,
                percentage: 0.0,
            })
            .count += 1;
    }
}

fn finalize_percentages(counts: &mut BTreeMap<String, FileTypeInfo>) {
    let total: u64 = counts.values().map(|i| i.count).sum();
    if total == 0 {
        return;
    }
    for info in counts.values_mut() {
        let pct = info.count as f64 * 100.0 / total as f64;
        info.percentage = (pct * 100.0).round() / 100.0;
    }
}
