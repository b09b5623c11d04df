//! Partitions duplicate sets against an exempted staging folder.

use super::types::{DuplicateEntry, DuplicateSet};
use crate::core::catalog::{AssetCatalog, AssetId};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Filters duplicate sets against an exempted staging folder.
///
/// The exempted folder holds assets awaiting review; the interesting
/// entries are their counterparts living elsewhere in the library. A pure
/// read over the sets: cursor state and visibility are never written.
pub struct ExemptionScanner<'a> {
    catalog: &'a dyn AssetCatalog,
}

impl<'a> ExemptionScanner<'a> {
    /// Create a scanner backed by the given catalog
    pub fn new(catalog: &'a dyn AssetCatalog) -> Self {
        Self { catalog }
    }

    /// The duplicates of the exempted folder's contents that live outside it.
    ///
    /// For every set holding at least one entry catalogued inside
    /// `exempted_folder` and at least one outside, yields each `Visible`
    /// outside entry exactly once, in set order. Sets entirely inside or
    /// entirely outside contribute nothing.
    ///
    /// Total: every guard condition returns an empty sequence instead of
    /// raising - an empty path, a path that is not an existing directory at
    /// call time, no sets loaded, the catalog's primary root offered as the
    /// exemption target, or a catalog enumeration failure (logged).
    pub fn not_exempted_duplicated_assets(
        &self,
        sets: &[DuplicateSet],
        exempted_folder: &Path,
    ) -> Vec<DuplicateEntry> {
        if exempted_folder.as_os_str().is_empty() || !exempted_folder.is_dir() {
            return Vec::new();
        }
        if sets.is_empty() {
            return Vec::new();
        }
        if same_directory(exempted_folder, self.catalog.root()) {
            return Vec::new();
        }

        let exempted: HashSet<AssetId> = match self.catalog.assets_in(exempted_folder) {
            Ok(ids) => ids.into_iter().collect(),
            Err(error) => {
                warn!(
                    folder = %exempted_folder.display(),
                    %error,
                    "could not enumerate exempted folder; returning no matches"
                );
                return Vec::new();
            }
        };

        let mut result = Vec::new();
        for set in sets {
            let inside = set
                .entries
                .iter()
                .filter(|entry| exempted.contains(&entry.asset.id()))
                .count();
            if inside == 0 || inside == set.entries.len() {
                continue;
            }
            result.extend(
                set.entries
                    .iter()
                    .filter(|entry| {
                        entry.is_visible() && !exempted.contains(&entry.asset.id())
                    })
                    .cloned(),
            );
        }
        result
    }
}

/// Path equality after resolving symlinks and relative components, falling
/// back to literal comparison when either side cannot be canonicalized.
fn same_directory(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(canonical_a), Ok(canonical_b)) => canonical_a == canonical_b,
        _ => a == b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::{Asset, MemoryCatalog, Thumbnail};
    use crate::error::CatalogError;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn sets_from(groups: &[&[(&Path, &str)]]) -> Vec<DuplicateSet> {
        groups
            .iter()
            .enumerate()
            .map(|(index, members)| {
                let assets = members
                    .iter()
                    .map(|(folder, name)| Asset::new(*folder, *name, "same"))
                    .collect();
                DuplicateSet::from_assets(index, assets)
            })
            .collect()
    }

    fn names(entries: &[DuplicateEntry]) -> Vec<&str> {
        entries
            .iter()
            .map(|entry| entry.asset.file_name.as_str())
            .collect()
    }

    /// Catalog with `staging` as a catalogued folder holding `inside` names,
    /// and a `/library` folder holding everything else mentioned in sets.
    fn catalog_with(staging: &Path, inside: &[&str]) -> MemoryCatalog {
        let catalog = MemoryCatalog::new("/library");
        for name in inside {
            catalog.insert(Asset::new(staging, *name, "same")).unwrap();
        }
        catalog
    }

    #[test]
    fn empty_path_yields_nothing() {
        let catalog = MemoryCatalog::new("/library");
        let sets = sets_from(&[&[(Path::new("/library"), "a.jpg")]]);

        let result = ExemptionScanner::new(&catalog)
            .not_exempted_duplicated_assets(&sets, Path::new(""));

        assert!(result.is_empty());
    }

    #[test]
    fn missing_directory_yields_nothing() {
        let catalog = MemoryCatalog::new("/library");
        let sets = sets_from(&[&[(Path::new("/library"), "a.jpg")]]);

        let result = ExemptionScanner::new(&catalog)
            .not_exempted_duplicated_assets(&sets, Path::new("/no/such/directory"));

        assert!(result.is_empty());
    }

    #[test]
    fn plain_file_yields_nothing() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("not-a-directory.txt");
        std::fs::write(&file, b"x").unwrap();
        let catalog = MemoryCatalog::new("/library");
        let sets = sets_from(&[&[(Path::new("/library"), "a.jpg")]]);

        let result =
            ExemptionScanner::new(&catalog).not_exempted_duplicated_assets(&sets, &file);

        assert!(result.is_empty());
    }

    #[test]
    fn no_sets_yields_nothing() {
        let temp = TempDir::new().unwrap();
        let catalog = catalog_with(temp.path(), &["a.jpg"]);

        let result = ExemptionScanner::new(&catalog)
            .not_exempted_duplicated_assets(&[], temp.path());

        assert!(result.is_empty());
    }

    #[test]
    fn primary_root_is_refused_even_though_it_exists() {
        let temp = TempDir::new().unwrap();
        let catalog = MemoryCatalog::new(temp.path());
        catalog
            .insert(Asset::new(temp.path(), "a.jpg", "same"))
            .unwrap();
        let sets = sets_from(&[&[
            (temp.path(), "a.jpg"),
            (Path::new("/library/elsewhere"), "b.jpg"),
        ]]);

        let result = ExemptionScanner::new(&catalog)
            .not_exempted_duplicated_assets(&sets, temp.path());

        assert!(result.is_empty());
    }

    #[test]
    fn empty_staging_directory_yields_nothing() {
        let temp = TempDir::new().unwrap();
        // nothing catalogued under the staging folder
        let catalog = MemoryCatalog::new("/library");
        let sets = sets_from(&[&[
            (Path::new("/library"), "a.jpg"),
            (Path::new("/library"), "b.jpg"),
        ]]);

        let result = ExemptionScanner::new(&catalog)
            .not_exempted_duplicated_assets(&sets, temp.path());

        assert!(result.is_empty());
    }

    #[test]
    fn outside_counterparts_of_staged_assets_are_reported() {
        let temp = TempDir::new().unwrap();
        let catalog = catalog_with(temp.path(), &["staged.jpg"]);
        let sets = sets_from(&[&[
            (temp.path(), "staged.jpg"),
            (Path::new("/library/2024"), "kept.jpg"),
        ]]);

        let result = ExemptionScanner::new(&catalog)
            .not_exempted_duplicated_assets(&sets, temp.path());

        assert_eq!(names(&result), vec!["kept.jpg"]);
    }

    #[test]
    fn each_outside_member_appears_once_despite_many_inside_members() {
        let temp = TempDir::new().unwrap();
        let catalog = catalog_with(temp.path(), &["copy1.jpg", "copy2.jpg"]);
        let sets = sets_from(&[&[
            (temp.path(), "copy1.jpg"),
            (temp.path(), "copy2.jpg"),
            (Path::new("/library/2024"), "original.jpg"),
        ]]);

        let result = ExemptionScanner::new(&catalog)
            .not_exempted_duplicated_assets(&sets, temp.path());

        assert_eq!(names(&result), vec!["original.jpg"]);
    }

    #[test]
    fn sets_entirely_inside_the_staging_folder_contribute_nothing() {
        let temp = TempDir::new().unwrap();
        let catalog = catalog_with(temp.path(), &["a.jpg", "b.jpg"]);
        let sets = sets_from(&[&[(temp.path(), "a.jpg"), (temp.path(), "b.jpg")]]);

        let result = ExemptionScanner::new(&catalog)
            .not_exempted_duplicated_assets(&sets, temp.path());

        assert!(result.is_empty());
    }

    #[test]
    fn sets_with_no_inside_member_contribute_nothing() {
        let temp = TempDir::new().unwrap();
        let catalog = catalog_with(temp.path(), &["staged.jpg"]);
        let sets = sets_from(&[
            // qualifying set
            &[
                (temp.path(), "staged.jpg"),
                (Path::new("/library"), "kept.jpg"),
            ],
            // unrelated set, nothing staged
            &[
                (Path::new("/library"), "x.jpg"),
                (Path::new("/library/old"), "y.jpg"),
            ],
        ]);

        let result = ExemptionScanner::new(&catalog)
            .not_exempted_duplicated_assets(&sets, temp.path());

        assert_eq!(names(&result), vec!["kept.jpg"]);
    }

    #[test]
    fn non_visible_outside_members_are_skipped() {
        use crate::core::navigator::types::Visibility;

        let temp = TempDir::new().unwrap();
        let catalog = catalog_with(temp.path(), &["staged.jpg"]);
        let mut sets = sets_from(&[&[
            (temp.path(), "staged.jpg"),
            (Path::new("/library"), "shown.jpg"),
            (Path::new("/library"), "hidden.jpg"),
        ]]);
        sets[0].entries[2].visibility = Visibility::Hidden;

        let result = ExemptionScanner::new(&catalog)
            .not_exempted_duplicated_assets(&sets, temp.path());

        assert_eq!(names(&result), vec!["shown.jpg"]);
    }

    #[test]
    fn partitioning_counts_non_visible_inside_members() {
        use crate::core::navigator::types::Visibility;

        let temp = TempDir::new().unwrap();
        let catalog = catalog_with(temp.path(), &["staged.jpg"]);
        let mut sets = sets_from(&[&[
            (temp.path(), "staged.jpg"),
            (Path::new("/library"), "kept.jpg"),
        ]]);
        // hiding the inside member must not stop the set from qualifying
        sets[0].entries[0].visibility = Visibility::Collapsed;

        let result = ExemptionScanner::new(&catalog)
            .not_exempted_duplicated_assets(&sets, temp.path());

        assert_eq!(names(&result), vec!["kept.jpg"]);
    }

    struct FailingCatalog;

    impl AssetCatalog for FailingCatalog {
        fn root(&self) -> &Path {
            Path::new("/library")
        }

        fn assets(&self) -> Result<Vec<Asset>, CatalogError> {
            Err(CatalogError::Unavailable {
                reason: "down".to_string(),
            })
        }

        fn assets_in(&self, _folder: &Path) -> Result<Vec<AssetId>, CatalogError> {
            Err(CatalogError::Unavailable {
                reason: "down".to_string(),
            })
        }

        fn load_thumbnail(&self, _id: &AssetId) -> Result<Option<Thumbnail>, CatalogError> {
            Ok(None)
        }
    }

    #[test]
    fn catalog_failure_degrades_to_empty() {
        let temp = TempDir::new().unwrap();
        let sets = sets_from(&[&[
            (temp.path(), "a.jpg"),
            (Path::new("/library"), "b.jpg"),
        ]]);

        let result = ExemptionScanner::new(&FailingCatalog)
            .not_exempted_duplicated_assets(&sets, temp.path());

        assert!(result.is_empty());
    }

    #[test]
    fn literal_root_comparison_applies_when_canonicalization_fails() {
        // neither path exists, so canonicalize fails on both sides
        let catalog = MemoryCatalog::new("/library/root");
        let sets = sets_from(&[&[(Path::new("/library/root"), "a.jpg")]]);

        // is_dir() already fails for a missing path; same_directory is what
        // this exercises
        assert!(same_directory(
            Path::new("/library/root"),
            Path::new("/library/root")
        ));
        assert!(!same_directory(
            Path::new("/library/root"),
            Path::new("/library/other")
        ));

        let result = ExemptionScanner::new(&catalog)
            .not_exempted_duplicated_assets(&sets, PathBuf::from("/library/root").as_path());
        assert!(result.is_empty());
    }
}
