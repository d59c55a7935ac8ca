//! Explorer-related data types for the file browser UI.

use std::cmp::Ordering;

use super::FileObject;

/// Column a listing is sorted by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Case-insensitive full name (default)
    #[default]
    Name,
    Size,
    Modified,
    Kind,
}

/// Sort direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flip(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Active sort order of a listing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortOrder {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortOrder {
    /// Order after clicking a column header.
    ///
    /// Same key flips the direction; a new key starts ascending.
    pub fn toggled(self, key: SortKey) -> Self {
        if self.key == key {
            Self {
                key,
                direction: self.direction.flip(),
            }
        } else {
            Self {
                key,
                direction: SortDirection::Ascending,
            }
        }
    }

    /// Compare two entries. Containers always come first.
    pub fn compare(&self, a: &FileObject, b: &FileObject) -> Ordering {
        let containers_first = b.is_container().cmp(&a.is_container());
        if containers_first != Ordering::Equal {
            return containers_first;
        }

        let by_key = match self.key {
            SortKey::Name => a
                .full_name
                .to_lowercase()
                .cmp(&b.full_name.to_lowercase()),
            SortKey::Size => a.size.cmp(&b.size),
            SortKey::Modified => a.mtime.total_cmp(&b.mtime),
            SortKey::Kind => a.kind().label().cmp(b.kind().label()),
        };

        let by_key = match self.direction {
            SortDirection::Ascending => by_key,
            SortDirection::Descending => by_key.reverse(),
        };

        by_key.then_with(|| a.full_path.cmp(&b.full_path))
    }

    /// Sort entries in place.
    pub fn sort(&self, entries: &mut [FileObject]) {
        entries.sort_by(|a, b| self.compare(a, b));
    }
}

/// Selected entry in the explorer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    /// Full path of the selected entry
    pub path: String,
    /// Whether the entry can be opened as a folder
    pub is_container: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(path: &str, kind: &str, size: u64, mtime: f64) -> FileObject {
        let full_name = path.rsplit('/').next().unwrap_or(path).to_string();
        let (name, extension) = match full_name.rfind('.') {
            Some(idx) if idx > 0 => (
                full_name[..idx].to_string(),
                full_name[idx..].to_string(),
            ),
            _ => (full_name.clone(), String::new()),
        };
        FileObject {
            full_path: path.to_string(),
            full_name,
            name,
            size,
            extension,
            kind_name: kind.to_string(),
            mtime,
        }
    }

    fn listing() -> Vec<FileObject> {
        vec![
            entry("/s/zeta.txt", "document", 300, 30.0),
            entry("/s/Alpha.png", "image", 100, 10.0),
            entry("/s/music", "folder", 5000, 20.0),
            entry("/s/beta.zip", "archive", 200, 40.0),
            entry("/s/Docs", "folder", 10, 50.0),
        ]
    }

    fn names(entries: &[FileObject]) -> Vec<&str> {
        entries.iter().map(|e| e.full_name.as_str()).collect()
    }

    #[test]
    fn test_sort_by_name_containers_first() {
        let mut entries = listing();
        SortOrder::default().sort(&mut entries);
        assert_eq!(
            names(&entries),
            vec!["Docs", "music", "Alpha.png", "beta.zip", "zeta.txt"]
        );
    }

    #[test]
    fn test_descending_keeps_containers_first() {
        let mut entries = listing();
        SortOrder {
            key: SortKey::Name,
            direction: SortDirection::Descending,
        }
        .sort(&mut entries);
        assert_eq!(
            names(&entries),
            vec!["music", "Docs", "zeta.txt", "beta.zip", "Alpha.png"]
        );
    }

    #[test]
    fn test_sort_by_size_and_modified() {
        let mut entries = listing();
        SortOrder {
            key: SortKey::Size,
            direction: SortDirection::Ascending,
        }
        .sort(&mut entries);
        assert_eq!(
            names(&entries),
            vec!["Docs", "music", "Alpha.png", "beta.zip", "zeta.txt"]
        );

        SortOrder {
            key: SortKey::Modified,
            direction: SortDirection::Descending,
        }
        .sort(&mut entries);
        assert_eq!(
            names(&entries),
            vec!["Docs", "music", "beta.zip", "zeta.txt", "Alpha.png"]
        );
    }

    #[test]
    fn test_sort_by_kind() {
        let mut entries = listing();
        SortOrder {
            key: SortKey::Kind,
            direction: SortDirection::Ascending,
        }
        .sort(&mut entries);
        // Archive < Document < Image
        assert_eq!(
            names(&entries),
            vec!["Docs", "music", "beta.zip", "zeta.txt", "Alpha.png"]
        );
    }

    #[test]
    fn test_ties_break_on_full_path() {
        let mut entries = vec![
            entry("/b/same.txt", "document", 1, 1.0),
            entry("/a/same.txt", "document", 1, 1.0),
        ];
        SortOrder::default().sort(&mut entries);
        assert_eq!(entries[0].full_path, "/a/same.txt");

        SortOrder {
            key: SortKey::Name,
            direction: SortDirection::Descending,
        }
        .sort(&mut entries);
        assert_eq!(entries[0].full_path, "/a/same.txt");
    }

    #[test]
    fn test_toggle() {
        let order = SortOrder::default();
        assert_eq!(order.key, SortKey::Name);
        assert_eq!(order.direction, SortDirection::Ascending);

        let flipped = order.toggled(SortKey::Name);
        assert_eq!(flipped.direction, SortDirection::Descending);
        assert_eq!(flipped.toggled(SortKey::Name).direction, SortDirection::Ascending);

        let by_size = flipped.toggled(SortKey::Size);
        assert_eq!(by_size.key, SortKey::Size);
        assert_eq!(by_size.direction, SortDirection::Ascending);
    }
}
