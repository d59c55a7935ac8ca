use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// File Kind
// =============================================================================

/// Classification carried in a [`FileObject`]'s `type` field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FileKind {
    /// Indexed top-level folder
    Space,
    Folder,
    Document,
    Image,
    Video,
    Audio,
    Archive,
    Program,
    /// Generic file, or anything unrecognized
    Other,
}

impl FileKind {
    /// Interpret a backend type string.
    pub fn from_type(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "space" => Self::Space,
            "folder" | "directory" | "dir" => Self::Folder,
            "document" => Self::Document,
            "image" => Self::Image,
            "video" => Self::Video,
            "audio" => Self::Audio,
            "archive" => Self::Archive,
            "program" => Self::Program,
            _ => Self::Other,
        }
    }

    /// Whether the explorer can open entries of this kind.
    pub fn is_container(self) -> bool {
        matches!(self, Self::Space | Self::Folder)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Space => "Space",
            Self::Folder => "Folder",
            Self::Document => "Document",
            Self::Image => "Image",
            Self::Video => "Video",
            Self::Audio => "Audio",
            Self::Archive => "Archive",
            Self::Program => "Program",
            Self::Other => "File",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// File Object
// =============================================================================

/// Descriptor of one indexed file-system entry, as emitted by the backend.
///
/// Treated as an immutable snapshot. `full_path` identifies the entry
/// within a listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FileObject {
    /// Absolute location on the backing store
    pub full_path: String,
    /// Name including extension
    pub full_name: String,
    /// Name without extension
    pub name: String,
    /// Byte length (recursive total for folders)
    pub size: u64,
    /// Suffix including the dot (e.g. ".txt"); empty for folders
    #[serde(default, deserialize_with = "null_as_empty")]
    pub extension: String,
    /// Raw classification string, see [`FileKind`]
    #[serde(rename = "type")]
    pub kind_name: String,
    /// Last modification time, seconds since the Unix epoch
    pub mtime: f64,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl FileObject {
    pub fn kind(&self) -> FileKind {
        FileKind::from_type(&self.kind_name)
    }

    pub fn is_container(&self) -> bool {
        self.kind().is_container()
    }

    /// `full_name` must equal `name + extension` whenever an extension is present.
    pub fn has_consistent_name(&self) -> bool {
        if self.extension.is_empty() {
            return true;
        }
        self.full_name
            .strip_suffix(&self.extension)
            .is_some_and(|stem| stem == self.name)
    }

    /// Folder containing this entry, derived from `full_path`.
    ///
    /// Handles both `/` and `\` separators. A top-level entry yields its
    /// root (`/` or `C:\`).
    pub fn parent_path(&self) -> Option<String> {
        let path = self.full_path.trim_end_matches(['/', '\\']);
        let idx = path.rfind(['/', '\\'])?;
        let parent = &path[..idx];

        if parent.is_empty() || parent.ends_with(':') {
            // Keep the root separator ("/" or "C:\")
            Some(path[..=idx].to_string())
        } else {
            Some(parent.to_string())
        }
    }

    /// Modification time truncated to whole seconds (clamped at the epoch).
    pub fn mtime_secs(&self) -> u64 {
        if self.mtime.is_finite() && self.mtime > 0.0 {
            self.mtime as u64
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FileObject {
        FileObject {
            full_path: "/a/b.txt".to_string(),
            full_name: "b.txt".to_string(),
            name: "b".to_string(),
            size: 10,
            extension: ".txt".to_string(),
            kind_name: "file".to_string(),
            mtime: 1_700_000_000.0,
        }
    }

    #[test]
    fn test_decode_sample_descriptor() {
        let json = r#"{
            "full_path": "/a/b.txt",
            "full_name": "b.txt",
            "name": "b",
            "size": 10,
            "extension": ".txt",
            "type": "file",
            "mtime": 1700000000
        }"#;
        let obj: FileObject = serde_json::from_str(json).unwrap();
        assert_eq!(obj, sample());
        assert!(obj.has_consistent_name());
        assert!(obj.full_name.ends_with(&obj.extension));
        assert_eq!(obj.kind(), FileKind::Other);
        assert!(!obj.is_container());
    }

    #[test]
    fn test_decode_backend_folder() {
        // Folders carry a null extension, a fractional mtime and an extra parent field
        let json = r#"{
            "full_path": "/home/user/docs",
            "full_name": "docs",
            "name": "docs",
            "extension": null,
            "size": 4096,
            "type": "folder",
            "parent": "/home/user",
            "mtime": 1700000000.25
        }"#;
        let obj: FileObject = serde_json::from_str(json).unwrap();
        assert_eq!(obj.extension, "");
        assert_eq!(obj.kind(), FileKind::Folder);
        assert!(obj.is_container());
        assert!(obj.has_consistent_name());
        assert_eq!(obj.mtime_secs(), 1_700_000_000);
    }

    #[test]
    fn test_decode_missing_extension() {
        let json = r#"{"full_path":"/s","full_name":"s","name":"s","size":0,"type":"space","mtime":0}"#;
        let obj: FileObject = serde_json::from_str(json).unwrap();
        assert_eq!(obj.extension, "");
        assert_eq!(obj.kind(), FileKind::Space);
    }

    #[test]
    fn test_serialize_uses_type_key() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["type"], "file");
        assert!(value.get("kind_name").is_none());
    }

    #[test]
    fn test_inconsistent_name() {
        let mut obj = sample();
        obj.full_name = "c.txt".to_string();
        assert!(!obj.has_consistent_name());

        obj.full_name = "b.md".to_string();
        assert!(!obj.has_consistent_name());
    }

    #[test]
    fn test_file_kind_from_type() {
        assert_eq!(FileKind::from_type("space"), FileKind::Space);
        assert_eq!(FileKind::from_type("folder"), FileKind::Folder);
        assert_eq!(FileKind::from_type("Directory"), FileKind::Folder);
        assert_eq!(FileKind::from_type("document"), FileKind::Document);
        assert_eq!(FileKind::from_type("image"), FileKind::Image);
        assert_eq!(FileKind::from_type("video"), FileKind::Video);
        assert_eq!(FileKind::from_type("audio"), FileKind::Audio);
        assert_eq!(FileKind::from_type("archive"), FileKind::Archive);
        assert_eq!(FileKind::from_type("program"), FileKind::Program);
        assert_eq!(FileKind::from_type("file"), FileKind::Other);
        assert_eq!(FileKind::from_type("weird"), FileKind::Other);
    }

    #[test]
    fn test_parent_path() {
        assert_eq!(sample().parent_path().as_deref(), Some("/a"));

        let mut obj = sample();
        obj.full_path = "/a".to_string();
        assert_eq!(obj.parent_path().as_deref(), Some("/"));

        obj.full_path = "/a/b/".to_string();
        assert_eq!(obj.parent_path().as_deref(), Some("/a"));

        obj.full_path = r"C:\Users\me\notes.txt".to_string();
        assert_eq!(obj.parent_path().as_deref(), Some(r"C:\Users\me"));

        obj.full_path = r"C:\Users".to_string();
        assert_eq!(obj.parent_path().as_deref(), Some(r"C:\"));

        obj.full_path = "relative".to_string();
        assert_eq!(obj.parent_path(), None);
    }
}
