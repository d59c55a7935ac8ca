//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;
use crate::models::FileKind;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArchive as Archive, LuArrowDown as SortDescending, LuArrowUp as SortAscending,
        LuChevronRight as ChevronRight, LuCornerLeftUp as Up, LuFile as File,
        LuFileText as Document, LuFilm as Video, LuFolder as Folder, LuFolderOpen as Explorer,
        LuHardDrive as Space, LuHouse as Home, LuImage as Image, LuMusic as Audio,
        LuSearch as Search, LuTerminal as Program, LuTriangleAlert as Warning,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowUp as Up, BsChevronRight as ChevronRight, BsExclamationTriangle as Warning,
        BsFileEarmark as File, BsFileEarmarkBinary as Program, BsFileEarmarkImage as Image,
        BsFileEarmarkMusic as Audio, BsFileEarmarkPlay as Video, BsFileEarmarkText as Document,
        BsFileEarmarkZip as Archive, BsFolder2 as Explorer, BsFolderFill as Folder,
        BsHddFill as Space, BsHouseFill as Home, BsSearch as Search,
        BsSortDown as SortDescending, BsSortUp as SortAscending,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(HOME, Home);
themed_icon!(UP, Up);
themed_icon!(SEARCH, Search);
themed_icon!(EXPLORER, Explorer);
themed_icon!(WARNING, Warning);
themed_icon!(SORT_ASCENDING, SortAscending);
themed_icon!(SORT_DESCENDING, SortDescending);

themed_icon!(SPACE, Space);
themed_icon!(FOLDER, Folder);
themed_icon!(DOCUMENT, Document);
themed_icon!(IMAGE, Image);
themed_icon!(VIDEO, Video);
themed_icon!(AUDIO, Audio);
themed_icon!(ARCHIVE, Archive);
themed_icon!(PROGRAM, Program);
themed_icon!(FILE, File);

/// Icon for an entry of the given kind.
pub fn for_kind(kind: FileKind) -> Icon {
    match kind {
        FileKind::Space => SPACE,
        FileKind::Folder => FOLDER,
        FileKind::Document => DOCUMENT,
        FileKind::Image => IMAGE,
        FileKind::Video => VIDEO,
        FileKind::Audio => AUDIO,
        FileKind::Archive => ARCHIVE,
        FileKind::Program => PROGRAM,
        FileKind::Other => FILE,
    }
}
