#[cfg(target_os = "windows")]
pub mod windows;

use std::ffi::OsStr;

/// Name a Windows `:Zone.Identifier` alternate data stream gets once it is
/// copied onto a filesystem that maps `:` to U+F03A (WSL, Samba).
pub const ZONE_IDENTIFIER_SUFFIX: &str = "\u{F03A}Zone.Identifier";

/// Literal, case-sensitive suffix test on a raw file name.
#[cfg(unix)]
pub fn name_ends_with(name: &OsStr, suffix: &str) -> bool {
    use std::os::unix::ffi::OsStrExt;
    name.as_bytes().ends_with(suffix.as_bytes())
}

#[cfg(target_os = "windows")]
pub fn name_ends_with(name: &OsStr, suffix: &str) -> bool {
    windows::name_ends_with(name, suffix)
}

#[cfg(not(any(unix, target_os = "windows")))]
pub fn name_ends_with(name: &OsStr, suffix: &str) -> bool {
    name.to_string_lossy().ends_with(suffix)
}
