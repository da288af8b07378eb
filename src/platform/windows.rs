use std::ffi::OsStr;
use std::os::windows::ffi::OsStrExt;

pub fn name_ends_with(name: &OsStr, suffix: &str) -> bool {
    let name: Vec<u16> = name.encode_wide().collect();
    let suffix: Vec<u16> = OsStr::new(suffix).encode_wide().collect();
    name.ends_with(&suffix)
}
