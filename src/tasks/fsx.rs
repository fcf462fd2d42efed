//! `std::fs` wrappers that say which file was involved when they fail.

use crate::FailResult;

use ::failure::ResultExt;
use ::std::fs;
use ::std::path::Path;

pub(crate) fn read_to_string<P: AsRef<Path>>(path: P) -> FailResult<String>
{
    let path = path.as_ref();
    Ok(fs::read_to_string(path)
        .with_context(|_| format!("while reading file: '{}'", path.display()))?)
}

pub(crate) fn write<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> FailResult<()>
{
    let path = path.as_ref();
    Ok(fs::write(path, contents)
        .with_context(|_| format!("could not write file: '{}'", path.display()))?)
}
