use std::path::Path;

pub(crate) fn path_is_dir(path: &Path) -> anyhow::Result<()> {
    if !path.is_dir() {
        return Err(anyhow::anyhow!(
            "Expected directory, found file \"{}\"",
            path.display()
        ));
    }
    Ok(())
}

pub(crate) fn path_is_file(path: &Path) -> anyhow::Result<()> {
    if !path.is_file() {
        return Err(anyhow::anyhow!(
            "Expected file, found directory or nothing at \"{}\"",
            path.display()
        ));
    }
    Ok(())
}

pub(crate) fn path_has_ext(path: &Path, expected_ext: &str) -> anyhow::Result<()> {
    match path.extension() {
        Some(ext) if ext.eq_ignore_ascii_case(expected_ext) => Ok(()),
        Some(ext) => Err(anyhow::anyhow!(
            "Expected file with extension \"{expected_ext}\", found extension \"{ext:?}\", file \"{}\".",
            path.display()
        )),
        None => Err(anyhow::anyhow!(
            "Expected file with extension \"{expected_ext}\", no extension found for file \"{}\".",
            path.display()
        ))
    }
}

pub(crate) fn file_has_ext(path: &Path, expected_ext: &str) -> anyhow::Result<()> {
    path_is_file(path)?;
    path_has_ext(path, expected_ext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extensions() {
        assert!(path_has_ext(Path::new("labels.json"), "json").is_ok());
        assert!(path_has_ext(Path::new("labels.JSON"), "json").is_ok());
        assert!(path_has_ext(Path::new("labels.txt"), "json").is_err());
        assert!(path_has_ext(Path::new("labels"), "json").is_err());
    }

    #[test]
    fn files_and_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("config.json");
        std::fs::write(&file, "{}").unwrap();

        assert!(path_is_dir(dir.path()).is_ok());
        assert!(path_is_dir(&file).is_err());
        assert!(file_has_ext(&file, "json").is_ok());
        assert!(file_has_ext(&dir.path().join("missing.json"), "json").is_err());
    }
}
