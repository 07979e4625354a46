use std::path::Path;

use super::*;

#[test]
fn test_file_locations() {
    let dirs = AppDirs {
        data_dir: PathBuf::from("/data/pagesift"),
        config_dir: PathBuf::from("/config/pagesift"),
    };
    assert_eq!(dirs.catalog_file(), Path::new("/data/pagesift").join(CACHE_FILE_NAME));
    assert_eq!(dirs.config_file(), Path::new("/config/pagesift/config.toml"));
}

#[test]
fn test_new_appends_name() {
    if let Some(dirs) = AppDirs::new("pagesift") {
        assert!(dirs.data_dir.ends_with("pagesift"));
        assert!(dirs.config_dir.ends_with("pagesift"));
        assert_ne!(dirs.data_dir, dirs.config_dir);
    }
}
