//! Property tests for the zip and gzip-tar archivers.

use std::collections::BTreeMap;
use std::fs;
use std::io::Read;
use std::path::Path;

use proptest::prelude::*;

use pongpack::domain::ports::Archiver;
use pongpack::infrastructure::{TarGzArchiver, ZipArchiver};

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9_]{0,7}").unwrap()
}

/// Relative file path (1-3 segments) mapped to contents
fn tree() -> impl Strategy<Value = BTreeMap<String, Vec<u8>>> {
    proptest::collection::btree_map(
        proptest::collection::vec(segment(), 1..=3).prop_map(|s| s.join("/")),
        proptest::collection::vec(any::<u8>(), 0..256),
        1..12,
    )
    // A path may not be both a file and a directory
    .prop_filter("no file/dir clashes", |files| {
        files
            .keys()
            .all(|a| !files.keys().any(|b| b.starts_with(&format!("{a}/"))))
    })
}

fn write_tree(root: &Path, files: &BTreeMap<String, Vec<u8>>) {
    for (rel, contents) in files {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }
}

fn read_zip(path: &Path) -> BTreeMap<String, Vec<u8>> {
    let mut archive = zip::ZipArchive::new(fs::File::open(path).unwrap()).unwrap();
    let mut out = BTreeMap::new();
    for i in 0..archive.len() {
        let mut entry = archive.by_index(i).unwrap();
        if entry.is_dir() {
            continue;
        }
        let mut buf = Vec::new();
        entry.read_to_end(&mut buf).unwrap();
        out.insert(entry.name().to_string(), buf);
    }
    out
}

fn read_tar_gz(path: &Path) -> BTreeMap<String, Vec<u8>> {
    let file = fs::File::open(path).unwrap();
    let mut archive = tar::Archive::new(flate2::read::GzDecoder::new(file));
    let mut out = BTreeMap::new();
    for entry in archive.entries().unwrap() {
        let mut entry = entry.unwrap();
        if !entry.header().entry_type().is_file() {
            continue;
        }
        let name = entry.path().unwrap().to_string_lossy().into_owned();
        let mut buf = Vec::new();
        entry.read_to_end(&mut buf).unwrap();
        out.insert(name, buf);
    }
    out
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 32,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: zip entries are exactly the deploy files, named relative to it.
    #[test]
    fn property_zip_holds_deploy_tree(files in tree()) {
        let dir = tempfile::tempdir().unwrap();
        let deploy = dir.path().join("deploy");
        write_tree(&deploy, &files);
        let archive = dir.path().join("pong_windows.zip");

        let summary = ZipArchiver.create(&deploy, &archive).unwrap();

        prop_assert_eq!(summary.files, files.len());
        prop_assert_eq!(read_zip(&archive), files);
    }

    /// PROPERTY: tarball entries are the deploy files under a `deploy/` prefix.
    #[test]
    fn property_tar_gz_holds_prefixed_deploy_tree(files in tree()) {
        let dir = tempfile::tempdir().unwrap();
        let deploy = dir.path().join("deploy");
        write_tree(&deploy, &files);
        let archive = dir.path().join("pong_linux.tar.gz");

        let summary = TarGzArchiver.create(&deploy, &archive).unwrap();

        let expected: BTreeMap<String, Vec<u8>> = files
            .iter()
            .map(|(k, v)| (format!("deploy/{k}"), v.clone()))
            .collect();
        prop_assert_eq!(summary.files, files.len());
        prop_assert_eq!(read_tar_gz(&archive), expected);
    }
}
