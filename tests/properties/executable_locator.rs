//! Property tests for executable lookup.

use proptest::prelude::*;

use pongpack::domain::services::locate_executable;
use pongpack::infrastructure::LocalFs;
use pongpack::Platform;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 24,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: on Windows the first existing of Release, Debug, bare wins.
    #[test]
    fn property_windows_probe_order(release in any::<bool>(), debug in any::<bool>()) {
        let dir = tempfile::tempdir().unwrap();
        let build = dir.path().join("build");
        for (present, sub) in [(release, "Release"), (debug, "Debug")] {
            if present {
                std::fs::create_dir_all(build.join(sub)).unwrap();
                std::fs::write(build.join(sub).join("pong.exe"), "exe").unwrap();
            }
        }

        let found = locate_executable(&LocalFs::new(), &Platform::windows(), &build, "pong");

        let expected = if release {
            build.join("Release").join("pong.exe")
        } else if debug {
            build.join("Debug").join("pong.exe")
        } else {
            build.join("pong.exe")
        };
        prop_assert_eq!(found, expected);
    }

    /// PROPERTY: other platforms never probe subdirectories.
    #[test]
    fn property_unix_uses_bare_path(release in any::<bool>()) {
        let dir = tempfile::tempdir().unwrap();
        let build = dir.path().join("build");
        if release {
            std::fs::create_dir_all(build.join("Release")).unwrap();
            std::fs::write(build.join("Release").join("pong"), "exe").unwrap();
        }

        let found = locate_executable(&LocalFs::new(), &Platform::unix(), &build, "pong");

        prop_assert_eq!(found, build.join("pong"));
    }
}
