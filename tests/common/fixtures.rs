//! Test fixtures - reusable content constants for tests.

/// Stand-in for `cmake`.
///
/// Configure creates the `-B` directory. Build writes `<build dir>/pong`
/// (or `$FAKE_CMAKE_TARGET`). Both steps append their arguments to
/// `$FAKE_CMAKE_LOG` when set. Failures are switched on through
/// `FAKE_CMAKE_FAIL_CONFIGURE`, `FAKE_CMAKE_FAIL_BUILD` and `FAKE_CMAKE_NO_EXE`.
pub const FAKE_CMAKE: &str = r#"#!/bin/sh
if [ -n "$FAKE_CMAKE_LOG" ]; then
    echo "$*" >> "$FAKE_CMAKE_LOG"
fi

if [ "$1" = "--build" ]; then
    echo "[100%] Built target pong"
    if [ -n "$FAKE_CMAKE_FAIL_BUILD" ]; then
        echo "error: compilation failed" >&2
        exit 2
    fi
    if [ -z "$FAKE_CMAKE_NO_EXE" ]; then
        exe="$2/${FAKE_CMAKE_TARGET:-pong}"
        printf 'PONG' > "$exe"
        chmod 755 "$exe"
    fi
    exit 0
fi

echo "-- Configuring done"
if [ -n "$FAKE_CMAKE_FAIL_CONFIGURE" ]; then
    echo "CMake Error: The source directory does not contain CMakeLists.txt" >&2
    exit 1
fi
while [ $# -gt 0 ]; do
    if [ "$1" = "-B" ]; then
        mkdir -p "$2"
    fi
    shift
done
exit 0
"#;

/// Project config renaming the game
pub const BREAKOUT_CONFIG: &str = r#"[project]
name = "breakout"
"#;

/// Project config with a misspelled key
pub const TYPO_CONFIG: &str = r#"[build]
progam = "cmake3"
"#;

/// Project config that is not valid TOML
pub const BROKEN_CONFIG: &str = "[build\nprogram = ";
