//! The catalog of optional third-party libraries the scaffolder knows about.
//!
//! Everything dependency-specific lives in this table: the upstream repository,
//! the submodule directory, the CMake directives and the demo lines for the
//! generated entry point. Adding a library is a single new entry here.

use thiserror::Error;

#[derive(Debug)]
pub struct DependencySpec {
    pub name: &'static str,
    /// Upstream repository registered as a git submodule.
    pub url: &'static str,
    /// Directory under `external/` the submodule is checked out into.
    pub submodule_dir: &'static str,
    /// `include_directories` entry for the library build file, if any.
    pub include_dir: Option<&'static str>,
    /// Link target appended to the library's `target_link_libraries`.
    pub link_target: Option<&'static str>,
    /// Header include emitted into the generated entry point.
    pub header: Option<&'static str>,
    /// Demo call emitted into the generated `main()`.
    pub usage_line: Option<&'static str>,
    /// Whether enabling this dependency pulls in the `test/` harness.
    pub provides_test_harness: bool,
}

impl DependencySpec {
    pub fn submodule_path(&self) -> String {
        format!("external/{}", self.submodule_dir)
    }
}

/// Fixed set of supported dependencies, in emission order.
pub const DEPENDENCIES: &[DependencySpec] = &[
    DependencySpec {
        name: "spdlog",
        url: "https://github.com/gabime/spdlog.git",
        submodule_dir: "spdlog",
        include_dir: Some("../external/spdlog/"),
        link_target: Some("spdlog"),
        header: Some("#include <spdlog/spdlog.h>"),
        usage_line: Some(r#"  spdlog::info("Hello world using spdlog!");"#),
        provides_test_harness: false,
    },
    DependencySpec {
        name: "gtest",
        url: "https://github.com/google/googletest.git",
        submodule_dir: "googletest",
        include_dir: None,
        link_target: None,
        header: None,
        usage_line: None,
        provides_test_harness: true,
    },
    DependencySpec {
        name: "fmt",
        url: "https://github.com/fmtlib/fmt.git",
        submodule_dir: "fmt",
        include_dir: Some("../external/fmt/"),
        link_target: Some("fmt::fmt-header-only"),
        header: Some("#include <fmt/core.h>"),
        usage_line: Some(r#"  fmt::print("Hello world using fmt!\n");"#),
        provides_test_harness: false,
    },
];

#[derive(Error, Debug, PartialEq)]
#[error("unknown dependency `{0}`, expected one of spdlog, gtest, fmt")]
pub struct UnknownDependency(pub String);

pub fn find(name: &str) -> Result<&'static DependencySpec, UnknownDependency> {
    DEPENDENCIES
        .iter()
        .find(|dep| dep.name == name)
        .ok_or_else(|| UnknownDependency(name.to_string()))
}
