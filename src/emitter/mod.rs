//! Template emitter: turns a [`ScaffoldConfig`] into the full set of output
//! files. Rendering is pure; writing goes through the [`FileWriter`] seam.

mod templates;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use console::style;
use indicatif::ProgressBar;
use liquid::{Parser, ParserBuilder};
use liquid_core::{Object, Value};

use crate::fsops::FileWriter;
use crate::progressbar;
use crate::scaffold_config::ScaffoldConfig;

#[derive(Debug)]
pub struct RenderedFile {
    /// Path relative to the project destination.
    pub path: PathBuf,
    pub contents: String,
    pub executable: bool,
}

pub fn create_liquid_engine() -> Parser {
    ParserBuilder::with_stdlib()
        .build()
        .expect("can't fail due to no partials support")
}

/// Render every output file for the given configuration. No filesystem access.
pub fn render_project(config: &ScaffoldConfig) -> Result<Vec<RenderedFile>> {
    let engine = create_liquid_engine();
    let globals = build_globals(config);

    let mut plan = vec![
        ("CMakeLists.txt", templates::ROOT_CMAKE, false),
        ("lib/CMakeLists.txt", templates::LIB_CMAKE, false),
        ("src/main.cpp", templates::MAIN_CPP, false),
        ("lib/hello.cpp", templates::HELLO_CPP, false),
        ("lib/hello.h", templates::HELLO_H, false),
        (".gitignore", templates::GITIGNORE, false),
        ("run.sh", templates::RUN_SH, true),
    ];
    if config.wants_tests() {
        plan.push(("test/CMakeLists.txt", templates::TEST_CMAKE, false));
        plan.push(("test/main.cpp", templates::TEST_MAIN_CPP, false));
        plan.push(("test/hello.cpp", templates::TEST_HELLO_CPP, false));
    }

    plan.into_iter()
        .map(|(path, source, executable)| {
            let contents = render_one(&engine, source, &globals)
                .with_context(|| format!("cannot render `{path}`"))?;
            Ok(RenderedFile {
                path: PathBuf::from(path),
                contents,
                executable,
            })
        })
        .collect()
}

/// Write the rendered files below `destination`, marking shell scripts
/// executable afterwards.
pub fn write_rendered(
    writer: &mut impl FileWriter,
    destination: &Path,
    files: &[RenderedFile],
) -> Result<()> {
    let mp = progressbar::new();
    let spinner_style = progressbar::spinner();

    let total = files.len().to_string();
    for (progress, file) in files.iter().enumerate() {
        let pb = mp.add(ProgressBar::new(50));
        pb.set_style(spinner_style.clone());
        pb.set_prefix(format!(
            "[{:width$}/{}]",
            progress + 1,
            total,
            width = total.len()
        ));
        pb.set_message(format!("Writing: {}", file.path.display()));

        let target = destination.join(&file.path);
        writer.write_file(&target, &file.contents).with_context(|| {
            format!(
                "⛔ {} `{}`",
                style("Error writing rendered file.").bold().red(),
                style(file.path.display()).bold()
            )
        })?;
        if file.executable {
            writer.set_executable(&target)?;
        }
        pb.finish_with_message(format!("Done: {}", file.path.display()));
    }
    Ok(())
}

fn render_one(engine: &Parser, source: &str, globals: &Object) -> Result<String> {
    let template = engine.parse(source)?;
    Ok(template.render(globals)?)
}

/// Fill every named substitution slot. Per-dependency lines come pre-joined
/// from the registry, in registry order.
fn build_globals(config: &ScaffoldConfig) -> Object {
    let mut extra_subdirectories = Vec::new();
    if config.wants_tests() {
        extra_subdirectories.push("add_subdirectory(test)".to_string());
    }
    for dep in config.enabled() {
        extra_subdirectories.push(format!("add_subdirectory({})", dep.submodule_path()));
    }

    let lib_include_dirs: Vec<String> = config
        .enabled()
        .filter_map(|dep| dep.include_dir)
        .map(|dir| format!("include_directories({dir})"))
        .collect();

    let lib_link_targets: String = config
        .enabled()
        .filter_map(|dep| dep.link_target)
        .map(|target| format!(" {target}"))
        .collect();

    let main_includes: Vec<&str> = config.enabled().filter_map(|dep| dep.header).collect();
    let main_usage: Vec<&str> = config.enabled().filter_map(|dep| dep.usage_line).collect();

    let test_run = if config.wants_tests() {
        format!(" && ./bin/{}_test", config.project_name)
    } else {
        String::new()
    };

    // The generated test runner quiets spdlog when both are selected.
    let (test_includes, test_setup) = if config.is_enabled("spdlog") {
        (
            "#include <spdlog/spdlog.h>",
            "  spdlog::set_level(spdlog::level::warn);",
        )
    } else {
        ("", "")
    };

    let mut globals = Object::new();
    globals.insert(
        "project_name".into(),
        Value::scalar(config.project_name.clone()),
    );
    globals.insert("authors".into(), Value::scalar(config.author.clone()));
    globals.insert(
        "cpp_standard".into(),
        Value::scalar(config.cpp_standard.to_string()),
    );
    globals.insert(
        "extra_subdirectories".into(),
        Value::scalar(extra_subdirectories.join("\n")),
    );
    globals.insert(
        "lib_include_dirs".into(),
        Value::scalar(lib_include_dirs.join("\n")),
    );
    globals.insert("lib_link_targets".into(), Value::scalar(lib_link_targets));
    globals.insert(
        "main_includes".into(),
        Value::scalar(main_includes.join("\n")),
    );
    globals.insert("main_usage".into(), Value::scalar(main_usage.join("\n")));
    globals.insert("test_run".into(), Value::scalar(test_run));
    globals.insert("test_includes".into(), Value::scalar(test_includes));
    globals.insert("test_setup".into(), Value::scalar(test_setup));
    globals
}
