use crate::helpers::prelude::*;

#[test]
fn it_emits_no_files_in_dependency_only_mode() {
    let dir = tempdir();

    binary()
        .args(["--destination", dir.path().to_str().unwrap()])
        .write_stdin("b\nn\nn\nn\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("Done").from_utf8());

    assert!(dir.files().is_empty());
    assert!(!dir.exists(".git"));
}

#[test]
fn the_mode_answer_is_case_insensitive() {
    let dir = tempdir();

    binary()
        .args(["--destination", dir.path().to_str().unwrap()])
        .write_stdin("B\nn\nn\nn\n")
        .assert()
        .success();

    assert!(dir.files().is_empty());
}

#[test]
fn deps_only_flag_skips_the_mode_prompt() {
    let dir = tempdir();

    // silent as well, so nothing is read from stdin at all
    binary()
        .arg("--deps-only")
        .arg("--silent")
        .args(["--destination", dir.path().to_str().unwrap()])
        .assert()
        .success();

    assert!(dir.files().is_empty());
}

#[test]
fn it_leaves_an_existing_project_alone() {
    let dir = tempdir()
        .file("src/main.cpp", "int main() { return 42; }\n")
        .file("CMakeLists.txt", "# hand-written\n");

    binary()
        .args(["--destination", dir.path().to_str().unwrap()])
        .write_stdin("b\nn\nn\nn\n")
        .assert()
        .success();

    assert_eq!(dir.read("src/main.cpp"), "int main() { return 42; }\n");
    assert_eq!(dir.files(), vec!["CMakeLists.txt", "src/main.cpp"]);
}
