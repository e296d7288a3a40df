use crate::helpers::prelude::*;

#[test]
fn it_rejects_an_unknown_dependency_name() {
    let dir = tempdir();

    binary()
        .arg("--silent")
        .args(["--name", "demo"])
        .args(["--author", "A"])
        .args(["--with", "boost"])
        .arg("--no-fetch")
        .args(["--destination", dir.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicates::str::contains("unknown dependency `boost`").from_utf8());

    assert!(dir.files().is_empty());
}

#[test]
fn silent_new_project_requires_name_and_author() {
    let dir = tempdir();

    binary()
        .arg("--silent")
        .args(["--author", "A"])
        .arg("--no-fetch")
        .args(["--destination", dir.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicates::str::contains("--silent requires --name").from_utf8());

    binary()
        .arg("--silent")
        .args(["--name", "demo"])
        .arg("--no-fetch")
        .args(["--destination", dir.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicates::str::contains("--silent requires --author").from_utf8());
}

#[test]
fn silent_refuses_to_overwrite_without_the_flag() {
    let dir = tempdir().file("src/main.cpp", "int main() { return 42; }\n");

    binary()
        .arg("--silent")
        .args(["--name", "demo"])
        .args(["--author", "A"])
        .arg("--no-fetch")
        .args(["--destination", dir.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicates::str::contains("Cancelling").from_utf8());

    assert_eq!(dir.read("src/main.cpp"), "int main() { return 42; }\n");
}

#[test]
fn overwrite_flag_skips_the_confirmation() {
    let dir = tempdir().file("src/main.cpp", "int main() { return 42; }\n");

    binary()
        .arg("--silent")
        .arg("--overwrite")
        .args(["--name", "demo"])
        .args(["--author", "A"])
        .arg("--no-fetch")
        .args(["--destination", dir.path().to_str().unwrap()])
        .assert()
        .success();

    assert!(dir.read("src/main.cpp").contains("helloWorld();"));
}

#[test]
fn help_lists_the_parameter_headings() {
    binary()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicates::str::contains("Project Parameters").from_utf8())
        .stdout(predicates::str::contains("Dependency Parameters").from_utf8());
}
