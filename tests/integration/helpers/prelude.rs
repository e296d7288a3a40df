pub use assert_cmd::Command;
pub use predicates::prelude::*;

pub use super::project::{tempdir, Project};

pub fn binary() -> Command {
    Command::cargo_bin("cppstart").unwrap()
}
