mod helpers;

mod cli;
mod deps_only;
