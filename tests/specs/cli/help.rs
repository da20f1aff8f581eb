//! Help and usage specs

use crate::prelude::*;

#[test]
fn no_args_prints_help() {
    Project::empty()
        .oq()
        .passes()
        .stdout_has("Usage: oq")
        .stdout_has("enqueue")
        .stdout_has("drain");
}

#[test]
fn help_lists_every_command() {
    let out = Project::empty().oq().args(&["--help"]).passes().stdout();
    for command in ["enqueue", "status", "export", "clear", "drain", "run"] {
        assert!(out.contains(command), "help is missing {}:\n{}", command, out);
    }
}

#[test]
fn enqueue_help_shows_flags() {
    Project::empty()
        .oq()
        .args(&["enqueue", "--help"])
        .passes()
        .stdout_has("--url")
        .stdout_has("--header")
        .stdout_has("--body-file");
}
