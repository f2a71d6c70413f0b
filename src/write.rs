extern crate termcolor;

use lc_companion::{
    judge::{Poll, Verdict},
    Catalog, Project, Result,
};
use std::{fmt::Display, io::Write};
use termcolor::StandardStream;

#[allow(unused_must_use)]
pub fn write_result<T, E: Display>(
    stdout: &mut StandardStream,
    result: std::result::Result<T, E>,
    success: &str,
) -> Option<T> {
    match result {
        Ok(v) => {
            write_ok!(stdout, "Success", "{}", success);
            Some(v)
        }
        Err(e) => {
            write_error!(stdout, "Error", "{}", e);
            None
        }
    }
}

#[allow(unused_must_use)]
pub fn write_projects(stdout: &mut StandardStream, catalog: &Catalog, projects: &[Project]) {
    if projects.is_empty() {
        write_info!(stdout, "Info", "No local projects");
        return;
    }
    for p in projects {
        let status = catalog
            .resolve(p.id())
            .map(|v| v.status.to_string())
            .unwrap_or_else(|_| String::from("missing"));
        write_info!(stdout, status, "{} [{}] {}", p.entry, p.language, p.dir().display());
    }
}

#[allow(unused_must_use)]
fn write_block(stdout: &mut StandardStream, typ: &str, text: Option<String>) {
    if let Some(t) = text.filter(|t| !t.is_empty()) {
        write_info!(stdout, typ, "");
        writeln!(stdout, "{}", t.trim_end());
    }
}

#[allow(unused_must_use)]
pub fn write_verdict(stdout: &mut StandardStream, verdict: &Verdict) {
    if verdict.accepted() {
        write_ok!(stdout, "Judge", "{}", verdict);
        return;
    }
    write_error!(stdout, "Judge", "{}", verdict);
    write_block(stdout, "Message", verdict.error().map(str::to_owned));
    write_block(stdout, "Input", verdict.last_testcase());
    write_block(stdout, "Expected", verdict.expected_output());
    write_block(stdout, "Output", verdict.code_output());
}

/// Reports one poll. Returns true once judging has finished.
#[allow(unused_must_use)]
pub fn write_poll(stdout: &mut StandardStream, poll: Result<Poll>) -> bool {
    match poll {
        Ok(Poll::Finished(v)) => {
            write_verdict(stdout, &v);
            true
        }
        Ok(Poll::Pending(state)) => {
            write_progress!(stdout, "Judge", "{}", state);
            false
        }
        Err(e) => {
            write_error!(stdout, "Error", "check: {}", e);
            true
        }
    }
}
