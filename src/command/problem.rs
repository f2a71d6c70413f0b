extern crate termcolor;

use crate::{
    read::{read_language, read_line, read_parsed},
    write::{write_poll, write_result},
};
use lc_companion::{
    config::submission::{CHECK_DELAY, CHECK_LIMIT},
    judge::{Session, SubmissionId},
    workspace, Companion, Error, Project, Result,
};
use log::debug;
use std::{io::Write, path::Path};
use termcolor::{StandardStream, WriteColor};
use tokio::time::sleep;

#[allow(unused_must_use)]
async fn select(stdout: &mut StandardStream, companion: &mut Companion) -> Option<Project> {
    loop {
        let id: u32 = read_parsed(stdout, b"Problem id: ")?;
        let project = match companion.local_project(id).await {
            Err(Error::NoProject(_)) => {
                let lang = read_language(stdout)?;
                companion.project(id, lang.name).await
            }
            other => other,
        };
        match project {
            Ok(v) => return Some(v),
            Err(e) => write_error!(stdout, "Error", "select: {}", e),
        }
        stdout.reset();
    }
}

/// Code template from a fresh playground, falling back to the problem's code
/// definitions.
async fn fetch_template(session: &Session, project: &Project) -> Result<String> {
    let referer = session.settings().problem_url(project.slug());
    match session
        .playground_template(project.id(), project.language, &referer, "")
        .await
    {
        Ok(v) => Ok(v),
        Err(e) => {
            debug!("Playground template failed: {}", e);
            session
                .problem_detail(&project.entry)
                .await?
                .code_template(project.language)?
                .ok_or(Error::TemplateExtractionFailed)
        }
    }
}

#[allow(unused_must_use)]
async fn detail(stdout: &mut StandardStream, session: &Session, project: &Project) {
    let detail = match session.problem_detail(&project.entry).await {
        Ok(v) => v,
        Err(e) => {
            write_error!(stdout, "Error", "detail: {}", e);
            return;
        }
    };
    let entry = &project.entry;
    write_info!(stdout, "Problem", "{}", entry);
    if let Some(d) = entry.difficulty {
        write_info!(stdout, "Level", "{}{}", d, if entry.paid_only { " (paid)" } else { "" });
    }
    write_info!(stdout, "Status", "{}", entry.status);
    write_info!(stdout, "Url", "{}", session.settings().problem_url(project.slug()));
    if let Some(sample) = detail.sample_test_case {
        write_info!(stdout, "Sample", "");
        writeln!(stdout, "{}", sample.trim_end());
    }
}

#[allow(unused_must_use)]
async fn init(stdout: &mut StandardStream, root: &Path, session: &Session, project: &Project) {
    write_info!(stdout, "Info", "Fetching {} template", project.language);
    let template = match fetch_template(session, project).await {
        Ok(v) => v,
        Err(e) => {
            write_error!(stdout, "Error", "template: {}", e);
            return;
        }
    };
    match workspace::scaffold(root, project, &template) {
        Ok(true) => write_ok!(
            stdout,
            "Success",
            "Created {}",
            root.join(project.source_path()).display()
        ),
        Ok(false) => write_warn!(
            stdout,
            "Skip",
            "{} already exists",
            root.join(project.source_path()).display()
        ),
        Err(e) => write_error!(stdout, "Error", "init: {}", e),
    }
}

#[allow(unused_must_use)]
async fn wait_verdict(stdout: &mut StandardStream, session: &Session, id: SubmissionId) {
    for _ in 0..CHECK_LIMIT {
        sleep(CHECK_DELAY).await;
        if write_poll(stdout, session.check(id).await) {
            return;
        }
    }
    write_error!(
        stdout,
        "Timeout",
        "Submission {} still judging after {} checks",
        id,
        CHECK_LIMIT
    );
}

#[allow(unused_must_use)]
async fn submit(stdout: &mut StandardStream, root: &Path, session: &Session, project: &Project) {
    let code = match workspace::prepare_upload(root, project) {
        Ok(v) => v,
        Err(e) => {
            write_error!(stdout, "Error", "upload: {}", e);
            return;
        }
    };
    write_info!(stdout, "Info", "Submitting {}", project);
    let id = match write_result(
        stdout,
        session.submit(&project.entry, &code, project.language).await,
        "Submitted",
    ) {
        Some(v) => v,
        None => return,
    };
    write_info!(stdout, "Info", "Submission id {}", id);
    wait_verdict(stdout, session, id).await;
}

#[allow(unused_must_use)]
pub async fn problem_loop(stdout: &mut StandardStream, companion: &mut Companion) {
    let project = match select(stdout, companion).await {
        Some(v) => v,
        None => return,
    };
    write_info!(stdout, "Info", "Selected {}", project);
    stdout.reset();
    let root = companion.settings().root.clone();
    let session: &Session = match companion.session().await {
        Ok(v) => v,
        Err(e) => {
            write_error!(stdout, "Error", "connect: {}", e);
            return;
        }
    };
    let prompt = format!("lc-companion [{} {}]> ", project.id(), project.language);
    loop {
        let command = match read_line(stdout, prompt.as_bytes()) {
            Some(v) => v,
            None => break,
        };
        match command.trim() {
            "detail" => detail(stdout, session, &project).await,
            "init" => init(stdout, &root, session, &project).await,
            "template" => match fetch_template(session, &project).await {
                Ok(v) => {
                    writeln!(stdout, "{}", v.trim_end());
                }
                Err(e) => write_error!(stdout, "Error", "template: {}", e),
            },
            "submit" => submit(stdout, &root, session, &project).await,
            "check" => {
                if let Some(id) = read_parsed(stdout, b"Submission id: ") {
                    write_poll(stdout, session.check(SubmissionId(id)).await);
                }
            }
            "unselect" => {
                write_info!(stdout, "Info", "Unselected problem");
                break;
            }
            "" => (),
            unknown => write_error!(stdout, "Error", "problem: Unknown command {}", unknown),
        }
        stdout.reset();
    }
    stdout.reset();
}
