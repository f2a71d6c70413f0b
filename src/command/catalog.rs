extern crate termcolor;

use crate::write::write_projects;
use lc_companion::Companion;
use std::io::Write;
use termcolor::StandardStream;

#[allow(unused_must_use)]
pub async fn update(stdout: &mut StandardStream, companion: &mut Companion) {
    write_info!(stdout, "Info", "Downloading problem list...");
    match companion.update().await {
        Ok(v) => write_ok!(
            stdout,
            "Success",
            "Loaded {} problems into {}",
            v.len(),
            v.path().display()
        ),
        Err(e) => write_error!(stdout, "Error", "update: {}", e),
    }
}

#[allow(unused_must_use)]
pub async fn list(stdout: &mut StandardStream, companion: &mut Companion) {
    let projects = match companion.local_projects().await {
        Ok(v) => v,
        Err(e) => {
            write_error!(stdout, "Error", "list: {}", e);
            return;
        }
    };
    match companion.catalog().await {
        Ok(catalog) => write_projects(stdout, catalog, &projects),
        Err(e) => write_error!(stdout, "Error", "list: {}", e),
    }
}
