extern crate termcolor;

use crate::read::read_account;
use lc_companion::{
    account::{self, Account},
    Companion,
};
use std::{
    fs::File,
    io::{Read, Write},
};
use termcolor::StandardStream;

#[allow(unused_must_use)]
async fn login_with(stdout: &mut StandardStream, companion: &mut Companion, account: Account) {
    write_info!(stdout, "Info", "Logging in as {}...", account.username);
    let origin = companion.settings().origin.clone();
    match companion.session().await {
        Ok(session) => {
            if session.login_account(&account).await {
                write_ok!(stdout, "Success", "Logged into {}", origin);
            } else {
                write_error!(stdout, "Fail", "Login to {} rejected", origin);
            }
        }
        Err(e) => write_error!(stdout, "Error", "connect: {}", e),
    }
}

#[allow(unused_must_use)]
pub async fn login_file<R: Read>(stdout: &mut StandardStream, companion: &mut Companion, rdr: R) {
    match account::from_reader(rdr) {
        Ok(v) => login_with(stdout, companion, v).await,
        Err(e) => write_error!(stdout, "Error", "Error load account: {}", e),
    }
}

/// Logs in with `account.yaml` from the workspace when present, otherwise
/// prompts for credentials.
#[allow(unused_must_use)]
pub async fn login(stdout: &mut StandardStream, companion: &mut Companion) {
    let path = companion.settings().account_path();
    if let Ok(f) = File::open(&path) {
        write_info!(stdout, "Info", "Using {}", path.display());
        return login_file(stdout, companion, f).await;
    }
    if let Some(account) = read_account(stdout) {
        login_with(stdout, companion, account).await
    }
}
