extern crate serde;
extern crate serde_yaml;

use crate::{error::Result, judge::Session};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

#[derive(Debug, Serialize, Deserialize)]
pub struct Account {
    pub username: String,
    pub password: String,
}

pub fn from_reader<R: Read>(rdr: R) -> Result<Account> {
    Ok(serde_yaml::from_reader(rdr)?)
}
pub fn to_writer<W: Write>(wdr: W, account: &Account) -> Result<()> {
    serde_yaml::to_writer(wdr, account)?;
    Ok(())
}

impl Session {
    pub async fn login_account(&mut self, account: &Account) -> bool {
        self.login(&account.username, &account.password).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_account_file() {
        let account = from_reader("username: alice\npassword: hunter2\n".as_bytes()).unwrap();
        assert_eq!(account.username, "alice");
        assert_eq!(account.password, "hunter2");
        let mut buf = Vec::new();
        to_writer(&mut buf, &account).unwrap();
        assert!(String::from_utf8(buf).unwrap().contains("username: alice"));
    }
}
