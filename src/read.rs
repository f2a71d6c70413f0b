extern crate termcolor;

use lc_companion::{account::Account, Language};
use std::{
    io::{stdin, Write},
    str::FromStr,
};
use termcolor::{StandardStream, WriteColor};

/// Reads one line into `dest`. Returns false on end of input.
#[allow(unused_must_use)]
pub fn read_line_to(stdout: &mut StandardStream, prompt: &[u8], dest: &mut String) -> bool {
    dest.clear();
    loop {
        stdout.write(prompt);
        stdout.flush();
        match stdin().read_line(dest) {
            Ok(0) => return false,
            Ok(_) => {
                dest.truncate(dest.trim_end().len());
                return true;
            }
            Err(e) => write_error!(stdout, "Error", "Read: {}", e),
        }
        stdout.reset();
    }
}
pub fn read_line(stdout: &mut StandardStream, prompt: &[u8]) -> Option<String> {
    let mut ret = String::new();
    read_line_to(stdout, prompt, &mut ret).then_some(ret)
}

#[allow(unused_must_use)]
pub fn read_parsed<T: FromStr>(stdout: &mut StandardStream, prompt: &[u8]) -> Option<T>
where
    T::Err: std::fmt::Display,
{
    let mut buf = String::new();
    loop {
        if !read_line_to(stdout, prompt, &mut buf) {
            return None;
        }
        match buf.trim().parse::<T>() {
            Ok(v) => return Some(v),
            Err(e) => write_error!(stdout, "Error", "parse: {}", e),
        }
        stdout.reset();
    }
}

#[allow(unused_must_use)]
pub fn read_language(stdout: &mut StandardStream) -> Option<&'static Language> {
    let mut buf = String::new();
    loop {
        if !read_line_to(stdout, b"Language: ", &mut buf) {
            return None;
        }
        match Language::find(buf.trim()) {
            Ok(v) => return Some(v),
            Err(e) => {
                let known: Vec<_> = Language::all().iter().map(|l| l.name).collect();
                write_error!(stdout, "Error", "{}, known: {}", e, known.join(" "));
            }
        }
        stdout.reset();
    }
}

pub fn read_account(stdout: &mut StandardStream) -> Option<Account> {
    Some(Account {
        username: read_line(stdout, b"Username: ")?,
        password: read_line(stdout, b"Password: ")?,
    })
}
