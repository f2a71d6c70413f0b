extern crate clap;
extern crate pretty_env_logger;
extern crate termcolor;
extern crate tokio;

use clap::{crate_description, crate_name, Arg, Command};
use lc_companion::{Companion, Settings};
use pretty_env_logger::init_timed;
use std::{fs::File, io::Write};
use termcolor::{ColorChoice, StandardStream, WriteColor};

#[macro_use]
mod color;
mod command {
    pub mod catalog;
    pub mod problem;
    pub mod session;
}
mod read;
mod write;

use command::{
    catalog::{list, update},
    problem::problem_loop,
    session::{login, login_file},
};
use read::read_line;

#[allow(unused_must_use)]
#[tokio::main]
async fn main() {
    init_timed();
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    let app = Command::new(crate_name!())
        .about(crate_description!())
        .version(get_version!("version"))
        .long_version(get_version!("long_version"))
        .arg(
            Arg::new("dir")
                .long("dir")
                .short('d')
                .value_name("DIR")
                .help("Workspace holding the catalog, cookies and projects"),
        )
        .arg(
            Arg::new("origin")
                .long("origin")
                .value_name("URL")
                .help("Platform origin"),
        )
        .arg(Arg::new("account").help("Path to account file"))
        .get_matches();

    let mut settings = match app.get_one::<String>("dir") {
        Some(d) => Settings::in_dir(d),
        None => Settings::default(),
    };
    if let Some(o) = app.get_one::<String>("origin") {
        settings = settings.with_origin(o.as_str());
    }
    let mut companion = Companion::new(settings);

    if let Some(f) = app.get_one::<String>("account") {
        match File::open(f) {
            Ok(v) => login_file(&mut stdout, &mut companion, v).await,
            Err(e) => write_error!(&mut stdout, "Error", "Error open {}: {}", f, e),
        }
        stdout.reset();
    }
    loop {
        let command = match read_line(&mut stdout, b"lc-companion> ") {
            Some(v) => v,
            None => break,
        };
        match command.trim() {
            "login" => login(&mut stdout, &mut companion).await,
            "update" => update(&mut stdout, &mut companion).await,
            "list" => list(&mut stdout, &mut companion).await,
            "select" => problem_loop(&mut stdout, &mut companion).await,
            "exit" => break,
            "" => (),
            unknown => write_error!(
                &mut stdout,
                "Error",
                r#"lc-companion: unknown command "{}""#,
                unknown
            ),
        }
        stdout.reset();
    }
    stdout.reset();
}
