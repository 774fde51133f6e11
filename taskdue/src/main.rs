use std::io::{self, Write};

use anyhow::Context;
use taskdue_core::commands::{cmd_add, cmd_delete, cmd_edit, cmd_print};
use taskdue_core::config::Config;
use taskdue_core::constants::*;
use taskdue_core::date_util::today_utc;
use taskdue_core::help::print_help;
use taskdue_core::input::read_optional;
use taskdue_core::storage;
use taskdue_core::store::TaskStore;
use taskdue_core::TaskdueError;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let conf = Config::new();
    let tasks = storage::load(&conf.store_file)
        .with_context(|| format!("failed to load {}", conf.store_file.display()))?;
    let mut store = TaskStore::from_tasks(tasks);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    loop {
        write!(out, "> ")?;
        out.flush()?;

        let verb = match read_optional(&mut input)? {
            Some(verb) => verb,
            None => break,
        };

        let result = match verb.as_str() {
            CMD_ADD => cmd_add(&mut store, &mut input, &mut out),
            CMD_PRINT => cmd_print(&store, &mut out, today_utc()),
            CMD_EDIT => cmd_edit(&mut store, &mut input, &mut out, today_utc()),
            CMD_DELETE => cmd_delete(&mut store, &mut input, &mut out, today_utc()),
            CMD_HELP => print_help(&mut out),
            CMD_EXIT => break,
            "" => Ok(()),
            other => writeln!(out, "Unknown command: {}. Enter `{}` for commands.", other, CMD_HELP)
                .map_err(TaskdueError::from),
        };

        match result {
            // A session truncated mid-prompt still saves the last consistent state.
            Err(TaskdueError::Eof) => break,
            other => other?,
        }
    }

    storage::save(&conf.store_file, store.tasks())
        .with_context(|| format!("failed to save {}", conf.store_file.display()))?;
    Ok(())
}
