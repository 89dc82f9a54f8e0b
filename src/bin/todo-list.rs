use std::io::{stdin, stdout};
use std::path::Path;

use todo_list::cli::Cli;
use todo_list::config::TASKS_FILE;
use todo_list::TaskStore;


fn main() {
    env_logger::init();

    let tasks_path = Path::new(TASKS_FILE);
    let mut store = match TaskStore::load(tasks_path) {
        Ok(store) => store,
        Err(err) => {
            // Starting with an empty list would overwrite the file on exit
            log::error!("Unable to load tasks: {}", err);
            eprintln!("Unable to load tasks from {:?}: {}", tasks_path, err);
            std::process::exit(1);
        },
    };

    let stdin = stdin();
    let mut cli = Cli::new(stdin.lock(), stdout());
    if let Err(err) = cli.run(&mut store) {
        log::error!("The task list stopped with an error: {}", err);
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
