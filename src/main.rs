use std::fs::File;
use std::{env, io, io::BufReader};

use teller::console::run_menu_loop;
use teller::roster;
use teller::store::AccountStore;
use teller::teller::Teller;

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut args = env::args();
    if args.len() > 2 {
        eprintln!("Usage: {} [roster.csv]", args.next().unwrap());
        return Ok(());
    }

    let accounts = match args.nth(1) {
        Some(path) => {
            let reader = BufReader::new(File::open(&path).expect("Failed to open roster file"));
            roster::read_roster(reader)
        }
        None => roster::default_roster(),
    };

    let store = AccountStore::new(accounts).expect("Roster contains duplicate account ids");
    let mut teller = Teller::new(store);

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_menu_loop(&mut teller, stdin.lock(), stdout.lock())?;

    println!("{}", teller);
    Ok(())
}
