use std::time::Duration;

use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

extern crate cfour;

use cfour::engine::utils::*;
use cfour::session::{self, Command, Event, SessionHandle};
use cfour::Error;

/// Connect-four core speaking JSON lines: commands on stdin, events on stdout.
#[derive(Parser)]
#[command(name = "main")]
struct Args {
    /// Seed for tie-breaking between equally good columns
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();
    let rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };

    let mut nb_stdin = NonBlockingStdin::new();
    let client = Client::new(session::spawn(rng));
    loop {
        if let Err(err) = client.tic() {
            log::error!("{}", err);
            return;
        }
        match nb_stdin.next_line(Duration::from_millis(10)) {
            Input::Line(line) => client.handle_line(&line),
            Input::Idle => {}
            Input::Closed => break,
        }
    }
    client.finish();
}

struct Client {
    session: SessionHandle,
}

impl Client {
    fn new(session: SessionHandle) -> Client {
        Client { session }
    }

    // called every loop. prints whatever the session has produced
    fn tic(&self) -> Result<(), Error> {
        while let Some(event) = self.session.try_recv()? {
            print_event(&event);
        }
        Ok(())
    }

    fn handle_line(&self, line: &str) {
        let line = line.trim();
        if line.is_empty() {
            return;
        }
        log::debug!("received command: {}", line);
        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(err) => {
                log::warn!("ignoring '{}': {}", line, err);
                return;
            }
        };
        if let Err(err) = self.session.send(command) {
            log::error!("{}", err);
        }
    }

    // stdin is done; let an in-flight search finish and flush its events
    fn finish(self) {
        for event in self.session.finish() {
            print_event(&event);
        }
    }
}

fn print_event(event: &Event) {
    match serde_json::to_string(event) {
        Ok(json) => println!("{}", json),
        Err(err) => log::error!("could not serialize {:?}: {}", event, err),
    }
}
