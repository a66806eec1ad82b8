use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

pub enum Input {
    Line(String),
    Idle,
    Closed,
}

pub struct NonBlockingStdin {
    receiver: mpsc::Receiver<String>,
}

// NOTE this should only be created once at the top of main and later
// passed to functions as they need it; a second one would race the first
// for stdin lines
impl NonBlockingStdin {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(err) => {
                        log::error!("stdin read failed: {}", err);
                        break;
                    }
                };
                if tx.send(line).is_err() {
                    break;
                }
            }
            // dropping tx tells the reader stdin is done
        });

        Self { receiver: rx }
    }

    // waits at most `timeout` for the next line
    pub fn next_line(&mut self, timeout: Duration) -> Input {
        match self.receiver.recv_timeout(timeout) {
            Ok(line) => Input::Line(line),
            Err(mpsc::RecvTimeoutError::Timeout) => Input::Idle,
            Err(mpsc::RecvTimeoutError::Disconnected) => Input::Closed,
        }
    }
}
