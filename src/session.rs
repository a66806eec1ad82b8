use std::sync::mpsc;
use std::thread;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::board::*;
use crate::engine::config::*;
use crate::engine::*;
use crate::error::Error;

/// Commands sent into the core by whoever runs the game.
///
/// On the wire these are JSON objects tagged by `messageType`:
/// `{"messageType":"human-move","col":3}`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "messageType", rename_all = "kebab-case")]
pub enum Command {
    Reset,
    HumanMove {
        #[serde(rename = "col")]
        column: usize,
    },
    #[serde(rename_all = "camelCase")]
    AiMove { max_depth: u16 },
}

impl Command {
    /// Parses one JSON line and checks its arguments.
    pub fn parse(line: &str) -> Result<Command, Error> {
        let command: Command = serde_json::from_str(line)?;
        command.validate()?;
        Ok(command)
    }

    pub fn validate(&self) -> Result<(), Error> {
        match *self {
            Command::HumanMove { column } if column >= COLS => Err(Error::ColumnOutOfRange { column }),
            _ => Ok(()),
        }
    }
}

/// Results sent back out of the core.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "messageType", rename_all = "kebab-case")]
pub enum Event {
    ResetDone,
    #[serde(rename_all = "camelCase")]
    HumanMoveDone {
        coords: Option<Coord>,
        is_win: bool,
        winning_chips: Option<WinningChips>,
        is_full: bool,
    },
    Progress {
        #[serde(rename = "col")]
        column: usize,
    },
    #[serde(rename_all = "camelCase")]
    AiMoveDone {
        coords: Option<Coord>,
        is_win: bool,
        winning_chips: Option<WinningChips>,
        is_full: bool,
        win_imminent: bool,
        loss_imminent: bool,
    },
}

impl Event {
    // true for the one event that ends the handling of a command
    pub fn is_done(&self) -> bool {
        match self {
            Event::Progress { .. } => false,
            _ => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    InProgress,
    HumanWon,
    OpponentWon,
    Tie,
}

impl Status {
    pub fn of(board: &Board) -> Status {
        match board.score() {
            HUMAN_WIN => Status::HumanWon,
            OPPONENT_WIN => Status::OpponentWon,
            _ if board.is_full() => Status::Tie,
            _ => Status::InProgress,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Status::InProgress => "Game in progress.",
            Status::HumanWon => "You win! Cherish this moment.",
            Status::OpponentWon => "The computer wins. Try again when you are ready.",
            Status::Tie => "It's a tie!",
        }
    }
}

/// What the last opponent search found out about where the game is heading.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outlook {
    Neutral,
    WinImminent,
    LossImminent,
}

impl Outlook {
    pub fn from_flags(win_imminent: bool, loss_imminent: bool) -> Outlook {
        if win_imminent {
            Outlook::WinImminent
        } else if loss_imminent {
            Outlook::LossImminent
        } else {
            Outlook::Neutral
        }
    }

    pub fn message(&self) -> Option<&'static str> {
        match self {
            Outlook::Neutral => None,
            Outlook::WinImminent => Some("Uh oh, the computer is making a strong move!"),
            Outlook::LossImminent => Some("The computer is unsure. Now's your chance!"),
        }
    }
}

/// The live game. Human moves go straight onto the board; opponent moves
/// are chosen by the searcher first.
///
/// Nothing here stops moves after the game is over; callers check
/// `status()` before sending more.
pub struct Session<R: Rng> {
    board: Board,
    searcher: Searcher<R>,
    history: Vec<usize>,
    outlook: Outlook,
}

impl<R: Rng> Session<R> {
    pub fn new(rng: R) -> Session<R> {
        Session {
            board: Board::new(),
            searcher: Searcher::new(rng),
            history: Vec::new(),
            outlook: Outlook::Neutral,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    // columns actually played on the live board, in order
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    pub fn status(&self) -> Status {
        Status::of(&self.board)
    }

    pub fn outlook(&self) -> Outlook {
        self.outlook
    }

    pub fn handle(&mut self, command: Command, emit: &mut dyn FnMut(Event)) {
        log::debug!("handling {:?}", command);
        match command {
            Command::Reset => {
                self.reset();
                emit(Event::ResetDone);
            }
            Command::HumanMove { column } => {
                let event = self.human_move(column);
                emit(event);
            }
            Command::AiMove { max_depth } => {
                let event = self.ai_move(max_depth, emit);
                emit(event);
            }
        }
    }

    fn reset(&mut self) {
        self.board = Board::new();
        self.history.clear();
        self.outlook = Outlook::Neutral;
    }

    fn human_move(&mut self, column: usize) -> Event {
        let coords = self.play(Player::Human, Some(column));
        Event::HumanMoveDone {
            coords,
            is_win: self.board.has_winner(),
            winning_chips: self.board.winning_chips().copied(),
            is_full: self.board.is_full(),
        }
    }

    fn ai_move(&mut self, max_depth: u16, emit: &mut dyn FnMut(Event)) -> Event {
        if max_depth > MAX_SEARCH_DEPTH {
            log::warn!("search depth {} capped at {}", max_depth, MAX_SEARCH_DEPTH);
        }
        let max_depth = max_depth.min(MAX_SEARCH_DEPTH);
        let choice = self
            .searcher
            .choose_move(&self.board, max_depth, &mut |column| emit(Event::Progress { column }));
        self.outlook = Outlook::from_flags(choice.win_imminent, choice.loss_imminent);

        let coords = self.play(Player::Opponent, choice.column);
        Event::AiMoveDone {
            coords,
            is_win: self.board.has_winner(),
            winning_chips: self.board.winning_chips().copied(),
            is_full: self.board.is_full(),
            win_imminent: choice.win_imminent,
            loss_imminent: choice.loss_imminent,
        }
    }

    fn play(&mut self, player: Player, column: Option<usize>) -> Option<Coord> {
        let coords = column.and_then(|col| self.board.place(player, col));
        match coords {
            Some(at) => self.history.push(at.col as usize),
            None => log::warn!("{:?} move {:?} not played", player, column),
        }
        coords
    }
}

/// A session running on its own thread, so a long search never blocks
/// whoever is driving the game.
pub struct SessionHandle {
    commands: mpsc::Sender<Command>,
    events: mpsc::Receiver<Event>,
    worker: thread::JoinHandle<()>,
}

pub fn spawn<R: Rng + Send + 'static>(rng: R) -> SessionHandle {
    let (command_tx, command_rx) = mpsc::channel::<Command>();
    let (event_tx, event_rx) = mpsc::channel();

    let worker = thread::spawn(move || {
        let mut session = Session::new(rng);
        for command in command_rx {
            session.handle(command, &mut |event| {
                // the handle may already be gone; finish the command anyway
                let _ = event_tx.send(event);
            });
        }
        log::debug!("session worker stopping");
    });

    SessionHandle {
        commands: command_tx,
        events: event_rx,
        worker,
    }
}

impl SessionHandle {
    pub fn send(&self, command: Command) -> Result<(), Error> {
        self.commands.send(command).map_err(|_| Error::Disconnected)
    }

    pub fn recv(&self) -> Result<Event, Error> {
        self.events.recv().map_err(|_| Error::Disconnected)
    }

    pub fn try_recv(&self) -> Result<Option<Event>, Error> {
        match self.events.try_recv() {
            Ok(event) => Ok(Some(event)),
            Err(mpsc::TryRecvError::Empty) => Ok(None),
            Err(mpsc::TryRecvError::Disconnected) => Err(Error::Disconnected),
        }
    }

    // sends `command` and blocks until its done event, collecting everything
    pub fn request(&self, command: Command) -> Result<Vec<Event>, Error> {
        self.send(command)?;
        let mut events = Vec::new();
        loop {
            let event = self.recv()?;
            let done = event.is_done();
            events.push(event);
            if done {
                return Ok(events);
            }
        }
    }

    // stops taking commands; returns whatever the worker still had to say
    pub fn finish(self) -> Vec<Event> {
        let SessionHandle { commands, events, worker } = self;
        drop(commands);
        let rest = events.iter().collect::<Vec<_>>();
        if worker.join().is_err() {
            log::error!("session worker panicked");
        }
        rest
    }
}
