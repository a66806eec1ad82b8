use std::io::{self, BufRead, Stdin, Write};
use std::process::exit;
use std::str::SplitWhitespace;

use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use cfour::board::format::parse_column;
use cfour::board::*;
use cfour::engine::config::*;
use cfour::session::{self, Command, Event, Outlook, SessionHandle, Status};

/// Play connect four against the computer in the terminal.
#[derive(Parser)]
#[command(name = "interface")]
struct Args {
    /// Search depth in plies
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH,
          value_parser = clap::value_parser!(u16).range(0..=MAX_SEARCH_DEPTH as i64))]
    depth: u16,

    /// Difficulty level; overrides --depth
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=MAX_DIFFICULTY as i64))]
    difficulty: Option<u8>,

    /// Seed for tie-breaking between equally good columns
    #[arg(long)]
    seed: Option<u64>,
}

struct GameContext {
    depth: u16,
    // mirror of the live board, kept in step with the session's events
    board: Board,
    history: Vec<String>,
    outlook: Outlook,
}

impl GameContext {
    fn new(depth: u16) -> GameContext {
        GameContext {
            depth,
            board: Board::new(),
            history: Vec::new(),
            outlook: Outlook::Neutral,
        }
    }

    fn reset(&mut self) {
        self.board = Board::new();
        self.history.clear();
        self.outlook = Outlook::Neutral;
    }
}

fn next_line(stdin: &mut Stdin) -> String {
    match stdin.lock().lines().next() {
        Some(Ok(line)) => line,
        // stdin closed or unreadable; nothing more to play
        _ => exit(0),
    }
}

fn command_help(_: &mut SplitWhitespace, _: &SessionHandle, _: &mut GameContext) -> bool {
    static HELP_TEXT: &'static str = "
COMMANDS
========
h                       Display this message.
p                       Print current board.
m <col>                 Drop a chip into column col (0-6).
d [depth]               Change search depth. If no argument is given,
                            the current depth is printed.
l                       Output move list history.
n                       Start a new game.
q                       Quit this program.
";
    println!("{}", HELP_TEXT);
    false
}

fn command_print(_: &mut SplitWhitespace, _: &SessionHandle, context: &mut GameContext) -> bool {
    println!("{}", context.board);
    false
}

fn command_make_move(tokens: &mut SplitWhitespace, session: &SessionHandle, context: &mut GameContext) -> bool {
    let col = match tokens.next().map(parse_column) {
        Some(Ok(col)) => col,
        Some(Err(err)) => {
            println!("ERROR: {}", err);
            return false;
        }
        None => {
            println!("ERROR: Need a column!");
            return false;
        }
    };

    let events = match session.request(Command::HumanMove { column: col }) {
        Ok(events) => events,
        Err(err) => {
            println!("ERROR: {}", err);
            exit(1);
        }
    };
    match events.last() {
        Some(Event::HumanMoveDone { coords: Some(at), .. }) => {
            context.board.place(Player::Human, at.col as usize);
            context.history.push(at.col.to_string());
            true
        }
        _ => {
            println!("ERROR: column {} is full", col);
            false
        }
    }
}

fn command_depth(tokens: &mut SplitWhitespace, _: &SessionHandle, context: &mut GameContext) -> bool {
    match tokens.next() {
        Some(tok) => {
            let dep: u16 = match tok.parse() {
                Ok(val) => val,
                Err(err) => {
                    println!("ERROR parsing depth: {:?}", err);
                    return false;
                }
            };
            if dep > MAX_SEARCH_DEPTH {
                println!("ERROR: depth must be <= {}", MAX_SEARCH_DEPTH);
                return false;
            }
            context.depth = dep;
        }
        None => println!("{}", context.depth),
    }
    false
}

fn command_list(_: &mut SplitWhitespace, _: &SessionHandle, context: &mut GameContext) -> bool {
    println!("{}", context.history.join(", "));
    false
}

fn command_new_game(_: &mut SplitWhitespace, session: &SessionHandle, context: &mut GameContext) -> bool {
    if let Err(err) = session.request(Command::Reset) {
        println!("ERROR: {}", err);
        exit(1);
    }
    context.reset();
    println!("New game.");
    println!("{}", context.board);
    false
}

// runs the computer's turn, drawing a dot per column the final search pass visits
fn computer_move(session: &SessionHandle, context: &mut GameContext) {
    println!("Thinking...");
    if let Err(err) = session.send(Command::AiMove { max_depth: context.depth }) {
        println!("ERROR: {}", err);
        exit(1);
    }
    loop {
        match session.recv() {
            Ok(Event::Progress { .. }) => {
                print!(".");
                let _ = io::stdout().flush();
            }
            Ok(Event::AiMoveDone {
                coords,
                win_imminent,
                loss_imminent,
                ..
            }) => {
                println!();
                match coords {
                    Some(at) => {
                        context.board.place(Player::Opponent, at.col as usize);
                        context.history.push(at.col.to_string());
                        println!("Your opponent played column {}", at.col);
                    }
                    None => println!("Your opponent has no move"),
                }
                context.outlook = Outlook::from_flags(win_imminent, loss_imminent);
                return;
            }
            Ok(event) => log::warn!("unexpected event {:?}", event),
            Err(err) => {
                println!("ERROR: {}", err);
                exit(1);
            }
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();
    let depth = match args.difficulty.and_then(Difficulty::new) {
        Some(difficulty) => difficulty.max_depth(),
        None => args.depth,
    };
    let rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };

    let session = session::spawn(rng);
    let mut stdin = io::stdin();
    let mut context = GameContext::new(depth);
    let mut player_move = true;
    loop {
        if context.board.is_over() {
            println!("{}", context.board);
            println!("{}", Status::of(&context.board).message());
            println!("History: {}", context.history.join(", "));
            return;
        }

        if player_move {
            let mut move_made = false;
            println!("{}", context.board);
            if let Some(msg) = context.outlook.message() {
                println!("{}", msg);
            }
            while !move_made {
                println!("Your move.");
                println!("Enter command. 'h' for help.");
                let line = next_line(&mut stdin);
                let mut tokens = line.split_whitespace();
                // function returns true if a move is made
                let func: fn(&mut SplitWhitespace, &SessionHandle, &mut GameContext) -> bool = match tokens.next() {
                    Some("h") => command_help,
                    Some("p") => command_print,
                    Some("m") => command_make_move,
                    Some("q") => |_, _, _| exit(0),
                    Some("d") => command_depth,
                    Some("l") => command_list,
                    Some("n") => command_new_game,
                    Some(_) => command_help,
                    None => |_, _, _| false,
                };

                move_made = func(&mut tokens, &session, &mut context);
            }

            player_move = false;
        } else {
            computer_move(&session, &mut context);
            println!();
            player_move = true;
        }
    }
}
