//! Terminal application - wires stdin controls, the driver worker and the renderer.

use std::error::Error;
use std::io::BufRead;
use std::sync::mpsc::{self, Sender};
use std::thread::{self, JoinHandle};

use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rules::{ChessRules, RulesError};

use crate::args::Args;
use crate::driver::{CancellationToken, Driver, DriverCommand};
use crate::render::{RenderOptions, Renderer};
use crate::session::Session;

/// The interactive auto-play application.
pub struct Gambit {
    token: CancellationToken,
    cmd_tx: Sender<DriverCommand>,
    driver_handle: JoinHandle<Result<u32, RulesError>>,
    render_handle: JoinHandle<()>,
}

impl Gambit {
    /// Spawns the driver and renderer threads and installs the Ctrl-C handler.
    pub fn new(args: &Args) -> Result<Self, Box<dyn Error>> {
        let token = CancellationToken::new();
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (frame_tx, frame_rx) = mpsc::channel();

        let mut rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let session = Session::new(ChessRules::new(), args.session_config(), &mut rng);

        let driver = Driver::new(session, rng, cmd_rx, frame_tx, token.clone())
            .with_pgn(args.pgn.clone())
            .with_games_limit(args.games);

        let renderer = Renderer::new(RenderOptions {
            sound: args.sound,
            quiet: args.quiet,
        });
        let render_handle = renderer.spawn(frame_rx);
        let driver_handle = thread::spawn(move || driver.run());

        let interrupt_token = token.clone();
        let interrupt_tx = cmd_tx.clone();
        ctrlc::set_handler(move || {
            interrupt_token.cancel();
            let _ = interrupt_tx.send(DriverCommand::Quit);
        })?;

        Ok(Self {
            token,
            cmd_tx,
            driver_handle,
            render_handle,
        })
    }

    /// Runs until the driver stops. Returns the number of finished games.
    pub fn run(self) -> Result<u32, Box<dyn Error>> {
        let input_tx = self.cmd_tx.clone();
        // Blocked on stdin until the process exits, so never joined
        thread::spawn(move || listen(input_tx));

        let finished = match self.driver_handle.join() {
            Ok(result) => result?,
            Err(_) => return Err("driver thread panicked".into()),
        };

        // The driver dropped its frame sender, so the renderer drains and exits
        let _ = self.render_handle.join();

        debug!(
            "Stopped after {} games (cancelled: {})",
            finished,
            self.token.is_cancelled()
        );
        Ok(finished)
    }
}

fn listen(tx: Sender<DriverCommand>) {
    let stdin = std::io::stdin();

    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        debug!("Input: {:?}", line.trim());

        let Some(command) = decode(&line) else {
            debug!("Unknown command: {}", line.trim());
            continue;
        };

        if tx.send(command).is_err() || command == DriverCommand::Quit {
            break;
        }
    }

    debug!("Input closed");
}

fn decode(line: &str) -> Option<DriverCommand> {
    match line.trim().to_ascii_lowercase().as_str() {
        "r" | "reset" => Some(DriverCommand::Reset),
        "s" | "speed" => Some(DriverCommand::CycleSpeed),
        "q" | "quit" => Some(DriverCommand::Quit),
        _ => None,
    }
}
