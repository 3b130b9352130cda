use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    mpsc::{Receiver, RecvTimeoutError, Sender},
    Arc,
};
use std::thread;
use std::time::{Duration, Instant};

use chess::Color;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rules::{to_pgn, PgnHeaders, RulesEngine, RulesError, STANDARD_POSITION_FEN};

use crate::frame::{Frame, RESTART_SECONDS};
use crate::session::Session;
use crate::sound::SoundCue;

pub const RESTART_DELAY: Duration = Duration::from_secs(RESTART_SECONDS);

/// Commands sent from the input thread to the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverCommand {
    /// Abandon the current game and start a new one.
    Reset,
    /// Switch to the next speed setting.
    CycleSpeed,
    /// Shut down the driver thread.
    Quit,
}

/// Shared stop flag, checked by the driver whenever it wakes up.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

enum Wake {
    Elapsed,
    Reset,
    Stop,
}

/// Plays games on a dedicated thread, one ply per delay.
///
/// Owns the session and sends a frame to the renderer after every change.
pub struct Driver<R: RulesEngine> {
    session: Session<R>,
    rng: StdRng,
    rx: Receiver<DriverCommand>,
    frames: Sender<Frame>,
    token: CancellationToken,
    pgn_path: Option<PathBuf>,
    games_limit: Option<u32>,
    games_finished: u32,
}

impl<R: RulesEngine> Driver<R> {
    pub fn new(
        session: Session<R>,
        rng: StdRng,
        rx: Receiver<DriverCommand>,
        frames: Sender<Frame>,
        token: CancellationToken,
    ) -> Self {
        Self {
            session,
            rng,
            rx,
            frames,
            token,
            pgn_path: None,
            games_limit: None,
            games_finished: 0,
        }
    }

    pub fn with_pgn(mut self, path: Option<PathBuf>) -> Self {
        self.pgn_path = path;
        self
    }

    pub fn with_games_limit(mut self, limit: Option<u32>) -> Self {
        self.games_limit = limit;
        self
    }

    /// Main loop: plays until the game limit, a quit command or cancellation.
    /// Returns the number of games played to completion.
    pub fn run(mut self) -> Result<u32, RulesError> {
        self.publish(None, false);

        if self.limit_reached() {
            return Ok(0);
        }

        loop {
            match self.wait(self.session.delay()) {
                Wake::Stop => break,
                Wake::Reset => {
                    info!("Game {} abandoned", self.session.game_number());
                    self.start_next_game();
                    continue;
                }
                Wake::Elapsed => {}
            }

            let played = self.session.step(&mut self.rng)?;
            let game_over = self.session.game_over();
            let cue = played.as_ref().map(|mv| SoundCue::for_move(mv, game_over));

            if !game_over {
                self.publish(cue, false);
                continue;
            }

            self.games_finished += 1;
            let restarting = !self.limit_reached();
            self.publish(cue, restarting);
            self.record_game();

            if !restarting {
                break;
            }
            if let Wake::Stop = self.wait(RESTART_DELAY) {
                break;
            }
            self.start_next_game();
        }

        debug!("Driver stopped after {} finished games", self.games_finished);
        Ok(self.games_finished)
    }

    fn limit_reached(&self) -> bool {
        self.games_limit
            .map_or(false, |limit| self.games_finished >= limit)
    }

    fn start_next_game(&mut self) {
        self.session.new_game(&mut self.rng);
        self.publish(None, false);
    }

    fn publish(&self, cue: Option<SoundCue>, restarting: bool) {
        let _ = self
            .frames
            .send(Frame::capture(&self.session, cue, restarting));
    }

    /// Sleeps for `duration` unless a command arrives first. Speed changes are
    /// applied in place and the wait continues.
    fn wait(&mut self, duration: Duration) -> Wake {
        let deadline = Instant::now() + duration;

        loop {
            if self.token.is_cancelled() {
                return Wake::Stop;
            }

            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.rx.recv_timeout(remaining) {
                Ok(DriverCommand::CycleSpeed) => {
                    self.session.cycle_speed();
                    self.publish(None, self.session.game_over());
                }
                Ok(DriverCommand::Reset) => return Wake::Reset,
                Ok(DriverCommand::Quit) => return Wake::Stop,
                Err(RecvTimeoutError::Timeout) => {
                    return if self.token.is_cancelled() {
                        Wake::Stop
                    } else {
                        Wake::Elapsed
                    };
                }
                Err(RecvTimeoutError::Disconnected) => {
                    thread::sleep(remaining);
                    return if self.token.is_cancelled() {
                        Wake::Stop
                    } else {
                        Wake::Elapsed
                    };
                }
            }
        }
    }

    fn record_game(&self) {
        let rules = self.session.rules();
        if let Some(outcome) = rules.outcome() {
            info!(
                "Game {} finished: {} after {} plies in {:.1}s ({})",
                self.session.game_number(),
                outcome,
                rules.history().len(),
                self.session.elapsed().as_secs_f32(),
                self.session.opening()
            );
        }
        debug!("Final position: {}", rules.fen());

        if let Some(path) = &self.pgn_path {
            if let Err(e) = self.append_pgn(path) {
                warn!("Failed to write PGN to {}: {}", path.display(), e);
            }
        }
    }

    fn append_pgn(&self, path: &Path) -> io::Result<()> {
        let rules = self.session.rules();
        let headers = PgnHeaders {
            event: "Gambit".to_string(),
            site: "Terminal".to_string(),
            round: self.session.game_number(),
            white: self.session.personality(Color::White).to_string(),
            black: self.session.personality(Color::Black).to_string(),
        };
        let pgn = to_pgn(
            &headers,
            STANDARD_POSITION_FEN,
            rules.history(),
            rules.outcome(),
        );

        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        writeln!(file, "{}", pgn)
    }
}
