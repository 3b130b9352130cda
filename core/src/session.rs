use std::time::{Duration, Instant};

use chess::{Color, Piece};
use log::{debug, info};
use rand::Rng;
use rules::{MoveRecord, Outcome, RulesEngine, RulesError};
use selector::{select_move_with, Personality};

use crate::openings::{self, STARTING_POSITION};
use crate::speed::Speed;

#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    /// Pinned personalities; `None` draws a fresh one every game.
    pub white: Option<Personality>,
    pub black: Option<Personality>,
    pub speed: Speed,
    /// Replaces the speed's delay when set.
    pub delay_override: Option<Duration>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            white: None,
            black: None,
            speed: Speed::Normal,
            delay_override: None,
        }
    }
}

/// Everything one auto-played game needs, owned by whoever drives it.
pub struct Session<R: RulesEngine> {
    rules: R,
    config: SessionConfig,
    white: Personality,
    black: Personality,
    speed: Speed,
    game_number: u32,
    started: Instant,
    captured_by_white: Vec<Piece>,
    captured_by_black: Vec<Piece>,
    opening: &'static str,
}

impl<R: RulesEngine> Session<R> {
    pub fn new<G: Rng + ?Sized>(rules: R, config: SessionConfig, rng: &mut G) -> Self {
        let mut session = Self {
            rules,
            config,
            white: Personality::default(),
            black: Personality::default(),
            speed: config.speed,
            game_number: 0,
            started: Instant::now(),
            captured_by_white: Vec::new(),
            captured_by_black: Vec::new(),
            opening: STARTING_POSITION,
        };
        session.new_game(rng);
        session
    }

    /// Resets the board and binds a personality to each side.
    pub fn new_game<G: Rng + ?Sized>(&mut self, rng: &mut G) {
        self.rules.reset();
        self.white = self
            .config
            .white
            .unwrap_or_else(|| Personality::random(rng));
        self.black = self
            .config
            .black
            .unwrap_or_else(|| Personality::random(rng));
        self.game_number += 1;
        self.started = Instant::now();
        self.captured_by_white.clear();
        self.captured_by_black.clear();
        self.opening = STARTING_POSITION;

        info!(
            "Game {}: {} (white) vs {} (black)",
            self.game_number, self.white, self.black
        );
    }

    /// Plays one ply for the side to move. Returns `Ok(None)` once the game is over.
    pub fn step<G: Rng + ?Sized>(&mut self, rng: &mut G) -> Result<Option<MoveRecord>, RulesError> {
        if self.rules.game_over() {
            return Ok(None);
        }

        let side = self.rules.turn();
        let personality = self.personality(side);
        let moves = self.rules.moves();

        let chosen = match select_move_with(&moves, &personality, side, rng) {
            Some(mv) => mv.clone(),
            None => return Ok(None),
        };

        self.apply(&chosen).map(Some)
    }

    /// Applies a move and updates the cosmetic state that follows from it.
    pub fn apply(&mut self, mv: &MoveRecord) -> Result<MoveRecord, RulesError> {
        let applied = self.rules.play(mv)?;

        if let Some(captured) = applied.captured {
            match applied.color {
                Color::White => self.captured_by_white.push(captured),
                Color::Black => self.captured_by_black.push(captured),
            }
        }

        let played: Vec<&str> = self
            .rules
            .history()
            .iter()
            .map(MoveRecord::bare_san)
            .collect();
        if let Some(opening) = openings::identify(&played) {
            if opening.name != self.opening {
                debug!("Opening: {}", opening.name);
            }
            self.opening = opening.name;
        }

        Ok(applied)
    }

    #[inline]
    pub fn rules(&self) -> &R {
        &self.rules
    }

    #[inline]
    pub fn personality(&self, color: Color) -> Personality {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    #[inline]
    pub fn captured_by(&self, color: Color) -> &[Piece] {
        match color {
            Color::White => &self.captured_by_white,
            Color::Black => &self.captured_by_black,
        }
    }

    #[inline]
    pub fn opening(&self) -> &'static str {
        self.opening
    }

    #[inline]
    pub fn game_number(&self) -> u32 {
        self.game_number
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    #[inline]
    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn cycle_speed(&mut self) -> Speed {
        self.speed = self.speed.next();
        info!("Speed: {}", self.speed);
        self.speed
    }

    pub fn delay(&self) -> Duration {
        self.config
            .delay_override
            .unwrap_or_else(|| self.speed.delay())
    }

    #[inline]
    pub fn game_over(&self) -> bool {
        self.rules.game_over()
    }

    #[inline]
    pub fn outcome(&self) -> Option<Outcome> {
        self.rules.outcome()
    }
}
