//! Session controller.
//!
//! A [`Session`] exclusively owns the nation state, the loaded content and
//! the random source. Every mutation goes through one of its command methods,
//! which run the core reducer, notify render hooks on success and log the
//! result. Rejections leave the state untouched and skip the hooks.

use rand::RngCore;
use tracing::{debug, info, warn};

use nation_content::ContentBundle;
use nation_core::{
    Command, CommandError, CommandOutcome, EventOracle, EventStage, GameEnv, GameError, NationEngine,
    NationSnapshot, NationState, Notice, PcgRng, RngOracle, Sector, TradeKind, start_game,
};

use crate::error::{Result, RuntimeError};
use crate::hooks::{HookRegistry, RenderContext, RenderHook};

/// Owns and drives one game.
pub struct Session {
    content: ContentBundle,
    state: NationState,
    rng: TracedRng,
    hooks: HookRegistry,
    seed: Option<u64>,
}

impl Session {
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    /// Read-only view of the current state.
    pub fn snapshot(&self) -> NationSnapshot {
        NationSnapshot::capture(&self.state, &self.content.env())
    }

    pub fn state(&self) -> &NationState {
        &self.state
    }

    pub fn content(&self) -> &ContentBundle {
        &self.content
    }

    /// Seed of the built-in generator, if the session created one.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn advance_day(&mut self) -> std::result::Result<CommandOutcome, CommandError> {
        self.execute(Command::advance_day())
    }

    pub fn invest(&mut self, sector: Sector) -> std::result::Result<CommandOutcome, CommandError> {
        self.execute(Command::invest(sector))
    }

    pub fn distribute_food(&mut self) -> std::result::Result<CommandOutcome, CommandError> {
        self.execute(Command::distribute_food())
    }

    pub fn trade(&mut self, kind: TradeKind) -> std::result::Result<CommandOutcome, CommandError> {
        self.execute(Command::trade(kind))
    }

    /// `index` is zero-based.
    pub fn resolve_event_choice(
        &mut self,
        index: usize,
    ) -> std::result::Result<CommandOutcome, CommandError> {
        self.execute(Command::resolve_choice(index))
    }

    /// Runs a command through the core reducer.
    pub fn execute(&mut self, command: Command) -> std::result::Result<CommandOutcome, CommandError> {
        let env = self.content.env();
        let result = NationEngine::new(&mut self.state).execute(env, &mut self.rng, &command);

        match result {
            Ok(outcome) => {
                debug!(
                    command = command.name(),
                    level = self.state.level,
                    day = self.state.day,
                    message = %outcome.message,
                    "command applied"
                );
                log_notices(&outcome.notices);
                self.publish(command.name(), &outcome);
                Ok(outcome)
            }
            Err(error) => {
                warn!(
                    command = command.name(),
                    code = error.error_code(),
                    severity = error.severity().as_str(),
                    %error,
                    "command rejected"
                );
                Err(error)
            }
        }
    }

    /// Replaces the state wholesale with a fresh game and queues its first
    /// event. Always accepted, including after game over.
    pub fn reset(&mut self) -> std::result::Result<CommandOutcome, CommandError> {
        let (state, queued) = start_game(&self.content.env(), &mut self.rng);
        self.state = state;

        let outcome = self.new_game_outcome(queued);
        info!("game reset");
        log_notices(&outcome.notices);
        self.publish("reset", &outcome);
        Ok(outcome)
    }

    fn new_game_outcome(&self, queued: Option<String>) -> CommandOutcome {
        CommandOutcome {
            snapshot: self.snapshot(),
            message: "A new game begins. Lead your nation to harmony!".to_owned(),
            notices: queued
                .map(|title| Notice::EventQueued { title })
                .into_iter()
                .collect(),
        }
    }

    /// Hands the outcome to every hook, then marks a queued event as shown.
    fn publish(&mut self, command: &'static str, outcome: &CommandOutcome) {
        self.hooks.render_all(&RenderContext { command, outcome });

        if let Some(event) = self.state.active_event.as_mut() {
            if event.stage == EventStage::Queued {
                event.mark_displayed();
            }
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("level", &self.state.level)
            .field("day", &self.state.day)
            .field("game_over", &self.state.game_over)
            .field("seed", &self.seed)
            .field("hooks", &self.hooks)
            .finish()
    }
}

/// Logs every raw draw so a session can be audited from its log file.
struct TracedRng(Box<dyn RngOracle>);

impl RngOracle for TracedRng {
    fn next_u32(&mut self) -> u32 {
        let value = self.0.next_u32();
        debug!(value, "random draw");
        value
    }
}

fn log_notices(notices: &[Notice]) {
    for notice in notices {
        match notice {
            Notice::StoryAdvanced { phase, .. } => debug!(phase, "story advanced"),
            Notice::EventQueued { title } => info!(%title, "event queued"),
            Notice::LevelCompleted(report) => info!(
                level = report.completed_level,
                reward = report.total_reward,
                harmony_bonus = report.harmony_bonus,
                "level completed"
            ),
            Notice::GameOver(report) => info!(
                cause = %report.cause,
                level = report.level,
                day = report.day,
                "game over"
            ),
        }
    }
}

/// Builder for [`Session`].
pub struct SessionBuilder {
    content: Option<ContentBundle>,
    state: Option<NationState>,
    rng: Option<Box<dyn RngOracle>>,
    seed: Option<u64>,
    hooks: HookRegistry,
}

impl SessionBuilder {
    fn new() -> Self {
        Self {
            content: None,
            state: None,
            rng: None,
            seed: None,
            hooks: HookRegistry::default(),
        }
    }

    /// Set required content (config, event catalog, story).
    pub fn content(mut self, content: ContentBundle) -> Self {
        self.content = Some(content);
        self
    }

    /// Start from a prepared state instead of a fresh game. No opening event
    /// is queued and nothing is published on build.
    pub fn initial_state(mut self, state: NationState) -> Self {
        self.state = Some(state);
        self
    }

    /// Seed the built-in PCG generator.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Use a custom random source. Takes precedence over [`Self::seed`].
    pub fn rng(mut self, rng: impl RngOracle + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    pub fn render_hook(mut self, hook: impl RenderHook + 'static) -> Self {
        self.hooks.register(Box::new(hook));
        self
    }

    /// Registers a closure as a render hook.
    pub fn on_render<F>(self, hook: F) -> Self
    where
        F: FnMut(&RenderContext<'_>) + Send + 'static,
    {
        self.render_hook(hook)
    }

    pub fn build(self) -> Result<Session> {
        let content = self.content.ok_or(RuntimeError::MissingContent)?;

        let (seed, rng) = match self.rng {
            Some(rng) => (None, rng),
            None => {
                let seed = self.seed.unwrap_or_else(|| rand::thread_rng().next_u64());
                (Some(seed), Box::new(PcgRng::seeded(seed)) as Box<dyn RngOracle>)
            }
        };
        let mut rng = TracedRng(rng);

        let (state, opening) = match self.state {
            Some(state) if state.game_over => return Err(RuntimeError::TerminalInitialState),
            Some(state) => (state, None),
            None => {
                let env: GameEnv<'_> = content.env();
                if env.events().candidates(1).is_empty() {
                    return Err(RuntimeError::NoEligibleEvents { level: 1 });
                }
                let (state, queued) = start_game(&env, &mut rng);
                if let Some(title) = &queued {
                    info!(%title, "opening event queued");
                }
                (state, Some(queued))
            }
        };

        info!(
            seed = ?seed,
            hooks = self.hooks.len(),
            level = state.level,
            "session ready"
        );

        let mut session = Session {
            content,
            state,
            rng,
            hooks: self.hooks,
            seed,
        };

        // A fresh game is shown once before the first command.
        if let Some(queued) = opening {
            let outcome = session.new_game_outcome(queued);
            session.publish("start", &outcome);
        }

        Ok(session)
    }
}
