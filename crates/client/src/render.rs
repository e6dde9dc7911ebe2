//! Terminal rendering of snapshots and command outcomes.
use std::fmt::Write as _;

use nation_core::{NationSnapshot, Notice};
use nation_runtime::{RenderContext, RenderHook};

use crate::input;

/// Prints every accepted command's outcome to stdout.
pub struct TerminalRenderer {
    json: bool,
}

impl TerminalRenderer {
    pub fn new(json: bool) -> Self {
        Self { json }
    }
}

impl RenderHook for TerminalRenderer {
    fn name(&self) -> &'static str {
        "terminal"
    }

    fn render(&mut self, ctx: &RenderContext<'_>) {
        if self.json {
            match serde_json::to_string(ctx.outcome) {
                Ok(json) => println!("{json}"),
                Err(error) => tracing::warn!(%error, "failed to encode outcome"),
            }
            return;
        }

        println!("{}", ctx.message());
        for notice in ctx.notices() {
            if let Some(line) = notice_line(notice) {
                println!("{line}");
            }
        }
        println!("{}", panel(ctx.snapshot()));
    }
}

/// Prints a snapshot outside of a command, for `status`.
pub fn print_snapshot(snapshot: &NationSnapshot, json: bool) {
    if json {
        match serde_json::to_string(snapshot) {
            Ok(json) => println!("{json}"),
            Err(error) => tracing::warn!(%error, "failed to encode snapshot"),
        }
    } else {
        println!("{}", panel(snapshot));
    }
}

fn notice_line(notice: &Notice) -> Option<String> {
    match notice {
        Notice::StoryAdvanced { message, .. } => Some(format!("* {message}")),
        // The event itself is drawn in the panel.
        Notice::EventQueued { .. } => None,
        Notice::LevelCompleted(report) => Some(format!("* {}", report.summary())),
        Notice::GameOver(report) => Some(format!("*** GAME OVER *** {}", report.summary())),
    }
}

/// Multi-line text view of the nation.
pub fn panel(snapshot: &NationSnapshot) -> String {
    let mut out = String::new();
    let resources = &snapshot.resources;
    let metrics = &snapshot.metrics;

    // Writing to a String cannot fail.
    let _ = writeln!(
        out,
        "== Level {} | Day {} | {} ==",
        snapshot.level, snapshot.day, snapshot.status_line
    );
    let _ = writeln!(
        out,
        "Treasury {:.0} | Food {:.0}  Wealth {:.0}  Materials {:.0}  Technology {:.0}",
        snapshot.treasury,
        resources.food,
        resources.wealth,
        resources.materials,
        resources.technology
    );
    let _ = writeln!(
        out,
        "Harmony {:.1} | Agriculture {:.0}  Infrastructure {:.0}  Education {:.0}  Healthcare {:.0}  Diplomacy {:.0}",
        metrics.harmony,
        metrics.agriculture,
        metrics.infrastructure,
        metrics.education,
        metrics.healthcare,
        metrics.diplomacy
    );

    let groups = snapshot
        .groups
        .iter()
        .map(|(kind, group)| format!("{kind} {:.0} (x{:.1})", group.satisfaction, group.influence))
        .collect::<Vec<_>>()
        .join("  ");
    let _ = writeln!(out, "Groups: {groups}");

    let tasks = &snapshot.tasks;
    let _ = writeln!(
        out,
        "Tasks {}/{}: {}",
        tasks.completed,
        tasks.required,
        tasks.labels.join(", ")
    );
    if let Some(storyline) = &snapshot.storyline {
        let _ = writeln!(out, "Story: {storyline}");
    }

    if let Some(event) = &snapshot.active_event {
        let _ = writeln!(out, "[Event] {}: {}", event.title, event.description);
        for (number, choice) in (1..).zip(&event.choices) {
            let marker = if choice.available { "" } else { " (unavailable)" };
            let _ = writeln!(out, "  {number}. {}{marker}", choice.label);
        }
    }

    if snapshot.game_over {
        let _ = write!(out, "The game is over. Type `reset` to play again.");
    } else {
        let commands = snapshot
            .available_commands
            .iter()
            .map(input::describe)
            .collect::<Vec<_>>()
            .join(", ");
        let _ = write!(out, "Available: {commands}");
    }

    out
}
