//! HarmonyNation terminal client.
//!
//! Composition root: reads settings from the environment, installs file
//! logging, loads content, builds a [`Session`] with a terminal render hook
//! and runs a line-oriented REPL on stdin.
//!
//! ```bash
//! NATION_SEED=42 cargo run -p nation-client
//! NATION_JSON=1 NATION_CONFIG=./balance.toml cargo run -p nation-client
//! ```

mod config;
mod input;
mod logging;
mod render;

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use nation_content::{ConfigLoader, ContentBundle, ContentFactory};
use nation_runtime::Session;

use config::ClientConfig;
use input::Input;
use render::TerminalRenderer;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();
    let _guard = logging::setup_logging(config.session_id.as_deref())?;

    let content = load_content(config.content_path.as_deref())?;

    if !config.json {
        println!("Welcome to HarmonyNation. Type `help` for commands.");
    }

    // The render hook prints the opening game as the session is built.
    let mut builder = Session::builder()
        .content(content)
        .render_hook(TerminalRenderer::new(config.json));
    if let Some(seed) = config.seed {
        builder = builder.seed(seed);
    }
    let mut session = builder.build()?;

    tracing::info!(seed = ?session.seed(), json = config.json, "starting HarmonyNation");

    run_repl(&mut session, config.json)?;

    tracing::info!("client shutdown complete");
    Ok(())
}

/// Directory overrides go through the factory; a single file replaces only
/// the balance config.
fn load_content(path: Option<&Path>) -> Result<ContentBundle> {
    let content = match path {
        None => ContentFactory::embedded().load_all(),
        Some(dir) if dir.is_dir() => ContentFactory::new(dir).load_all(),
        Some(file) => {
            let embedded = ContentFactory::embedded();
            Ok(ContentBundle {
                config: ConfigLoader::load(file)?,
                events: embedded.load_events()?,
                story: embedded.load_story()?,
            })
        }
    };
    content.context("Failed to load game content")
}

fn run_repl(session: &mut Session, json: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        io::stdout().flush().context("Failed to flush stdout")?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("Failed to read from stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let input = match input::parse(&line) {
            Ok(input) => input,
            Err(error) => {
                println!("{error:#}");
                continue;
            }
        };

        match input {
            Input::Quit => break,
            Input::Help => println!("{}", input::HELP),
            Input::Status => render::print_snapshot(&session.snapshot(), json),
            // Accepted commands are printed by the render hook.
            Input::Reset => {
                session.reset()?;
            }
            Input::Command(command) => {
                if let Err(error) = session.execute(command) {
                    println!("{error}");
                }
            }
        }
    }

    Ok(())
}
