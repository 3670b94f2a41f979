//! smiley - Turn emoticon tokens into image tags

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use smiley_core::{Config, EnabledFlag, Selection, Session, TextBuffer, TextSurface};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Smiley substitution for forum and blog posts
#[derive(Parser, Debug)]
#[command(name = "smiley")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Smiley set to use instead of the configured one
    #[arg(long, global = true, value_name = "NAME")]
    set: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replace smilies in FILE (or stdin) and print the result
    Render {
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Write the result back to FILE instead of printing it
        #[arg(long, requires = "file")]
        in_place: bool,

        /// Render the clipboard contents in place
        #[arg(long, conflicts_with = "file")]
        clipboard: bool,
    },
    /// Insert a smiley into FILE at a cursor position
    Insert {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Token to insert, e.g. :smile:
        #[arg(long)]
        token: String,

        /// Selection start (character offset)
        #[arg(long)]
        start: usize,

        /// Selection end (defaults to start)
        #[arg(long)]
        end: Option<usize>,
    },
    /// List the tokens and aliases of the active set
    List,
    /// List available smiley sets
    Sets,
    /// Enable smiley substitution
    Enable,
    /// Disable smiley substitution
    Disable,
    /// Flip the enabled flag
    Toggle,
    /// Show whether substitution is enabled
    Status,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    // Load configuration
    let config = Config::load().context("Failed to load configuration")?;
    let set_name = args.set.unwrap_or_else(|| config.smiley_set.clone());
    log::debug!("Using smiley set {}", set_name);

    let engine = config
        .build_engine_for(&set_name)
        .with_context(|| format!("Invalid smiley set: {}", set_name))?;
    let enabled = EnabledFlag::load();
    let mut session = Session::new(engine, enabled);

    match args.command {
        Command::Render {
            clipboard: true, ..
        } => render_clipboard(&session),
        Command::Render {
            file: Some(file),
            in_place: true,
            ..
        } => {
            let mut buffer = read_buffer(&file)?;
            session.submit(&mut buffer, |surface| write_surface(&file, surface))
        }
        Command::Render { file, .. } => {
            let text = match file {
                Some(path) => std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read file: {}", path.display()))?,
                None => {
                    let mut text = String::new();
                    std::io::stdin()
                        .read_to_string(&mut text)
                        .context("Failed to read stdin")?;
                    text
                }
            };
            let mut buffer = TextBuffer::new(&text);
            session.submit(&mut buffer, |surface| print!("{}", surface.text()));
            Ok(())
        }
        Command::Insert {
            file,
            token,
            start,
            end,
        } => {
            let mut buffer = read_buffer(&file)?;
            buffer.set_selection(Selection::new(start, end.unwrap_or(start)));

            match session.pick(&mut buffer, &token)? {
                Some(cursor) => {
                    write_surface(&file, &buffer)?;
                    println!("{}", cursor);
                }
                None => println!("Smilies are disabled"),
            }
            Ok(())
        }
        Command::List => {
            for smiley in session.entries() {
                println!("{:<16} {:<14} {}", smiley.token, smiley.name(), smiley.url);
            }
            for alias in session.engine().aliases().iter() {
                println!("{:<16} -> {}", alias.alias, alias.token);
            }
            Ok(())
        }
        Command::Sets => {
            for name in config.set_names() {
                let marker = if name == set_name { "*" } else { " " };
                println!("{} {}", marker, name);
            }
            Ok(())
        }
        Command::Enable => set_enabled(&mut session, true),
        Command::Disable => set_enabled(&mut session, false),
        Command::Toggle => {
            session.toggle().context("Failed to save enabled flag")?;
            print_status(&session);
            Ok(())
        }
        Command::Status => {
            print_status(&session);
            Ok(())
        }
    }
}

fn read_buffer(path: &Path) -> Result<TextBuffer> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    Ok(TextBuffer::new(&text))
}

fn write_surface(path: &Path, surface: &TextBuffer) -> Result<()> {
    std::fs::write(path, surface.text())
        .with_context(|| format!("Failed to write file: {}", path.display()))
}

fn set_enabled(session: &mut Session, enabled: bool) -> Result<()> {
    session
        .set_enabled(enabled)
        .context("Failed to save enabled flag")?;
    print_status(session);
    Ok(())
}

fn print_status(session: &Session) {
    if session.is_enabled() {
        println!("Smilies are enabled");
    } else {
        println!("Smilies are disabled");
    }
}

#[cfg(feature = "clipboard")]
fn render_clipboard(session: &Session) -> Result<()> {
    let mut surface = smiley_core::ClipboardSurface::open()?;
    session.submit(&mut surface, |surface| surface.commit())
}

#[cfg(not(feature = "clipboard"))]
fn render_clipboard(_session: &Session) -> Result<()> {
    anyhow::bail!("smiley was built without clipboard support")
}
