//! Shared prompt and terminal helpers for the phonebook shell
//!
//! Conventions:
//! - Prompts: lowercase with colon and space: `pattern: `
//! - Feedback: short sentences: `Deleted 2 contact(s).`

use anyhow::{anyhow, Result};
use crossterm::{
    cursor,
    terminal::{Clear, ClearType},
    ExecutableCommand,
};
use inquire::{ui::RenderConfig, Confirm, InquireError, Text};
use std::io::{self, IsTerminal, Write};

/// Clear the terminal screen and move cursor to top-left
pub fn clear_screen() -> Result<()> {
    let mut stdout = io::stdout();
    stdout.execute(Clear(ClearType::All))?;
    stdout.execute(cursor::MoveTo(0, 0))?;
    stdout.flush()?;
    Ok(())
}

pub fn stdin_is_terminal() -> bool {
    io::stdin().is_terminal()
}

/// Get a minimal render config for inquire prompts
pub fn minimal_render_config() -> RenderConfig<'static> {
    RenderConfig::default_colored()
        .with_prompt_prefix(inquire::ui::Styled::new(""))
        .with_answered_prompt_prefix(inquire::ui::Styled::new(""))
}

/// Prompt for text input. Returns `None` if the user cancels (Esc/Ctrl+C).
pub fn prompt_text(label: &str) -> Result<Option<String>> {
    let result = Text::new(label)
        .with_render_config(minimal_render_config())
        .prompt();

    match result {
        Ok(input) => Ok(Some(input.trim().to_string())),
        Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Prompt for a non-negative integer, re-asking until the input parses.
/// Empty input takes `default`.
pub fn prompt_u32(label: &str, default: u32) -> Result<Option<u32>> {
    let label = format!("{} [{}]: ", label, default);
    loop {
        let Some(input) = prompt_text(&label)? else {
            return Ok(None);
        };
        if input.is_empty() {
            return Ok(Some(default));
        }
        match parse_u32(&input) {
            Ok(n) => return Ok(Some(n)),
            Err(e) => eprintln!("{}", e),
        }
    }
}

pub fn parse_u32(input: &str) -> Result<u32> {
    input
        .trim()
        .parse::<u32>()
        .map_err(|_| anyhow!("Expected a non-negative whole number, got '{}'.", input.trim()))
}

/// Prompt for yes/no confirmation (default: no)
pub fn confirm(prompt: &str) -> Result<bool> {
    if !stdin_is_terminal() {
        return Err(anyhow!("Confirmation requires a terminal. Pass --yes to skip it."));
    }

    let result = Confirm::new(prompt)
        .with_render_config(minimal_render_config())
        .with_default(false)
        .prompt();

    match result {
        Ok(answer) => Ok(answer),
        Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => {
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}

/// Wait for user to press enter to continue
pub fn wait_for_continue() {
    println!();
    let _ = Text::new("[enter]")
        .with_render_config(minimal_render_config())
        .prompt_skippable();
}
