//! Interactive prompts.
//!
//! [`Console`] is the capability the bootstrap flow talks to. [`TerminalConsole`]
//! is the real thing: it reads answers line by line and writes prompts, warnings
//! and hints to any `BufRead`/`Write` pair (stdin/stdout in the binary).

use anyhow::{bail, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};

pub trait Console {
    /// Yes/no question. An empty answer takes `default`.
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool>;

    /// Free-form question. An empty answer takes `default`; with no default
    /// the question repeats until something non-empty is given.
    fn ask(&mut self, prompt: &str, default: Option<&str>) -> Result<String>;

    /// Pick one of `options`, by name or by index. An empty answer takes `default`.
    fn choice(&mut self, prompt: &str, options: &[&str], default: &str) -> Result<String>;

    fn warn(&mut self, message: &str);

    fn info(&mut self, message: &str);
}

/// Line-oriented [`Console`] over a reader and a writer.
pub struct TerminalConsole<R, W> {
    input: R,
    output: W,
    assume_yes: bool,
}

impl TerminalConsole<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            assume_yes: false,
        }
    }

    /// Answer every prompt with its default without reading input.
    pub fn assume_yes(mut self, yes: bool) -> Self {
        self.assume_yes = yes;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `prompt` and read one trimmed line. `None` on end of input.
    fn read_answer(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }

        Ok(Some(line.trim().to_string()))
    }

    /// Write a message line; a broken output falls back to stderr.
    fn message(&mut self, line: &str) {
        if writeln!(self.output, "{line}").is_err() {
            eprintln!("{line}");
        }
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool> {
        let hint = if default { "[Y/n]" } else { "[y/N]" };
        if self.assume_yes {
            writeln!(self.output, "{prompt} {hint}: {}", if default { "y" } else { "n" })?;
            return Ok(default);
        }

        loop {
            let Some(answer) = self.read_answer(&format!("{prompt} {hint}: "))? else {
                return Ok(default);
            };

            match answer.to_lowercase().as_str() {
                "" => return Ok(default),
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => writeln!(self.output, "Please answer y or n.")?,
            }
        }
    }

    fn ask(&mut self, prompt: &str, default: Option<&str>) -> Result<String> {
        let full_prompt = match default {
            Some(value) => format!("{prompt} [{value}]: "),
            None => format!("{prompt}: "),
        };

        if self.assume_yes {
            let Some(value) = default else {
                bail!("'{}' has no default and needs an answer", prompt);
            };
            writeln!(self.output, "{full_prompt}{value}")?;
            return Ok(value.to_string());
        }

        loop {
            match self.read_answer(&full_prompt)? {
                Some(answer) if !answer.is_empty() => return Ok(answer),
                Some(_) => {
                    if let Some(value) = default {
                        return Ok(value.to_string());
                    }
                }
                None => match default {
                    Some(value) => return Ok(value.to_string()),
                    None => bail!("No answer given for '{}'", prompt),
                },
            }
        }
    }

    fn choice(&mut self, prompt: &str, options: &[&str], default: &str) -> Result<String> {
        writeln!(self.output, "{prompt}")?;
        for (index, option) in options.iter().enumerate() {
            writeln!(self.output, "  [{index}] {option}")?;
        }

        let select_prompt = format!("Choose [{default}]: ");
        if self.assume_yes {
            writeln!(self.output, "{select_prompt}{default}")?;
            return Ok(default.to_string());
        }

        loop {
            let Some(answer) = self.read_answer(&select_prompt)? else {
                return Ok(default.to_string());
            };
            if answer.is_empty() {
                return Ok(default.to_string());
            }

            if let Ok(index) = answer.parse::<usize>() {
                if let Some(option) = options.get(index) {
                    return Ok(option.to_string());
                }
            }
            if let Some(option) = options.iter().find(|o| o.eq_ignore_ascii_case(&answer)) {
                return Ok(option.to_string());
            }

            writeln!(self.output, "'{}' is not one of: {}", answer, options.join(", "))?;
        }
    }

    fn warn(&mut self, message: &str) {
        let line = format!("⚠️  {message}").yellow().to_string();
        self.message(&line);
    }

    fn info(&mut self, message: &str) {
        let line = format!("ℹ️  {message}").cyan().to_string();
        self.message(&line);
    }
}
