//! Validated line-oriented prompts: ask, parse, re-ask on bad input.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};

/// Parses `y`/`yes`/`n`/`no` (any case).
pub fn parse_yes_no(raw: &str) -> Result<bool, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" | "true" => Ok(true),
        "n" | "no" | "false" => Ok(false),
        other => Err(format!("expected y/yes or n/no, got `{other}`")),
    }
}

/// Accepts finite, non-negative numbers; shared by prompts and flags.
pub fn non_negative(value: f64) -> Result<f64, &'static str> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err("must be a finite, non-negative number")
    }
}

/// Interactive prompter over any reader/writer pair.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writer used for prompts; reports go through it as well.
    pub fn writer(&mut self) -> &mut W {
        &mut self.output
    }

    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read from input")?;
        if read == 0 {
            bail!("input closed while waiting for: {}", prompt.trim());
        }
        Ok(line.trim().to_owned())
    }

    /// Non-negative finite number; empty input takes `default` when given.
    pub fn number(&mut self, prompt: &str, default: Option<f64>) -> Result<f64> {
        loop {
            let raw = self.ask(prompt)?;
            if raw.is_empty() {
                if let Some(d) = default {
                    return Ok(d);
                }
            }
            match raw.parse::<f64>().map(non_negative) {
                Ok(Ok(v)) => return Ok(v),
                Ok(Err(_)) => writeln!(self.output, "Please enter a finite, non-negative number.")?,
                Err(_) => writeln!(self.output, "Invalid number: '{raw}' - please try again.")?,
            }
        }
    }

    /// Integer restricted to `valid`; empty input takes `default` when given.
    pub fn choice(&mut self, prompt: &str, valid: &[usize], default: Option<usize>) -> Result<usize> {
        loop {
            let raw = self.ask(prompt)?;
            if raw.is_empty() {
                if let Some(d) = default {
                    return Ok(d);
                }
            }
            match raw.parse::<usize>() {
                Ok(v) if valid.contains(&v) => return Ok(v),
                Ok(_) => writeln!(self.output, "Please enter one of: {valid:?}")?,
                Err(_) => writeln!(self.output, "Invalid integer: '{raw}' - please try again.")?,
            }
        }
    }

    /// Yes/no answer; empty input takes `default`.
    pub fn yes_no(&mut self, prompt: &str, default: bool) -> Result<bool> {
        loop {
            let raw = self.ask(prompt)?;
            if raw.is_empty() {
                return Ok(default);
            }
            match parse_yes_no(&raw) {
                Ok(v) => return Ok(v),
                Err(_) => writeln!(self.output, "Please enter y/yes or n/no.")?,
            }
        }
    }

    /// Free text parsed with `FromStr`; empty input takes `default`.
    pub fn parsed<T>(&mut self, prompt: &str, default: &str) -> Result<T>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        loop {
            let raw = self.ask(prompt)?;
            let text = if raw.is_empty() { default } else { raw.as_str() };
            match text.parse::<T>() {
                Ok(v) => return Ok(v),
                Err(e) => writeln!(self.output, "{e} - please try again.")?,
            }
        }
    }
}
