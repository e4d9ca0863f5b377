//! Minimal CLI: convert a JSON sample into class/struct scaffolding.
use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use rayon::prelude::*;

use crate::convert::convert;
use crate::highlight;
use crate::lang::Language;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// generate class/struct scaffolding from a sample JSON payload
#[derive(Parser, Debug)]
pub struct CommandLineInterface {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// convert a JSON document into type declarations for one or more languages
    Convert(ConvertTarget),
    /// list the supported target languages
    Languages,
}

#[derive(Args, Debug)]
struct ConvertTarget {
    /// input file path, or '-' for stdin
    #[arg(short, long, conflicts_with = "json")]
    input: Option<PathBuf>,

    /// literal JSON text instead of a file
    #[arg(long)]
    json: Option<String>,

    /// target language(s); repeat or list to fan out in one run
    #[arg(short, long = "language", value_enum, num_args = 1.., required = true)]
    languages: Vec<Language>,

    /// output file (stdout if omitted); requires exactly one language
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// disable syntax coloring
    #[arg(long, default_value_t = false)]
    no_color: bool,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn run(&self) -> anyhow::Result<()> {
        match &self.cmd {
            Command::Languages => {
                for language in Language::ALL {
                    println!("{language}");
                }
                Ok(())
            }
            Command::Convert(target) => target.run(),
        }
    }
}

impl ConvertTarget {
    fn run(&self) -> anyhow::Result<()> {
        if self.no_color {
            colored::control::set_override(false);
        }
        let json = self.load_json()?;

        // Conversion calls are independent and share no mutable state, so a
        // multi-language request fans out in parallel. Results print in
        // request order.
        let results: Vec<_> = self
            .languages
            .par_iter()
            .map(|&language| (language, convert(&json, language)))
            .collect();

        if let Some(out) = self.out.as_ref() {
            if results.len() != 1 {
                bail!("--out requires exactly one --language");
            }
            let (language, result) = &results[0];
            let text = match result {
                Ok(text) => text,
                Err(error) => bail!("conversion to {language} failed: {error}"),
            };
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
            std::fs::write(out, text).with_context(|| format!("writing {}", out.display()))?;
            return Ok(());
        }

        let mut failures = 0usize;
        for (language, result) in &results {
            match result {
                Ok(text) => {
                    println!("{}", format!("{language} Classes:").blue().bold());
                    println!();
                    println!("{}", highlight::highlight(text, *language));
                    println!();
                }
                Err(error) => {
                    failures += 1;
                    eprintln!("{}", format!("{language}: {error}").red());
                }
            }
        }
        if failures > 0 {
            bail!("{failures} conversion(s) failed");
        }
        Ok(())
    }

    fn load_json(&self) -> anyhow::Result<String> {
        if let Some(json) = self.json.as_ref() {
            return Ok(json.clone());
        }
        match self.input.as_ref() {
            Some(path) if path.as_os_str() == "-" => {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("reading stdin")?;
                Ok(buf)
            }
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display())),
            None => bail!("no input: pass --input <path> (or '-') or --json <text>"),
        }
    }
}
