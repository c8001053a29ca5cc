//! Configuration for the huffman-text application.
//!
//! Handles parsing command-line arguments and filling in defaults.
//!
//! # Philosophy
//!
//! The tool should work with ZERO arguments: it then analyzes the built-in
//! sample texts. Generated inputs print their seed (with `--print-config`)
//! so runs are reproducible.

use crate::report::ReportOptions;
use std::path::PathBuf;

/// Where the text(s) to analyze come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// The built-in sample texts
    Samples,

    /// A literal text from the command line
    Text(String),

    /// The UTF-8 contents of a file
    File(PathBuf),

    /// A generated sample of `len` symbols
    Generated { len: usize },
}

/// Complete configuration for a run.
#[derive(Debug, Clone)]
pub struct Config {
    // === Input ===
    /// What to analyze
    pub input: InputSource,

    /// Seed for generated input
    pub seed: u64,

    /// Report title for single-input runs (None = derived from the input)
    pub title: Option<String>,

    // === Output ===
    /// Which report sections to print
    pub report: ReportOptions,

    /// Whether to print the resolved configuration
    pub print_config: bool,
}

impl Config {
    /// Parse configuration from command-line arguments.
    ///
    /// If `--seed` is not provided, a time-based seed is used.
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut input: Option<InputSource> = None;
        let mut seed: Option<u64> = None;
        let mut title: Option<String> = None;
        let mut report = ReportOptions::default();
        let mut print_config = false;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--text" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--text requires a value".to_string());
                    }
                    set_input(&mut input, InputSource::Text(args[i].clone()))?;
                }
                "--in" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--in requires a path".to_string());
                    }
                    set_input(&mut input, InputSource::File(PathBuf::from(&args[i])))?;
                }
                "--generate" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--generate requires a number".to_string());
                    }
                    let len = args[i].parse().map_err(|_| "invalid generate length")?;
                    set_input(&mut input, InputSource::Generated { len })?;
                }
                "--seed" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--seed requires a number".to_string());
                    }
                    seed = Some(args[i].parse().map_err(|_| "invalid seed")?);
                }
                "--title" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--title requires a value".to_string());
                    }
                    title = Some(args[i].clone());
                }
                "--no-tree" => {
                    report.show_tree = false;
                }
                "--no-encoded" => {
                    report.show_encoded = false;
                }
                "--no-stats" => {
                    report.show_stats = false;
                }
                "--print-config" => {
                    print_config = true;
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                _ => {
                    return Err(format!("unknown argument: {}", args[i]));
                }
            }
            i += 1;
        }

        // Determine seed (explicit or time-based)
        let seed = seed.unwrap_or_else(|| {
            use std::time::{SystemTime, UNIX_EPOCH};
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });

        Ok(Config {
            input: input.unwrap_or(InputSource::Samples),
            seed,
            title,
            report,
            print_config,
        })
    }

    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        println!("=== Configuration ===");
        match &self.input {
            InputSource::Samples => println!("Input: built-in sample texts"),
            InputSource::Text(text) => {
                println!("Input: literal text ({} symbols)", text.chars().count())
            }
            InputSource::File(path) => println!("Input: file {}", path.display()),
            InputSource::Generated { len } => {
                println!("Input: generated sample ({} symbols)", len);
                println!("Seed: {}", self.seed);
            }
        }
        if let Some(title) = &self.title {
            println!("Title: {}", title);
        }
        println!();
        println!("=== Report ===");
        println!("Encoded bits: {}", on_off(self.report.show_encoded));
        println!("Statistics:   {}", on_off(self.report.show_stats));
        println!("Tree:         {}", on_off(self.report.show_tree));
        println!();
    }
}

fn set_input(slot: &mut Option<InputSource>, source: InputSource) -> Result<(), String> {
    if slot.is_some() {
        return Err("only one of --text, --in, --generate may be given".to_string());
    }
    *slot = Some(source);
    Ok(())
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}

fn print_help() {
    println!("huffman-text: Huffman code analysis for text");
    println!();
    println!("USAGE:");
    println!("    huffman-text [OPTIONS]");
    println!();
    println!("INPUT (at most one; default: built-in sample texts):");
    println!("    --text <TEXT>           Analyze a literal text");
    println!("    --in <PATH>             Analyze the contents of a UTF-8 file");
    println!("    --generate <N>          Analyze a generated sample of N symbols");
    println!("    --seed <N>              Seed for --generate (default: time-based)");
    println!();
    println!("REPORT:");
    println!("    --title <TITLE>         Report title");
    println!("    --no-encoded            Don't print the encoded bit string");
    println!("    --no-stats              Don't print compression statistics");
    println!("    --no-tree               Don't print the Huffman tree");
    println!("    --print-config          Print resolved configuration");
    println!("    --help, -h              Print this help");
    println!();
    println!("EXAMPLES:");
    println!("    huffman-text                                   # Analyze the sample texts");
    println!("    huffman-text --text \"abracadabra\"              # Analyze a literal text");
    println!("    huffman-text --generate 500 --seed 42 --no-tree # Deterministic generated sample");
    println!();
}
