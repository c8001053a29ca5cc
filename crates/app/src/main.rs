//! huffman-text: analyze the Huffman code of a text and print a report.

mod config;
mod input_gen;
mod report;

use config::{Config, InputSource};
use huffman_text_core::{HuffmanRun, Result};
use std::error::Error;

/// Texts analyzed when no input is given.
const SAMPLE_TEXTS: &[(&str, &str)] = &[
    (
        "sample text 1",
        "Data compression is fundamental in the digital world. Reducing the size of \
         information makes storage cheaper, speeds up transmission and improves the \
         efficiency of whole systems. One of the best known algorithms for the task is \
         Huffman coding, which assigns shorter codes to the most frequent symbols.",
    ),
    (
        "sample text 2",
        "«Ñandú» y «pingüino» no son lo mismo. ¿Verdad? Él dijo: ¡qué árbol tan \
         extraño! Each accented letter, ñ, é, ü or €, counts as a single symbol.",
    ),
];

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            eprintln!("run with --help for usage");
            std::process::exit(2);
        }
    };

    if config.print_config {
        config.print();
    }

    if let Err(e) = run(&config) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(config: &Config) -> std::result::Result<(), Box<dyn Error>> {
    for (title, text) in load_inputs(config)? {
        let analysis = HuffmanRun::from_text(&text)?;
        print!("{}", report::render_report(&title, &analysis, &config.report)?);
    }
    Ok(())
}

/// Resolve the configured input into `(title, text)` pairs.
fn load_inputs(config: &Config) -> Result<Vec<(String, String)>> {
    let inputs: Vec<(String, String)> = match &config.input {
        InputSource::Samples => SAMPLE_TEXTS
            .iter()
            .map(|(title, text)| (title.to_string(), text.to_string()))
            .collect(),
        InputSource::Text(text) => vec![(default_title(config, "text analysis"), text.clone())],
        InputSource::File(path) => {
            let text = std::fs::read_to_string(path)?;
            let fallback = format!("analysis of {}", path.display());
            vec![(default_title(config, &fallback), text)]
        }
        InputSource::Generated { len } => {
            let text = input_gen::generate_sample_text(config.seed, *len);
            let fallback = format!("generated sample (seed {})", config.seed);
            vec![(default_title(config, &fallback), text)]
        }
    };
    Ok(inputs)
}

fn default_title(config: &Config, fallback: &str) -> String {
    config
        .title
        .clone()
        .unwrap_or_else(|| fallback.to_string())
}
