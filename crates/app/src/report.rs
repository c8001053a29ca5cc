//! Human-readable analysis report.
//!
//! Rendering is presentation only: symbols that would be invisible (space,
//! newline, tab) are shown by name, but the code table itself is untouched.

use huffman_text_core::{HuffmanRun, HuffmanTree, Node};
use std::fmt::{self, Write};

/// Which optional report sections to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    pub show_encoded: bool,
    pub show_stats: bool,
    pub show_tree: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            show_encoded: true,
            show_stats: true,
            show_tree: true,
        }
    }
}

/// Display form of a symbol.
pub fn display_symbol(symbol: char) -> String {
    match symbol {
        ' ' => "SPACE".to_string(),
        '\n' => "\\n".to_string(),
        '\t' => "\\t".to_string(),
        '\r' => "\\r".to_string(),
        other => other.to_string(),
    }
}

/// Render the full report for one run.
pub fn render_report(
    title: &str,
    run: &HuffmanRun,
    options: &ReportOptions,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write_report(&mut out, title, run, options)?;
    Ok(out)
}

fn write_report(
    out: &mut String,
    title: &str,
    run: &HuffmanRun,
    options: &ReportOptions,
) -> fmt::Result {
    writeln!(out)?;
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", "=".repeat(title.chars().count()))?;
    writeln!(out)?;
    writeln!(out, "original text: '{}'", run.text())?;

    writeln!(out)?;
    writeln!(out, "frequencies and codes:")?;
    let mut rows: Vec<_> = run.codes().iter().collect();
    rows.sort_by_key(|(symbol, code)| (code.len(), *symbol));
    if rows.is_empty() {
        writeln!(out, "(no symbols)")?;
    }
    for (symbol, code) in rows {
        writeln!(
            out,
            "'{}': frequency={}, code={}, length={}",
            display_symbol(symbol),
            run.frequencies().get(symbol),
            code,
            code.len()
        )?;
    }

    if options.show_encoded {
        writeln!(out)?;
        writeln!(out, "encoded text ({} bits):", run.encoded().len())?;
        writeln!(out, "{}", run.encoded())?;
    }

    if options.show_stats {
        let stats = run.stats();
        writeln!(out)?;
        writeln!(out, "compression statistics:")?;
        writeln!(
            out,
            "- original size: {} bits ({} symbols × 8 bits)",
            stats.original_bits,
            stats.symbol_count()
        )?;
        writeln!(out, "- compressed size: {} bits", stats.compressed_bits)?;
        writeln!(out, "- compression ratio: {:.2}:1", stats.ratio)?;
        writeln!(out, "- space saved: {:.2}%", stats.percent_saved)?;
        writeln!(
            out,
            "- average code length: {:.3} bits/symbol (entropy {:.3})",
            run.stats().bits_per_symbol(),
            run.frequencies().entropy()
        )?;
        writeln!(out, "- fingerprint: {:08x}", run.fingerprint())?;
    }

    if options.show_tree {
        writeln!(out)?;
        writeln!(out, "huffman tree:")?;
        match run.tree() {
            Some(tree) => out.push_str(&render_tree(tree)),
            None => writeln!(out, "(empty)")?,
        }
    }

    Ok(())
}

/// Render a tree as indented lines, left subtree before right.
///
/// Each level indents four spaces; each line names the edge ('0' or '1')
/// leading to it, except the root's.
pub fn render_tree(tree: &HuffmanTree) -> String {
    let mut out = String::new();

    for visit in tree.walk() {
        let indent = "    ".repeat(visit.depth);
        let label = visit
            .edge
            .map(|edge| format!("{}: ", edge.label()))
            .unwrap_or_default();

        let line = match visit.node {
            Node::Leaf { symbol, weight } => {
                format!("'{}' ({})", display_symbol(*symbol), weight)
            }
            Node::Internal { weight, .. } => format!("internal node ({})", weight),
        };

        out.push_str(&format!("{}├── {}{}\n", indent, label, line));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_tree() {
        let run = HuffmanRun::from_text("abcc").unwrap();
        let rendered = render_tree(run.tree().unwrap());

        assert_eq!(
            rendered,
            "├── internal node (4)\n\
             \x20   ├── 0: internal node (2)\n\
             \x20       ├── 0: 'a' (1)\n\
             \x20       ├── 1: 'b' (1)\n\
             \x20   ├── 1: 'c' (2)\n"
        );
    }

    #[test]
    fn test_render_single_symbol_tree() {
        let run = HuffmanRun::from_text("  ").unwrap();
        let rendered = render_tree(run.tree().unwrap());

        assert_eq!(rendered, "├── internal node (2)\n    ├── 0: 'SPACE' (2)\n");
    }

    #[test]
    fn test_report_sections() {
        let run = HuffmanRun::from_text("aaaa").unwrap();
        let report = render_report("demo", &run, &ReportOptions::default()).unwrap();

        assert!(report.contains("demo\n====\n"));
        assert!(report.contains("'a': frequency=4, code=0, length=1"));
        assert!(report.contains("encoded text (4 bits):\n0000\n"));
        assert!(report.contains("- original size: 32 bits (4 symbols × 8 bits)"));
        assert!(report.contains("- compression ratio: 8.00:1"));
        assert!(report.contains("- space saved: 87.50%"));
        assert!(report.contains("huffman tree:"));
    }

    #[test]
    fn test_rows_sorted_by_code_length() {
        let run = HuffmanRun::from_text("a bb").unwrap();
        let report = render_report("rows", &run, &ReportOptions::default()).unwrap();

        // b=2 gets the one-bit code and is listed first
        let b = report.find("'b': frequency=2").unwrap();
        let a = report.find("'a': frequency=1").unwrap();
        let space = report.find("'SPACE': frequency=1").unwrap();
        assert!(b < space && space < a);
    }

    #[test]
    fn test_report_empty_text() {
        let run = HuffmanRun::from_text("").unwrap();
        let report = render_report("nothing", &run, &ReportOptions::default()).unwrap();

        assert!(report.contains("(no symbols)"));
        assert!(report.contains("- compression ratio: inf:1"));
        assert!(report.contains("- space saved: 0.00%"));
        assert!(report.contains("huffman tree:\n(empty)\n"));
    }

    #[test]
    fn test_sections_can_be_hidden() {
        let run = HuffmanRun::from_text("abc").unwrap();
        let options = ReportOptions {
            show_encoded: false,
            show_stats: false,
            show_tree: false,
        };
        let report = render_report("quiet", &run, &options).unwrap();

        assert!(report.contains("frequencies and codes:"));
        assert!(!report.contains("encoded text"));
        assert!(!report.contains("compression statistics"));
        assert!(!report.contains("huffman tree"));
    }

    #[test]
    fn test_report_is_complete() {
        let run = HuffmanRun::from_text("abcc").unwrap();
        let report = render_report("full", &run, &ReportOptions::default()).unwrap();

        assert!(report.starts_with("\nfull\n====\n"));
        assert!(report.contains("- average code length: 1.500 bits/symbol"));
        assert!(report.contains(&format!("- fingerprint: {:08x}", run.fingerprint())));
        assert!(report.ends_with("\x20   ├── 1: 'c' (2)\n"));
    }

    #[test]
    fn test_display_symbol() {
        assert_eq!(display_symbol(' '), "SPACE");
        assert_eq!(display_symbol('\n'), "\\n");
        assert_eq!(display_symbol('ñ'), "ñ");
    }
}
