use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use is_terminal::IsTerminal;
use tabulon::{Alignment, ExportFormat, Exporter, Table, Theme};

/// Render delimited or JSON input as an aligned text table.
///
/// tbl reads tabular data from stdin or files and prints it as a bordered,
/// aligned table. Input is delimiter-separated lines by default, or a JSON
/// array (of objects, arrays, or scalars) with --json.
#[derive(Parser, Debug)]
#[command(name = "tbl")]
#[command(version, about, long_about = None)]
struct Args {
    /// Input file(s). If not specified, reads from stdin.
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Output file. If not specified, writes to stdout.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Field delimiter for line-based input.
    #[arg(short, long, default_value = "\t")]
    delimiter: String,

    /// Treat the first input line as data instead of a header.
    #[arg(long)]
    no_header: bool,

    /// Border theme.
    #[arg(long, value_enum, default_value = "grid")]
    theme: ThemeArg,

    /// Column alignment as INDEX=left|center|right. May be repeated.
    #[arg(long, value_name = "SPEC")]
    align: Vec<String>,

    /// Fixed column width as INDEX=CHARS. May be repeated. Widths smaller
    /// than the content truncate it.
    #[arg(long, value_name = "SPEC")]
    width: Vec<String>,

    /// Parse input as a JSON array instead of delimited lines.
    #[arg(long)]
    json: bool,

    /// Export as Markdown (forces the markdown theme).
    #[arg(short, long)]
    markdown: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ThemeArg {
    None,
    Grid,
    UnicodeSingle,
    UnicodeDouble,
    Markdown,
    Minimal,
    Dotted,
    Fancy,
    Rounded,
    Heavy,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::None => Theme::None,
            ThemeArg::Grid => Theme::Grid,
            ThemeArg::UnicodeSingle => Theme::UnicodeSingle,
            ThemeArg::UnicodeDouble => Theme::UnicodeDouble,
            ThemeArg::Markdown => Theme::Markdown,
            ThemeArg::Minimal => Theme::Minimal,
            ThemeArg::Dotted => Theme::Dotted,
            ThemeArg::Fancy => Theme::Fancy,
            ThemeArg::Rounded => Theme::Rounded,
            ThemeArg::Heavy => Theme::Heavy,
        }
    }
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("tbl: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    // Read input
    let input = if args.files.is_empty() {
        if io::stdin().is_terminal() {
            return Err("no input: pass a file or pipe data to stdin".into());
        }
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        let mut combined = String::new();
        for path in &args.files {
            let content = fs::read_to_string(path)
                .map_err(|e| format!("cannot read '{}': {}", path.display(), e))?;
            combined.push_str(&content);
        }
        combined
    };

    // Build the table
    let mut table = if args.json {
        let value: serde_json::Value = serde_json::from_str(&input)?;
        tabulon::table_from_value(&value)?
    } else {
        parse_delimited(&input, &args.delimiter, !args.no_header)
    };

    table.set_theme(args.theme.into());
    for spec in &args.align {
        let (column, alignment) = parse_align_spec(spec)?;
        table.set_column_alignment(column, alignment);
    }
    for spec in &args.width {
        let (column, width) = parse_width_spec(spec)?;
        table.set_column_width(column, Some(width));
    }

    // Render and write
    let format = if args.markdown {
        ExportFormat::Markdown
    } else {
        ExportFormat::Text
    };
    let exporter = Exporter::new(format);

    if let Some(path) = args.output {
        if !exporter.to_file(&table, &path) {
            return Err(format!("cannot write '{}'", path.display()).into());
        }
    } else {
        io::stdout().write_all(exporter.to_string(&table).as_bytes())?;
    }

    Ok(())
}

fn parse_delimited(input: &str, delimiter: &str, header: bool) -> Table {
    let mut table = Table::new();
    let mut lines = input.lines();

    if header {
        if let Some(first) = lines.next() {
            table.set_header(split_line(first, delimiter));
        }
    }
    for line in lines {
        table.add_row(split_line(line, delimiter));
    }
    table
}

fn split_line(line: &str, delimiter: &str) -> Vec<String> {
    if delimiter.is_empty() {
        return vec![line.to_string()];
    }
    line.split(delimiter).map(String::from).collect()
}

fn parse_align_spec(spec: &str) -> Result<(usize, Alignment), String> {
    let (index, name) = spec
        .split_once('=')
        .ok_or_else(|| format!("invalid align spec '{}': expected INDEX=ALIGNMENT", spec))?;
    let column: usize = index
        .parse()
        .map_err(|_| format!("invalid column index '{}'", index))?;
    let alignment = match name {
        "left" => Alignment::Left,
        "center" => Alignment::Center,
        "right" => Alignment::Right,
        other => return Err(format!("unknown alignment '{}'", other)),
    };
    Ok((column, alignment))
}

fn parse_width_spec(spec: &str) -> Result<(usize, usize), String> {
    let (index, width) = spec
        .split_once('=')
        .ok_or_else(|| format!("invalid width spec '{}': expected INDEX=CHARS", spec))?;
    let column: usize = index
        .parse()
        .map_err(|_| format!("invalid column index '{}'", index))?;
    let width: usize = width
        .parse()
        .map_err(|_| format!("invalid width '{}'", width))?;
    Ok((column, width))
}
