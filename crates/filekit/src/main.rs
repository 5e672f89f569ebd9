//! Filekit - render blocks and tables, append log lines, inspect files.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use filekit::filekit_render::{
    render_block, render_table, row, rows_from_json, Align, BlockStyleOverride, CellValue,
    TableStyleOverride,
};
use filekit::handler::{self, FileOptions};
use filekit::{load_style, FileClass};

/// Render ASCII blocks and tables, append log lines, and inspect files.
#[derive(Parser)]
#[command(name = "filekit")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Frame text in a block
    Block {
        /// Input file; reads stdin when omitted
        file: Option<PathBuf>,

        /// Block preset: default, doc, or modern
        #[arg(short, long, default_value = "default")]
        style: String,

        /// YAML or JSON file with style overrides
        #[arg(long)]
        style_file: Option<PathBuf>,

        /// Total width including borders
        #[arg(long)]
        width: Option<usize>,

        #[arg(long)]
        padh: Option<usize>,

        #[arg(long)]
        padv: Option<usize>,

        /// left, right, center, or auto
        #[arg(long)]
        align: Option<Align>,

        /// Fail instead of widening when --width is too small
        #[arg(long)]
        strict: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Render a JSON array of rows as a table
    Table {
        /// JSON input file; reads stdin when omitted
        file: Option<PathBuf>,

        /// Table preset: default, modern, or lines
        #[arg(short, long, default_value = "default")]
        style: String,

        /// YAML or JSON file with style overrides
        #[arg(long)]
        style_file: Option<PathBuf>,

        /// Leave out the row of column labels
        #[arg(long)]
        no_collabel: bool,

        /// Leave out the column of row indices
        #[arg(long)]
        no_rowlabel: bool,

        #[arg(long)]
        padv: Option<usize>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Append a line to a log file
    Log {
        file: PathBuf,

        message: String,

        /// Skip the timestamp prefix
        #[arg(long)]
        no_date: bool,
    },

    /// Show information about a file
    Info {
        file: PathBuf,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct OutputArgs {
    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Append to the output file instead of replacing it
    #[arg(long, requires = "output")]
    append: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("FILEKIT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false),
        )
        .init();
}

fn read_input(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
        }
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("reading stdin")?;
            Ok(text)
        }
    }
}

fn write_output(text: &str, output: &OutputArgs) -> anyhow::Result<()> {
    let Some(path) = &output.output else {
        io::stdout().write_all(text.as_bytes())?;
        return Ok(());
    };

    let options = FileOptions::default().file_type(FileClass::Ascii);
    let handle = handler::create_or_open(path, "", &options)?;
    let file = handle.file();
    if output.append {
        file.append(text)?;
    } else {
        file.put(text)?;
    }
    debug!(path = %path.display(), append = output.append, "output written");
    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Block {
            file,
            style,
            style_file,
            width,
            padh,
            padv,
            align,
            strict,
            output,
        } => {
            let mut custom: BlockStyleOverride = match &style_file {
                Some(path) => load_style(path)?,
                None => BlockStyleOverride::default(),
            };
            custom.width = width.or(custom.width);
            custom.padh = padh.or(custom.padh);
            custom.padv = padv.or(custom.padv);
            custom.align = align.or(custom.align);

            let text = read_input(file.as_deref())?;
            let text = text.strip_suffix('\n').unwrap_or(&text);
            let block = render_block(text, style, Some(&custom), !strict)?;
            write_output(&block, &output)
        }

        Command::Table {
            file,
            style,
            style_file,
            no_collabel,
            no_rowlabel,
            padv,
            output,
        } => {
            let mut custom: TableStyleOverride = match &style_file {
                Some(path) => load_style(path)?,
                None => TableStyleOverride::default(),
            };
            if no_collabel {
                custom.collabel = Some(false);
            }
            if no_rowlabel {
                custom.rowlabel = Some(false);
            }
            custom.padv = padv.or(custom.padv);

            let text = read_input(file.as_deref())?;
            let json: serde_json::Value = serde_json::from_str(&text).context("parsing JSON rows")?;
            let rows = rows_from_json(&json)?;
            let table = render_table(&rows, style, Some(&custom))?;
            write_output(&table, &output)
        }

        Command::Log {
            file,
            message,
            no_date,
        } => {
            let options = FileOptions::default().file_type(FileClass::Ascii);
            let Some(log) = handler::create_or_open(&file, "", &options)?.into_ascii() else {
                bail!("{} is not a text file", file.display());
            };
            log.log(&message, !no_date)?;
            Ok(())
        }

        Command::Info { file, json } => {
            let info = handler::info(&file)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&info)?);
                return Ok(());
            }

            let fields = [
                ("path", info.path.display().to_string()),
                ("dirname", info.dirname.display().to_string()),
                ("basename", info.basename.clone()),
                ("filename", info.filename.clone()),
                ("extension", info.extension.clone().unwrap_or_default()),
                ("size", info.size.to_string()),
                ("mimetype", info.mimetype.clone()),
                ("class", info.class.to_string()),
            ];
            let rows: Vec<_> = fields
                .into_iter()
                .map(|(name, value)| row([("field", CellValue::from(name)), ("value", value.into())]))
                .collect();
            let custom = TableStyleOverride::new().collabel(false).rowlabel(false);
            print!("{}", render_table(&rows, "modern", Some(&custom))?);
            Ok(())
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    run(Cli::parse())
}
