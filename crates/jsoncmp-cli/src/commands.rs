use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Utc;
use colored::{ColoredString, Colorize};
use jsoncmp_report::report_file_name;
use jsoncmp_sdk::{
    pair_directories, Comparison, DiffStatus, Line, Panes, Report, Side, Summary,
};
use serde_json::json;
use tracing::warn;

use crate::cli::*;
use crate::config::CliConfig;

struct RunContext {
    config: CliConfig,
    format: OutputFormat,
}

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("failed to resolve working directory")?;
    let mut config = CliConfig::load(cli.config.as_deref(), &cwd)?;
    if cli.no_color {
        config.color = false;
    }
    if let Some(depth) = cli.max_depth {
        config.max_depth = depth;
    }
    if !config.color {
        colored::control::set_override(false);
    }

    let ctx = RunContext {
        config,
        format: cli.format,
    };
    match cli.command {
        Command::Diff(args) => cmd_diff(&ctx, args),
        Command::Summary(args) => cmd_summary(&ctx, args),
        Command::Report(args) => cmd_report(&ctx, args),
        Command::Batch(args) => cmd_batch(&ctx, args),
        Command::Config => cmd_config(&ctx),
    }
}

fn compare(ctx: &RunContext, files: &PairArgs) -> anyhow::Result<Comparison> {
    Ok(Comparison::from_files(
        &files.old,
        &files.new,
        &ctx.config.diff_options(),
    )?)
}

fn cmd_diff(ctx: &RunContext, args: DiffArgs) -> anyhow::Result<()> {
    let comparison = compare(ctx, &args.files)?;
    let filter = match args.filter {
        Some(filter) => filter,
        None => ctx.config.filter()?,
    };
    let panes = comparison.panes().filtered(filter);

    if ctx.format == OutputFormat::Json {
        let out = match args.side {
            PaneSide::Old => serde_json::to_value(&panes.old)?,
            PaneSide::New => serde_json::to_value(&panes.new)?,
            PaneSide::Both => serde_json::to_value(&panes)?,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    if panes.old.is_empty() && panes.new.is_empty() {
        println!("No lines match filter {}.", filter.label().bold());
        return Ok(());
    }

    let width = args.width.unwrap_or(ctx.config.pane_width).max(8);
    match args.side {
        PaneSide::Old => print_pane(&panes, Side::Old),
        PaneSide::New => print_pane(&panes, Side::New),
        PaneSide::Both => {
            println!("{}", pane_header(&args.files.old, &args.files.new, width));
            for row in pane_rows(&panes, width) {
                println!("{row}");
            }
        }
    }
    Ok(())
}

fn print_pane(panes: &Panes, side: Side) {
    for (index, line) in panes.side(side).iter().enumerate() {
        for (i, text) in line.display.lines().enumerate() {
            let (number, glyph) = if i == 0 {
                (format!("{:>4}", index + 1), line.glyph())
            } else {
                (" ".repeat(4), ' ')
            };
            println!(
                "{} {} {}",
                number.dimmed(),
                paint(&glyph.to_string(), line.status),
                paint(text, line.status)
            );
        }
    }
}

/// Pane cells are `width` plus the line number, glyph and their spacing.
const CELL_PREFIX: usize = 7;

/// Column separator between the old and new panes.
const PANE_SEPARATOR: &str = " │ ";

/// File names over each pane, aligned with the pane columns below.
fn pane_header(old: &Path, new: &Path, width: usize) -> String {
    format!(
        "{}{}{}",
        pad(&old.display().to_string(), width + CELL_PREFIX).bold(),
        " ".repeat(PANE_SEPARATOR.chars().count()),
        new.display().to_string().bold()
    )
}

/// Lay both panes out row by row. A row is as tall as its taller line, so
/// the two sides stay aligned.
fn pane_rows(panes: &Panes, width: usize) -> Vec<String> {
    let mut out = Vec::new();
    for row in panes.rows() {
        let height = row
            .old
            .map_or(0, Line::height)
            .max(row.new.map_or(0, Line::height));
        for i in 0..height {
            let left = cell(row.old, row.index, i, width);
            let right = cell(row.new, row.index, i, width);
            out.push(format!("{left}{}{right}", PANE_SEPARATOR.dimmed()));
        }
    }
    out
}

fn cell(line: Option<&Line>, index: usize, sub: usize, width: usize) -> String {
    let Some(line) = line else {
        return " ".repeat(width + CELL_PREFIX);
    };
    let number = if sub == 0 {
        format!("{:>4}", index + 1)
    } else {
        " ".repeat(4)
    };
    let glyph = if sub == 0 { line.glyph() } else { ' ' };
    let text = line.display.lines().nth(sub).unwrap_or("");
    format!(
        "{} {} {}",
        number.dimmed(),
        paint(&glyph.to_string(), line.status),
        paint(&pad(&truncate(text, width), width), line.status)
    )
}

fn paint(text: &str, status: DiffStatus) -> ColoredString {
    match status {
        DiffStatus::Added => text.green(),
        DiffStatus::Removed => text.red(),
        DiffStatus::Modified => text.yellow(),
        DiffStatus::KeyChanged => text.cyan(),
        DiffStatus::EmptyValue => text.magenta(),
        DiffStatus::Unchanged => text.normal(),
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        text.to_string()
    } else {
        format!("{text}{}", " ".repeat(width - len))
    }
}

fn cmd_summary(ctx: &RunContext, args: PairArgs) -> anyhow::Result<()> {
    let summary = compare(ctx, &args)?.summary();
    if ctx.format == OutputFormat::Json {
        let out = json!({ "summary": summary, "total": summary.total() });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }
    for line in summary_table(&summary) {
        println!("{line}");
    }
    Ok(())
}

fn summary_table(summary: &Summary) -> Vec<String> {
    let mut out: Vec<String> = DiffStatus::ALL
        .iter()
        .map(|status| {
            format!(
                "  {} {:<16}{:>6}",
                paint(&status.glyph().to_string(), *status),
                status.label(),
                summary.get(*status)
            )
        })
        .collect();
    out.push(format!("    {}{:>6}", pad("Total", 16).bold(), summary.total()));
    out
}

fn cmd_report(ctx: &RunContext, args: ReportArgs) -> anyhow::Result<()> {
    let comparison = compare(ctx, &args.files)?;
    let now = Utc::now();
    let report = Report::build_at(
        comparison.diff(),
        display_name(&args.files.old),
        display_name(&args.files.new),
        now,
    );
    let path = match args.output {
        Some(path) => path,
        None => ctx.config.report_dir.join(report_file_name(now)),
    };
    write_report(&report, &path)?;

    if ctx.format == OutputFormat::Json {
        let out = json!({
            "path": path.display().to_string(),
            "totalEntries": report.metadata.total_entries,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!(
            "{} Wrote report to {} ({} entries)",
            "✓".green().bold(),
            path.display().to_string().bold(),
            report.metadata.total_entries
        );
    }
    Ok(())
}

fn write_report(report: &Report, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create `{}`", parent.display()))?;
    }
    std::fs::write(path, report.to_json_pretty()?)
        .with_context(|| format!("failed to write `{}`", path.display()))
}

/// The file name shown in reports, without its directory.
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Where a batch report for `relative` goes under `dir`.
fn batch_report_path(dir: &Path, relative: &Path) -> PathBuf {
    dir.join(relative).with_extension("report.json")
}

fn cmd_batch(ctx: &RunContext, args: BatchArgs) -> anyhow::Result<()> {
    let pairing = pair_directories(&args.old_dir, &args.new_dir)?;
    let options = ctx.config.diff_options();
    let mut results = Vec::new();
    let mut failures = 0;

    for pair in &pairing.pairs {
        let relative = pair.relative.display().to_string();
        match Comparison::from_files(&pair.old, &pair.new, &options) {
            Ok(comparison) => {
                let summary = comparison.summary();
                if let Some(dir) = &args.reports {
                    let report = comparison.report(display_name(&pair.old), display_name(&pair.new));
                    write_report(&report, &batch_report_path(dir, &pair.relative))?;
                }
                if ctx.format == OutputFormat::Text {
                    println!("{} {}", pad(&relative, 40).bold(), summary_counts(&summary));
                }
                results.push(json!({ "file": relative, "summary": summary }));
            }
            Err(err) => {
                failures += 1;
                warn!(file = %relative, error = %err, "comparison failed");
                if ctx.format == OutputFormat::Text {
                    println!("{} {}", pad(&relative, 40).bold(), err.to_string().red());
                }
                results.push(json!({ "file": relative, "error": err.to_string() }));
            }
        }
    }

    if ctx.format == OutputFormat::Json {
        let out = json!({
            "results": results,
            "onlyOld": pairing.only_old.iter().map(|p| p.display().to_string()).collect::<Vec<_>>(),
            "onlyNew": pairing.only_new.iter().map(|p| p.display().to_string()).collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        if pairing.pairs.is_empty() {
            println!("No JSON files in common.");
        }
        for path in &pairing.only_old {
            println!("  {} {}", "only in old:".red(), path.display());
        }
        for path in &pairing.only_new {
            println!("  {} {}", "only in new:".green(), path.display());
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} of {} file pair(s) failed to compare", pairing.pairs.len());
    }
    Ok(())
}

fn summary_counts(summary: &Summary) -> String {
    DiffStatus::ALL
        .iter()
        .filter(|status| status.is_change())
        .map(|status| {
            paint(&format!("{}{}", status.glyph(), summary.get(*status)), *status).to_string()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn cmd_config(ctx: &RunContext) -> anyhow::Result<()> {
    match ctx.format {
        OutputFormat::Text => print!("{}", ctx.config.to_toml()?),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&ctx.config)?),
    }
    Ok(())
}
