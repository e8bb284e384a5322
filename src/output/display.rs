//! Display functions for command results

use super::formatters::{coverage_bar, format_rank, format_solution};
use crate::analysis::bottlenecks;
use crate::commands::{AnalysisResult, DepthSummary, SearchReport, first_solvable};
use colored::Colorize;

/// Print the result of a pangram search
///
/// At most `limit` solutions are listed when a limit is given.
pub fn print_search_report(report: &SearchReport, limit: Option<usize>) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Searching {} words, up to {} per pangram",
        report.word_count.to_string().bright_yellow().bold(),
        report.max_depth.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    if !report.missing.is_empty() {
        println!(
            "\n{}",
            format!("❌ No word contains: {}", report.missing).red().bold()
        );
        return;
    }

    if report.pangrams.is_empty() {
        println!(
            "\n{}",
            format!("❌ No pangram within {} words", report.max_depth)
                .red()
                .bold()
        );
    } else {
        let total = report.pangrams.len();
        let shown = limit.unwrap_or(total).min(total);
        let best_count = report
            .pangrams
            .shortest()
            .map_or(0, crate::search::Solution::letter_count);

        println!();
        for (i, solution) in report.pangrams.iter().take(shown).enumerate() {
            let line = format_solution(solution);
            let line = if solution.letter_count() == best_count {
                line.green().bold()
            } else {
                line.normal()
            };
            println!("  {} {line}", format_rank(i + 1, shown));
        }
        if shown < total {
            println!("  {}", format!("... and {} more", total - shown).bright_black());
        }

        println!(
            "\n{}",
            format!(
                "✅ {total} pangram{} found, shortest uses {best_count} letters",
                if total == 1 { "" } else { "s" }
            )
            .green()
            .bold()
        );
    }

    if report.timed_out {
        println!(
            "{}",
            "⚠ Search timed out; the list above may be incomplete".yellow()
        );
    }

    println!(
        "   {} nodes, {} pruned, {:.2}s",
        report.stats.nodes,
        report.stats.prunes,
        report.duration.as_secs_f64()
    );
}

/// Print the result of letter coverage analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "LETTER COVERAGE".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Across {} distinct words:", result.total_words);

    let max_count = result.coverage.last().map_or(0, |c| c.count);
    for entry in &result.coverage {
        let bar = coverage_bar(entry.count, max_count, 30);
        println!(
            "   {}  [{}] {:4}",
            entry.letter.to_string().bright_yellow().bold(),
            bar.green(),
            entry.count
        );
    }

    let rarest: Vec<String> = bottlenecks(&result.coverage, 3)
        .iter()
        .map(|c| c.letter.to_string())
        .collect();
    if !rarest.is_empty() {
        println!("\n🔍 Bottlenecks: {}", rarest.join(", ").bright_yellow());
    }

    if result.is_complete() {
        println!("\n{}", "✅ Every letter is covered".green().bold());
    } else {
        println!(
            "\n{}",
            format!("❌ Missing letters: {}", result.missing).red().bold()
        );
    }
}

/// Print a depth sweep table
pub fn print_sweep(summaries: &[DepthSummary]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "DEPTH SWEEP".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    for summary in summaries {
        let best = summary
            .best_letter_count
            .map_or_else(|| "-".to_string(), |count| count.to_string());
        let row = format!(
            "   depth {:2}: {:8} pangrams  best {:>4}  {:10} nodes  {:.2}s",
            summary.depth,
            summary.solutions,
            best,
            summary.nodes,
            summary.duration.as_secs_f64()
        );
        if summary.solutions > 0 {
            println!("{}", row.green());
        } else {
            println!("{}", row.bright_black());
        }
    }

    match first_solvable(summaries) {
        Some(first) => println!(
            "\n{}\n   {}",
            format!("✅ Solvable from depth {}", first.depth).green().bold(),
            first.best_words.join(", ")
        ),
        None => println!("\n{}", "❌ No pangram at any depth tried".red().bold()),
    }
}
