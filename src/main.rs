//! # chatstats CLI
//!
//! Command-line interface for the chatstats library.

use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use chatstats::ChatstatsError;
use chatstats::cli::Args;
use chatstats::config::{AnalysisConfig, Window};
use chatstats::core::aggregate::{SubjectTotals, build_report, winner_by};
use chatstats::core::table::EventTable;
use chatstats::core::{FilterConfig, apply_filters, write_report_json};
use chatstats::format::{TableFormat, write_table};
use chatstats::ingest::read_events;

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ChatstatsError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();

    let window: Window = args.window.into();

    // Print header
    println!("📊 chatstats v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:     {}", args.input);
    println!("💾 Report:    {}", args.output);
    println!("🪟 Window:    {}", window);
    println!("⏱️  Threshold: {} min", args.threshold);

    // Build filter configuration
    let mut filter_config = FilterConfig::new();

    if let Some(ref after) = args.after {
        filter_config = filter_config.with_date_from(after)?;
        println!("📅 After:     {}", after);
    }

    if let Some(ref before) = args.before {
        filter_config = filter_config.with_date_to(before)?;
        println!("📅 Before:    {}", before);
    }

    for subject in &args.subjects {
        filter_config = filter_config.with_subject(subject.clone());
        println!("👤 Subject:   {}", subject);
    }

    println!();

    // Step 1: Read normalized events
    println!("⏳ Reading events...");
    let read_start = Instant::now();
    let events = read_events(Path::new(&args.input))?;
    let original_count = events.len();
    println!(
        "   Found {} events ({:.2}s)",
        original_count,
        read_start.elapsed().as_secs_f64()
    );

    // Step 2: Filter (BEFORE analysis, so derived columns match the slice)
    let events = if filter_config.is_active() {
        println!("🔍 Filtering events...");
        let filtered = apply_filters(events, &filter_config);
        println!("   {} events after filtering", filtered.len());
        filtered
    } else {
        events
    };

    // Step 3: Derive columns
    println!("🧮 Deriving conversation structure...");
    let derive_start = Instant::now();
    let config = AnalysisConfig::new()
        .with_threshold_minutes(args.threshold)
        .with_window(window);
    let table = EventTable::build(events, &config)?;
    table.require_min_events(args.min_events)?;
    println!(
        "   {} conversations across {} events ({:.2}s)",
        table.conversation_count(),
        table.len(),
        derive_start.elapsed().as_secs_f64()
    );

    // Step 4: Aggregate and write the report
    println!("📈 Aggregating...");
    let report = build_report(&table, window);
    write_report_json(&report, &args.output)?;

    // Step 5: Optionally write the derived table
    if let Some(ref table_path) = args.table {
        let format: TableFormat = match args.format {
            Some(f) => f.into(),
            None => TableFormat::from_path(table_path)?,
        };
        println!("💾 Writing {} table to {}...", format, table_path);
        write_table(&table, table_path, format)?;
    }

    println!();
    println!("✅ Done! Report saved to {}", args.output);

    // Summary
    println!();
    println!("📊 Summary:");
    println!("   Events:        {}", table.len());
    println!("   Participants:  {}", table.subjects().len());
    println!("   Conversations: {}", table.conversation_count());
    if let Some(ref busiest) = report.busiest_window {
        println!(
            "   Busiest {}: {} ({} messages)",
            window, busiest.start, busiest.total
        );
    }
    print_winners(&report.subject_totals);

    println!();
    println!(
        "⚡ Total time: {:.2}s",
        total_start.elapsed().as_secs_f64()
    );

    Ok(())
}

/// Prints the per-subject superlatives the report supports.
fn print_winners(totals: &[SubjectTotals]) {
    if totals.is_empty() {
        return;
    }

    println!();
    println!("🏆 Winners:");
    if let Some(winner) = winner_by(totals, |t| t.message_count as f64) {
        println!(
            "   Most messages:        {} ({})",
            winner.subject, winner.message_count
        );
    }
    if let Some(winner) = winner_by(totals, |t| t.mean_message_length) {
        println!(
            "   Longest messages:     {} ({:.1} words avg)",
            winner.subject, winner.mean_message_length
        );
    }
    if let Some(winner) = winner_by(totals, |t| t.mean_reply_time) {
        println!(
            "   Slowest to reply:     {} ({:.1} min avg)",
            winner.subject, winner.mean_reply_time
        );
    }
    if let Some(winner) = winner_by(totals, |t| t.conversations_started as f64) {
        println!(
            "   Conversation starter: {} ({})",
            winner.subject, winner.conversations_started
        );
    }
}
