use anyhow::Result;
use navsearch::{ItemSummary, SellerSummary};
use serde::Serialize;

use crate::workflow::{ScrollReport, SearchReport};

/// Result of one subcommand.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub(crate) enum Report {
	Search(SearchReport),
	Scroll(ScrollReport),
}

/// Print a plain-text representation of the report.
pub(crate) fn print_plain(report: &Report) {
	print!("{}", format_plain(report));
}

pub(crate) fn format_plain(report: &Report) -> String {
	match report {
		Report::Search(report) => format_search(report),
		Report::Scroll(report) => format_scroll(report),
	}
}

fn format_search(report: &SearchReport) -> String {
	let mut lines = Vec::new();
	let Some(results) = &report.results else {
		lines.push(format!(
			"Query too short, nothing searched (query: '{}')",
			report.query.text
		));
		return finish(lines);
	};

	lines.push(format!(
		"Results for '{}' in {} (generation {}, {} attempt{})",
		report.query.text,
		report.query.scope,
		results.generation,
		report.attempts,
		if report.attempts == 1 { "" } else { "s" }
	));
	if let Some(items) = &results.items {
		lines.push(format!("Items ({}):", items.len()));
		lines.extend(items.iter().map(item_line));
		if items.is_empty() {
			lines.push("  (none)".to_string());
		}
	}
	if let Some(sellers) = &results.sellers {
		lines.push(format!("Sellers ({}):", sellers.len()));
		lines.extend(sellers.iter().map(seller_line));
		if sellers.is_empty() {
			lines.push("  (none)".to_string());
		}
	}
	if let Some(view_all) = &report.view_all {
		lines.push(format!("View all: {}", view_all.href()));
	}
	finish(lines)
}

fn item_line(item: &ItemSummary) -> String {
	let name = item.name.as_deref().unwrap_or("(unnamed)");
	match item.price {
		Some(price) => format!("  {name}  {price:.2}  /items/{}", item.id),
		None => format!("  {name}  /items/{}", item.id),
	}
}

fn seller_line(seller: &SellerSummary) -> String {
	let name = seller.name.as_deref().unwrap_or("(unnamed)");
	format!("  {name}  /sellers/{}", seller.id)
}

fn format_scroll(report: &ScrollReport) -> String {
	let mut lines: Vec<String> = report
		.frames
		.iter()
		.map(|frame| {
			let marker = if frame.changed { " *" } else { "" };
			format!("{:>8.1}  {:?}{marker}", frame.offset, frame.mode)
		})
		.collect();
	lines.push(format!("Final mode: {:?}", report.final_mode));
	finish(lines)
}

fn finish(lines: Vec<String>) -> String {
	let mut out = lines.join("\n");
	out.push('\n');
	out
}

/// Format the report as a JSON string.
pub(crate) fn format_report_json(report: &Report) -> Result<String> {
	Ok(serde_json::to_string_pretty(report)?)
}

/// Print the JSON representation of the report.
pub(crate) fn print_json(report: &Report) -> Result<()> {
	println!("{}", format_report_json(report)?);
	Ok(())
}
