//! Server entry display utilities.

use mcpdir_core::ServerEntry;

use super::tables::{print_separator, truncate_string};

/// Star rating with the numeric value, e.g. `★★★★☆ 4.5`.
///
/// Out-of-range ratings are clamped before display.
pub fn format_rating(entry: &ServerEntry) -> String {
    let rating = entry.rating_clamped();
    // rating is within [0, 5]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let full = rating.floor() as usize;
    format!("{}{} {rating:.1}", "★".repeat(full), "☆".repeat(5 - full))
}

/// Badges shown next to an entry's name.
pub fn badges(entry: &ServerEntry) -> Vec<&'static str> {
    let mut badges = Vec::new();
    if entry.is_sponsored {
        badges.push("Sponsored");
    }
    if entry.is_featured {
        badges.push("Featured");
    }
    badges
}

/// One table row: name, category, pricing, rating, badges and id.
///
/// The id is printed in full so it can be passed to `show` or `open`.
pub fn server_row(entry: &ServerEntry) -> String {
    format!(
        "{:<26} {:<26} {:<11} {:<12} {:<19} {}",
        truncate_string(&entry.name, 26),
        truncate_string(entry.category.as_str(), 26),
        entry.pricing_model,
        format_rating(entry),
        badges(entry).join(", "),
        entry.id
    )
}

/// Print a table of entries in the order given.
pub fn print_server_table(entries: &[ServerEntry]) {
    println!(
        "{:<26} {:<26} {:<11} {:<12} {:<19} ID",
        "Name", "Category", "Pricing", "Rating", "Tags"
    );
    print_separator(135);
    for entry in entries {
        println!("{}", server_row(entry));
    }
}

/// The detail page, line by line.
pub fn detail_lines(entry: &ServerEntry) -> Vec<String> {
    let mut lines = Vec::new();

    let badges = badges(entry);
    if badges.is_empty() {
        lines.push(entry.name.clone());
    } else {
        lines.push(format!("{} [{}]", entry.name, badges.join("] [")));
    }
    lines.push(entry.description.clone());
    lines.push(String::new());
    lines.push(format!("  Category: {}", entry.category));
    lines.push(format!(
        "  Rating:   {} ({} reviews)",
        format_rating(entry),
        entry.total_reviews
    ));
    lines.push(format!("  Pricing:  {}", entry.pricing_model));
    if !entry.pricing_details.is_empty() {
        lines.push(format!("            {}", entry.pricing_details));
    }

    if !entry.detailed_description.is_empty() {
        lines.push(String::new());
        lines.push("About".to_string());
        lines.push(format!("  {}", entry.detailed_description));
    }

    if !entry.features.is_empty() {
        lines.push(String::new());
        lines.push("Key Features".to_string());
        lines.extend(entry.features.iter().map(|f| format!("  - {f}")));
    }

    lines.push(String::new());
    lines.push(format!("  Get Started:      {}", entry.affiliate_url));
    lines.push(format!("  Official Website: {}", entry.official_url));
    lines
}
