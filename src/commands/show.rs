//! Show command implementation

use console::Style;
use serde_yaml::Value;

use crate::cli::ShowArgs;
use pagematter::FrontMatterDocument;
use pagematter::document::schema::field_kind;
use pagematter::document::{FeedListing, load_document};
use pagematter::error::Result;

macro_rules! display_opt_field {
    ($label:expr, $value:expr) => {
        if let Some(ref v) = $value {
            println!("{} {}", Style::new().bold().apply_to($label), v);
        }
    };
}

pub fn run(args: ShowArgs) -> Result<()> {
    let document = load_document(&args.path)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(document.page())?);
        return Ok(());
    }

    display_document(&document);
    Ok(())
}

fn display_document(document: &FrontMatterDocument) {
    let page = document.page();

    println!();
    display_opt_field!("Permalink:", page.permalink);
    display_opt_field!("Layout:", page.layout);
    display_opt_field!("Title:", page.title);
    display_opt_field!("Subtitle:", page.subtitle);

    if let Some(profile) = &page.profile {
        println!("{}", Style::new().bold().apply_to("Profile:"));
        display_opt_field!("  align:", profile.align.map(|a| a.as_str()));
        display_opt_field!("  image:", profile.image);
        display_opt_field!("  circular:", profile.image_circular);
    }

    display_listing("Announcements:", page.announcements.as_ref());
    display_listing("Latest posts:", page.latest_posts.as_ref());
    display_opt_field!("Selected papers:", page.selected_papers);
    display_opt_field!("Social:", page.social);

    let extra = unrecognized_keys(document);
    if !extra.is_empty() {
        println!(
            "{} {}",
            Style::new().bold().apply_to("Other keys:"),
            Style::new().cyan().apply_to(extra.join(", "))
        );
    }

    println!(
        "{} {} line(s)",
        Style::new().bold().apply_to("Body:"),
        document.body().lines().count()
    );
}

fn display_listing(label: &str, listing: Option<&FeedListing>) {
    let Some(listing) = listing else {
        return;
    };
    println!(
        "{} {}",
        Style::new().bold().apply_to(label),
        describe_listing(listing)
    );
}

fn describe_listing(listing: &FeedListing) -> String {
    if !listing.is_enabled() {
        return "disabled".to_string();
    }
    let mut parts = vec!["enabled".to_string()];
    if listing.is_scrollable() {
        parts.push("scrollable".to_string());
    }
    parts.push(match listing.limit {
        Some(limit) => format!("limit {limit}"),
        None => "unlimited".to_string(),
    });
    parts.join(", ")
}

fn unrecognized_keys(document: &FrontMatterDocument) -> Vec<&str> {
    document
        .header()
        .keys()
        .filter_map(Value::as_str)
        .filter(|key| field_kind(key).is_none())
        .collect()
}
