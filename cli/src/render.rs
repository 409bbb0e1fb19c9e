//! Plain-text rendering for terminal output.

use std::fmt::Write;

use catalog::analysis::format_amount;
use catalog::{AnalysisResult, ChatRole, Product, Transcript};

pub const EMPTY_LIST_MESSAGE: &str = "No products tracked yet. Add your first product with `price-tracker track <url>`.";

pub fn product_list(products: &[Product]) -> String {
    if products.is_empty() {
        return format!("{EMPTY_LIST_MESSAGE}\n");
    }

    let mut out = String::new();
    for product in products {
        let _ = writeln!(out, "[{}] {}", product.id, product.name);
        let mut price_line = product.display_price();
        if !product.seller.trim().is_empty() {
            let _ = write!(price_line, " | {}", product.seller.trim());
        }
        let _ = writeln!(out, "    {price_line}");
        if !product.description.trim().is_empty() {
            let _ = writeln!(out, "    {}", product.description.trim());
        }
        if let Some(date) = product.added_on() {
            let _ = writeln!(out, "    Added: {date}");
        }
        if let Some(score) = product.sentiment_score {
            let _ = writeln!(out, "    Sentiment {score:.2}");
        }
        if let Some(advice) = product.ai_recommendation.as_deref().filter(|a| !a.trim().is_empty()) {
            let _ = writeln!(out, "    {}", advice.trim());
        }
        let _ = writeln!(out, "    {}", product.url);
    }
    out
}

pub fn analysis(result: &AnalysisResult) -> String {
    let mut out = String::new();
    let query = &result.query_analysis;
    let _ = writeln!(out, "Category:    {}", query.category_label());
    let _ = writeln!(out, "Price range: {}", query.price_range_label());
    if let Some(features) = query.key_features() {
        let _ = writeln!(out, "Key features:");
        for feature in features {
            let _ = writeln!(out, "  - {feature}");
        }
    }

    if let Some(note) = result.recommendations.note() {
        let _ = writeln!(out, "\nAdvisor:");
        match note.confidence_score {
            Some(score) => {
                let _ = writeln!(out, "  {} (confidence {:.0}%)", note.recommendation, score * 100.0);
            }
            None => {
                let _ = writeln!(out, "  {}", note.recommendation);
            }
        }
    }

    let recommended = result.recommendations.products();
    if !recommended.is_empty() {
        let _ = writeln!(out, "\nRecommended:");
        for product in recommended {
            let _ = write!(out, "  {}  {}", product.name, format_amount(product.price));
            if let Some(rating) = product.rating {
                let _ = write!(out, "  {rating:.1} / 5");
            }
            out.push('\n');
        }
    }

    if !result.products.is_empty() {
        let _ = writeln!(out, "\nMatches:");
        for product in &result.products {
            let _ = write!(out, "  {}  {}", product.name, format_amount(product.price));
            if let Some(source) = product.source.as_deref() {
                let _ = write!(out, "  ({source})");
            }
            out.push('\n');
            if let Some(url) = product.url.as_deref() {
                let _ = writeln!(out, "    {url}");
            }
        }
    }
    out
}

pub fn transcript(transcript: &Transcript) -> String {
    let mut out = String::new();
    for message in transcript.iter() {
        let speaker = match message.role {
            ChatRole::User => "you",
            ChatRole::Assistant => "assistant",
        };
        let _ = writeln!(out, "{speaker}: {}", message.content);
    }
    out
}

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;
