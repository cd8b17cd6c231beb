//! Human-readable rendering of API responses.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::{LatestResponse, ListResponse, Message};

/// Preview column width in list output.
pub const PREVIEW_WIDTH: usize = 120;

/// Print one page of messages with its paging header.
pub fn print_list(resp: &ListResponse) {
    println!(
        "Total: {} (limit {} offset {})",
        resp.total, resp.limit, resp.offset
    );
    for m in &resp.data {
        println!(
            "- {} | to:{} | from:{} | {} | {}\n  subject: {}\n  preview: {}",
            m.id,
            m.to_addr,
            m.from_addr,
            format_time(m.received_at),
            body_kind(m.has_html),
            m.subject,
            trim_preview(&m.preview, PREVIEW_WIDTH),
        );
    }
}

/// Print the newest messages as one line each.
pub fn print_latest(resp: &LatestResponse) {
    for m in &resp.data {
        println!(
            "- {} | {} | from:{} | subject: {}",
            m.id,
            format_time(m.received_at),
            m.from_addr,
            m.subject
        );
    }
}

/// Print a full message: labeled headers, text body, then the sanitized
/// HTML body when one exists.
pub fn print_detail(m: &Message) {
    println!(
        "ID: {}\nTo: {}\nFrom: {}\nReceived: {}\nSubject: {}\nHas HTML: {}\n\nText:\n{}",
        m.id,
        m.to_addr,
        m.from_addr,
        format_time(m.received_at),
        m.subject,
        body_kind(m.has_html),
        m.body_text,
    );
    if !m.body_html.trim().is_empty() {
        println!("\nHTML (sanitized):\n{}", m.body_html);
    }
}

/// Render unix seconds as RFC 3339, or `-` for the zero value.
pub fn format_time(ts: i64) -> String {
    if ts == 0 {
        return "-".to_string();
    }
    match DateTime::<Utc>::from_timestamp(ts, 0) {
        Some(dt) => dt.to_rfc3339_opts(SecondsFormat::Secs, true),
        None => "-".to_string(),
    }
}

/// Flatten newlines and truncate to `max` characters, appending `...`
/// when anything was cut. Strings of `max` characters or fewer pass
/// through unchanged.
pub fn trim_preview(s: &str, max: usize) -> String {
    let flat = s.replace('\n', " ");
    if flat.chars().count() <= max {
        return flat;
    }
    let keep = max.saturating_sub(3);
    let mut out: String = flat.chars().take(keep).collect();
    out.push_str("...");
    out
}

/// Label for which body parts a message carries.
pub fn body_kind(has_html: bool) -> &'static str {
    if has_html { "html+text" } else { "text" }
}

/// JSON receipt for a single-message delete.
///
/// Uses `deleted_id` so the key never collides with the numeric `deleted`
/// count from [`batch_delete_receipt`].
pub fn delete_receipt(id: &str) -> serde_json::Value {
    serde_json::json!({ "deleted_id": id })
}

/// JSON receipt for a batch delete.
pub fn batch_delete_receipt(deleted: u64) -> serde_json::Value {
    serde_json::json!({ "deleted": deleted })
}
