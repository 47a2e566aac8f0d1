//! Text rendering
//!
//! Plain-text tables for the command-line presentation layer.

use std::io::Write;

use parking_lot::Mutex;

use crate::directory::DirectoryEntry;
use crate::engine::RosterObserver;
use crate::member::Member;
use crate::validate::ValidationErrors;

/// Shown instead of an empty table
pub const EMPTY_ROSTER: &str = "No members yet";

const MEMBER_HEADERS: [&str; 5] = ["ID", "Name", "Email", "Age", "Status"];
const DIRECTORY_HEADERS: [&str; 3] = ["Handle", "Profile URL", "Type"];

/// Render members as an aligned table
pub fn render_members(members: &[Member]) -> String {
    if members.is_empty() {
        return format!("{}\n", EMPTY_ROSTER);
    }

    let rows: Vec<Vec<String>> = members
        .iter()
        .map(|m| {
            vec![
                m.id.to_string(),
                m.name.clone(),
                m.email.clone(),
                m.age.to_string(),
                m.status.to_string(),
            ]
        })
        .collect();

    render_table(&MEMBER_HEADERS, &rows)
}

/// Render one member as labelled lines
pub fn render_member(member: &Member) -> String {
    format!(
        "id:     {}\nname:   {}\nemail:  {}\nage:    {}\nstatus: {}\n",
        member.id, member.name, member.email, member.age, member.status
    )
}

/// Render directory rows as an aligned table
pub fn render_directory(entries: &[DirectoryEntry]) -> String {
    if entries.is_empty() {
        return "No accounts returned\n".to_string();
    }

    let rows: Vec<Vec<String>> = entries
        .iter()
        .map(|e| vec![e.handle.clone(), e.profile_url.clone(), e.account_type.clone()])
        .collect();

    render_table(&DIRECTORY_HEADERS, &rows)
}

/// One `field: message` line per failing field
pub fn render_validation(errors: &ValidationErrors) -> String {
    errors
        .iter()
        .map(|e| format!("  {}: {}\n", e.field, e.message))
        .collect()
}

fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, headers.iter().copied(), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, rule.iter().map(String::as_str), &widths);
    for row in rows {
        push_row(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

fn push_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line: Vec<String> = cells
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}

/// Observer that redraws the member table into a writer
pub struct TableView<W: Write> {
    out: Mutex<W>,
}

impl<W: Write> TableView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write> RosterObserver for TableView<W> {
    fn roster_changed(&self, members: &[Member]) {
        let mut out = self.out.lock();
        if let Err(e) = out.write_all(render_members(members).as_bytes()).and_then(|_| out.flush()) {
            tracing::warn!(error = %e, "Failed to redraw roster table");
        }
    }
}
