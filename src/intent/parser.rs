//! Intent parser
//!
//! Turns a shell line into an `Intent`.

use crate::error::{Result, RosterError};
use crate::member::{MemberDraft, MemberId, MemberPatch};
use crate::roster::{SortKey, StatusFilter};

use super::Intent;

/// Split a line into whitespace-separated tokens, honouring double quotes
///
/// Quotes may start mid-token (`name="Ani Putri"` → `name=Ani Putri`).
pub fn tokenize(line: &str) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut in_quotes = false;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                in_token = true;
            }
            '\\' if in_quotes => match chars.next() {
                Some(escaped @ ('"' | '\\')) => current.push(escaped),
                Some(other) => {
                    current.push('\\');
                    current.push(other);
                }
                None => current.push('\\'),
            },
            c if c.is_whitespace() && !in_quotes => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if in_quotes {
        return Err(RosterError::Intent("unterminated quote".to_string()));
    }
    if in_token {
        tokens.push(current);
    }

    Ok(tokens)
}

/// Parse one shell line
pub fn parse_intent(line: &str) -> Result<Intent> {
    let tokens = tokenize(line)?;
    let (verb, args) = match tokens.split_first() {
        Some((verb, args)) => (verb.to_ascii_lowercase(), args),
        None => return Err(RosterError::Intent("empty command".to_string())),
    };

    match verb.as_str() {
        "list" | "ls" => {
            expect_args(&verb, args, 0)?;
            Ok(Intent::List)
        }
        "show" | "get" => {
            expect_args(&verb, args, 1)?;
            Ok(Intent::Show { id: parse_id(&args[0]) })
        }
        "add" => {
            let fields = parse_fields(args)?;
            Ok(Intent::Submit {
                draft: MemberDraft {
                    name: fields.name.unwrap_or_default(),
                    email: fields.email.unwrap_or_default(),
                    age: fields.age.unwrap_or_default(),
                    status: fields.status.unwrap_or_default(),
                },
            })
        }
        "edit" | "update" => {
            let (id, rest) = args
                .split_first()
                .ok_or_else(|| RosterError::Intent(format!("{}: missing member id", verb)))?;
            let patch = parse_fields(rest)?;
            if patch.is_empty() {
                return Err(RosterError::Intent(format!(
                    "{}: nothing to change (give at least one field=value)",
                    verb
                )));
            }
            Ok(Intent::Edit {
                id: parse_id(id),
                patch,
            })
        }
        "delete" | "del" | "rm" => {
            expect_args(&verb, args, 1)?;
            Ok(Intent::Delete { id: parse_id(&args[0]) })
        }
        "sort" => {
            expect_args(&verb, args, 1)?;
            Ok(Intent::Sort {
                key: args[0].parse::<SortKey>()?,
            })
        }
        "filter" => {
            // Allow the unquoted two-word legacy status
            if args.is_empty() {
                return Err(RosterError::Intent("filter: missing status".to_string()));
            }
            Ok(Intent::Filter {
                filter: args.join(" ").parse::<StatusFilter>()?,
            })
        }
        "help" | "?" => Ok(Intent::Help),
        "quit" | "exit" => Ok(Intent::Quit),
        other => Err(RosterError::Intent(format!("unknown command {:?}", other))),
    }
}

fn expect_args(verb: &str, args: &[String], count: usize) -> Result<()> {
    if args.len() != count {
        return Err(RosterError::Intent(format!(
            "{}: expected {} argument(s), got {}",
            verb,
            count,
            args.len()
        )));
    }
    Ok(())
}

fn parse_id(token: &str) -> MemberId {
    match token.parse::<MemberId>() {
        Ok(id) => id,
        Err(never) => match never {},
    }
}

/// Parse `field=value` pairs into a patch (also used to build drafts)
fn parse_fields(args: &[String]) -> Result<MemberPatch> {
    let mut patch = MemberPatch::default();

    for arg in args {
        let (key, value) = arg
            .split_once('=')
            .ok_or_else(|| RosterError::Intent(format!("expected field=value, got {:?}", arg)))?;

        let slot = match key.to_ascii_lowercase().as_str() {
            "name" | "nama" => &mut patch.name,
            "email" => &mut patch.email,
            "age" | "umur" => &mut patch.age,
            "status" => &mut patch.status,
            other => {
                return Err(RosterError::Intent(format!("unknown field {:?}", other)));
            }
        };

        if slot.is_some() {
            return Err(RosterError::Intent(format!("field {:?} given twice", key)));
        }
        *slot = Some(value.to_string());
    }

    Ok(patch)
}
