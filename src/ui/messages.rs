//! User-facing terminal messages. Diagnostics go through `tracing` instead.

use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

#[derive(Clone, Copy)]
enum Kind {
    Info,
    Success,
    Warning,
    Error,
}

impl Kind {
    fn color(self) -> &'static str {
        match self {
            Kind::Info => "\x1b[34m",
            Kind::Success => "\x1b[32m",
            Kind::Warning => "\x1b[33m",
            Kind::Error => "\x1b[31m",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Kind::Info => "ℹ️",
            Kind::Success => "✅",
            Kind::Warning => "⚠️",
            Kind::Error => "❌",
        }
    }
}

fn line<T: fmt::Display>(kind: Kind, msg: T) -> String {
    format!("{}{}{} {}{}", kind.color(), BOLD, kind.icon(), RESET, msg)
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", line(Kind::Info, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", line(Kind::Success, msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", line(Kind::Warning, msg));
}

/// Printed on stderr
pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", line(Kind::Error, msg));
}

/// Secondary line (hints, "+N more" markers)
pub fn muted<T: fmt::Display>(msg: T) {
    println!("{}{}{}", DIM, msg, RESET);
}

/// Section header, e.g. the active filter and reference time
pub fn header<T: fmt::Display>(msg: T) {
    println!("{}{}== {} =={}", Kind::Info.color(), BOLD, msg, RESET);
}
