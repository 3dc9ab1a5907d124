use ansi_term::{Color, Style};
use std::io;

const TITLE_TOTAL_COLS: usize = 80;

pub trait Reportable {
    fn report(&self, dest: &mut impl io::Write) -> io::Result<()>;
    fn exit_status(&self) -> i32;
}

fn write_title(dest: &mut impl io::Write, style: Style, title: &str) -> io::Result<()> {
    writeln!(
        dest,
        "{}",
        style.paint(format!(
            "-- {} {}",
            title,
            "-".repeat(TITLE_TOTAL_COLS.saturating_sub(4 + title.len()))
        ))
    )
}

pub fn write_error_title(dest: &mut impl io::Write, title: &str) -> io::Result<()> {
    write_title(dest, Color::Red.bold(), title)
}

pub fn write_warning_title(dest: &mut impl io::Write, title: &str) -> io::Result<()> {
    write_title(dest, Color::Yellow.bold(), title)
}
