// Fixture unit for the extraction tests. Never compiled.

use std::fmt;

/// Greeting shape.
#[derive(Debug)]
pub enum Tone {
    Warm,
    Formal,
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(label(self))
    }
}

fn label(tone: &Tone) -> &'static str {
    match tone {
        Tone::Warm => "warm",
        Tone::Formal => "formal",
    }
}

/// Entry point.
#[inline]
pub fn greet(name: &str, tone: Tone) -> String {
    let prefix = salutation(&tone);
    format!("{prefix}, {}", punctuate(name))
}

fn salutation(tone: &Tone) -> String {
    match tone {
        Tone::Warm => "héllo".to_string(),
        Tone::Formal => capitalize("good day"),
    }
}

fn punctuate(name: &str) -> String {
    format!("{name}!")
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn accent() -> &'static str { "é" }

/// Leading doc.
#[must_use]
/// Trailing doc.
fn shout(s: &str) -> String {
    s.to_uppercase()
}

fn unused() -> u8 {
    0
}

pub(crate) fn countdown(n: u32) -> u32 {
    if n == 0 { 0 } else { countdown(n - 1) }
}

pub struct Counter(u32);

impl Counter {
    pub fn bump(&mut self) {
        self.0 += 1;
    }
}

pub fn make_counter() -> Counter {
    Counter(0)
}
