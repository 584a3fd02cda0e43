//! Interactive Lookup Loop
//!
//! Line-oriented prompt over any reader/writer pair. Commands start with `:`;
//! anything else is a city name, followed by a prompt for its region code.

use std::io::{self, BufRead, Write};

use crate::cache::StrategyKind;
use crate::lookup::{CityLookup, LookupOutcome};

/// Runs the prompt until `exit` or end of input.
///
/// # Commands
/// - `:strategy <id>` - swap to lfu, fifo, lru or random (clears the cache)
/// - `:stats` - print hit/miss/eviction counters
/// - `:cache` - list cached entries, first eviction candidate first (with
///   access counts under LFU)
pub fn run_repl<R: BufRead, W: Write>(
    lookup: &mut CityLookup,
    mut input: R,
    mut output: W,
) -> io::Result<()> {
    writeln!(
        output,
        "Using {} cache. Type 'exit' to quit, ':strategy <id>' to switch.",
        lookup.strategy_name()
    )?;

    loop {
        write!(output, "Enter city (or 'exit'): ")?;
        output.flush()?;
        let Some(city) = read_line(&mut input)? else {
            break;
        };
        if city.eq_ignore_ascii_case("exit") {
            break;
        }
        if city.is_empty() {
            continue;
        }

        if let Some(command) = city.strip_prefix(':') {
            run_command(lookup, command, &mut output)?;
            continue;
        }

        write!(output, "Enter region code: ")?;
        output.flush()?;
        let Some(region) = read_line(&mut input)? else {
            break;
        };

        match lookup.lookup(&region, &city) {
            LookupOutcome::Cached(value) => writeln!(output, "Value (from cache): {value}")?,
            LookupOutcome::Indexed(value) => writeln!(output, "Value (from index): {value}")?,
            LookupOutcome::NotFound => writeln!(output, "City not found.")?,
        }
    }

    writeln!(output, "Bye.")
}

fn run_command<W: Write>(lookup: &mut CityLookup, command: &str, output: &mut W) -> io::Result<()> {
    let mut parts = command.split_whitespace();
    match parts.next() {
        Some("strategy") => match parts.next().unwrap_or_default().parse::<StrategyKind>() {
            Ok(kind) => {
                lookup.set_strategy(kind);
                writeln!(output, "Switched to {} cache.", lookup.strategy_name())
            }
            Err(e) => writeln!(output, "{e}"),
        },
        Some("stats") => {
            let stats = lookup.stats();
            writeln!(
                output,
                "[{}] hits: {}, misses: {}, not found: {}, evictions: {}, hit rate: {:.2}%",
                lookup.strategy_name(),
                stats.hits,
                stats.misses,
                stats.not_found,
                stats.evictions,
                stats.hit_rate() * 100.0
            )
        }
        Some("cache") => {
            let cache = lookup.cache();
            writeln!(output, "[{} Cache] {}/{}", cache.name(), cache.len(), cache.capacity())?;
            for key in cache.keys() {
                let value = cache
                    .peek(key.region_code(), key.name())
                    .unwrap_or_default();
                match cache.frequency(key.region_code(), key.name()) {
                    Some(freq) => writeln!(output, "  {key} -> {value} (freq: {freq})")?,
                    None => writeln!(output, "  {key} -> {value}")?,
                }
            }
            Ok(())
        }
        _ => writeln!(output, "Unknown command ':{command}'. Try :strategy, :stats or :cache."),
    }
}

/// Reads one trimmed line; `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
