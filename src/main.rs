use clap::Parser;
use colored::Colorize;
use hotel::{Booker, BookingError, DateRange, HotelConfig, Reservation};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::{Context, Editor, Helper, Highlighter, Hinter, Validator};
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::str::FromStr;
use std::sync::Arc;
use tabled::Tabled;
use tabled::settings::Style;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
struct Args {
    /// Path to a JSON hotel configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Nightly rate used when `reserve` is given no rate
    #[arg(short, long, value_name = "RATE")]
    rate: Option<u32>,
}

#[derive(Helper, Hinter, Highlighter, Validator)]
pub struct CompleteHelper {
    pub commands: Vec<String>,
}

impl Completer for CompleteHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, _pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        let mut candidates = Vec::new();

        for cmd in &self.commands {
            if cmd.starts_with(line) {
                candidates.push(Pair {
                    display: cmd.clone(),
                    replacement: format!("{} ", cmd),
                });
            }
        }

        Ok((0, candidates))
    }
}

#[derive(Tabled)]
struct ReservationRow {
    id: u64,
    room: u32,
    check_in: String,
    check_out: String,
    nights: u32,
    rate: u32,
    total: u64,
    block: String,
}

impl From<&Arc<Reservation>> for ReservationRow {
    fn from(r: &Arc<Reservation>) -> Self {
        let range = r.date_range();
        ReservationRow {
            id: r.id(),
            room: r.room_id(),
            check_in: range.start().format(hotel::date_range::DATE_FORMAT).to_string(),
            check_out: range.end().format(hotel::date_range::DATE_FORMAT).to_string(),
            nights: range.nights(),
            rate: r.price(),
            total: r.total_price(),
            block: r.block().map(|b| b.to_string()).unwrap_or_default(),
        }
    }
}

#[derive(Tabled)]
struct RoomRow {
    room: u32,
    reservations: usize,
    first_check_in: String,
}

fn paginate(content: String) {
    let pager = Command::new("less")
        .arg("-R")
        .stdin(Stdio::piped())
        .spawn()
        // Fallback to 'more' if 'less' isn't available
        .or_else(|_| Command::new("more").stdin(Stdio::piped()).spawn());

    let mut pager = match pager {
        Ok(p) => p,
        Err(_) => {
            println!("{}", content);
            return;
        }
    };

    if let Some(mut stdin) = pager.stdin.take() {
        if let Err(e) = stdin.write_all(content.as_bytes()) {
            // Broken pipe is common if the user quits the pager early
            if e.kind() != std::io::ErrorKind::BrokenPipe {
                eprintln!("Error writing to pager: {}", e);
            }
        }
    }

    // Wait for the user to close the pager before returning to the ">> " prompt
    let _ = pager.wait();
}

fn print_table<T: Tabled>(rows: Vec<T>, empty: &str) {
    if rows.is_empty() {
        println!("{}", empty);
        return;
    }
    let long = rows.len() > 20;
    let mut table = tabled::Table::new(rows);
    table.with(Style::rounded());
    table.with(tabled::settings::Alignment::left());
    if long {
        paginate(table.to_string());
    } else {
        println!("{}", table);
    }
}

fn report(err: BookingError) {
    println!("{} {}", "Error:".red().bold(), err);
}

fn parse_arg<T: FromStr>(text: &str, name: &str) -> Option<T> {
    let parsed = text.parse::<T>().ok();
    if parsed.is_none() {
        println!("{} {} must be a whole number, got '{}'", "Error:".red().bold(), name, text);
    }
    parsed
}

fn range_arg(parts: &[&str]) -> Option<Result<DateRange, BookingError>> {
    match (parts.get(1), parts.get(2)) {
        (Some(start), Some(end)) => Some(DateRange::parse(start, end)),
        _ => None,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => HotelConfig::load_from_file(path)?,
        None => HotelConfig::default(),
    };
    if let Some(rate) = args.rate {
        config.default_rate = rate;
    }
    let mut booker = Booker::with_config(config)?;
    println!(
        "Front desk open. {} rooms, {} per night.",
        booker.rooms().len(),
        booker.config().default_rate
    );

    let config = rustyline::Config::builder()
        .history_ignore_space(true)
        .completion_type(rustyline::CompletionType::List)
        .build();

    let helper = CompleteHelper {
        commands: vec![
            "reserve".to_string(),
            "block".to_string(),
            "open".to_string(),
            "avail".to_string(),
            "ls".to_string(),
            "cost".to_string(),
            "rooms".to_string(),
            "help".to_string(),
            "exit".to_string(),
        ],
    };

    let mut rl = Editor::with_config(config)?;
    rl.set_helper(Some(helper));

    loop {
        let readline = rl.readline(">> ");
        match readline {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() { continue; }

                rl.add_history_entry(trimmed)?;

                let parts: Vec<&str> = trimmed.split_whitespace().collect();
                match parts[0] {
                    "reserve" => match range_arg(&parts) {
                        Some(range) => {
                            let rate = match parts.get(3) {
                                Some(text) => parse_arg::<u32>(text, "rate"),
                                None => Some(booker.config().default_rate),
                            };
                            if let Some(rate) = rate {
                                match range.and_then(|range| booker.reserve_range(&range, rate)) {
                                    Ok(r) => println!(
                                        "{} reservation {} in room {}, total {}.",
                                        "Booked".green(), r.id(), r.room_id(), r.total_price()
                                    ),
                                    Err(e) => report(e),
                                }
                            }
                        },
                        None => println!("Usage: reserve <DD-MM-YYYY> <DD-MM-YYYY> [rate]"),
                    },
                    "block" => match (range_arg(&parts), parts.get(3), parts.get(4)) {
                        (Some(range), Some(rooms), Some(rate)) => {
                            let args = (parse_arg::<usize>(rooms, "rooms"), parse_arg::<u32>(rate, "rate"));
                            if let (Some(rooms), Some(rate)) = args {
                                match range.and_then(|range| booker.reserve_block(&range, rooms, rate)) {
                                    Ok(block) => println!(
                                        "{} {} with rooms {:?}.",
                                        "Booked".green(), block, block.room_ids()
                                    ),
                                    Err(e) => report(e),
                                }
                            }
                        },
                        _ => println!("Usage: block <DD-MM-YYYY> <DD-MM-YYYY> <rooms> <rate>"),
                    },
                    "open" => match range_arg(&parts) {
                        Some(range) => match range.and_then(|range| booker.open_room(&range).map(|r| r.id())) {
                            Ok(id) => println!("Next stay would go to room {}.", id),
                            Err(e) => report(e),
                        },
                        None => println!("Usage: open <DD-MM-YYYY> <DD-MM-YYYY>"),
                    },
                    "avail" => match range_arg(&parts) {
                        Some(Ok(range)) => {
                            let ids = booker.available_rooms(&range).iter().map(|r| r.id().to_string()).collect::<Vec<_>>();
                            if ids.is_empty() {
                                println!("{}", "No rooms available.".yellow());
                            } else {
                                println!("{} rooms available: {}", ids.len(), ids.join(", "));
                            }
                        },
                        Some(Err(e)) => report(e),
                        None => println!("Usage: avail <DD-MM-YYYY> <DD-MM-YYYY>"),
                    },
                    "ls" => {
                        let rows = match range_arg(&parts) {
                            Some(Ok(range)) => booker.reservations_by_date(&range).into_iter().map(ReservationRow::from).collect(),
                            Some(Err(e)) => {
                                report(e);
                                continue;
                            },
                            None => booker.reservations().iter().map(ReservationRow::from).collect::<Vec<_>>(),
                        };
                        print_table(rows, "No matching reservations found.");
                    },
                    "cost" => match parts.get(1).and_then(|id| id.parse::<u64>().ok()) {
                        Some(id) => match booker.cost_of(id) {
                            Ok(total) => println!("Reservation {} costs {}.", id, total),
                            Err(e) => report(e),
                        },
                        None => println!("Usage: cost <reservation_id>"),
                    },
                    "rooms" => {
                        let rows = booker.rooms().iter().map(|room| RoomRow {
                            room: room.id(),
                            reservations: room.reservations().len(),
                            first_check_in: room.reservations().iter()
                                .map(|r| r.date_range().start())
                                .min()
                                .map(|d| d.format(hotel::date_range::DATE_FORMAT).to_string())
                                .unwrap_or_default(),
                        }).collect::<Vec<_>>();
                        print_table(rows, "No rooms.");
                    },
                    "help" | "?" => {
                        println!("\nAvailable Commands:");
                        println!("  reserve <from> <to> [rate]      - Book the first free room for a stay");
                        println!("  block <from> <to> <n> <rate>    - Book <n> rooms together at a shared rate");
                        println!("  open <from> <to>                - Show which room a stay would get");
                        println!("  avail <from> <to>               - List rooms free for a stay");
                        println!("  ls [<from> <to>]                - List all reservations or those overlapping a stay");
                        println!("  cost <id>                       - Total price of a reservation");
                        println!("  rooms                           - List rooms and their booking counts");
                        println!("  help / ?                        - Show this help menu");
                        println!("  exit / quit                     - Close the front desk\n");
                        println!("Dates are DD-MM-YYYY; the checkout date is not a booked night.\n");
                    },
                    "exit" | "quit" => break,
                    _ => println!("Unknown command: {}", parts[0]),
                }
            },
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            },
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            },
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_arg_rejects_non_numeric() {
        assert_eq!(None, parse_arg::<u32>("abc", "rate"));
        assert_eq!(None, parse_arg::<usize>("two", "rooms"));
        assert_eq!(None, parse_arg::<usize>("-2", "rooms"));
    }

    #[test]
    fn test_parse_arg_accepts_numbers() {
        assert_eq!(Some(150), parse_arg::<u32>("150", "rate"));
        assert_eq!(Some(0), parse_arg::<usize>("0", "rooms"));
    }
}
