//! Console command parsing.

use thiserror::Error;

use orderdesk_core::OrderId;
use orderdesk_dispatch::StatusFilter;

use crate::form::OrderForm;

pub const HELP: &str = "\
commands:
  add <order-id> <restaurant> <items> <km> [paid|unpaid]   add an order (quote names with spaces)
  delete <order-id>                                        remove an order
  filter <all|paid|unpaid>                                 set the table status filter
  distance <km>                                            set the table distance ceiling
  assign [km]                                              assign the nearest unpaid order
  list                                                     show the table and counters
  html                                                     print the table as HTML rows
  json                                                     print the visible orders as JSON
  stats                                                    show the counters
  history [after-seq]                                      show applied changes
  help                                                     show this text
  quit                                                     exit";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    #[error("unknown command `{0}` (try `help`)")]
    UnknownCommand(String),

    #[error("`{command}` needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("unexpected argument `{0}`")]
    UnexpectedArgument(String),

    #[error("invalid {argument} `{value}`: {reason}")]
    InvalidArgument {
        argument: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error("unterminated quote")]
    UnterminatedQuote,
}

/// One parsed console line.
#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleCommand {
    Add(OrderForm),
    Delete(OrderId),
    Filter(StatusFilter),
    Distance(f64),
    /// `None` keeps the current assignment ceiling.
    Assign(Option<f64>),
    List,
    Html,
    Json,
    Stats,
    History(Option<u64>),
    Help,
    Quit,
}

impl ConsoleCommand {
    /// Parse one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let args = split_args(line)?;
        let Some((name, rest)) = args.split_first() else {
            return Ok(None);
        };

        let cmd = match name.to_ascii_lowercase().as_str() {
            "add" => parse_add(rest)?,
            "delete" | "rm" => {
                let [id] = exact::<1>(rest, "delete", "an order id")?;
                ConsoleCommand::Delete(OrderId::from(id.as_str()))
            }
            "filter" => {
                let [status] = exact::<1>(rest, "filter", "all, paid or unpaid")?;
                let status = status.parse::<StatusFilter>().map_err(|_| {
                    CommandError::InvalidArgument {
                        argument: "status filter",
                        value: status.clone(),
                        reason: "expected all, paid or unpaid",
                    }
                })?;
                ConsoleCommand::Filter(status)
            }
            "distance" => {
                let [km] = exact::<1>(rest, "distance", "a distance in km")?;
                ConsoleCommand::Distance(parse_ceiling(km)?)
            }
            "assign" => match rest {
                [] => ConsoleCommand::Assign(None),
                [km] => ConsoleCommand::Assign(Some(parse_ceiling(km)?)),
                [_, extra, ..] => return Err(CommandError::UnexpectedArgument(extra.clone())),
            },
            "history" => match rest {
                [] => ConsoleCommand::History(None),
                [seq] => {
                    let seq = seq.parse::<u64>().map_err(|_| CommandError::InvalidArgument {
                        argument: "sequence",
                        value: seq.clone(),
                        reason: "expected a whole number",
                    })?;
                    ConsoleCommand::History(Some(seq))
                }
                [_, extra, ..] => return Err(CommandError::UnexpectedArgument(extra.clone())),
            },
            "list" | "ls" => no_args(rest, ConsoleCommand::List)?,
            "html" => no_args(rest, ConsoleCommand::Html)?,
            "json" => no_args(rest, ConsoleCommand::Json)?,
            "stats" => no_args(rest, ConsoleCommand::Stats)?,
            "help" | "?" => no_args(rest, ConsoleCommand::Help)?,
            "quit" | "exit" => no_args(rest, ConsoleCommand::Quit)?,
            other => return Err(CommandError::UnknownCommand(other.to_string())),
        };

        Ok(Some(cmd))
    }
}

fn parse_add(rest: &[String]) -> Result<ConsoleCommand, CommandError> {
    let (fields, flag) = match rest {
        [id, name, items, km] => ([id, name, items, km], None),
        [id, name, items, km, flag] => ([id, name, items, km], Some(flag)),
        [_, _, _, _, _, extra, ..] => return Err(CommandError::UnexpectedArgument(extra.clone())),
        _ => {
            return Err(CommandError::MissingArgument {
                command: "add",
                argument: "<order-id> <restaurant> <items> <km>",
            });
        }
    };

    let is_paid = match flag.map(|f| f.to_ascii_lowercase()) {
        None => false,
        Some(f) if f == "paid" => true,
        Some(f) if f == "unpaid" => false,
        Some(f) => {
            return Err(CommandError::InvalidArgument {
                argument: "payment flag",
                value: f,
                reason: "expected paid or unpaid",
            });
        }
    };

    let [id, name, items, km] = fields;
    Ok(ConsoleCommand::Add(OrderForm {
        order_id: id.clone(),
        restaurant_name: name.clone(),
        item_count: items.clone(),
        delivery_distance: km.clone(),
        is_paid,
    }))
}

fn parse_ceiling(raw: &str) -> Result<f64, CommandError> {
    match raw.parse::<f64>() {
        Ok(km) if km >= 0.0 => Ok(km),
        _ => Err(CommandError::InvalidArgument {
            argument: "distance",
            value: raw.to_string(),
            reason: "expected a non-negative number of km",
        }),
    }
}

fn exact<'a, const N: usize>(
    rest: &'a [String],
    command: &'static str,
    argument: &'static str,
) -> Result<&'a [String; N], CommandError> {
    if rest.len() > N {
        return Err(CommandError::UnexpectedArgument(rest[N].clone()));
    }
    rest.try_into()
        .map_err(|_| CommandError::MissingArgument { command, argument })
}

fn no_args(rest: &[String], cmd: ConsoleCommand) -> Result<ConsoleCommand, CommandError> {
    match rest.first() {
        Some(extra) => Err(CommandError::UnexpectedArgument(extra.clone())),
        None => Ok(cmd),
    }
}

/// Split on whitespace, keeping double-quoted runs together.
fn split_args(line: &str) -> Result<Vec<String>, CommandError> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                in_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if in_token {
                    args.push(std::mem::take(&mut current));
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
        return Err(CommandError::UnterminatedQuote);
    }
    if in_token {
        args.push(current);
    }
    Ok(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> ConsoleCommand {
        ConsoleCommand::parse(line).unwrap().unwrap()
    }

    #[test]
    fn blank_lines_are_skipped() {
        assert_eq!(ConsoleCommand::parse("").unwrap(), None);
        assert_eq!(ConsoleCommand::parse("   \t").unwrap(), None);
    }

    #[test]
    fn add_keeps_quoted_restaurant_names_together() {
        let cmd = parse(r#"add ORD005 "Noodle Nook" 3 4.2 paid"#);
        assert_eq!(
            cmd,
            ConsoleCommand::Add(OrderForm {
                order_id: "ORD005".to_string(),
                restaurant_name: "Noodle Nook".to_string(),
                item_count: "3".to_string(),
                delivery_distance: "4.2".to_string(),
                is_paid: true,
            })
        );
    }

    #[test]
    fn add_defaults_to_unpaid_and_leaves_numbers_unparsed() {
        match parse("add ORD006 Deli zero -1") {
            ConsoleCommand::Add(form) => {
                assert!(!form.is_paid);
                assert_eq!(form.item_count, "zero");
                assert_eq!(form.delivery_distance, "-1");
            }
            other => panic!("Expected Add, got {other:?}"),
        }
    }

    #[test]
    fn empty_quotes_produce_an_empty_argument() {
        match parse(r#"add "" Deli 1 1"#) {
            ConsoleCommand::Add(form) => assert_eq!(form.order_id, ""),
            other => panic!("Expected Add, got {other:?}"),
        }
    }

    #[test]
    fn add_argument_errors() {
        assert!(matches!(
            ConsoleCommand::parse("add ORD1 Deli 1").unwrap_err(),
            CommandError::MissingArgument { command: "add", .. }
        ));
        assert!(matches!(
            ConsoleCommand::parse("add ORD1 Deli 1 1 maybe").unwrap_err(),
            CommandError::InvalidArgument { argument: "payment flag", .. }
        ));
        assert_eq!(
            ConsoleCommand::parse("add ORD1 Deli 1 1 paid extra").unwrap_err(),
            CommandError::UnexpectedArgument("extra".to_string())
        );
    }

    #[test]
    fn view_commands() {
        assert_eq!(parse("filter UNPAID"), ConsoleCommand::Filter(StatusFilter::Unpaid));
        assert_eq!(parse("distance 7.5"), ConsoleCommand::Distance(7.5));
        assert_eq!(parse("assign"), ConsoleCommand::Assign(None));
        assert_eq!(parse("assign 3"), ConsoleCommand::Assign(Some(3.0)));
        assert_eq!(parse("delete ORD001"), ConsoleCommand::Delete(OrderId::from("ORD001")));
        assert_eq!(parse("history 2"), ConsoleCommand::History(Some(2)));
        assert_eq!(parse("LIST"), ConsoleCommand::List);
        assert_eq!(parse("exit"), ConsoleCommand::Quit);
    }

    #[test]
    fn bad_view_arguments_are_reported() {
        assert!(matches!(
            ConsoleCommand::parse("distance -1").unwrap_err(),
            CommandError::InvalidArgument { argument: "distance", .. }
        ));
        assert!(matches!(
            ConsoleCommand::parse("filter pending").unwrap_err(),
            CommandError::InvalidArgument { argument: "status filter", .. }
        ));
        assert!(matches!(
            ConsoleCommand::parse("delete").unwrap_err(),
            CommandError::MissingArgument { command: "delete", .. }
        ));
        assert_eq!(
            ConsoleCommand::parse("stats now").unwrap_err(),
            CommandError::UnexpectedArgument("now".to_string())
        );
        assert_eq!(
            ConsoleCommand::parse("dance").unwrap_err(),
            CommandError::UnknownCommand("dance".to_string())
        );
        assert_eq!(
            ConsoleCommand::parse(r#"add "Noodle Nook"#).unwrap_err(),
            CommandError::UnterminatedQuote
        );
    }
}
