//! A console session: the desk plus the view state the user has selected.

use tracing::debug;

use orderdesk_dispatch::{Order, OrderDesk, StatusFilter};
use orderdesk_events::Event;

use crate::command::{CommandError, ConsoleCommand, HELP};
use crate::config::ConsoleConfig;
use crate::escape::sanitize_lines;
use crate::notice::Notice;
use crate::render::{html_rows, stats_line, text_table};

const EMPTY_STATE_HTML: &str = "<div class=\"empty-state\">No orders found</div>\n";

/// Table filter and assignment settings, passed explicitly to every query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub status_filter: StatusFilter,
    /// Table distance ceiling (km, inclusive).
    pub max_distance: f64,
    /// Assignment distance ceiling (km, inclusive).
    pub assign_max_distance: f64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            status_filter: StatusFilter::All,
            max_distance: 10.0,
            assign_max_distance: 10.0,
        }
    }
}

/// What one command produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Response {
    pub notice: Option<Notice>,
    pub body: Option<String>,
    pub exit: bool,
}

impl Response {
    fn notice(notice: Notice) -> Self {
        Self {
            notice: Some(notice),
            ..Self::default()
        }
    }

    fn body(body: String) -> Self {
        Self {
            body: Some(body),
            ..Self::default()
        }
    }

    fn with_body(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }

    /// Error notice for a line that did not parse as a command.
    pub fn parse_error(err: &CommandError) -> Self {
        Self::notice(Notice::error(format!("Error: {err}")))
    }

    /// Notice first, then the body, each ending in a newline.
    ///
    /// Order text and echoed input end up in both, so every line is passed
    /// through the terminal sanitizer here.
    pub fn render(&self) -> String {
        let mut out = String::new();
        if let Some(notice) = &self.notice {
            out.push_str(&sanitize_lines(&notice.message));
            out.push('\n');
        }
        if let Some(body) = &self.body {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(&sanitize_lines(body));
            if !body.ends_with('\n') {
                out.push('\n');
            }
        }
        out
    }
}

#[derive(Debug, Clone)]
pub struct Console {
    desk: OrderDesk,
    view: ViewState,
}

impl Console {
    pub fn new(desk: OrderDesk, view: ViewState) -> Self {
        Self { desk, view }
    }

    pub fn from_config(config: &ConsoleConfig) -> Self {
        let desk = if config.seed_demo {
            OrderDesk::with_demo_orders()
        } else {
            OrderDesk::new()
        };
        let view = ViewState {
            status_filter: StatusFilter::All,
            max_distance: config.max_distance,
            assign_max_distance: config.assign_max_distance,
        };
        Self::new(desk, view)
    }

    pub fn desk(&self) -> &OrderDesk {
        &self.desk
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    /// First screen: greeting plus the initial table.
    pub fn welcome(&self) -> Response {
        Response::notice(Notice::welcome()).with_body(self.table_with_stats())
    }

    pub fn execute(&mut self, command: ConsoleCommand) -> Response {
        debug!(?command, "executing console command");

        match command {
            ConsoleCommand::Add(form) => {
                let added = form
                    .parse()
                    .and_then(|order| self.desk.add_order(order).map(Notice::order_added));
                match added {
                    Ok(notice) => Response::notice(notice).with_body(self.table_with_stats()),
                    Err(err) => Response::notice(Notice::rejected(&err)),
                }
            }
            ConsoleCommand::Delete(order_id) => match self.desk.delete_order(&order_id) {
                Some(order) => Response::notice(Notice::order_deleted(&order))
                    .with_body(self.table_with_stats()),
                None => Response::notice(Notice::info(format!(
                    "Order {order_id} not found; nothing deleted"
                ))),
            },
            ConsoleCommand::Filter(status) => {
                self.view.status_filter = status;
                Response::body(self.table())
            }
            ConsoleCommand::Distance(km) => {
                self.view.max_distance = km;
                Response::body(self.table())
            }
            ConsoleCommand::Assign(km) => {
                if let Some(km) = km {
                    self.view.assign_max_distance = km;
                }
                match self.desk.assign_nearest(self.view.assign_max_distance) {
                    Some(order) => Response::notice(Notice::delivery_assigned(order)),
                    None => Response::notice(Notice::no_order_available()),
                }
            }
            ConsoleCommand::List => Response::body(self.table_with_stats()),
            ConsoleCommand::Html => {
                let markup = html_rows(&self.visible());
                if markup.show_empty_state {
                    Response::body(EMPTY_STATE_HTML.to_string())
                } else {
                    Response::body(markup.body)
                }
            }
            ConsoleCommand::Json => match serde_json::to_string_pretty(&self.visible()) {
                Ok(json) => Response::body(json),
                Err(err) => Response::notice(Notice::error(format!("Error: {err}"))),
            },
            ConsoleCommand::Stats => Response::body(stats_line(self.desk.stats())),
            ConsoleCommand::History(after) => Response::body(self.history(after.unwrap_or(0))),
            ConsoleCommand::Help => Response::body(HELP.to_string()),
            ConsoleCommand::Quit => Response {
                exit: true,
                ..Response::default()
            },
        }
    }

    fn visible(&self) -> Vec<&Order> {
        self.desk
            .list_visible(self.view.status_filter, self.view.max_distance)
    }

    fn table(&self) -> String {
        format!(
            "Showing {} orders within {} km\n{}",
            self.view.status_filter,
            self.view.max_distance,
            text_table(&self.visible())
        )
    }

    fn table_with_stats(&self) -> String {
        format!("{}{}\n", self.table(), stats_line(self.desk.stats()))
    }

    fn history(&self, after: u64) -> String {
        let history = self.desk.history();
        if history.is_empty() {
            return "No changes recorded\n".to_string();
        }
        let entries = history.since(after);
        if entries.is_empty() {
            return format!("No changes after #{after}\n");
        }

        entries
            .iter()
            .map(|r| {
                format!(
                    "#{} {} {} at {}\n",
                    r.sequence,
                    r.event.event_type(),
                    r.event.order().order_id(),
                    r.event.occurred_at().to_rfc3339()
                )
            })
            .collect()
    }
}
