use match_table_api::Error;
use match_table_core::{
    Match, MatchList, MatchResult, Notifier, Status, Ticket, TournamentId, Value,
};
use yew::{html, Component, Context, Html, Properties};

use crate::components::providers::{ClientProvider, Provider};
use crate::components::Loader;
use crate::services::{BrowserDownload, ToastNotifier};
use crate::styles::ClassNames;
use crate::utils::Rc;

/// The column headers of the table. The outcome is only part of the export.
const COLUMNS: [&str; 7] = [
    "Match ID", "Round", "Pool", "Team 1", "Team 2", "Result", "Status",
];

const WALKOVER_BADGE_STYLE: &str = "margin-left: 8px; background: #ffe5e5; color: #b00020; \
    padding: 3px 6px; border-radius: 6px; font-size: 12px; font-weight: 600;";

#[derive(Clone, PartialEq, Properties)]
pub struct Props {
    /// The tournament to show the matches of. Nothing is loaded while this is `None`.
    #[prop_or_default]
    pub tournament_id: Option<TournamentId>,
    #[prop_or_default]
    pub classes: ClassNames,
    /// Receives the notifications of the table. Defaults to [`ToastNotifier`].
    #[prop_or_default]
    pub notifier: Option<Rc<dyn Notifier>>,
}

impl Props {
    fn notifier(&self) -> &dyn Notifier {
        match &self.notifier {
            Some(notifier) => &**notifier,
            None => &ToastNotifier,
        }
    }
}

/// A table of all matches of a tournament with an option to export them as CSV.
#[derive(Debug)]
pub struct MatchTable {
    list: MatchList,
}

impl Component for MatchTable {
    type Message = Message;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let mut this = Self {
            list: MatchList::new(),
        };

        this.load(ctx);
        this
    }

    // Only reload when the tournament changed. Changes to other properties only need a
    // rerender.
    fn changed(&mut self, ctx: &Context<Self>) -> bool {
        let tournament_id = ctx
            .props()
            .tournament_id
            .as_ref()
            .filter(|id| id.is_present());

        if tournament_id != self.list.tournament_id() {
            self.load(ctx);
        }

        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Message::Loaded(ticket, result) => {
                self.list.complete(ticket, result, ctx.props().notifier());
                true
            }
            Message::Export => {
                let _ = self.list.export(BrowserDownload, ctx.props().notifier());
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let classes = &ctx.props().classes;

        let rows = match body(&self.list, classes) {
            Body::Loading => {
                return html! {
                    <Loader class={classes.loading.clone()} text="Loading matches..." />
                };
            }
            Body::Table(rows) => rows,
        };

        let onclick = ctx.link().callback(|_| Message::Export);

        let header: Html = COLUMNS
            .iter()
            .map(|column| html! { <th>{ *column }</th> })
            .collect();

        let rows: Html = rows
            .into_iter()
            .map(|row| render_row(row, classes))
            .collect();

        html! {
            <div class={classes.container.clone()}>
                <div class={classes.header.clone()}>
                    <button class={classes.export_button.clone()} {onclick}>
                        { "Export to CSV" }
                    </button>
                </div>
                <div class={classes.table_wrapper.clone()}>
                    <table class={classes.table.clone()}>
                        <thead>
                            <tr>
                                { header }
                            </tr>
                        </thead>
                        <tbody>
                            { rows }
                        </tbody>
                    </table>
                </div>
            </div>
        }
    }
}

impl MatchTable {
    /// Starts loading the matches of the tournament in the current properties.
    fn load(&mut self, ctx: &Context<Self>) {
        let ticket = match self.list.select(ctx.props().tournament_id.clone()) {
            Some(ticket) => ticket,
            None => return,
        };

        let client = ClientProvider::get(ctx);

        ctx.link().send_future(async move {
            let result = client.fixtures().list(ticket.tournament_id()).await;

            Message::Loaded(ticket, result)
        });
    }
}

/// The content of the table for a state of the [`MatchList`].
#[derive(Clone, Debug, PartialEq)]
enum Body<'a> {
    Loading,
    Table(Vec<Row<'a>>),
}

/// A single rendered match.
#[derive(Clone, Debug, PartialEq)]
struct Row<'a> {
    key: String,
    match_id: &'a Value,
    round: String,
    pool: String,
    team1: &'a Value,
    team2: &'a Value,
    result: MatchResult<'a>,
    status: &'a Status,
    status_class: String,
}

fn body<'a>(list: &'a MatchList, classes: &ClassNames) -> Body<'a> {
    if list.is_loading() {
        return Body::Loading;
    }

    let rows = list
        .matches()
        .iter()
        .enumerate()
        .map(|(index, m)| Row {
            key: row_key(index, m),
            match_id: &m.match_id,
            round: m.round_label(),
            pool: m.pool_label(),
            team1: &m.team1_players,
            team2: &m.team2_players,
            result: m.result(),
            status: m.status(),
            status_class: status_class(classes, m.status()),
        })
        .collect();

    Body::Table(rows)
}

/// Rows are keyed by their match id. Matches without an id are keyed by their position.
fn row_key(index: usize, m: &Match) -> String {
    if m.match_id.is_null() {
        format!("#{}", index)
    } else {
        m.match_id.to_string()
    }
}

fn status_class(classes: &ClassNames, status: &Status) -> String {
    let class = classes.status_class(status.style());

    [classes.status.as_str(), class]
        .iter()
        .filter(|class| !class.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_row(row: Row<'_>, classes: &ClassNames) -> Html {
    let result = match row.result {
        MatchResult::Walkover { winner } => html! {
            <>
                <strong>{ winner }</strong>
                <span class={classes.walkover_badge.clone()} style={WALKOVER_BADGE_STYLE}>
                    { "Walkover" }
                </span>
            </>
        },
        MatchResult::Played(result) => html! { { result } },
    };

    html! {
        <tr key={row.key}>
            <td>{ row.match_id }</td>
            <td>{ row.round }</td>
            <td>{ row.pool }</td>
            <td>{ row.team1 }</td>
            <td>{ row.team2 }</td>
            <td>{ result }</td>
            <td>
                <span class={row.status_class}>{ row.status }</span>
            </td>
        </tr>
    }
}

#[derive(Debug)]
pub enum Message {
    Loaded(Ticket, Result<Option<Vec<Match>>, Error>),
    Export,
}
