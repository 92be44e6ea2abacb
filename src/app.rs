//! Ventry application runtime (terminal lifecycle, async workers, and the
//! event loop).
//!
//! This module encapsulates the entire TUI runtime so the binary entrypoint
//! stays minimal. Networking runs on background tasks; the loop owns the
//! [`AppState`] and applies results as they arrive.

use std::time::Duration;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

use crossterm::{
    event::{self, Event as CEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::{select, sync::mpsc, time::sleep};

use crate::api::{ApiClient, Mutation, MutationOutcome};
use crate::config::Settings;
use crate::query::{FetchRequest, PageResult, Query};
use crate::state::{AppState, Metrics, Modal, PageWindow};
use crate::ui::ui;

/// Quiet window before a fetch request is actually dispatched. Coalesces
/// bursts of keystrokes into one backend call.
const FETCH_DEBOUNCE_MS: u64 = 120;

fn setup_terminal() -> Result<()> {
    enable_raw_mode()?;
    execute!(std::io::stdout(), EnterAlternateScreen)?;
    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(std::io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Fetch the category list in the background. Needed at startup and after
/// a create or update may have introduced a new category.
fn spawn_categories_fetch(
    client: &ApiClient,
    categories_tx: &mpsc::UnboundedSender<Vec<String>>,
    err_tx: &mpsc::UnboundedSender<String>,
) {
    let c = client.clone();
    let tx = categories_tx.clone();
    let etx = err_tx.clone();
    tokio::spawn(async move {
        match c.list_categories().await {
            Ok(list) => {
                let _ = tx.send(list);
            }
            Err(e) => {
                let _ = etx.send(e.to_string());
            }
        }
    });
}

/// Fetch the metrics summary in the background. Needed at startup and after
/// every successful mutation, since only mutations change the aggregates.
fn spawn_metrics_fetch(
    client: &ApiClient,
    metrics_tx: &mpsc::UnboundedSender<Metrics>,
    err_tx: &mpsc::UnboundedSender<String>,
) {
    let c = client.clone();
    let tx = metrics_tx.clone();
    let etx = err_tx.clone();
    tokio::spawn(async move {
        match c.get_metrics().await {
            Ok(m) => {
                let _ = tx.send(m);
            }
            Err(e) => {
                let _ = etx.send(e.to_string());
            }
        }
    });
}

/// Roll back the optimistic badge flip that preceded a failed stock call.
fn rollback_badge(app: &mut AppState, mutation: &Mutation) {
    match mutation {
        Mutation::MarkOutOfStock(id) => app.table.set_mark(*id, false),
        Mutation::MarkInStock(id) => app.table.set_mark(*id, true),
        _ => {}
    }
}

/// Apply a mutation completion to the state.
///
/// Failed create/update submissions stay in the open form with the message
/// inline so the buffered input survives; other failures roll back the
/// optimistic badge and raise the alert modal. Success closes the form and
/// schedules a refresh.
fn apply_outcome(app: &mut AppState, outcome: MutationOutcome) {
    match outcome.error {
        Some(msg) => {
            tracing::error!(mutation = ?outcome.mutation, error = %msg, "mutation failed");
            if let (Mutation::Create(_) | Mutation::Update(..), Modal::Form(form)) =
                (&outcome.mutation, &mut app.modal)
            {
                form.error = Some(msg);
                form.submitting = false;
            } else {
                rollback_badge(app, &outcome.mutation);
                app.modal = Modal::Alert { message: msg };
            }
        }
        None => {
            tracing::info!(mutation = ?outcome.mutation, "mutation applied");
            if matches!(
                outcome.mutation,
                Mutation::Create(_) | Mutation::Update(..)
            ) && matches!(app.modal, Modal::Form(_))
            {
                app.modal = Modal::None;
            }
            app.request_refresh();
        }
    }
}

/// Start the Ventry TUI runtime and run the main event loop.
///
/// Initializes the terminal, spawns the input reader and the fetch and
/// mutation workers, then drives rendering and input handling until the
/// user quits. Returns `Ok(())` on normal shutdown.
pub async fn run(settings: Settings) -> Result<()> {
    setup_terminal()?;

    let mut terminal = Terminal::new(CrosstermBackend::new(std::io::stdout()))?;

    let mut app = AppState {
        pages: PageWindow::new(settings.page_size_default),
        metrics_visible: true,
        ..Default::default()
    };
    if let Some(col) = settings.sort_default {
        app.sort.toggle(col);
    }
    app.request_refresh();

    let client = ApiClient::new(&settings.api_base_url);

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<CEvent>();
    let (fetch_tx, mut fetch_rx) = mpsc::unbounded_channel::<FetchRequest>();
    let (result_tx, mut result_rx) = mpsc::unbounded_channel::<PageResult>();
    let (mutate_tx, mut mutate_rx) = mpsc::unbounded_channel::<Mutation>();
    let (outcome_tx, mut outcome_rx) = mpsc::unbounded_channel::<MutationOutcome>();
    let (categories_tx, mut categories_rx) = mpsc::unbounded_channel::<Vec<String>>();
    let (metrics_tx, mut metrics_rx) = mpsc::unbounded_channel::<Metrics>();
    let (err_tx, mut err_rx) = mpsc::unbounded_channel::<String>();

    // Input reader. Blocking crossterm polling stays off the async runtime.
    std::thread::spawn(move || {
        loop {
            if let Ok(true) = event::poll(Duration::from_millis(50))
                && let Ok(ev) = event::read()
                && event_tx.send(ev).is_err()
            {
                break;
            }
        }
    });

    // Debounced list fetcher: drain to the newest request, wait out the
    // quiet window, then hit the backend once.
    {
        let client = client.clone();
        let err_tx = err_tx.clone();
        tokio::spawn(async move {
            loop {
                let Some(mut latest) = fetch_rx.recv().await else {
                    break;
                };
                loop {
                    select! {
                        Some(next) = fetch_rx.recv() => { latest = next; }
                        () = sleep(Duration::from_millis(FETCH_DEBOUNCE_MS)) => { break; }
                    }
                }
                let client = client.clone();
                let result_tx = result_tx.clone();
                let err_tx = err_tx.clone();
                tokio::spawn(async move {
                    match client.fetch_items(&latest.query).await {
                        Ok(page) => {
                            let _ = result_tx.send(PageResult {
                                seq: latest.seq,
                                items: page.items,
                                total_items: page.total_items,
                            });
                        }
                        Err(e) => {
                            let _ = err_tx.send(e.to_string());
                        }
                    }
                });
            }
        });
    }

    // Mutation worker: runs calls in arrival order and reports each outcome.
    {
        let client = client.clone();
        tokio::spawn(async move {
            while let Some(mutation) = mutate_rx.recv().await {
                let error = client.apply(&mutation).await.err().map(|e| e.to_string());
                let _ = outcome_tx.send(MutationOutcome { mutation, error });
            }
        });
    }

    spawn_categories_fetch(&client, &categories_tx, &err_tx);
    spawn_metrics_fetch(&client, &metrics_tx, &err_tx);

    loop {
        if app.take_refresh() {
            let seq = app.allocate_seq();
            let query = Query::build(&app.filters, &app.sort, &app.pages);
            let _ = fetch_tx.send(FetchRequest { seq, query });
        }

        let _ = terminal.draw(|f| ui(f, &mut app));

        select! {
            Some(ev) = event_rx.recv() => {
                if crate::events::handle_event(ev, &mut app, &mutate_tx) {
                    break;
                }
            }
            Some(result) = result_rx.recv() => {
                // A newer query is in flight; this page is already stale.
                if result.seq != app.latest_seq {
                    continue;
                }
                if result.total_items != app.pages.total_items() {
                    app.pages.set_total_items(result.total_items);
                    app.request_refresh();
                }
                app.pages.clamp_current();
                app.table.set_rows(result.items);
            }
            Some(outcome) = outcome_rx.recv() => {
                let succeeded = outcome.error.is_none();
                let may_add_category = matches!(
                    outcome.mutation,
                    Mutation::Create(_) | Mutation::Update(..)
                );
                apply_outcome(&mut app, outcome);
                if succeeded {
                    spawn_metrics_fetch(&client, &metrics_tx, &err_tx);
                    if may_add_category {
                        spawn_categories_fetch(&client, &categories_tx, &err_tx);
                    }
                }
            }
            Some(list) = categories_rx.recv() => { app.categories = list; }
            Some(m) = metrics_rx.recv() => { app.metrics = Some(m); }
            Some(msg) = err_rx.recv() => {
                tracing::error!(error = %msg, "backend error");
                app.modal = Modal::Alert { message: msg };
            }
        }
    }

    restore_terminal()?;
    Ok(())
}
