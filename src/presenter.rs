use std::io::Write;

use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};
use crossterm::{cursor, queue};
use tokio::sync::Mutex;

use crate::status::{render, Status, StatusView};

pub const PROMPT: &str = "> ";

/// Sequence number of a check. Only the newest ticket may publish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

struct State<W> {
    handle: W,
    view: Option<StatusView>,
    latest: u64,
    prompting: bool,
}

/// Owns the result area: the current status view and the handle it is
/// rendered to. The area stays hidden until the first status is shown.
pub struct Presenter<W>
where
    W: Write + Send,
{
    state: Mutex<State<W>>,
}

impl<W> Presenter<W>
where
    W: Write + Send,
{
    pub fn new(handle: W) -> Self {
        Self {
            state: Mutex::new(State {
                handle,
                view: None,
                latest: 0,
                prompting: false,
            }),
        }
    }

    pub async fn issue_ticket(&self) -> Ticket {
        let mut state = self.state.lock().await;
        state.latest += 1;
        Ticket(state.latest)
    }

    /// Replaces the whole displayed status if `ticket` is still the newest
    /// one. Returns `false` when the update was dropped as stale.
    pub async fn show(
        &self,
        ticket: Ticket,
        message: impl Into<String>,
        status: Status,
    ) -> anyhow::Result<bool> {
        let mut state = self.state.lock().await;
        if ticket.0 != state.latest {
            log::debug!(
                "dropping stale {} status of check #{} (latest is #{})",
                status,
                ticket.0,
                state.latest
            );
            return Ok(false);
        }
        Self::replace(&mut state, StatusView::new(message, status))?;
        Ok(true)
    }

    /// Writes a line that is not part of the result area.
    pub async fn note(&self, text: &str) -> anyhow::Result<()> {
        let mut state = self.state.lock().await;
        Self::write_line(&mut state, text)
    }

    /// Shows the input prompt. From now on every written line is followed
    /// by the prompt again, so it stays below the latest output.
    pub async fn prompt(&self) -> anyhow::Result<()> {
        let mut state = self.state.lock().await;
        state.prompting = true;
        queue!(
            state.handle,
            cursor::MoveToColumn(0),
            Clear(ClearType::CurrentLine),
            Print(PROMPT)
        )?;
        state.handle.flush()?;
        Ok(())
    }

    pub async fn view(&self) -> Option<StatusView> {
        self.state.lock().await.view.clone()
    }

    #[cfg(test)]
    pub async fn inspect_handle<T>(&self, f: impl FnOnce(&mut W) -> T) -> T {
        f(&mut self.state.lock().await.handle)
    }

    fn replace(state: &mut State<W>, view: StatusView) -> anyhow::Result<()> {
        let line = render(&view);
        log::debug!("result area is now {}", view.status.style_class());
        state.view = Some(view);
        Self::write_line(state, &line)
    }

    fn write_line(state: &mut State<W>, text: &str) -> anyhow::Result<()> {
        queue!(
            state.handle,
            cursor::MoveToColumn(0),
            Clear(ClearType::CurrentLine),
            Print(text),
            Print("\n")
        )?;
        if state.prompting {
            queue!(state.handle, Print(PROMPT))?;
        }
        state.handle.flush()?;
        Ok(())
    }
}
