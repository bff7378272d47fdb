use std::io::Write;
use std::sync::Arc;

use rand::Rng;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::task::JoinHandle;

use super::Action;
use crate::check::{Availability, CheckError, Checker};
use crate::lookup::ProfileLookup;
use crate::nick::Nickname;
use crate::presenter::Presenter;

pub type CheckResult = Result<Availability, CheckError>;

/// Outcome of dispatching one action.
#[derive(Debug)]
pub enum Flow {
    Continue,
    Pending(JoinHandle<CheckResult>),
    Exit,
}

/// Wires the triggers (generate, check) to the generator and the checker.
pub struct App<L, W>
where
    L: ProfileLookup,
    W: Write + Send,
{
    checker: Arc<Checker<L>>,
    presenter: Arc<Presenter<W>>,
}

impl<L, W> Clone for App<L, W>
where
    L: ProfileLookup,
    W: Write + Send,
{
    fn clone(&self) -> Self {
        Self {
            checker: self.checker.clone(),
            presenter: self.presenter.clone(),
        }
    }
}

impl<L, W> App<L, W>
where
    L: ProfileLookup + 'static,
    W: Write + Send + 'static,
{
    pub fn new(lookup: L, handle: W) -> Self {
        Self {
            checker: Arc::new(Checker::new(lookup)),
            presenter: Arc::new(Presenter::new(handle)),
        }
    }

    pub fn presenter(&self) -> &Presenter<W> {
        &self.presenter
    }

    /// The check trigger. `input` is trimmed before it is checked.
    pub async fn check(&self, input: &str) -> CheckResult {
        let candidate = input.trim();
        log::info!("checking {:?}", candidate);
        self.checker.check(candidate, &self.presenter).await
    }

    /// The generate trigger: draws a nickname, puts it on the input line
    /// and checks it right away.
    pub async fn generate<R>(&self, rng: &mut R) -> (Nickname, CheckResult)
    where
        R: Rng + ?Sized,
    {
        let name = self.fill_generated(rng).await;
        let result = self.checker.check(&name, &self.presenter).await;
        (name, result)
    }

    /// Checks run as their own tasks so the prompt stays responsive. The
    /// ticket is taken here, in trigger order, not when the task starts.
    pub async fn dispatch(&self, action: Action) -> Flow {
        match action {
            Action::Check(input) => {
                let app = self.clone();
                let ticket = self.presenter.issue_ticket().await;
                Flow::Pending(tokio::spawn(async move {
                    let candidate = input.trim();
                    log::info!("checking {:?}", candidate);
                    app.checker
                        .check_with(ticket, candidate, &app.presenter)
                        .await
                }))
            }
            Action::Generate => {
                let app = self.clone();
                let name: Nickname = rand::thread_rng().gen();
                let ticket = self.presenter.issue_ticket().await;
                Flow::Pending(tokio::spawn(async move {
                    app.echo_input(&name).await;
                    app.checker.check_with(ticket, &name, &app.presenter).await
                }))
            }
            Action::Help => {
                self.echo_note(&Action::help()).await;
                Flow::Continue
            }
            Action::Exit => Flow::Exit,
        }
    }

    /// Reads lines until `/exit` or end of input. Checks still in flight
    /// at that point are awaited, not aborted.
    pub async fn run<R>(&self, reader: R) -> anyhow::Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        self.presenter.note(&Action::help()).await?;

        let mut pending: Vec<JoinHandle<CheckResult>> = Vec::new();
        let mut lines = reader.lines();
        loop {
            self.presenter.prompt().await?;
            let Some(line) = lines.next_line().await? else {
                break;
            };
            pending.retain(|handle| !handle.is_finished());

            let action = match line.parse::<Action>() {
                Ok(action) => action,
                Err(err) => {
                    self.presenter.note(&err.to_string()).await?;
                    continue;
                }
            };

            match self.dispatch(action).await {
                Flow::Continue => {}
                Flow::Pending(handle) => pending.push(handle),
                Flow::Exit => break,
            }
        }

        for handle in pending {
            if let Err(err) = handle.await {
                log::error!("check task failed: {}", err);
            }
        }
        if let Some(view) = self.presenter.view().await {
            log::debug!("leaving with {} status: {}", view.status, view.message);
        }
        Ok(())
    }

    async fn fill_generated<R>(&self, rng: &mut R) -> Nickname
    where
        R: Rng + ?Sized,
    {
        let name: Nickname = rng.gen();
        self.echo_input(&name).await;
        name
    }

    async fn echo_input(&self, name: &str) {
        log::info!("generated {}", name);
        self.echo_note(&format!("> {}", name)).await;
    }

    async fn echo_note(&self, text: &str) {
        if let Err(err) = self.presenter.note(text).await {
            log::warn!("failed to write to the terminal: {:#}", err);
        }
    }
}

/// Process exit status for a one-shot check.
pub fn exit_status(result: &CheckResult) -> u8 {
    match result {
        Ok(Availability::Available) => 0,
        Ok(Availability::Taken) => 1,
        Err(_) => 2,
    }
}
