use std::io::Write;

use super::CheckError;
use crate::lookup::ProfileLookup;
use crate::nick;
use crate::presenter::{Presenter, Ticket};
use crate::status::Status;

const STATUS_TAKEN: u16 = 200;
const STATUS_FREE: u16 = 204;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Available,
    Taken,
}

impl Availability {
    pub fn status(&self) -> Status {
        match self {
            Availability::Available => Status::Available,
            Availability::Taken => Status::Unavailable,
        }
    }

    pub fn message(&self, name: &str) -> String {
        match self {
            Availability::Available => {
                format!("Good news! The nickname \"{}\" is available!", name)
            }
            Availability::Taken => format!("The nickname \"{}\" is already taken!", name),
        }
    }
}

pub struct Checker<L>
where
    L: ProfileLookup,
{
    lookup: L,
}

impl<L> Checker<L>
where
    L: ProfileLookup,
{
    pub fn new(lookup: L) -> Self {
        Self { lookup }
    }

    /// Checks a candidate that the caller already trimmed and shows every
    /// step on `presenter`. A check started later wins over this one: its
    /// statuses are dropped once a newer check has been issued.
    pub async fn check<W>(
        &self,
        name: &str,
        presenter: &Presenter<W>,
    ) -> Result<Availability, CheckError>
    where
        W: Write + Send,
    {
        let ticket = presenter.issue_ticket().await;
        self.check_with(ticket, name, presenter).await
    }

    /// Same as [`Checker::check`] with a ticket the caller took when the
    /// check was triggered.
    pub async fn check_with<W>(
        &self,
        ticket: Ticket,
        name: &str,
        presenter: &Presenter<W>,
    ) -> Result<Availability, CheckError>
    where
        W: Write + Send,
    {
        let result = self.run(name, presenter, ticket).await;

        let (message, status) = match &result {
            Ok(availability) => (availability.message(name), availability.status()),
            Err(err) => (err.to_string(), Status::Invalid),
        };
        Self::publish(presenter, ticket, message, status).await;

        result
    }

    async fn run<W>(
        &self,
        name: &str,
        presenter: &Presenter<W>,
        ticket: Ticket,
    ) -> Result<Availability, CheckError>
    where
        W: Write + Send,
    {
        if name.is_empty() {
            return Err(CheckError::EmptyInput);
        }
        if !nick::is_valid(name) {
            return Err(CheckError::InvalidFormat);
        }

        let message = format!("Checking \"{}\"...", name);
        Self::publish(presenter, ticket, message, Status::Loading).await;

        match self.lookup.lookup(name).await {
            Ok(STATUS_TAKEN) => Ok(Availability::Taken),
            Ok(STATUS_FREE) => Ok(Availability::Available),
            Ok(code) => {
                log::warn!("lookup of {} answered with status {}", name, code);
                Err(CheckError::UnexpectedStatus(code))
            }
            Err(err) => {
                log::error!("lookup of {} failed: {:#}", name, err);
                Err(CheckError::Transport(err.to_string()))
            }
        }
    }

    async fn publish<W>(presenter: &Presenter<W>, ticket: Ticket, message: String, status: Status)
    where
        W: Write + Send,
    {
        if let Err(err) = presenter.show(ticket, message, status).await {
            log::warn!("failed to render {} status: {:#}", status, err);
        }
    }
}

#[cfg(test)]
mod should {
    use super::*;
    use crate::lookup::MockProfileLookup;
    use crate::status::StatusView;
    use async_trait::async_trait;
    use mockall::predicate::eq;
    use std::sync::Arc;
    use tokio::sync::Notify;

    fn lookup_answering(name: &'static str, code: u16) -> MockProfileLookup {
        let mut lookup = MockProfileLookup::new();
        lookup
            .expect_lookup()
            .with(eq(name))
            .times(1)
            .returning(move |_| Ok(code));
        lookup
    }

    fn lookup_never_called() -> MockProfileLookup {
        let mut lookup = MockProfileLookup::new();
        lookup.expect_lookup().never();
        lookup
    }

    #[tokio::test]
    async fn prompt_for_empty_input_without_lookup() {
        let checker = Checker::new(lookup_never_called());
        let presenter = Presenter::new(Vec::<u8>::new());

        let result = checker.check("", &presenter).await;

        assert_eq!(result, Err(CheckError::EmptyInput));
        assert_eq!(
            presenter.view().await,
            Some(StatusView::new("Please enter a nickname.", Status::Invalid))
        );
    }

    #[tokio::test]
    async fn reject_too_short_name_without_lookup() {
        let checker = Checker::new(lookup_never_called());
        let presenter = Presenter::new(Vec::<u8>::new());

        let result = checker.check("ab", &presenter).await;

        assert_eq!(result, Err(CheckError::InvalidFormat));
        assert_eq!(presenter.view().await.unwrap().status, Status::Invalid);
    }

    #[tokio::test]
    async fn reject_forbidden_characters_without_lookup() {
        let checker = Checker::new(lookup_never_called());
        let presenter = Presenter::new(Vec::<u8>::new());

        let result = checker.check("bad name!", &presenter).await;

        assert_eq!(result, Err(CheckError::InvalidFormat));
    }

    #[tokio::test]
    async fn report_taken_name_as_unavailable() {
        let checker = Checker::new(lookup_answering("Valid_Name1", 200));
        let presenter = Presenter::new(Vec::<u8>::new());

        let result = checker.check("Valid_Name1", &presenter).await;

        assert_eq!(result, Ok(Availability::Taken));
        assert_eq!(
            presenter.view().await,
            Some(StatusView::new(
                "The nickname \"Valid_Name1\" is already taken!",
                Status::Unavailable
            ))
        );
    }

    #[tokio::test]
    async fn report_free_name_as_available() {
        let checker = Checker::new(lookup_answering("Valid_Name1", 204));
        let presenter = Presenter::new(Vec::<u8>::new());

        let result = checker.check("Valid_Name1", &presenter).await;

        assert_eq!(result, Ok(Availability::Available));
        assert_eq!(presenter.view().await.unwrap().status, Status::Available);
    }

    #[tokio::test]
    async fn ask_to_retry_on_unexpected_status() {
        let checker = Checker::new(lookup_answering("Valid_Name1", 500));
        let presenter = Presenter::new(Vec::<u8>::new());

        let result = checker.check("Valid_Name1", &presenter).await;

        assert_eq!(result, Err(CheckError::UnexpectedStatus(500)));
        assert_eq!(
            presenter.view().await,
            Some(StatusView::new(
                "Something went wrong while checking. Please try again.",
                Status::Invalid
            ))
        );
    }

    #[tokio::test]
    async fn report_connectivity_failure_on_transport_error() {
        let mut lookup = MockProfileLookup::new();
        lookup
            .expect_lookup()
            .times(1)
            .returning(|_| Err(anyhow::anyhow!("connection refused")));
        let checker = Checker::new(lookup);
        let presenter = Presenter::new(Vec::<u8>::new());

        let result = checker.check("Valid_Name1", &presenter).await;

        assert_eq!(
            result,
            Err(CheckError::Transport("connection refused".to_string()))
        );
        let view = presenter.view().await.unwrap();
        assert_eq!(view.status, Status::Invalid);
        assert_eq!(view.message, "Could not connect to the lookup server.");
    }

    #[tokio::test]
    async fn show_loading_before_the_answer() {
        let checker = Checker::new(lookup_answering("Steve", 204));
        let presenter = Presenter::new(Vec::<u8>::new());

        checker.check("Steve", &presenter).await.unwrap();

        let written = presenter
            .inspect_handle(|h| String::from_utf8(h.clone()).unwrap())
            .await;
        let loading = written.find("Checking \"Steve\"...").unwrap();
        let answer = written.find("is available!").unwrap();
        assert!(loading < answer);
    }

    struct GatedLookup {
        gate: Arc<Notify>,
        code: u16,
    }

    #[async_trait]
    impl ProfileLookup for GatedLookup {
        async fn lookup(&self, _name: &str) -> anyhow::Result<u16> {
            self.gate.notified().await;
            Ok(self.code)
        }
    }

    #[tokio::test]
    async fn not_overwrite_status_of_a_newer_check() {
        let gate = Arc::new(Notify::new());
        let presenter = Arc::new(Presenter::new(Vec::<u8>::new()));
        let slow = Arc::new(Checker::new(GatedLookup {
            gate: gate.clone(),
            code: 200,
        }));

        let old = tokio::spawn({
            let presenter = presenter.clone();
            async move { slow.check("OldName", &presenter).await }
        });
        while presenter.view().await.map(|v| v.status) != Some(Status::Loading) {
            tokio::task::yield_now().await;
        }

        let newer = Checker::new(lookup_never_called());
        let new_result = newer.check("", &presenter).await;
        gate.notify_one();
        let old_result = old.await.unwrap();

        assert_eq!(new_result, Err(CheckError::EmptyInput));
        assert_eq!(old_result, Ok(Availability::Taken));
        assert_eq!(
            presenter.view().await,
            Some(StatusView::new("Please enter a nickname.", Status::Invalid))
        );
    }
}
