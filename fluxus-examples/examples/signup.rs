//! A signup pipeline: validate the email, create the account, send a welcome.
//!
//! Each stage is a caller. A rejected email short-circuits the pipeline as a
//! modeled failure; a flaky mailer raises an error that the capturing strategy
//! turns into an `exception` failure instead of aborting.

use fluxus::{Arguments, BoxError, Caller, Capture, Kind, Outcome, Payload, Propagate, Run};
use fluxus_examples::logging;
use serde::Deserialize;
use serde_json::{Value, json};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("mail server unavailable for {0}")]
struct MailerUnavailable(String);

#[derive(Deserialize)]
struct Email {
    email: String,
}

enum ValidateEmail {}

impl Caller for ValidateEmail {
    type Input = Email;
    type Strategy = Propagate;

    fn perform(run: &mut Run, Email { email }: Email) -> Result<(), BoxError> {
        match email.split_once('@') {
            Some((user, domain)) if !user.is_empty() && domain.contains('.') => {
                run.success("valid", json!({ "email": email, "user": user }));
            }
            _ => run.failure("invalid_email", format!("`{email}` is not an email")),
        }
        Ok(())
    }
}

#[derive(Deserialize)]
struct Account {
    email: String,
    user: String,
    plan: String,
}

enum CreateAccount {}

impl Caller for CreateAccount {
    type Input = Account;
    type Strategy = Propagate;

    fn perform(run: &mut Run, account: Account) -> Result<(), BoxError> {
        run.success(
            "created",
            json!({ "email": account.email, "user": account.user, "plan": account.plan }),
        );
        Ok(())
    }
}

enum SendWelcome {}

impl Caller for SendWelcome {
    type Input = Account;
    type Strategy = Capture;

    fn perform(run: &mut Run, account: Account) -> Result<(), BoxError> {
        let Account { email, user, plan } = account;
        if email.ends_with(".invalid") {
            return Err(MailerUnavailable(email).into());
        }
        run.ok(format!("welcome sent to {user} ({plan} plan)"));
        Ok(())
    }
}

fn signup(email: &str) -> Result<Outcome, fluxus::Error> {
    ValidateEmail::call(Arguments::new().with("email", email))?
        .then_with::<CreateAccount>(Arguments::new().with("plan", "free"))?
        .then::<SendWelcome>()
}

fn shown(data: &Payload) -> &Value {
    data.as_value().unwrap_or(&Value::Null)
}

fn report(email: &str, outcome: Outcome) {
    let _ = outcome
        .on_success(|data| println!("{email}: {}", shown(data)))
        .on_failure_kind("invalid_email", |data| {
            println!("{email}: rejected, {}", shown(data));
        })
        .on_exception_of::<MailerUnavailable, _>(|error| {
            println!("{email}: account created but {error}");
        });
}

fn main() -> Result<(), fluxus::Error> {
    logging::init();

    for email in ["jane@example.com", "not-an-email", "john@example.invalid"] {
        let outcome = signup(email)?;
        assert!(!outcome.is_unknown());
        if outcome.kind() == &Kind::EXCEPTION {
            tracing::info!(email, "signup finished with a captured error");
        }
        report(email, outcome);
    }

    Ok(())
}
