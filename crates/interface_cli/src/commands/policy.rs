//! Policy command handlers

use core_kernel::{Amount, ClientId, InsuraDate, PolicyId, PolicyTypeId};
use domain_policy::{Policy, PolicyDraft};
use serde_json::json;

use crate::cli::{PolicyAddArgs, PolicyCommand};
use crate::commands::Session;

pub fn run(command: PolicyCommand, session: &mut Session) -> anyhow::Result<()> {
    match command {
        PolicyCommand::Add(args) => add(session, args),
        PolicyCommand::Delete { id } => delete(session, id),
        PolicyCommand::List => list(session),
        PolicyCommand::Expiring => expiring(session),
    }
}

fn add(session: &mut Session, args: PolicyAddArgs) -> anyhow::Result<()> {
    let draft = PolicyDraft {
        client_id: ClientId::new(args.client)?,
        policy_type_id: PolicyTypeId::new(args.policy_type)?,
        effective: InsuraDate::new(args.effective)?,
        expiry: InsuraDate::new(args.expiry)?,
        coverage_limit: Amount::new(args.limit)?,
    };

    let id = session.book_mut().add_policy(draft)?;
    session.commit()?;
    session.confirm(format!("Issued policy {id}"), json!({"issued": id.as_str()}))
}

fn delete(session: &mut Session, id: String) -> anyhow::Result<()> {
    let id = PolicyId::new(id)?;
    session.book_mut().remove_policy(&id)?;
    session.commit()?;
    session.confirm(format!("Deleted policy {id}"), json!({"deleted": id.as_str()}))
}

fn list(session: &Session) -> anyhow::Result<()> {
    let policies: Vec<&Policy> = session.book().policies().collect();
    session.render_all(&policies, describe)
}

fn expiring(session: &Session) -> anyhow::Result<()> {
    let policies = session.book().expiring_policies();
    session.render_all(&policies, describe)
}

/// One line per policy for list output
fn describe(policy: &Policy) -> String {
    format!(
        "{}  client {}  type {}  {} to {}  limit {}",
        policy.id,
        policy.client_id,
        policy.policy_type_id,
        policy.effective,
        policy.expiry,
        policy.coverage_limit
    )
}
