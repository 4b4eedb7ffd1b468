//! Claim command handlers

use core_kernel::{Amount, ClaimId, ClientId, Description, InsuraDate, PolicyId};
use domain_claims::{Claim, ClaimDraft};
use serde_json::json;

use crate::cli::{ClaimAddArgs, ClaimCommand};
use crate::commands::Session;

pub fn run(command: ClaimCommand, session: &mut Session) -> anyhow::Result<()> {
    match command {
        ClaimCommand::Add(args) => add(session, args),
        ClaimCommand::Delete { id } => delete(session, id),
        ClaimCommand::List { policy } => list(session, policy),
    }
}

fn add(session: &mut Session, args: ClaimAddArgs) -> anyhow::Result<()> {
    let draft = ClaimDraft {
        client_id: ClientId::new(args.client)?,
        policy_id: PolicyId::new(args.policy)?,
        amount: Amount::new(args.amount)?,
        date: InsuraDate::new(args.date)?,
        description: args.description.map(Description::from).unwrap_or_default(),
    };

    let id = session.book_mut().file_claim(draft)?;
    session.commit()?;
    session.confirm(format!("Filed claim {id}"), json!({"filed": id.as_str()}))
}

fn delete(session: &mut Session, id: String) -> anyhow::Result<()> {
    let id = ClaimId::new(id)?;
    session.book_mut().remove_claim(&id)?;
    session.commit()?;
    session.confirm(format!("Deleted claim {id}"), json!({"deleted": id.as_str()}))
}

fn list(session: &Session, policy: Option<String>) -> anyhow::Result<()> {
    match policy {
        Some(policy) => {
            let policy_id = PolicyId::new(policy)?;
            let claims: Vec<&Claim> = session.book().claims_against(&policy_id).collect();
            session.render_all(&claims, describe)
        }
        None => {
            let claims: Vec<&Claim> = session.book().claims().collect();
            session.render_all(&claims, describe)
        }
    }
}

/// One line per claim for list output
fn describe(claim: &Claim) -> String {
    let mut line = format!(
        "{}  client {}  policy {}  {} on {}",
        claim.id, claim.client_id, claim.policy_id, claim.amount, claim.date
    );
    if !claim.description.is_empty() {
        line.push_str(&format!("  {}", claim.description));
    }
    line
}
