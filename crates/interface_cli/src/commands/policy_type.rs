//! Policy type command handlers

use core_kernel::{Amount, Description, Name, PolicyTypeId};
use domain_policy::PolicyType;
use serde_json::json;

use crate::cli::{PolicyTypeAddArgs, PolicyTypeCommand};
use crate::commands::Session;

pub fn run(command: PolicyTypeCommand, session: &mut Session) -> anyhow::Result<()> {
    match command {
        PolicyTypeCommand::Add(args) => add(session, args),
        PolicyTypeCommand::Delete { id } => delete(session, id),
        PolicyTypeCommand::List => list(session),
    }
}

fn add(session: &mut Session, args: PolicyTypeAddArgs) -> anyhow::Result<()> {
    let id = PolicyTypeId::new(args.id)?;
    let policy_type = PolicyType::new(
        id.clone(),
        Name::new(args.name)?,
        args.description.map(Description::from).unwrap_or_default(),
        Amount::new(args.premium)?,
    );

    session.book_mut().add_policy_type(policy_type)?;
    session.commit()?;
    session.confirm(
        format!("Added policy type {id}"),
        json!({"added": id.as_str()}),
    )
}

fn delete(session: &mut Session, id: String) -> anyhow::Result<()> {
    let id = PolicyTypeId::new(id)?;
    session.book_mut().remove_policy_type(&id)?;
    session.commit()?;
    session.confirm(
        format!("Deleted policy type {id}"),
        json!({"deleted": id.as_str()}),
    )
}

fn list(session: &Session) -> anyhow::Result<()> {
    let policy_types: Vec<&PolicyType> = session.book().policy_types().collect();
    session.render_all(&policy_types, describe)
}

/// One line per policy type for list output
fn describe(policy_type: &PolicyType) -> String {
    let mut line = format!(
        "{}  {}  premium {}",
        policy_type.id, policy_type.name, policy_type.premium
    );
    if !policy_type.description.is_empty() {
        line.push_str(&format!("  {}", policy_type.description));
    }
    line
}
