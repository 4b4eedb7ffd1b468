//! Client command handlers

use core_kernel::{ClientId, InsuraDate, Name, Tag};
use domain_client::{Address, Client, ClientError, Email, Phone};
use serde_json::json;

use crate::cli::{ClientAddArgs, ClientCommand};
use crate::commands::Session;

pub fn run(command: ClientCommand, session: &mut Session) -> anyhow::Result<()> {
    match command {
        ClientCommand::Add(args) => add(session, args),
        ClientCommand::Delete { id } => delete(session, id),
        ClientCommand::Show { id } => show(session, id),
        ClientCommand::Find { keyword } => find(session, &keyword),
        ClientCommand::List => list(session),
        ClientCommand::Birthdays => birthdays(session),
    }
}

fn add(session: &mut Session, args: ClientAddArgs) -> anyhow::Result<()> {
    let id = ClientId::new(args.id)?;
    let mut client = Client::new(
        id.clone(),
        Name::new(args.name)?,
        InsuraDate::new(args.birthday)?,
    );
    if let Some(phone) = args.phone {
        client = client.with_phone(Phone::new(phone)?);
    }
    if let Some(email) = args.email {
        client = client.with_email(Email::new(email)?);
    }
    if let Some(address) = args.address {
        client = client.with_address(Address::new(address)?);
    }
    for tag in args.tags {
        client = client.with_tag(Tag::new(tag)?);
    }

    session.book_mut().add_client(client)?;
    session.commit()?;
    session.confirm(format!("Added client {id}"), json!({"added": id.as_str()}))
}

fn delete(session: &mut Session, id: String) -> anyhow::Result<()> {
    let id = ClientId::new(id)?;
    session.book_mut().remove_client(&id)?;
    session.commit()?;
    session.confirm(format!("Deleted client {id}"), json!({"deleted": id.as_str()}))
}

fn show(session: &Session, id: String) -> anyhow::Result<()> {
    let id = ClientId::new(id)?;
    let client = session
        .book()
        .find_client(&id)
        .ok_or_else(|| ClientError::not_found(&id))?;
    session.render_one(client, detail(client))
}

fn find(session: &Session, keyword: &str) -> anyhow::Result<()> {
    let clients = session.book().clients_named(keyword);
    session.render_all(&clients, describe)
}

fn list(session: &Session) -> anyhow::Result<()> {
    let clients: Vec<&Client> = session.book().clients().collect();
    session.render_all(&clients, describe)
}

fn birthdays(session: &Session) -> anyhow::Result<()> {
    let clients = session.book().birthday_clients();
    session.render_all(&clients, describe)
}

/// One line per client for list output
fn describe(client: &Client) -> String {
    let mut line = format!("{}  {}  born {}", client.id, client.name, client.birthday);
    if !client.tags.is_empty() {
        let tags: Vec<&str> = client.tags.iter().map(Tag::as_str).collect();
        line.push_str(&format!("  [{}]", tags.join(", ")));
    }
    line
}

/// Full record for show output
fn detail(client: &Client) -> String {
    let mut lines = vec![
        format!("Client {}", client.id),
        format!("  name      {}", client.name),
        format!("  birthday  {}", client.birthday),
    ];
    if let Some(phone) = &client.phone {
        lines.push(format!("  phone     {phone}"));
    }
    if let Some(email) = &client.email {
        lines.push(format!("  email     {email}"));
    }
    if let Some(address) = &client.address {
        lines.push(format!("  address   {address}"));
    }
    if !client.tags.is_empty() {
        let tags: Vec<&str> = client.tags.iter().map(Tag::as_str).collect();
        lines.push(format!("  tags      {}", tags.join(", ")));
    }
    lines.join("\n")
}
