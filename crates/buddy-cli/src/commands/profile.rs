/// Sign-in command handlers
use anyhow::Result;
use std::path::Path;

use super::session::Session;

pub fn handle_login(db_path: &Path, name: &str, pin: Option<&str>) -> Result<()> {
    let mut session = Session::open(db_path)?;
    let state = session.state.clone().sign_in(name, pin)?;
    session.commit(state)?;

    let name = session.state.user_name()?;
    println!("Signed in as {name}.");
    if session.state.history.is_empty() {
        println!("Say hi with: buddy chat \"hello\"");
    }
    Ok(())
}

pub fn handle_logout(db_path: &Path) -> Result<()> {
    let mut session = Session::open(db_path)?;
    if session.state.profile.is_none() {
        println!("Nobody is signed in.");
        return Ok(());
    }

    let state = session.state.clone().sign_out();
    session.commit(state)?;
    println!("Signed out. Your tracking data and chat history are kept.");
    Ok(())
}

pub fn handle_whoami(db_path: &Path) -> Result<()> {
    let session = Session::open(db_path)?;
    match &session.state.profile {
        Some(profile) => {
            println!("{}", profile.name);
            println!(
                "  Signed in since: {}",
                profile.created_at.format("%Y-%m-%d %H:%M UTC")
            );
            println!(
                "  PIN: {}",
                if profile.pin.is_some() { "set" } else { "not set" }
            );
        }
        None => println!("Not signed in. Run: buddy login <name>"),
    }
    Ok(())
}
