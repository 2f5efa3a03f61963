//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use league_registry::{
    cli::{Commands, PlayerCmd, Registry, TeamCmd},
    commands::{
        players::{
            handle_delete_player, handle_edit_player, handle_list_players, handle_register_player,
        },
        roster::handle_roster,
        summary::handle_summary,
        teams::{handle_list_teams, handle_register_team},
    },
};

/// Run the CLI.
fn main() -> anyhow::Result<()> {
    let app = Registry::parse();

    match app.command {
        Commands::Team { cmd } => match cmd {
            TeamCmd::Register {
                db,
                name,
                league,
                season,
                paid,
            } => handle_register_team(&db, name, league, season, paid)?,

            TeamCmd::List { db, json } => handle_list_teams(&db, json)?,
        },

        Commands::Player { cmd } => match cmd {
            PlayerCmd::Register { db, form } => handle_register_player(&db, form)?,

            PlayerCmd::List { db, search, json } => handle_list_players(&db, search, json)?,

            PlayerCmd::Edit { db, id, form } => handle_edit_player(&db, id, form)?,

            PlayerCmd::Delete { db, id } => handle_delete_player(&db, id)?,
        },

        Commands::Summary { db, json } => handle_summary(&db, json)?,

        Commands::Roster { cmd } => handle_roster(cmd)?,
    }

    Ok(())
}
