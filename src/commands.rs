// commands.rs
mod admin;
mod help;

use crate::error::Error;
use crate::Data;

pub fn get_commands() -> Vec<poise::Command<Data, Error>> {
    vec![
        admin::admin(),
        help::help(),
    ]
}
