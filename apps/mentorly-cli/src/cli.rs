//! Command line definition.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use mentorly_core::domain::TimeSlot;

#[derive(Debug, Parser)]
#[command(name = "mentorly", version, about = "Mentorly terminal client")]
pub struct Cli {
    /// Use the in-memory API even if MENTORLY_API_URL is set.
    #[arg(long, global = true)]
    pub offline: bool,

    /// Answer yes to every confirmation.
    #[arg(short = 'y', long, global = true)]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Edit a community post you wrote.
    EditPost {
        /// Post identifier.
        id: String,

        /// New title (at most 30 characters).
        #[arg(long)]
        title: Option<String>,

        /// New content (at most 1000 characters).
        #[arg(long)]
        content: Option<String>,

        /// Leave the editor without saving.
        #[arg(long, conflicts_with_all = ["title", "content"])]
        cancel: bool,
    },

    /// Register a mentoring schedule slot.
    Schedule {
        /// Email of the signed-in user.
        #[arg(long, env = "MENTORLY_EMAIL")]
        email: Option<String>,

        /// Day to book, YYYY-MM-DD. Defaults to today.
        #[arg(long)]
        day: Option<NaiveDate>,

        /// Time slot, HH:mm.
        #[arg(long)]
        time: Option<TimeSlot>,

        /// Register as a mentor.
        #[arg(long)]
        mentor: bool,
    },
}
