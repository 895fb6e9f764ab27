use crate::models::record::Record;
use crate::models::slot::Slot;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for dietlog
#[derive(Parser)]
#[command(
    name = "dietlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track daily meals per person in SQLite, from the terminal or over REST",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Free-text value for each meal slot; omitted slots stay empty.
#[derive(Args, Debug, Clone, Default)]
pub struct SlotArgs {
    #[arg(long)]
    pub morning: Option<String>,
    #[arg(long = "pre-breakfast")]
    pub pre_breakfast: Option<String>,
    #[arg(long)]
    pub breakfast: Option<String>,
    #[arg(long)]
    pub noon: Option<String>,
    #[arg(long)]
    pub lunch: Option<String>,
    #[arg(long)]
    pub evening: Option<String>,
    #[arg(long)]
    pub dinner: Option<String>,
    #[arg(long = "post-dinner")]
    pub post_dinner: Option<String>,
    #[arg(long)]
    pub night: Option<String>,
}

impl SlotArgs {
    fn get(&self, slot: Slot) -> Option<&String> {
        match slot {
            Slot::Morning => self.morning.as_ref(),
            Slot::PreBreakfast => self.pre_breakfast.as_ref(),
            Slot::Breakfast => self.breakfast.as_ref(),
            Slot::Noon => self.noon.as_ref(),
            Slot::Lunch => self.lunch.as_ref(),
            Slot::Evening => self.evening.as_ref(),
            Slot::Dinner => self.dinner.as_ref(),
            Slot::PostDinner => self.post_dinner.as_ref(),
            Slot::Night => self.night.as_ref(),
        }
    }

    /// Build a full record from name, date and the given slots.
    pub fn to_record(&self, id: i64, name: &str, date: &str) -> Record {
        let mut record = Record::new(name, date);
        record.id = id;
        for slot in Slot::ALL {
            if let Some(v) = self.get(slot) {
                *record.slot_mut(slot) = v.clone();
            }
        }
        record
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Add records: one from arguments, or a batch from a JSON document
    Add {
        /// Person name (Barathi, Durga, Indira, Sakthi)
        #[arg(required_unless_present = "file")]
        name: Option<String>,

        /// Date (YYYY-MM-DD)
        #[arg(required_unless_present = "file")]
        date: Option<String>,

        #[command(flatten)]
        slots: SlotArgs,

        /// JSON file shaped as {"data": [...]}; "-" reads stdin
        #[arg(long = "file", short = 'f', conflicts_with_all = ["name", "date"])]
        file: Option<String>,
    },

    /// List records from today over the next N days
    List {
        /// Window in days (default: window_days from config)
        #[arg(long = "days", short = 'd')]
        days: Option<u32>,

        /// Print the REST list response as JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// Show one record by id
    Get {
        id: i64,

        #[arg(long = "json")]
        json: bool,
    },

    /// Replace a record by id (all slots are rewritten)
    Update {
        id: i64,

        /// Person name
        name: String,

        /// Date (YYYY-MM-DD)
        date: String,

        #[command(flatten)]
        slots: SlotArgs,
    },

    /// Delete a record by id
    Del { id: i64 },

    /// Run the REST API server
    Serve {
        /// Port (default: port from config, or DIETLOG_PORT)
        #[arg(long = "port", short = 'p')]
        port: Option<u16>,
    },
}
