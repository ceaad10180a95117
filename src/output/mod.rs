//! Flat-file output for the generated tables

mod csv;

pub use self::csv::{
    write_events_csv, write_sessions_csv, write_users_csv, DATE_FORMAT, TIMESTAMP_FORMAT,
};
