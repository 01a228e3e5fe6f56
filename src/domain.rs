pub mod calendar_date;
pub mod date_range;
pub mod registry;
pub mod report;
pub mod reservation;
pub mod room;
pub mod utils;
