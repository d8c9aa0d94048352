// Utility modules
// Calendar-day arithmetic shared by the grid mapper and the selection machine

pub mod date;
