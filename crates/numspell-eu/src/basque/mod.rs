// Basque language data

pub mod constants;
