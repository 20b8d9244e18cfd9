pub mod columns;
pub mod grain;
pub mod rental_table;
pub mod temporal_key;
pub mod weather_condition;
