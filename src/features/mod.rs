pub mod countries;
pub mod locations;
pub mod tags;
