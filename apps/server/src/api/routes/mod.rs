pub mod mtg;
