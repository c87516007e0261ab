// Module for command implementations

pub mod prompt;
