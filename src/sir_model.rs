pub mod sir_states;
pub use sir_states::*;

pub mod person;
pub use person::*;

pub mod ring;
pub use ring::*;

pub mod vaccination;
pub use vaccination::*;

pub mod sir_writer;
pub use sir_writer::*;
