pub mod coerce;

pub mod error;
pub use error::PromptError;

pub mod options;
pub use options::{BoolOptions, ChooseOptions, Decoration, DoubleOptions, IntOptions, PromptOptions};

pub mod reader;
pub use reader::LineReader;

pub mod sanitize;
pub use sanitize::{DesiredType, FilterErrorNot, Sanitize, Validator};

pub mod terminal;
pub use terminal::{Terminal, Verdict};
