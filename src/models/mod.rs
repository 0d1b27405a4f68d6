mod question;
mod report;

pub(crate) use question::Record;
pub use question::Question;
pub use report::Report;
