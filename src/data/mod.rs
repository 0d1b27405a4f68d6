mod loader;

pub use loader::{
    load_questions_from_csv, load_questions_from_reader, LoadError, DEFAULT_QUESTIONS_PATH,
};
