//! Language data and analysis shared by both backends.

pub mod clitics;
pub mod gazetteer;
pub mod glossary;
pub mod lexicon;
pub mod morph;
pub mod tagger;

pub use lexicon::Lexicon;
