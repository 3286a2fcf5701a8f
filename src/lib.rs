//! Compare three machine translation backends on the same input.
//!
//! The core is [`application::compare::translate_all`], which fans one text
//! out to the BART, Google and Seq2Seq endpoints and folds whatever succeeds
//! into a [`domain::model::TranslationResults`].

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod presentation;
pub mod state;
