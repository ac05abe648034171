//! Lesson and quiz text extraction
//!
//! Pure input-to-string transforms: PDF files, UTF-8 text files, web pages,
//! and the regex-based question extractor. No state is kept here.

pub mod pdf;
pub mod questions;
pub mod text;
pub mod web;

pub use pdf::read_pdf;
pub use questions::extract_questions;
pub use text::read_txt;
pub use web::fetch_page_text;
