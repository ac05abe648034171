//! Browser automation
//!
//! Launches a Chromium session and drives the e-learning site's login and
//! quiz forms. Shares no in-process state with the quiz session; answers
//! arrive as a precomputed id-to-text mapping.

pub mod automator;
pub mod launch;

pub use automator::QuizAutomator;
pub use launch::launch_browser;
