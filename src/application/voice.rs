//! Voice command interpretation
//!
//! Plain substring matching on the lower-cased transcript. Order matters: the
//! first intent whose keyword occurs wins.

use serde::{Deserialize, Serialize};

/// What a transcript asks for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoiceIntent {
    /// Run the optimization scan
    Optimize,
    /// Activate the quantum shield
    Shield,
    /// Open the analysis page
    Analysis,
    /// Nothing recognised; echo the lower-cased transcript back
    Echo(String),
}

const OPTIMIZE_KEYWORDS: [&str; 2] = ["optimize", "scan"];
const SHIELD_KEYWORDS: [&str; 2] = ["shield", "protect"];
const ANALYSIS_KEYWORDS: [&str; 1] = ["analysis"];

/// Maps a transcript to an intent
///
/// # Examples
/// ```
/// use algorhythm_client::application::voice::{interpret, VoiceIntent};
/// assert_eq!(interpret("Optimize the shield"), VoiceIntent::Optimize);
/// assert_eq!(interpret("protect me"), VoiceIntent::Shield);
/// ```
pub fn interpret(transcript: &str) -> VoiceIntent {
    let cmd = transcript.to_lowercase();
    let has = |keywords: &[&str]| keywords.iter().any(|k| cmd.contains(k));

    if has(&OPTIMIZE_KEYWORDS) {
        VoiceIntent::Optimize
    } else if has(&SHIELD_KEYWORDS) {
        VoiceIntent::Shield
    } else if has(&ANALYSIS_KEYWORDS) {
        VoiceIntent::Analysis
    } else {
        VoiceIntent::Echo(cmd)
    }
}
