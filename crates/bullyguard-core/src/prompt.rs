//! Instruction template for the classification provider
//!
//! The wording is versioned: changing it changes provider behavior, so it is
//! a configuration decision rather than a code edit. Deployments override it
//! through the provider config; the constant here is only the default.

/// v1 wording requesting the four-line reply format
pub const INSTRUCTION_V1: &str = "You are an expert in online safety. \
Given the following message, classify whether it is cyberbullying or not. \
Respond with the following format:\n\
Cyberbullying: <Yes/No>\n\
Confidence: <0-100>%\n\
Explanation: <short explanation>\n\
Highlights: <comma-separated keywords/phrases>";

/// Default instruction sent when the config does not override it
pub const DEFAULT_INSTRUCTION: &str = INSTRUCTION_V1;

/// Sampling temperature for classification calls. Zero keeps replies close
/// to the requested format.
pub const TEMPERATURE: f64 = 0.0;
