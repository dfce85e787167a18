// Pitch asset generation: tagline, spoken pitches, deck outline, outreach copy.
// All LLM calls go through llm_client — no direct Gradient AI calls here.

pub mod handlers;
pub mod prompts;
