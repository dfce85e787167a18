// AI advisor reports: fundraising guidance, competitor analysis, investor
// matching, financial model, marketing strategy. All JSON endpoints — model
// output runs through the normalizer and falls back per advisor kind.

pub mod handlers;
pub mod prompts;
