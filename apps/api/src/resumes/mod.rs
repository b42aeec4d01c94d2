// Resume upload and AI improvement.
// The only LLM call site is service::improve_resume; prompts live in prompts.rs.

pub mod extract;
pub mod handlers;
pub mod prompts;
pub mod service;
